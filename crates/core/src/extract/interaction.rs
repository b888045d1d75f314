//! Hover/focus rule pass.
//!
//! Colors declared in matched `:hover`/`:focus` rules join the palette with
//! medium confidence, deduplicated by exact normalized value only. The
//! contrast with the main palette's perceptual dedup is intentional,
//! inherited behavior.

use std::collections::HashMap;

use dsx_protocol::{ColorToken, Confidence};

use crate::extract::color::normalize;
use crate::extract::snapshot::InteractionRule;

/// Folds raw rule declarations into exact-deduped medium-confidence tokens,
/// labeled with the pseudo-classes they came from.
pub(crate) fn tokens(rules: &[InteractionRule]) -> Vec<ColorToken> {
	let mut order: Vec<String> = Vec::new();
	let mut tokens: HashMap<String, ColorToken> = HashMap::new();

	for rule in rules {
		let Some(normalized) = normalize(&rule.value) else { continue };
		let label = format!(":{}", rule.pseudo);
		let token = tokens.entry(normalized.clone()).or_insert_with(|| {
			order.push(normalized.clone());
			ColorToken {
				color: rule.value.clone(),
				normalized,
				count: 0,
				confidence: Confidence::Medium,
				sources: Vec::new(),
			}
		});
		token.count += 1;
		if !token.sources.contains(&label) {
			token.sources.push(label);
		}
	}

	order.into_iter().filter_map(|key| tokens.remove(&key)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rule(pseudo: &str, property: &str, value: &str) -> InteractionRule {
		InteractionRule {
			pseudo: pseudo.into(),
			property: property.into(),
			value: value.into(),
		}
	}

	#[test]
	fn declarations_fold_by_exact_normalized_value() {
		let tokens = tokens(&[
			rule("hover", "background-color", "rgb(37, 99, 235)"),
			rule("hover", "color", "#2563eb"),
			rule("focus", "border-color", "rgb(37, 99, 235)"),
		]);
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].count, 3);
		assert_eq!(tokens[0].confidence, Confidence::Medium);
		assert_eq!(tokens[0].sources, vec![":hover", ":focus"]);
	}

	#[test]
	fn near_but_distinct_values_stay_separate() {
		let tokens = tokens(&[
			rule("hover", "color", "#2563eb"),
			rule("hover", "color", "#2563ec"),
		]);
		assert_eq!(tokens.len(), 2, "this pass never merges perceptually");
	}

	#[test]
	fn unparseable_values_are_skipped() {
		let tokens = tokens(&[rule("hover", "color", "var(--accent)")]);
		assert!(tokens.is_empty());
	}
}
