//! Count/threshold/confidence extraction shared by spacing, radius, and
//! shadow tokens.

use std::collections::HashMap;

use dsx_protocol::{Confidence, FrequencyToken};

use crate::extract::snapshot::MetricsSnapshot;

/// Count cuts for one token kind: above `high` is high confidence, above
/// `medium` is medium, anything else low.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CountCuts {
	pub high: u32,
	pub medium: u32,
}

const SPACING_CUTS: CountCuts = CountCuts { high: 15, medium: 5 };
const RADIUS_CUTS: CountCuts = CountCuts { high: 10, medium: 3 };
const SHADOW_CUTS: CountCuts = CountCuts { high: 5, medium: 2 };

const SPACING_CAP: usize = 12;
const RADIUS_CAP: usize = 8;
const SHADOW_CAP: usize = 6;

fn classify(count: u32, cuts: CountCuts) -> Confidence {
	if count > cuts.high {
		Confidence::High
	} else if count > cuts.medium {
		Confidence::Medium
	} else {
		Confidence::Low
	}
}

/// Orders buckets by count descending (value ascending on ties, for
/// determinism) and caps the list length.
pub(crate) fn tokens_from_counts(counts: &HashMap<String, u32>, cuts: CountCuts, cap: usize) -> Vec<FrequencyToken> {
	let mut entries: Vec<(&String, u32)> = counts.iter().map(|(value, count)| (value, *count)).collect();
	entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
	entries
		.into_iter()
		.take(cap)
		.map(|(value, count)| FrequencyToken {
			value: value.clone(),
			count,
			confidence: classify(count, cuts),
		})
		.collect()
}

pub(crate) struct MetricTokens {
	pub spacing: Vec<FrequencyToken>,
	pub border_radius: Vec<FrequencyToken>,
	pub shadows: Vec<FrequencyToken>,
}

pub(crate) fn analyze(snapshot: &MetricsSnapshot) -> MetricTokens {
	MetricTokens {
		spacing: tokens_from_counts(&snapshot.spacing, SPACING_CUTS, SPACING_CAP),
		border_radius: tokens_from_counts(&snapshot.radius, RADIUS_CUTS, RADIUS_CAP),
		shadows: tokens_from_counts(&snapshot.shadows, SHADOW_CUTS, SHADOW_CAP),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn counts(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
		pairs.iter().map(|(v, c)| (v.to_string(), *c)).collect()
	}

	#[test]
	fn shadow_cuts_match_contract() {
		let tokens = tokens_from_counts(&counts(&[("a", 6), ("b", 3), ("c", 2)]), SHADOW_CUTS, SHADOW_CAP);
		assert_eq!(tokens[0].confidence, Confidence::High);
		assert_eq!(tokens[1].confidence, Confidence::Medium);
		assert_eq!(tokens[2].confidence, Confidence::Low);
	}

	#[test]
	fn radius_cuts_match_contract() {
		let tokens = tokens_from_counts(&counts(&[("8px", 11), ("4px", 4), ("2px", 3)]), RADIUS_CUTS, RADIUS_CAP);
		assert_eq!(tokens[0].confidence, Confidence::High);
		assert_eq!(tokens[1].confidence, Confidence::Medium);
		assert_eq!(tokens[2].confidence, Confidence::Low);
	}

	#[test]
	fn output_is_count_descending_and_capped() {
		let many: Vec<(String, u32)> = (0..20).map(|i| (format!("{i}px"), i)).collect();
		let map: HashMap<String, u32> = many.into_iter().collect();
		let tokens = tokens_from_counts(&map, SPACING_CUTS, SPACING_CAP);
		assert_eq!(tokens.len(), SPACING_CAP);
		assert!(tokens.windows(2).all(|w| w[0].count >= w[1].count));
	}

	#[test]
	fn ties_break_by_value_for_determinism() {
		let tokens = tokens_from_counts(&counts(&[("16px", 4), ("12px", 4)]), SPACING_CUTS, SPACING_CAP);
		assert_eq!(tokens[0].value, "12px");
		assert_eq!(tokens[1].value, "16px");
	}
}
