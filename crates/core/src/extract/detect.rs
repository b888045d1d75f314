//! Breakpoint parsing and static signature detection.
//!
//! Icon systems and frameworks are recognized by fixed signature tables
//! matched against serialized markup, class samples, and stylesheet
//! references. Presence is binary with fixed high confidence; there is no
//! scoring.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;

use dsx_protocol::{Breakpoint, Confidence, Framework, IconSystem};

use crate::extract::snapshot::SignalsSnapshot;

static MEDIA_PX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)px").expect("MEDIA_PX_RE should compile"));

fn signature_table(entries: &[(&'static str, &str)]) -> Vec<(&'static str, Regex)> {
	entries
		.iter()
		.map(|&(name, pattern)| (name, Regex::new(pattern).expect("signature pattern should compile")))
		.collect()
}

static ICON_SIGNATURES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
	signature_table(&[
		("Font Awesome", r"(?i)font-?awesome|\bfa[srlbd]?-"),
		("Material Icons", r"(?i)material-icons|material-symbols"),
		("Lucide", r"(?i)\blucide\b"),
		("Feather", r"(?i)feather-icons|data-feather"),
		("Heroicons", r"(?i)heroicon"),
		("Bootstrap Icons", r"(?i)bootstrap-icons|\bbi-"),
		("Ionicons", r"(?i)ionicon"),
	])
});

static FRAMEWORK_SIGNATURES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
	signature_table(&[
		("Bootstrap", r"(?i)bootstrap(\.min)?\.css|\bnavbar-expand|\bcol-(xs|sm|md|lg|xl)-"),
		("Tailwind CSS", r"(?i)tailwind|\b(sm|md|lg|xl|2xl):[a-z]|\b(flex|grid) (items-center|gap-\d)"),
		("Bulma", r"(?i)bulma(\.min)?\.css|\bis-primary\b.*\bcolumns\b"),
		("Foundation", r"(?i)foundation(\.min)?\.css"),
		("Material UI", r"Mui[A-Z][A-Za-z]+-root"),
		("Chakra UI", r"(?i)\bchakra-"),
		("Ant Design", r"(?i)\bant-(btn|layout|menu|input)"),
	])
});

/// Pixel values mentioned in media-query rule text, counted and sorted
/// ascending. Cross-origin sheets never reach this point; the collection
/// snippet skips them.
pub(crate) fn breakpoints(media_texts: &[String]) -> Vec<Breakpoint> {
	let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
	for text in media_texts {
		for captures in MEDIA_PX_RE.captures_iter(text) {
			if let Ok(px) = captures[1].parse::<u32>() {
				*counts.entry(px).or_insert(0) += 1;
			}
		}
	}
	counts.into_iter().map(|(px, count)| Breakpoint { px, count }).collect()
}

fn haystack(snapshot: &SignalsSnapshot) -> String {
	let mut combined = String::new();
	combined.push_str(&snapshot.class_sample);
	combined.push(' ');
	combined.push_str(&snapshot.head_sample);
	for href in &snapshot.stylesheet_hrefs {
		combined.push(' ');
		combined.push_str(href);
	}
	combined
}

/// First icon-system signature that matches, if any.
pub(crate) fn icon_system(snapshot: &SignalsSnapshot) -> Option<IconSystem> {
	let combined = haystack(snapshot);
	ICON_SIGNATURES.iter().find_map(|(name, re)| {
		re.is_match(&combined).then(|| IconSystem {
			name: (*name).to_string(),
			confidence: Confidence::High,
		})
	})
}

/// Every framework signature that matches.
pub(crate) fn frameworks(snapshot: &SignalsSnapshot) -> Vec<Framework> {
	let combined = haystack(snapshot);
	FRAMEWORK_SIGNATURES
		.iter()
		.filter_map(|(name, re)| {
			re.is_match(&combined).then(|| Framework {
				name: (*name).to_string(),
				confidence: Confidence::High,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn signals(class_sample: &str, hrefs: &[&str]) -> SignalsSnapshot {
		SignalsSnapshot {
			media_texts: vec![],
			stylesheet_hrefs: hrefs.iter().map(ToString::to_string).collect(),
			class_sample: class_sample.into(),
			head_sample: String::new(),
		}
	}

	#[test]
	fn breakpoints_sort_ascending_with_counts() {
		let texts = vec![
			"(min-width: 768px)".to_string(),
			"(max-width: 1024px)".to_string(),
			"screen and (min-width: 768px)".to_string(),
		];
		let found = breakpoints(&texts);
		assert_eq!(found, vec![Breakpoint { px: 768, count: 2 }, Breakpoint { px: 1024, count: 1 }]);
	}

	#[test]
	fn breakpoints_ignore_unitless_numbers() {
		let texts = vec!["(min-resolution: 2dppx)".to_string(), "(orientation: landscape)".to_string()];
		assert!(breakpoints(&texts).is_empty());
	}

	#[test]
	fn signature_tables_compile_up_front() {
		assert_eq!(ICON_SIGNATURES.len(), 7);
		assert_eq!(FRAMEWORK_SIGNATURES.len(), 7);
	}

	#[test]
	fn font_awesome_detected_from_classes() {
		let detected = icon_system(&signals("fa-solid fa-user nav-item", &[])).unwrap();
		assert_eq!(detected.name, "Font Awesome");
		assert_eq!(detected.confidence, Confidence::High);
	}

	#[test]
	fn icon_detection_is_none_without_signature() {
		assert!(icon_system(&signals("hero card footer", &[])).is_none());
	}

	#[test]
	fn frameworks_detected_from_stylesheet_href() {
		let detected = frameworks(&signals("", &["https://cdn.example.com/bootstrap.min.css"]));
		assert_eq!(detected.len(), 1);
		assert_eq!(detected[0].name, "Bootstrap");
	}

	#[test]
	fn tailwind_detected_from_responsive_utilities() {
		let detected = frameworks(&signals("md:flex lg:grid-cols-3 p-4", &[]));
		assert!(detected.iter().any(|f| f.name == "Tailwind CSS"));
	}
}
