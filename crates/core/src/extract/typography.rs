//! Typography clustering engine.
//!
//! Groups text-bearing elements by their exact computed
//! `(family, size, weight, style)` tuple. The first element producing a key
//! creates the cluster and captures the secondary properties; every later
//! element only contributes a context label.

use std::collections::HashMap;

use dsx_protocol::{Confidence, TypographySection, TypographyStyle};

use crate::extract::snapshot::{TypographyRecord, TypographySnapshot};

fn is_heading(tag: &str, role: &str) -> bool {
	matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6") || role == "heading"
}

fn is_button(record: &TypographyRecord) -> bool {
	let class = record.class_id.to_ascii_lowercase();
	record.tag == "button" || record.role == "button" || class.contains("btn") || class.contains("button")
}

fn is_link(record: &TypographyRecord) -> bool {
	let class = record.class_id.to_ascii_lowercase();
	record.tag == "a" && (record.has_href || class.contains("link"))
}

fn context_label(record: &TypographyRecord) -> String {
	if is_button(record) {
		"button".to_string()
	} else if is_link(record) {
		"a".to_string()
	} else {
		record.tag.to_ascii_lowercase()
	}
}

fn classify(record: &TypographyRecord) -> Confidence {
	let class = record.class_id.to_ascii_lowercase();
	if is_heading(&record.tag, &record.role) || is_button(record) || record.tag == "a" || class.contains("hero") {
		Confidence::High
	} else {
		Confidence::Medium
	}
}

fn rem_size(font_size: &str) -> f64 {
	font_size.trim().strip_suffix("px").and_then(|px| px.trim().parse::<f64>().ok()).map_or(0.0, |px| px / 16.0)
}

/// Declared `@font-face` families count as sources only when some visible
/// element's computed family list actually references them.
fn visible_font_faces(snapshot: &TypographySnapshot, sources: &mut Vec<String>) {
	for family in &snapshot.font_face_families {
		let needle = family.to_ascii_lowercase();
		let visible = snapshot.records.iter().any(|record| record.family.to_ascii_lowercase().contains(&needle));
		if visible && !sources.contains(family) {
			sources.push(family.clone());
		}
	}
}

/// Clusters one snapshot's records, preserving first-seen cluster order and
/// first-seen context order within each cluster.
pub fn cluster(snapshot: &TypographySnapshot) -> TypographySection {
	let mut index: HashMap<(String, String, String, String), usize> = HashMap::new();
	let mut styles: Vec<TypographyStyle> = Vec::new();

	for record in &snapshot.records {
		let key = (record.family.clone(), record.size.clone(), record.weight.clone(), record.style.clone());
		let label = context_label(record);

		match index.get(&key) {
			Some(&i) => {
				let style = &mut styles[i];
				if !style.contexts.contains(&label) {
					style.contexts.push(label);
				}
				// An upgrade to high sticks; clusters never downgrade.
				if classify(record) == Confidence::High {
					style.confidence = Confidence::High;
				}
			}
			None => {
				index.insert(key, styles.len());
				styles.push(TypographyStyle {
					font_family: record.family.clone(),
					font_size: record.size.clone(),
					font_size_rem: rem_size(&record.size),
					font_weight: record.weight.clone(),
					font_style: record.style.clone(),
					text_decoration: record.decoration.clone(),
					letter_spacing: record.letter_spacing.clone(),
					text_transform: record.transform.clone(),
					line_height: record.line_height.clone(),
					contexts: vec![label],
					confidence: classify(record),
				});
			}
		}
	}

	let mut sources = snapshot.sources.clone();
	visible_font_faces(snapshot, &mut sources);

	TypographySection { styles, sources }
}
