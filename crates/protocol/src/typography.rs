//! Typography cluster types.

use serde::{Deserialize, Serialize};

use crate::types::Confidence;

/// One font-style cluster, keyed by the exact computed
/// `(family, size, weight, style)` tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyStyle {
	pub font_family: String,
	/// Computed size as reported by the page, e.g. `"16px"`.
	pub font_size: String,
	/// Derived rem size (`px / 16`).
	pub font_size_rem: f64,
	pub font_weight: String,
	pub font_style: String,
	pub text_decoration: String,
	pub letter_spacing: String,
	pub text_transform: String,
	pub line_height: String,
	/// Context labels in first-seen order, deduplicated.
	pub contexts: Vec<String>,
	pub confidence: Confidence,
}

/// Typography clusters plus external font origins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySection {
	pub styles: Vec<TypographyStyle>,
	/// Hosts of external font stylesheets (Google Fonts, Typekit, ...).
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub sources: Vec<String>,
}
