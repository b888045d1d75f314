//! Color palette token types.

use serde::{Deserialize, Serialize};

use crate::types::Confidence;

/// One perceptually-distinct color retained in the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorToken {
	/// Representative raw value as observed in a computed style.
	pub color: String,
	/// Canonical 6-hex lowercase form used as the identity key.
	pub normalized: String,
	/// Number of visible elements that carried this color.
	pub count: u32,
	pub confidence: Confidence,
	/// Short class/id labels of where the color was seen (at most 3).
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub sources: Vec<String>,
}

/// Brand roles inferred from `primary`/`secondary` class markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColors {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub primary: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secondary: Option<String>,
}

/// A design-token custom property declared on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssVariable {
	/// Declared name, including the `--` prefix.
	pub name: String,
	/// Raw declared value.
	pub value: String,
	pub normalized: String,
}

/// Everything the color engine produces for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSection {
	pub semantic: SemanticColors,
	pub palette: Vec<ColorToken>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub css_variables: Vec<CssVariable>,
}
