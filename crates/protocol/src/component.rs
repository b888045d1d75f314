//! Component style token types.

use serde::{Deserialize, Serialize};

/// Defining styles of one button variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
	pub background_color: String,
	pub color: String,
	pub border_radius: String,
	pub padding: String,
	pub font_size: String,
	pub font_weight: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub border: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub box_shadow: Option<String>,
	/// Set to `"dark"` for styles observed only under the dark-mode pass.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub variant: Option<String>,
}

/// Defining styles of one input/textarea/select variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStyle {
	pub background_color: String,
	pub color: String,
	pub border: String,
	pub border_radius: String,
	pub padding: String,
	pub font_size: String,
}

/// Defining styles of one anchor variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStyle {
	pub color: String,
	pub text_decoration: String,
	pub font_weight: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub variant: Option<String>,
}

/// Deduplicated component styles for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSection {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub buttons: Vec<ButtonStyle>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub inputs: Vec<InputStyle>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub links: Vec<LinkStyle>,
}
