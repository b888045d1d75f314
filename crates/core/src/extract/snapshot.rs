//! Raw records the in-page snippets deserialize into.
//!
//! These mirror the JSON shapes produced by [`super::js`] one-for-one and
//! exist only for the duration of a single extraction pass.

use std::collections::HashMap;

use serde::Deserialize;

/// One visible element's color observation, in DOM-walk order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementColorRecord {
	/// Concatenated class attribute and id.
	pub class_id: String,
	pub background: String,
	pub foreground: String,
}

/// A custom property declaration as found in an accessible stylesheet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCssVariable {
	pub name: String,
	pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSnapshot {
	pub total_visible: u32,
	pub elements: Vec<ElementColorRecord>,
	#[serde(default)]
	pub css_variables: Vec<RawCssVariable>,
}

/// One text-bearing element's computed font properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyRecord {
	pub tag: String,
	#[serde(default)]
	pub role: String,
	#[serde(default)]
	pub has_href: bool,
	#[serde(default)]
	pub class_id: String,
	pub family: String,
	pub size: String,
	pub weight: String,
	pub style: String,
	#[serde(default)]
	pub decoration: String,
	#[serde(default)]
	pub letter_spacing: String,
	#[serde(default)]
	pub transform: String,
	#[serde(default)]
	pub line_height: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySnapshot {
	pub records: Vec<TypographyRecord>,
	#[serde(default)]
	pub sources: Vec<String>,
	/// Family names declared by `@font-face` rules in accessible sheets.
	#[serde(default)]
	pub font_face_families: Vec<String>,
}

/// Value-to-count buckets for the frequency extractors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
	#[serde(default)]
	pub spacing: HashMap<String, u32>,
	#[serde(default)]
	pub radius: HashMap<String, u32>,
	#[serde(default)]
	pub shadows: HashMap<String, u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawButton {
	pub background_color: String,
	pub color: String,
	pub border_radius: String,
	pub padding: String,
	pub font_size: String,
	pub font_weight: String,
	#[serde(default)]
	pub border: String,
	#[serde(default)]
	pub box_shadow: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
	pub background_color: String,
	pub color: String,
	#[serde(default)]
	pub border: String,
	pub border_radius: String,
	pub padding: String,
	pub font_size: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLink {
	pub color: String,
	#[serde(default)]
	pub text_decoration: String,
	#[serde(default)]
	pub font_weight: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSnapshot {
	#[serde(default)]
	pub buttons: Vec<RawButton>,
	#[serde(default)]
	pub inputs: Vec<RawInput>,
	#[serde(default)]
	pub links: Vec<RawLink>,
}

/// Haystacks for breakpoint parsing and signature detection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalsSnapshot {
	#[serde(default)]
	pub media_texts: Vec<String>,
	#[serde(default)]
	pub stylesheet_hrefs: Vec<String>,
	#[serde(default)]
	pub class_sample: String,
	#[serde(default)]
	pub head_sample: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasProbe {
	pub canvas_count: u32,
	pub has_webgl: bool,
	pub text_chars: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLogo {
	pub src: Option<String>,
	pub alt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFavicon {
	pub href: String,
	pub rel: String,
	pub sizes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsSnapshot {
	pub logo: Option<RawLogo>,
	#[serde(default)]
	pub favicons: Vec<RawFavicon>,
}

/// One color declaration from a matched `:hover`/`:focus` rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRule {
	pub pseudo: String,
	pub property: String,
	pub value: String,
}
