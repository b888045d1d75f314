//! The aggregate result of one extraction run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::ColorSection;
use crate::component::ComponentSection;
use crate::types::Confidence;
use crate::typography::TypographySection;

/// A counted raw value shared by the spacing/radius/shadow extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyToken {
	/// Raw computed value, e.g. `"8px"` or a full `box-shadow` string.
	pub value: String,
	pub count: u32,
	pub confidence: Confidence,
}

/// One responsive breakpoint observed in media-query rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
	pub px: u32,
	pub count: u32,
}

/// A detected icon library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSystem {
	pub name: String,
	pub confidence: Confidence,
}

/// A detected CSS/JS framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framework {
	pub name: String,
	pub confidence: Confidence,
}

/// Best-effort logo reference found in the page header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub src: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alt: Option<String>,
}

/// One favicon `<link>` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favicon {
	pub href: String,
	pub rel: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sizes: Option<String>,
}

/// Everything one extraction run produced.
///
/// Owned exclusively by the caller once assembled; the pipeline never
/// retains or mutates a result after handing it out. The field set is a
/// compatibility surface consumed by presentation and persistence
/// collaborators and is preserved field-for-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
	/// Final URL after any redirects.
	pub url: String,
	pub extracted_at: DateTime<Utc>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo: Option<Logo>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub favicons: Vec<Favicon>,
	pub colors: ColorSection,
	pub typography: TypographySection,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub spacing: Vec<FrequencyToken>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub border_radius: Vec<FrequencyToken>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub shadows: Vec<FrequencyToken>,
	pub components: ComponentSection,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub breakpoints: Vec<Breakpoint>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon_system: Option<IconSystem>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub frameworks: Vec<Framework>,
	/// Informational caveat, e.g. when the page looks canvas-rendered.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub is_canvas_only: Option<bool>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn result_round_trips_with_camel_case_fields() {
		let result = ExtractionResult {
			url: "https://example.com".into(),
			extracted_at: Utc::now(),
			logo: None,
			favicons: vec![],
			colors: ColorSection::default(),
			typography: TypographySection::default(),
			spacing: vec![FrequencyToken {
				value: "8px".into(),
				count: 12,
				confidence: Confidence::High,
			}],
			border_radius: vec![],
			shadows: vec![],
			components: ComponentSection::default(),
			breakpoints: vec![Breakpoint { px: 768, count: 4 }],
			icon_system: None,
			frameworks: vec![],
			note: None,
			is_canvas_only: None,
		};

		let json = serde_json::to_value(&result).unwrap();
		assert!(json.get("extractedAt").is_some());
		assert!(json.get("borderRadius").is_none(), "empty collections are omitted");
		assert_eq!(json["breakpoints"][0]["px"], 768);

		let back: ExtractionResult = serde_json::from_value(json).unwrap();
		assert_eq!(back.spacing.len(), 1);
	}
}
