//! Button/input/link style extraction with composite-key deduplication.
//!
//! The in-page snippet samples a bounded prefix of matching elements
//! (buttons: first 10, links: first 20); this module keeps the first-seen
//! representative per composite key and enforces the unique caps.

use std::collections::HashSet;

use dsx_protocol::{ButtonStyle, ComponentSection, InputStyle, LinkStyle};

use crate::extract::snapshot::{ComponentSnapshot, RawButton, RawInput, RawLink};

const MAX_UNIQUE_INPUTS: usize = 8;
const MAX_UNIQUE_LINKS: usize = 8;

fn none_if_empty(value: &str) -> Option<String> {
	let trimmed = value.trim();
	if trimmed.is_empty() || trimmed == "none" { None } else { Some(trimmed.to_string()) }
}

fn button_key(raw: &RawButton) -> String {
	format!(
		"{}|{}|{}|{}|{}|{}",
		raw.background_color, raw.color, raw.border_radius, raw.padding, raw.font_size, raw.font_weight
	)
}

fn input_key(raw: &RawInput) -> String {
	format!("{}|{}|{}|{}", raw.background_color, raw.border, raw.border_radius, raw.padding)
}

fn link_key(raw: &RawLink) -> String {
	format!("{}|{}|{}", raw.color, raw.text_decoration, raw.font_weight)
}

fn button_style(raw: &RawButton, variant: Option<&str>) -> ButtonStyle {
	ButtonStyle {
		background_color: raw.background_color.clone(),
		color: raw.color.clone(),
		border_radius: raw.border_radius.clone(),
		padding: raw.padding.clone(),
		font_size: raw.font_size.clone(),
		font_weight: raw.font_weight.clone(),
		border: none_if_empty(&raw.border),
		box_shadow: none_if_empty(&raw.box_shadow),
		variant: variant.map(ToString::to_string),
	}
}

fn link_style(raw: &RawLink, variant: Option<&str>) -> LinkStyle {
	LinkStyle {
		color: raw.color.clone(),
		text_decoration: raw.text_decoration.clone(),
		font_weight: raw.font_weight.clone(),
		variant: variant.map(ToString::to_string),
	}
}

/// Dedupes one snapshot's samples into the component section.
pub(crate) fn analyze(snapshot: &ComponentSnapshot) -> ComponentSection {
	let mut seen = HashSet::new();
	let buttons = snapshot
		.buttons
		.iter()
		.filter(|raw| seen.insert(button_key(raw)))
		.map(|raw| button_style(raw, None))
		.collect();

	let mut seen = HashSet::new();
	let inputs = snapshot
		.inputs
		.iter()
		.filter(|raw| seen.insert(input_key(raw)))
		.take(MAX_UNIQUE_INPUTS)
		.map(|raw| InputStyle {
			background_color: raw.background_color.clone(),
			color: raw.color.clone(),
			border: raw.border.clone(),
			border_radius: raw.border_radius.clone(),
			padding: raw.padding.clone(),
			font_size: raw.font_size.clone(),
		})
		.collect();

	let mut seen = HashSet::new();
	let links = snapshot
		.links
		.iter()
		.filter(|raw| seen.insert(link_key(raw)))
		.take(MAX_UNIQUE_LINKS)
		.map(|raw| link_style(raw, None))
		.collect();

	ComponentSection { buttons, inputs, links }
}

/// Appends dark-pass buttons/links whose composite key was not seen in the
/// baseline, tagged with the `dark` variant.
pub(crate) fn append_dark_variants(base: &mut ComponentSection, dark: &ComponentSnapshot) {
	let known: HashSet<String> = base
		.buttons
		.iter()
		.map(|b| {
			format!(
				"{}|{}|{}|{}|{}|{}",
				b.background_color, b.color, b.border_radius, b.padding, b.font_size, b.font_weight
			)
		})
		.collect();
	for raw in &dark.buttons {
		if !known.contains(&button_key(raw)) {
			base.buttons.push(button_style(raw, Some("dark")));
		}
	}

	let known: HashSet<String> = base
		.links
		.iter()
		.map(|l| format!("{}|{}|{}", l.color, l.text_decoration, l.font_weight))
		.collect();
	let mut appended = HashSet::new();
	for raw in &dark.links {
		let key = link_key(raw);
		if !known.contains(&key) && appended.insert(key) {
			base.links.push(link_style(raw, Some("dark")));
		}
	}
}
