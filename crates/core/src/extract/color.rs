//! Color analysis engine.
//!
//! Turns the noisy per-element color stream of one snapshot into a small
//! deduplicated palette. Scoring biases toward brand-relevant elements,
//! ubiquitous low-signal colors are dropped as structural, and surviving
//! candidates are collapsed by perceptual RGB distance.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex_lite::Regex;

use dsx_protocol::{ColorSection, ColorToken, Confidence, CssVariable, SemanticColors};

use crate::extract::snapshot::{ColorSnapshot, ElementColorRecord, RawCssVariable};

/// Two colors closer than this (Euclidean RGB) are one token.
pub(crate) const PERCEPTUAL_MERGE_THRESHOLD: f64 = 15.0;

/// Usage share above which a color is suspect of being layout scaffolding.
const STRUCTURAL_USAGE_RATIO: f64 = 0.40;
/// Minimum score-per-occurrence for a ubiquitous color to stay semantic.
const STRUCTURAL_SCORE_RATIO: f64 = 1.2;

const HIGH_SCORE_CUT: u32 = 20;
const MEDIUM_SCORE_CUT: u32 = 5;
const MAX_SOURCES: usize = 3;

const CONTEXT_WEIGHTS: &[(&str, u32)] = &[
	("logo", 3),
	("brand", 3),
	("primary", 3),
	("hero", 2),
	("button", 2),
	("link", 2),
	("header", 2),
	("nav", 1),
];

static NAMED_COLORS: &[(&str, [u8; 3])] = &[
	("black", [0, 0, 0]),
	("white", [255, 255, 255]),
	("red", [255, 0, 0]),
	("green", [0, 128, 0]),
	("blue", [0, 0, 255]),
	("yellow", [255, 255, 0]),
	("orange", [255, 165, 0]),
	("purple", [128, 0, 128]),
	("gray", [128, 128, 128]),
	("grey", [128, 128, 128]),
	("silver", [192, 192, 192]),
	("navy", [0, 0, 128]),
	("teal", [0, 128, 128]),
	("maroon", [128, 0, 0]),
];

static HASHY_CLASS_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^(css|sc|jss|jsx|svelte|emotion)-|[0-9a-f]{5,}|--").expect("HASHY_CLASS_RE should compile"));

/// Custom-property name prefixes injected by frameworks, platforms, and
/// consent widgets rather than declared by the site's own design system.
const PRESET_VAR_PREFIXES: &[&str] = &["--bs-", "--mui-", "--chakra-", "--ant-", "--bulma-", "--wp--", "--system-"];
const COOKIE_VAR_PREFIXES: &[&str] = &["--cc-", "--cookie"];

/// Parses a computed color into an RGB triple, dropping alpha.
///
/// Fully transparent values return `None`: they are never counted.
pub(crate) fn parse_rgb(raw: &str) -> Option<[u8; 3]> {
	let value = raw.trim().to_ascii_lowercase();
	if value.is_empty() || value == "transparent" {
		return None;
	}

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex(hex);
	}

	if let Some(args) = value.strip_prefix("rgba(").or_else(|| value.strip_prefix("rgb(")) {
		let args = args.strip_suffix(')')?;
		let parts: Vec<&str> = args.split([',', '/', ' ']).filter(|p| !p.is_empty()).collect();
		if parts.len() < 3 {
			return None;
		}
		let channel = |s: &str| -> Option<u8> {
			let n: f64 = s.parse().ok()?;
			Some(n.clamp(0.0, 255.0).round() as u8)
		};
		let rgb = [channel(parts[0])?, channel(parts[1])?, channel(parts[2])?];
		if let Some(alpha) = parts.get(3) {
			let a: f64 = alpha.strip_suffix('%').map_or_else(|| alpha.parse(), |p| p.parse().map(|v: f64| v / 100.0)).ok()?;
			if a == 0.0 {
				return None;
			}
		}
		return Some(rgb);
	}

	NAMED_COLORS.iter().find(|(name, _)| *name == value).map(|(_, rgb)| *rgb)
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
	if !hex.is_ascii() {
		return None;
	}
	match hex.len() {
		3 => {
			let mut rgb = [0u8; 3];
			for (i, c) in hex.chars().enumerate() {
				let d = c.to_digit(16)? as u8;
				rgb[i] = d * 17;
			}
			Some(rgb)
		}
		6 | 8 => {
			let mut rgb = [0u8; 3];
			for (i, chunk) in rgb.iter_mut().enumerate() {
				*chunk = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
			}
			if hex.len() == 8 && u8::from_str_radix(&hex[6..8], 16).ok()? == 0 {
				return None;
			}
			Some(rgb)
		}
		_ => None,
	}
}

fn hex_of(rgb: [u8; 3]) -> String {
	format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Canonical 6-hex lowercase form, the palette identity key.
pub fn normalize(raw: &str) -> Option<String> {
	parse_rgb(raw).map(hex_of)
}

/// Euclidean distance over RGB channels; a simplified stand-in for a true
/// color-difference metric.
pub(crate) fn distance(a: [u8; 3], b: [u8; 3]) -> f64 {
	let dr = f64::from(a[0]) - f64::from(b[0]);
	let dg = f64::from(a[1]) - f64::from(b[1]);
	let db = f64::from(a[2]) - f64::from(b[2]);
	(dr * dr + dg * dg + db * db).sqrt()
}

fn context_score(class_id: &str) -> u32 {
	let haystack = class_id.to_ascii_lowercase();
	CONTEXT_WEIGHTS
		.iter()
		.filter(|(keyword, _)| haystack.contains(keyword))
		.map(|(_, weight)| *weight)
		.max()
		.unwrap_or(1)
}

fn source_label(class_id: &str) -> Option<String> {
	class_id
		.split_whitespace()
		.find(|token| token.len() <= 20 && !HASHY_CLASS_RE.is_match(token))
		.map(|token| token.to_string())
}

/// Occurrence floor: `max(3, floor(0.01 × totalVisibleElements))`.
fn occurrence_threshold(total_visible: u32) -> u32 {
	3.max((f64::from(total_visible) * 0.01).floor() as u32)
}

fn classify(score: u32) -> Confidence {
	if score > HIGH_SCORE_CUT {
		Confidence::High
	} else if score > MEDIUM_SCORE_CUT {
		Confidence::Medium
	} else {
		Confidence::Low
	}
}

struct Observation {
	raw: String,
	rgb: [u8; 3],
	normalized: String,
	count: u32,
	score: u32,
	sources: Vec<String>,
}

struct Candidate {
	token: ColorToken,
	rgb: [u8; 3],
}

/// Runs the full engine over one snapshot.
pub fn analyze(snapshot: &ColorSnapshot, site_about_cookies: bool) -> ColorSection {
	let mut order: Vec<String> = Vec::new();
	let mut observations: HashMap<String, Observation> = HashMap::new();
	let mut semantic = SemanticColors::default();

	for record in &snapshot.elements {
		let score = context_score(&record.class_id);
		for raw in [&record.background, &record.foreground] {
			let Some(rgb) = parse_rgb(raw) else { continue };
			let normalized = hex_of(rgb);
			let obs = observations.entry(normalized.clone()).or_insert_with(|| {
				order.push(normalized.clone());
				Observation {
					raw: raw.clone(),
					rgb,
					normalized,
					count: 0,
					score: 0,
					sources: Vec::new(),
				}
			});
			obs.count += 1;
			obs.score += score;
			if obs.sources.len() < MAX_SOURCES {
				if let Some(label) = source_label(&record.class_id) {
					if !obs.sources.contains(&label) {
						obs.sources.push(label);
					}
				}
			}
		}

		// Last matching element in DOM-walk order wins. Known quirk,
		// preserved deliberately.
		apply_semantic(&mut semantic, record);
	}

	let min_count = occurrence_threshold(snapshot.total_visible);
	let total = f64::from(snapshot.total_visible.max(1));

	let mut candidates: Vec<Candidate> = order
		.iter()
		.filter_map(|key| {
			let obs = &observations[key];
			if obs.count < min_count || is_structural(obs, total) {
				return None;
			}
			Some(Candidate {
				token: ColorToken {
					color: obs.raw.clone(),
					normalized: obs.normalized.clone(),
					count: obs.count,
					confidence: classify(obs.score),
					sources: obs.sources.clone(),
				},
				rgb: obs.rgb,
			})
		})
		.collect();

	candidates.sort_by(|a, b| b.token.count.cmp(&a.token.count).then_with(|| a.token.normalized.cmp(&b.token.normalized)));

	let palette = dedup_perceptual(candidates);
	let css_variables = collect_variables(&snapshot.css_variables, &palette, site_about_cookies);

	ColorSection {
		semantic,
		palette,
		css_variables,
	}
}

fn apply_semantic(semantic: &mut SemanticColors, record: &ElementColorRecord) {
	let haystack = record.class_id.to_ascii_lowercase();
	if !haystack.contains("primary") && !haystack.contains("secondary") {
		return;
	}
	let Some(color) = normalize(&record.background).or_else(|| normalize(&record.foreground)) else {
		return;
	};
	if haystack.contains("primary") {
		semantic.primary = Some(color.clone());
	}
	if haystack.contains("secondary") {
		semantic.secondary = Some(color);
	}
}

/// Structural means ubiquitous with low semantic signal: usage share above
/// 40% of elements while the accumulated score stays under `count × 1.2`.
fn is_structural(obs: &Observation, total_visible: f64) -> bool {
	let usage = f64::from(obs.count) / total_visible;
	usage > STRUCTURAL_USAGE_RATIO && f64::from(obs.score) < f64::from(obs.count) * STRUCTURAL_SCORE_RATIO
}

/// Left-to-right scan over count-descending candidates; each survivor
/// absorbs every later candidate within the perceptual threshold, keeping
/// the highest-count member as representative.
fn dedup_perceptual(candidates: Vec<Candidate>) -> Vec<ColorToken> {
	let mut absorbed = vec![false; candidates.len()];
	let mut palette = Vec::new();

	for i in 0..candidates.len() {
		if absorbed[i] {
			continue;
		}
		let mut token = candidates[i].token.clone();
		for j in (i + 1)..candidates.len() {
			if absorbed[j] {
				continue;
			}
			if distance(candidates[i].rgb, candidates[j].rgb) < PERCEPTUAL_MERGE_THRESHOLD {
				absorbed[j] = true;
				token.count += candidates[j].token.count;
			}
		}
		palette.push(token);
	}

	palette
}

fn variable_name_is_token(name: &str, site_about_cookies: bool) -> bool {
	let lower = name.to_ascii_lowercase();
	if !["color", "bg", "text", "brand"].iter().any(|needle| lower.contains(needle)) {
		return false;
	}
	if PRESET_VAR_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
		return false;
	}
	if !site_about_cookies && COOKIE_VAR_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
		return false;
	}
	true
}

/// Variables are dropped when perceptually close to a palette token, then
/// deduplicated among themselves by exact normalized value, keeping the
/// first-declared name. The asymmetry with the palette's perceptual dedup
/// is inherited behavior.
fn collect_variables(raw: &[RawCssVariable], palette: &[ColorToken], site_about_cookies: bool) -> Vec<CssVariable> {
	let palette_rgb: Vec<[u8; 3]> = palette.iter().filter_map(|t| parse_rgb(&t.normalized)).collect();
	let mut seen: HashSet<String> = HashSet::new();
	let mut out = Vec::new();

	for var in raw {
		if !variable_name_is_token(&var.name, site_about_cookies) {
			continue;
		}
		let Some(rgb) = parse_rgb(&var.value) else { continue };
		if palette_rgb.iter().any(|p| distance(*p, rgb) < PERCEPTUAL_MERGE_THRESHOLD) {
			continue;
		}
		let normalized = hex_of(rgb);
		if !seen.insert(normalized.clone()) {
			continue;
		}
		out.push(CssVariable {
			name: var.name.clone(),
			value: var.value.clone(),
			normalized,
		});
	}

	out
}

/// Merges variant-pass tokens into the baseline palette, dropping any token
/// within the perceptual threshold of an existing one.
pub(crate) fn merge_perceptual(base: &mut Vec<ColorToken>, extra: Vec<ColorToken>) {
	for token in extra {
		let Some(rgb) = parse_rgb(&token.normalized) else { continue };
		let duplicate = base
			.iter()
			.filter_map(|t| parse_rgb(&t.normalized))
			.any(|existing| distance(existing, rgb) < PERCEPTUAL_MERGE_THRESHOLD);
		if !duplicate {
			base.push(token);
		}
	}
}

/// Merges hover/focus tokens by exact normalized value only. Intentionally
/// not perceptual; see the interaction pass contract.
pub(crate) fn merge_exact(base: &mut Vec<ColorToken>, extra: Vec<ColorToken>) {
	let mut seen: HashSet<String> = base.iter().map(|t| t.normalized.clone()).collect();
	for token in extra {
		if seen.insert(token.normalized.clone()) {
			base.push(token);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(class_id: &str, background: &str, foreground: &str) -> ElementColorRecord {
		ElementColorRecord {
			class_id: class_id.into(),
			background: background.into(),
			foreground: foreground.into(),
		}
	}

	fn snapshot(total_visible: u32, elements: Vec<ElementColorRecord>) -> ColorSnapshot {
		ColorSnapshot {
			total_visible,
			elements,
			css_variables: vec![],
		}
	}

	#[test]
	fn normalization_is_idempotent() {
		for raw in ["rgb(59, 130, 246)", "#3B82F6", "#fff", "rgba(10, 20, 30, 0.5)", "white"] {
			let once = normalize(raw).unwrap();
			assert_eq!(normalize(&once).unwrap(), once, "{raw}");
		}
	}

	#[test]
	fn fully_transparent_is_never_counted() {
		assert_eq!(parse_rgb("rgba(0, 0, 0, 0)"), None);
		assert_eq!(parse_rgb("transparent"), None);
		assert_eq!(parse_rgb("rgba(10, 20, 30, 0)"), None);
		assert!(parse_rgb("rgba(10, 20, 30, 0.5)").is_some());
	}

	#[test]
	fn threshold_is_max_of_three_and_one_percent() {
		assert_eq!(occurrence_threshold(100), 3);
		assert_eq!(occurrence_threshold(1000), 10);
		assert_eq!(occurrence_threshold(1999), 19);
	}

	#[test]
	fn nine_of_one_thousand_excluded_ten_included() {
		let mut elements = Vec::new();
		for _ in 0..9 {
			elements.push(record("card", "rgb(59, 130, 246)", "transparent"));
		}
		let section = analyze(&snapshot(1000, elements.clone()), false);
		assert!(section.palette.is_empty());

		elements.push(record("card", "rgb(59, 130, 246)", "transparent"));
		let section = analyze(&snapshot(1000, elements), false);
		assert_eq!(section.palette.len(), 1);
		assert_eq!(section.palette[0].count, 10);
	}

	#[test]
	fn context_score_takes_maximum_matched_weight() {
		assert_eq!(context_score("nav-item brand-mark"), 3);
		assert_eq!(context_score("hero-section"), 2);
		assert_eq!(context_score("nav"), 1);
		assert_eq!(context_score("plain-card"), 1);
	}

	#[test]
	fn structural_color_at_41_percent_with_flat_score_is_dropped() {
		// 410 occurrences over 1000 elements, every context default (1.0
		// score per occurrence, ratio 1.0 < 1.2).
		let elements: Vec<_> = (0..410).map(|_| record("wrapper", "rgb(240, 240, 240)", "transparent")).collect();
		let section = analyze(&snapshot(1000, elements), false);
		assert!(section.palette.is_empty());

		// Same usage with enough semantic signal stays.
		let elements: Vec<_> = (0..410).map(|_| record("brand-wrapper", "rgb(240, 240, 240)", "transparent")).collect();
		let section = analyze(&snapshot(1000, elements), false);
		assert_eq!(section.palette.len(), 1);
	}

	#[test]
	fn near_colors_collapse_keeping_higher_count_representative() {
		let mut elements = Vec::new();
		for _ in 0..30 {
			elements.push(record("hero", "rgb(59, 130, 246)", "transparent"));
		}
		// Distance to the first color is sqrt(4+4+4) ≈ 3.46 < 15.
		for _ in 0..12 {
			elements.push(record("hero", "rgb(61, 132, 248)", "transparent"));
		}
		let section = analyze(&snapshot(500, elements), false);
		assert_eq!(section.palette.len(), 1);
		assert_eq!(section.palette[0].normalized, "#3b82f6");
		assert_eq!(section.palette[0].count, 42);
	}

	#[test]
	fn primary_scenario_produces_single_high_confidence_token() {
		// 15 of 1000 elements carry class `primary`: 15 ≥ max(3, 10) and
		// score 15 × 3 = 45 > 20.
		let elements: Vec<_> = (0..15).map(|_| record("primary", "rgb(59, 130, 246)", "transparent")).collect();
		let section = analyze(&snapshot(1000, elements), false);
		assert_eq!(section.palette.len(), 1);
		assert_eq!(section.palette[0].normalized, "#3b82f6");
		assert_eq!(section.palette[0].confidence, Confidence::High);
	}

	#[test]
	fn semantic_assignment_is_last_write_wins() {
		let elements = vec![
			record("btn-primary", "rgb(59, 130, 246)", "rgb(255, 255, 255)"),
			record("primary-footer", "rgb(10, 10, 10)", "rgb(255, 255, 255)"),
		];
		let section = analyze(&snapshot(10, elements), false);
		assert_eq!(section.semantic.primary.as_deref(), Some("#0a0a0a"));
	}

	#[test]
	fn semantic_falls_back_to_foreground_when_background_transparent() {
		let elements = vec![record("secondary-link", "transparent", "rgb(100, 116, 139)")];
		let section = analyze(&snapshot(10, elements), false);
		assert_eq!(section.semantic.secondary.as_deref(), Some("#64748b"));
	}

	#[test]
	fn source_labels_skip_generated_class_names() {
		assert_eq!(source_label("css-1q2w3e hero-banner"), Some("hero-banner".into()));
		assert_eq!(source_label("sc-bdfBwQ"), None);
		assert_eq!(source_label("a1b2c3d4e5 nav"), Some("nav".into()));
	}

	#[test]
	fn preset_and_cookie_variables_are_filtered() {
		assert!(variable_name_is_token("--brand-color", false));
		assert!(!variable_name_is_token("--bs-body-color", false));
		assert!(!variable_name_is_token("--cc-btn-bg", false));
		assert!(variable_name_is_token("--cc-btn-bg", true));
		assert!(!variable_name_is_token("--spacing-unit", false));
	}

	#[test]
	fn variables_near_palette_are_dropped_and_exact_deduped() {
		let palette = vec![ColorToken {
			color: "rgb(59, 130, 246)".into(),
			normalized: "#3b82f6".into(),
			count: 20,
			confidence: Confidence::High,
			sources: vec![],
		}];
		let raw = vec![
			RawCssVariable {
				name: "--color-accent".into(),
				value: "#3d84f8".into(), // within 15 of the palette token
			},
			RawCssVariable {
				name: "--color-danger".into(),
				value: "#ef4444".into(),
			},
			RawCssVariable {
				name: "--text-danger".into(),
				value: "rgb(239, 68, 68)".into(), // same normalized value
			},
		];
		let vars = collect_variables(&raw, &palette, false);
		assert_eq!(vars.len(), 1);
		assert_eq!(vars[0].name, "--color-danger");
	}

	#[test]
	fn perceptual_merge_drops_near_duplicates_only() {
		let mut base = vec![ColorToken {
			color: "#111111".into(),
			normalized: "#111111".into(),
			count: 40,
			confidence: Confidence::High,
			sources: vec![],
		}];
		let extra = vec![
			ColorToken {
				color: "#121212".into(),
				normalized: "#121212".into(),
				count: 5,
				confidence: Confidence::Low,
				sources: vec![],
			},
			ColorToken {
				color: "#eeeeee".into(),
				normalized: "#eeeeee".into(),
				count: 25,
				confidence: Confidence::Medium,
				sources: vec![],
			},
		];
		merge_perceptual(&mut base, extra);
		assert_eq!(base.len(), 2);
		assert_eq!(base[1].normalized, "#eeeeee");
	}

	#[test]
	fn exact_merge_keeps_perceptually_close_but_distinct_values() {
		let mut base = vec![ColorToken {
			color: "#111111".into(),
			normalized: "#111111".into(),
			count: 40,
			confidence: Confidence::High,
			sources: vec![],
		}];
		let extra = vec![ColorToken {
			color: "#121212".into(),
			normalized: "#121212".into(),
			count: 1,
			confidence: Confidence::Medium,
			sources: vec![],
		}];
		merge_exact(&mut base, extra);
		assert_eq!(base.len(), 2, "exact merge is intentionally not perceptual");
	}
}
