//! Extraction orchestrator.
//!
//! Stabilizes one page, fans all extractors out over the stable snapshot,
//! folds in the always-on hover/focus pass, then runs any requested variant
//! passes strictly one at a time (they mutate page state) and merges their
//! results into the baseline.

use chrono::Utc;
use tracing::{info, warn};

use dsx_protocol::{ColorSection, ComponentSection, ExtractionResult};

use crate::error::{DsxError, Result, Stage};
use crate::extract::snapshot::{
	AssetsSnapshot, CanvasProbe, ColorSnapshot, ComponentSnapshot, InteractionRule, MetricsSnapshot, SignalsSnapshot, TypographySnapshot,
};
use crate::extract::{assets, color, components, detect, eval_into, frequency, interaction, js, typography};
use crate::navigator::{self, NavOptions};
use crate::page::{ColorScheme, RenderablePage, Viewport};

/// Settle wait after a theme or viewport mutation.
const VARIANT_SETTLE_MS: u64 = 500;

/// Canvas-only heuristic bounds.
const CANVAS_ONLY_MIN_CANVASES: u32 = 3;
const CANVAS_ONLY_MAX_TEXT_CHARS: u32 = 200;

/// Which variant passes to run on top of the baseline extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
	/// Re-extract colors and components under forced dark theme.
	pub dark_mode: bool,
	/// Re-extract colors at a 375×667 viewport.
	pub mobile: bool,
	/// Triple the navigation timeout for slow pages.
	pub slow_mode: bool,
}

/// Runs the full pipeline against one page.
///
/// The page session is owned by the caller; this function neither launches
/// nor closes it, so cleanup runs on every exit path the caller controls.
pub async fn extract<P: RenderablePage + ?Sized>(page: &P, url: &str, options: &ExtractOptions) -> Result<ExtractionResult> {
	let nav = NavOptions { slow_mode: options.slow_mode };
	let stable = navigator::stabilize(page, url, &nav).await?;
	let final_url = stable.final_url.clone();
	let site_about_cookies = final_url.to_ascii_lowercase().contains("cookie");

	let wrap = |source: anyhow::Error| DsxError::Extraction {
		url: final_url.clone(),
		stage: Stage::Extract,
		source,
	};

	info!(target = "dsx", url = %final_url, "extracting design tokens");

	// All extractors are pure reads of the stabilized snapshot, so the
	// fan-out is order-insensitive; the join below is the fan-in point.
	let (colors_snap, typo_snap, metrics_snap, components_snap, signals_snap, canvas_probe, assets_snap, hover_rules) = tokio::join!(
		eval_into::<ColorSnapshot, P>(page, js::COLLECT_COLORS_JS),
		eval_into::<TypographySnapshot, P>(page, js::COLLECT_TYPOGRAPHY_JS),
		eval_into::<MetricsSnapshot, P>(page, js::COLLECT_METRICS_JS),
		eval_into::<ComponentSnapshot, P>(page, js::COLLECT_COMPONENTS_JS),
		eval_into::<SignalsSnapshot, P>(page, js::COLLECT_SIGNALS_JS),
		eval_into::<CanvasProbe, P>(page, js::CANVAS_PROBE_JS),
		eval_into::<AssetsSnapshot, P>(page, js::COLLECT_ASSETS_JS),
		eval_into::<Vec<InteractionRule>, P>(page, js::HOVER_RULES_JS),
	);

	let colors_snap = colors_snap.map_err(&wrap)?;
	let typo_snap = typo_snap.map_err(&wrap)?;
	let metrics_snap = metrics_snap.map_err(&wrap)?;
	let components_snap = components_snap.map_err(&wrap)?;
	let signals_snap = signals_snap.map_err(&wrap)?;
	let canvas_probe = canvas_probe.map_err(&wrap)?;
	let assets_snap = assets_snap.map_err(&wrap)?;
	let hover_rules = hover_rules.map_err(&wrap)?;

	let mut colors = color::analyze(&colors_snap, site_about_cookies);
	let typography = typography::cluster(&typo_snap);
	let metrics = frequency::analyze(&metrics_snap);
	let mut component_section = components::analyze(&components_snap);
	let breakpoints = detect::breakpoints(&signals_snap.media_texts);
	let icon_system = detect::icon_system(&signals_snap);
	let frameworks = detect::frameworks(&signals_snap);

	// Hover/focus colors join by exact normalized value, not perceptually.
	color::merge_exact(&mut colors.palette, interaction::tokens(&hover_rules));

	// Variant passes mutate shared page state and therefore run strictly
	// after the baseline, one at a time.
	if options.dark_mode {
		dark_pass(page, &mut colors, &mut component_section, site_about_cookies)
			.await
			.map_err(&wrap)?;
	}
	if options.mobile {
		mobile_pass(page, &mut colors, site_about_cookies).await.map_err(&wrap)?;
	}

	let is_canvas_only = canvas_probe.canvas_count > CANVAS_ONLY_MIN_CANVASES
		&& canvas_probe.has_webgl
		&& canvas_probe.text_chars <= CANVAS_ONLY_MAX_TEXT_CHARS;
	if is_canvas_only {
		warn!(target = "dsx", url = %final_url, canvases = canvas_probe.canvas_count, "page appears canvas-rendered");
	}

	Ok(ExtractionResult {
		url: final_url,
		extracted_at: Utc::now(),
		logo: assets::logo(&assets_snap),
		favicons: assets::favicons(&assets_snap),
		colors,
		typography,
		spacing: metrics.spacing,
		border_radius: metrics.border_radius,
		shadows: metrics.shadows,
		components: component_section,
		breakpoints,
		icon_system,
		frameworks,
		note: is_canvas_only.then(|| "page renders primarily to canvas; DOM-derived tokens may be incomplete".to_string()),
		is_canvas_only: is_canvas_only.then_some(true),
	})
}

/// Forces dark theme markers plus a dark color-scheme preference, then
/// re-runs color and component extraction and merges into the baseline.
async fn dark_pass<P: RenderablePage + ?Sized>(
	page: &P,
	colors: &mut ColorSection,
	component_section: &mut ComponentSection,
	site_about_cookies: bool,
) -> anyhow::Result<()> {
	info!(target = "dsx", "dark-mode variant pass");
	page.evaluate(js::DARK_MODE_TOGGLE_JS).await?;
	page.emulate_color_scheme(ColorScheme::Dark).await?;
	page.wait_for_timeout(VARIANT_SETTLE_MS).await;

	let snap: ColorSnapshot = eval_into(page, js::COLLECT_COLORS_JS).await?;
	let dark = color::analyze(&snap, site_about_cookies);
	color::merge_perceptual(&mut colors.palette, dark.palette);
	// Semantic roles merge by field overwrite.
	if dark.semantic.primary.is_some() {
		colors.semantic.primary = dark.semantic.primary;
	}
	if dark.semantic.secondary.is_some() {
		colors.semantic.secondary = dark.semantic.secondary;
	}

	let comp_snap: ComponentSnapshot = eval_into(page, js::COLLECT_COMPONENTS_JS).await?;
	components::append_dark_variants(component_section, &comp_snap);
	Ok(())
}

/// Resizes to a phone viewport and merges re-extracted colors.
async fn mobile_pass<P: RenderablePage + ?Sized>(page: &P, colors: &mut ColorSection, site_about_cookies: bool) -> anyhow::Result<()> {
	info!(target = "dsx", "mobile variant pass");
	page.set_viewport(Viewport::MOBILE).await?;
	page.wait_for_timeout(VARIANT_SETTLE_MS).await;

	let snap: ColorSnapshot = eval_into(page, js::COLLECT_COLORS_JS).await?;
	color::merge_perceptual(&mut colors.palette, color::analyze(&snap, site_about_cookies).palette);
	Ok(())
}
