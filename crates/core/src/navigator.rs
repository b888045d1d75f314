//! Navigation and stabilization controller.
//!
//! Drives a single page through navigation, hydration, the main-content
//! wait, interaction simulation, a settle wait, and then validation,
//! retrying the whole sequence once before giving up. A page that survives validation is
//! considered a stable snapshot the extractors may read freely.

use tracing::{debug, info, warn};
use url::Url;

use crate::error::{DsxError, Result, Stage};
use crate::page::{PageError, RenderablePage};

/// Base navigation timeout; tripled under slow mode.
pub const BASE_NAV_TIMEOUT_MS: u64 = 20_000;
/// Fixed wait for client-side hydration after the load event.
pub const HYDRATION_WAIT_MS: u64 = 8_000;
/// Best-effort wait for a recognizable content landmark.
pub const MAIN_CONTENT_TIMEOUT_MS: u64 = 10_000;
/// Final settle wait after simulated interaction.
pub const SETTLE_WAIT_MS: u64 = 4_000;
/// Backoff between attempts.
pub const RETRY_BACKOFF_MS: u64 = 3_000;
/// Minimum rendered text length for a page to count as hydrated.
pub const MIN_TEXT_CHARS: usize = 500;
/// Top-level attempt budget.
pub const MAX_ATTEMPTS: u32 = 2;

const MAIN_CONTENT_SELECTOR: &str = "main, header, [class*=\"hero\"], section";

const TEXT_LENGTH_JS: &str = "(() => document.body ? document.body.innerText.length : 0)()";

/// Tuning knobs for one stabilization run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavOptions {
	/// Triples the navigation timeout for pages known to load slowly.
	pub slow_mode: bool,
}

impl NavOptions {
	pub fn nav_timeout_ms(&self) -> u64 {
		if self.slow_mode { BASE_NAV_TIMEOUT_MS * 3 } else { BASE_NAV_TIMEOUT_MS }
	}
}

/// Outcome of a successful stabilization.
#[derive(Debug, Clone)]
pub struct StabilizedPage {
	pub requested_url: String,
	/// URL after any redirects.
	pub final_url: String,
	/// Rendered text length observed at validation time.
	pub text_chars: usize,
	/// The final host differs from the requested host. Informational.
	pub cross_domain_redirect: bool,
	/// Attempts consumed, 1-based.
	pub attempts: u32,
}

enum AttemptFailure {
	Page { stage: Stage, source: PageError },
	ThinContent { chars: usize },
}

/// Drives `page` to a validated, hydrated state.
///
/// Retries the full sequence up to [`MAX_ATTEMPTS`] times with a
/// [`RETRY_BACKOFF_MS`] pause between attempts. Exhausting the budget
/// surfaces the last failure with URL, stage, and attempt context.
pub async fn stabilize<P: RenderablePage + ?Sized>(page: &P, url: &str, options: &NavOptions) -> Result<StabilizedPage> {
	let mut last_failure: Option<AttemptFailure> = None;

	for attempt in 1..=MAX_ATTEMPTS {
		info!(target = "dsx", url = %url, attempt, "stabilizing page");
		match attempt_once(page, url, options).await {
			Ok(mut stable) => {
				stable.attempts = attempt;
				info!(
					target = "dsx",
					url = %stable.final_url,
					chars = stable.text_chars,
					redirected = stable.cross_domain_redirect,
					"page stable"
				);
				return Ok(stable);
			}
			Err(failure) => {
				match &failure {
					AttemptFailure::Page { stage, source } => {
						warn!(target = "dsx", url = %url, stage = %stage, error = %source, attempt, "attempt failed");
					}
					AttemptFailure::ThinContent { chars } => {
						warn!(target = "dsx", url = %url, chars, attempt, "content too thin");
					}
				}
				last_failure = Some(failure);
			}
		}

		if attempt < MAX_ATTEMPTS {
			page.wait_for_timeout(RETRY_BACKOFF_MS).await;
		}
	}

	Err(match last_failure {
		Some(AttemptFailure::Page { stage, source }) => DsxError::Navigation {
			url: url.to_string(),
			stage,
			attempts: MAX_ATTEMPTS,
			source,
		},
		Some(AttemptFailure::ThinContent { chars }) => DsxError::ContentTooThin {
			url: url.to_string(),
			attempts: MAX_ATTEMPTS,
			chars,
		},
		// Unreachable with MAX_ATTEMPTS >= 1; kept total.
		None => DsxError::ContentTooThin {
			url: url.to_string(),
			attempts: 0,
			chars: 0,
		},
	})
}

async fn attempt_once<P: RenderablePage + ?Sized>(page: &P, url: &str, options: &NavOptions) -> Result<StabilizedPage, AttemptFailure> {
	let staged = |stage: Stage| move |source: PageError| AttemptFailure::Page { stage, source };

	let final_url = page.navigate(url, options.nav_timeout_ms()).await.map_err(staged(Stage::Navigate))?;

	page.wait_for_timeout(HYDRATION_WAIT_MS).await;

	// Landmark wait is best-effort; pages without one still validate on text.
	if let Err(e) = page.wait_for_selector(MAIN_CONTENT_SELECTOR, MAIN_CONTENT_TIMEOUT_MS).await {
		debug!(target = "dsx", url = %url, error = %e, "no content landmark appeared");
	}

	page.simulate_pointer_move(200.0, 300.0).await.map_err(staged(Stage::Interact))?;
	page.simulate_scroll(400.0).await.map_err(staged(Stage::Interact))?;

	page.wait_for_timeout(SETTLE_WAIT_MS).await;

	let text_chars = page
		.evaluate(TEXT_LENGTH_JS)
		.await
		.map_err(staged(Stage::Validate))?
		.as_u64()
		.unwrap_or(0) as usize;

	if text_chars <= MIN_TEXT_CHARS {
		return Err(AttemptFailure::ThinContent { chars: text_chars });
	}

	let cross_domain_redirect = hosts_differ(url, &final_url);
	if cross_domain_redirect {
		info!(target = "dsx", from = %url, to = %final_url, "cross-domain redirect");
	}

	Ok(StabilizedPage {
		requested_url: url.to_string(),
		final_url,
		text_chars,
		cross_domain_redirect,
		attempts: 0,
	})
}

fn hosts_differ(requested: &str, final_url: &str) -> bool {
	match (Url::parse(requested), Url::parse(final_url)) {
		(Ok(a), Ok(b)) => match (a.host_str(), b.host_str()) {
			(Some(ha), Some(hb)) => !ha.eq_ignore_ascii_case(hb),
			_ => false,
		},
		_ => false,
	}
}
