//! The renderable-page capability the pipeline drives.
//!
//! The pipeline never talks to a concrete browser backend. Everything it
//! needs from the live document is expressed through [`RenderablePage`], and
//! backends (CDP, WebDriver, an in-process fixture for tests) implement it.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure classes surfaced by a page backend.
#[derive(Debug, Error)]
pub enum PageError {
	/// The operation did not complete within its timeout.
	#[error("{operation} timed out after {timeout_ms}ms")]
	Timeout { operation: String, timeout_ms: u64 },

	/// The target could not be reached (DNS, TLS, reset connections).
	#[error("network error: {0}")]
	Network(String),

	/// Script evaluation failed inside the page.
	#[error("evaluation failed: {0}")]
	Evaluation(String),

	/// The backend itself misbehaved (protocol error, crashed target).
	#[error("backend error: {0}")]
	Backend(String),
}

impl PageError {
	/// Timeouts and network failures are the class worth retrying a
	/// navigation over; evaluation and backend failures are not.
	pub fn is_retryable_navigation(&self) -> bool {
		matches!(self, PageError::Timeout { .. } | PageError::Network(_))
	}
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

impl Viewport {
	pub const MOBILE: Viewport = Viewport { width: 375, height: 667 };
}

/// Emulated `prefers-color-scheme` media value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
	Light,
	Dark,
	NoPreference,
}

/// One live, navigable page.
///
/// All methods take `&self`; a backend is expected to serialize access
/// internally the way browser driver clients do. The pipeline itself never
/// issues mutating calls (`set_viewport`, `emulate_color_scheme`, theme
/// toggles) concurrently with reads.
#[async_trait]
pub trait RenderablePage: Send + Sync {
	/// Navigates and resolves with the final URL after redirects.
	async fn navigate(&self, url: &str, timeout_ms: u64) -> Result<String, PageError>;

	/// Evaluates a side-effect-free expression against the live document
	/// and returns its JSON-serializable result.
	async fn evaluate(&self, expression: &str) -> Result<Value, PageError>;

	/// Waits until `selector` matches, failing on timeout.
	async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<(), PageError>;

	/// Unconditional wait.
	async fn wait_for_timeout(&self, ms: u64);

	async fn set_viewport(&self, viewport: Viewport) -> Result<(), PageError>;

	async fn emulate_color_scheme(&self, scheme: ColorScheme) -> Result<(), PageError>;

	/// Moves the pointer to viewport coordinates.
	async fn simulate_pointer_move(&self, x: f64, y: f64) -> Result<(), PageError>;

	/// Scrolls the document vertically by `delta_y` pixels.
	async fn simulate_scroll(&self, delta_y: f64) -> Result<(), PageError>;
}
