//! Error types for the extraction pipeline.

use thiserror::Error;

use crate::page::PageError;

pub type Result<T, E = DsxError> = std::result::Result<T, E>;

/// Pipeline stage in progress when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	Navigate,
	Hydrate,
	MainContent,
	Interact,
	Settle,
	Validate,
	Extract,
}

impl std::fmt::Display for Stage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Stage::Navigate => "navigate",
			Stage::Hydrate => "hydrate",
			Stage::MainContent => "main-content",
			Stage::Interact => "interact",
			Stage::Settle => "settle",
			Stage::Validate => "validate",
			Stage::Extract => "extract",
		};
		write!(f, "{name}")
	}
}

/// Fatal pipeline errors. Per-rule failures inside an extractor (cross-origin
/// stylesheets, invalid selector matches) are swallowed at the point of
/// occurrence and never reach this type.
#[derive(Debug, Error)]
pub enum DsxError {
	/// Navigation exhausted the attempt budget.
	#[error("navigation failed for {url} during {stage} (attempt {attempts}): {source}")]
	Navigation {
		url: String,
		stage: Stage,
		attempts: u32,
		#[source]
		source: PageError,
	},

	/// The page validated but produced too little text to analyze.
	#[error("page at {url} produced only {chars} chars of text after {attempts} attempt(s)")]
	ContentTooThin { url: String, attempts: u32, chars: usize },

	/// The browser session could not be brought up at all. Never retried
	/// inside the pipeline; the caller owns any relaunch decision.
	#[error("session launch failed: {0}")]
	SessionLaunch(String),

	/// An extractor failed in a way that could not be skipped.
	#[error("extraction failed for {url} during {stage}: {source}")]
	Extraction {
		url: String,
		stage: Stage,
		#[source]
		source: anyhow::Error,
	},
}

impl DsxError {
	/// Whether the caller may relaunch the whole pipeline once in headed
	/// mode. Only the navigation timeout / network failure class qualifies;
	/// a second failure in that mode is fatal.
	pub fn wants_headed_retry(&self) -> bool {
		match self {
			DsxError::Navigation { source, .. } => source.is_retryable_navigation(),
			_ => false,
		}
	}
}
