//! Shared scalar types used across token collections.

use serde::{Deserialize, Serialize};

/// Classification tier derived from an accumulated numeric score.
///
/// A tier is never stored independently of the score that produced it; the
/// pipeline classifies at the moment a token is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
	High,
	Medium,
	Low,
}

impl std::fmt::Display for Confidence {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Confidence::High => write!(f, "high"),
			Confidence::Medium => write!(f, "medium"),
			Confidence::Low => write!(f, "low"),
		}
	}
}
