//! Extraction engines and their in-page collection snippets.
//!
//! Every engine is a pure function over raw records collected by one
//! `evaluate` call, so the statistical behavior is testable without a
//! browser. Engines never share state; each pass owns its accumulators.

pub(crate) mod assets;
pub mod color;
pub(crate) mod components;
pub(crate) mod detect;
pub(crate) mod frequency;
pub(crate) mod interaction;
pub(crate) mod js;
pub mod snapshot;
pub mod typography;

use serde::de::DeserializeOwned;

use crate::page::RenderablePage;

/// Evaluates a collection snippet and deserializes its JSON result.
pub(crate) async fn eval_into<T, P>(page: &P, expression: &str) -> anyhow::Result<T>
where
	T: DeserializeOwned,
	P: RenderablePage + ?Sized,
{
	let value = page.evaluate(expression).await?;
	Ok(serde_json::from_value(value)?)
}
