//! Design-system extraction from rendered web pages.
//!
//! Given any backend implementing [`RenderablePage`], the pipeline drives
//! the page to a stabilized state, fans a set of independent extractors out
//! over the rendered DOM, and statistically reduces the noisy per-element
//! style stream into a small set of high-confidence design tokens: colors,
//! typography clusters, spacing, component styles, breakpoints, and
//! framework signatures.
//!
//! The entry point is [`orchestrator::extract`]; the produced
//! [`ExtractionResult`] lives in the `dsx-protocol` crate and is a stable
//! compatibility surface.
//!
//! [`ExtractionResult`]: dsx_protocol::ExtractionResult

pub mod error;
pub mod extract;
pub mod navigator;
pub mod orchestrator;
pub mod page;

pub use dsx_protocol as protocol;

pub use error::{DsxError, Result, Stage};
pub use navigator::{NavOptions, StabilizedPage, stabilize};
pub use orchestrator::ExtractOptions;
pub use page::{ColorScheme, PageError, RenderablePage, Viewport};
