//! Result types for design-system extraction.
//!
//! This crate contains the serde-serializable types produced by one
//! extraction run. These types represent the "result layer" - the shapes of
//! data as they are handed to presentation and persistence collaborators.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * Stable: The `ExtractionResult` shape is a compatibility surface and
//!   changes only deliberately
//!
//! The pipeline that populates these types lives in `dsx-rs`.

pub mod color;
pub mod component;
pub mod result;
pub mod types;
pub mod typography;

pub use color::*;
pub use component::*;
pub use result::*;
pub use types::*;
pub use typography::*;
