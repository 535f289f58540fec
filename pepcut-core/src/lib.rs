//! Shared primitives and traits for the pepcut proteolysis toolkit.
//!
//! `pepcut-core` provides the foundation the digestion crate builds on:
//!
//! - **Error types** — [`PepcutError`] and [`Result`] for structured error handling
//! - **Traits** — [`Annotated`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{PepcutError, Result};
pub use traits::*;
