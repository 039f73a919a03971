//! Shared primitives for the promoscan motif scanner.
//!
//! `promoscan-core` provides the foundation the other promoscan crates build on:
//!
//! - **Error types**: [`PromoscanError`] and [`Result`] for structured error handling
//! - **Traits**: Small abstractions like [`Sequence`], [`Scored`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{PromoscanError, Result};
pub use traits::*;
