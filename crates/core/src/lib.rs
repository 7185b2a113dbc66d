//! `rosekeep-core` — shared building blocks for inventory aging.
//!
//! This crate contains **pure** primitives (no IO): the error model and the
//! quality band every aging rule clamps into.

pub mod error;
pub mod quality;

pub use error::{AgingError, AgingResult};
pub use quality::{MAX_QUALITY, MIN_QUALITY, lower_quality, raise_quality};
