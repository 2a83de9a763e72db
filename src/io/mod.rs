//! Output helpers.
//!
//! - aggregated-sequence TSV export (`export`)

pub mod export;

pub use export::*;
