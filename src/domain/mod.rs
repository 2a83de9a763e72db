//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - wire-shaped intensity types (`IntensityRecord`, `Intensity`, `DayData`)
//! - run configuration (`PullConfig`)

pub mod types;

pub use types::*;
