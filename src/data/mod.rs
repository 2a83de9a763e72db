//! Remote data access.
//!
//! - carbon-intensity API client (`intensity`)

pub mod intensity;

pub use intensity::*;
