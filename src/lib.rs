//! `carbon-pull` library crate.
//!
//! The binary (`carbon-pull`) is a thin wrapper around this library so that:
//!
//! - the pull pipeline is testable without spawning processes or a network
//! - modules stay easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
