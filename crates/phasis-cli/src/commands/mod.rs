//! CLI command implementations.

pub mod config;
pub mod params;
pub mod process;
