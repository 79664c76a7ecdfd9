//! Configuration for the phasis stereo phaser.
//!
//! This crate provides the file-facing side of the phaser's parameters:
//!
//! - **[`PhaserConfig`]**: every recognized option, serializable to TOML
//! - **Validation**: strict range checks that report every bad field
//! - **Parsing**: [`parse_param_value`] for `name=value` style overrides
//!
//! The effect clamps whatever it is given; configuration files are checked
//! strictly first so typos surface as errors.
//!
//! # Example
//!
//! ```rust,no_run
//! use phasis_config::PhaserConfig;
//! use phasis_effects::StereoPhaser;
//!
//! let config = PhaserConfig::load("wide.toml").unwrap();
//! config.validate().unwrap();
//!
//! let mut phaser = StereoPhaser::new(48000.0);
//! config.apply(&mut phaser);
//!
//! PhaserConfig::from_phaser(&phaser).save("wide-copy.toml").unwrap();
//! ```

mod error;
mod phaser_config;

/// Strict range validation.
pub mod validation;

pub use error::ConfigError;
pub use phaser_config::{PhaserConfig, parse_param_value};
pub use validation::{ValidationError, ValidationResult};
