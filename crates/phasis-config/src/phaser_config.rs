//! Serializable phaser configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use phasis_core::{CoefficientRange, MAX_STAGES, QuadratureLfo};
use phasis_effects::StereoPhaser;

use crate::error::ConfigError;
use crate::validation::{ValidationError, ValidationResult, check_range, collect_errors};

/// Every recognized phaser option, in the effect's plain units.
///
/// Missing fields take their defaults, so a file only needs to name what it
/// changes.
///
/// # TOML Format
///
/// ```toml
/// rate = 0.35
/// depth = 0.8
/// feedback = 0.6
/// mix = 0.7
/// stages = 6
/// coeff_min = 0.2
/// coeff_max = 0.8
/// lfo_phase_offset = 0.5
/// negative_resonance = false
/// ```
///
/// # Example
///
/// ```rust
/// use phasis_config::PhaserConfig;
/// use phasis_effects::StereoPhaser;
///
/// let config = PhaserConfig::from_toml_str("stages = 10\nfeedback = -0.5").unwrap();
/// config.validate().unwrap();
///
/// let mut phaser = StereoPhaser::new(44100.0);
/// config.apply(&mut phaser);
/// assert_eq!(phaser.stages(), 10);
/// assert_eq!(phaser.mix(), 0.7);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhaserConfig {
    /// LFO rate in Hz (0.01-10).
    pub rate: f32,
    /// Modulation depth (0-1).
    pub depth: f32,
    /// Feedback amount (-0.99-0.99).
    pub feedback: f32,
    /// Wet/dry mix (0-1).
    pub mix: f32,
    /// Allpass stage count (1-12).
    pub stages: usize,
    /// Lower allpass coefficient bound (0-0.99).
    pub coeff_min: f32,
    /// Upper allpass coefficient bound (0.01-0.99, at least `coeff_min + 0.01`).
    pub coeff_max: f32,
    /// Right-channel LFO offset as a fraction of a turn (0-1).
    pub lfo_phase_offset: f32,
    /// Invert the feedback sign.
    pub negative_resonance: bool,
}

impl Default for PhaserConfig {
    fn default() -> Self {
        Self {
            rate: StereoPhaser::DEFAULT_RATE,
            depth: StereoPhaser::DEFAULT_DEPTH,
            feedback: StereoPhaser::DEFAULT_FEEDBACK,
            mix: StereoPhaser::DEFAULT_MIX,
            stages: StereoPhaser::DEFAULT_STAGES,
            coeff_min: CoefficientRange::DEFAULT_MIN,
            coeff_max: CoefficientRange::DEFAULT_MAX,
            lfo_phase_offset: StereoPhaser::DEFAULT_PHASE_OFFSET,
            negative_resonance: false,
        }
    }
}

impl PhaserConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Check every field against its range.
    ///
    /// Reports all problems at once; see [`crate::validation::collect_errors`].
    pub fn validate(&self) -> ValidationResult<()> {
        let checks = [
            check_range(
                "rate",
                self.rate,
                QuadratureLfo::MIN_RATE,
                QuadratureLfo::MAX_RATE,
            ),
            check_range("depth", self.depth, 0.0, 1.0),
            check_range(
                "feedback",
                self.feedback,
                -StereoPhaser::MAX_FEEDBACK,
                StereoPhaser::MAX_FEEDBACK,
            ),
            check_range("mix", self.mix, 0.0, 1.0),
            check_range("stages", self.stages as f32, 1.0, MAX_STAGES as f32),
            check_range("coeff_min", self.coeff_min, 0.0, CoefficientRange::LIMIT),
            check_range(
                "coeff_max",
                self.coeff_max,
                CoefficientRange::MIN_SPAN,
                CoefficientRange::LIMIT,
            ),
            check_range("lfo_phase_offset", self.lfo_phase_offset, 0.0, 1.0),
        ];

        let mut errors: Vec<ValidationError> = checks.into_iter().filter_map(Result::err).collect();

        // Float tolerance: 0.2 + 0.01 is not exactly 0.21
        if self.coeff_max - self.coeff_min < CoefficientRange::MIN_SPAN - 1e-6 {
            errors.push(ValidationError::InvalidRange {
                min: self.coeff_min,
                max: self.coeff_max,
            });
        }

        collect_errors(errors)
    }

    /// Push every field into `phaser` through its clamping setters.
    ///
    /// Never fails: out-of-range values are clamped exactly as a direct
    /// setter call would clamp them.
    pub fn apply(&self, phaser: &mut StereoPhaser) {
        phaser.set_rate(self.rate);
        phaser.set_depth(self.depth);
        phaser.set_feedback(self.feedback);
        phaser.set_mix(self.mix);
        phaser.set_stages(self.stages);
        phaser.set_coeff_range(self.coeff_min, self.coeff_max);
        phaser.set_lfo_phase_offset(self.lfo_phase_offset);
        phaser.set_negative_resonance(self.negative_resonance);
    }

    /// Capture the values currently stored in `phaser`.
    pub fn from_phaser(phaser: &StereoPhaser) -> Self {
        Self {
            rate: phaser.rate(),
            depth: phaser.depth(),
            feedback: phaser.feedback(),
            mix: phaser.mix(),
            stages: phaser.stages(),
            coeff_min: phaser.coeff_min(),
            coeff_max: phaser.coeff_max(),
            lfo_phase_offset: phaser.lfo_phase_offset(),
            negative_resonance: phaser.negative_resonance(),
        }
    }
}

/// Parse a parameter value string, accepting an optional unit suffix.
///
/// The number is returned as written; suffixes are only stripped, not
/// converted, because parameters are set in their display units.
///
/// Switches and suffixes are matched case-insensitively.
///
/// Supported formats:
/// - Plain numbers: "0.5", "-40", "6"
/// - Percent: "80%"
/// - Hertz: "0.35Hz", "2 hz", "2HZ"
/// - Degrees: "90°", "90deg"
/// - Switches: "on"/"off", "true"/"false", "yes"/"no"
///
/// ```rust
/// use phasis_config::parse_param_value;
///
/// assert_eq!(parse_param_value("80%"), Some(80.0));
/// assert_eq!(parse_param_value("0.5 Hz"), Some(0.5));
/// assert_eq!(parse_param_value("on"), Some(1.0));
/// assert_eq!(parse_param_value("fast"), None);
/// ```
pub fn parse_param_value(value: &str) -> Option<f32> {
    let value = value.trim().to_ascii_lowercase();

    match value.as_str() {
        "on" | "true" | "yes" => return Some(1.0),
        "off" | "false" | "no" => return Some(0.0),
        _ => {}
    }

    let number = ["%", "hz", "°", "deg"]
        .iter()
        .find_map(|suffix| value.strip_suffix(suffix))
        .unwrap_or(value.as_str());

    number.trim().parse::<f32>().ok()
}
