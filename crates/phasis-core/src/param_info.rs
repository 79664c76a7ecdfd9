//! Parameter introspection for discoverable effect parameters.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types that
//! let a host find, describe and set an effect's parameters by index, without
//! knowing the concrete effect type. The CLI's `--set name=value` and the
//! parameter listing are built on it.
//!
//! # Design
//!
//! Parameters are addressed by zero-based index. Each one is described by a
//! [`ParamDescriptor`] carrying display metadata, its valid range, a stable
//! [`ParamId`] and capability [`ParamFlags`].
//!
//! Values travel in *display* units (percent, degrees, Hz), which need not
//! be the units the effect stores internally.
//!
//! # Example
//!
//! ```rust
//! use phasis_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Blend {
//!     mix: f32,
//! }
//!
//! impl ParameterInfo for Blend {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::mix().with_id(ParamId(1), "blend_mix")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.mix * 100.0,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if index == 0 {
//!             self.mix = value.clamp(0.0, 100.0) / 100.0;
//!         }
//!     }
//! }
//!
//! let mut blend = Blend { mix: 0.0 };
//! let index = blend.find_param_by_name("mix").unwrap();
//! blend.set_param(index, 250.0);
//! assert_eq!(blend.get_param(index), 100.0);
//! ```

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` never changes for a given parameter; saved
/// configurations and automation refer to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags.
///
/// Use [`union`](Self::union) to combine.
///
/// ```rust
/// use phasis_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// assert!(!ParamFlags::AUTOMATABLE.contains(ParamFlags::STEPPED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// Host can automate this parameter (default for all params).
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (integer or on/off values).
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for effects that expose introspectable parameters.
///
/// # Parameter Indexing
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the effect instance. Use [`param_count`](Self::param_count) to determine
/// valid indices.
///
/// # Thread Safety
///
/// Nothing here synchronizes. `set_param` is a plain write into the effect;
/// the caller must not run it concurrently with audio processing on the
/// same instance.
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Implementations clamp to the valid range. Out-of-range indices are
    /// ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || (!desc.string_id.is_empty() && desc.string_id.eq_ignore_ascii_case(name))
            })
        })
    }

    /// Returns the stable [`ParamId`] for the parameter at the given index.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Scans all parameters (O(n)); suitable for setup paths, not audio.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Short Name
///
/// `short_name` should be 8 characters or less so it fits small displays.
///
/// ```rust
/// use phasis_core::{ParamDescriptor, ParamId, ParamUnit};
///
/// let offset = ParamDescriptor::custom("Phase Offset", "Offset", 0.0, 360.0, 180.0)
///     .with_unit(ParamUnit::Degrees)
///     .with_id(ParamId(107), "phsr_offset");
/// assert_eq!(offset.clamp(400.0), 360.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Rate", "Phase Offset").
    pub name: &'static str,

    /// Short name for small displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the effect is constructed or reset.
    pub default: f32,

    /// Recommended step increment for encoder-style control.
    pub step: f32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Human-readable stable ID. Convention: `"effect_param"`.
    pub string_id: &'static str,

    /// Capability flags. Default: [`ParamFlags::AUTOMATABLE`].
    pub flags: ParamFlags,
}

impl ParamDescriptor {
    /// Parameter with custom name and range, no unit.
    pub const fn custom(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
        }
    }

    /// Standard mix parameter (0–100%, default 50%).
    pub const fn mix() -> Self {
        Self::custom("Mix", "Mix", 0.0, 100.0, 50.0)
            .with_unit(ParamUnit::Percent)
            .with_step(1.0)
    }

    /// Standard depth parameter (0–100%, default 50%).
    pub const fn depth() -> Self {
        Self::custom("Depth", "Depth", 0.0, 100.0, 50.0)
            .with_unit(ParamUnit::Percent)
            .with_step(1.0)
    }

    /// Bipolar feedback parameter (−99–99%, default 0%).
    ///
    /// Capped short of ±100% so the loop gain stays below one.
    pub const fn feedback() -> Self {
        Self::custom("Feedback", "Fdbk", -99.0, 99.0, 0.0)
            .with_unit(ParamUnit::Percent)
            .with_step(1.0)
    }

    /// LFO rate parameter in Hz.
    pub const fn rate_hz(min: f32, max: f32, default: f32) -> Self {
        Self::custom("Rate", "Rate", min, max, default).with_unit(ParamUnit::Hertz)
    }

    /// Sets the stable parameter ID and string ID.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the display unit.
    pub const fn with_unit(mut self, unit: ParamUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Sets the step increment.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Clamps a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Unit type for parameter display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Hertz (Hz) - LFO rate.
    Hertz,

    /// Percentage (%) - mix, depth, feedback.
    Percent,

    /// Degrees (°) - phase angles.
    Degrees,

    /// No unit - counts, coefficients, switches.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// ```rust
    /// use phasis_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::Percent => "%",
            ParamUnit::Degrees => "°",
            ParamUnit::None => "",
        }
    }
}
