//! First-order allpass cascade for phasing.
//!
//! Each section passes every frequency at unity gain but shifts its phase,
//! reaching 180° at a frequency set by the coefficient. Chaining sections
//! and mixing the result with the dry signal produces the notches a phaser
//! sweeps.

/// Maximum number of sections a cascade can hold.
pub const MAX_STAGES: usize = 12;

/// One first-order allpass section with a single state cell.
///
/// ```text
/// y = -a·x + z
/// z = x + a·y
/// ```
///
/// Returns `y`. The state is the section's delayed output term.
#[inline]
pub fn allpass_section(x: f32, a: f32, z: &mut f32) -> f32 {
    let y = -a * x + *z;
    *z = x + a * y;
    y
}

/// Fixed-capacity chain of first-order allpass sections.
///
/// Storage for [`MAX_STAGES`] sections is allocated once. The number of
/// sections actually run is chosen per call, so changing it never touches
/// memory: cells past the active count keep whatever they last held and
/// resume from that value when they are brought back into use.
///
/// # Example
///
/// ```rust
/// use phasis_core::AllpassCascade;
///
/// let mut cascade = AllpassCascade::new();
/// let y = cascade.process(1.0, 0.5, 6);
/// assert!(y.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllpassCascade {
    state: [f32; MAX_STAGES],
}

impl AllpassCascade {
    /// Create a cascade with all state cells zeroed.
    pub const fn new() -> Self {
        Self {
            state: [0.0; MAX_STAGES],
        }
    }

    /// Run `x` through the first `stages` sections, all sharing coefficient `a`.
    ///
    /// Sections run in order, each consuming the previous section's output.
    /// `stages` is capped at [`MAX_STAGES`]; zero stages passes `x` through.
    #[inline]
    pub fn process(&mut self, x: f32, a: f32, stages: usize) -> f32 {
        let active = stages.min(MAX_STAGES);
        self.state[..active]
            .iter_mut()
            .fold(x, |x, z| allpass_section(x, a, z))
    }

    /// Zero every state cell, active or not.
    pub fn clear(&mut self) {
        self.state = [0.0; MAX_STAGES];
    }

    /// All state cells, including the inactive ones.
    pub fn state(&self) -> &[f32; MAX_STAGES] {
        &self.state
    }
}

impl Default for AllpassCascade {
    fn default() -> Self {
        Self::new()
    }
}
