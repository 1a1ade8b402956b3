/// Per-frame animation state
use crate::effects::{RippleField, StarField};
use crate::projection::Viewport;
use crate::transform::Oscillator;

/// Rotation advance per frame, in radians.
pub const ROTATION_STEP: f32 = 0.0785;

const PULSE_STEP: f32 = 0.003;
const PULSE_MIN: f32 = 0.95;
const PULSE_MAX: f32 = 1.08;

const AURA_STEP: f32 = 0.005;
const AURA_MIN: f32 = 1.0;
const AURA_MAX: f32 = 1.3;

/// Everything the animation mutates between frames: rotation angle, pulse
/// and aura oscillators, the ripple list, and the shooting-star pool.
///
/// `tick` is the single per-frame mutation point. It has no notion of a
/// scheduler; any host (display-sync callback, timer, or a test driver)
/// may call it once per frame.
#[derive(Debug)]
pub struct AnimationState {
    pub rotation: f32,
    pub pulse: Oscillator,
    pub aura: Oscillator,
    pub ripples: RippleField,
    pub stars: StarField,
}

impl AnimationState {
    pub fn new(seed: u64, viewport: &Viewport) -> Self {
        Self {
            rotation: 0.0,
            pulse: Oscillator::new(1.0, PULSE_STEP, PULSE_MIN, PULSE_MAX),
            aura: Oscillator::new(1.0, AURA_STEP, AURA_MIN, AURA_MAX),
            ripples: RippleField::new(),
            stars: StarField::new(seed, viewport),
        }
    }

    /// Advance every animated quantity by exactly one frame.
    ///
    /// The viewport only bounds star travel; a resize between ticks never
    /// touches the per-frame structures themselves.
    pub fn tick(&mut self, viewport: &Viewport) {
        self.rotation += ROTATION_STEP;
        self.pulse.advance();
        self.aura.advance();
        self.ripples.advance();
        self.stars.advance(viewport);
    }
}
