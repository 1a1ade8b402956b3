/// Ambient particle layers: shooting stars, ripples, orbiting sparkles
use crate::projection::Viewport;
use std::f32::consts::{FRAC_PI_4, TAU};

/// Shooting-star pool size; held invariant by in-place replacement.
pub const STAR_COUNT: usize = 5;
const STAR_LIFE_DECAY: f32 = 0.008;

/// Frames between ripple spawns.
pub const RIPPLE_SPAWN_INTERVAL: u32 = 40;
const RIPPLE_GROWTH: f32 = 4.0;
const RIPPLE_DECAY: f32 = 0.02;
// Expiry threshold. Repeated f32 subtraction leaves a residue of ~4e-7
// where the exact sum would be zero; anything below this renders as
// nothing and counts as fully faded.
const RIPPLE_MIN_ALPHA: f32 = 1e-4;
/// Concentric rings drawn per ripple, spaced outward from its radius.
pub const RIPPLE_RING_COUNT: usize = 3;
pub const RIPPLE_RING_SPACING: f32 = 8.0;

pub const SPARKLE_COUNT: usize = 80;
const SPARKLE_BASE_RADIUS: f32 = 250.0;
const SPARKLE_RADIUS_WOBBLE: f32 = 50.0;
const SPARKLE_CORE_THRESHOLD: f32 = 0.7;

/// Base radius of the pulsing aura disc, in reference units.
pub const AURA_BASE_RADIUS: f32 = 300.0;

/// A streaking particle with a trailing segment and a decaying life.
#[derive(Debug, Clone, Copy)]
pub struct ShootingStar {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub length: f32,
    pub angle: f32,
    pub life: f32,
}

impl ShootingStar {
    fn spawn(rng: &mut fastrand::Rng, viewport: &Viewport) -> Self {
        let scale = viewport.scale();
        Self {
            x: rng.f32() * viewport.width,
            y: rng.f32() * viewport.height * 0.5,
            // Speed and trail length are tuned for the reference extent;
            // scaling keeps motion proportional on small surfaces.
            speed: (rng.f32() * 8.0 + 4.0) * scale,
            length: (rng.f32() * 60.0 + 40.0) * scale,
            // Travel direction confined to the lower-right quadrant sweep
            angle: rng.f32() * FRAC_PI_4 + FRAC_PI_4,
            life: 1.0,
        }
    }

    /// Endpoint of the trailing segment, opposite the travel direction.
    pub fn tail(&self) -> (f32, f32) {
        (
            self.x - self.angle.cos() * self.length,
            self.y - self.angle.sin() * self.length,
        )
    }
}

/// Fixed pool of [`STAR_COUNT`] shooting stars. Expired or off-surface
/// stars are respawned in the same slot, never removed.
#[derive(Debug)]
pub struct StarField {
    stars: [ShootingStar; STAR_COUNT],
    rng: fastrand::Rng,
}

impl StarField {
    pub fn new(seed: u64, viewport: &Viewport) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let stars = std::array::from_fn(|_| ShootingStar::spawn(&mut rng, viewport));
        Self { stars, rng }
    }

    pub fn advance(&mut self, viewport: &Viewport) {
        for star in &mut self.stars {
            star.x += star.angle.cos() * star.speed;
            star.y += star.angle.sin() * star.speed;
            star.life -= STAR_LIFE_DECAY;

            if star.life <= 0.0 || star.x > viewport.width || star.y > viewport.height {
                *star = ShootingStar::spawn(&mut self.rng, viewport);
            }
        }
    }

    pub fn stars(&self) -> &[ShootingStar] {
        &self.stars
    }

    #[cfg(test)]
    fn stars_mut(&mut self) -> &mut [ShootingStar] {
        &mut self.stars
    }
}

/// An expanding ring with decaying opacity.
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub radius: f32,
    pub alpha: f32,
}

/// Ripple spawner and list. A fresh ripple is appended every
/// [`RIPPLE_SPAWN_INTERVAL`] frames; fully faded ripples are dropped.
/// Render order is insertion order.
#[derive(Debug, Default)]
pub struct RippleField {
    ripples: Vec<Ripple>,
    timer: u32,
}

impl RippleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. Returns true when a new ripple was spawned.
    pub fn advance(&mut self) -> bool {
        self.timer += 1;
        let spawned = self.timer >= RIPPLE_SPAWN_INTERVAL;
        if spawned {
            self.ripples.push(Ripple {
                radius: 0.0,
                alpha: 1.0,
            });
            self.timer = 0;
        }

        for ripple in &mut self.ripples {
            ripple.radius += RIPPLE_GROWTH;
            ripple.alpha -= RIPPLE_DECAY;
        }
        self.ripples.retain(|ripple| ripple.alpha > RIPPLE_MIN_ALPHA);

        spawned
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }
}

/// Orbit attributes of one sparkle for a frame, in reference units
/// relative to the viewport center.
#[derive(Debug, Clone, Copy)]
pub struct Sparkle {
    pub angle: f32,
    pub radius: f32,
    pub size: f32,
    pub alpha: f32,
    /// Whether the bright white core flickers on this frame.
    pub core: bool,
}

/// Deterministic orbit state for sparkle `index` at the given rotation.
/// No per-sparkle state is kept between frames.
pub fn sparkle_at(rotation: f32, index: usize) -> Sparkle {
    let i = index as f32;
    let phase = (rotation * 3.0 + i).sin();
    Sparkle {
        angle: (rotation * 2.0 + i * 0.4) % TAU,
        radius: SPARKLE_BASE_RADIUS + phase * SPARKLE_RADIUS_WOBBLE,
        size: 2.0 + (rotation * 4.0 + i).sin() * 1.5,
        alpha: 0.4 + (rotation * 2.0 + i).sin() * 0.4,
        core: phase > SPARKLE_CORE_THRESHOLD,
    }
}
