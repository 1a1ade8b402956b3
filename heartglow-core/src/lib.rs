/// Heartglow Core Library - animation logic for the heart scene
///
/// This library provides the host-independent functionality for the
/// animation: heart-surface sampling, rotation and pulse transforms,
/// perspective projection, the ambient particle layers, and the
/// per-frame animation state.

pub mod effects;
pub mod projection;
pub mod state;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use effects::{Ripple, RippleField, ShootingStar, Sparkle, StarField, sparkle_at};
pub use projection::{project, Projected, Viewport};
pub use state::AnimationState;
pub use surface::{HeartSurface, SurfacePoint};
pub use transform::{pulse, rotate_y, Oscillator};
