/// Rotation, pulse scaling, and bounce oscillation
use nalgebra::Point3;

/// Rotate a point around the vertical axis (X-Z plane, Y unchanged).
pub fn rotate_y(point: &Point3<f32>, angle: f32) -> Point3<f32> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(
        point.x * cos - point.z * sin,
        point.y,
        point.x * sin + point.z * cos,
    )
}

/// Scale all three coordinates uniformly by the current pulse factor.
pub fn pulse(point: &Point3<f32>, scale: f32) -> Point3<f32> {
    Point3::new(point.x * scale, point.y * scale, point.z * scale)
}

/// A value walking between two bounds by a fixed step, reversing direction
/// at each bound. The value is clamped to the bound on reversal, so it never
/// leaves `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    value: f32,
    step: f32,
    min: f32,
    max: f32,
    direction: f32,
}

impl Oscillator {
    pub fn new(initial: f32, step: f32, min: f32, max: f32) -> Self {
        Self {
            value: initial.clamp(min, max),
            step,
            min,
            max,
            direction: 1.0,
        }
    }

    /// Advance one frame and return the new value.
    pub fn advance(&mut self) -> f32 {
        self.value += self.step * self.direction;
        if self.value >= self.max {
            self.value = self.max;
            self.direction = -1.0;
        } else if self.value <= self.min {
            self.value = self.min;
            self.direction = 1.0;
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_preserves_radius() {
        let point = Point3::new(0.7, -0.4, 0.3);
        let radius_sq = point.x * point.x + point.z * point.z;
        for i in 0..100 {
            let angle = i as f32 * 0.37;
            let rotated = rotate_y(&point, angle);
            let rotated_sq = rotated.x * rotated.x + rotated.z * rotated.z;
            assert!((rotated_sq - radius_sq).abs() < 1e-4);
            assert_eq!(rotated.y, point.y);
        }
    }

    #[test]
    fn test_identity_rotation() {
        let point = Point3::new(0.5, 1.0, -0.2);
        let rotated = rotate_y(&point, 0.0);
        assert!((rotated - point).norm() < 1e-6);
    }

    #[test]
    fn test_pulse_scales_uniformly() {
        let point = Point3::new(1.0, -2.0, 0.3);
        let scaled = pulse(&point, 1.08);
        assert!((scaled.x - 1.08).abs() < 1e-6);
        assert!((scaled.y + 2.16).abs() < 1e-6);
        assert!((scaled.z - 0.324).abs() < 1e-6);
    }

    #[test]
    fn test_oscillator_stays_in_bounds() {
        let mut pulse = Oscillator::new(1.0, 0.003, 0.95, 1.08);
        let mut aura = Oscillator::new(1.0, 0.005, 1.0, 1.3);
        for _ in 0..10_000 {
            let p = pulse.advance();
            let a = aura.advance();
            assert!((0.95..=1.08).contains(&p));
            assert!((1.0..=1.3).contains(&a));
        }
    }

    #[test]
    fn test_oscillator_reverses_at_bounds() {
        let mut osc = Oscillator::new(0.9, 0.1, 0.0, 1.0);
        assert!((osc.advance() - 1.0).abs() < 1e-6);
        // Direction flipped at the upper bound
        assert!(osc.advance() < 1.0);
    }
}
