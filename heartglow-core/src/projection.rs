/// Fixed-perspective projection onto the drawing surface
use nalgebra::Point3;

/// Distance from the viewpoint to the origin along the depth axis.
pub const PERSPECTIVE_DISTANCE: f32 = 4.0;

/// Fixed magnification applied before the perspective divide.
pub const MAGNIFICATION: f32 = 400.0;

/// Viewport dimension the magnification is tuned for; the derived scale
/// keeps the figure proportional at any surface size.
pub const REFERENCE_EXTENT: f32 = 400.0;

// Depth floor for the perspective divide. The heart geometry never comes
// close to it (z stays within +-0.36 after pulse); it only tames the
// theoretical degeneracy at z = -4.
const MIN_DEPTH: f32 = 1e-3;

/// Drawing-surface dimensions and the quantities derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Uniform scale mapping reference-space units to surface pixels.
    pub fn scale(&self) -> f32 {
        self.width.min(self.height) / REFERENCE_EXTENT
    }
}

/// A surface point after projection to 2D, keeping its depth coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

/// Project a transformed point onto the viewport. Y points up in model
/// space and down on the surface, hence the sign flip.
pub fn project(point: &Point3<f32>, viewport: &Viewport) -> Projected {
    let depth = (point.z + PERSPECTIVE_DISTANCE).max(MIN_DEPTH);
    let (center_x, center_y) = viewport.center();
    let factor = viewport.scale() * MAGNIFICATION / depth;

    Projected {
        x: point.x * factor + center_x,
        y: -point.y * factor + center_y,
        depth: point.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        // The u=0, v=0 pole of the surface (x = y = 0, z = 0.3) must land
        // exactly on the viewport center.
        let viewport = Viewport::new(400.0, 400.0);
        let projected = project(&Point3::new(0.0, 0.0, 0.3), &viewport);
        assert_eq!(projected.x, 200.0);
        assert_eq!(projected.y, 200.0);
        assert_eq!(projected.depth, 0.3);
    }

    #[test]
    fn test_scale_follows_smaller_dimension() {
        let viewport = Viewport::new(800.0, 400.0);
        assert!((viewport.scale() - 1.0).abs() < 1e-6);
        let viewport = Viewport::new(200.0, 400.0);
        assert!((viewport.scale() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_nearer_points_project_larger() {
        let viewport = Viewport::new(400.0, 400.0);
        let near = project(&Point3::new(1.0, 0.0, -0.3), &viewport);
        let far = project(&Point3::new(1.0, 0.0, 0.3), &viewport);
        assert!(near.x > far.x);
    }

    #[test]
    fn test_degenerate_depth_is_finite() {
        let viewport = Viewport::new(400.0, 400.0);
        let projected = project(&Point3::new(1.0, 1.0, -PERSPECTIVE_DISTANCE), &viewport);
        assert!(projected.x.is_finite());
        assert!(projected.y.is_finite());
    }

    #[test]
    fn test_vertical_flip() {
        let viewport = Viewport::new(400.0, 400.0);
        let projected = project(&Point3::new(0.0, 1.0, 0.0), &viewport);
        // Positive model y is above the center on the surface
        assert!(projected.y < 200.0);
    }
}
