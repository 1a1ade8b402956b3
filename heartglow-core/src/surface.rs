/// Parametric heart-surface sampling
use nalgebra::Point3;
use std::f32::consts::{PI, TAU};

/// Grid resolution used by the animation (36x36 sample points)
pub const DEFAULT_RESOLUTION: usize = 35;

/// A sampled surface point with its grid coordinates
#[derive(Debug, Clone, Copy)]
pub struct SurfacePoint {
    pub u: usize,
    pub v: usize,
    pub position: Point3<f32>,
}

/// A regular (resolution + 1)^2 grid sampling the heart surface.
///
/// Points are stored row-major with `v` as the row index, so the flat index
/// of a point is `v * stride + u` with `stride = resolution + 1`. The grid
/// is generated once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct HeartSurface {
    resolution: usize,
    points: Vec<SurfacePoint>,
}

impl HeartSurface {
    /// Sample the heart parametrization over a uniform (u, v) grid,
    /// u sweeping [0, 2pi] and v sweeping [0, pi] in `resolution + 1` steps.
    ///
    /// `resolution` must be at least 1; the parameter steps divide by it.
    pub fn generate(resolution: usize) -> Self {
        debug_assert!(resolution >= 1, "grid resolution must be at least 1");
        let steps = resolution + 1;
        let mut points = Vec::with_capacity(steps * steps);

        for v in 0..steps {
            for u in 0..steps {
                let u_param = u as f32 / resolution as f32 * TAU;
                let v_param = v as f32 / resolution as f32 * PI;
                points.push(SurfacePoint {
                    u,
                    v,
                    position: heart_point(u_param, v_param),
                });
            }
        }

        Self { resolution, points }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Row length for flat indexing; also the number of rows.
    pub fn stride(&self) -> usize {
        self.resolution + 1
    }

    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    /// Bound-checked grid access at row `v`, column `u`.
    pub fn point(&self, v: usize, u: usize) -> Option<&SurfacePoint> {
        let stride = self.stride();
        if v >= stride || u >= stride {
            return None;
        }
        self.points.get(v * stride + u)
    }
}

impl Default for HeartSurface {
    fn default() -> Self {
        Self::generate(DEFAULT_RESOLUTION)
    }
}

/// Closed-form heart surface at parameters u, v.
fn heart_point(u: f32, v: f32) -> Point3<f32> {
    let x = u.sin().powi(3) * v.sin();
    let y = (13.0 * u.cos() - 5.0 * (2.0 * u).cos() - 2.0 * (3.0 * u).cos() - (4.0 * u).cos())
        / 16.0
        * v.sin();
    let z = 0.3 * v.cos();
    Point3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_count() {
        for resolution in [1, 2, 7, DEFAULT_RESOLUTION] {
            let surface = HeartSurface::generate(resolution);
            let steps = resolution + 1;
            assert_eq!(surface.points().len(), steps * steps);
            assert_eq!(surface.stride(), steps);
        }
    }

    #[test]
    fn test_points_finite() {
        let surface = HeartSurface::default();
        for point in surface.points() {
            assert!(point.position.x.is_finite());
            assert!(point.position.y.is_finite());
            assert!(point.position.z.is_finite());
        }
    }

    #[test]
    fn test_row_major_indices() {
        let surface = HeartSurface::generate(4);
        let stride = surface.stride();
        for (index, point) in surface.points().iter().enumerate() {
            assert_eq!(index, point.v * stride + point.u);
        }
    }

    #[test]
    fn test_grid_access_matches_flat_order() {
        let surface = HeartSurface::generate(3);
        for v in 0..surface.stride() {
            for u in 0..surface.stride() {
                let point = surface.point(v, u).unwrap();
                assert_eq!((point.u, point.v), (u, v));
            }
        }
    }

    #[test]
    fn test_out_of_range_access() {
        let surface = HeartSurface::generate(3);
        assert!(surface.point(surface.stride(), 0).is_none());
        assert!(surface.point(0, surface.stride()).is_none());
    }

    #[test]
    #[should_panic(expected = "grid resolution must be at least 1")]
    fn test_zero_resolution_rejected() {
        HeartSurface::generate(0);
    }

    #[test]
    fn test_pole_point() {
        // At u = 0, v = 0: x = 0, y = (13 - 5 - 2 - 1)/16 * sin(0) = 0, z = 0.3
        let surface = HeartSurface::generate(4);
        let pole = surface.point(0, 0).unwrap().position;
        assert!(pole.x.abs() < 1e-6);
        assert!(pole.y.abs() < 1e-6);
        assert!((pole.z - 0.3).abs() < 1e-6);
    }
}
