/// Frame composition for the heart scene
use crate::canvas::{Canvas, Rgba};
use heartglow_core::effects::{
    sparkle_at, ShootingStar, Sparkle, AURA_BASE_RADIUS, RIPPLE_RING_COUNT, RIPPLE_RING_SPACING,
    SPARKLE_COUNT,
};
use heartglow_core::projection::REFERENCE_EXTENT;
use heartglow_core::{project, pulse, rotate_y, AnimationState, HeartSurface, Projected, Viewport};

const CYAN: Rgba = Rgba {
    r: 0.0,
    g: 212.0 / 255.0,
    b: 1.0,
    a: 1.0,
};
const AZURE: Rgba = Rgba {
    r: 0.0,
    g: 153.0 / 255.0,
    b: 1.0,
    a: 1.0,
};
const BLUE: Rgba = Rgba {
    r: 0.0,
    g: 102.0 / 255.0,
    b: 1.0,
    a: 1.0,
};
const WHITE: Rgba = Rgba {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

const WIREFRAME_STROKE: f32 = 1.5;
const STAR_STROKE: f32 = 2.5;

/// Draws one frame of the scene onto the canvas, in the fixed stage order:
/// clear, aura, ripples, shooting stars, heart wireframe, sparkles.
pub struct SceneRenderer {
    surface: HeartSurface,
    projected: Vec<Projected>,
}

impl SceneRenderer {
    pub fn new(surface: HeartSurface) -> Self {
        let capacity = surface.points().len();
        Self {
            surface,
            projected: Vec::with_capacity(capacity),
        }
    }

    pub fn render(&mut self, canvas: &mut Canvas, state: &AnimationState) {
        let viewport = canvas.viewport();

        canvas.clear(Rgba::BLACK);
        canvas.set_glow(None);

        draw_aura(canvas, &viewport, state.aura.value());
        draw_ripples(canvas, &viewport, state);
        draw_stars(canvas, state.stars.stars());

        self.project_surface(state, &viewport);
        self.draw_wireframe(canvas, &viewport);

        draw_sparkles(canvas, &viewport, state.rotation);
    }

    /// Rotate, pulse, and project every surface point into the scratch
    /// buffer, kept in the surface's row-major order.
    fn project_surface(&mut self, state: &AnimationState, viewport: &Viewport) {
        self.projected.clear();
        let pulse_scale = state.pulse.value();
        for point in self.surface.points() {
            let rotated = rotate_y(&point.position, state.rotation);
            let pulsed = pulse(&rotated, pulse_scale);
            self.projected.push(project(&pulsed, viewport));
        }
    }

    fn projected_at(&self, v: usize, u: usize) -> Option<&Projected> {
        let stride = self.surface.stride();
        if v >= stride || u >= stride {
            return None;
        }
        self.projected.get(v * stride + u)
    }

    /// Two families of polylines over the projected grid: one per v-row
    /// (varying u), one per u-column (varying v), both using the surface
    /// stride for indexing.
    fn draw_wireframe(&self, canvas: &mut Canvas, viewport: &Viewport) {
        canvas.set_glow(Some(CYAN));
        let stride = self.surface.stride();

        for v in 0..stride {
            for u in 0..stride.saturating_sub(1) {
                if let (Some(a), Some(b)) = (self.projected_at(v, u), self.projected_at(v, u + 1)) {
                    stroke_gradient_segment(canvas, viewport, a, b);
                }
            }
        }
        for u in 0..stride {
            for v in 0..stride.saturating_sub(1) {
                if let (Some(a), Some(b)) = (self.projected_at(v, u), self.projected_at(v + 1, u)) {
                    stroke_gradient_segment(canvas, viewport, a, b);
                }
            }
        }

        canvas.set_glow(None);
    }
}

/// Radial wireframe gradient keyed to distance from the viewport center.
fn radial_color(viewport: &Viewport, x: f32, y: f32) -> Rgba {
    let (center_x, center_y) = viewport.center();
    let dx = x - center_x;
    let dy = y - center_y;
    let extent = REFERENCE_EXTENT * viewport.scale();
    let t = ((dx * dx + dy * dy).sqrt() / extent).clamp(0.0, 1.0);
    if t < 0.5 {
        CYAN.lerp(AZURE, t * 2.0)
    } else {
        AZURE.lerp(BLUE, (t - 0.5) * 2.0)
    }
}

fn stroke_gradient_segment(canvas: &mut Canvas, viewport: &Viewport, a: &Projected, b: &Projected) {
    let start = radial_color(viewport, a.x, a.y);
    let end = radial_color(viewport, b.x, b.y);
    canvas.stroke_line((a.x, a.y), (b.x, b.y), WIREFRAME_STROKE, |t| {
        start.lerp(end, t)
    });
}

/// Pulsing radial glow behind the heart.
fn draw_aura(canvas: &mut Canvas, viewport: &Viewport, aura_scale: f32) {
    let (center_x, center_y) = viewport.center();
    let radius = AURA_BASE_RADIUS * aura_scale * viewport.scale();
    canvas.fill_radial_gradient(
        (center_x, center_y),
        radius,
        &[
            (0.0, CYAN.with_alpha(0.2)),
            (0.5, AZURE.with_alpha(0.1)),
            (1.0, BLUE.with_alpha(0.0)),
        ],
    );
}

/// Each ripple renders as three concentric rings fading outward.
fn draw_ripples(canvas: &mut Canvas, viewport: &Viewport, state: &AnimationState) {
    let (center_x, center_y) = viewport.center();
    let scale = viewport.scale();

    for ripple in state.ripples.ripples() {
        for ring in 0..RIPPLE_RING_COUNT {
            let alpha = ripple.alpha * (0.5 - ring as f32 * 0.15);
            if alpha <= 0.0 {
                continue;
            }
            let radius = (ripple.radius + ring as f32 * RIPPLE_RING_SPACING) * scale;
            let width = ((2.5 - ring as f32 * 0.5) * scale).max(1.0);
            canvas.stroke_circle(
                (center_x, center_y),
                radius,
                width,
                CYAN.with_alpha(alpha),
            );
        }
    }
}

/// Trail gradient: white head fading through cyan to transparent tail.
fn draw_stars(canvas: &mut Canvas, stars: &[ShootingStar]) {
    for star in stars {
        let life = star.life.clamp(0.0, 1.0);
        let head = WHITE.with_alpha(life);
        let mid = CYAN.with_alpha(life * 0.7);
        let tail = CYAN.with_alpha(0.0);
        canvas.stroke_line((star.x, star.y), star.tail(), STAR_STROKE, |t| {
            if t < 0.3 {
                head.lerp(mid, t / 0.3)
            } else {
                mid.lerp(tail, (t - 0.3) / 0.7)
            }
        });
    }
}

/// Deterministic orbiting sparkles with a flickering white core.
fn draw_sparkles(canvas: &mut Canvas, viewport: &Viewport, rotation: f32) {
    let (center_x, center_y) = viewport.center();
    let scale = viewport.scale();

    for index in 0..SPARKLE_COUNT {
        let Sparkle {
            angle,
            radius,
            size,
            alpha,
            core,
        } = sparkle_at(rotation, index);

        let x = center_x + angle.cos() * radius * scale;
        let y = center_y + angle.sin() * radius * scale;
        let size = (size * scale).max(0.5);

        canvas.fill_circle((x, y), size, CYAN.with_alpha(alpha.clamp(0.0, 1.0)));
        if core {
            canvas.fill_circle((x, y), size * 0.5, WHITE.with_alpha(0.6));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartglow_core::surface::DEFAULT_RESOLUTION;

    fn renderer() -> SceneRenderer {
        SceneRenderer::new(HeartSurface::generate(DEFAULT_RESOLUTION))
    }

    #[test]
    fn test_render_marks_the_canvas() {
        let mut canvas = Canvas::new(80, 24);
        let viewport = canvas.viewport();
        let mut state = AnimationState::new(11, &viewport);
        state.tick(&viewport);

        let mut scene = renderer();
        scene.render(&mut canvas, &state);

        let lit = (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y).unwrap() != Rgba::BLACK)
            .count();
        assert!(lit > 100);
    }

    #[test]
    fn test_projection_buffer_matches_grid() {
        let mut canvas = Canvas::new(60, 30);
        let viewport = canvas.viewport();
        let state = AnimationState::new(2, &viewport);
        let mut scene = renderer();
        scene.render(&mut canvas, &state);

        let stride = scene.surface.stride();
        assert_eq!(scene.projected.len(), stride * stride);
        assert!(scene.projected_at(stride, 0).is_none());
        assert!(scene.projected_at(0, stride).is_none());
    }

    #[test]
    fn test_wireframe_stays_centered() {
        // With rotation 0 the projected grid is symmetric about the
        // vertical center line; its mean x sits on the center.
        let canvas = Canvas::new(100, 50);
        let viewport = canvas.viewport();
        let state = AnimationState::new(3, &viewport);
        let mut scene = renderer();
        scene.project_surface(&state, &viewport);

        let mean_x: f32 =
            scene.projected.iter().map(|p| p.x).sum::<f32>() / scene.projected.len() as f32;
        let (center_x, _) = viewport.center();
        assert!((mean_x - center_x).abs() < 0.5);
    }

    #[test]
    fn test_radial_color_gradient_order() {
        let viewport = Viewport::new(400.0, 400.0);
        let center = radial_color(&viewport, 200.0, 200.0);
        let rim = radial_color(&viewport, 200.0 + 400.0, 200.0);
        assert_eq!(center, CYAN);
        assert_eq!(rim, BLUE);
    }
}
