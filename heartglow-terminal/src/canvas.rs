/// RGBA drawing surface rasterized to terminal half-block cells
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use heartglow_core::Viewport;
use std::io::Write;

/// An RGBA color with float channels; alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Componentwise linear interpolation, alpha included.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Source-over blend onto an opaque destination.
    fn over(self, dst: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        Rgba {
            r: self.r * a + dst.r * (1.0 - a),
            g: self.g * a + dst.g * (1.0 - a),
            b: self.b * a + dst.b * (1.0 - a),
            a: 1.0,
        }
    }

    fn to_color(self) -> Color {
        Color::Rgb {
            r: (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }
}

/// Immediate-mode pixel canvas. Each terminal cell holds two vertically
/// stacked pixels rendered with the upper half block, so the pixel grid is
/// `columns x (rows * 2)` and roughly square on screen.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
    glow: Option<Rgba>,
}

impl Canvas {
    pub fn new(columns: u16, rows: u16) -> Self {
        let width = columns as usize;
        let height = rows as usize * 2;
        Self {
            width,
            height,
            pixels: vec![Rgba::BLACK; width * height],
            glow: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The viewport this canvas exposes to the animation, in pixel space.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Solid fill of the whole surface.
    pub fn clear(&mut self, color: Rgba) {
        let opaque = color.with_alpha(1.0);
        for pixel in &mut self.pixels {
            *pixel = opaque;
        }
    }

    /// Enable or disable the glow halo deposited around plotted pixels.
    pub fn set_glow(&mut self, glow: Option<Rgba>) {
        self.glow = glow;
    }

    /// Alpha-blend a single pixel; coordinates outside the surface are
    /// discarded. A set glow color additionally brightens the neighbors.
    pub fn plot(&mut self, x: f32, y: f32, color: Rgba) {
        let ix = x.round() as i32;
        let iy = y.round() as i32;
        if let Some(halo) = self.glow {
            let halo = halo.with_alpha(halo.a * color.a * 0.25);
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                self.blend_at(ix + dx, iy + dy, halo);
            }
        }
        self.blend_at(ix, iy, color);
    }

    fn blend_at(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let index = y as usize * self.width + x as usize;
        self.pixels[index] = color.over(self.pixels[index]);
    }

    /// Stroke a line segment, coloring each sample via `color_at(t)` with
    /// t running 0 at the start to 1 at the end (linear gradients).
    pub fn stroke_line<F>(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color_at: F)
    where
        F: Fn(f32) -> Rgba,
    {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let length = (dx * dx + dy * dy).sqrt();
        let steps = (length * 2.0).ceil().max(1.0) as usize;

        // Perpendicular offset for strokes wider than one pixel
        let thick = width > 1.5 && length > 0.0;
        let (nx, ny) = if thick {
            (-dy / length, dx / length)
        } else {
            (0.0, 0.0)
        };

        let mut last = (i32::MIN, i32::MIN);
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let x = from.0 + dx * t;
            let y = from.1 + dy * t;
            let cell = (x.round() as i32, y.round() as i32);
            // Skip duplicate cells so translucent strokes do not double-blend;
            // the final sample always lands so endpoints take their color.
            if cell == last && step != steps {
                continue;
            }
            last = cell;

            let color = color_at(t);
            self.plot(x, y, color);
            if thick {
                self.plot(x + nx, y + ny, color.with_alpha(color.a * 0.5));
            }
        }
    }

    /// Stroke a circle as an anti-aliased distance band around `radius`.
    pub fn stroke_circle(&mut self, center: (f32, f32), radius: f32, width: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let half = (width / 2.0).max(0.5);
        let reach = (radius + half + 1.0).ceil() as i32;
        let min_x = (center.0 as i32 - reach).max(0);
        let max_x = (center.0 as i32 + reach).min(self.width as i32 - 1);
        let min_y = (center.1 as i32 - reach).max(0);
        let max_y = (center.1 as i32 + reach).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - center.0;
                let dy = y as f32 - center.1;
                let distance = (dx * dx + dy * dy).sqrt();
                let coverage = (half + 0.5 - (distance - radius).abs()).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_at(x, y, color.with_alpha(color.a * coverage));
                }
            }
        }
    }

    /// Fill a disc with a single color, anti-aliased at the edge.
    pub fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let reach = (radius + 1.0).ceil() as i32;
        let min_x = (center.0 as i32 - reach).max(0);
        let max_x = (center.0 as i32 + reach).min(self.width as i32 - 1);
        let min_y = (center.1 as i32 - reach).max(0);
        let max_y = (center.1 as i32 + reach).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - center.0;
                let dy = y as f32 - center.1;
                let distance = (dx * dx + dy * dy).sqrt();
                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_at(x, y, color.with_alpha(color.a * coverage));
                }
            }
        }
    }

    /// Fill a disc with a multi-stop radial gradient. Stops are
    /// `(offset, color)` pairs ordered by offset in [0, 1].
    pub fn fill_radial_gradient(
        &mut self,
        center: (f32, f32),
        radius: f32,
        stops: &[(f32, Rgba)],
    ) {
        if radius <= 0.0 || stops.is_empty() {
            return;
        }
        let reach = radius.ceil() as i32;
        let min_x = (center.0 as i32 - reach).max(0);
        let max_x = (center.0 as i32 + reach).min(self.width as i32 - 1);
        let min_y = (center.1 as i32 - reach).max(0);
        let max_y = (center.1 as i32 + reach).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - center.0;
                let dy = y as f32 - center.1;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance <= radius {
                    self.blend_at(x, y, sample_stops(stops, distance / radius));
                }
            }
        }
    }

    /// Queue the canvas to the writer as styled half-block rows.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.height / 2 {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            for x in 0..self.width {
                let upper = self.pixels[(row * 2) * self.width + x];
                let lower = self.pixels[(row * 2 + 1) * self.width + x];
                writer.queue(SetForegroundColor(upper.to_color()))?;
                writer.queue(SetBackgroundColor(lower.to_color()))?;
                writer.queue(Print('\u{2580}'))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Sample a gradient stop list at offset `t`.
fn sample_stops(stops: &[(f32, Rgba)], t: f32) -> Rgba {
    let first = stops[0];
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let (start, start_color) = pair[0];
        let (end, end_color) = pair[1];
        if t <= end {
            let span = end - start;
            let local = if span > 0.0 { (t - start) / span } else { 1.0 };
            return start_color.lerp(end_color, local);
        }
    }
    stops[stops.len() - 1].1
}
