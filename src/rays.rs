use tracing::info;
use vecdot::library::Vec3;
use vecdot::sink::{Event, RayColor, Sink};
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};
use sdl2::gfx::primitives::DrawRenderer;

/// How far the z axis leans into the screen, as a fraction of its length.
const DEPTH_SHEAR: f32 = 0.5;
/// Pixels kept free around the drawing.
const MARGIN: f32 = 30.0;
const RAY_WIDTH: u8 = 3;

pub(crate) fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

pub fn ray_color(color: RayColor) -> Color {
    match color {
        RayColor::Cyan => Color::CYAN,
        RayColor::Red => Color::RED,
        RayColor::Yellow => Color::YELLOW,
        RayColor::Magenta => Color::MAGENTA,
    }
}

/// Oblique projection of world space onto the window, origin at the center.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub center: [f32; 2],
    pub pixels_per_unit: f32,
}

impl Projection {
    /// Fits a cube of half-size `extent` into a `width` x `height` window.
    pub fn fit(width: u32, height: u32, extent: f32) -> Projection {
        let half = (width.min(height) as f32 / 2.0 - MARGIN).max(1.0);
        let reach = extent.max(1.0) * (1.0 + DEPTH_SHEAR * std::f32::consts::FRAC_1_SQRT_2);
        Projection {
            center: [width as f32 / 2.0, height as f32 / 2.0],
            pixels_per_unit: half / reach,
        }
    }

    pub fn project(&self, point: Vec3) -> [f32; 2] {
        let lean = point[2] * DEPTH_SHEAR * std::f32::consts::FRAC_1_SQRT_2;
        let x = self.center[0] + (point[0] - lean) * self.pixels_per_unit;
        // screen y grows downwards
        let y = self.center[1] - (point[1] - lean) * self.pixels_per_unit;
        [x, y]
    }
}

pub fn draw_line<T: RenderTarget>(canvas: &mut Canvas<T>, from: [f32; 2], to: [f32; 2], width: u8, color: Color) {
    let x1 = from[0] as i16;
    let y1 = from[1] as i16;
    let x2 = to[0] as i16;
    let y2 = to[1] as i16;
    let _ = canvas.thick_line(x1, y1, x2, y2, width, to_abgr(color));
}

/// Sink that draws rays onto an SDL canvas and logs text through tracing.
pub struct CanvasSink<'a, T: RenderTarget> {
    pub canvas: &'a mut Canvas<T>,
    pub projection: Projection,
}

impl<T: RenderTarget> Sink for CanvasSink<'_, T> {
    fn emit(&mut self, event: Event) {
        match event {
            Event::Log(line) => info!("{line}"),
            Event::Ray { origin, direction, color } => {
                let end = [origin[0] + direction[0], origin[1] + direction[1], origin[2] + direction[2]];
                let from = self.projection.project(origin);
                let to = self.projection.project(end);
                let color = ray_color(color);
                draw_line(self.canvas, from, to, RAY_WIDTH, color);
                let _ = self.canvas.filled_circle(to[0] as i16, to[1] as i16, 4, to_abgr(color));
            }
        }
    }
}
