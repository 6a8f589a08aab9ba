use vecdot::controller::{PairMode, VectorDemo};
use vecdot::error::DemoError;
use crate::rays::{Projection, draw_line};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::ttf::Font;

const AXIS_COLOR: Color = Color::RGB(90, 90, 90);
const TEXT_COLOR: Color = Color::RGB(255, 255, 255);
const LINE_HEIGHT: i32 = 22;

/// Draws the x, y and z axes through the origin, `extent` units each way.
pub fn draw_axes(canvas: &mut Canvas<Window>, projection: &Projection, extent: f32) {
    let axes = [
        [extent, 0.0, 0.0],
        [0.0, extent, 0.0],
        [0.0, 0.0, extent],
    ];
    for axis in axes {
        let from = projection.project([-axis[0], -axis[1], -axis[2]]);
        let to = projection.project(axis);
        draw_line(canvas, from, to, 1, AXIS_COLOR);
    }
}

pub fn status_lines(demo: &VectorDemo) -> Vec<String> {
    let mode = match demo.pair_mode() {
        PairMode::Unscaled => "unscaled".to_string(),
        PairMode::Scaled => {
            let (a, b) = demo.scalars();
            format!("scaled (A x{a}, B x{b})")
        }
    };
    let mut lines = vec![
        format!("showing: {mode}"),
        format!("unscaled dot: {:.3}", demo.unscaled_dot()),
        format!("scaled dot: {:.3}", demo.scaled_dot()),
    ];
    if let Some(relation) = demo.relation() {
        lines.push(relation.message().to_string());
    }
    lines
}

/// Renders the status lines in the top-left corner.
pub fn draw_status(canvas: &mut Canvas<Window>, font: &Font, demo: &VectorDemo) -> Result<(), DemoError> {
    let texture_creator = canvas.texture_creator();
    for (i, line) in status_lines(demo).iter().enumerate() {
        let text_surface = font
            .render(line)
            .blended(TEXT_COLOR)
            .map_err(|e| DemoError::Sdl(e.to_string()))?;
        let text_texture = texture_creator
            .create_texture_from_surface(&text_surface)
            .map_err(|e| DemoError::Sdl(e.to_string()))?;
        let texture_query = text_texture.query();
        let target_rect = Rect::new(10, 10 + LINE_HEIGHT * i as i32, texture_query.width, texture_query.height);
        canvas.copy(&text_texture, None, Some(target_rect)).map_err(DemoError::Sdl)?;
    }
    Ok(())
}
