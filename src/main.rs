//! Dot-product demo.
//!
//! Generates two random vectors and two integer scalars, logs the dot
//! products of the plain and the scaled pair along with how the vectors
//! relate, then draws the pairs as rays from the origin, switching between
//! them every few seconds.

mod overlay;
mod rays;

use crate::rays::Projection;
use vecdot::config::{DemoConfig, Norm, validate_time_step};
use vecdot::controller::VectorDemo;
use vecdot::error::DemoError;
use vecdot::sink::TraceSink;
use anyhow::Result;
use clap::Parser;
use sdl2::pixels::Color;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Window title displayed in the title bar
const TITLE: &str = "Dot product in Rust";
/// Width of the window in pixels
const WINDOW_WIDTH: u32 = 800;
/// Height of the window in pixels
const WINDOW_HEIGHT: u32 = 800;
/// Background color for the canvas
const BACKGROUND: Color = Color::BLACK;
/// Font used for the status text
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
const FONT_SIZE: u16 = 16;

#[derive(Parser, Debug)]
#[command(version, about = "Random vectors, their dot products, and a ray view")]
struct Args {
    /// Seed for the random generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds between showing the unscaled and the scaled pair
    #[arg(long, default_value_t = vecdot::config::SWITCH_INTERVAL)]
    switch_interval: f32,

    #[arg(long, default_value_t = vecdot::config::SCALAR_MIN)]
    scalar_min: i32,

    #[arg(long, default_value_t = vecdot::config::SCALAR_MAX)]
    scalar_max: i32,

    /// Use the true vector length instead of the two-smaller-sides one
    #[arg(long)]
    euclidean: bool,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Fixed time step in seconds for headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    #[arg(long, default_value = FONT_PATH)]
    font: String,
}

impl Args {
    fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            switch_interval: self.switch_interval,
            scalar_min: self.scalar_min,
            scalar_max: self.scalar_max,
            seed: self.seed,
            norm: if self.euclidean { Norm::Euclidean } else { Norm::Legacy },
        }
    }
}

fn sdl_err(err: impl ToString) -> DemoError {
    DemoError::Sdl(err.to_string())
}

/// Steps the demo a fixed number of frames, logging every event.
fn run_headless(demo: &mut VectorDemo, frames: u32, dt: f32) -> Result<()> {
    let dt = validate_time_step(dt)?;
    let mut sink = TraceSink;
    for _ in 0..frames {
        demo.step(dt, &mut sink);
    }
    info!(frames, pair_mode = ?demo.pair_mode(), "headless run finished");
    Ok(())
}

/// Opens the window and runs the frame loop at 60 FPS until closed.
fn run_windowed(demo: &mut VectorDemo, font_path: &str) -> Result<()> {
    // Initialize SDL2 subsystems
    let sdl_context = sdl2::init().map_err(sdl_err)?;
    let video_subsystem = sdl_context.video().map_err(sdl_err)?;
    let ttf_context = sdl2::ttf::init().map_err(sdl_err)?;

    let window = video_subsystem.window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(sdl_err)?;
    let font = match ttf_context.load_font(font_path, FONT_SIZE) {
        Ok(font) => Some(font),
        Err(err) => {
            warn!(font_path, %err, "font not loaded, status text disabled");
            None
        }
    };

    let mut canvas = window.into_canvas().build().map_err(sdl_err)?;
    canvas.set_draw_color(BACKGROUND);
    canvas.clear();
    canvas.present();

    let extent = demo.extent();
    let projection = Projection::fit(WINDOW_WIDTH, WINDOW_HEIGHT, extent);

    let mut last_frame_time = Instant::now();
    let mut event_pump = sdl_context.event_pump().map_err(sdl_err)?;

    'running: loop {
        // Quit on Escape or window close
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit {..} |
                Event::KeyDown { keycode: Some(Keycode::Escape), ..} => {
                    break 'running
                },
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        overlay::draw_axes(&mut canvas, &projection, extent);
        demo.step(dt, &mut rays::CanvasSink { canvas: &mut canvas, projection });
        if let Some(font) = &font {
            overlay::draw_status(&mut canvas, font, demo)?;
        }

        canvas.present();
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut demo = VectorDemo::new(&args.demo_config())?;
    demo.initialize(&mut TraceSink);

    if args.headless {
        run_headless(&mut demo, args.frames, args.dt)
    } else {
        run_windowed(&mut demo, &args.font)
    }
}
