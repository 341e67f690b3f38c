use log::{error, info, warn};
use pixels::{Error, Pixels, SurfaceTexture};
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

mod colors;
mod config;
mod drag;
mod game;
mod minigame;
mod painter;
mod palette;
mod store;
mod texture;

use crate::config::Settings;
use crate::game::{Pointer, World, HEIGHT, WIDTH};
use crate::store::{MemoryStore, RonFileStore, ScoreStore};

const DEFAULT_SETTINGS_PATH: &str = "settings.ron";

fn load_settings() -> Settings {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    match Settings::load(&path) {
        Ok(settings) => {
            info!("loaded settings from {}", path);
            settings
        }
        Err(e) => {
            warn!("{} ({}), using defaults", e, path);
            Settings::default()
        }
    }
}

fn open_store(settings: &Settings) -> Box<dyn ScoreStore> {
    match RonFileStore::open(&settings.score_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            error!("{}, best score will not be saved", e);
            Box::new(MemoryStore::default())
        }
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    let store = open_store(&settings);

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let window = {
        let size = LogicalSize::new(WIDTH as f64, HEIGHT as f64);
        WindowBuilder::new()
            .with_title("Hue Hunt")
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)
            .unwrap()
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(WIDTH, HEIGHT, surface_texture)?
    };
    let mut world = World::new(settings, store);
    let mut last_frame = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        // Draw the current frame
        if let Event::RedrawRequested(_) = event {
            world.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Handle input events
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Resize the window
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }

            let pointer = Pointer {
                pressed: input.mouse_pressed(0),
                held: input.mouse_held(0),
                position: input
                    .mouse()
                    .and_then(|pos| pixels.window_pos_to_pixel(pos).ok())
                    .map(|(x, y)| (x as f32, y as f32)),
            };
            let now = Instant::now();
            let dt = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;

            // Update internal state and request a redraw
            world.update(&input, pointer, dt);
            window.request_redraw();
        }
    });
}
