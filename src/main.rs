//! Sticky Pong entry point
//!
//! Wires the SDL backend to the app and drives the main loop. All startup
//! failures funnel through one `Result<(), String>`: logged, then a nonzero
//! exit.

use std::path::Path;

use sticky_pong::app::App;
use sticky_pong::config::Config;
use sticky_pong::platform::sdl::SdlPlatform;

const CONFIG_PATH: &str = "pong.json";

fn main() {
    env_logger::init();

    if let Err(message) = run() {
        log::error!("Failed to start: {message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = Config::load(Path::new(CONFIG_PATH))?;

    let sdl = sdl2::init()?;
    let video = sdl.video()?;
    let ttf = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video
        .window(
            &config.window_caption,
            config.window_width as u32,
            config.window_height as u32,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let events = sdl.event_pump()?;

    let mut platform = SdlPlatform::new(canvas, events, &texture_creator, &ttf, &config)?;
    let mut app = App::new(config);

    log::info!("Sticky Pong running");
    while app.is_running() {
        app.run_frame(&mut platform);
    }
    log::info!("State stack empty, shutting down");

    Ok(())
}
