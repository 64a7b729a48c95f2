//! Main menu state

use super::{App, StateId, Trans};
use crate::platform::{Color, Event, Key, Platform};

pub(super) fn tick(app: &mut App, platform: &mut dyn Platform) -> Trans {
    let trans = handle_input(platform);
    render(app, platform);
    trans
}

fn handle_input(platform: &mut dyn Platform) -> Trans {
    while let Some(event) = platform.poll_event() {
        match event {
            Event::Quit => return Trans::Quit,
            Event::KeyDown(Key::Escape) | Event::KeyDown(Key::Q) => return Trans::Pop,
            Event::KeyDown(Key::G) => return Trans::Push(StateId::Game),
            _ => {}
        }
    }
    Trans::None
}

fn render(app: &App, platform: &mut dyn Platform) {
    platform.clear(Color::BLACK);
    let x = app.config.window_width / 2 - 40;
    let y = app.config.window_height / 2 - 20;
    platform.draw_text(x, y, "Start (G)ame", Color::WHITE);
    platform.draw_text(x, y + 20, "(Q)uit Game", Color::WHITE);
    platform.present();
}
