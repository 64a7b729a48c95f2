//! Exit confirmation state
//!
//! Sits at the base of the stack: popping it ends the program.

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
            Event::KeyDown(Key::Escape) | Event::KeyDown(Key::Y) => return Trans::Pop,
            Event::KeyDown(Key::N) => return Trans::Push(StateId::Menu),
            _ => {}
        }
    }
    Trans::None
}

fn render(app: &App, platform: &mut dyn Platform) {
    platform.clear(Color::BLACK);
    let x = app.config.window_width / 2 - 60;
    let y = app.config.window_height / 2 - 10;
    platform.draw_text(x, y, "Quit Game (Y or N)?", Color::WHITE);
    platform.present();
}
