//! Win and lose screens
//!
//! Identical controls, different banner: Y quits, N tears the stack down to
//! a fresh Exit + Menu pair.

use super::{App, StateId, Trans};
use crate::platform::{Color, Event, Key, Platform};

pub(super) fn tick(app: &mut App, platform: &mut dyn Platform, won: bool) -> Trans {
    let trans = handle_input(platform);
    render(app, platform, won);
    trans
}

fn handle_input(platform: &mut dyn Platform) -> Trans {
    while let Some(event) = platform.poll_event() {
        match event {
            Event::Quit => return Trans::Quit,
            Event::KeyDown(Key::Escape) | Event::KeyDown(Key::Y) => return Trans::Pop,
            Event::KeyDown(Key::N) => return Trans::Reset(&[StateId::Exit, StateId::Menu]),
            _ => {}
        }
    }
    Trans::None
}

fn render(app: &App, platform: &mut dyn Platform, won: bool) {
    platform.clear(Color::BLACK);
    let banner = if won { "You won!" } else { "You lost!" };
    let x = app.config.window_width / 2 - 60;
    let y = app.config.window_height / 2 - 20;
    platform.draw_text(x, y, banner, Color::WHITE);
    platform.draw_text(x, y + 20, "Quit Game (Y or N)?", Color::WHITE);
    platform.present();
}
