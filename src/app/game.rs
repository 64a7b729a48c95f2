//! Active match state
//!
//! The only state with an update step: player input moves one paddle, the
//! tracking reflex moves the other, and the rules engine advances the ball.

use glam::IVec2;

use super::{App, StateId, Trans};
use crate::platform::{Color, Event, Key, Platform};
use crate::sim::{Outcome, advance_ball, steer_computer, step_paddle};

pub(super) fn tick(app: &mut App, platform: &mut dyn Platform) -> Trans {
    let trans = handle_input(app, platform);
    let outcome = update(app);
    render(app, platform);

    // A decided match overrides whatever the input handler asked for:
    // scoring resolves after input within the same tick.
    match outcome {
        Some(Outcome::PlayerWon) => Trans::Reset(&[StateId::Win]),
        Some(Outcome::ComputerWon) => Trans::Reset(&[StateId::Lose]),
        None => trans,
    }
}

fn handle_input(app: &mut App, platform: &mut dyn Platform) -> Trans {
    let speed = app.config.paddle_speed;
    while let Some(event) = platform.poll_event() {
        match event {
            Event::Quit => return Trans::Quit,
            Event::KeyDown(Key::Escape) => return Trans::Pop,
            Event::KeyDown(Key::Space) => {
                if app.world.awaiting_serve {
                    app.world.launch();
                }
            }
            Event::KeyDown(Key::Left) => {
                app.world.player.set_velocity(IVec2::new(-speed, 0));
            }
            Event::KeyDown(Key::Right) => {
                app.world.player.set_velocity(IVec2::new(speed, 0));
            }
            Event::KeyUp(Key::Left) => {
                if app.world.player.velocity().x < 0 {
                    app.world.player.set_velocity(IVec2::ZERO);
                }
            }
            Event::KeyUp(Key::Right) => {
                if app.world.player.velocity().x > 0 {
                    app.world.player.set_velocity(IVec2::ZERO);
                }
            }
            _ => {}
        }
    }
    Trans::None
}

fn update(app: &mut App) -> Option<Outcome> {
    let area = app.config.game_area();
    step_paddle(&mut app.world.player, &area);
    steer_computer(&mut app.world, &app.config);
    step_paddle(&mut app.world.computer, &area);
    advance_ball(&mut app.world, &app.config)
}

fn render(app: &App, platform: &mut dyn Platform) {
    platform.clear(Color::BLACK);

    app.world.computer.draw(platform);
    app.world.player.draw(platform);
    app.world.ball.draw(platform);

    // Score strip above the play area
    let score = format!(
        "Player {}   Computer {}",
        app.world.player_score, app.world.computer_score
    );
    platform.draw_text(5, 2, &score, Color::WHITE);

    if app.world.awaiting_serve {
        let x = app.config.window_width / 2 - 60;
        let y = app.config.window_height / 2 + 30;
        platform.draw_text(x, y, "Press Space to serve", Color::WHITE);
    }

    platform.present();
}
