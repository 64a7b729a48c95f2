//! Match state
//!
//! Everything a single match owns: both paddles, the ball, the scores, the
//! current serve speed and the awaiting-serve flag. Entities are created
//! once at startup and repositioned, never recreated.

use glam::IVec2;

use super::entity::{Ball, Paddle};
use crate::config::Config;
use crate::platform::SpriteRegion;

/// Fixed rectangle bounding legal ball and paddle positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameArea {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Which side took the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWon,
    ComputerWon,
}

/// Live state of a match.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub ball: Ball,
    /// Human paddle, pinned to the bottom wall.
    pub player: Paddle,
    /// Tracking paddle, pinned to the top wall.
    pub computer: Paddle,
    pub player_score: u32,
    pub computer_score: u32,
    /// Current serve/bounce speed magnitude (pixels per tick).
    pub speed: i32,
    /// Ball parked at center with zero velocity until the player serves.
    pub awaiting_serve: bool,
}

impl MatchState {
    pub fn new(config: &Config) -> Self {
        let ball_side = (config.ball_radius * 2) as u32;
        let ball = Ball::new(
            IVec2::new(config.ball_start_x, config.ball_start_y),
            config.ball_radius,
            SpriteRegion {
                x: config.ball_img_x,
                y: config.ball_img_y,
                w: ball_side,
                h: ball_side,
            },
        );
        let player = Paddle::new(
            IVec2::new(config.player_start_x, config.player_start_y),
            SpriteRegion {
                x: config.player_img_x,
                y: config.player_img_y,
                w: config.paddle_width as u32,
                h: config.paddle_height as u32,
            },
        );
        let computer = Paddle::new(
            IVec2::new(config.computer_start_x, config.computer_start_y),
            SpriteRegion {
                x: config.computer_img_x,
                y: config.computer_img_y,
                w: config.paddle_width as u32,
                h: config.paddle_height as u32,
            },
        );

        let mut state = Self {
            ball,
            player,
            computer,
            player_score: 0,
            computer_score: 0,
            speed: config.ball_init_speed,
            awaiting_serve: true,
        };
        state.reset(config);
        state
    }

    /// Park everything back at its start position for a fresh match.
    pub fn reset(&mut self, config: &Config) {
        self.ball
            .set_center(IVec2::new(config.ball_start_x, config.ball_start_y));
        self.ball.set_velocity(IVec2::ZERO);
        self.player
            .set_origin(IVec2::new(config.player_start_x, config.player_start_y));
        self.player.set_velocity(IVec2::ZERO);
        self.computer
            .set_origin(IVec2::new(config.computer_start_x, config.computer_start_y));
        self.computer.set_velocity(IVec2::ZERO);
        self.player_score = 0;
        self.computer_score = 0;
        self.speed = config.ball_init_speed;
        self.awaiting_serve = true;
    }

    /// Serve: send the ball toward the player at the current speed.
    pub fn launch(&mut self) {
        self.ball.set_velocity(IVec2::new(0, self.speed));
        self.awaiting_serve = false;
    }
}
