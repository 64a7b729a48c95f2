//! Game simulation
//!
//! Entities, collision predicates and the per-tick rules. Nothing in here
//! polls input or owns a window; drawing happens through the narrow
//! [`Platform`](crate::platform::Platform) verbs so the whole module runs
//! headless under test.

pub mod collision;
pub mod entity;
pub mod rules;
pub mod state;

pub use collision::{ball_hits_side_wall, paddle_ball_collision, paddle_hits_wall};
pub use entity::{Ball, Paddle};
pub use rules::{advance_ball, steer_computer, step_paddle};
pub use state::{GameArea, MatchState, Outcome};
