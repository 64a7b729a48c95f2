//! Stack-based game state machine and frame driver
//!
//! The active state is the top of the stack. Each executed tick runs the
//! active state's input, update and render steps in that order, then applies
//! whatever stack transition the state returned. The program runs exactly as
//! long as the stack is non-empty.

mod endgame;
mod exit;
mod game;
mod menu;

use crate::config::Config;
use crate::platform::Platform;
use crate::sim::MatchState;

/// The five game states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateId {
    Menu,
    Game,
    Win,
    Lose,
    Exit,
}

/// Stack transition requested by a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trans {
    /// Stay put.
    None,
    /// Push a new active state on top.
    Push(StateId),
    /// Return control to the state underneath.
    Pop,
    /// Replace the whole stack, bottom first.
    Reset(&'static [StateId]),
    /// Drop every state and end the program.
    Quit,
}

/// Owns the state stack, the match state, and the frame timer.
pub struct App {
    config: Config,
    stack: Vec<StateId>,
    world: MatchState,
    last_tick: u32,
}

impl App {
    pub fn new(config: Config) -> Self {
        let world = MatchState::new(&config);
        Self {
            config,
            stack: vec![StateId::Exit, StateId::Menu],
            world,
            last_tick: 0,
        }
    }

    /// True while the state stack is non-empty.
    pub fn is_running(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Execute one frame: a no-op until the tick interval has elapsed, then
    /// one full tick of the active state.
    pub fn run_frame(&mut self, platform: &mut dyn Platform) {
        let Some(&active) = self.stack.last() else {
            return;
        };

        let now = platform.now_millis();
        if now.wrapping_sub(self.last_tick) < self.config.frame_interval() {
            return;
        }

        let trans = match active {
            StateId::Menu => menu::tick(self, platform),
            StateId::Game => game::tick(self, platform),
            StateId::Win => endgame::tick(self, platform, true),
            StateId::Lose => endgame::tick(self, platform, false),
            StateId::Exit => exit::tick(self, platform),
        };
        self.apply(trans);

        self.last_tick = platform.now_millis();
    }

    fn apply(&mut self, trans: Trans) {
        match trans {
            Trans::None => return,
            Trans::Pop => {
                self.stack.pop();
            }
            Trans::Push(id) => self.enter(id),
            Trans::Reset(states) => {
                self.stack.clear();
                for &id in states {
                    self.enter(id);
                }
            }
            Trans::Quit => self.stack.clear(),
        }
        log::debug!("State stack is now {:?}", self.stack);
    }

    fn enter(&mut self, id: StateId) {
        // A fresh Game state always starts a fresh match
        if id == StateId::Game {
            self.world.reset(&self.config);
        }
        self.stack.push(id);
    }
}
