//! Session state shared by the terminal loop: the world, its RNG, and
//! whether the game-over notification is showing.

use crate::game::{process_input, process_tick, EndReason, GameInput, GameStatus, World};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ticks advance the world.
    Playing,
    /// Timer stopped; the notification waits for acknowledgment.
    GameOver(EndReason),
}

/// What the terminal loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Redraw,
    Exit,
}

pub struct App<R: Rng> {
    pub world: World,
    pub phase: Phase,
    rng: R,
}

impl<R: Rng> App<R> {
    pub fn new(mut rng: R) -> Self {
        let world = World::new(&mut rng);
        Self {
            world,
            phase: Phase::Playing,
            rng,
        }
    }

    /// True while the tick timer should run.
    pub fn is_ticking(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn handle_input(&mut self, input: GameInput) -> Control {
        match self.phase {
            // Space is still held from play; only other keys acknowledge
            Phase::GameOver(_) => match input {
                GameInput::Jump => Control::Continue,
                GameInput::Quit | GameInput::Other => Control::Exit,
            },
            Phase::Playing => match input {
                GameInput::Quit => {
                    tracing::info!(tick = self.world.tick_count, "closed by player");
                    Control::Exit
                }
                GameInput::Jump | GameInput::Other => {
                    process_input(&mut self.world, input);
                    Control::Continue
                }
            },
        }
    }

    /// One timer tick. Redraws after every tick, including the one that
    /// ends the run so the notification appears.
    pub fn on_tick(&mut self) -> Control {
        if !self.is_ticking() {
            return Control::Continue;
        }
        if let GameStatus::Over(reason) = process_tick(&mut self.world, &mut self.rng) {
            self.phase = Phase::GameOver(reason);
        }
        Control::Redraw
    }
}
