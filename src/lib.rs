//! Flappy - terminal side-scroller library.
//!
//! This module exposes the game logic for testing and for the binary.

pub mod app;
pub mod build_info;
pub mod cli;
pub mod constants;
pub mod game;
pub mod input;
pub mod logger;
pub mod terminal;
pub mod ui;

pub use app::{App, Control, Phase};
pub use constants::*;
pub use game::{EndReason, GameInput, GameStatus, Obstacle, Player, World};
