//! Per-tick world update and input handling.

use super::types::{EndReason, GameStatus, Obstacle, World};
use crate::constants::{OBSTACLE_SPACING, WORLD_HEIGHT, WORLD_WIDTH};
use rand::Rng;

/// Input actions understood by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Jump (Space).
    Jump,
    /// Close the game (Esc, Ctrl+C).
    Quit,
    /// Any other key.
    Other,
}

/// Apply a player input to the world.
///
/// Only `Jump` touches world state, and only while the run is live.
pub fn process_input(world: &mut World, input: GameInput) {
    if world.status.is_over() {
        return;
    }
    if input == GameInput::Jump {
        world.player.jump();
    }
}

/// Advance the world by one fixed tick and return the resulting status.
///
/// Order: player physics, obstacle scroll, despawn, spawn, collision, bounds.
/// Ticking a finished world changes nothing.
pub fn process_tick<R: Rng>(world: &mut World, rng: &mut R) -> GameStatus {
    if world.status.is_over() {
        return world.status;
    }
    world.tick_count += 1;

    world.player.update();

    for obstacle in &mut world.obstacles {
        obstacle.update();
    }

    let before = world.obstacles.len();
    world.obstacles.retain(|o| !o.is_off_screen());
    let removed = before - world.obstacles.len();
    if removed > 0 {
        tracing::debug!(tick = world.tick_count, removed, "obstacles despawned");
    }

    if spawn_due(world) {
        let obstacle = Obstacle::spawn(rng);
        tracing::debug!(
            tick = world.tick_count,
            gap_offset = obstacle.gap_offset,
            "obstacle spawned"
        );
        world.obstacles.push(obstacle);
    }

    if let Some(reason) = check_end(world) {
        world.status = GameStatus::Over(reason);
        tracing::info!(tick = world.tick_count, ?reason, "game over");
    }

    world.status
}

/// A new obstacle is due when none are left or the newest one has moved far
/// enough from the right edge.
pub fn spawn_due(world: &World) -> bool {
    match world.obstacles.last() {
        None => true,
        Some(last) => last.bounds().x < WORLD_WIDTH - OBSTACLE_SPACING,
    }
}

/// Collision takes priority over leaving the area when both happen at once.
fn check_end(world: &World) -> Option<EndReason> {
    let player = world.player.bounds();
    if world.obstacles.iter().any(|o| o.hits(&player)) {
        return Some(EndReason::Collision);
    }
    if player.y < 0 || player.y > WORLD_HEIGHT {
        return Some(EndReason::OutOfBounds);
    }
    None
}
