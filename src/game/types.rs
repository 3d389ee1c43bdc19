//! Player, obstacle and world state.

use super::geometry::Bounds;
use crate::constants::*;
use rand::Rng;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player hit the solid part of an obstacle.
    Collision,
    /// The player left the visible area vertically.
    OutOfBounds,
}

/// Game status. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over(EndReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// The falling/jumping entity the player controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    /// Top edge. Not clamped; the world checks it against the visible area.
    pub y: i32,
    /// Vertical velocity in units per tick (positive = downward).
    pub velocity: i32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, velocity: 0 }
    }

    /// Overwrites the current velocity with the upward impulse.
    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
    }

    /// Applies gravity, then moves by the new velocity.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START_X, PLAYER_START_Y)
    }
}

/// A full-height column with a passable gap.
///
/// Solid from the top of the area down to `gap_offset`, open for
/// `OBSTACLE_GAP` units, then solid again down to `OBSTACLE_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Left edge.
    pub x: i32,
    /// Row where the gap begins.
    pub gap_offset: i32,
}

impl Obstacle {
    pub fn new(x: i32, gap_offset: i32) -> Self {
        Self { x, gap_offset }
    }

    /// New obstacle at the right edge with a uniformly random gap offset.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let gap_offset = rng.gen_range(GAP_OFFSET_MIN..GAP_OFFSET_MAX);
        Self::new(OBSTACLE_SPAWN_X, gap_offset)
    }

    pub fn update(&mut self) {
        self.x -= OBSTACLE_SPEED;
    }

    pub fn top_bounds(&self) -> Bounds {
        Bounds::new(self.x, 0, OBSTACLE_WIDTH, self.gap_offset)
    }

    pub fn bottom_bounds(&self) -> Bounds {
        let top = self.gap_offset + OBSTACLE_GAP;
        Bounds::new(self.x, top, OBSTACLE_WIDTH, OBSTACLE_HEIGHT - top)
    }

    /// Full-height footprint. Only used for spawn spacing.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, 0, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }

    /// True once the right edge has scrolled past the left of the area.
    pub fn is_off_screen(&self) -> bool {
        self.bounds().right() < 0
    }

    pub fn hits(&self, target: &Bounds) -> bool {
        self.top_bounds().intersects(target) || self.bottom_bounds().intersects(target)
    }
}

/// Everything that changes while a run is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub player: Player,
    /// In spawn order, which is also left-to-right on screen.
    pub obstacles: Vec<Obstacle>,
    pub status: GameStatus,
    /// Ticks processed while running.
    pub tick_count: u64,
}

impl World {
    /// Fresh run with the first obstacle already waiting at the right edge.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_obstacles(Player::default(), vec![Obstacle::spawn(rng)])
    }

    pub fn with_obstacles(player: Player, obstacles: Vec<Obstacle>) -> Self {
        Self {
            player,
            obstacles,
            status: GameStatus::Running,
            tick_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_player_defaults() {
        let player = Player::default();
        assert_eq!(player.x, 100);
        assert_eq!(player.y, 300);
        assert_eq!(player.velocity, 0);
        assert_eq!(player.bounds(), Bounds::new(100, 300, 40, 30));
    }

    #[test]
    fn test_gravity_then_move() {
        let mut player = Player::new(100, 300);
        player.update();
        assert_eq!(player.velocity, 1);
        assert_eq!(player.y, 301);
        player.update();
        assert_eq!(player.velocity, 2);
        assert_eq!(player.y, 303);
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut player = Player::default();
        for prior in [-40, -15, 0, 7, 300] {
            player.velocity = prior;
            player.jump();
            assert_eq!(player.velocity, JUMP_VELOCITY);
        }
    }

    #[test]
    fn test_repeated_jump_is_not_additive() {
        let mut player = Player::default();
        player.jump();
        player.jump();
        player.jump();
        assert_eq!(player.velocity, -15);
    }

    #[test]
    fn test_player_position_not_clamped() {
        let mut player = Player::new(100, 2);
        player.jump();
        player.update();
        assert_eq!(player.y, 2 - 14);
    }

    #[test]
    fn test_obstacle_segments() {
        let obstacle = Obstacle::new(500, 200);
        assert_eq!(obstacle.top_bounds(), Bounds::new(500, 0, 80, 200));
        assert_eq!(obstacle.bottom_bounds(), Bounds::new(500, 350, 80, 250));
        assert_eq!(obstacle.bounds(), Bounds::new(500, 0, 80, 600));
    }

    #[test]
    fn test_obstacle_moves_left() {
        let mut obstacle = Obstacle::new(800, 150);
        for _ in 0..10 {
            obstacle.update();
        }
        assert_eq!(obstacle.x, 780);
        assert_eq!(obstacle.gap_offset, 150);
    }

    #[test]
    fn test_off_screen_threshold() {
        assert!(!Obstacle::new(-80, 100).is_off_screen());
        assert!(Obstacle::new(-81, 100).is_off_screen());
        assert!(!Obstacle::new(0, 100).is_off_screen());
    }

    #[test]
    fn test_spawn_uses_range_and_right_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..500 {
            let obstacle = Obstacle::spawn(&mut rng);
            assert_eq!(obstacle.x, 800);
            assert!(obstacle.gap_offset >= 100);
            assert!(obstacle.gap_offset < 400);
        }
    }

    #[test]
    fn test_player_inside_gap_is_not_hit() {
        let obstacle = Obstacle::new(90, 200);
        // Gap spans rows 200..350
        let player = Player::new(100, 250);
        assert!(!obstacle.hits(&player.bounds()));
    }

    #[test]
    fn test_player_touching_gap_edges_is_not_hit() {
        let obstacle = Obstacle::new(90, 200);
        assert!(!obstacle.hits(&Player::new(100, 200).bounds()));
        // Bottom edge of player at 350 = top of bottom segment
        assert!(!obstacle.hits(&Player::new(100, 320).bounds()));
        assert!(obstacle.hits(&Player::new(100, 321).bounds()));
        assert!(obstacle.hits(&Player::new(100, 199).bounds()));
    }

    #[test]
    fn test_new_world_has_one_obstacle() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let world = World::new(&mut rng);
        assert_eq!(world.player, Player::default());
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.obstacles[0].x, OBSTACLE_SPAWN_X);
        assert_eq!(world.status, GameStatus::Running);
        assert_eq!(world.tick_count, 0);
    }

    #[test]
    fn test_status_is_over() {
        assert!(!GameStatus::Running.is_over());
        assert!(GameStatus::Over(EndReason::Collision).is_over());
        assert!(GameStatus::Over(EndReason::OutOfBounds).is_over());
    }
}
