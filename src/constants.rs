// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 20;

// Visible area, in logical units
pub const WORLD_WIDTH: i32 = 800;
pub const WORLD_HEIGHT: i32 = 600;

// Player
pub const PLAYER_START_X: i32 = 100;
pub const PLAYER_START_Y: i32 = 300;
pub const PLAYER_WIDTH: i32 = 40;
pub const PLAYER_HEIGHT: i32 = 30;
pub const GRAVITY: i32 = 1;
pub const JUMP_VELOCITY: i32 = -15;

// Obstacles
pub const OBSTACLE_WIDTH: i32 = 80;
pub const OBSTACLE_HEIGHT: i32 = 600;
pub const OBSTACLE_GAP: i32 = 150;
pub const OBSTACLE_SPEED: i32 = 2;
pub const OBSTACLE_SPAWN_X: i32 = WORLD_WIDTH;
pub const OBSTACLE_SPACING: i32 = 300;

// Gap offset is drawn from [MIN, MAX)
pub const GAP_OFFSET_MIN: i32 = 100;
pub const GAP_OFFSET_MAX: i32 = 400;

// Messages
pub const WINDOW_TITLE: &str = " Flappy Bird ";
pub const GAME_OVER_MESSAGE: &str = "Game Over!";
