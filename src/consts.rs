//! Compile-time configuration. There is no runtime configuration.
use std::time::Duration;

/// Distance the head travels per tick, also the size of one grid cell
pub const MOVE_DISTANCE: i32 = 20;

/// Two objects closer than this on both axes share a cell
pub const FOOD_SIZE: i32 = 20;

/// The head dies once it is strictly outside [-WALL_LIMIT, WALL_LIMIT]
pub const WALL_LIMIT: i32 = 290;

/// Outermost grid coordinate a cell can have while still in bounds
pub const BOARD_LIMIT: i32 = 280;

/// Number of cells along each axis of the board
pub const BOARD_CELLS: u16 = (2 * BOARD_LIMIT / MOVE_DISTANCE + 1) as u16;

pub const SCORE_INCREMENT: u32 = 10;

pub const INITIAL_DELAY: Duration = Duration::from_millis(150);
pub const MIN_DELAY: Duration = Duration::from_millis(80);
pub const DELAY_STEP: Duration = Duration::from_millis(1);

/// Loop sleep while not playing
pub const IDLE_DELAY: Duration = Duration::from_millis(100);

/// Random food candidates tried before falling back to a scan of free cells
pub const MAX_FOOD_ATTEMPTS: usize = 1000;

pub const HIGH_SCORE_FILE: &str = "high_score.txt";
pub const LOG_FILE: &str = "snake.log";

pub const SNAKE_BODY_CHAR: char = '█';
pub const FOOD_CHAR: char = 'O';
pub const DEAD_SNAKE_CHAR: char = 'X';
pub const STOPPED_HEAD_CHAR: char = '@';
