//! Assorted constants & default configuration
use crate::config::Rgb;
use crate::game::grid::Grid;
use std::time::Duration;

/// Default size of the playing field, in cells
pub(crate) const GRID_SIZE: Grid = Grid::new(40, 30);

/// Narrowest grid that can hold a new snake (the tail sits two cells left of
/// the centre)
pub(crate) const MIN_GRID_WIDTH: u16 = 4;

/// Largest allowed grid width or height
pub(crate) const MAX_GRID_SIDE: u16 = 500;

/// Length of the snake at the start of every game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default number of ticks per second at the start of a game
pub(crate) const INITIAL_SPEED: f64 = 5.0;

/// Default increase in ticks per second for each food eaten
pub(crate) const SPEED_STEP: f64 = 0.2;

/// The tick rate never drops below this many ticks per second
pub(crate) const MIN_SPEED: f64 = 1.0;

/// Upper bound on the time between two frames of the engine loop
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Default size of one grid cell on the render surface, in pixels
pub(crate) const CELL_SIZE: u32 = 24;

/// Default empty space around the playing field, in pixels
pub(crate) const MARGIN: u32 = 24;

/// Inset of a snake segment inside its cell, in pixels
pub(crate) const SNAKE_INSET: u32 = 2;

/// Corner radius of snake segments, in pixels
pub(crate) const SNAKE_RADIUS: u32 = 6;

/// Inset of the food inside its cell, in pixels
pub(crate) const FOOD_INSET: u32 = 4;

/// Corner radius of the food, in pixels
pub(crate) const FOOD_RADIUS: u32 = 8;

/// Corner radius of the playing field
pub(crate) const PLAY_FIELD_RADIUS: u32 = 16;

/// Vertical position of the score line, in pixels from the top
pub(crate) const HUD_TOP: u32 = 4;

/// Height of the banner shown when paused or after a game over, in pixels
pub(crate) const OVERLAY_HEIGHT: u32 = 80;

pub(crate) const PAUSED_MESSAGE: &str = "Paused — press P to resume";

pub(crate) const GAME_OVER_MESSAGE: &str = "Game Over — press R to restart";

pub(crate) const BACKGROUND_COLOR: Rgb = Rgb(16, 18, 24);
pub(crate) const GRID_COLOR: Rgb = Rgb(26, 29, 38);
pub(crate) const SNAKE_COLOR: Rgb = Rgb(80, 220, 100);
pub(crate) const SNAKE_HEAD_COLOR: Rgb = Rgb(120, 255, 140);
pub(crate) const FOOD_COLOR: Rgb = Rgb(255, 105, 97);
pub(crate) const TEXT_COLOR: Rgb = Rgb(230, 233, 240);
pub(crate) const ACCENT_COLOR: Rgb = Rgb(120, 170, 255);
pub(crate) const OVERLAY_COLOR: Rgb = Rgb(0, 0, 0);

/// Name of the directory holding this program's files under the platform
/// config & data directories
pub(crate) const APP_DIR: &str = "gridsnake";

pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";

pub(crate) const HIGH_SCORE_FILE_NAME: &str = "highscore.json";

pub(crate) const LOG_FILE_NAME: &str = "gridsnake.log";
