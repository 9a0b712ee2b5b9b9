//! Window and layout constants.

pub const TARGET_FPS: u32 = 60;

pub const CLASSIC_TITLE: &str = "KubeGame - Die Rolling Puzzle";
/// Classic board cell size in pixels; the window is exactly the board.
pub const CLASSIC_CELL: i32 = 50;
pub const CLASSIC_SCREEN_W: i32 = 12 * CLASSIC_CELL;
pub const CLASSIC_SCREEN_H: i32 = 8 * CLASSIC_CELL;

pub const MAZE_TITLE: &str = "KubeGame - Labyrinth Die Puzzle";
pub const MAZE_SCREEN_W: i32 = 1200;
pub const MAZE_SCREEN_H: i32 = 800;
/// Preferred maze cell size; shrinks when the board would not fit.
pub const MAZE_CELL: i32 = 40;
pub const MAZE_MIN_CELL: i32 = 8;
/// Space reserved above the maze for the HUD panels.
pub const MAZE_HUD_H: i32 = 140;
