//! Core game types and logic (die, terrain, input, session).
//!
//! Re-exports:
//! - `die`: Die faces and rotation
//! - `player`: Grid position and the player's die
//! - `grid`: Cell grid for the maze variant
//! - `size`: Validated maze dimensions and presets
//! - `maze`: Maze generation passes
//! - `connectivity`: Breadth-first reachability
//! - `classic`: Fixed board of the classic variant
//! - `level`: Move validation and win condition
//! - `process_events`: Key mapping
//! - `session`: Per-frame input handling and regeneration

pub mod die;
pub mod player;
pub mod grid;
pub mod size;
pub mod maze;
pub mod connectivity;
pub mod classic;
pub mod level;
pub mod process_events;
pub mod session;
