//! KubeGame: roll a die across a grid and reach the finish with the right number on top.
//!
//! `core` holds the game rules and is independent of any window; `render`
//! draws a `Session` through the `Canvas` trait and feeds raylib keys back in.

pub mod audio_manager;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
