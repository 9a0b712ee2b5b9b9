//! Rendering on top of raylib.
//!
//! Re-exports:
//! - `canvas`: Drawing trait and die palette
//! - `board`: Viewport, grid, walls, finish and die
//! - `hud`: Status text, size panel and win banner
//! - `keys`: raylib keyboard as a `KeySource`

pub mod canvas;
pub mod board;
pub mod hud;
pub mod keys;

use crate::config::{
    CLASSIC_CELL, CLASSIC_SCREEN_H, CLASSIC_SCREEN_W, MAZE_CELL, MAZE_HUD_H, MAZE_MIN_CELL, MAZE_SCREEN_H,
    MAZE_SCREEN_W,
};
use crate::core::session::{Session, Variant};
use board::{CLASSIC_STYLE, MAZE_STYLE, Viewport};
use canvas::Canvas;

/// Window size for a variant.
pub fn screen_size(variant: Variant) -> (i32, i32) {
    match variant {
        Variant::Classic => (CLASSIC_SCREEN_W, CLASSIC_SCREEN_H),
        Variant::Maze => (MAZE_SCREEN_W, MAZE_SCREEN_H),
    }
}

pub fn viewport_for(session: &Session) -> Viewport {
    let level = session.level();
    match session.variant() {
        Variant::Classic => Viewport::fixed(CLASSIC_CELL),
        Variant::Maze => Viewport::fit(
            level.width(),
            level.height(),
            MAZE_SCREEN_W,
            MAZE_SCREEN_H,
            MAZE_HUD_H,
            MAZE_CELL,
            MAZE_MIN_CELL,
        ),
    }
}

/// Draws one complete frame. The caller clears the background.
pub fn draw_frame<C: Canvas + ?Sized>(c: &mut C, session: &Session) {
    let level = session.level();
    let vp = viewport_for(session);
    let (sw, sh) = screen_size(session.variant());
    let style = match session.variant() {
        Variant::Classic => CLASSIC_STYLE,
        Variant::Maze => MAZE_STYLE,
    };

    board::draw_grid(c, &vp, level.width(), level.height(), &style);
    board::draw_walls(c, &vp, level.terrain(), &style);
    board::draw_finish(c, &vp, &level.finish);
    board::draw_die(c, &vp, level.player.pos, &level.player.die, &style);

    match session.variant() {
        Variant::Classic => {
            hud::draw_classic_status(c, level);
            if level.won() {
                hud::draw_win_banner(c, "YOU WIN! Press R to restart", sw, sh);
            }
        }
        Variant::Maze => {
            hud::draw_size_panel(c, session.pending_size());
            hud::draw_maze_status(c, level);
            if level.won() {
                hud::draw_win_banner(c, "YOU WIN! Press R for new level", sw, sh);
            }
        }
    }
}
