//! Text overlays: status lines, size selection panel and the win banner.
use raylib::prelude::*;

use crate::core::level::Level;
use crate::core::size::LevelSize;
use crate::render::canvas::Canvas;

pub fn draw_classic_status<C: Canvas + ?Sized>(c: &mut C, level: &Level) {
    c.text(&format!("Top: {}", level.player.die.current_top()), 10, 10, 20, Color::BLACK);
    c.text(&format!("Target: {}", level.finish.target), 10, 40, 20, Color::BLACK);
    c.text("Use WASD or Arrow Keys to move", 10, 70, 20, Color::BLACK);
}

pub fn draw_size_panel<C: Canvas + ?Sized>(c: &mut C, pending: LevelSize) {
    c.fill_rect(10, 10, 300, 120, Color::WHITE);
    c.outline_rect(10, 10, 300, 120, Color::BLACK);
    c.text("Level Size:", 20, 20, 20, Color::BLACK);
    c.text(&format!("Width: {}", pending.width()), 20, 50, 18, Color::BLACK);
    c.text(&format!("Height: {}", pending.height()), 20, 75, 18, Color::BLACK);
    c.text("1-9: Width  |  F1-F7: Height", 20, 100, 14, Color::DARKGRAY);
    c.text("R: Regenerate", 20, 115, 14, Color::DARKGRAY);
}

pub fn draw_maze_status<C: Canvas + ?Sized>(c: &mut C, level: &Level) {
    let p = &level.player;
    c.text(&format!("Current: {}", p.die.current_top()), 320, 20, 24, Color::BLACK);
    c.text(&format!("Target: {}", level.finish.target), 320, 50, 24, Color::BLACK);
    c.text(&format!("Pos: ({},{})", p.pos.x, p.pos.y), 320, 80, 18, Color::DARKGRAY);
    c.text(&format!("Size: {}x{}", level.width(), level.height()), 320, 105, 18, Color::DARKGRAY);
    c.text("WASD/Arrows: Move | R: Regenerate | 1-9/F1-F7: Size", 320, 130, 16, Color::DARKGRAY);
}

/// Centred green banner.
pub fn draw_win_banner<C: Canvas + ?Sized>(c: &mut C, message: &str, screen_w: i32, screen_h: i32) {
    let size = 30;
    let w = c.text_width(message, size);
    let x = (screen_w - w) / 2;
    let y = screen_h / 2 - 15;
    c.fill_rect(x - 10, y - 10, w + 20, 60, Color::GREEN);
    c.outline_rect(x - 10, y - 10, w + 20, 60, Color::BLACK);
    c.text(message, x, y, size, Color::WHITE);
}
