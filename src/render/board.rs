//! Board drawing: checkerboard, walls, finish and the player's die.
use raylib::prelude::*;

use crate::core::die::Die;
use crate::core::level::{Finish, Terrain};
use crate::core::player::Pos;
use crate::render::canvas::{Canvas, die_color};

/// Maps grid cells to screen pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cell: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Viewport {
    pub const fn fixed(cell: i32) -> Self {
        Self { cell, offset_x: 0, offset_y: 0 }
    }

    /// Largest cell size up to `max_cell` (never below `min_cell`) that fits
    /// `cols x rows` under a `top` pixel band, centred in the remaining area.
    pub fn fit(cols: i32, rows: i32, screen_w: i32, screen_h: i32, top: i32, max_cell: i32, min_cell: i32) -> Self {
        let avail_h = screen_h - top;
        let cell = max_cell.min(screen_w / cols.max(1)).min(avail_h / rows.max(1)).max(min_cell);
        Self {
            cell,
            offset_x: (screen_w - cols * cell) / 2,
            offset_y: top + (avail_h - rows * cell) / 2,
        }
    }

    /// Top-left pixel of a cell.
    #[inline]
    pub fn origin(&self, pos: Pos) -> (i32, i32) {
        (self.offset_x + pos.x * self.cell, self.offset_y + pos.y * self.cell)
    }
}

/// Per-variant look of the board.
#[derive(Copy, Clone, Debug)]
pub struct BoardStyle {
    pub wall: Color,
    pub grid_line: Color,
    /// Draw the four side faces around the die.
    pub die_sides: bool,
}

pub const CLASSIC_STYLE: BoardStyle = BoardStyle { wall: Color::BROWN, grid_line: Color::BLACK, die_sides: false };
pub const MAZE_STYLE: BoardStyle = BoardStyle { wall: Color::DARKBROWN, grid_line: Color::DARKGRAY, die_sides: true };

pub fn draw_grid<C: Canvas + ?Sized>(c: &mut C, vp: &Viewport, cols: i32, rows: i32, style: &BoardStyle) {
    for y in 0..rows {
        for x in 0..cols {
            let color = if (x + y) % 2 == 0 { Color::LIGHTGRAY } else { Color::GRAY };
            let (px, py) = vp.origin(Pos::new(x, y));
            c.fill_rect(px, py, vp.cell, vp.cell, color);
            c.outline_rect(px, py, vp.cell, vp.cell, style.grid_line);
        }
    }
}

pub fn draw_walls<C: Canvas + ?Sized>(c: &mut C, vp: &Viewport, terrain: &Terrain, style: &BoardStyle) {
    for pos in terrain.wall_positions() {
        let (px, py) = vp.origin(pos);
        c.fill_rect(px, py, vp.cell, vp.cell, style.wall);
        c.outline_rect(px, py, vp.cell, vp.cell, Color::BLACK);
    }
}

pub fn draw_finish<C: Canvas + ?Sized>(c: &mut C, vp: &Viewport, finish: &Finish) {
    let (px, py) = vp.origin(finish.pos);
    c.fill_rect(px, py, vp.cell, vp.cell, Color::GOLD);
    c.outline_rect(px, py, vp.cell, vp.cell, Color::BLACK);
    let label = finish.target.to_string();
    let size = font_for(vp.cell);
    let w = c.text_width(&label, size);
    c.text(&label, px + (vp.cell - w) / 2, py + (vp.cell - size) / 2, size, Color::BLACK);
}

/// Die filling most of its cell, coloured by the top face.
pub fn draw_die<C: Canvas + ?Sized>(c: &mut C, vp: &Viewport, pos: Pos, die: &Die, style: &BoardStyle) {
    let pad = (vp.cell / 8).max(1);
    let size = vp.cell - 2 * pad;
    let (px, py) = vp.origin(pos);
    let (dx, dy) = (px + pad, py + pad);

    c.fill_rect(dx, dy, size, size, die_color(die.current_top()));
    c.outline_rect(dx, dy, size, size, Color::BLACK);

    let label = die.current_top().to_string();
    let font = font_for(size);
    let w = c.text_width(&label, font);
    c.text(&label, dx + (size - w) / 2, dy + (size - font) / 2, font, Color::WHITE);

    if style.die_sides {
        draw_die_sides(c, dx, dy, size, die);
    }
}

// Side faces as thin strips: left/right beside the die, back above, front below.
fn draw_die_sides<C: Canvas + ?Sized>(c: &mut C, dx: i32, dy: i32, size: i32, die: &Die) {
    let strip = 4;
    let margin = 2;
    let span = size - 2 * margin;

    c.fill_rect(dx - margin - strip, dy + margin, strip, span, die_color(die.left));
    c.fill_rect(dx + size + margin, dy + margin, strip, span, die_color(die.right));
    c.fill_rect(dx + margin, dy + size + margin + 2, span, strip, die_color(die.front));
    c.fill_rect(dx + margin, dy - margin - strip - 2, span, strip, die_color(die.back));

    // labels get unreadable on shrunken boards
    if size < 24 {
        return;
    }
    let small = 12;
    c.text(&die.left.to_string(), dx - margin - strip - 15, dy + size / 2 - 6, small, Color::BLACK);
    c.text(&die.right.to_string(), dx + size + margin + strip + 2, dy + size / 2 - 6, small, Color::BLACK);
    c.text(&die.front.to_string(), dx + size / 2 - 6, dy + size + margin + strip + 5, small, Color::BLACK);
    c.text(&die.back.to_string(), dx + size / 2 - 6, dy - margin - 2 * strip - 7, small, Color::BLACK);
}

#[inline]
fn font_for(px: i32) -> i32 {
    (px * 3 / 5).clamp(8, 24)
}
