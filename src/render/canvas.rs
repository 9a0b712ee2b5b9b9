//! Drawing surface used by the board and HUD code, plus the die palette.
use raylib::prelude::*;

/// The handful of immediate-mode primitives the game draws with.
pub trait Canvas {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color);
    /// Width in pixels of `text` rendered with the default font.
    fn text_width(&self, text: &str, size: i32) -> i32;
}

impl Canvas for RaylibDrawHandle<'_> {
    #[inline]
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.draw_rectangle(x, y, w, h, color);
    }

    #[inline]
    fn outline_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.draw_rectangle_lines(x, y, w, h, color);
    }

    #[inline]
    fn text(&mut self, text: &str, x: i32, y: i32, size: i32, color: Color) {
        self.draw_text(text, x, y, size, color);
    }

    #[inline]
    fn text_width(&self, text: &str, size: i32) -> i32 {
        raylib::core::text::measure_text(text, size)
    }
}

/// Colour of a die face by pip count.
pub fn die_color(number: u8) -> Color {
    match number {
        1 => Color::RED,
        2 => Color::ORANGE,
        3 => Color::YELLOW,
        4 => Color::GREEN,
        5 => Color::BLUE,
        6 => Color::PURPLE,
        _ => Color::GRAY,
    }
}
