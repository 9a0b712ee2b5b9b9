//! Maze dimensions and the hotkey presets that pick them.
use crate::error::ConfigError;

pub const MIN_WIDTH: usize = 5;
pub const MAX_WIDTH: usize = 50;
pub const MIN_HEIGHT: usize = 5;
pub const MAX_HEIGHT: usize = 40;

/// Widths bound to keys 1..9.
pub const WIDTH_PRESETS: [usize; 9] = [10, 12, 15, 18, 20, 25, 30, 35, 40];
/// Heights bound to keys F1..F7.
pub const HEIGHT_PRESETS: [usize; 7] = [8, 10, 12, 15, 18, 20, 25];

/// Validated maze dimensions. Anything smaller than 5x5 would make the
/// generator's interior offsets underflow, so construction rejects it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelSize {
    width: usize,
    height: usize,
    min_width: usize,
    max_width: usize,
    min_height: usize,
    max_height: usize,
}

impl Default for LevelSize {
    fn default() -> Self {
        Self {
            width: 15,
            height: 10,
            min_width: MIN_WIDTH,
            max_width: MAX_WIDTH,
            min_height: MIN_HEIGHT,
            max_height: MAX_HEIGHT,
        }
    }
}

impl LevelSize {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::default().with_width(width)?.with_height(height)
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    /// Inclusive width bounds.
    #[inline] pub fn width_bounds(&self) -> (usize, usize) { (self.min_width, self.max_width) }
    /// Inclusive height bounds.
    #[inline] pub fn height_bounds(&self) -> (usize, usize) { (self.min_height, self.max_height) }

    pub fn with_width(mut self, width: usize) -> Result<Self, ConfigError> {
        if width < self.min_width || width > self.max_width {
            return Err(ConfigError::WidthOutOfRange { width, min: self.min_width, max: self.max_width });
        }
        self.width = width;
        Ok(self)
    }

    pub fn with_height(mut self, height: usize) -> Result<Self, ConfigError> {
        if height < self.min_height || height > self.max_height {
            return Err(ConfigError::HeightOutOfRange { height, min: self.min_height, max: self.max_height });
        }
        self.height = height;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_15_by_10() {
        let size = LevelSize::default();
        assert_eq!((size.width(), size.height()), (15, 10));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(LevelSize::new(MIN_WIDTH, MIN_HEIGHT).is_ok());
        assert!(LevelSize::new(MAX_WIDTH, MAX_HEIGHT).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            LevelSize::new(4, 10),
            Err(ConfigError::WidthOutOfRange { width: 4, min: MIN_WIDTH, max: MAX_WIDTH })
        );
        assert_eq!(
            LevelSize::new(15, 41),
            Err(ConfigError::HeightOutOfRange { height: 41, min: MIN_HEIGHT, max: MAX_HEIGHT })
        );
    }

    #[test]
    fn test_rejected_update_keeps_previous_value() {
        let size = LevelSize::new(20, 12).unwrap();
        assert!(size.with_width(51).is_err());
        assert_eq!(size.width(), 20);
    }

    #[test]
    fn test_no_size_below_minimum() {
        let base = LevelSize::default();
        assert_eq!(base.width_bounds(), (MIN_WIDTH, MAX_WIDTH));
        assert_eq!(base.height_bounds(), (MIN_HEIGHT, MAX_HEIGHT));
        for w in 0..MIN_WIDTH {
            assert!(base.with_width(w).is_err(), "width {w}");
            assert!(LevelSize::new(w, 10).is_err(), "width {w}");
        }
        for h in 0..MIN_HEIGHT {
            assert!(base.with_height(h).is_err(), "height {h}");
            assert!(LevelSize::new(15, h).is_err(), "height {h}");
        }
    }

    #[test]
    fn test_presets_within_bounds() {
        let base = LevelSize::default();
        for &w in &WIDTH_PRESETS {
            assert!(base.with_width(w).is_ok(), "width {w}");
        }
        for &h in &HEIGHT_PRESETS {
            assert!(base.with_height(h).is_ok(), "height {h}");
        }
    }
}
