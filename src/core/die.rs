//! Die rotation engine.
//!
//! Orientation convention used everywhere in the crate: `front` faces
//! screen-down (+y), `back` faces screen-up (-y), `left` faces -x and
//! `right` faces +x. Rolling in a direction tips the cube over the bottom
//! edge on that side: the leading face goes to the bottom, the bottom goes to
//! the trailing side, the trailing face comes up on top and the old top
//! becomes the leading face.

/// One of the four planar moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Grid offset of one step (y grows downward).
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Face values of the player's cube.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Die {
    pub top: u8,
    pub bottom: u8,
    pub front: u8,
    pub back: u8,
    pub left: u8,
    pub right: u8,
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl Die {
    /// Canonical starting orientation: 1 up, 2 facing the viewer, 3 on the left.
    pub const fn new() -> Self {
        Self { top: 1, bottom: 6, front: 2, back: 5, left: 3, right: 4 }
    }

    /// Number currently facing up.
    #[inline]
    pub fn current_top(&self) -> u8 {
        self.top
    }

    /// Returns the die after tipping it one cell in `dir`.
    pub fn rolled(self, dir: Direction) -> Die {
        let Die { top, bottom, front, back, left, right } = self;
        match dir {
            // leading = back, trailing = front
            Direction::Up => Die { top: front, front: bottom, bottom: back, back: top, left, right },
            // leading = front, trailing = back
            Direction::Down => Die { top: back, back: bottom, bottom: front, front: top, left, right },
            // leading = left, trailing = right
            Direction::Left => Die { top: right, right: bottom, bottom: left, left: top, front, back },
            // leading = right, trailing = left
            Direction::Right => Die { top: left, left: bottom, bottom: right, right: top, front, back },
        }
    }

    /// Rolls in place.
    #[inline]
    pub fn roll(&mut self, dir: Direction) {
        *self = self.rolled(dir);
    }

    /// Faces in the order top, bottom, front, back, left, right.
    pub fn faces(&self) -> [u8; 6] {
        [self.top, self.bottom, self.front, self.back, self.left, self.right]
    }

    /// Opposite faces sum to 7 and every value is a distinct pip count.
    pub fn is_consistent(&self) -> bool {
        let mut seen = [false; 7];
        for f in self.faces() {
            if !(1..=6).contains(&f) || seen[f as usize] {
                return false;
            }
            seen[f as usize] = true;
        }
        self.top + self.bottom == 7 && self.front + self.back == 7 && self.left + self.right == 7
    }
}
