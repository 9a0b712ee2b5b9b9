use crate::core::die::{Die, Direction};

/// Grid coordinate. Signed so that off-board targets can be expressed and rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn step(self, dir: Direction) -> Pos {
        let (dx, dy) = dir.delta();
        Pos::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    pub die: Die,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self { pos: Pos::new(x, y), die: Die::new() }
    }

    /// Moves one cell and rolls the die in the same step.
    pub fn advance(&mut self, dir: Direction) {
        self.pos = self.pos.step(dir);
        self.die = self.die.rolled(dir);
    }
}
