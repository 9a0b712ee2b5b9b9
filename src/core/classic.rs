//! Hand-made board for the classic variant.
use std::collections::HashSet;

use crate::core::player::Pos;

pub const COLS: i32 = 12;
pub const ROWS: i32 = 8;

pub const START: Pos = Pos::new(1, 1);
pub const FINISH: Pos = Pos::new(COLS - 2, ROWS - 2);

const INNER_WALLS: [(i32, i32); 12] = [
    (3, 2), (3, 3), (3, 4),
    (7, 4), (7, 5), (7, 6),
    (5, 1), (6, 1), (8, 1),
    (2, 5), (4, 5), (9, 5),
];

/// Outer ring plus the fixed inner obstacles.
pub fn walls() -> HashSet<Pos> {
    let mut set = HashSet::new();
    for x in 0..COLS {
        set.insert(Pos::new(x, 0));
        set.insert(Pos::new(x, ROWS - 1));
    }
    for y in 1..ROWS - 1 {
        set.insert(Pos::new(0, y));
        set.insert(Pos::new(COLS - 1, y));
    }
    set.extend(INNER_WALLS.iter().map(|&(x, y)| Pos::new(x, y)));
    set
}
