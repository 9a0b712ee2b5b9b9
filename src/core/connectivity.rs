//! Breadth-first reachability over open cells (4-neighbourhood).
use std::collections::VecDeque;

use crate::core::grid::Grid;
use crate::core::player::Pos;

const NEIGHBOURS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// `seen[y][x]` is true for every open cell reachable from `start`.
/// A walled or off-board start reaches nothing.
pub fn reachable_from(grid: &Grid, start: Pos) -> Vec<Vec<bool>> {
    let (w, h) = (grid.width(), grid.height());
    let mut seen = vec![vec![false; w]; h];
    if grid.is_wall(start) {
        return seen;
    }
    let mut q = VecDeque::with_capacity(w * h);
    seen[start.y as usize][start.x as usize] = true;
    q.push_back(start);
    while let Some(cur) = q.pop_front() {
        for (dx, dy) in NEIGHBOURS {
            let next = Pos::new(cur.x + dx, cur.y + dy);
            if grid.is_wall(next) {
                continue;
            }
            let (nx, ny) = (next.x as usize, next.y as usize);
            if seen[ny][nx] {
                continue;
            }
            seen[ny][nx] = true;
            q.push_back(next);
        }
    }
    seen
}

/// Resets every `visited` flag, then sets it on the cells reachable from
/// `start`. Returns how many cells were reached.
pub fn mark_reachable(grid: &mut Grid, start: Pos) -> usize {
    let seen = reachable_from(grid, start);
    grid.reset_visited();
    let mut count = 0;
    for (y, row) in seen.iter().enumerate() {
        for (x, &hit) in row.iter().enumerate() {
            if hit {
                grid.at_mut(x, y).visited = true;
                count += 1;
            }
        }
    }
    count
}

pub fn is_reachable(grid: &Grid, from: Pos, to: Pos) -> bool {
    if !grid.in_bounds(to) {
        return false;
    }
    reachable_from(grid, from)[to.y as usize][to.x as usize]
}
