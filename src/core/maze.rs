//! Procedural maze generation.
//!
//! Generation is a chain of passes, each taking the grid by value and handing
//! it back. Only `seed_lattice` adds walls; every later pass only opens
//! cells, so a guarantee established by one pass survives the rest:
//! - `bordered`: open field with a walled outer ring
//! - `seed_lattice`: random walls on every third row and column
//! - `carve_guaranteed_path`: monotone corridor from start to finish
//! - `repair_connectivity`: L-shaped fallback if the finish is cut off
//! - `carve_openings`: random plus-shaped openings
//! - `carve_open_space`: one open 2x2 room with a loosened ring
//! - `clear_endpoints`: start and finish forced open
use log::debug;
use rand::Rng;

use crate::core::connectivity::{is_reachable, mark_reachable};
use crate::core::grid::Grid;
use crate::core::player::Pos;
use crate::core::size::LevelSize;

/// Chance that a lattice cell becomes a wall.
pub const WALL_DENSITY: f64 = 0.3;
/// Chance that each arm of a plus-shaped opening is cleared.
const OPENING_CHANCE: f64 = 0.5;
/// Chance that a ring cell around the open room is cleared.
const RING_CHANCE: f64 = 0.7;

/// Runs every pass in order. The start is (0,0) and `finish` must lie on the board.
pub fn generate<R: Rng + ?Sized>(size: LevelSize, finish: Pos, rng: &mut R) -> Grid {
    let start = Pos::new(0, 0);
    let grid = bordered(size.width(), size.height());
    let grid = seed_lattice(grid, WALL_DENSITY, rng);
    let grid = carve_guaranteed_path(grid, finish, rng);
    let grid = repair_connectivity(grid, start, finish);
    let grid = carve_openings(grid, rng);
    let grid = carve_open_space(grid, rng);
    let grid = clear_endpoints(grid, start, finish);
    debug!(
        "maze {}x{} generated: {} walls, {} open 2x2 blocks",
        grid.width(),
        grid.height(),
        grid.wall_count(),
        grid.open_blocks_2x2().len()
    );
    grid
}

/// # Panics
/// If either dimension is zero. `LevelSize` keeps boards at 5x5 or larger.
pub fn bordered(width: usize, height: usize) -> Grid {
    let mut grid = Grid::open(width, height);
    for x in 0..width {
        grid.set_wall(x, 0, true);
        grid.set_wall(x, height - 1, true);
    }
    for y in 0..height {
        grid.set_wall(0, y, true);
        grid.set_wall(width - 1, y, true);
    }
    grid
}

/// # Panics
/// If either dimension is zero.
pub fn seed_lattice<R: Rng + ?Sized>(mut grid: Grid, density: f64, rng: &mut R) -> Grid {
    let (w, h) = (grid.width(), grid.height());
    for y in (2..h.saturating_sub(2)).step_by(3) {
        for x in 1..w - 1 {
            if rng.gen_bool(density) {
                grid.set_wall(x, y, true);
            }
        }
    }
    for x in (2..w.saturating_sub(2)).step_by(3) {
        for y in 1..h - 1 {
            if rng.gen_bool(density) {
                grid.set_wall(x, y, true);
            }
        }
    }
    grid
}

/// Walks right/down from (0,0) to `finish`, flipping a coin while both axes
/// still have distance left. Each step opens the current cell and the next
/// one along the direction of travel.
pub fn carve_guaranteed_path<R: Rng + ?Sized>(mut grid: Grid, finish: Pos, rng: &mut R) -> Grid {
    let (mut x, mut y) = (0i32, 0i32);
    while x < finish.x || y < finish.y {
        if x < finish.x && (y >= finish.y || rng.gen_bool(0.5)) {
            grid.clear(x, y);
            grid.clear(x + 1, y);
            x += 1;
        } else {
            grid.clear(x, y);
            grid.clear(x, y + 1);
            y += 1;
        }
    }
    grid
}

/// Opens the whole top row and right column when `finish` is unreachable from `start`.
pub fn repair_connectivity(mut grid: Grid, start: Pos, finish: Pos) -> Grid {
    mark_reachable(&mut grid, start);
    let reached = grid.cell(finish).map(|c| c.visited).unwrap_or(false);
    if reached {
        return grid;
    }
    debug!("finish ({}, {}) cut off, opening fallback corridor", finish.x, finish.y);
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
        grid.set_wall(x, 0, false);
    }
    for y in 0..h {
        grid.set_wall(w - 1, y, false);
    }
    grid
}

/// Number of plus-shaped openings carved for a board.
#[inline]
pub fn opening_count(grid: &Grid) -> usize {
    grid.width() * grid.height() / 10
}

/// # Panics
/// On grids narrower or shorter than 3 cells (empty centre range).
pub fn carve_openings<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    for _ in 0..opening_count(&grid) {
        let cx = rng.gen_range(1..w - 1);
        let cy = rng.gen_range(1..h - 1);
        for (dx, dy) in [(0, -1), (-1, 0), (0, 0), (1, 0), (0, 1)] {
            if rng.gen_bool(OPENING_CHANCE) {
                grid.clear(cx + dx, cy + dy);
            }
        }
    }
    grid
}

/// Opens a random interior 2x2 block and most of the ring around it.
///
/// # Panics
/// On grids narrower or shorter than 5 cells, the minimum `LevelSize` allows.
pub fn carve_open_space<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Grid {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let x = rng.gen_range(2..w - 2);
    let y = rng.gen_range(2..h - 2);
    for dy in 0..2 {
        for dx in 0..2 {
            grid.clear(x + dx, y + dy);
        }
    }
    for dy in -1..=2 {
        for dx in -1..=2 {
            let ring = dx == -1 || dx == 2 || dy == -1 || dy == 2;
            if ring && rng.gen_bool(RING_CHANCE) {
                grid.clear(x + dx, y + dy);
            }
        }
    }
    grid
}

pub fn clear_endpoints(mut grid: Grid, start: Pos, finish: Pos) -> Grid {
    grid.clear(start.x, start.y);
    grid.clear(finish.x, finish.y);
    grid
}

/// True when `finish` can be walked to from `start` on `grid`.
pub fn is_solvable(grid: &Grid, start: Pos, finish: Pos) -> bool {
    is_reachable(grid, start, finish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn walled(width: usize, height: usize) -> Grid {
        let mut grid = Grid::open(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set_wall(x, y, true);
            }
        }
        grid
    }

    #[test]
    fn test_bordered_walls_only_the_ring() {
        let grid = bordered(6, 5);
        for y in 0..5 {
            for x in 0..6 {
                let ring = x == 0 || y == 0 || x == 5 || y == 4;
                assert_eq!(grid.at(x, y).is_wall, ring, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_seed_lattice_full_density_hits_only_lattice_lines() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = seed_lattice(bordered(12, 12), 1.0, &mut rng);
        for y in 1..11 {
            for x in 1..11 {
                let lattice = (y >= 2 && y < 10 && (y - 2) % 3 == 0) || (x >= 2 && x < 10 && (x - 2) % 3 == 0);
                assert_eq!(grid.at(x, y).is_wall, lattice, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_seed_lattice_zero_density_adds_nothing() {
        let mut rng = StdRng::seed_from_u64(2);
        let before = bordered(10, 8);
        let after = seed_lattice(before.clone(), 0.0, &mut rng);
        assert_eq!(before, after);
    }

    #[test]
    fn test_guaranteed_path_connects_fully_walled_grid() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let finish = Pos::new(9, 6);
            let grid = carve_guaranteed_path(walled(10, 7), finish, &mut rng);
            assert!(is_solvable(&grid, Pos::new(0, 0), finish), "seed {seed}");
        }
    }

    #[test]
    fn test_guaranteed_path_is_monotone_and_narrow() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = carve_guaranteed_path(walled(8, 8), Pos::new(7, 7), &mut rng);
        // A monotone corridor from corner to corner opens exactly w + h - 1 cells.
        assert_eq!(64 - grid.wall_count(), 15);
    }

    #[test]
    fn test_repair_opens_fallback_when_cut_off() {
        // Vertical wall at x = 2 separates the start from the finish.
        let mut grid = Grid::open(6, 6);
        for y in 0..6 {
            grid.set_wall(2, y, true);
        }
        let finish = Pos::new(5, 5);
        assert!(!is_solvable(&grid, Pos::new(0, 0), finish));

        let repaired = repair_connectivity(grid, Pos::new(0, 0), finish);
        assert!(is_solvable(&repaired, Pos::new(0, 0), finish));
        for x in 0..6 {
            assert!(!repaired.at(x, 0).is_wall);
        }
        for y in 0..6 {
            assert!(!repaired.at(5, y).is_wall);
        }
    }

    #[test]
    fn test_repair_leaves_connected_grid_alone() {
        let mut grid = bordered(7, 7);
        for (x, y) in [(0, 0), (1, 0), (6, 5), (6, 6)] {
            grid.set_wall(x, y, false);
        }
        let walls = grid.wall_count();

        let repaired = repair_connectivity(grid, Pos::new(0, 0), Pos::new(6, 6));
        assert_eq!(repaired.wall_count(), walls);
        assert!(repaired.at(3, 3).visited);
        assert!(!repaired.at(3, 0).visited);
    }

    #[test]
    fn test_openings_never_add_walls() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let before = seed_lattice(bordered(15, 10), WALL_DENSITY, &mut rng);
            let after = carve_openings(before.clone(), &mut rng);
            for y in 0..10 {
                for x in 0..15 {
                    if !before.at(x, y).is_wall {
                        assert!(!after.at(x, y).is_wall);
                    }
                }
            }
            assert!(after.wall_count() <= before.wall_count());
        }
    }

    fn assert_only_opened(before: &Grid, after: &Grid) {
        assert_eq!((before.width(), before.height()), (after.width(), after.height()));
        for y in 0..before.height() {
            for x in 0..before.width() {
                if !before.at(x, y).is_wall {
                    assert!(!after.at(x, y).is_wall, "cell ({x}, {y}) walled");
                }
            }
        }
    }

    #[test]
    fn test_guaranteed_path_never_adds_walls() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let before = seed_lattice(bordered(15, 10), WALL_DENSITY, &mut rng);
            let after = carve_guaranteed_path(before.clone(), Pos::new(14, 9), &mut rng);
            assert_only_opened(&before, &after);
        }
    }

    #[test]
    fn test_repair_never_adds_walls() {
        // Cut off: the fallback corridor fires.
        let mut cut = Grid::open(6, 6);
        for y in 0..6 {
            cut.set_wall(2, y, true);
        }
        let repaired = repair_connectivity(cut.clone(), Pos::new(0, 0), Pos::new(5, 5));
        assert_only_opened(&cut, &repaired);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let before = seed_lattice(bordered(12, 9), WALL_DENSITY, &mut rng);
            let after = repair_connectivity(before.clone(), Pos::new(0, 0), Pos::new(11, 8));
            assert_only_opened(&before, &after);
        }
    }

    #[test]
    fn test_open_space_never_adds_walls() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let before = seed_lattice(bordered(15, 10), WALL_DENSITY, &mut rng);
            let after = carve_open_space(before.clone(), &mut rng);
            assert_only_opened(&before, &after);
        }
    }

    #[test]
    #[should_panic]
    fn test_open_space_rejects_grid_below_minimum() {
        let mut rng = StdRng::seed_from_u64(0);
        carve_open_space(Grid::open(4, 4), &mut rng);
    }

    #[test]
    fn test_open_space_leaves_an_open_block() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = carve_open_space(walled(5, 5), &mut rng);
            assert!(!grid.open_blocks_2x2().is_empty(), "seed {seed}");
        }
    }

    #[test]
    fn test_opening_count_scales_with_area() {
        assert_eq!(opening_count(&Grid::open(15, 10)), 15);
        assert_eq!(opening_count(&Grid::open(5, 5)), 2);
    }

    #[test]
    fn test_clear_endpoints() {
        let grid = clear_endpoints(walled(5, 5), Pos::new(0, 0), Pos::new(4, 4));
        assert!(!grid.at(0, 0).is_wall);
        assert!(!grid.at(4, 4).is_wall);
        assert_eq!(grid.wall_count(), 23);
    }
}
