//! Cell grid backing the maze variant.
use crate::core::player::Pos;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub is_wall: bool,
    /// Scratch flag for reachability passes; reset before each pass.
    pub visited: bool,
}

/// Row-major grid, `cells[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// All cells open.
    pub fn open(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .map(|y| (0..width).map(|x| Cell { x, y, is_wall: false, visited: false }).collect())
            .collect();
        Self { width, height, cells }
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.cells[pos.y as usize][pos.x as usize])
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y][x]
    }

    #[inline]
    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y][x]
    }

    /// Out-of-range coordinates count as wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.cell(pos).map(|c| c.is_wall).unwrap_or(true)
    }

    pub fn set_wall(&mut self, x: usize, y: usize, wall: bool) {
        if x < self.width && y < self.height {
            self.cells[y][x].is_wall = wall;
        }
    }

    /// Opens a cell; silently ignores coordinates off the board.
    pub fn clear(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 {
            self.set_wall(x as usize, y as usize, false);
        }
    }

    pub fn reset_visited(&mut self) {
        for row in &mut self.cells {
            for c in row.iter_mut() {
                c.visited = false;
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(|r| r.as_slice())
    }

    pub fn wall_count(&self) -> usize {
        self.rows().flatten().filter(|c| c.is_wall).count()
    }

    /// Top-left corners of every fully open 2x2 block that avoids the outer ring.
    pub fn open_blocks_2x2(&self) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        if self.width < 4 || self.height < 4 {
            return found;
        }
        for y in 1..self.height - 2 {
            for x in 1..self.width - 2 {
                let open = !self.cells[y][x].is_wall
                    && !self.cells[y][x + 1].is_wall
                    && !self.cells[y + 1][x].is_wall
                    && !self.cells[y + 1][x + 1].is_wall;
                if open {
                    found.push((x, y));
                }
            }
        }
        found
    }
}
