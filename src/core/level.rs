//! A playable level: terrain, player, finish and the win latch.
use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;

use crate::core::classic;
use crate::core::die::Direction;
use crate::core::grid::Grid;
use crate::core::maze;
use crate::core::player::{Player, Pos};
use crate::core::size::LevelSize;

/// Obstacles of a level. The classic board is a sparse wall set, the maze a full grid.
#[derive(Clone, Debug)]
pub enum Terrain {
    Walls { width: i32, height: i32, walls: HashSet<Pos> },
    Maze(Grid),
}

impl Terrain {
    pub fn width(&self) -> i32 {
        match self {
            Terrain::Walls { width, .. } => *width,
            Terrain::Maze(grid) => grid.width() as i32,
        }
    }

    pub fn height(&self) -> i32 {
        match self {
            Terrain::Walls { height, .. } => *height,
            Terrain::Maze(grid) => grid.height() as i32,
        }
    }

    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width() && pos.y < self.height()
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        match self {
            Terrain::Walls { walls, .. } => walls.contains(&pos),
            Terrain::Maze(grid) => grid.is_wall(pos),
        }
    }

    fn open(&mut self, pos: Pos) {
        match self {
            Terrain::Walls { walls, .. } => {
                walls.remove(&pos);
            }
            Terrain::Maze(grid) => grid.clear(pos.x, pos.y),
        }
    }

    /// Wall coordinates in row-major order, for drawing.
    pub fn wall_positions(&self) -> Vec<Pos> {
        let mut out = Vec::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = Pos::new(x, y);
                if self.is_wall(p) {
                    out.push(p);
                }
            }
        }
        out
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Finish {
    pub pos: Pos,
    /// Number that must face up when the player arrives.
    pub target: u8,
}

/// Result of one movement request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Target cell off the board or walled; nothing changed.
    Blocked,
    /// Move committed and the level is now won.
    Won,
    /// Level already won; input discarded.
    Ignored,
}

pub struct Level {
    pub player: Player,
    pub finish: Finish,
    terrain: Terrain,
    won: bool,
}

impl Level {
    /// Builds a level and makes sure start and finish are walkable.
    pub fn from_parts(mut terrain: Terrain, start: Pos, finish: Finish) -> Self {
        terrain.open(start);
        terrain.open(finish.pos);
        Self { player: Player::new(start.x, start.y), finish, terrain, won: false }
    }

    /// The fixed 12x8 board.
    pub fn classic<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let finish = Finish { pos: classic::FINISH, target: rng.gen_range(1..=6) };
        let terrain = Terrain::Walls { width: classic::COLS, height: classic::ROWS, walls: classic::walls() };
        info!("classic level: finish ({}, {}) needs {}", finish.pos.x, finish.pos.y, finish.target);
        Self::from_parts(terrain, classic::START, finish)
    }

    /// A generated maze with the start in the top-left and the finish in the bottom-right corner.
    pub fn maze<R: Rng + ?Sized>(size: LevelSize, rng: &mut R) -> Self {
        let pos = Pos::new(size.width() as i32 - 1, size.height() as i32 - 1);
        let finish = Finish { pos, target: rng.gen_range(1..=6) };
        let grid = maze::generate(size, pos, rng);
        info!("maze level {}x{}: finish needs {}", size.width(), size.height(), finish.target);
        Self::from_parts(Terrain::Maze(grid), Pos::new(0, 0), finish)
    }

    #[inline] pub fn terrain(&self) -> &Terrain { &self.terrain }
    #[inline] pub fn width(&self) -> i32 { self.terrain.width() }
    #[inline] pub fn height(&self) -> i32 { self.terrain.height() }
    #[inline] pub fn won(&self) -> bool { self.won }

    pub fn is_valid_move(&self, x: i32, y: i32) -> bool {
        let pos = Pos::new(x, y);
        self.terrain.in_bounds(pos) && !self.terrain.is_wall(pos)
    }

    /// Player on the finish with the required number facing up.
    pub fn check_win(&self) -> bool {
        self.player.pos == self.finish.pos && self.player.die.current_top() == self.finish.target
    }

    /// Validates and commits a single step, latching the win if it completes the level.
    pub fn try_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.won {
            return MoveOutcome::Ignored;
        }
        let target = self.player.pos.step(dir);
        if !self.is_valid_move(target.x, target.y) {
            debug!("{:?} blocked at ({}, {})", dir, target.x, target.y);
            return MoveOutcome::Blocked;
        }
        self.player.advance(dir);
        debug!(
            "{:?} -> ({}, {}), top {}",
            dir,
            self.player.pos.x,
            self.player.pos.y,
            self.player.die.current_top()
        );
        if self.check_win() {
            self.won = true;
            info!("level won at ({}, {}) with {}", self.player.pos.x, self.player.pos.y, self.finish.target);
            return MoveOutcome::Won;
        }
        MoveOutcome::Moved
    }
}
