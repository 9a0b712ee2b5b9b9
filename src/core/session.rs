//! The running game: current level, pending maze size and the seeded RNG.
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::level::{Level, MoveOutcome};
use crate::core::process_events::{Command, KeySource, poll_commands};
use crate::core::size::LevelSize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Fixed 12x8 board.
    Classic,
    /// Generated maze with selectable size.
    Maze,
}

pub struct Session {
    variant: Variant,
    level: Level,
    /// Size used by the next regenerate; changed by the preset keys.
    pending: LevelSize,
    rng: StdRng,
    seed: u64,
}

impl Session {
    pub fn new(variant: Variant, size: LevelSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let level = build_level(variant, size, &mut rng);
        info!("session started: {:?}, seed {}", variant, seed);
        Self { variant, level, pending: size, rng, seed }
    }

    #[inline] pub fn variant(&self) -> Variant { self.variant }
    #[inline] pub fn level(&self) -> &Level { &self.level }
    #[inline] pub fn pending_size(&self) -> LevelSize { self.pending }
    #[inline] pub fn seed(&self) -> u64 { self.seed }

    /// Replaces the level with a fresh one, clearing the win latch.
    pub fn regenerate(&mut self) {
        self.level = build_level(self.variant, self.pending, &mut self.rng);
    }

    /// Applies one command. Moves report their outcome, everything else `None`.
    pub fn apply(&mut self, cmd: Command) -> Option<MoveOutcome> {
        match cmd {
            Command::Move(dir) => Some(self.level.try_move(dir)),
            Command::Regenerate => {
                self.regenerate();
                None
            }
            Command::SetWidth(w) => {
                // Presets are inside the bounds; a rejected value keeps the old width.
                if let Ok(size) = self.pending.with_width(w) {
                    debug!("pending width {}", w);
                    self.pending = size;
                }
                None
            }
            Command::SetHeight(h) => {
                if let Ok(size) = self.pending.with_height(h) {
                    debug!("pending height {}", h);
                    self.pending = size;
                }
                None
            }
        }
    }

    /// Processes one frame of input. A regenerate ends the frame's input, so
    /// moves pressed together with R do not land on the new level.
    pub fn handle_frame<K: KeySource + ?Sized>(&mut self, keys: &K) -> Vec<MoveOutcome> {
        let mut outcomes = Vec::new();
        for cmd in poll_commands(keys, self.variant == Variant::Maze) {
            let regen = cmd == Command::Regenerate;
            if let Some(outcome) = self.apply(cmd) {
                outcomes.push(outcome);
            }
            if regen {
                break;
            }
        }
        outcomes
    }
}

fn build_level(variant: Variant, size: LevelSize, rng: &mut StdRng) -> Level {
    match variant {
        Variant::Classic => Level::classic(rng),
        Variant::Maze => Level::maze(size, rng),
    }
}
