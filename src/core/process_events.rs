//! Keyboard input: backend-neutral keys and the commands they trigger.
use crate::core::die::Direction;
use crate::core::size::{HEIGHT_PRESETS, WIDTH_PRESETS};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    R,
    /// Number row, 1..=9.
    Digit(u8),
    /// Function keys, 1..=7.
    Function(u8),
}

/// Anything that can answer "was this key pressed during the current frame".
/// Edge-triggered: holding a key reports it once.
pub trait KeySource {
    fn is_pressed(&self, key: Key) -> bool;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Regenerate,
    SetWidth(usize),
    SetHeight(usize),
}

pub const MOVE_BINDINGS: [(Direction, [Key; 2]); 4] = [
    (Direction::Up, [Key::W, Key::ArrowUp]),
    (Direction::Down, [Key::S, Key::ArrowDown]),
    (Direction::Left, [Key::A, Key::ArrowLeft]),
    (Direction::Right, [Key::D, Key::ArrowRight]),
];

/// Commands for this frame in processing order: size presets, regenerate, then moves.
pub fn poll_commands<K: KeySource + ?Sized>(keys: &K, size_keys: bool) -> Vec<Command> {
    let mut out = Vec::new();
    if size_keys {
        for (i, &w) in WIDTH_PRESETS.iter().enumerate() {
            if keys.is_pressed(Key::Digit(i as u8 + 1)) {
                out.push(Command::SetWidth(w));
            }
        }
        for (i, &h) in HEIGHT_PRESETS.iter().enumerate() {
            if keys.is_pressed(Key::Function(i as u8 + 1)) {
                out.push(Command::SetHeight(h));
            }
        }
    }
    if keys.is_pressed(Key::R) {
        out.push(Command::Regenerate);
    }
    for (dir, bound) in MOVE_BINDINGS {
        if bound.iter().any(|&k| keys.is_pressed(k)) {
            out.push(Command::Move(dir));
        }
    }
    out
}
