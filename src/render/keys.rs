use raylib::prelude::*;

use crate::core::process_events::{Key, KeySource};

const DIGITS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

const FUNCTION: [KeyboardKey; 7] = [
    KeyboardKey::KEY_F1,
    KeyboardKey::KEY_F2,
    KeyboardKey::KEY_F3,
    KeyboardKey::KEY_F4,
    KeyboardKey::KEY_F5,
    KeyboardKey::KEY_F6,
    KeyboardKey::KEY_F7,
];

fn to_raylib(key: Key) -> Option<KeyboardKey> {
    let k = match key {
        Key::W => KeyboardKey::KEY_W,
        Key::A => KeyboardKey::KEY_A,
        Key::S => KeyboardKey::KEY_S,
        Key::D => KeyboardKey::KEY_D,
        Key::ArrowUp => KeyboardKey::KEY_UP,
        Key::ArrowDown => KeyboardKey::KEY_DOWN,
        Key::ArrowLeft => KeyboardKey::KEY_LEFT,
        Key::ArrowRight => KeyboardKey::KEY_RIGHT,
        Key::R => KeyboardKey::KEY_R,
        Key::Digit(n) => *DIGITS.get((n as usize).checked_sub(1)?)?,
        Key::Function(n) => *FUNCTION.get((n as usize).checked_sub(1)?)?,
    };
    Some(k)
}

impl KeySource for RaylibHandle {
    fn is_pressed(&self, key: Key) -> bool {
        to_raylib(key).map(|k| self.is_key_pressed(k)).unwrap_or(false)
    }
}
