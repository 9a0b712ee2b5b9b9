//! Optional sound effects for rolls, bumps and wins.
//!
//! Clips are looked up under `assets/`; a missing file just silences that effect.
use std::{fs::File, io::BufReader, io::Cursor, io::Read, sync::Arc};

use log::{debug, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::core::level::MoveOutcome;

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Arc<Vec<u8>>> {
    let found = paths.iter().find_map(|p| load_bytes(p).map(|b| (*p, b)));
    match found {
        Some((p, bytes)) => {
            debug!("loaded sound {}", p);
            Some(Arc::new(bytes))
        }
        None => {
            debug!("no sound among {:?}", paths);
            None
        }
    }
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    roll: Option<Arc<Vec<u8>>>,
    bump: Option<Arc<Vec<u8>>>,
    win: Option<Arc<Vec<u8>>>,
    volume: f32,
}

impl AudioManager {
    /// `None` when no output device is available.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(e) => {
                warn!("audio disabled: {}", e);
                return None;
            }
        };
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self { _stream, handle, sfx_sink, roll: None, bump: None, win: None, volume: 0.8 })
    }

    pub fn load_sfx_auto(&mut self) {
        self.roll = load_bytes_any(&["assets/sfx_roll.wav", "assets/sounds/roll.wav", "assets/sounds/step.wav"]);
        self.bump = load_bytes_any(&["assets/sfx_bump.wav", "assets/sounds/bump.wav", "assets/sounds/blocked.wav"]);
        self.win = load_bytes_any(&["assets/sfx_win.wav", "assets/sounds/win.wav", "assets/sounds/goal.wav"]);
    }

    /// Plays the effect matching a move result.
    pub fn react(&self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Moved => self.play_data(self.roll.clone()),
            MoveOutcome::Blocked => self.play_data(self.bump.clone()),
            MoveOutcome::Won => self.play_detached(self.win.clone()),
            MoveOutcome::Ignored => {}
        }
    }

    fn play_data(&self, data: Option<Arc<Vec<u8>>>) {
        if let Some(d) = data {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                self.sfx_sink.append(dec.amplify(self.volume));
            }
        }
    }

    // On its own sink so it is not queued behind roll sounds.
    fn play_detached(&self, data: Option<Arc<Vec<u8>>>) {
        if let Some(d) = data {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec.amplify(self.volume));
                    sink.detach();
                }
            }
        }
    }
}
