//! Cue player for the terminal host.
//!
//! There is no mixer in a terminal. Cues and music changes are logged, and
//! the success cue rings the terminal bell unless muted.

use crate::assets::{Cue, MUSIC_FILE};
use crate::beach::BeachEvent;

/// What the host should do after a batch of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AudioOutput {
    pub ring_bell: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CuePlayer {
    muted: bool,
    music_playing: bool,
}

impl CuePlayer {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            music_playing: false,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        log::debug!("audio gain {}", self.gain());
    }

    /// Master gain: 0.0 when muted, otherwise 1.0.
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            1.0
        }
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    /// Play one cue. Returns whether it produced audible output.
    pub fn play(&mut self, cue: Cue) -> bool {
        log::debug!("cue {} (gain {})", cue.file_name(), self.gain());
        cue == Cue::Success && !self.muted
    }

    /// React to everything the round reported this tick.
    pub fn apply_events(&mut self, events: &[BeachEvent]) -> AudioOutput {
        let mut output = AudioOutput::default();
        for event in events {
            match event {
                BeachEvent::PlayCue(cue) => output.ring_bell |= self.play(*cue),
                BeachEvent::StartMusic => {
                    self.music_playing = true;
                    log::debug!("music {} started", MUSIC_FILE);
                }
                BeachEvent::StopMusic => {
                    self.music_playing = false;
                    log::debug!("music {} stopped", MUSIC_FILE);
                }
                _ => {}
            }
        }
        output
    }
}
