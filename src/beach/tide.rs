//! Tide and wet-sand animation.
//!
//! The sea slides in and out following `|sin(frames / 64)|`. Each time the
//! wave reaches its crest a new low-water mark is rolled; whenever the sea
//! sits at that mark the wet sand is repainted at full strength and then
//! dries out tick by tick.

use rand::Rng;

pub const TIDE_FRAME_DIVISOR: f64 = 64.0;
pub const TIDE_AMPLITUDE: f64 = 16.0;
/// Crest value that triggers a new low-water mark.
pub const TIDE_CREST: i32 = 15;
/// Low-water marks are drawn from `0..=CYCLE_MAX_LIMIT`.
pub const CYCLE_MAX_LIMIT: i32 = 6;
pub const SAND_FADE_FULL: u8 = 255;
pub const SAND_FADE_DECAY: u8 = 2;

/// Quantized tide amplitude for a frame count.
pub fn tide_amplitude(frames_elapsed: u64) -> i32 {
    ((frames_elapsed as f64 / TIDE_FRAME_DIVISOR).sin().abs() * TIDE_AMPLITUDE) as i32
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TidePhase {
    /// Horizontal offset of the sea layer.
    pub sea_offset_x: i32,
    /// Horizontal offset of the wet sand layer, recorded at the last repaint.
    pub sand_offset_x: i32,
    /// Wet sand opacity.
    pub sand_fade_level: u8,
    /// Low-water mark for the current cycle.
    pub cycle_max: i32,
    /// Amplitude seen at the previous evaluation.
    pub last_amplitude: i32,
}

/// What changed during one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TideUpdate {
    pub new_cycle_max: bool,
    pub sand_repainted: bool,
}

impl TidePhase {
    /// Recompute the tide for the given frame.
    pub fn evaluate<R: Rng>(&mut self, frames_elapsed: u64, rng: &mut R) -> TideUpdate {
        let amplitude = tide_amplitude(frames_elapsed);
        let mut update = TideUpdate::default();

        // Only the tick that reaches the crest rolls a new mark
        if amplitude == TIDE_CREST && self.last_amplitude != TIDE_CREST {
            self.cycle_max = rng.gen_range(0..=CYCLE_MAX_LIMIT);
            update.new_cycle_max = true;
            log::debug!("tide crest at frame {}, low water {}", frames_elapsed, self.cycle_max);
        }
        self.last_amplitude = amplitude;

        self.sea_offset_x = amplitude.max(self.cycle_max);
        if self.sea_offset_x == self.cycle_max {
            self.sand_fade_level = SAND_FADE_FULL;
            self.sand_offset_x = self.sea_offset_x;
            update.sand_repainted = true;
        }

        update
    }

    /// Dry the wet sand by one tick.
    pub fn decay(&mut self) {
        self.sand_fade_level = self.sand_fade_level.saturating_sub(SAND_FADE_DECAY);
    }
}
