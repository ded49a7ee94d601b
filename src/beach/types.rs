//! Boiled Corn data structures.
//!
//! A beach round: the player winds up a throw with Space, releases it, and
//! the corn flies right until it lands on a towel (hit) or the sand (miss).

use serde::{Deserialize, Serialize};

use super::decals::DecalCanvas;
use super::targets::TargetPool;
use super::tide::TidePhase;
use crate::assets::{BitmapId, Cue};

/// Scene dimensions in pixels.
pub const SCENE_WIDTH: i32 = 160;
pub const SCENE_HEIGHT: i32 = 90;

/// Where the corn seller stands when a round starts.
pub const CHARACTER_START_X: i32 = 23;
pub const CHARACTER_START_Y: i32 = 47;

/// Charge ceiling; one point per logic tick while Space is held.
pub const MAX_POWER: u32 = 32;
pub const THROWS_PER_ROUND: u32 = 32;
/// Horizontal distance covered per point of power.
pub const DISTANCE_PER_POWER: i32 = 5;
/// Projectile speed in pixels per logic tick.
pub const PROJECTILE_SPEED: f32 = 2.0;

/// Towel footprint.
pub const TARGET_WIDTH: i32 = 16;
pub const TARGET_HEIGHT: i32 = 10;

/// Score shown as blank until the first round starts.
pub const SCORE_SENTINEL: i32 = -1;

/// Logic ticks per second.
pub const LOGIC_RATE_HZ: u32 = 60;

/// Layout variants of the minigame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    Simple,
    #[default]
    Advanced,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Advanced => "Advanced",
        }
    }

    /// Number of target slots on the beach.
    pub fn slot_count(&self) -> usize {
        match self {
            Self::Simple => 5,
            Self::Advanced => 6,
        }
    }

    /// Logic ticks between animation steps (scroll, walk frame, tide).
    pub fn animation_interval(&self) -> u32 {
        match self {
            Self::Simple => 10,
            Self::Advanced => 8,
        }
    }
}

/// Who is lying on the towel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteVariant {
    Boy,
    Girl,
}

impl SpriteVariant {
    pub const ALL: [SpriteVariant; 2] = [SpriteVariant::Boy, SpriteVariant::Girl];

    pub fn bitmap(&self) -> BitmapId {
        match self {
            Self::Boy => BitmapId::Boy,
            Self::Girl => BitmapId::Girl,
        }
    }
}

/// What they are lying on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceVariant {
    Towel1,
    Towel2,
}

impl SurfaceVariant {
    pub const ALL: [SurfaceVariant; 2] = [SurfaceVariant::Towel1, SurfaceVariant::Towel2];

    pub fn bitmap(&self) -> BitmapId {
        match self {
            Self::Towel1 => BitmapId::Towel1,
            Self::Towel2 => BitmapId::Towel2,
        }
    }
}

/// One target slot: a sunbather on a towel, scrolling down the beach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub x: i32,
    pub y: i32,
    /// Already has corn; no longer hittable.
    pub satisfied: bool,
    pub sprite: SpriteVariant,
    pub surface: SurfaceVariant,
}

impl Target {
    /// Whether the point lies on the towel (edges inclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x + TARGET_WIDTH && y >= self.y && y <= self.y + TARGET_HEIGHT
    }
}

/// Corn in the air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub position_x: f32,
    pub position_y: i32,
    pub origin_x: i32,
    pub target_x: i32,
    /// Power the throw was released with.
    pub power: u32,
}

/// Charge view for the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChargeState {
    pub power: u32,
    pub is_charging: bool,
}

/// Where a round currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    /// No round running; title prompt, draw-only.
    Idle,
    /// Round running, waiting for Space.
    Cooldown,
    /// Space held, power building up.
    Charging { power: u32 },
    /// Corn in flight.
    Flying(Projectile),
}

/// Something the host should react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BeachEvent {
    RoundStarted,
    ThrowReleased { power: u32, target_x: i32 },
    Hit { slot: usize },
    Miss { x: i32, y: i32 },
    RoundOver { score: i32 },
    PlayCue(Cue),
    StartMusic,
    StopMusic,
    /// Cancel pressed; the host should unload the minigame.
    Unload,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct BeachGame {
    pub variant: Variant,
    pub phase: RoundPhase,
    pub has_started_once: bool,
    /// Logic ticks since the round started.
    pub frames_elapsed: u64,
    /// Wraps at the variant's animation interval.
    pub logic_tick_counter: u32,
    pub score: i32,
    pub throws_remaining: u32,
    pub targets: TargetPool,
    pub tide: TidePhase,
    pub decals: DecalCanvas,
    /// Vertical scroll of the sand and sea layers (0..SCENE_HEIGHT).
    pub scroll_y: i32,
    pub unload_requested: bool,
}

impl BeachGame {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            phase: RoundPhase::Idle,
            has_started_once: false,
            frames_elapsed: 0,
            logic_tick_counter: 0,
            score: SCORE_SENTINEL,
            throws_remaining: 0,
            targets: TargetPool::new(variant),
            tide: TidePhase::default(),
            decals: DecalCanvas::new(SCENE_WIDTH as usize, SCENE_HEIGHT as usize),
            scroll_y: 0,
            unload_requested: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != RoundPhase::Idle
    }

    pub fn is_flying(&self) -> bool {
        matches!(self.phase, RoundPhase::Flying(_))
    }

    pub fn charge(&self) -> ChargeState {
        match self.phase {
            RoundPhase::Charging { power } => ChargeState {
                power,
                is_charging: true,
            },
            RoundPhase::Flying(projectile) => ChargeState {
                power: projectile.power,
                is_charging: false,
            },
            RoundPhase::Idle | RoundPhase::Cooldown => ChargeState::default(),
        }
    }

    pub fn projectile(&self) -> Option<&Projectile> {
        match &self.phase {
            RoundPhase::Flying(projectile) => Some(projectile),
            _ => None,
        }
    }

    /// Score text for the HUD; blank before the first round.
    pub fn score_text(&self) -> String {
        if self.has_started_once {
            self.score.to_string()
        } else {
            String::new()
        }
    }
}
