//! Animated character entity used by the beach minigame.
//!
//! The minigame only moves the character and picks one of its named
//! animations; frame timing and sprite data belong to the implementation.

pub mod guy;

pub use guy::*;

use crate::beach::types::{SCENE_HEIGHT, SCENE_WIDTH};

/// Named spritesheets a character can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Stand,
    Walk,
}

impl Animation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stand => "stand",
            Self::Walk => "walk",
        }
    }

    /// Frames in the spritesheet.
    pub fn frame_count(&self) -> u32 {
        match self {
            Self::Stand => 1,
            Self::Walk => 4,
        }
    }
}

/// An animated sprite positioned in normalized scene coordinates (0..1).
pub trait Character {
    fn position(&self) -> (f32, f32);
    fn set_position(&mut self, x: f32, y: f32);
    fn animation(&self) -> Animation;
    fn select_animation(&mut self, animation: Animation);
    /// Current frame within the selected animation.
    fn frame(&self) -> u32;
    /// Advance the selected animation by one frame.
    fn animate(&mut self);

    /// Position in scene pixels.
    fn scene_position(&self) -> (i32, i32) {
        let (x, y) = self.position();
        to_scene_pixels(x, y)
    }

    fn set_scene_position(&mut self, x: i32, y: i32) {
        let (nx, ny) = from_scene_pixels(x, y);
        self.set_position(nx, ny);
    }
}

pub fn to_scene_pixels(x: f32, y: f32) -> (i32, i32) {
    (
        (x * SCENE_WIDTH as f32).round() as i32,
        (y * SCENE_HEIGHT as f32).round() as i32,
    )
}

pub fn from_scene_pixels(x: i32, y: i32) -> (f32, f32) {
    (x as f32 / SCENE_WIDTH as f32, y as f32 / SCENE_HEIGHT as f32)
}
