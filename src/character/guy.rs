//! The corn seller walking along the beach.

use super::{from_scene_pixels, Animation, Character};
use crate::beach::types::{CHARACTER_START_X, CHARACTER_START_Y};

/// Spritesheet-backed character with a looping frame counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Guy {
    pub x: f32,
    pub y: f32,
    pub animation: Animation,
    pub frame: u32,
}

impl Default for Guy {
    fn default() -> Self {
        Self::new()
    }
}

impl Guy {
    pub fn new() -> Self {
        let (x, y) = from_scene_pixels(CHARACTER_START_X, CHARACTER_START_Y);
        Self {
            x,
            y,
            animation: Animation::Stand,
            frame: 0,
        }
    }
}

impl Character for Guy {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn animation(&self) -> Animation {
        self.animation
    }

    fn select_animation(&mut self, animation: Animation) {
        if self.animation != animation {
            log::debug!("guy spritesheet: {}", animation.name());
            self.animation = animation;
            self.frame = 0;
        }
    }

    fn frame(&self) -> u32 {
        self.frame
    }

    fn animate(&mut self) {
        self.frame = (self.frame + 1) % self.animation.frame_count();
    }
}
