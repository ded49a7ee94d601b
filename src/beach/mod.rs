//! Boiled Corn beach minigame.
//!
//! The player stands on the left of a scrolling beach and throws boiled
//! corn at sunbathers. Holding Space charges the throw, releasing it sends
//! the corn to the right; a towel hit scores, a miss leaves a mark in the
//! sand. A round lasts 32 throws.

pub mod decals;
pub mod logic;
pub mod scene;
pub mod targets;
pub mod throw;
pub mod tide;
pub mod types;

pub use logic::*;
pub use scene::{compose, DrawCommand, Rgb, TextAlign};
pub use types::*;
