//! Boiled Corn - a beach minigame for the terminal.
//!
//! This module exposes the game logic for testing and for hosts other than
//! the bundled terminal binary.

pub mod assets;
pub mod audio;
pub mod beach;
pub mod character;
pub mod core;
pub mod input;
pub mod settings;
pub mod utils;
