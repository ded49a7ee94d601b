//! Terminal UI for the beach minigame.

pub mod beach_scene;

pub use beach_scene::render_beach;
