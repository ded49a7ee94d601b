//! Player preferences persisted between sessions.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::beach::Variant;
use crate::utils::persistence::{self, load_json_or_default, save_json};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mute: bool,
    pub fullscreen: bool,
    pub variant: Variant,
}

impl Settings {
    /// Default location, `~/.boiled-corn/settings.json`.
    pub fn default_path() -> io::Result<PathBuf> {
        persistence::data_path(SETTINGS_FILE)
    }

    /// Load from `path`; a missing or corrupt file gives the defaults.
    pub fn load_from(path: &Path) -> Self {
        load_json_or_default(path)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.mute = !self.mute;
        self.mute
    }

    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }
}
