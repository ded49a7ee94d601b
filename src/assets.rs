//! Symbolic resource handles for the beach scene.
//!
//! The minigame never touches image or audio bytes. It names bitmaps and
//! cues, and the host resolves those names against its data directory.

/// Bitmaps drawn by the scene compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitmapId {
    Boy,
    Girl,
    Cloud,
    Lost,
    Off,
    On,
    Overlay,
    Sand,
    Sea,
    Towel1,
    Towel2,
    Corn,
}

impl BitmapId {
    pub const ALL: [BitmapId; 12] = [
        BitmapId::Boy,
        BitmapId::Girl,
        BitmapId::Cloud,
        BitmapId::Lost,
        BitmapId::Off,
        BitmapId::On,
        BitmapId::Overlay,
        BitmapId::Sand,
        BitmapId::Sea,
        BitmapId::Towel1,
        BitmapId::Towel2,
        BitmapId::Corn,
    ];

    /// File name the host loader resolves this bitmap from.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Boy => "boy.png",
            Self::Girl => "girl.png",
            Self::Cloud => "cloud.png",
            Self::Lost => "lost.png",
            Self::Off => "off.png",
            Self::On => "on.png",
            Self::Overlay => "overlay.png",
            Self::Sand => "sand.png",
            Self::Sea => "sea.png",
            Self::Towel1 => "towel1.png",
            Self::Towel2 => "towel2.png",
            Self::Corn => "corn.png",
        }
    }

    /// Size of the opaque part of the bitmap in scene pixels.
    pub fn size(&self) -> (i32, i32) {
        match self {
            Self::Boy | Self::Girl => (8, 8),
            Self::Cloud => (7, 5),
            Self::Lost => (5, 3),
            Self::Off | Self::On => (160, 10),
            Self::Overlay => (160, 90),
            Self::Sand => (18, 90),
            Self::Sea => (12, 90),
            Self::Towel1 | Self::Towel2 => (16, 10),
            Self::Corn => (3, 3),
        }
    }
}

/// One-shot sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Round begins
    Start,
    /// Corn leaves the hand
    Throw,
    /// Target got its corn
    Success,
    /// Corn landed in the sand
    Failure,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::Start, Cue::Throw, Cue::Success, Cue::Failure];

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Start => "start.flac",
            Self::Throw => "throw.flac",
            Self::Success => "yay.flac",
            Self::Failure => "aww.flac",
        }
    }
}

/// Looping round music.
pub const MUSIC_FILE: &str = "beach.flac";
