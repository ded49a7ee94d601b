//! Scene compositor: turns the round state into an ordered draw list.
//!
//! Coordinates are scene pixels (160x90, origin top-left). The list is
//! painted front to back by the host, so later commands cover earlier ones.

use super::types::{BeachGame, RoundPhase, MAX_POWER, SCENE_HEIGHT, SCENE_WIDTH};
use crate::assets::BitmapId;
use crate::character::{Animation, Character};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

pub const BACKGROUND: Rgb = Rgb(255, 234, 206);

/// Top edge of the charge bar strip.
pub const HUD_Y: i32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Fill {
        color: Rgb,
    },
    Bitmap {
        bitmap: BitmapId,
        x: i32,
        y: i32,
        /// 0 is invisible, 255 fully opaque.
        alpha: u8,
        /// Draw only this many columns from the left edge.
        clip_width: Option<i32>,
    },
    Sprite {
        animation: Animation,
        frame: u32,
        x: i32,
        y: i32,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Rgb,
        align: TextAlign,
    },
}

impl DrawCommand {
    fn bitmap(bitmap: BitmapId, x: i32, y: i32) -> Self {
        Self::Bitmap {
            bitmap,
            x,
            y,
            alpha: u8::MAX,
            clip_width: None,
        }
    }

    fn text(text: impl Into<String>, x: i32, y: i32, color: Rgb, align: TextAlign) -> Self {
        Self::Text {
            text: text.into(),
            x,
            y,
            color,
            align,
        }
    }
}

/// Offsets of the score outline copies.
const OUTLINE: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const SCORE_X: i32 = SCENE_WIDTH - 3;
const SCORE_Y: i32 = 2;

pub const TITLE_TEXT: &str = "BOILED CORN";
pub const PROMPT_TEXT: &str = "Press SPACE to start";

/// Build the draw list for the current frame. Read-only.
pub fn compose<C: Character>(game: &BeachGame, guy: &C) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Fill { color: BACKGROUND }];

    compose_layers(game, &mut commands);
    commands.push(DrawCommand::bitmap(BitmapId::Overlay, 0, 0));

    let (guy_x, guy_y) = guy.scene_position();
    commands.push(DrawCommand::Sprite {
        animation: guy.animation(),
        frame: guy.frame(),
        x: guy_x - 4,
        y: guy_y - 12,
    });

    for target in game.targets.iter() {
        commands.push(DrawCommand::bitmap(target.surface.bitmap(), target.x, target.y));
        commands.push(DrawCommand::bitmap(
            target.sprite.bitmap(),
            target.x + 4,
            target.y + 1,
        ));
    }

    let (lost_w, lost_h) = BitmapId::Lost.size();
    for (x, y) in game.decals.marks() {
        commands.push(DrawCommand::bitmap(
            BitmapId::Lost,
            x - lost_w / 2,
            y - lost_h / 2,
        ));
    }

    for (_, target) in game.targets.unsatisfied() {
        commands.push(DrawCommand::bitmap(BitmapId::Cloud, target.x + 10, target.y - 6));
    }

    compose_score(game, &mut commands);

    if !game.is_active() {
        commands.push(DrawCommand::text(
            TITLE_TEXT,
            SCENE_WIDTH / 2,
            30,
            Rgb::WHITE,
            TextAlign::Center,
        ));
        commands.push(DrawCommand::text(
            PROMPT_TEXT,
            SCENE_WIDTH / 2,
            40,
            Rgb::WHITE,
            TextAlign::Center,
        ));
    }

    if let Some(projectile) = game.projectile() {
        let (corn_w, corn_h) = BitmapId::Corn.size();
        commands.push(DrawCommand::bitmap(
            BitmapId::Corn,
            projectile.position_x as i32 - corn_w / 2,
            projectile.position_y - projectile.arc_height() - corn_h / 2,
        ));
    }

    compose_hud(game, &mut commands);
    commands
}

/// Sand and sea, each as two vertically stacked copies so the scroll wraps.
fn compose_layers(game: &BeachGame, commands: &mut Vec<DrawCommand>) {
    let tide = &game.tide;
    for y in [game.scroll_y, game.scroll_y - SCENE_HEIGHT] {
        commands.push(DrawCommand::Bitmap {
            bitmap: BitmapId::Sand,
            x: tide.sand_offset_x,
            y,
            alpha: tide.sand_fade_level,
            clip_width: None,
        });
    }
    for y in [game.scroll_y, game.scroll_y - SCENE_HEIGHT] {
        commands.push(DrawCommand::bitmap(BitmapId::Sea, tide.sea_offset_x, y));
    }
}

fn compose_score(game: &BeachGame, commands: &mut Vec<DrawCommand>) {
    let text = game.score_text();
    if text.is_empty() {
        return;
    }
    for (dx, dy) in OUTLINE {
        commands.push(DrawCommand::text(
            text.clone(),
            SCORE_X + dx,
            SCORE_Y + dy,
            Rgb::BLACK,
            TextAlign::Right,
        ));
    }
    commands.push(DrawCommand::text(
        text,
        SCORE_X,
        SCORE_Y,
        Rgb::WHITE,
        TextAlign::Right,
    ));
}

/// Width of the lit part of the charge bar.
pub fn charge_bar_width(power: u32) -> i32 {
    let (bar_w, _) = BitmapId::On.size();
    bar_w * power as i32 / MAX_POWER as i32
}

fn compose_hud(game: &BeachGame, commands: &mut Vec<DrawCommand>) {
    match game.phase {
        RoundPhase::Charging { .. } | RoundPhase::Flying(_) => {
            let power = game.charge().power;
            commands.push(DrawCommand::bitmap(BitmapId::Off, 0, HUD_Y));
            commands.push(DrawCommand::Bitmap {
                bitmap: BitmapId::On,
                x: 0,
                y: HUD_Y,
                alpha: u8::MAX,
                clip_width: Some(charge_bar_width(power)),
            });
        }
        RoundPhase::Idle | RoundPhase::Cooldown if game.has_started_once => {
            commands.push(DrawCommand::text(
                format!("Throws: {}", game.throws_remaining),
                2,
                HUD_Y + 2,
                Rgb::WHITE,
                TextAlign::Left,
            ));
        }
        RoundPhase::Idle | RoundPhase::Cooldown => {}
    }
}
