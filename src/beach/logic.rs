//! Game logic for the Boiled Corn beach round.

use super::throw::{self, Flight, Landing};
use super::types::{
    BeachEvent, BeachGame, RoundPhase, CHARACTER_START_X, CHARACTER_START_Y, SCENE_HEIGHT,
    THROWS_PER_ROUND,
};
use crate::assets::Cue;
use crate::character::{Animation, Character};
use rand::Rng;

/// Input actions for the beach round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeachInput {
    /// Start a round, or charge/release a throw (Space).
    Action,
    /// Leave the minigame (Esc).
    Cancel,
    /// Any other key.
    Other,
}

/// Handle a key press.
pub fn key_down<R: Rng, C: Character>(
    game: &mut BeachGame,
    guy: &mut C,
    input: BeachInput,
    rng: &mut R,
) -> Vec<BeachEvent> {
    let mut events = Vec::new();
    match input {
        BeachInput::Action => match game.phase {
            RoundPhase::Idle => start_round(game, guy, rng, &mut events),
            RoundPhase::Cooldown | RoundPhase::Charging { .. } => {
                game.phase = throw::begin_charge(game.phase);
            }
            RoundPhase::Flying(_) => {}
        },
        BeachInput::Cancel => {
            game.unload_requested = true;
            events.push(BeachEvent::Unload);
        }
        BeachInput::Other => {}
    }
    events
}

/// Handle a key release.
pub fn key_up<C: Character>(game: &mut BeachGame, guy: &C, input: BeachInput) -> Vec<BeachEvent> {
    let mut events = Vec::new();
    if input != BeachInput::Action {
        return events;
    }
    if let RoundPhase::Charging { power } = game.phase {
        let (x, y) = guy.scene_position();
        game.phase = throw::release(game.phase, x, y);
        if let Some(projectile) = game.projectile() {
            log::debug!(
                "throw released: power {} from ({}, {}) toward x={}",
                power,
                x,
                y,
                projectile.target_x
            );
            events.push(BeachEvent::ThrowReleased {
                power,
                target_x: projectile.target_x,
            });
            events.push(BeachEvent::PlayCue(Cue::Throw));
        }
    }
    events
}

/// Process one logic tick (60 per second). Does nothing while idle.
pub fn process_tick<R: Rng, C: Character>(
    game: &mut BeachGame,
    guy: &mut C,
    rng: &mut R,
) -> Vec<BeachEvent> {
    let mut events = Vec::new();
    if !game.is_active() {
        return events;
    }

    game.frames_elapsed += 1;
    game.tide.decay();

    game.logic_tick_counter = (game.logic_tick_counter + 1) % game.variant.animation_interval();
    if game.logic_tick_counter == 0 {
        animation_step(game, guy, rng);
    }

    game.targets.respawn_offscreen(rng);

    match game.phase {
        RoundPhase::Charging { power } => {
            game.phase = RoundPhase::Charging {
                power: throw::advance_charge(power),
            };
        }
        RoundPhase::Flying(projectile) => match throw::advance_flight(projectile) {
            Flight::Airborne(next) => game.phase = RoundPhase::Flying(next),
            Flight::Landed(landing) => resolve_landing(game, guy, landing, &mut events),
        },
        RoundPhase::Idle | RoundPhase::Cooldown => {}
    }

    events
}

/// Everything that moves at the slower animation rate.
fn animation_step<R: Rng, C: Character>(game: &mut BeachGame, guy: &mut C, rng: &mut R) {
    guy.animate();
    game.decals.scroll_down();
    game.targets.scroll();
    game.scroll_y = (game.scroll_y + 1) % SCENE_HEIGHT;
    game.tide.evaluate(game.frames_elapsed, rng);
}

fn start_round<R: Rng, C: Character>(
    game: &mut BeachGame,
    guy: &mut C,
    rng: &mut R,
    events: &mut Vec<BeachEvent>,
) {
    game.has_started_once = true;
    game.score = 0;
    game.throws_remaining = THROWS_PER_ROUND;
    game.frames_elapsed = 0;
    game.logic_tick_counter = 0;
    game.scroll_y = 0;
    game.tide = Default::default();
    game.tide.evaluate(0, rng);
    game.decals.clear();
    game.targets.reshuffle(rng);
    game.phase = RoundPhase::Cooldown;

    guy.set_scene_position(CHARACTER_START_X, CHARACTER_START_Y);
    guy.select_animation(Animation::Walk);

    log::info!(
        "round started ({} variant, {} throws)",
        game.variant.name(),
        game.throws_remaining
    );
    events.push(BeachEvent::RoundStarted);
    events.push(BeachEvent::PlayCue(Cue::Start));
    events.push(BeachEvent::StartMusic);
}

fn resolve_landing<C: Character>(
    game: &mut BeachGame,
    guy: &mut C,
    landing: Landing,
    events: &mut Vec<BeachEvent>,
) {
    game.throws_remaining = game.throws_remaining.saturating_sub(1);

    match game.targets.hit_test(landing.x, landing.y) {
        Some(slot) => {
            game.score += 1;
            log::debug!("hit slot {} at ({}, {})", slot, landing.x, landing.y);
            events.push(BeachEvent::Hit { slot });
            events.push(BeachEvent::PlayCue(Cue::Success));
        }
        None => {
            game.score -= 1;
            let baked = game.decals.bake(landing.x, landing.y);
            log::debug!(
                "miss at ({}, {}), decal {}",
                landing.x,
                landing.y,
                if baked { "baked" } else { "off canvas" }
            );
            events.push(BeachEvent::Miss {
                x: landing.x,
                y: landing.y,
            });
            events.push(BeachEvent::PlayCue(Cue::Failure));
        }
    }

    game.phase = RoundPhase::Cooldown;

    if game.throws_remaining == 0 {
        game.phase = RoundPhase::Idle;
        guy.select_animation(Animation::Stand);
        log::info!("round over, score {}", game.score);
        events.push(BeachEvent::StopMusic);
        events.push(BeachEvent::RoundOver { score: game.score });
    }
}
