//! End-to-end tests for a beach round driven through the public API.
//!
//! Each test plays the round the way the terminal host does: key presses
//! and releases interleaved with fixed-rate logic ticks, with a seeded RNG.

use boiled_corn::assets::Cue;
use boiled_corn::audio::CuePlayer;
use boiled_corn::beach::{
    compose, key_down, key_up, process_tick, BeachEvent, BeachGame, BeachInput, DrawCommand,
    RoundPhase, Variant, MAX_POWER, THROWS_PER_ROUND,
};
use boiled_corn::character::{Animation, Character, Guy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

/// Hold Space for `ticks`, release, and tick until the corn lands.
fn play_throw(
    game: &mut BeachGame,
    guy: &mut Guy,
    ticks: u32,
    rng: &mut ChaCha8Rng,
) -> Vec<BeachEvent> {
    let mut events = key_down(game, guy, BeachInput::Action, rng);
    for _ in 0..ticks {
        events.extend(process_tick(game, guy, rng));
    }
    events.extend(key_up(game, &*guy, BeachInput::Action));
    while game.is_flying() {
        events.extend(process_tick(game, guy, rng));
    }
    events
}

#[test]
fn test_full_power_throw_sails_past_the_beach() {
    let mut rng = create_test_rng();
    let mut game = BeachGame::new(Variant::Advanced);
    let mut guy = Guy::new();

    key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);
    assert_eq!(game.throws_remaining, THROWS_PER_ROUND);
    assert_eq!(game.score, 0);

    key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);
    for _ in 0..40 {
        process_tick(&mut game, &mut guy, &mut rng);
    }
    assert_eq!(game.charge().power, MAX_POWER);

    let released = key_up(&mut game, &guy, BeachInput::Action);
    let (x, _) = guy.scene_position();
    assert!(released.contains(&BeachEvent::ThrowReleased {
        power: MAX_POWER,
        target_x: x + 160
    }));

    while game.is_flying() {
        process_tick(&mut game, &mut guy, &mut rng);
    }
    assert_eq!(game.score, -1);
    assert_eq!(game.throws_remaining, THROWS_PER_ROUND - 1);
}

#[test]
fn test_whole_round_ends_after_all_throws() {
    let mut rng = create_test_rng();
    let mut game = BeachGame::new(Variant::Advanced);
    let mut guy = Guy::new();
    key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);

    let mut completed = 0;
    let mut round_over = 0;
    while game.is_active() {
        let before = game.throws_remaining;
        let events = play_throw(&mut game, &mut guy, 1 + completed % 20, &mut rng);
        assert_eq!(game.throws_remaining, before - 1);
        round_over += events
            .iter()
            .filter(|e| matches!(e, BeachEvent::RoundOver { .. }))
            .count();
        completed += 1;
    }

    assert_eq!(completed, THROWS_PER_ROUND);
    assert_eq!(round_over, 1);
    assert_eq!(game.phase, RoundPhase::Idle);
    assert_eq!(guy.animation(), Animation::Stand);
    assert!(game.score >= -(THROWS_PER_ROUND as i32));
    assert!(game.score <= THROWS_PER_ROUND as i32);
}

#[test]
fn test_score_matches_hits_and_misses() {
    let mut rng = create_test_rng();
    let mut game = BeachGame::new(Variant::Simple);
    let mut guy = Guy::new();
    key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);

    let mut hits = 0;
    let mut misses = 0;
    for i in 0..10 {
        let events = play_throw(&mut game, &mut guy, 4 + i * 3, &mut rng);
        hits += events
            .iter()
            .filter(|e| matches!(e, BeachEvent::Hit { .. }))
            .count() as i32;
        misses += events
            .iter()
            .filter(|e| matches!(e, BeachEvent::Miss { .. }))
            .count() as i32;
    }
    assert_eq!(hits + misses, 10);
    assert_eq!(game.score, hits - misses);
}

#[test]
fn test_idle_state_is_draw_only() {
    let mut rng = create_test_rng();
    let mut game = BeachGame::new(Variant::Advanced);
    let mut guy = Guy::new();
    let before = compose(&game, &guy);
    for _ in 0..500 {
        process_tick(&mut game, &mut guy, &mut rng);
    }
    assert_eq!(compose(&game, &guy), before);
    // Releasing without a round does nothing either
    assert!(key_up(&mut game, &guy, BeachInput::Action).is_empty());
}

#[test]
fn test_score_hidden_until_first_round() {
    let mut rng = create_test_rng();
    let mut game = BeachGame::new(Variant::Advanced);
    let mut guy = Guy::new();
    fn has_score(commands: &[DrawCommand]) -> bool {
        commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "0"))
    }
    assert!(!has_score(&compose(&game, &guy)));
    key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);
    assert!(has_score(&compose(&game, &guy)));
}

#[test]
fn test_cues_reach_player() {
    let mut rng = create_test_rng();
    let mut game = BeachGame::new(Variant::Advanced);
    let mut guy = Guy::new();
    let mut player = CuePlayer::new(false);

    let started = key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);
    assert!(started.contains(&BeachEvent::PlayCue(Cue::Start)));
    player.apply_events(&started);
    assert!(player.music_playing());

    game.throws_remaining = 1;
    let events = play_throw(&mut game, &mut guy, 2, &mut rng);
    assert!(events.contains(&BeachEvent::PlayCue(Cue::Throw)));
    assert!(events.contains(&BeachEvent::PlayCue(Cue::Failure)));
    player.apply_events(&events);
    assert!(!player.music_playing());
}

#[test]
fn test_same_seed_same_round() {
    let play = || {
        let mut rng = create_test_rng();
        let mut game = BeachGame::new(Variant::Advanced);
        let mut guy = Guy::new();
        key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);
        let mut log = Vec::new();
        for i in 0..8 {
            log.extend(play_throw(&mut game, &mut guy, 5 + i * 4, &mut rng));
        }
        (log, game.score, game.targets.clone())
    };
    assert_eq!(play(), play());
}
