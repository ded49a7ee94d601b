//! Tests for the scrolling beach: target respawn, hit-testing, tide and
//! miss marks over many animation steps.

use boiled_corn::beach::decals::DecalCanvas;
use boiled_corn::beach::targets::{TargetPool, ANCHOR_X, INTERIOR_X_MAX, INTERIOR_X_MIN};
use boiled_corn::beach::tide::{tide_amplitude, TidePhase, SAND_FADE_FULL, TIDE_CREST};
use boiled_corn::beach::{
    key_down, process_tick, BeachGame, BeachInput, Variant, SCENE_HEIGHT, SCENE_WIDTH,
};
use boiled_corn::character::Guy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

#[test]
fn test_targets_stay_in_band_over_long_round() {
    let mut rng = create_test_rng();
    let mut game = BeachGame::new(Variant::Advanced);
    let mut guy = Guy::new();
    key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);

    let last = game.targets.len() - 1;
    for _ in 0..20_000 {
        process_tick(&mut game, &mut guy, &mut rng);
        for (index, target) in game.targets.iter().enumerate() {
            assert!(target.y <= SCENE_HEIGHT, "slot {} left the scene", index);
            if index == 0 {
                assert_eq!(target.x, ANCHOR_X[0]);
            } else if index == last {
                assert_eq!(target.x, ANCHOR_X[1]);
            } else {
                assert!((INTERIOR_X_MIN..=INTERIOR_X_MAX).contains(&target.x));
            }
        }
    }
}

#[test]
fn test_every_slot_respawns_eventually() {
    let mut rng = create_test_rng();
    let mut pool = TargetPool::new(Variant::Simple);
    let mut respawns = vec![0; pool.len()];
    for _ in 0..400 {
        pool.scroll();
        for (index, count) in respawns.iter_mut().enumerate() {
            if pool.respawn_if_offscreen(index, &mut rng) {
                *count += 1;
            }
        }
    }
    assert!(respawns.iter().all(|&count| count >= 2));
}

#[test]
fn test_presatisfied_rate_is_low() {
    let mut rng = create_test_rng();
    let mut pool = TargetPool::new(Variant::Advanced);
    let mut total = 0;
    let mut satisfied = 0;
    for _ in 0..5000 {
        for index in 0..pool.len() {
            pool.slots[index].y = SCENE_HEIGHT + 1;
            pool.respawn_if_offscreen(index, &mut rng);
            total += 1;
            if pool.slots[index].satisfied {
                satisfied += 1;
            }
        }
    }
    let rate = satisfied as f64 / total as f64;
    assert!((0.07..0.13).contains(&rate), "rate was {}", rate);
}

#[test]
fn test_overlapping_targets_first_slot_wins() {
    let mut rng = create_test_rng();
    let mut pool = TargetPool::new(Variant::Advanced);
    pool.reshuffle(&mut rng);
    for slot in &mut pool.slots {
        slot.x = 70;
        slot.y = 40;
    }
    for expected in 0..pool.len() {
        assert_eq!(pool.hit_test(75, 45), Some(expected));
    }
    assert_eq!(pool.hit_test(75, 45), None);
}

#[test]
fn test_one_redraw_per_crest_over_many_cycles() {
    let mut rng = create_test_rng();
    let mut tide = TidePhase::default();
    let mut redraws = 0;
    let mut crossings = 0;
    let mut previous = 0;
    for frame in 0..10_000u64 {
        let amplitude = tide_amplitude(frame);
        if amplitude == TIDE_CREST && previous != TIDE_CREST {
            crossings += 1;
        }
        previous = amplitude;
        if tide.evaluate(frame, &mut rng).new_cycle_max {
            redraws += 1;
        }
    }
    assert!(crossings > 10);
    assert_eq!(redraws, crossings);
}

#[test]
fn test_sand_fade_never_increases_between_repaints() {
    let mut rng = create_test_rng();
    let mut game = BeachGame::new(Variant::Advanced);
    let mut guy = Guy::new();
    key_down(&mut game, &mut guy, BeachInput::Action, &mut rng);

    let mut previous = game.tide.sand_fade_level;
    for _ in 0..5000 {
        process_tick(&mut game, &mut guy, &mut rng);
        let level = game.tide.sand_fade_level;
        assert!(level <= previous || level == SAND_FADE_FULL);
        previous = level;
    }
}

#[test]
fn test_miss_mark_scrolls_off_the_bottom() {
    let mut canvas = DecalCanvas::new(SCENE_WIDTH as usize, SCENE_HEIGHT as usize);
    assert!(canvas.bake(100, 0));
    for step in 1..SCENE_HEIGHT {
        canvas.scroll_down();
        assert!(canvas.get(100, step));
    }
    canvas.scroll_down();
    assert!(canvas.is_empty());
}
