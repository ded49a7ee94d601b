//! Target pool: sunbathers scrolling down the beach.
//!
//! Slots are scanned in index order everywhere, so hit resolution is
//! reproducible. The first and last slot are anchors with a fixed column;
//! the slots between them get a random column each time they re-enter.

use rand::Rng;

use super::types::{
    SpriteVariant, SurfaceVariant, Target, Variant, SCENE_HEIGHT, TARGET_HEIGHT,
};

/// Columns of the first and last (anchor) slot.
pub const ANCHOR_X: [i32; 2] = [40, 136];
/// Column band for interior slots.
pub const INTERIOR_X_MIN: i32 = 60;
pub const INTERIOR_X_MAX: i32 = 120;
/// Re-entry rows are drawn from `-RESPAWN_Y_MAX..=-RESPAWN_Y_MIN`.
pub const RESPAWN_Y_MIN: i32 = TARGET_HEIGHT;
pub const RESPAWN_Y_MAX: i32 = 30;
/// One in this many respawned targets already has corn.
pub const PRESATISFIED_ONE_IN: u32 = 10;
/// Random lift applied to the staggered rows at round start.
pub const RESHUFFLE_JITTER: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPool {
    pub slots: Vec<Target>,
}

impl TargetPool {
    /// Evenly spread layout used before the first round.
    pub fn new(variant: Variant) -> Self {
        let count = variant.slot_count();
        let spacing = SCENE_HEIGHT / count as i32;
        let interior = count.saturating_sub(2).max(1) as i32;
        let slots = (0..count)
            .map(|index| {
                let x = if Self::is_anchor_index(index, count) {
                    anchor_x(index)
                } else {
                    let step = (INTERIOR_X_MAX - INTERIOR_X_MIN) / interior;
                    INTERIOR_X_MIN + step * (index as i32 - 1)
                };
                Target {
                    x,
                    y: index as i32 * spacing,
                    satisfied: false,
                    sprite: SpriteVariant::ALL[index % SpriteVariant::ALL.len()],
                    surface: SurfaceVariant::ALL[index % SurfaceVariant::ALL.len()],
                }
            })
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.slots.iter()
    }

    fn is_anchor_index(index: usize, count: usize) -> bool {
        index == 0 || index + 1 == count
    }

    /// Anchor slots keep their column on respawn.
    pub fn is_anchor(&self, index: usize) -> bool {
        Self::is_anchor_index(index, self.slots.len())
    }

    /// Fresh layout for a new round: staggered rows, nobody served yet.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        let count = self.slots.len();
        if count == 0 {
            return;
        }
        let spacing = SCENE_HEIGHT / count as i32;
        for index in 0..count {
            let x = if Self::is_anchor_index(index, count) {
                anchor_x(index)
            } else {
                rng.gen_range(INTERIOR_X_MIN..=INTERIOR_X_MAX)
            };
            self.slots[index] = Target {
                x,
                y: index as i32 * spacing - rng.gen_range(0..=RESHUFFLE_JITTER),
                satisfied: false,
                sprite: random_sprite(rng),
                surface: random_surface(rng),
            };
        }
    }

    /// Move every target one row down the beach.
    pub fn scroll(&mut self) {
        for target in &mut self.slots {
            target.y += 1;
        }
    }

    /// Send a target that left the bottom edge back above the top edge.
    /// Returns true if the slot was respawned.
    pub fn respawn_if_offscreen<R: Rng>(&mut self, index: usize, rng: &mut R) -> bool {
        let anchor = self.is_anchor(index);
        let Some(target) = self.slots.get_mut(index) else {
            return false;
        };
        if target.y <= SCENE_HEIGHT {
            return false;
        }

        target.y = -rng.gen_range(RESPAWN_Y_MIN..=RESPAWN_Y_MAX);
        target.sprite = random_sprite(rng);
        target.surface = random_surface(rng);
        target.satisfied = rng.gen_ratio(1, PRESATISFIED_ONE_IN);
        if !anchor {
            target.x = rng.gen_range(INTERIOR_X_MIN..=INTERIOR_X_MAX);
        }
        log::debug!(
            "slot {} respawned at ({}, {}), satisfied={}",
            index,
            target.x,
            target.y,
            target.satisfied
        );
        true
    }

    /// Run the respawn check on every slot. Returns how many respawned.
    pub fn respawn_offscreen<R: Rng>(&mut self, rng: &mut R) -> usize {
        (0..self.slots.len())
            .filter(|&index| self.respawn_if_offscreen(index, rng))
            .count()
    }

    /// Find the first unsatisfied target under the landing point and mark
    /// it satisfied.
    pub fn hit_test(&mut self, x: i32, y: i32) -> Option<usize> {
        let index = self
            .slots
            .iter()
            .position(|target| !target.satisfied && target.contains(x, y))?;
        self.slots[index].satisfied = true;
        Some(index)
    }

    /// Targets still waiting for corn, with their slot index.
    pub fn unsatisfied(&self) -> impl Iterator<Item = (usize, &Target)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, target)| !target.satisfied)
    }
}

fn anchor_x(index: usize) -> i32 {
    if index == 0 {
        ANCHOR_X[0]
    } else {
        ANCHOR_X[1]
    }
}

fn random_sprite<R: Rng>(rng: &mut R) -> SpriteVariant {
    SpriteVariant::ALL[rng.gen_range(0..SpriteVariant::ALL.len())]
}

fn random_surface<R: Rng>(rng: &mut R) -> SurfaceVariant {
    SurfaceVariant::ALL[rng.gen_range(0..SurfaceVariant::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn target_at(x: i32, y: i32) -> Target {
        Target {
            x,
            y,
            satisfied: false,
            sprite: SpriteVariant::Boy,
            surface: SurfaceVariant::Towel1,
        }
    }

    #[test]
    fn test_new_pool_sizes() {
        assert_eq!(TargetPool::new(Variant::Simple).len(), 5);
        assert_eq!(TargetPool::new(Variant::Advanced).len(), 6);
    }

    #[test]
    fn test_new_pool_anchors_pinned() {
        let pool = TargetPool::new(Variant::Advanced);
        assert_eq!(pool.slots[0].x, ANCHOR_X[0]);
        assert_eq!(pool.slots[5].x, ANCHOR_X[1]);
        for target in &pool.slots[1..5] {
            assert!((INTERIOR_X_MIN..=INTERIOR_X_MAX).contains(&target.x));
        }
    }

    #[test]
    fn test_is_anchor() {
        let pool = TargetPool::new(Variant::Simple);
        assert!(pool.is_anchor(0));
        assert!(pool.is_anchor(4));
        assert!(!pool.is_anchor(2));
    }

    #[test]
    fn test_reshuffle_keeps_anchors_and_clears_satisfied() {
        let mut pool = TargetPool::new(Variant::Advanced);
        for target in &mut pool.slots {
            target.satisfied = true;
            target.x = 0;
        }
        let mut rng = create_test_rng();
        pool.reshuffle(&mut rng);

        assert_eq!(pool.slots[0].x, ANCHOR_X[0]);
        assert_eq!(pool.slots[5].x, ANCHOR_X[1]);
        for (index, target) in pool.slots.iter().enumerate() {
            assert!(!target.satisfied);
            assert!(target.y <= index as i32 * (SCENE_HEIGHT / 6));
            assert!(target.y >= index as i32 * (SCENE_HEIGHT / 6) - RESHUFFLE_JITTER);
            if !pool.is_anchor(index) {
                assert!((INTERIOR_X_MIN..=INTERIOR_X_MAX).contains(&target.x));
            }
        }
    }

    #[test]
    fn test_scroll_moves_all_down() {
        let mut pool = TargetPool::new(Variant::Simple);
        let before: Vec<i32> = pool.iter().map(|t| t.y).collect();
        pool.scroll();
        for (target, y) in pool.iter().zip(before) {
            assert_eq!(target.y, y + 1);
        }
    }

    #[test]
    fn test_respawn_only_past_bottom() {
        let mut pool = TargetPool::new(Variant::Advanced);
        let mut rng = create_test_rng();
        pool.slots[2].y = SCENE_HEIGHT;
        assert!(!pool.respawn_if_offscreen(2, &mut rng));
        assert_eq!(pool.slots[2].y, SCENE_HEIGHT);

        pool.slots[2].y = SCENE_HEIGHT + 1;
        assert!(pool.respawn_if_offscreen(2, &mut rng));
        assert!((-RESPAWN_Y_MAX..=-RESPAWN_Y_MIN).contains(&pool.slots[2].y));
        assert!((INTERIOR_X_MIN..=INTERIOR_X_MAX).contains(&pool.slots[2].x));
    }

    #[test]
    fn test_respawn_anchor_keeps_column() {
        let mut pool = TargetPool::new(Variant::Advanced);
        let mut rng = create_test_rng();
        for _ in 0..50 {
            pool.slots[0].y = SCENE_HEIGHT + 1;
            pool.slots[5].y = SCENE_HEIGHT + 1;
            assert_eq!(pool.respawn_offscreen(&mut rng), 2);
            assert_eq!(pool.slots[0].x, ANCHOR_X[0]);
            assert_eq!(pool.slots[5].x, ANCHOR_X[1]);
        }
    }

    #[test]
    fn test_respawn_presatisfied_is_rare() {
        let mut pool = TargetPool::new(Variant::Advanced);
        let mut rng = create_test_rng();
        let mut satisfied = 0;
        let trials = 2000;
        for _ in 0..trials {
            pool.slots[1].y = SCENE_HEIGHT + 5;
            pool.slots[1].satisfied = true;
            pool.respawn_if_offscreen(1, &mut rng);
            if pool.slots[1].satisfied {
                satisfied += 1;
            }
        }
        // Expect ~200 of 2000
        assert!(satisfied > 100 && satisfied < 320, "satisfied = {}", satisfied);
    }

    #[test]
    fn test_respawn_out_of_range_index() {
        let mut pool = TargetPool::new(Variant::Simple);
        let mut rng = create_test_rng();
        assert!(!pool.respawn_if_offscreen(99, &mut rng));
    }

    #[test]
    fn test_hit_test_picks_lowest_slot() {
        let mut pool = TargetPool {
            slots: vec![target_at(0, 0), target_at(50, 40), target_at(45, 35), target_at(50, 40)],
        };
        assert_eq!(pool.clone().hit_test(52, 42), Some(1));

        // Deterministic for identical snapshots
        let snapshot = pool.clone();
        for _ in 0..5 {
            assert_eq!(snapshot.clone().hit_test(52, 42), Some(1));
        }

        // Each hit consumes one slot, in index order
        assert_eq!(pool.hit_test(52, 42), Some(1));
        assert_eq!(pool.hit_test(52, 42), Some(2));
        assert_eq!(pool.hit_test(52, 42), Some(3));
        assert_eq!(pool.hit_test(52, 42), None);
        assert!(pool.slots[1].satisfied && pool.slots[2].satisfied && pool.slots[3].satisfied);
        assert!(!pool.slots[0].satisfied);
    }

    #[test]
    fn test_hit_test_all_satisfied_always_misses() {
        let mut pool = TargetPool::new(Variant::Advanced);
        for target in &mut pool.slots {
            target.satisfied = true;
        }
        for x in (-10..200).step_by(7) {
            for y in (-30..100).step_by(5) {
                assert_eq!(pool.hit_test(x, y), None);
            }
        }
    }

    #[test]
    fn test_unsatisfied_iter() {
        let mut pool = TargetPool::new(Variant::Simple);
        pool.slots[1].satisfied = true;
        pool.slots[3].satisfied = true;
        let indices: Vec<usize> = pool.unsatisfied().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 2, 4]);
    }
}
