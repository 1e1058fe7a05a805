//! Procedural entity spawning and the difficulty ramp
//!
//! All randomness flows through the caller's RNG so a fixed seed replays a
//! session exactly.

use rand::Rng;

use super::state::EntityKind;
use crate::consts::{ITEM_SPAWN_MARGIN, ITEM_WIDTH};

/// Spawn countdown. Counts ticks and fires once strictly past the interval,
/// then restarts from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    timer: u32,
    interval: u32,
}

impl Spawner {
    pub fn new(interval: u32) -> Self {
        Self {
            timer: 0,
            interval: interval.max(1),
        }
    }

    /// Advance one tick; true means spawn now
    pub fn tick(&mut self) -> bool {
        self.timer += 1;
        if self.timer > self.interval {
            self.timer = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }
}

/// Pick the top of an obstacle's gap window.
///
/// A margin of `max(100, 20%)` of the field height keeps gaps away from the
/// edges; the upper bound is clamped so the window never inverts on short
/// fields.
pub fn gap_top<R: Rng + ?Sized>(rng: &mut R, field_h: f32, gap: f32) -> f32 {
    let margin = (field_h * 0.2).max(100.0);
    let min_y = margin;
    let max_y = (field_h - margin - gap).max(min_y);
    rng.random_range(min_y..=max_y)
}

/// Item column, keeping the sprite fully on screen
pub fn item_column<R: Rng + ?Sized>(rng: &mut R, field_w: f32) -> f32 {
    let max_x = (field_w - ITEM_SPAWN_MARGIN).max(ITEM_WIDTH);
    rng.random_range(0.0..max_x)
}

/// 80/20 collectible/hazard split via one uniform draw
pub fn item_kind<R: Rng + ?Sized>(rng: &mut R) -> EntityKind {
    if rng.random::<f32>() > 0.2 {
        EntityKind::Collectible
    } else {
        EntityKind::Hazard
    }
}

/// Per-item fall speed: the configured base plus up to two extra units
pub fn fall_speed<R: Rng + ?Sized>(rng: &mut R, base: f32) -> f32 {
    base + rng.random::<f32>() * 2.0
}

/// Obstacle gap as a function of cumulative score: one fixed step of
/// shrinkage per 10 points, recomputed from the base every time, floored at
/// 62.5% of the base and never below 100.
pub fn gap_for_score(base: f32, score: u32) -> f32 {
    let min_gap = (base * 0.625).max(100.0);
    let reduction = (score / 10 * 10) as f32;
    (base - reduction).max(min_gap)
}
