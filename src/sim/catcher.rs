//! Falling-item catcher
//!
//! A pointer-driven basket under a rain of collectibles and hazards, played
//! against a one-minute countdown. Catches score, hazards cost points and a
//! life, and the last life ends the run.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn::{self, Spawner};
use super::state::{Entity, EntityKind, Scoreboard, SessionStatus, TickInput};
use crate::consts::{
    CATCH_BAND_BOTTOM, CATCH_BAND_TOP, CATCHER_LIVES, COLLECT_POINTS, HAZARD_PENALTY, ITEM_HEIGHT,
    ITEM_SPAWN_Y, ITEM_WIDTH,
};
use crate::settings::CatcherSettings;

/// Complete state of one catcher session
#[derive(Debug, Clone)]
pub struct CatcherState {
    pub status: SessionStatus,
    pub score: Scoreboard,
    pub lives: u8,
    /// Whole seconds remaining, driven by the 1 Hz countdown tick
    pub time_left: u32,
    /// Left edge of the basket
    pub basket_x: f32,
    /// Live items, oldest first
    pub items: VecDeque<Entity>,
    pub field: Vec2,
    cfg: CatcherSettings,
    spawner: Spawner,
    rng: Pcg32,
}

impl CatcherState {
    /// Create a session in Idle, waiting for the first primary action
    pub fn new(cfg: &CatcherSettings, field: Vec2, seed: u64) -> Self {
        let mut cfg = cfg.clone();
        cfg.sanitize(field);
        Self {
            status: SessionStatus::Idle,
            score: Scoreboard::default(),
            lives: CATCHER_LIVES,
            time_left: cfg.max_time,
            basket_x: (field.x - cfg.basket_width) / 2.0,
            items: VecDeque::new(),
            field,
            spawner: Spawner::new(cfg.spawn_interval),
            rng: Pcg32::seed_from_u64(seed),
            cfg,
        }
    }

    /// Start a fresh run; retry from any terminal state
    pub fn reset(&mut self) {
        self.score = Scoreboard::default();
        self.lives = CATCHER_LIVES;
        self.time_left = self.cfg.max_time;
        self.items.clear();
        self.spawner.reset();
        self.status = SessionStatus::Playing;
    }

    /// The basket's catch band in field coordinates
    pub fn catch_zone(&self) -> Rect {
        Rect::new(
            self.basket_x,
            self.field.y - CATCH_BAND_TOP,
            self.cfg.basket_width,
            CATCH_BAND_TOP - CATCH_BAND_BOTTOM,
        )
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &TickInput) {
        match self.status {
            SessionStatus::Idle => {
                if input.primary {
                    self.reset();
                }
                return;
            }
            SessionStatus::Playing => {}
            _ => return,
        }

        if let Some(x) = input.pointer_x {
            self.basket_x = x - self.cfg.basket_width / 2.0;
        }

        if self.spawner.tick() {
            let x = spawn::item_column(&mut self.rng, self.field.x);
            let kind = spawn::item_kind(&mut self.rng);
            let speed = spawn::fall_speed(&mut self.rng, self.cfg.fall_speed);
            self.items.push_back(Entity::item(x, ITEM_SPAWN_Y, kind, speed));
        }

        self.advance_items();
    }

    /// Move items and apply the contact rules in spawn order. The first
    /// terminal condition ends the tick with the remaining items untouched.
    fn advance_items(&mut self) {
        let zone = self.catch_zone();
        let mut i = 0;
        while i < self.items.len() {
            let item = &mut self.items[i];
            item.pos.y += item.speed;

            let rect = Rect::new(item.pos.x, item.pos.y, ITEM_WIDTH, ITEM_HEIGHT);
            if rect.overlaps(&zone) {
                match item.kind {
                    EntityKind::Collectible => {
                        self.score.award(COLLECT_POINTS);
                    }
                    EntityKind::Hazard => {
                        self.score.penalize(HAZARD_PENALTY);
                        if self.lives <= 1 {
                            self.lives = 0;
                            self.status.finish(SessionStatus::GameOver);
                            log::info!(
                                "catcher: out of lives, final score {}",
                                self.score.points()
                            );
                            return;
                        }
                        self.lives -= 1;
                    }
                    EntityKind::PassThrough { .. } => {}
                }
                self.items.remove(i);
                continue;
            }

            // Missed: fell past the bottom edge
            if item.pos.y > self.field.y {
                self.items.remove(i);
                continue;
            }

            i += 1;
        }
    }

    /// 1 Hz countdown tick; expiry ends the session
    pub fn second_tick(&mut self) {
        if !self.status.is_playing() {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.status.finish(SessionStatus::GameOver);
            log::info!("catcher: time expired, final score {}", self.score.points());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

    fn playing_state(seed: u64) -> CatcherState {
        let mut state = CatcherState::new(
            &CatcherSettings::default(),
            Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            seed,
        );
        state.reset();
        state
    }

    /// An item one fall step above the catch band at the given column
    fn item_entering_band(state: &CatcherState, x: f32, kind: EntityKind) -> Entity {
        let band_top = state.field.y - CATCH_BAND_TOP;
        Entity::item(x, band_top - ITEM_HEIGHT - 2.0, kind, 5.0)
    }

    #[test]
    fn test_pointer_moves_basket_center() {
        let mut state = playing_state(1);
        state.tick(&TickInput {
            pointer_x: Some(300.0),
            ..Default::default()
        });
        // Default basket width is 80, so the left edge sits at 260
        assert_eq!(state.basket_x, 260.0);
    }

    #[test]
    fn test_collectible_scores_and_is_consumed() {
        let mut state = playing_state(2);
        state.basket_x = 100.0;
        state
            .items
            .push_back(item_entering_band(&state, 110.0, EntityKind::Collectible));

        state.advance_items();
        assert_eq!(state.score.points(), COLLECT_POINTS);
        assert!(state.items.is_empty());
        assert_eq!(state.lives, CATCHER_LIVES);
    }

    #[test]
    fn test_hazard_costs_score_and_a_life() {
        let mut state = playing_state(3);
        state.basket_x = 100.0;
        state.score.award(80);
        state
            .items
            .push_back(item_entering_band(&state, 110.0, EntityKind::Hazard));

        state.advance_items();
        assert_eq!(state.score.points(), 30);
        assert_eq!(state.lives, CATCHER_LIVES - 1);
        assert_eq!(state.status, SessionStatus::Playing);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_hazard_on_last_life_ends_the_session() {
        // Basket at x=100 width 80, hazard spanning x in [90, 135]
        let mut state = playing_state(4);
        state.basket_x = 100.0;
        state.lives = 1;
        state.score.award(30);
        state
            .items
            .push_back(item_entering_band(&state, 90.0, EntityKind::Hazard));

        state.advance_items();
        assert_eq!(state.status, SessionStatus::GameOver);
        assert_eq!(state.lives, 0);
        // Penalty of 50 clamps at zero
        assert_eq!(state.score.points(), 0);
    }

    #[test]
    fn test_terminal_condition_short_circuits_later_items() {
        let mut state = playing_state(5);
        state.basket_x = 100.0;
        state.lives = 1;
        state
            .items
            .push_back(item_entering_band(&state, 110.0, EntityKind::Hazard));
        state
            .items
            .push_back(item_entering_band(&state, 120.0, EntityKind::Collectible));

        state.advance_items();
        assert_eq!(state.status, SessionStatus::GameOver);
        // The younger collectible never lands its points
        assert_eq!(state.score.points(), 0);
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_missed_item_is_evicted() {
        let mut state = playing_state(6);
        state.basket_x = 500.0; // far from the item column
        state
            .items
            .push_back(Entity::item(100.0, FIELD_HEIGHT - 1.0, EntityKind::Collectible, 5.0));

        state.advance_items();
        assert!(state.items.is_empty());
        assert_eq!(state.score.points(), 0);
    }

    #[test]
    fn test_countdown_expiry_ends_the_session() {
        let mut state = playing_state(7);
        state.time_left = 2;
        state.second_tick();
        assert_eq!(state.time_left, 1);
        assert_eq!(state.status, SessionStatus::Playing);

        state.second_tick();
        assert_eq!(state.time_left, 0);
        assert_eq!(state.status, SessionStatus::GameOver);

        // Expired clock re-fires harmlessly
        state.second_tick();
        assert_eq!(state.time_left, 0);
        assert_eq!(state.status, SessionStatus::GameOver);
    }

    #[test]
    fn test_spawned_items_follow_the_seeded_rng() {
        let mut a = playing_state(42);
        let mut b = playing_state(42);
        let input = TickInput::default();
        for _ in 0..300 {
            a.tick(&input);
            b.tick(&input);
        }
        assert!(!a.items.is_empty());
        assert_eq!(a.items, b.items);
    }

    #[test]
    fn test_tick_is_inert_outside_playing() {
        let mut state = playing_state(8);
        state.status.finish(SessionStatus::GameOver);
        state
            .items
            .push_back(item_entering_band(&state, 110.0, EntityKind::Collectible));

        state.tick(&TickInput::default());
        // Guard on status: nothing moved, nothing scored
        assert_eq!(state.items[0].pos.y, state.field.y - CATCH_BAND_TOP - ITEM_HEIGHT - 2.0);
        assert_eq!(state.score.points(), 0);
    }
}
