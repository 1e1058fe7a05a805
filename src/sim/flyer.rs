//! Obstacle-course flyer
//!
//! One gravity-bound body threading the gaps of a scrolling obstacle field.
//! The body dies on the field boundary or on pipe contact; every obstacle
//! safely cleared scores a point and tightens the gap for the ones that
//! follow.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn::{self, Spawner};
use super::state::{Body, Entity, EntityKind, Scoreboard, SessionStatus, TickInput};
use crate::consts::FLYER_X;
use crate::settings::FlyerSettings;

/// Complete state of one flyer session
#[derive(Debug, Clone)]
pub struct FlyerState {
    pub status: SessionStatus,
    pub score: Scoreboard,
    pub body: Body,
    /// Live obstacles, oldest first; the front is always the next to leave
    pub obstacles: VecDeque<Entity>,
    /// Current gap height, recomputed from score after every pass
    pub gap: f32,
    pub field: Vec2,
    cfg: FlyerSettings,
    spawner: Spawner,
    rng: Pcg32,
}

impl FlyerState {
    /// Create a session in Idle, waiting for the first primary action
    pub fn new(cfg: &FlyerSettings, field: Vec2, seed: u64) -> Self {
        let mut cfg = cfg.clone();
        cfg.sanitize(field);
        Self {
            status: SessionStatus::Idle,
            score: Scoreboard::default(),
            body: Body::new(field.y / 2.0, cfg.body_size),
            obstacles: VecDeque::new(),
            gap: cfg.obstacle_gap,
            field,
            spawner: Spawner::new(cfg.spawn_interval),
            rng: Pcg32::seed_from_u64(seed),
            cfg,
        }
    }

    /// Start a fresh run; retry from any terminal state
    pub fn reset(&mut self) {
        self.body = Body::new(self.field.y / 2.0, self.cfg.body_size);
        self.obstacles.clear();
        self.spawner.reset();
        self.score = Scoreboard::default();
        self.gap = self.cfg.obstacle_gap;
        self.status = SessionStatus::Playing;
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

        if input.primary {
            self.body.impulse(self.cfg.impulse);
        }

        self.body.integrate(self.cfg.gravity);

        // Boundary check runs before any entity handling
        if self.body.out_of_bounds(self.field.y) {
            self.status.finish(SessionStatus::GameOver);
            log::info!(
                "flyer: left the field at y={:.1}, final score {}",
                self.body.y,
                self.score.points()
            );
            return;
        }

        if self.spawner.tick() {
            let gap_y = spawn::gap_top(&mut self.rng, self.field.y, self.gap);
            self.obstacles
                .push_back(Entity::obstacle(self.field.x, gap_y, self.cfg.obstacle_speed));
        }

        for obs in &mut self.obstacles {
            obs.pos.x -= obs.speed;
        }

        // The oldest obstacle is the only one that can be fully off screen
        if let Some(front) = self.obstacles.front() {
            if front.pos.x + self.cfg.obstacle_width < 0.0 {
                self.obstacles.pop_front();
            }
        }

        self.resolve_collisions();
    }

    /// Apply the collision rules in spawn order. The first terminal condition
    /// ends the tick; no score effect from a later entity lands after it.
    fn resolve_collisions(&mut self) {
        let body_rect = Rect::new(FLYER_X, self.body.y, self.body.size, self.body.size);

        for obs in &mut self.obstacles {
            let EntityKind::PassThrough { gap_y } = obs.kind else {
                continue;
            };

            let top_pipe = Rect::new(obs.pos.x, 0.0, self.cfg.obstacle_width, gap_y);
            let bottom_y = gap_y + self.gap;
            let bottom_pipe = Rect::new(
                obs.pos.x,
                bottom_y,
                self.cfg.obstacle_width,
                self.field.y - bottom_y,
            );

            if body_rect.overlaps(&top_pipe) || body_rect.overlaps(&bottom_pipe) {
                self.status.finish(SessionStatus::GameOver);
                log::info!(
                    "flyer: hit an obstacle at x={:.1}, final score {}",
                    obs.pos.x,
                    self.score.points()
                );
                return;
            }

            // Fully cleared: leading edge past the obstacle's trailing edge
            if !obs.passed && body_rect.left() > obs.pos.x + self.cfg.obstacle_width {
                obs.passed = true;
                self.score.award(1);
                self.gap = spawn::gap_for_score(self.cfg.obstacle_gap, self.score.points());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

    fn test_state(seed: u64) -> FlyerState {
        FlyerState::new(
            &FlyerSettings::default(),
            Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            seed,
        )
    }

    fn playing_state(seed: u64) -> FlyerState {
        let mut state = test_state(seed);
        state.reset();
        state
    }

    #[test]
    fn test_idle_starts_on_primary() {
        let mut state = test_state(1);
        state.tick(&TickInput::default());
        assert_eq!(state.status, SessionStatus::Idle);

        state.tick(&TickInput {
            primary: true,
            ..Default::default()
        });
        assert_eq!(state.status, SessionStatus::Playing);
    }

    #[test]
    fn test_gravity_pulls_into_the_floor() {
        let mut state = playing_state(1);
        let input = TickInput::default();
        for _ in 0..10_000 {
            state.tick(&input);
            if state.status.is_terminal() {
                break;
            }
        }
        assert_eq!(state.status, SessionStatus::GameOver);
        assert_eq!(state.score.points(), 0);
    }

    #[test]
    fn test_spawn_cadence() {
        // Zero gravity keeps the body parked so only the spawner acts
        let cfg = FlyerSettings {
            gravity: 0.0,
            ..Default::default()
        };
        let mut state = FlyerState::new(&cfg, Vec2::new(FIELD_WIDTH, FIELD_HEIGHT), 2);
        state.reset();

        let coast = TickInput::default();
        for _ in 0..180 {
            state.tick(&coast);
        }
        assert!(state.obstacles.is_empty());
        state.tick(&coast);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_no_premature_pass() {
        let mut state = playing_state(3);
        // Obstacle with its trailing edge exactly at the body's leading edge
        state
            .obstacles
            .push_back(Entity::obstacle(FLYER_X - 60.0, 300.0, 0.0));
        state.body.y = 350.0; // inside the gap, no pipe contact

        state.resolve_collisions();
        assert!(!state.obstacles[0].passed);
        assert_eq!(state.score.points(), 0);
    }

    #[test]
    fn test_pass_scores_once_and_shrinks_gap() {
        let mut state = playing_state(4);
        state.score.award(9);
        let base_gap = state.gap;
        state
            .obstacles
            .push_back(Entity::obstacle(FLYER_X - 61.0, 300.0, 0.0));
        state.body.y = 350.0;

        state.resolve_collisions();
        assert!(state.obstacles[0].passed);
        assert_eq!(state.score.points(), 10);
        assert_eq!(state.gap, base_gap - 10.0);

        // A second resolution pass must not score the same obstacle again
        state.resolve_collisions();
        assert_eq!(state.score.points(), 10);
    }

    #[test]
    fn test_pipe_contact_ends_the_session() {
        let mut state = playing_state(5);
        state
            .obstacles
            .push_back(Entity::obstacle(FLYER_X, 300.0, 0.0));
        state.body.y = 100.0; // inside the top pipe's band

        state.resolve_collisions();
        assert_eq!(state.status, SessionStatus::GameOver);
    }

    #[test]
    fn test_terminal_condition_short_circuits_scoring() {
        let mut state = playing_state(6);
        // Oldest entity is a lethal pipe contact, a younger one would score
        state
            .obstacles
            .push_back(Entity::obstacle(FLYER_X, 300.0, 0.0));
        state
            .obstacles
            .push_back(Entity::obstacle(FLYER_X - 100.0, 300.0, 0.0));
        state.body.y = 100.0;

        state.resolve_collisions();
        assert_eq!(state.status, SessionStatus::GameOver);
        assert_eq!(state.score.points(), 0);
        assert!(!state.obstacles[1].passed);
    }

    #[test]
    fn test_oldest_obstacle_evicted_off_screen() {
        let mut state = playing_state(7);
        // One tick from fully off screen at width 60
        state
            .obstacles
            .push_back(Entity::obstacle(-58.0, 300.0, 2.5));
        state.body.y = 350.0;

        let flap = TickInput {
            primary: true,
            ..Default::default()
        };
        state.tick(&flap);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_determinism_under_fixed_seed() {
        let mut a = playing_state(99);
        let mut b = playing_state(99);
        let flap = TickInput {
            primary: true,
            ..Default::default()
        };
        let coast = TickInput::default();
        for i in 0..600 {
            let input = if i % 20 < 3 { &flap } else { &coast };
            a.tick(input);
            b.tick(input);
        }
        assert_eq!(a.status, b.status);
        assert_eq!(a.score.points(), b.score.points());
        assert_eq!(a.body, b.body);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn test_retry_resets_to_a_fresh_run() {
        let mut state = playing_state(8);
        state.score.award(5);
        state.status.finish(SessionStatus::GameOver);

        state.reset();
        assert_eq!(state.status, SessionStatus::Playing);
        assert_eq!(state.score.points(), 0);
        assert!(state.obstacles.is_empty());
    }
}
