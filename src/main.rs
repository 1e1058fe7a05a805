//! Arcade hub entry point
//!
//! Headless demo: drives one flyer session and one catcher session through
//! the frame clock with a trivial built-in pilot, then reports final scores
//! and persisted bests. A real front end would feed `TickInput` from pointer
//! events instead.

use glam::Vec2;
use rand::RngCore;

use arcade_hub::Settings;
use arcade_hub::clock::FrameClock;
use arcade_hub::consts::{FIELD_HEIGHT, FIELD_WIDTH, FRAME_DT, ITEM_WIDTH};
use arcade_hub::persistence::Store;
use arcade_hub::sim::catcher::CatcherState;
use arcade_hub::sim::flyer::FlyerState;
use arcade_hub::sim::state::{EntityKind, GameId, TickInput};

/// Safety cap on demo sessions (ticks)
const MAX_TICKS: u32 = 60 * 300;

fn main() {
    env_logger::init();
    log::info!("arcade-hub demo starting");

    let store = Store::new("data");
    let mut settings = store.load_settings();
    let field = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT);
    settings.sanitize(field);

    let mut best = store.load_best();
    let seed = rand::rng().next_u64();
    log::info!("session seed: {seed}");

    let flyer_score = run_flyer(&settings, field, seed);
    if best.record(GameId::Flyer, flyer_score) {
        log::info!("flyer: new best {flyer_score}");
    }

    let catcher_score = run_catcher(&settings, field, seed);
    if best.record(GameId::Catcher, catcher_score) {
        log::info!("catcher: new best {catcher_score}");
    }

    store.save_best(&best);

    println!("flyer:   score {flyer_score:>4}  best {}", best.best(GameId::Flyer));
    println!("catcher: score {catcher_score:>4}  best {}", best.best(GameId::Catcher));
}

/// Fly until the pilot crashes or the cap runs out
fn run_flyer(settings: &Settings, field: Vec2, seed: u64) -> u32 {
    let mut state = FlyerState::new(&settings.flyer, field, seed);
    let mut clock = FrameClock::new();

    state.tick(&TickInput {
        primary: true,
        ..Default::default()
    });
    clock.start();

    let mut ticks = 0;
    while state.status.is_playing() && ticks < MAX_TICKS {
        let batch = clock.advance(FRAME_DT);
        for _ in 0..batch.frames {
            let input = TickInput {
                primary: flyer_pilot(&state),
                ..Default::default()
            };
            state.tick(&input);
            ticks += 1;
            if !state.status.is_playing() {
                break;
            }
        }
    }
    clock.stop();
    state.score.points()
}

/// Flap whenever the body is falling below the next gap's center
fn flyer_pilot(state: &FlyerState) -> bool {
    let target = state
        .obstacles
        .iter()
        .find(|obs| !obs.passed)
        .map(|obs| match obs.kind {
            EntityKind::PassThrough { gap_y } => gap_y + state.gap / 2.0,
            _ => state.field.y / 2.0,
        })
        .unwrap_or(state.field.y / 2.0);

    state.body.vel > 0.0 && state.body.y + state.body.size > target
}

/// Chase collectibles until the countdown or the lives run out
fn run_catcher(settings: &Settings, field: Vec2, seed: u64) -> u32 {
    let mut state = CatcherState::new(&settings.catcher, field, seed);
    let mut clock = FrameClock::new();

    state.tick(&TickInput {
        primary: true,
        ..Default::default()
    });
    clock.start();

    let mut ticks = 0;
    while state.status.is_playing() && ticks < MAX_TICKS {
        let batch = clock.advance(FRAME_DT);
        for _ in 0..batch.frames {
            let input = TickInput {
                pointer_x: catcher_pilot(&state),
                ..Default::default()
            };
            state.tick(&input);
            ticks += 1;
            if !state.status.is_playing() {
                break;
            }
        }
        for _ in 0..batch.seconds {
            state.second_tick();
        }
    }
    clock.stop();
    state.score.points()
}

/// Track the lowest collectible still above the catch band
fn catcher_pilot(state: &CatcherState) -> Option<f32> {
    state
        .items
        .iter()
        .filter(|item| item.kind == EntityKind::Collectible)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|item| item.pos.x + ITEM_WIDTH / 2.0)
}
