//! Deterministic simulation module
//!
//! All per-frame gameplay logic lives here. This module must be pure and
//! deterministic:
//! - One Euler step per frame tick
//! - Seeded RNG only
//! - Stable entity order (oldest first)
//! - No rendering or platform dependencies

pub mod catcher;
pub mod collision;
pub mod flyer;
pub mod spawn;
pub mod state;

pub use catcher::CatcherState;
pub use collision::Rect;
pub use flyer::FlyerState;
pub use spawn::{Spawner, gap_for_score};
pub use state::{Body, Entity, EntityKind, GameId, Scoreboard, SessionStatus, TickInput};
