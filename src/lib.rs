//! Arcade Hub - headless simulation core for a hub of small arcade games
//!
//! Core modules:
//! - `sim`: Deterministic per-frame simulation (physics, collisions, spawning)
//! - `board`: Connect Four placement and win detection
//! - `memory`: Memory Match deck and flip resolution
//! - `clock`: Fixed-timestep frame scheduler with a 1 Hz countdown divider
//! - `settings`: Per-game numeric tunables
//! - `persistence`: Settings and best-score storage

pub mod board;
pub mod clock;
pub mod highscores;
pub mod memory;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use board::Board;
pub use highscores::BestScores;
pub use memory::MemoryGame;
pub use settings::Settings;
pub use sim::state::{GameId, SessionStatus, TickInput};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display refresh)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Maximum frame ticks per advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Reference play field; the render collaborator reports the real extent
    pub const FIELD_WIDTH: f32 = 1200.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// The flyer body holds a fixed horizontal position while the field scrolls
    pub const FLYER_X: f32 = 50.0;

    /// Falling item bounding box
    pub const ITEM_WIDTH: f32 = 45.0;
    pub const ITEM_HEIGHT: f32 = 30.0;
    /// Items spawn above the field so the sprite enters cleanly
    pub const ITEM_SPAWN_Y: f32 = -50.0;
    /// Keeps spawned items fully on screen
    pub const ITEM_SPAWN_MARGIN: f32 = 50.0;
    /// Catch band, measured up from the bottom edge of the field
    pub const CATCH_BAND_TOP: f32 = 50.0;
    pub const CATCH_BAND_BOTTOM: f32 = 10.0;

    /// Catcher score deltas
    pub const COLLECT_POINTS: u32 = 10;
    pub const HAZARD_PENALTY: u32 = 50;
    /// Lives per catcher session
    pub const CATCHER_LIVES: u8 = 3;
}
