//! Shared session state and core simulation types
//!
//! Everything the render collaborator reads once per tick lives here as plain
//! public state. Nothing in this module draws or schedules.

use glam::Vec2;

/// Which game a session belongs to; keys persisted best scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GameId {
    Flyer,
    Catcher,
    ConnectFour,
    Memory,
}

impl GameId {
    /// Storage key for the per-game best score
    pub fn key(self) -> &'static str {
        match self {
            GameId::Flyer => "flyer_best",
            GameId::Catcher => "catcher_best",
            GameId::ConnectFour => "connect_four_best",
            GameId::Memory => "memory_best",
        }
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Awaiting the first start input
    Idle,
    /// Scheduler active, state mutating every tick
    Playing,
    /// Run ended without a win (crash, life exhaustion, countdown, draw)
    GameOver,
    /// Run ended with an explicit win
    Victory,
}

impl SessionStatus {
    pub fn is_playing(self) -> bool {
        self == SessionStatus::Playing
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::GameOver | SessionStatus::Victory)
    }

    /// Enter a terminal status. Re-entry is a no-op, so a countdown expiry and
    /// a collision landing in the same instant cannot double-fire.
    pub fn finish(&mut self, outcome: SessionStatus) {
        debug_assert!(outcome.is_terminal());
        if !self.is_terminal() {
            *self = outcome;
        }
    }
}

/// Score bookkeeping. `award` and `penalize` are the only mutation paths;
/// penalties saturate at zero, so the total is never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    points: u32,
}

impl Scoreboard {
    pub fn points(self) -> u32 {
        self.points
    }

    pub fn award(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub fn penalize(&mut self, points: u32) {
        self.points = self.points.saturating_sub(points);
    }
}

/// The single player-controlled moving object in a physics game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top edge in field coordinates (y grows downward)
    pub y: f32,
    /// Vertical velocity, units per tick
    pub vel: f32,
    /// Side length of the bounding square
    pub size: f32,
}

impl Body {
    pub fn new(y: f32, size: f32) -> Self {
        Self { y, vel: 0.0, size }
    }

    /// One Euler step: gravity accumulates into velocity, velocity into
    /// position
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.y += self.vel;
    }

    /// Discrete jump: replaces accumulated velocity outright
    pub fn impulse(&mut self, strength: f32) {
        self.vel = strength;
    }

    /// Outside the vertical play field; terminal for the session
    pub fn out_of_bounds(&self, extent: f32) -> bool {
        self.y < 0.0 || self.y + self.size > extent
    }
}

/// What a spawned entity does on contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    /// Grants score when safely traversed; carries the top of its gap window
    PassThrough { gap_y: f32 },
    /// Ends the session (flyer) or costs score and a life (catcher)
    Hazard,
    /// Grants score when caught
    Collectible,
}

/// A spawned obstacle or falling item moving through the play field
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    pub kind: EntityKind,
    /// Units per tick (shared scroll speed for obstacles, per-item for drops)
    pub speed: f32,
    /// Pass-through already scored; stays on screen until evicted
    pub passed: bool,
}

impl Entity {
    /// A gap obstacle entering from the right edge
    pub fn obstacle(x: f32, gap_y: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            kind: EntityKind::PassThrough { gap_y },
            speed,
            passed: false,
        }
    }

    /// A falling item entering above the field
    pub fn item(x: f32, y: f32, kind: EntityKind, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            kind,
            speed,
            passed: false,
        }
    }
}

/// Input commands for a single tick
///
/// The whole input vocabulary: a pointer position for basket-style control
/// and one discrete action for jump/flap and for starting from Idle.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer x in field coordinates
    pub pointer_x: Option<f32>,
    /// Discrete impulse
    pub primary: bool,
}
