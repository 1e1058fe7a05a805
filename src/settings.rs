//! Per-game tunables
//!
//! Owned by the settings UI, consumed by the core: plain numeric ranges read
//! once at session start. Partial files merge with the defaults, and
//! degenerate values are clamped rather than rejected.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Connect Four grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { rows: 6, cols: 7 }
    }
}

impl GridSettings {
    /// A line needs four cells and the settings form caps at 12 per side
    pub fn sanitize(&mut self) {
        self.rows = self.rows.clamp(4, 12);
        self.cols = self.cols.clamp(4, 12);
    }
}

/// Flyer tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyerSettings {
    pub body_size: f32,
    /// Per-tick velocity gain
    pub gravity: f32,
    /// Velocity set by a jump; stored negative (upward)
    pub impulse: f32,
    pub obstacle_width: f32,
    pub obstacle_gap: f32,
    /// Scroll speed, units per tick
    pub obstacle_speed: f32,
    /// Ticks between spawns
    pub spawn_interval: u32,
}

impl Default for FlyerSettings {
    fn default() -> Self {
        Self {
            body_size: 20.0,
            gravity: 0.3,
            impulse: -7.5,
            obstacle_width: 60.0,
            obstacle_gap: 220.0,
            obstacle_speed: 2.5,
            spawn_interval: 180,
        }
    }
}

impl FlyerSettings {
    pub fn sanitize(&mut self, field: Vec2) {
        self.body_size = self.body_size.clamp(1.0, field.y / 2.0);
        self.gravity = self.gravity.max(0.0);
        // A jump always pushes against gravity
        self.impulse = -self.impulse.abs();
        self.obstacle_width = self.obstacle_width.clamp(1.0, field.x);
        self.obstacle_gap = self.obstacle_gap.clamp(1.0, field.y);
        self.obstacle_speed = self.obstacle_speed.max(0.0);
        self.spawn_interval = self.spawn_interval.max(1);
    }
}

/// Catcher tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatcherSettings {
    pub basket_width: f32,
    /// Drawn height; the catch band itself is fixed
    pub basket_height: f32,
    /// Base fall speed; each item adds up to two units
    pub fall_speed: f32,
    /// Session time limit in seconds
    pub max_time: u32,
    /// Ticks between spawns
    pub spawn_interval: u32,
}

impl Default for CatcherSettings {
    fn default() -> Self {
        Self {
            basket_width: 80.0,
            basket_height: 20.0,
            fall_speed: 3.0,
            max_time: 60,
            spawn_interval: 40,
        }
    }
}

impl CatcherSettings {
    pub fn sanitize(&mut self, field: Vec2) {
        self.basket_width = self.basket_width.clamp(1.0, field.x);
        self.basket_height = self.basket_height.clamp(1.0, field.y);
        self.fall_speed = self.fall_speed.max(0.0);
        self.max_time = self.max_time.max(1);
        self.spawn_interval = self.spawn_interval.max(1);
    }
}

/// Memory Match tunables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySettings {
    pub pairs: usize,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self { pairs: 6 }
    }
}

impl MemorySettings {
    pub fn sanitize(&mut self) {
        self.pairs = self.pairs.clamp(2, 12);
    }
}

/// The whole configuration surface, written through as one object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub flyer: FlyerSettings,
    pub catcher: CatcherSettings,
    pub memory: MemorySettings,
}

impl Settings {
    /// Clamp every tunable into its documented bounds for the given field
    pub fn sanitize(&mut self, field: Vec2) {
        self.grid.sanitize();
        self.flyer.sanitize(field);
        self.catcher.sanitize(field);
        self.memory.sanitize();
    }
}
