//! Frame scheduling
//!
//! Two periodic streams drive a session: the per-frame simulation tick and a
//! 1 Hz countdown tick. Both are derived here from elapsed wall time, so the
//! session owns its scheduling and cancels it deterministically on exit -- no
//! ambient timers. Tick handlers still guard on session status; a stopped
//! clock merely guarantees no further ticks are produced.

use crate::consts::{FRAME_DT, MAX_SUBSTEPS};

/// Ticks produced by one `advance` call. Frame ticks are dispatched before
/// second ticks within a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickBatch {
    pub frames: u32,
    pub seconds: u32,
}

/// Fixed-timestep accumulator with a whole-second divider
#[derive(Debug, Clone)]
pub struct FrameClock {
    dt: f32,
    frame_acc: f32,
    second_acc: f32,
    running: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_dt(FRAME_DT)
    }

    pub fn with_dt(dt: f32) -> Self {
        Self {
            dt: dt.max(1e-6),
            frame_acc: 0.0,
            second_acc: 0.0,
            running: false,
        }
    }

    /// Begin scheduling. Accumulators start empty so a long setup pause
    /// cannot burst ticks into the first frame.
    pub fn start(&mut self) {
        self.frame_acc = 0.0;
        self.second_acc = 0.0;
        self.running = true;
    }

    /// Unconditional and idempotent; a stopped clock yields no ticks
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Convert elapsed wall-clock seconds into whole ticks. Frame ticks are
    /// capped per call and the excess dropped, so a long stall cannot spiral.
    pub fn advance(&mut self, elapsed: f32) -> TickBatch {
        if !self.running || elapsed <= 0.0 {
            return TickBatch::default();
        }

        self.frame_acc += elapsed;
        let mut frames = (self.frame_acc / self.dt) as u32;
        if frames > MAX_SUBSTEPS {
            frames = MAX_SUBSTEPS;
            self.frame_acc = 0.0;
        } else {
            self.frame_acc -= frames as f32 * self.dt;
        }

        self.second_acc += elapsed;
        let seconds = self.second_acc as u32;
        self.second_acc -= seconds as f32;

        TickBatch { frames, seconds }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
