//! Connect Four board: gravity-drop placement and win detection
//!
//! Turn-based and independent of the per-frame sim; invoked synchronously
//! from discrete player actions. Win detection counts outward from the placed
//! cell only, so a move costs the same on any board size.

use crate::settings::GridSettings;
use crate::sim::state::SessionStatus;

/// Contiguous discs needed for a winning line
pub const WIN_LENGTH: usize = 4;

/// A player's disc color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disc {
    Red,
    Green,
}

impl Disc {
    pub fn other(self) -> Self {
        match self {
            Disc::Red => Disc::Green,
            Disc::Green => Disc::Red,
        }
    }
}

/// The four line axes; each is walked in both directions from the placed cell
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cells, row 0 at the top
    cells: Vec<Option<Disc>>,
    pub current: Disc,
    pub status: SessionStatus,
    pub winner: Option<Disc>,
    /// Most recent placement, for the render collaborator's drop animation
    pub last_move: Option<(usize, usize)>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            current: Disc::Red,
            status: SessionStatus::Playing,
            winner: None,
            last_move: None,
        }
    }

    /// Build a board from the configured grid dimensions, clamped
    pub fn from_settings(cfg: &GridSettings) -> Self {
        let mut cfg = *cfg;
        cfg.sanitize();
        Self::new(cfg.rows, cfg.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Disc> {
        self.cells[row * self.cols + col]
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Clear the board for a rematch
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.current = Disc::Red;
        self.status = SessionStatus::Playing;
        self.winner = None;
        self.last_move = None;
    }

    /// Drop the current player's disc into `col`.
    ///
    /// Silently ignored when the game is over or the column is full; returns
    /// the landing cell otherwise. A completed line freezes the board with
    /// `winner` set; a full board without one ends in a draw.
    pub fn place(&mut self, col: usize) -> Option<(usize, usize)> {
        if self.status != SessionStatus::Playing || col >= self.cols {
            return None;
        }

        // Lowest empty row in the column (gravity drop)
        let row = (0..self.rows).rev().find(|&r| self.cell(r, col).is_none())?;
        self.cells[row * self.cols + col] = Some(self.current);
        self.last_move = Some((row, col));

        if self.wins_at(row, col, self.current) {
            self.winner = Some(self.current);
            self.status.finish(SessionStatus::Victory);
            log::info!("board: {:?} wins at ({row}, {col})", self.current);
        } else if self.is_full() {
            self.status.finish(SessionStatus::GameOver);
            log::info!("board: draw");
        } else {
            self.current = self.current.other();
        }
        Some((row, col))
    }

    fn wins_at(&self, row: usize, col: usize, player: Disc) -> bool {
        AXES.iter().any(|&(dr, dc)| {
            let line = 1 + self.run(row, col, dr, dc, player) + self.run(row, col, -dr, -dc, player);
            line >= WIN_LENGTH
        })
    }

    /// Length of the contiguous same-player run starting one step from
    /// (row, col) along (dr, dc)
    fn run(&self, row: usize, col: usize, dr: isize, dc: isize, player: Disc) -> usize {
        let mut n = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && r < self.rows as isize
            && c >= 0
            && c < self.cols as isize
            && self.cell(r as usize, c as usize) == Some(player)
        {
            n += 1;
            r += dr;
            c += dc;
        }
        n
    }
}
