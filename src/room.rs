//! The seating grid.
//!
//! Rows and seats are 1-indexed at this API, matching what the user types.

use crate::error::SelectionError;
use crate::types::{RoomConfig, Seat};

/// An R×S grid of seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    config: RoomConfig,
    rows: Vec<Vec<Seat>>,
}

impl Room {
    /// Build a room with every seat available.
    pub fn new(config: RoomConfig) -> Self {
        Room {
            config,
            rows: vec![vec![Seat::Available; config.seats]; config.rows],
        }
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Rows in order, front to back.
    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Look up a seat. Returns None when out of bounds.
    pub fn seat(&self, row: usize, seat: usize) -> Option<Seat> {
        let r = row.checked_sub(1)?;
        let s = seat.checked_sub(1)?;
        self.rows.get(r)?.get(s).copied()
    }

    /// Check a selection without changing anything.
    ///
    /// Row is checked before seat, and both before occupancy.
    pub fn check(&self, row: usize, seat: usize) -> Result<(), SelectionError> {
        if row == 0 || row > self.config.rows {
            return Err(SelectionError::InvalidRow);
        }
        if seat == 0 || seat > self.config.seats {
            return Err(SelectionError::InvalidSeat);
        }
        match self.rows[row - 1][seat - 1] {
            Seat::Available => Ok(()),
            Seat::Sold => Err(SelectionError::AlreadyPurchased),
        }
    }

    /// Mark a seat sold. Fails without side effects if the seat
    /// is out of bounds or already sold.
    pub fn sell(&mut self, row: usize, seat: usize) -> Result<(), SelectionError> {
        self.check(row, seat)?;
        self.rows[row - 1][seat - 1] = Seat::Sold;
        Ok(())
    }

    /// Number of sold seats.
    pub fn sold_count(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .filter(|s| **s == Seat::Sold)
            .count() as u64
    }
}

// ============================================================================
// TESTS
// ============================================================================
