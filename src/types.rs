//! Domain types for cinema-room.
//!
//! Plain data shared by the pure layers (pricing, chart, report)
//! and the effects boundary (menu::run).

use serde::Serialize;

// ============================================================================
// ENUMS
// ============================================================================

/// State of a single seat in the room.
///
/// A seat only ever moves from `Available` to `Sold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seat {
    /// Free to purchase. Rendered as `S`.
    #[default]
    Available,
    /// Purchased ("booked"). Rendered as `B`.
    Sold,
}

impl Seat {
    /// Chart marker for this seat.
    pub fn marker(self) -> char {
        match self {
            Seat::Available => 'S',
            Seat::Sold => 'B',
        }
    }
}

/// Output format for the statistics action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// STRUCTS
// ============================================================================

/// Room dimensions. Immutable once the room is built.
///
/// Both dimensions are at least 1; `menu::run::ask_size` only accepts
/// positive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomConfig {
    /// Number of rows (R ≥ 1).
    pub rows: usize,
    /// Seats in each row (S ≥ 1).
    pub seats: usize,
}

impl RoomConfig {
    pub fn new(rows: usize, seats: usize) -> Self {
        Self { rows, seats }
    }

    /// Total seat count, R×S.
    pub fn total_seats(&self) -> u64 {
        self.rows as u64 * self.seats as u64
    }

    /// Number of front rows, floor(R/2).
    pub fn front_rows(&self) -> usize {
        self.rows / 2
    }
}

/// Snapshot of session statistics, as printed by menu choice 3.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Tickets sold so far.
    pub purchased_tickets: u64,
    /// Share of the room sold, in percent. Single precision, so the
    /// two-decimal rounding matches the console program's output.
    pub percentage: f32,
    /// Income from tickets sold so far.
    pub current_income: u64,
    /// Income if every seat were sold.
    pub total_income: u64,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_markers() {
        assert_eq!(Seat::Available.marker(), 'S');
        assert_eq!(Seat::Sold.marker(), 'B');
        assert_eq!(Seat::default(), Seat::Available);
    }

    #[test]
    fn front_rows_rounds_down() {
        assert_eq!(RoomConfig::new(8, 10).front_rows(), 4);
        assert_eq!(RoomConfig::new(7, 8).front_rows(), 3);
        assert_eq!(RoomConfig::new(1, 5).front_rows(), 0);
    }

    #[test]
    fn total_seats_multiplies_dimensions() {
        assert_eq!(RoomConfig::new(8, 10).total_seats(), 80);
        assert_eq!(RoomConfig::new(1, 1).total_seats(), 1);
    }
}
