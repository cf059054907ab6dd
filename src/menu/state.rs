//! Menu state: pure types, zero effects.
//!
//! The menu has a single idle state; everything that changes between
//! iterations lives in `Session`.

use crate::pricing::total_income;
use crate::room::Room;
use crate::types::{RoomConfig, Statistics};

// ============================================================================
// MENU CHOICES
// ============================================================================

/// A menu entry, decoded from the number the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: print the seating chart.
    ShowSeats,
    /// 2: select and purchase a seat.
    BuyTicket,
    /// 3: print statistics.
    Statistics,
    /// 0: end the session.
    Exit,
    /// Any other non-negative number. Redisplays the menu.
    Unknown(i64),
}

impl MenuChoice {
    /// Decode a non-negative menu number.
    pub fn from_number(n: i64) -> Self {
        match n {
            1 => MenuChoice::ShowSeats,
            2 => MenuChoice::BuyTicket,
            3 => MenuChoice::Statistics,
            0 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        }
    }
}

/// Menu text, printed before every choice.
pub const MENU_TEXT: &str = " 1. Show the seats\n 2. Buy a ticket\n 3. Statistics\n 0. Exit\n";

// ============================================================================
// SESSION
// ============================================================================

/// A recorded seat purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    /// 1-indexed row.
    pub row: usize,
    /// 1-indexed seat in the row.
    pub seat: usize,
    /// Price announced to the buyer.
    pub quoted_price: u64,
    /// Price added to current income.
    pub charged_price: u64,
}

/// Everything the menu loop owns for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub room: Room,
    pub tickets_sold: u64,
    pub current_income: u64,
}

impl Session {
    /// Fresh session over an empty room.
    pub fn new(config: RoomConfig) -> Self {
        Session {
            room: Room::new(config),
            tickets_sold: 0,
            current_income: 0,
        }
    }

    pub fn config(&self) -> &RoomConfig {
        self.room.config()
    }

    /// Current statistics snapshot.
    pub fn statistics(&self) -> Statistics {
        let total = self.config().total_seats();
        let percentage = self.tickets_sold as f32 / total as f32 * 100.0;

        Statistics {
            purchased_tickets: self.tickets_sold,
            percentage,
            current_income: self.current_income,
            total_income: total_income(self.config()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_decode() {
        assert_eq!(MenuChoice::from_number(1), MenuChoice::ShowSeats);
        assert_eq!(MenuChoice::from_number(2), MenuChoice::BuyTicket);
        assert_eq!(MenuChoice::from_number(3), MenuChoice::Statistics);
        assert_eq!(MenuChoice::from_number(0), MenuChoice::Exit);
        assert_eq!(MenuChoice::from_number(7), MenuChoice::Unknown(7));
    }

    #[test]
    fn new_session_starts_at_zero() {
        let session = Session::new(RoomConfig::new(8, 10));
        assert_eq!(session.tickets_sold, 0);
        assert_eq!(session.current_income, 0);
        assert_eq!(session.room.sold_count(), 0);
    }

    #[test]
    fn statistics_of_fresh_session() {
        let stats = Session::new(RoomConfig::new(8, 10)).statistics();
        assert_eq!(stats.purchased_tickets, 0);
        assert_eq!(stats.percentage, 0.0);
        assert_eq!(stats.current_income, 0);
        assert_eq!(stats.total_income, 720);
    }

    #[test]
    fn statistics_of_single_seat_room() {
        let mut session = Session::new(RoomConfig::new(1, 1));
        assert_eq!(session.statistics().percentage, 0.0);

        session.room.sell(1, 1).unwrap();
        session.tickets_sold = 1;
        assert_eq!(session.statistics().percentage, 100.0);
    }

    #[test]
    fn menu_text_lists_four_entries() {
        assert_eq!(MENU_TEXT.lines().count(), 4);
        assert!(MENU_TEXT.lines().all(|l| l.starts_with(' ')));
    }
}
