//! Ticket pricing.
//!
//! Pure functions over `RoomConfig`. No I/O.
//!
//! Two per-seat rules exist and both are observable:
//! - `seat_price` is what a purchase is charged; it agrees with `total_income`.
//! - `quoted_price` is what the purchase prompt prints; it ignores the
//!   small-room flat rate.

use crate::types::RoomConfig;

/// Price of a front-row seat, and of every seat in a small room.
pub const FRONT_PRICE: u64 = 10;

/// Price of a back-row seat in a large room.
pub const BACK_PRICE: u64 = 8;

/// Rooms with at most this many seats charge `FRONT_PRICE` everywhere.
pub const SMALL_ROOM_LIMIT: u64 = 60;

fn is_small_room(config: &RoomConfig) -> bool {
    config.total_seats() <= SMALL_ROOM_LIMIT
}

/// Income if every seat in the room were sold.
pub fn total_income(config: &RoomConfig) -> u64 {
    let seats = config.seats as u64;

    if is_small_room(config) {
        return config.total_seats() * FRONT_PRICE;
    }

    let front = config.front_rows() as u64;
    let back = config.rows as u64 - front;
    front * seats * FRONT_PRICE + back * seats * BACK_PRICE
}

/// Price charged for a seat in `row` (1-indexed).
pub fn seat_price(config: &RoomConfig, row: usize) -> u64 {
    if row <= config.front_rows() || is_small_room(config) {
        FRONT_PRICE
    } else {
        BACK_PRICE
    }
}

/// Price announced when a seat in `row` (1-indexed) is selected.
pub fn quoted_price(config: &RoomConfig, row: usize) -> u64 {
    if row <= config.front_rows() {
        FRONT_PRICE
    } else {
        BACK_PRICE
    }
}

// ============================================================================
// TESTS
// ============================================================================
