//! Pure session transitions.
//!
//! Fully testable without stdin. The effects layer reads raw numbers,
//! hands them here, and prints whatever comes back.

use crate::error::SelectionError;
use crate::pricing::{quoted_price, seat_price};

use super::state::{Session, Ticket};

/// Validate a raw row/seat pair against the session's room.
///
/// Negative numbers are treated like zero: out of range.
pub fn select_seat(session: &Session, row: i64, seat: i64) -> Result<Ticket, SelectionError> {
    let row = usize::try_from(row).unwrap_or(0);
    let seat = usize::try_from(seat).unwrap_or(0);

    session.room.check(row, seat)?;

    let config = session.config();
    Ok(Ticket {
        row,
        seat,
        quoted_price: quoted_price(config, row),
        charged_price: seat_price(config, row),
    })
}

/// Buy a seat: validate it, sell it, count it, charge it.
///
/// Nothing changes when the selection is rejected.
pub fn purchase(session: &mut Session, row: i64, seat: i64) -> Result<Ticket, SelectionError> {
    let ticket = select_seat(session, row, seat)?;
    session.room.sell(ticket.row, ticket.seat)?;
    session.tickets_sold += 1;
    session.current_income += ticket.charged_price;
    Ok(ticket)
}

// ============================================================================
// TESTS
// ============================================================================
