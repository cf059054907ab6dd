//! Seating chart rendering.
//!
//! Pure function: Room → String. No I/O.

use crate::room::Room;

/// Render the seating chart.
///
/// ```text
/// Cinema:
///   1 2 3
/// 1 S S B
/// 2 S S S
/// ```
///
/// Every number and marker is followed by a single space.
pub fn render_chart(room: &Room) -> String {
    let mut out = String::from("Cinema:\n");

    out.push_str("  ");
    for seat in 1..=room.config().seats {
        out.push_str(&format!("{} ", seat));
    }
    out.push('\n');

    for (i, row) in room.rows().enumerate() {
        out.push_str(&format!("{} ", i + 1));
        for seat in row {
            out.push(seat.marker());
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================
