//! Error types.
//!
//! `SelectionError` is recoverable: the menu prints it and asks again.
//! `CinemaError` ends the session.

use std::io;

use thiserror::Error;

/// A seat selection the room cannot honor.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Wrong input! Please enter a valid row.")]
    InvalidRow,

    #[error("Invalid seat number! Please enter a valid seat.")]
    InvalidSeat,

    #[error("That ticket has already been purchased!")]
    AlreadyPurchased,
}

/// Fatal session error.
#[derive(Debug, Error)]
pub enum CinemaError {
    /// Standard input ended while a value was still required.
    #[error("input closed while waiting for {expected}")]
    InputClosed { expected: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize statistics: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CinemaError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_messages_match_prompts() {
        assert_eq!(
            SelectionError::InvalidRow.to_string(),
            "Wrong input! Please enter a valid row."
        );
        assert_eq!(
            SelectionError::InvalidSeat.to_string(),
            "Invalid seat number! Please enter a valid seat."
        );
        assert_eq!(
            SelectionError::AlreadyPurchased.to_string(),
            "That ticket has already been purchased!"
        );
    }

    #[test]
    fn input_closed_names_what_was_expected() {
        let err = CinemaError::InputClosed { expected: "a menu choice" };
        assert_eq!(err.to_string(), "input closed while waiting for a menu choice");
    }

    #[test]
    fn io_errors_convert() {
        let err: CinemaError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, CinemaError::Io(_)));
    }
}
