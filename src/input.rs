//! Whitespace-separated token scanning over any `BufRead`.
//!
//! Values are consumed on demand, so several may share one line
//! ("3 4") or be spread over many.

use std::collections::VecDeque;
use std::io::BufRead;

use tracing::warn;

use crate::error::{CinemaError, Result};

/// Reads integers one token at a time.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-separated token, or None at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token that parses as an integer.
    ///
    /// Non-numeric tokens are skipped. `expected` names the value
    /// in the error raised when input runs out.
    pub fn next_int(&mut self, expected: &'static str) -> Result<i64> {
        loop {
            let token = self
                .next_token()?
                .ok_or(CinemaError::InputClosed { expected })?;

            match token.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => warn!(token = %token, expected, "skipping non-numeric input"),
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> TokenReader<Cursor<Vec<u8>>> {
        TokenReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn tokens_on_one_line() {
        let mut r = reader("3 4\n");
        assert_eq!(r.next_int("rows").unwrap(), 3);
        assert_eq!(r.next_int("seats").unwrap(), 4);
    }

    #[test]
    fn tokens_across_lines_and_blank_lines() {
        let mut r = reader("\n  7\n\n\t-2  \n");
        assert_eq!(r.next_int("a").unwrap(), 7);
        assert_eq!(r.next_int("b").unwrap(), -2);
    }

    #[test]
    fn non_numeric_tokens_are_skipped() {
        let mut r = reader("abc 1.5 x9 42\n");
        assert_eq!(r.next_int("choice").unwrap(), 42);
    }

    #[test]
    fn end_of_input_is_input_closed() {
        let mut r = reader("oops\n");
        let err = r.next_int("a menu choice").unwrap_err();
        assert!(matches!(
            err,
            CinemaError::InputClosed { expected: "a menu choice" }
        ));
    }

    #[test]
    fn last_line_without_newline() {
        let mut r = reader("5");
        assert_eq!(r.next_int("n").unwrap(), 5);
        assert!(r.next_token().unwrap().is_none());
    }
}
