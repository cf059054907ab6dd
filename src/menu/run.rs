//! Menu effects boundary: prompts, reads, prints.
//!
//! This is the only menu module with side effects. It wires the pure
//! layers (state, update, chart, report) to a reader and a writer.
//! Generic over `BufRead`/`Write` so tests can drive whole sessions
//! from a string.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::chart::render_chart;
use crate::error::Result;
use crate::input::TokenReader;
use crate::report::format_statistics;
use crate::types::{OutputFormat, RoomConfig};

use super::state::{MENU_TEXT, MenuChoice, Session};
use super::update::purchase;

/// Line printed between sections.
const SEPARATOR: &str = " ";

/// Session settings taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Row count. Prompted for when absent or non-positive.
    pub rows: Option<i64>,
    /// Seats per row. Prompted for when absent or non-positive.
    pub seats: Option<i64>,
    /// Format of the statistics action.
    pub stats_format: OutputFormat,
}

/// Run a full session until the user picks Exit.
///
/// Returns the final session state.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, options: &RunOptions) -> Result<Session> {
    let mut tokens = TokenReader::new(input);

    let config = ask_size(&mut tokens, out, options)?;
    info!(rows = config.rows, seats = config.seats, "room ready");

    let mut session = Session::new(config);
    menu_loop(&mut tokens, out, &mut session, options.stats_format)?;

    info!(
        tickets_sold = session.tickets_sold,
        current_income = session.current_income,
        "session closed"
    );
    Ok(session)
}

// ============================================================================
// ROOM INITIALIZATION
// ============================================================================

/// Resolve room dimensions, prompting for any that were not given.
pub fn ask_size<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    out: &mut W,
    options: &RunOptions,
) -> Result<RoomConfig> {
    let rows = ask_dimension(
        tokens,
        out,
        options.rows,
        "Enter the number of rows:",
        "the number of rows",
    )?;
    let seats = ask_dimension(
        tokens,
        out,
        options.seats,
        "Enter the number of seats in each row:",
        "the number of seats in each row",
    )?;
    Ok(RoomConfig::new(rows, seats))
}

fn ask_dimension<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    out: &mut W,
    seed: Option<i64>,
    prompt: &str,
    expected: &'static str,
) -> Result<usize> {
    let mut value = seed.unwrap_or(0);
    loop {
        if let Some(n) = positive(value) {
            return Ok(n);
        }
        writeln!(out, "{}", prompt)?;
        out.flush()?;
        value = tokens.next_int(expected)?;
    }
}

fn positive(n: i64) -> Option<usize> {
    usize::try_from(n).ok().filter(|n| *n > 0)
}

// ============================================================================
// MENU LOOP
// ============================================================================

fn menu_loop<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    out: &mut W,
    session: &mut Session,
    stats_format: OutputFormat,
) -> Result<()> {
    loop {
        writeln!(out, "{}", SEPARATOR)?;
        write!(out, "{}", MENU_TEXT)?;
        out.flush()?;

        match read_choice(tokens)? {
            MenuChoice::ShowSeats => {
                writeln!(out, "{}", SEPARATOR)?;
                write!(out, "{}", render_chart(&session.room))?;
                writeln!(out, "{}", SEPARATOR)?;
            }
            MenuChoice::BuyTicket => {
                writeln!(out, "{}", SEPARATOR)?;
                buy_ticket(tokens, out, session)?;
                writeln!(out, "{}", SEPARATOR)?;
            }
            MenuChoice::Statistics => {
                let stats = session.statistics();
                write!(out, "{}", format_statistics(&stats, stats_format)?)?;
            }
            MenuChoice::Exit => {
                out.flush()?;
                return Ok(());
            }
            MenuChoice::Unknown(n) => debug!(choice = n, "unrecognized menu choice"),
        }
    }
}

/// Read until a non-negative number arrives.
fn read_choice<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<MenuChoice> {
    loop {
        let n = tokens.next_int("a menu choice")?;
        if n >= 0 {
            return Ok(MenuChoice::from_number(n));
        }
        debug!(choice = n, "ignoring negative menu choice");
    }
}

// ============================================================================
// SEAT SELECTION
// ============================================================================

/// Prompt until a valid, available seat is chosen, then record the sale.
fn buy_ticket<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    out: &mut W,
    session: &mut Session,
) -> Result<()> {
    loop {
        writeln!(out, "Enter a row number:")?;
        out.flush()?;
        let row = tokens.next_int("a row number")?;

        writeln!(out, "Enter a seat number in that row:")?;
        out.flush()?;
        let seat = tokens.next_int("a seat number")?;

        let ticket = match purchase(session, row, seat) {
            Ok(ticket) => ticket,
            Err(e) => {
                debug!(row, seat, reason = ?e, "selection rejected");
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        writeln!(out, "Ticket price: ${}", ticket.quoted_price)?;
        debug!(
            row = ticket.row,
            seat = ticket.seat,
            charged = ticket.charged_price,
            "ticket sold"
        );
        return Ok(());
    }
}

// ============================================================================
// TESTS
// ============================================================================
