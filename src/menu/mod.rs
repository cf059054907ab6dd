//! Interactive menu.
//!
//! Organized along the same pure/effects split as the rest of the crate:
//! - `state`: pure data types (MenuChoice, Session, Ticket)
//! - `update`: pure transitions (seat validation, purchase)
//! - `run`: effects (prompts, reads, prints)

pub mod run;
pub mod state;
pub mod update;
