//! cinema-room: sell seats in a cinema from the console.

pub mod chart;
pub mod error;
pub mod input;
pub mod menu;
pub mod pricing;
pub mod report;
pub mod room;
pub mod types;
