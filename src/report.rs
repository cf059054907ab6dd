//! Statistics formatting.
//!
//! Pure functions: (Statistics, OutputFormat) → String.
//! No I/O, no side effects.

use crate::error::Result;
use crate::types::{OutputFormat, Statistics};

/// Format session statistics for output.
pub fn format_statistics(stats: &Statistics, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(stats)),
        OutputFormat::Json => format_json(stats),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(stats: &Statistics) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Number of purchased tickets: {}\n",
        stats.purchased_tickets
    ));
    out.push_str(&format!("Percentage: {:.2}%\n", stats.percentage));
    out.push_str(&format!("Current income: ${}\n", stats.current_income));
    out.push_str(&format!("Total income: ${}\n", stats.total_income));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(stats: &Statistics) -> Result<String> {
    let mut out = serde_json::to_string_pretty(stats)?;
    out.push('\n');
    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================
