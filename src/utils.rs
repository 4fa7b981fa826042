//! Utility functions for reporting runs.

use std::time::Duration;

/// Format a duration as hours, minutes, seconds and milliseconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = duration.subsec_millis();

    format!("{}h {:02}m {:02}.{:03}s", hours, minutes, seconds, millis)
}

/// Relative error of `found` against a known `optimum`, in percent.
///
/// Returns `None` when the optimum is zero.
pub fn relative_error(found: u64, optimum: u64) -> Option<f64> {
    if optimum == 0 {
        return None;
    }

    Some((found as f64 - optimum as f64) / optimum as f64 * 100.0)
}
