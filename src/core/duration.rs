//! `HH:MM:SS` rendering of second counts.

use crate::utils::error::{Result, StrKitError};

/// Formats `total_seconds` as `HH:MM:SS`. Hours are not wrapped at 24 and grow
/// past two digits when needed.
pub fn format_duration(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = total_seconds / 60 % 60;
    let seconds = total_seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Like [`format_duration`] but for signed input; negative values are rejected.
pub fn format_signed_duration(total_seconds: i64) -> Result<String> {
    u64::try_from(total_seconds)
        .map(format_duration)
        .map_err(|_| StrKitError::NegativeDuration(total_seconds))
}
