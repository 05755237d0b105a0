//! Deadline clock reduction, mirroring the training-time feature exactly.

use anyhow::{Context, Result};
use chrono::{NaiveTime, Timelike};

/// Reduce a deadline like "5:00 PM" to minutes since midnight (0-1439).
///
/// This must match the reduction the classifier was trained on: hour,
/// minute, and meridiem all participate ("12:00 AM" is 0, "12:30 PM" is
/// 750). Dropping the minutes or the meridiem silently skews inference
/// against training.
pub fn deadline_minutes(raw: &str) -> Result<u32> {
    let t = NaiveTime::parse_from_str(raw.trim(), "%I:%M %p")
        .with_context(|| format!("invalid deadline time '{raw}' (expected H:MM AM/PM)"))?;
    Ok(t.hour() * 60 + t.minute())
}
