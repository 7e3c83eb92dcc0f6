//! Candidate slot generation -- walks preferred time ranges at a fixed stride.
//!
//! Each preferred range is scanned independently from its start in 15-minute
//! steps; a slot is emitted at every cursor position where a full meeting still
//! fits inside the range. Overlapping ranges may produce duplicate slots; that
//! is deliberate -- duplicates compete independently during scoring and the
//! top-N selection discards the weaker copies.

use crate::error::{Result, ScheduleError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Spacing between consecutive candidate slot starts, in minutes.
pub const SLOT_STRIDE_MINUTES: i64 = 15;

/// A caller-supplied preference window. Half-open: `start` inclusive, `end`
/// exclusive for slot fitting. Must satisfy `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A fixed-duration candidate slot derived from a preferred range.
///
/// Ephemeral -- exists only between generation and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Generate all candidate slots of `duration_minutes` inside the preferred
/// ranges, at [`SLOT_STRIDE_MINUTES`] spacing.
///
/// Output preserves generation order: range order first, then chronological
/// within each range. A range shorter than the duration contributes no slots;
/// an empty `ranges` slice yields an empty result.
///
/// # Errors
/// Returns `ScheduleError::InvalidDuration` if `duration_minutes` is zero.
/// Returns `ScheduleError::InvalidRange` if any range has `start >= end` --
/// malformed ranges are rejected outright rather than skipped, so bad input
/// never silently narrows the search space.
pub fn generate_slots(ranges: &[TimeRange], duration_minutes: u32) -> Result<Vec<CandidateSlot>> {
    if duration_minutes == 0 {
        return Err(ScheduleError::InvalidDuration(duration_minutes));
    }
    for range in ranges {
        if range.start >= range.end {
            return Err(ScheduleError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
    }

    let duration = Duration::minutes(duration_minutes as i64);
    let stride = Duration::minutes(SLOT_STRIDE_MINUTES);

    let mut slots = Vec::new();
    for range in ranges {
        let mut cursor = range.start;
        while cursor + duration <= range.end {
            slots.push(CandidateSlot {
                start: cursor,
                end: cursor + duration,
            });
            cursor += stride;
        }
    }

    Ok(slots)
}
