//! Free-time computation over participants' busy intervals.
//!
//! A boundary sweep counts how many commitments are active at each instant
//! inside a window; stretches at depth zero are free. The free view can cover
//! everyone at once, be narrowed to a single participant, or be converted
//! into preferred ranges ready for candidate slot generation.

use crate::availability::BusyInterval;
use crate::slots::TimeRange;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
}

/// Stretches of the window during which no listed commitment is active,
/// whoever it belongs to — the time when *every* participant in the input
/// is free. Returned sorted by start time.
pub fn free_slots(
    busy_intervals: &[BusyInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<FreeSlot> {
    let blocks = busy_blocks(busy_intervals.iter(), window_start, window_end);
    gaps_between(&blocks, window_start, window_end)
}

/// Free stretches for one participant; commitments belonging to anyone else
/// are ignored.
pub fn participant_free_slots(
    busy_intervals: &[BusyInterval],
    participant_id: &str,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<FreeSlot> {
    let blocks = busy_blocks(
        busy_intervals
            .iter()
            .filter(|b| b.participant_id == participant_id),
        window_start,
        window_end,
    );
    gaps_between(&blocks, window_start, window_end)
}

/// First free stretch of at least `min_duration_minutes` within the window.
pub fn first_free_slot(
    busy_intervals: &[BusyInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    min_duration_minutes: i64,
) -> Option<FreeSlot> {
    free_slots(busy_intervals, window_start, window_end)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}

/// Free stretches long enough to host the meeting, as preferred ranges for
/// [`generate_slots`](crate::slots::generate_slots).
///
/// Useful when a caller has no preference beyond "sometime this window":
/// the gaps between everyone's commitments become the preferred ranges, so
/// every candidate slot generated from them is conflict-free by construction.
pub fn schedulable_ranges(
    busy_intervals: &[BusyInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration_minutes: u32,
) -> Vec<TimeRange> {
    free_slots(busy_intervals, window_start, window_end)
        .into_iter()
        .filter(|slot| slot.duration_minutes >= duration_minutes as i64)
        .map(|slot| TimeRange {
            start: slot.start,
            end: slot.end,
        })
        .collect()
}

/// Boundary sweep over the clipped intervals: +1 at each start, -1 at each
/// end. A block opens when the depth leaves zero and closes when it returns.
/// Starts order ahead of ends at the same instant, so abutting commitments
/// fuse into one block instead of leaving a zero-width gap.
fn busy_blocks<'a>(
    intervals: impl Iterator<Item = &'a BusyInterval>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    let mut bounds: Vec<(DateTime<Utc>, i32)> = Vec::new();
    for interval in intervals.filter(|b| b.start < window_end && b.end > window_start) {
        bounds.push((interval.start.max(window_start), 1));
        bounds.push((interval.end.min(window_end), -1));
    }
    bounds.sort_by_key(|&(at, delta)| (at, -delta));

    let mut blocks = Vec::new();
    let mut depth = 0;
    let mut block_start = window_start;
    for (at, delta) in bounds {
        if depth == 0 {
            block_start = at;
        }
        depth += delta;
        if depth == 0 {
            blocks.push((block_start, at));
        }
    }
    blocks
}

/// The complement of sorted, disjoint busy blocks within the window.
fn gaps_between(
    blocks: &[(DateTime<Utc>, DateTime<Utc>)],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<FreeSlot> {
    let mut free = Vec::new();
    let mut cursor = window_start;

    for &(busy_start, busy_end) in blocks {
        if cursor < busy_start {
            free.push(FreeSlot {
                start: cursor,
                end: busy_start,
                duration_minutes: (busy_start - cursor).num_minutes(),
            });
        }
        cursor = busy_end;
    }

    if cursor < window_end {
        free.push(FreeSlot {
            start: cursor,
            end: window_end,
            duration_minutes: (window_end - cursor).num_minutes(),
        });
    }

    free
}
