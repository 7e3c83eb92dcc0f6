//! The suggestion pipeline -- the engine's public entry point.
//!
//! preferred ranges → candidate slots → per-slot availability → score →
//! sort → truncate. Pure and synchronous; every invocation is independent
//! and the output is fully determined by the inputs.

use crate::availability::{evaluate_slot, BusyInterval, Conflict};
use crate::error::Result;
use crate::scoring::{describe_availability, score_slot};
use crate::slots::{generate_slots, TimeRange};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Maximum number of suggestions returned per request.
pub const MAX_SUGGESTIONS: usize = 5;

/// One scheduling request. Constructed by the caller, consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalSpec {
    /// Meeting length in minutes. Must be positive.
    pub duration_minutes: u32,
    /// Windows the meeting may be scheduled in, in caller preference order.
    pub preferred_ranges: Vec<TimeRange>,
    /// Requester priority on a 1-10 scale.
    pub priority: u8,
    /// Required participants, including the initiator. Expected unique;
    /// order does not affect scoring.
    pub participant_ids: Vec<String>,
    /// IANA timezone used for the time-of-day scoring band. Carried on the
    /// proposal so scoring never depends on the host's wall clock.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
}

fn default_timezone() -> Tz {
    Tz::UTC
}

/// A scored, ranked candidate slot returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSuggestion {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Composite score in `[0,100]`.
    pub score: u8,
    /// Availability summary, e.g. "all participants available".
    pub description: String,
    /// One entry per participant with a conflicting commitment.
    pub conflicts: Vec<Conflict>,
}

/// Compute the ranked slot suggestions for a proposal.
///
/// `busy_intervals` must cover every participant in
/// `spec.participant_ids` for the union of the preferred ranges; fetching
/// that set is the caller's job. Intervals for other participants are
/// ignored, and intervals outside the ranges simply never overlap.
///
/// Suggestions are sorted by descending score; equal scores are ordered by
/// earliest start. At most [`MAX_SUGGESTIONS`] entries are returned. Empty
/// preferred ranges, or ranges too short to fit the duration, produce an
/// empty list rather than an error.
///
/// Overlapping preferred ranges may generate the same slot more than once.
/// Duplicates are scored independently and not collapsed; the top-N cut
/// drops the redundant copies naturally.
///
/// # Errors
/// Propagates `InvalidDuration` and `InvalidRange` from slot generation;
/// no partial output is produced on invalid input.
pub fn suggest_times(
    spec: &ProposalSpec,
    busy_intervals: &[BusyInterval],
) -> Result<Vec<SlotSuggestion>> {
    let slots = generate_slots(&spec.preferred_ranges, spec.duration_minutes)?;
    let total_participants = spec.participant_ids.len();

    let mut suggestions: Vec<SlotSuggestion> = slots
        .iter()
        .map(|slot| {
            let availability = evaluate_slot(slot, busy_intervals, &spec.participant_ids);
            let score = score_slot(
                slot.start,
                availability.available_count,
                total_participants,
                availability.conflicts.len(),
                spec.priority,
                spec.timezone,
            );
            SlotSuggestion {
                start: slot.start,
                end: slot.end,
                score,
                description: describe_availability(availability.available_count, total_participants),
                conflicts: availability.conflicts,
            }
        })
        .collect();

    // Descending by score; explicit secondary key keeps ties deterministic
    // regardless of evaluation order.
    suggestions.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.start.cmp(&b.start)));
    suggestions.truncate(MAX_SUGGESTIONS);

    Ok(suggestions)
}
