//! Per-participant availability evaluation for a candidate slot.
//!
//! Checks each required participant's busy intervals against the slot using
//! half-open overlap semantics. Adjacent intervals (slot ending exactly when a
//! commitment starts, or starting exactly when one ends) are NOT conflicts.

use crate::slots::CandidateSlot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An existing commitment for one participant. Must satisfy `start < end`.
///
/// Owned by the external event store; the engine only reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub participant_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A detected conflict between a candidate slot and one participant's
/// busy interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub participant_id: String,
    /// The first busy interval found to overlap the slot for this participant.
    pub interval: BusyInterval,
    /// How much of the slot the interval covers, in minutes.
    pub overlap_minutes: i64,
}

/// Result of evaluating one candidate slot against all participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAvailability {
    /// Number of participants with no overlapping busy interval.
    pub available_count: usize,
    /// One entry per conflicting participant, in participant order.
    pub conflicts: Vec<Conflict>,
}

/// Evaluate a candidate slot against every participant's busy intervals.
///
/// A participant is available iff none of their intervals overlap the slot.
/// Two half-open intervals `[s,e)` and `[bs,be)` overlap iff `s < be && e > bs`,
/// which excludes the abutting case where one ends exactly when the other
/// starts. Scanning stops at the first overlapping interval per participant;
/// that interval is recorded in `conflicts`. A participant with zero busy
/// intervals is always available.
pub fn evaluate_slot(
    slot: &CandidateSlot,
    busy_intervals: &[BusyInterval],
    participant_ids: &[String],
) -> SlotAvailability {
    let mut available_count = 0;
    let mut conflicts = Vec::new();

    for participant_id in participant_ids {
        let first_overlap = busy_intervals
            .iter()
            .filter(|b| &b.participant_id == participant_id)
            .find(|b| slot.start < b.end && slot.end > b.start);

        match first_overlap {
            Some(interval) => {
                let overlap_start = slot.start.max(interval.start);
                let overlap_end = slot.end.min(interval.end);
                conflicts.push(Conflict {
                    participant_id: participant_id.clone(),
                    interval: interval.clone(),
                    overlap_minutes: (overlap_end - overlap_start).num_minutes(),
                });
            }
            None => available_count += 1,
        }
    }

    SlotAvailability {
        available_count,
        conflicts,
    }
}
