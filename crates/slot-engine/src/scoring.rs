//! Slot scoring -- combines availability, time-of-day preference, conflict
//! density, and proposal priority into a single 0-100 score.
//!
//! The weights and time bands below are policy constants, not configuration:
//! changing them changes the documented scoring contract.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Maximum points awarded for participant availability.
pub const AVAILABILITY_WEIGHT: f64 = 60.0;

/// Morning band `[9,12)` bonus, local hour of the slot start.
pub const MORNING_BONUS: f64 = 15.0;
/// Afternoon band `[13,17)` bonus.
pub const AFTERNOON_BONUS: f64 = 10.0;
/// Bonus for any start hour outside the preferred bands.
pub const OFF_HOURS_BONUS: f64 = 5.0;

/// Conflict-density bonuses for 0, 1, and 2 conflicting participants.
/// Three or more conflicting participants earn nothing.
pub const NO_CONFLICT_BONUS: f64 = 15.0;
pub const ONE_CONFLICT_BONUS: f64 = 10.0;
pub const TWO_CONFLICT_BONUS: f64 = 5.0;

/// Points per priority level above 1 (up to +22.5 at priority 10).
pub const PRIORITY_STEP: f64 = 2.5;

/// Score a candidate slot.
///
/// Four additive terms, summed then rounded and clamped into `[0,100]`:
/// 1. availability ratio scaled by [`AVAILABILITY_WEIGHT`] -- a proposal with
///    no participants at all is treated as fully available;
/// 2. time-of-day band of the slot's start hour in `timezone`;
/// 3. conflict density, where `conflict_count` is the number of participants
///    with at least one conflict (not the number of conflicting intervals);
/// 4. `(priority - 1) *` [`PRIORITY_STEP`].
pub fn score_slot(
    slot_start: DateTime<Utc>,
    available_count: usize,
    total_participants: usize,
    conflict_count: usize,
    priority: u8,
    timezone: Tz,
) -> u8 {
    let mut score = if total_participants > 0 {
        AVAILABILITY_WEIGHT * available_count as f64 / total_participants as f64
    } else {
        AVAILABILITY_WEIGHT
    };

    score += time_of_day_bonus(slot_start, timezone);
    score += conflict_density_bonus(conflict_count);
    score += (priority as f64 - 1.0) * PRIORITY_STEP;

    score.round().clamp(0.0, 100.0) as u8
}

/// Human-readable availability summary for a scored slot.
pub fn describe_availability(available_count: usize, total_participants: usize) -> String {
    if available_count == total_participants {
        "all participants available".to_string()
    } else if available_count == 0 {
        "no participants available".to_string()
    } else {
        format!(
            "{} participant(s) require rescheduling",
            total_participants - available_count
        )
    }
}

fn time_of_day_bonus(slot_start: DateTime<Utc>, timezone: Tz) -> f64 {
    let hour = slot_start.with_timezone(&timezone).hour();
    if (9..12).contains(&hour) {
        MORNING_BONUS
    } else if (13..17).contains(&hour) {
        AFTERNOON_BONUS
    } else {
        OFF_HOURS_BONUS
    }
}

fn conflict_density_bonus(conflict_count: usize) -> f64 {
    match conflict_count {
        0 => NO_CONFLICT_BONUS,
        1 => ONE_CONFLICT_BONUS,
        2 => TWO_CONFLICT_BONUS,
        _ => 0.0,
    }
}
