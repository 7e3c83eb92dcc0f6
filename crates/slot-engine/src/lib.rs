//! # slot-engine
//!
//! Deterministic meeting-slot generation and scoring for multi-participant
//! scheduling.
//!
//! Given a proposal (duration, preferred time ranges, priority, participants)
//! and the participants' existing commitments, the engine enumerates candidate
//! slots at a fixed 15-minute stride, evaluates per-participant availability
//! with half-open overlap semantics, and returns up to five suggestions ranked
//! by a bounded composite score.
//!
//! The engine is a pure function pipeline: no I/O, no clocks, no shared state.
//! Identical inputs always produce the identical ordered suggestion list.
//!
//! ## Modules
//!
//! - [`slots`] — preferred ranges → fixed-duration candidate slots
//! - [`availability`] — per-participant conflict detection for a slot
//! - [`scoring`] — composite 0-100 score and availability description
//! - [`suggest`] — the end-to-end pipeline (`suggest_times`)
//! - [`freebusy`] — free gaps within a window, per group or per participant
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod freebusy;
pub mod scoring;
pub mod slots;
pub mod suggest;

pub use availability::{evaluate_slot, BusyInterval, Conflict, SlotAvailability};
pub use error::ScheduleError;
pub use freebusy::{
    first_free_slot, free_slots, participant_free_slots, schedulable_ranges, FreeSlot,
};
pub use scoring::{describe_availability, score_slot};
pub use slots::{generate_slots, CandidateSlot, TimeRange, SLOT_STRIDE_MINUTES};
pub use suggest::{suggest_times, ProposalSpec, SlotSuggestion, MAX_SUGGESTIONS};
