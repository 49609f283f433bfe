//! Dataset aggregates behind the non-timeline charts.
//!
//! # Responsibility
//! - Compute medians, career breakdowns and category tallies from records.
//! - Keep every aggregate a pure function of its input slice.
//!
//! # Invariants
//! - A record missing a field is excluded only from aggregates that need it.
//! - Output ordering is deterministic for the same input.

pub mod birthplace;
pub mod career;
pub mod dynasty;
pub mod killers;
pub mod matrix;
pub mod median;
