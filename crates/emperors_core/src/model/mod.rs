//! Input domain model for the emperor dataset.
//!
//! # Responsibility
//! - Define the canonical record shape decoded from `emperors.json`.
//! - Provide derived accessors shared by timeline and statistics code.
//!
//! # Invariants
//! - Only `name` is required; every other field may be absent per record.
//! - Records are read-only after decoding.

pub mod emperor;
