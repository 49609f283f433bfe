//! Static dataset access.
//!
//! # Responsibility
//! - Decode the emperor JSON document into typed records.
//! - Define the `RecordSource` seam used by report services.
//!
//! # Invariants
//! - Loading never mutates the source document.
//! - Record order is preserved exactly as stored.

pub mod load;
pub mod source;
