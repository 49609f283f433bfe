//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate dataset loading into the derived data charts consume.
//! - Keep CLI/UI layers decoupled from where records come from.

pub mod report_service;
