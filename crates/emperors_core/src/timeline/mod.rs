//! Reign timeline: date normalization plus lane packing.
//!
//! # Responsibility
//! - Turn dataset records into era-corrected time ranges.
//! - Stack overlapping reigns into lanes to expose succession crises.
//!
//! # Invariants
//! - Records without a parsable start and end never reach lane packing.
//! - Entries are ordered by start date; ties keep dataset order.

pub mod date;
pub mod lanes;

use crate::model::emperor::EmperorRecord;
use date::{normalize_pair, EraDate};
use lanes::{pack_lanes, Interval};
use log::debug;
use serde::Serialize;

/// One record that survived normalization, before lane assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangedRecord {
    pub identifier: String,
    pub dynasty: String,
    pub cause: Option<String>,
    pub start_raw: String,
    pub end_raw: String,
    pub start: EraDate,
    pub end: EraDate,
}

impl TimeRangedRecord {
    /// Normalizes one dataset record.
    ///
    /// Returns `None` when the record has no usable start or end date.
    pub fn from_record(record: &EmperorRecord) -> Option<Self> {
        let start_raw = record.start_raw()?;
        let end_raw = record.end_raw()?;
        let (start, end) = normalize_pair(start_raw, end_raw)?;
        Some(Self {
            identifier: record.name.clone(),
            dynasty: record.dynasty_or_unknown().to_string(),
            cause: record.cause.clone(),
            start_raw: start_raw.to_string(),
            end_raw: end_raw.to_string(),
            start,
            end,
        })
    }
}

impl Interval for TimeRangedRecord {
    type Point = EraDate;

    fn start(&self) -> EraDate {
        self.start
    }

    fn end(&self) -> EraDate {
        self.end
    }
}

/// A timeline row item as consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub identifier: String,
    pub dynasty: String,
    pub cause: Option<String>,
    pub start_raw: String,
    pub end_raw: String,
    pub start: EraDate,
    pub end: EraDate,
    pub start_year: i32,
    pub end_year: i32,
    pub lane: usize,
}

/// Lane-packed reign timeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub total_lanes: usize,
}

impl Timeline {
    /// Earliest start and latest end across all entries.
    pub fn span(&self) -> Option<(EraDate, EraDate)> {
        let first = self.entries.iter().map(|entry| entry.start).min()?;
        let last = self.entries.iter().map(|entry| entry.end).max()?;
        Some((first, last))
    }

    /// Entries whose year range includes `year`.
    pub fn active_in_year(&self, year: i32) -> Vec<&TimelineEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.start_year <= year && year <= entry.end_year)
            .collect()
    }
}

/// Normalizes `records` and packs them into lanes.
pub fn build_timeline(records: &[EmperorRecord]) -> Timeline {
    let ranged = records.iter().filter_map(|record| {
        let normalized = TimeRangedRecord::from_record(record);
        if normalized.is_none() {
            debug!(
                "event=timeline_exclude module=timeline reason=unparsable_dates name={}",
                record.name
            );
        }
        normalized
    });

    let packing = pack_lanes(ranged);
    let entries = packing
        .items
        .into_iter()
        .map(|laned| {
            let record = laned.item;
            TimelineEntry {
                start_year: record.start.year(),
                end_year: record.end.year(),
                identifier: record.identifier,
                dynasty: record.dynasty,
                cause: record.cause,
                start_raw: record.start_raw,
                end_raw: record.end_raw,
                start: record.start,
                end: record.end,
                lane: laned.lane,
            }
        })
        .collect();

    Timeline {
        entries,
        total_lanes: packing.total_lanes,
    }
}
