//! Dataset report use-case.
//!
//! # Responsibility
//! - Load records from a `RecordSource` and derive every chart input.
//!
//! # Invariants
//! - Each build computes from a fresh snapshot; nothing is cached between
//!   calls, so repeated builds over unchanged input are identical.

use crate::dataset::load::DatasetResult;
use crate::dataset::source::RecordSource;
use crate::model::emperor::EmperorRecord;
use crate::stats::birthplace::{birthplace_points, BirthplacePoint};
use crate::stats::career::{career_breakdown, CareerSegments};
use crate::stats::dynasty::{dynasty_ages, DynastyAges};
use crate::stats::killers::{killer_tally, KillerTally};
use crate::stats::matrix::{career_matrix, CareerMatrix};
use crate::stats::median::MedianSummary;
use crate::timeline::{build_timeline, Timeline};
use log::{error, info};
use serde::Serialize;
use std::time::Instant;

/// Everything the chart layer needs, derived from one record snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    pub record_count: usize,
    pub timeline: Timeline,
    pub medians: MedianSummary,
    pub careers: Vec<CareerSegments>,
    pub career_matrix: CareerMatrix,
    pub killers: Vec<KillerTally>,
    pub dynasty_ages: Vec<DynastyAges>,
    pub birthplaces: Vec<BirthplacePoint>,
}

impl DatasetReport {
    /// Derives a report from records already in memory.
    pub fn from_records(records: &[EmperorRecord]) -> Self {
        Self {
            record_count: records.len(),
            timeline: build_timeline(records),
            medians: MedianSummary::from_records(records),
            careers: career_breakdown(records),
            career_matrix: career_matrix(records),
            killers: killer_tally(records),
            dynasty_ages: dynasty_ages(records),
            birthplaces: birthplace_points(records),
        }
    }

    /// Records dropped from the timeline for missing or unparsable dates.
    pub fn timeline_excluded(&self) -> usize {
        self.record_count - self.timeline.entries.len()
    }
}

/// Use-case service wrapper around one record source.
pub struct ReportService<S: RecordSource> {
    source: S,
}

impl<S: RecordSource> ReportService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads the current records and derives a full report.
    ///
    /// # Side effects
    /// - Emits `report_build` logging events with duration and counts.
    pub fn build_report(&self) -> DatasetResult<DatasetReport> {
        let started_at = Instant::now();
        let records = match self.source.load_records() {
            Ok(records) => records,
            Err(err) => {
                error!(
                    "event=report_build module=service status=error duration_ms={} error_code=load_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        };

        let report = DatasetReport::from_records(&records);
        info!(
            "event=report_build module=service status=ok duration_ms={} records={} lanes={} excluded={}",
            started_at.elapsed().as_millis(),
            report.record_count,
            report.timeline.total_lanes,
            report.timeline_excluded()
        );
        Ok(report)
    }

    /// Loads the current records and builds only the timeline.
    pub fn build_timeline(&self) -> DatasetResult<Timeline> {
        let records = self.source.load_records()?;
        Ok(build_timeline(&records))
    }
}
