//! Median reign length and median age at death.

use crate::model::emperor::EmperorRecord;
use serde::Serialize;

/// Standard median of `values`.
///
/// Even counts average the two middle elements. Returns `None` for empty
/// input instead of dividing by zero.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    if count % 2 == 0 {
        Some((sorted[count / 2 - 1] + sorted[count / 2]) / 2.0)
    } else {
        Some(sorted[count / 2])
    }
}

/// Dataset-wide medians.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MedianSummary {
    pub median_reign: Option<f64>,
    pub median_age: Option<f64>,
    /// Records that contributed to `median_reign`.
    pub reign_samples: usize,
    /// Records that contributed to `median_age`.
    pub age_samples: usize,
}

impl MedianSummary {
    /// Computes both medians, each over the records that carry its fields.
    pub fn from_records(records: &[EmperorRecord]) -> Self {
        let reigns: Vec<f64> = records
            .iter()
            .filter_map(|record| record.reign)
            .filter(|reign| reign.is_finite())
            .collect();
        let ages: Vec<f64> = records
            .iter()
            .filter_map(EmperorRecord::age_at_death)
            .collect();

        Self {
            median_reign: median(&reigns),
            median_age: median(&ages),
            reign_samples: reigns.len(),
            age_samples: ages.len(),
        }
    }
}
