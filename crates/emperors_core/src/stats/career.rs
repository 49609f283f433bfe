//! Per-emperor career breakdown for stacked reign bars.

use crate::model::emperor::EmperorRecord;
use serde::Serialize;

/// Years before, during and after one reign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerSegments {
    pub name: String,
    pub index: Option<u32>,
    pub pre_reign: f64,
    pub reign: f64,
    pub post_reign: f64,
    pub total: f64,
}

/// Career segments for every record with a reign length.
///
/// Ordered by dataset `index`; records without an index go last in input
/// order. Missing pre/post segments count as zero.
pub fn career_breakdown(records: &[EmperorRecord]) -> Vec<CareerSegments> {
    let mut segments: Vec<CareerSegments> = records
        .iter()
        .filter_map(|record| {
            let reign = record.reign.filter(|value| value.is_finite())?;
            let pre_reign = record.pre_reign.unwrap_or(0.0);
            let post_reign = record.post_reign.unwrap_or(0.0);
            Some(CareerSegments {
                name: record.name.clone(),
                index: record.index,
                pre_reign,
                reign,
                post_reign,
                total: pre_reign + reign + post_reign,
            })
        })
        .collect();

    segments.sort_by_key(|segment| (segment.index.is_none(), segment.index));
    segments
}
