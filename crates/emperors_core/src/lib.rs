//! Core data logic for the Roman emperors charts.
//! Every derived value the chart layer draws is computed here.

pub mod dataset;
pub mod logging;
pub mod model;
pub mod service;
pub mod stats;
pub mod timeline;

pub use dataset::load::{load_dataset, parse_dataset, DatasetError, DatasetResult};
pub use dataset::source::{InMemorySource, JsonFileSource, RecordSource};
pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, LogSettings,
};
pub use model::emperor::EmperorRecord;
pub use service::report_service::{DatasetReport, ReportService};
pub use stats::median::{median, MedianSummary};
pub use timeline::date::{format_year, nominal_year, normalize_pair, EraDate};
pub use timeline::lanes::{pack_lanes, Interval, LanePacking, Laned};
pub use timeline::{build_timeline, TimeRangedRecord, Timeline, TimelineEntry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
