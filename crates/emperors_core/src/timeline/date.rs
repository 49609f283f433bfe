//! Era-aware date normalization for `YYYY-MM-DD` dataset strings.
//!
//! # Responsibility
//! - Parse nominal years and month/day fields from dataset strings.
//! - Resolve the BCE/CE sign of a (start, end) pair.
//! - Format astronomical years as `N BCE` / `N CE` labels.
//!
//! # Invariants
//! - Years use astronomical numbering: 1 BCE is year 0, 2 BCE is year -1.
//! - The year is written onto an already constructed calendar date, never
//!   passed through the general constructor, so years 0-99 and negative
//!   years are stored exactly as given.
//! - For a normalized pair, `start.year() <= end.year()`.

use chrono::{Datelike, Days, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};

static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\+?(\d+)").expect("valid leading integer regex"));

/// Year of the calendar date that month/day rolling is computed in.
const REFERENCE_YEAR: i32 = 1900;
/// Leap reference year for explicit calendar parts.
const LEAP_REFERENCE_YEAR: i32 = 2000;

/// Calendar date with an astronomical, possibly non-positive year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EraDate(NaiveDate);

impl EraDate {
    /// Parses month/day from `raw` and stamps `year` onto the result.
    ///
    /// Month and day default to 1 when missing, non-numeric or zero.
    /// Out-of-range values roll forward (`0069-02-30` lands on 2 March).
    /// Returns `None` when `raw` has no year field.
    pub fn parse_with_year(raw: &str, year: i32) -> Option<Self> {
        let mut fields = raw.split('-');
        let year_field = fields.next()?;
        if year_field.is_empty() {
            return None;
        }
        let month = calendar_field(fields.next());
        let day = calendar_field(fields.next());

        let base = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, 1)?
            .checked_add_months(Months::new(month - 1))?
            .checked_add_days(Days::new(u64::from(day - 1)))?;
        Self::from_base(base).with_year(year)
    }

    /// Builds a date from calendar parts. Intended for tests and fixtures.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let base = NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day)?;
        Self::from_base(base).with_year(year)
    }

    fn from_base(base: NaiveDate) -> Self {
        Self(base)
    }

    /// Replaces only the year component.
    ///
    /// 29 February moved into a common year becomes 1 March.
    pub fn with_year(self, year: i32) -> Option<Self> {
        self.0
            .with_year(year)
            .or_else(|| {
                if self.0.month() == 2 && self.0.day() == 29 {
                    NaiveDate::from_ymd_opt(year, 3, 1)
                } else {
                    None
                }
            })
            .map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Era label of the year, e.g. `27 BCE`.
    pub fn era_label(&self) -> String {
        format_year(self.year())
    }
}

impl Display for EraDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:02}-{:02})",
            format_year(self.year()),
            self.month(),
            self.day()
        )
    }
}

/// Parses the nominal (unsigned, era-less) year of a dataset date string.
///
/// Reads the leading integer of the field before the first `-`; trailing
/// non-digits are ignored. Empty or non-numeric fields yield `None`.
pub fn nominal_year(raw: &str) -> Option<i32> {
    let year_field = raw.split('-').next()?;
    leading_int(year_field).and_then(|value| i32::try_from(value).ok())
}

/// Normalizes a (start, end) pair into era-corrected dates.
///
/// A nominal start year larger than the nominal end year marks the start as
/// BCE: it becomes `-(start - 1)` while the end keeps its nominal value.
/// Returns `None` when either side cannot be parsed.
pub fn normalize_pair(start_raw: &str, end_raw: &str) -> Option<(EraDate, EraDate)> {
    let nominal_start = nominal_year(start_raw)?;
    let nominal_end = nominal_year(end_raw)?;

    let start_year = if nominal_start > nominal_end {
        -(nominal_start - 1)
    } else {
        nominal_start
    };

    let start = EraDate::parse_with_year(start_raw, start_year)?;
    let end = EraDate::parse_with_year(end_raw, nominal_end)?;
    Some((start, end))
}

/// Formats an astronomical year for display.
///
/// Year 0 and below are BCE (`0` is `1 BCE`); positive years are CE.
pub fn format_year(year: i32) -> String {
    if year <= 0 {
        format!("{} BCE", 1 - i64::from(year))
    } else {
        format!("{year} CE")
    }
}

fn leading_int(field: &str) -> Option<u64> {
    LEADING_INT_RE
        .captures(field)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}

fn calendar_field(field: Option<&str>) -> u32 {
    field
        .and_then(leading_int)
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| *value != 0)
        .unwrap_or(1)
}
