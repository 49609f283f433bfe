//! Emperor record model.
//!
//! # Responsibility
//! - Decode one dataset object, keeping the dataset's own key names on the wire.
//! - Resolve timeline date fallbacks and derived ages.
//!
//! # Invariants
//! - `start_raw()` prefers `reign_start` and falls back to `birth`.
//! - `end_raw()` prefers `reign_end` and falls back to `death`.
//! - Empty strings count as missing for both fallbacks.

use serde::{Deserialize, Serialize};

/// Dynasty label used when a record carries none.
pub const UNKNOWN_DYNASTY: &str = "Unknown";

/// One emperor as stored in the static dataset.
///
/// Career lengths are whole or fractional years. The dataset splits a life
/// into the years before, during and after the reign.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmperorRecord {
    /// Chronological position in the dataset.
    #[serde(default)]
    pub index: Option<u32>,
    /// Display name, unique across the dataset.
    pub name: String,
    /// Years lived before the reign began.
    #[serde(rename = "Pre Emperor", default)]
    pub pre_reign: Option<f64>,
    /// Reign length in years.
    #[serde(rename = "Emperor", default)]
    pub reign: Option<f64>,
    /// Years lived after the reign ended.
    #[serde(rename = "Post Emperor", default)]
    pub post_reign: Option<f64>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub killer: Option<String>,
    /// How the emperor came to power, e.g. `Birthright`.
    #[serde(default)]
    pub rise: Option<String>,
    #[serde(default)]
    pub dynasty: Option<String>,
    /// `YYYY-MM-DD`, era sign resolved only at pair level.
    #[serde(default)]
    pub birth: Option<String>,
    #[serde(default)]
    pub death: Option<String>,
    #[serde(default)]
    pub reign_start: Option<String>,
    #[serde(default)]
    pub reign_end: Option<String>,
    #[serde(default, alias = "birth_cty")]
    pub birth_city: Option<String>,
    #[serde(default)]
    pub birth_lat: Option<f64>,
    #[serde(default)]
    pub birth_lng: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl EmperorRecord {
    /// Creates a record with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Raw start date for the timeline: reign start, else birth.
    pub fn start_raw(&self) -> Option<&str> {
        non_empty(self.reign_start.as_deref()).or_else(|| non_empty(self.birth.as_deref()))
    }

    /// Raw end date for the timeline: reign end, else death.
    pub fn end_raw(&self) -> Option<&str> {
        non_empty(self.reign_end.as_deref()).or_else(|| non_empty(self.death.as_deref()))
    }

    /// Age at death in years.
    ///
    /// Requires both `pre_reign` and `reign`; a missing `post_reign` counts
    /// as zero (emperors who died in office).
    pub fn age_at_death(&self) -> Option<f64> {
        let age = self.pre_reign? + self.reign? + self.post_reign.unwrap_or(0.0);
        age.is_finite().then_some(age)
    }

    /// Dynasty name, or `Unknown`.
    pub fn dynasty_or_unknown(&self) -> &str {
        non_empty(self.dynasty.as_deref()).unwrap_or(UNKNOWN_DYNASTY)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}
