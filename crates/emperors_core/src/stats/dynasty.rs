//! Age at death grouped by dynasty.

use super::median::median;
use crate::model::emperor::EmperorRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynastyAges {
    pub dynasty: String,
    /// `(name, age)` in dataset order.
    pub members: Vec<(String, f64)>,
    pub median_age: Option<f64>,
}

/// Groups records with a known age by dynasty, dynasties sorted by name.
pub fn dynasty_ages(records: &[EmperorRecord]) -> Vec<DynastyAges> {
    let mut grouped: BTreeMap<&str, Vec<(String, f64)>> = BTreeMap::new();
    for record in records {
        if let Some(age) = record.age_at_death() {
            grouped
                .entry(record.dynasty_or_unknown())
                .or_default()
                .push((record.name.clone(), age));
        }
    }

    grouped
        .into_iter()
        .map(|(dynasty, members)| {
            let ages: Vec<f64> = members.iter().map(|(_, age)| *age).collect();
            DynastyAges {
                dynasty: dynasty.to_string(),
                median_age: median(&ages),
                members,
            }
        })
        .collect()
}
