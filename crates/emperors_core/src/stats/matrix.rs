//! Rise-to-power by cause-of-death count matrix.

use crate::model::emperor::EmperorRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Row order for the matrix.
pub const RISE_ORDER: &[&str] = &[
    "Birthright",
    "Appointment by Emperor",
    "Appointment by Senate",
    "Appointment by Praetorian Guard",
    "Appointment by Army",
    "Election",
    "Purchase",
    "Seized Power",
];

/// Column order for the matrix.
pub const CAUSE_ORDER: &[&str] = &[
    "Natural Causes",
    "Assassination",
    "Execution",
    "Suicide",
    "Died in Battle",
    "Captivity",
    "Unknown",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub rise: String,
    pub cause: String,
    pub count: usize,
}

/// Dense matrix over the categories that occur in the data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CareerMatrix {
    pub rises: Vec<String>,
    pub causes: Vec<String>,
    /// Row-major: all causes of `rises[0]`, then `rises[1]`, ...
    pub cells: Vec<MatrixCell>,
    /// Largest cell count, never below 1.
    pub max_count: usize,
}

impl CareerMatrix {
    pub fn count(&self, rise: &str, cause: &str) -> usize {
        self.cells
            .iter()
            .find(|cell| cell.rise == rise && cell.cause == cause)
            .map_or(0, |cell| cell.count)
    }
}

/// Counts records by (rise, cause).
///
/// Only records with both fields are counted. Categories outside the fixed
/// orders are dropped, as are fixed categories with no records.
pub fn career_matrix(records: &[EmperorRecord]) -> CareerMatrix {
    let pairs: Vec<(&str, &str)> = records
        .iter()
        .filter_map(|record| {
            let rise = record.rise.as_deref().filter(|value| !value.is_empty())?;
            let cause = record.cause.as_deref().filter(|value| !value.is_empty())?;
            Some((rise, cause))
        })
        .collect();

    let rises = present_in_order(RISE_ORDER, pairs.iter().map(|(rise, _)| *rise));
    let causes = present_in_order(CAUSE_ORDER, pairs.iter().map(|(_, cause)| *cause));

    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for pair in &pairs {
        *counts.entry(*pair).or_default() += 1;
    }

    let mut cells = Vec::with_capacity(rises.len() * causes.len());
    for rise in &rises {
        for cause in &causes {
            cells.push(MatrixCell {
                rise: rise.clone(),
                cause: cause.clone(),
                count: counts
                    .get(&(rise.as_str(), cause.as_str()))
                    .copied()
                    .unwrap_or(0),
            });
        }
    }
    let max_count = cells.iter().map(|cell| cell.count).max().unwrap_or(0).max(1);

    CareerMatrix {
        rises,
        causes,
        cells,
        max_count,
    }
}

fn present_in_order<'a>(order: &[&str], values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let seen: Vec<&str> = values.collect();
    order
        .iter()
        .filter(|category| seen.contains(category))
        .map(|category| category.to_string())
        .collect()
}
