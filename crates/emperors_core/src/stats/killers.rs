//! Killer tally for the web-of-death graph.

use crate::model::emperor::EmperorRecord;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KillerTally {
    pub killer: String,
    pub count: usize,
    /// Victims in dataset order.
    pub victims: Vec<String>,
}

/// Groups emperors by their record's killer, killers in first-seen order.
pub fn killer_tally(records: &[EmperorRecord]) -> Vec<KillerTally> {
    killer_tally_with_overrides(records, &HashMap::new())
}

/// Like [`killer_tally`], but `overrides` (emperor name to killer) wins over
/// the record's own `killer` field. Empty override values are ignored.
pub fn killer_tally_with_overrides(
    records: &[EmperorRecord],
    overrides: &HashMap<String, String>,
) -> Vec<KillerTally> {
    let mut tallies: Vec<KillerTally> = Vec::new();
    for record in records {
        let overridden = overrides.get(&record.name).map(String::as_str);
        let Some(killer) = non_empty(overridden).or_else(|| non_empty(record.killer.as_deref()))
        else {
            continue;
        };
        match tallies.iter_mut().find(|tally| tally.killer == killer) {
            Some(tally) => {
                tally.count += 1;
                tally.victims.push(record.name.clone());
            }
            None => tallies.push(KillerTally {
                killer: killer.to_string(),
                count: 1,
                victims: vec![record.name.clone()],
            }),
        }
    }
    tallies
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|killer| !killer.is_empty())
}
