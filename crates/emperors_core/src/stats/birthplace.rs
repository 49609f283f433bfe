//! Birthplace coordinates for the map view.

use crate::model::emperor::EmperorRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthplacePoint {
    pub name: String,
    pub city: String,
    pub dynasty: String,
    pub lat: f64,
    pub lng: f64,
    pub age: Option<f64>,
}

/// Records that carry finite birth coordinates.
pub fn birthplace_points(records: &[EmperorRecord]) -> Vec<BirthplacePoint> {
    records
        .iter()
        .filter_map(|record| {
            let lat = record.birth_lat.filter(|value| value.is_finite())?;
            let lng = record.birth_lng.filter(|value| value.is_finite())?;
            Some(BirthplacePoint {
                name: record.name.clone(),
                city: record.birth_city.clone().unwrap_or_default(),
                dynasty: record.dynasty_or_unknown().to_string(),
                lat,
                lng,
                age: record.age_at_death(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::birthplace_points;
    use crate::model::emperor::EmperorRecord;

    #[test]
    fn skips_records_without_both_coordinates() {
        let mut rome = EmperorRecord::named("Nero");
        rome.birth_lat = Some(41.9);
        rome.birth_lng = Some(12.5);
        let mut half = EmperorRecord::named("Galba");
        half.birth_lat = Some(41.0);

        let points = birthplace_points(&[rome, half]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "Nero");
        assert_eq!(points[0].city, "");
    }
}
