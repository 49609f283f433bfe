use emperors_core::{
    load_dataset, DatasetError, InMemorySource, JsonFileSource, ReportService,
};
use std::io::Write;

fn fixture() -> serde_json::Value {
    serde_json::json!([
        {
            "index": 1,
            "name": "Augustus",
            "Pre Emperor": 36,
            "Emperor": 40,
            "Post Emperor": 0,
            "cause": "Natural Causes",
            "rise": "Birthright",
            "dynasty": "Julio-Claudian",
            "birth": "0063-09-23",
            "death": "0014-08-19",
            "reign_start": "0027-01-16",
            "reign_end": "0014-08-19",
            "birth_city": "Rome",
            "birth_lat": 41.9,
            "birth_lng": 12.5
        },
        {
            "index": 3,
            "name": "Caligula",
            "Pre Emperor": 24,
            "Emperor": 4,
            "cause": "Assassination",
            "killer": "Praetorian Guard",
            "rise": "Birthright",
            "dynasty": "Julio-Claudian",
            "reign_start": "0037-03-18",
            "reign_end": "0041-01-24"
        },
        {
            "index": 2,
            "name": "Tiberius",
            "Pre Emperor": 55,
            "Emperor": 23,
            "cause": "Assassination",
            "killer": "Praetorian Guard",
            "rise": "Birthright",
            "dynasty": "Julio-Claudian",
            "reign_start": "0014-09-18",
            "reign_end": "0037-03-16"
        },
        {
            "name": "Undated",
            "reign_start": ""
        }
    ])
}

fn write_fixture() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(fixture().to_string().as_bytes()).unwrap();
    file
}

#[test]
fn file_source_builds_full_report() {
    let file = write_fixture();
    let service = ReportService::new(JsonFileSource::new(file.path()));

    let report = service.build_report().unwrap();
    assert_eq!(report.record_count, 4);
    assert_eq!(report.timeline.entries.len(), 3);
    assert_eq!(report.timeline_excluded(), 1);
    assert_eq!(report.timeline.total_lanes, 1);
    assert_eq!(report.timeline.entries[0].identifier, "Augustus");

    assert_eq!(report.medians.median_reign, Some(23.0));
    assert_eq!(report.medians.median_age, Some(76.0));

    let career_names: Vec<_> = report.careers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(career_names, vec!["Augustus", "Tiberius", "Caligula"]);

    assert_eq!(report.career_matrix.rises, vec!["Birthright"]);
    assert_eq!(report.career_matrix.count("Birthright", "Assassination"), 2);
    assert_eq!(report.career_matrix.max_count, 2);

    assert_eq!(report.killers.len(), 1);
    assert_eq!(report.killers[0].count, 2);
    assert_eq!(report.dynasty_ages.len(), 1);
    assert_eq!(report.birthplaces.len(), 1);
}

#[test]
fn in_memory_source_matches_file_source() {
    let file = write_fixture();
    let records = load_dataset(file.path()).unwrap();

    let from_file = ReportService::new(JsonFileSource::new(file.path()))
        .build_report()
        .unwrap();
    let from_memory = ReportService::new(InMemorySource::new(records))
        .build_report()
        .unwrap();
    assert_eq!(from_file, from_memory);
}

#[test]
fn report_serializes_lane_and_era_fields() {
    let file = write_fixture();
    let timeline = ReportService::new(JsonFileSource::new(file.path()))
        .build_timeline()
        .unwrap();

    let json = serde_json::to_value(&timeline).unwrap();
    assert_eq!(json["total_lanes"], 1);
    assert_eq!(json["entries"][0]["start_year"], -26);
    assert_eq!(json["entries"][0]["lane"], 0);
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = ReportService::new(JsonFileSource::new(&path))
        .build_report()
        .unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_names_the_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{").unwrap();

    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(err, DatasetError::Parse { path: Some(_), .. }));
}

#[test]
fn wrongly_typed_element_does_not_drop_the_rest_of_the_file() {
    let mut records = fixture();
    records
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({"name": "Nero", "birth": 42, "Emperor": 14}));
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(records.to_string().as_bytes()).unwrap();

    let report = ReportService::new(JsonFileSource::new(file.path()))
        .build_report()
        .unwrap();
    assert_eq!(report.record_count, 4);
    assert_eq!(report.timeline.entries.len(), 3);
    assert_eq!(report.medians.median_reign, Some(23.0));
}
