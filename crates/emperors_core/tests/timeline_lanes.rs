use emperors_core::{build_timeline, normalize_pair, pack_lanes, EmperorRecord};

fn reign(name: &str, start: &str, end: &str) -> EmperorRecord {
    let mut record = EmperorRecord::named(name);
    record.reign_start = Some(start.to_string());
    record.reign_end = Some(end.to_string());
    record
}

#[test]
fn augustus_start_is_corrected_to_bce() {
    let (start, end) = normalize_pair("0027-01-01", "0014-01-01").unwrap();
    assert_eq!(start.year(), -26);
    assert_eq!(end.year(), 14);
    assert_eq!(start.era_label(), "27 BCE");
    assert_eq!(end.era_label(), "14 CE");
}

#[test]
fn ce_reign_keeps_nominal_years() {
    let (start, end) = normalize_pair("0100-01-01", "0150-01-01").unwrap();
    assert_eq!(start.year(), 100);
    assert_eq!(end.year(), 150);
}

#[test]
fn boundary_touching_reigns_share_lane() {
    let packing = pack_lanes(vec![(0, 10), (10, 20), (20, 30)]);
    assert_eq!(packing.lanes(), vec![0, 0, 0]);
}

#[test]
fn fully_overlapping_reigns_stack() {
    let packing = pack_lanes(vec![(0, 10), (0, 10), (0, 10)]);
    assert_eq!(packing.lanes(), vec![0, 1, 2]);
    assert_eq!(packing.total_lanes, 3);
}

#[test]
fn crisis_year_packs_within_four_lanes() {
    let packing = pack_lanes(vec![(68, 69), (69, 69), (69, 70), (69, 71)]);
    assert!(packing.total_lanes <= 4);
    assert_eq!(packing.items[0].item, (68, 69));
    assert_eq!(packing.items[0].lane, 0);
    assert_eq!(packing.lanes(), vec![0, 0, 0, 1]);
}

#[test]
fn year_of_four_emperors_uses_day_precision() {
    let records = vec![
        reign("Galba", "0068-06-08", "0069-01-15"),
        reign("Nero", "0054-10-13", "0068-06-09"),
        reign("Otho", "0069-01-15", "0069-04-16"),
        reign("Vitellius", "0069-04-16", "0069-12-20"),
        reign("Vespasian", "0069-07-01", "0079-06-23"),
    ];

    let timeline = build_timeline(&records);
    let rows: Vec<(&str, usize)> = timeline
        .entries
        .iter()
        .map(|entry| (entry.identifier.as_str(), entry.lane))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Nero", 0),
            ("Galba", 1),
            ("Otho", 0),
            ("Vitellius", 0),
            ("Vespasian", 1),
        ]
    );
    assert_eq!(timeline.total_lanes, 2);

    let active: Vec<_> = timeline
        .active_in_year(69)
        .into_iter()
        .map(|entry| entry.identifier.as_str())
        .collect();
    assert_eq!(active, vec!["Galba", "Otho", "Vitellius", "Vespasian"]);
}

#[test]
fn records_without_dates_are_excluded_and_take_no_lane() {
    let mut missing = reign("Nobody", "", "0070-01-01");
    missing.birth = None;
    let records = vec![
        reign("First", "0060-01-01", "0080-01-01"),
        missing,
        reign("Second", "0070-01-01", "0090-01-01"),
    ];

    let timeline = build_timeline(&records);
    let names: Vec<_> = timeline
        .entries
        .iter()
        .map(|entry| entry.identifier.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
    assert_eq!(timeline.total_lanes, 2);
}

#[test]
fn birth_and_death_fill_in_for_missing_reign_dates() {
    let mut record = EmperorRecord::named("Augustus");
    record.birth = Some("0063-09-23".to_string());
    record.death = Some("0014-08-19".to_string());

    let timeline = build_timeline(&[record]);
    assert_eq!(timeline.entries[0].start_year, -62);
    assert_eq!(timeline.entries[0].end_year, 14);
    assert_eq!(timeline.entries[0].start_raw, "0063-09-23");
}

#[test]
fn packing_is_idempotent() {
    let records = vec![
        reign("Augustus", "0027-01-16", "0014-08-19"),
        reign("Tiberius", "0014-09-18", "0037-03-16"),
        reign("Pupienus", "0238-04-22", "0238-07-29"),
        reign("Balbinus", "0238-04-22", "0238-07-29"),
        reign("Gordian III", "0238-07-29", "0244-02-11"),
    ];

    let first = build_timeline(&records);
    let second = build_timeline(&records);
    assert_eq!(first, second);
    assert_eq!(first.entries[0].identifier, "Augustus");
    assert_eq!(first.entries[0].start_year, -26);

    let (earliest, latest) = first.span().unwrap();
    assert_eq!(earliest.year(), -26);
    assert_eq!(latest.year(), 244);
}

#[test]
fn empty_collection_yields_empty_timeline() {
    let timeline = build_timeline(&[]);
    assert!(timeline.entries.is_empty());
    assert_eq!(timeline.total_lanes, 0);
    assert_eq!(timeline.span(), None);
}
