use flight_agents::models::{FlightRecord, LookupResult};
use flight_agents::store::{canonicalize, FlightStore};
use std::io::Write;
use tempfile::NamedTempFile;

fn ai123() -> FlightRecord {
    FlightRecord::new("AI123", "08:00 AM", "Delhi", "Delayed")
}

#[test]
fn test_lookup_ignores_case_and_surrounding_whitespace() {
    let store = FlightStore::seed();

    for variant in ["AI123", " ai123 ", "Ai123", "\tai123\n"] {
        assert_eq!(store.lookup(variant), LookupResult::Found(ai123()), "variant {:?}", variant);
    }
}

#[test]
fn test_lookup_miss_carries_canonical_identifier() {
    let store = FlightStore::seed();

    assert_eq!(store.lookup(" ai999 "), LookupResult::NotFound("AI999".to_string()));
    assert_eq!(store.lookup(""), LookupResult::NotFound(String::new()));
    assert_eq!(store.lookup("   "), LookupResult::NotFound(String::new()));
    assert_eq!(store.lookup("((AI123"), LookupResult::NotFound("((AI123".to_string()));
}

#[test]
fn test_seed_dataset_contents() {
    let store = FlightStore::seed();
    assert_eq!(store.len(), 3);

    let numbers: Vec<&str> = store.records().iter().map(|r| r.flight_number.as_str()).collect();
    assert_eq!(numbers, vec!["AI123", "AI456", "AI789"]);

    match store.lookup("AI789") {
        LookupResult::Found(record) => {
            assert_eq!(record.departure_time, "05:45 PM");
            assert_eq!(record.destination, "Bengaluru");
            assert_eq!(record.status, "Boarding");
        }
        other => panic!("expected AI789 in seed data, got {:?}", other),
    }
}

#[test]
fn test_from_records_canonicalizes_keys() {
    let store = FlightStore::from_records(vec![FlightRecord::new(" ba42 ", "09:15", "London", "Cancelled")]).unwrap();

    match store.lookup("BA42") {
        LookupResult::Found(record) => assert_eq!(record.flight_number, "BA42"),
        other => panic!("expected BA42, got {:?}", other),
    }
}

#[test]
fn test_from_records_rejects_duplicates_and_blanks() {
    let duplicate = FlightStore::from_records(vec![ai123(), FlightRecord::new("ai123", "x", "y", "z")]);
    assert!(duplicate.unwrap_err().to_string().contains("Duplicate flight number"));

    let blank = FlightStore::from_records(vec![FlightRecord::new("  ", "x", "y", "z")]);
    assert!(blank.unwrap_err().to_string().contains("blank flight number"));
}

#[test]
fn test_load_json_dataset() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"flight_number": "lh400", "departure_time": "13:05", "destination": "Zürich", "status": "On Time"}}]"#
    )
    .unwrap();

    let store = FlightStore::load(file.path()).unwrap();
    match store.lookup("LH400") {
        LookupResult::Found(record) => assert_eq!(record.destination, "Zürich"),
        other => panic!("expected LH400, got {:?}", other),
    }
}

#[test]
fn test_load_toml_dataset() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[[flights]]\nflight_number = \"AI123\"\ndeparture_time = \"08:00 AM\"\ndestination = \"Delhi\"\nstatus = \"Delayed\""
    )
    .unwrap();

    let store = FlightStore::load(file.path()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.lookup("ai123"), LookupResult::Found(ai123()));
}

#[test]
fn test_load_rejects_unknown_format() {
    let file = NamedTempFile::new().unwrap();
    let err = FlightStore::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Unsupported dataset format"));
}

#[test]
fn test_canonicalize() {
    assert_eq!(canonicalize("  ai123\t"), "AI123");
    assert_eq!(canonicalize(""), "");
}
