use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use workcal::core::evaluator::evaluate;
use workcal::store::Store;

fn temp_store(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workcal_store.json", name));
    fs::remove_file(&path).ok();
    path
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn missing_file_loads_as_empty() {
    let store = Store::new(temp_store("missing_file"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn upsert_then_load_round_trips_the_record() {
    let store = Store::new(temp_store("round_trip"));

    let date = day(2025, 8, 4);
    let record = evaluate("9-17", date).unwrap();

    store.upsert(date, record.clone()).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[&date], record);
    assert_eq!(store.get(&date).unwrap(), Some(record));
}

#[test]
fn upsert_overwrites_without_leaving_history() {
    let store = Store::new(temp_store("overwrite"));
    let date = day(2025, 8, 4);

    store.upsert(date, evaluate("9-17", date).unwrap()).unwrap();
    store.upsert(date, evaluate("0", date).unwrap()).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[&date].raw, "0");
    assert_eq!(loaded[&date].worked, 0);
}

#[test]
fn store_file_is_a_readable_date_keyed_object() {
    let path = temp_store("readable_json");
    let store = Store::new(&path);

    let date = day(2025, 8, 5);
    store.upsert(date, evaluate("x", date).unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"2025-08-05\""));
    assert!(content.contains("\"note\": \"Legal holiday\""));
    assert!(content.contains("\"holiday\": true"));
}

#[test]
fn records_iterate_in_chronological_order() {
    let store = Store::new(temp_store("ordered"));

    for (d, entry) in [
        (day(2025, 8, 11), "9-17"),
        (day(2025, 8, 4), "9-17"),
        (day(2025, 8, 6), "-"),
    ] {
        store.upsert(d, evaluate(entry, d).unwrap()).unwrap();
    }

    let dates: Vec<NaiveDate> = store.load().unwrap().keys().cloned().collect();
    assert_eq!(
        dates,
        vec![day(2025, 8, 4), day(2025, 8, 6), day(2025, 8, 11)]
    );
}
