mod common;
use common::{filled_store, setup_test_db};
use emchecklist::core::draft::{DRAFT_KEY, load_draft, store_draft};
use emchecklist::core::persist::{self, KeyValueStore, MemoryStore};
use emchecklist::core::store::FormStore;
use emchecklist::db::pool::DbPool;
use emchecklist::errors::AppError;
use emchecklist::models::catalog;
use emchecklist::models::entry::{ChecklistEntry, Shift};
use emchecklist::models::reading::{Group, Measure};

#[test]
fn test_save_then_load_round_trip() {
    let mut store = MemoryStore::new();
    let mut form = filled_store();
    form.set_remark("gf-ups", "fan noise").unwrap();

    let key = persist::save(&mut store, form.entry()).unwrap();
    assert_eq!(key, "checklist-2025-09-01-A");

    let loaded = persist::load(&mut store, "2025-09-01", Some(Shift::A)).unwrap();
    assert_eq!(&loaded, form.entry());
}

#[test]
fn test_save_without_date_writes_nothing() {
    let mut store = MemoryStore::new();
    let mut form = filled_store();
    form.set_date("");

    let err = persist::save(&mut store, form.entry()).unwrap_err();
    assert!(matches!(err, AppError::MissingField("a date")));
    assert!(store.keys_with_prefix("").unwrap().is_empty());
}

#[test]
fn test_save_without_shift_writes_nothing() {
    let mut store = MemoryStore::new();
    let mut form = filled_store();
    form.set_shift(None);

    let err = persist::save(&mut store, form.entry()).unwrap_err();
    assert!(matches!(err, AppError::MissingField("a shift")));
    assert!(store.keys_with_prefix("").unwrap().is_empty());
}

#[test]
fn test_load_requires_date_and_shift() {
    let mut store = MemoryStore::new();
    assert!(matches!(
        persist::load(&mut store, "", Some(Shift::A)),
        Err(AppError::MissingField(_))
    ));
    assert!(matches!(
        persist::load(&mut store, "2025-09-01", None),
        Err(AppError::MissingField(_))
    ));
}

#[test]
fn test_load_missing_key_reports_no_data() {
    let mut store = MemoryStore::new();
    let err = persist::load(&mut store, "2025-09-01", Some(Shift::B)).unwrap_err();
    assert!(matches!(err, AppError::NoDataFound(_)));
    assert!(err.to_string().starts_with("No data found"));
}

#[test]
fn test_second_save_overwrites_first() {
    let mut store = MemoryStore::new();

    let mut first = FormStore::new();
    first.set_date("2025-09-01");
    first.set_shift(Some(Shift::C));
    first.set_remark("l1-network", "first").unwrap();
    persist::save(&mut store, first.entry()).unwrap();

    let mut second = first.clone();
    second.set_remark("l1-network", "second").unwrap();
    second.set_reading("l1-network", Group::Group1, Measure::Temp, "21").unwrap();
    persist::save(&mut store, second.entry()).unwrap();

    assert_eq!(store.keys_with_prefix("").unwrap().len(), 1);
    let loaded = persist::load(&mut store, "2025-09-01", Some(Shift::C)).unwrap();
    assert_eq!(&loaded, second.entry());
}

#[test]
fn test_snapshot_with_missing_and_unknown_fields() {
    let mut store = MemoryStore::new();
    // older layout: no primary water block, one row by name only, one row
    // for a location that no longer exists, plus an extra top-level field
    let raw = r#"{
        "date": "2024-12-31",
        "shift": "B",
        "operator": "someone",
        "readings": [
            { "location": "Pump Room", "group1": { "temp": "19" }, "remark": "ok" },
            { "location": "Old Boiler Room", "group1": { "temp": "60" } }
        ]
    }"#;
    store.put("checklist-2024-12-31-B", raw).unwrap();

    let loaded = persist::load(&mut store, "2024-12-31", Some(Shift::B)).unwrap();

    assert_eq!(loaded.readings.len(), catalog::location_count());
    assert!(loaded.primary_water.chilled_water_supply.reading1.is_empty());

    let pos = catalog::position_of("b-pump-room").unwrap();
    let row = &loaded.readings[pos];
    assert_eq!(row.id, "b-pump-room");
    assert_eq!(row.group1.temp, "19");
    assert!(row.group1.rh.is_empty());
    assert_eq!(row.remark, "ok");

    let filled = loaded
        .readings
        .iter()
        .filter(|r| !r.group1.temp.is_empty())
        .count();
    assert_eq!(filled, 1);
}

#[test]
fn test_saved_entries_excludes_draft() {
    let mut store = MemoryStore::new();
    store_draft(&mut store, &filled_store()).unwrap();
    persist::save(&mut store, filled_store().entry()).unwrap();

    let keys = persist::saved_entries(&mut store).unwrap();
    assert_eq!(keys, vec!["checklist-2025-09-01-A".to_string()]);
    assert!(store.get(DRAFT_KEY).unwrap().is_some());
}

#[test]
fn test_draft_defaults_to_fresh_form() {
    let mut store = MemoryStore::new();
    let form = load_draft(&mut store).unwrap();
    assert_eq!(form.entry(), &ChecklistEntry::fresh());
}

#[test]
fn test_sqlite_store_round_trip_and_overwrite() {
    let db_path = setup_test_db("persistence_sqlite_round_trip");
    let mut pool = DbPool::new(&db_path).expect("open db");

    let form = filled_store();
    persist::save(&mut pool, form.entry()).unwrap();

    let mut changed = form.clone();
    changed.set_remark("r-cooling-tower", "drift eliminator damaged").unwrap();
    persist::save(&mut pool, changed.entry()).unwrap();

    let loaded = persist::load(&mut pool, "2025-09-01", Some(Shift::A)).unwrap();
    assert_eq!(&loaded, changed.entry());
    assert_eq!(
        persist::saved_entries(&mut pool).unwrap(),
        vec!["checklist-2025-09-01-A".to_string()]
    );

    store_draft(&mut pool, &changed).unwrap();
    drop(pool);

    let mut reopened = DbPool::new(&db_path).expect("reopen db");
    let draft = load_draft(&mut reopened).unwrap();
    assert_eq!(draft, changed);
}
