//! Engine-level contracts through the public re-exports.

use engramdb::{Database, EngramError, Record, Status, VectorRecord};

#[test]
fn table_lifecycle_and_name_uniqueness() {
    let mut db = Database::open("/data/agents.db");
    assert_eq!(db.table_count(), 0);

    let first = db.create_table("memories").unwrap();
    let second = db.create_table("memories");
    assert!(matches!(second, Err(EngramError::AlreadyExists { .. })));

    // Opening resolves to the same table the create returned.
    let opened = db.open_table("memories").unwrap();
    assert_eq!(first, opened);

    // Nonexistent table is NotFound; mapped to status code 1.
    let missing = db.open_table("missing");
    assert_eq!(Status::from_result(&missing).code(), 1);
}

#[test]
fn scan_of_existing_but_empty_table_is_zero_result_success() {
    let mut db = Database::open("empty");
    let table_id = db.create_table("memories").unwrap();

    let results = db.table(table_id).unwrap().scan_search("query").unwrap();
    assert_eq!(results.len(), 0);
}

#[test]
fn full_scan_scenario_from_the_storage_contract() {
    // create table "memories"; insert three records; set agent_id on the
    // first two; scan returns 3 results with score 1.0 and the field
    // reads back exactly.
    let mut db = Database::open("scenario");
    let table_id = db.create_table("memories").unwrap();
    let table = db.table_mut(table_id).unwrap();

    for _ in 0..3 {
        table.insert_raw(b"undecoded payload");
    }
    table.record_mut(0).unwrap().set_field_u64("agent_id", 12345).unwrap();
    table.record_mut(1).unwrap().set_field_u64("agent_id", 54321).unwrap();

    let results = db.table(table_id).unwrap().scan_search("query").unwrap();
    assert_eq!(results.len(), 3);
    for result in &results {
        assert!((result.score - 1.0).abs() < f32::EPSILON);
    }
    let record0 = results[0].record.as_ref().unwrap();
    assert_eq!(record0.get_field_u64("agent_id").unwrap(), 12345);
}

#[test]
fn full_vector_scenario_from_the_storage_contract() {
    // vector record id=7, vector=[0.1,0.2,0.3]; limit=1 returns exactly
    // one result with id=7 and score=0.9.
    let mut db = Database::open("scenario");
    let table_id = db.create_table("embeddings").unwrap();

    let mut vr = VectorRecord::new(7);
    vr.set_vector(&[0.1, 0.2, 0.3]);
    db.table_mut(table_id).unwrap().insert_vector_record(vr);

    let results = db
        .table(table_id)
        .unwrap()
        .vector_search(&[0.0, 0.0, 1.0], 1)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 7);
    assert!((results[0].score - 0.9).abs() < 1e-6);
    assert!(results[0].record.is_none());
}

#[test]
fn typed_field_round_trips_with_exact_lengths() {
    let mut record = Record::new();
    record.set_field_u64("u", u64::MAX).unwrap();
    record.set_field_i64("i", i64::MIN).unwrap();
    record.set_field_string("s", "ünïcødé").unwrap();
    record.set_field_binary("b", &[0, 1, 2, 3, 4]).unwrap();

    assert_eq!(record.get_field_u64("u").unwrap(), u64::MAX);
    assert_eq!(record.get_field_i64("i").unwrap(), i64::MIN);

    let s = record.get_field_string("s").unwrap();
    assert_eq!(s, "ünïcødé");
    assert_eq!(record.get_field_binary("s").unwrap().len(), s.len());

    let b = record.get_field_binary("b").unwrap();
    assert_eq!(b, &[0, 1, 2, 3, 4]);
    assert_eq!(b.len(), 5);
}

#[test]
fn duplicate_field_insertion_shadows_without_overwriting() {
    let mut record = Record::new();
    record.set_field_string("tag", "first").unwrap();
    record.set_field_string("tag", "second").unwrap();

    assert_eq!(record.get_field_string("tag").unwrap(), "first");
    assert_eq!(record.field_count(), 2);
}

#[test]
fn handles_reference_tables_in_place() {
    let mut db = Database::open("handles");
    let by_create = db.create_table("shared").unwrap();
    let by_open = db.open_table("shared").unwrap();

    db.table_mut(by_create).unwrap().insert_record(Record::new());
    db.table_mut(by_open).unwrap().insert_record(Record::new());

    // Both handles reach the same storage: no copy-on-open.
    assert_eq!(db.table(by_create).unwrap().len(), 2);
    assert_eq!(db.table(by_open).unwrap().len(), 2);
}

#[test]
fn status_boundary_splits_no_data_from_failure() {
    let mut db = Database::open("status");

    let dup = db.create_table("t").and_then(|_| db.create_table("t"));
    assert_eq!(Status::from_result(&dup).code(), -1);

    let missing = db.open_table("absent");
    assert_eq!(Status::from_result(&missing).code(), 1);

    let ok = db.open_table("t");
    assert_eq!(Status::from_result(&ok).code(), 0);
}
