//! Engine integration tests.
//!
//! These exercise the full containment chain end to end:
//! database -> table -> record / vector record -> search result sets.

use engram_engine::{Database, Record, VectorRecord};
use proptest::prelude::*;

/// Scenario: three records in "memories", agent ids on the first two,
/// whole-table scan returns all three with the placeholder score.
#[test]
fn scan_scenario_three_records() {
    let mut db = Database::open("scenario");
    let table_id = db.create_table("memories").unwrap();
    let table = db.table_mut(table_id).unwrap();

    for _ in 0..3 {
        table.insert_record(Record::new());
    }
    table
        .record_mut(0)
        .unwrap()
        .set_field_u64("agent_id", 12345)
        .unwrap();
    table
        .record_mut(1)
        .unwrap()
        .set_field_u64("agent_id", 54321)
        .unwrap();

    let results = db.table(table_id).unwrap().scan_search("query").unwrap();
    assert_eq!(results.len(), 3);
    for result in &results {
        assert!((result.score - 1.0).abs() < f32::EPSILON);
        assert!(result.record.is_some());
    }
    assert_eq!(
        results[0]
            .record
            .as_ref()
            .unwrap()
            .get_field_u64("agent_id")
            .unwrap(),
        12345
    );
    assert_eq!(
        results[1]
            .record
            .as_ref()
            .unwrap()
            .get_field_u64("agent_id")
            .unwrap(),
        54321
    );
    // Record 2 never had the field set.
    assert!(results[2]
        .record
        .as_ref()
        .unwrap()
        .get_field_u64("agent_id")
        .unwrap_err()
        .is_not_found());
}

/// Scenario: vector record id=7 with [0.1, 0.2, 0.3]; limit=1 search
/// returns exactly that id with the placeholder score 0.9.
#[test]
fn vector_scenario_single_hit() {
    let mut db = Database::open("scenario");
    let table_id = db.create_table("embeddings").unwrap();

    let mut vr = VectorRecord::new(7);
    vr.set_vector(&[0.1, 0.2, 0.3]);
    db.table_mut(table_id).unwrap().insert_vector_record(vr);

    let results = db
        .table(table_id)
        .unwrap()
        .vector_search(&[0.9, 0.9, 0.9], 1)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 7);
    assert!((results[0].score - 0.9).abs() < 1e-6);
    assert!(results[0].record.is_none());
}

#[test]
fn tables_hold_both_record_kinds_without_cross_referencing() {
    let mut db = Database::open("mixed");
    let table_id = db.create_table("both").unwrap();
    let table = db.table_mut(table_id).unwrap();

    let mut record = Record::new();
    record.set_field_string("kind", "plain").unwrap();
    table.insert_record(record);

    let mut vr = VectorRecord::new(42);
    vr.set_vector(&[1.0, 0.0]);
    vr.set_metadata("source", "test").unwrap();
    table.insert_vector_record(vr);

    let table = db.table(table_id).unwrap();
    assert_eq!(table.scan_search("q").unwrap().len(), 1);
    let hits = table.vector_search(&[0.0, 1.0], 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 42);
}

#[test]
fn dropping_a_result_set_leaves_the_table_usable() {
    let mut db = Database::open("drop");
    let table_id = db.create_table("t").unwrap();
    let table = db.table_mut(table_id).unwrap();
    for _ in 0..5 {
        table.insert_raw(b"payload");
    }

    let results = db.table(table_id).unwrap().scan_search("q").unwrap();
    assert_eq!(results.len(), 5);
    drop(results);

    // The table still owns its records and can be scanned again.
    let again = db.table(table_id).unwrap().scan_search("q").unwrap();
    assert_eq!(again.len(), 5);
}

proptest! {
    /// len(results) == min(limit, stored_vector_count), for any limit and
    /// any query content.
    #[test]
    fn prop_vector_search_count_law(
        stored in 0usize..40,
        limit in 0usize..60,
        query in proptest::collection::vec(-1e3f32..1e3, 1..8),
    ) {
        let mut db = Database::open("prop");
        let table_id = db.create_table("v").unwrap();
        let table = db.table_mut(table_id).unwrap();
        for id in 0..stored {
            table.insert_vector_record(VectorRecord::new(id as u64));
        }

        let results = db.table(table_id).unwrap().vector_search(&query, limit).unwrap();
        prop_assert_eq!(results.len(), stored.min(limit));

        // Scores are strictly decreasing by the fixed step.
        for (i, result) in results.iter().enumerate() {
            let expected = 0.9 - i as f32 * 0.1;
            prop_assert!((result.score - expected).abs() < 1e-5);
        }
    }

    /// len(results) == len(records) for scans, since the query is ignored.
    #[test]
    fn prop_scan_count_law(stored in 0usize..50, query in ".{0,16}") {
        let mut db = Database::open("prop");
        let table_id = db.create_table("r").unwrap();
        let table = db.table_mut(table_id).unwrap();
        for _ in 0..stored {
            table.insert_record(Record::new());
        }

        let results = db.table(table_id).unwrap().scan_search(&query).unwrap();
        prop_assert_eq!(results.len(), stored);
    }
}
