//! Facade-level flows: state persistence, vector similarity, memories,
//! all sharing one store.

use engramdb::Store;

#[test]
fn one_store_serves_all_three_facades() {
    let store = Store::open("agent-session");

    store.state().save(12345, "working", b"plan=answer").unwrap();
    store.vectors().save(7, &[0.1, 0.2, 0.3], &[("source", "chat")]).unwrap();
    store.memories().add(12345, "likes rust", 0.9).unwrap();

    // Three facade tables, one database.
    let db = store.database().read();
    assert_eq!(db.table_count(), 3);
    let names: Vec<&str> = db.table_names().collect();
    assert!(names.contains(&"agent_states"));
    assert!(names.contains(&"embeddings"));
    assert!(names.contains(&"memories"));
}

#[test]
fn state_save_load_across_facade_clones() {
    let store = Store::open("clones");
    let writer = store.state();
    let reader = store.state();

    writer.save(1, "working", b"written by the first clone").unwrap();
    let snapshot = reader.load(1).unwrap().unwrap();
    assert_eq!(snapshot.data, b"written by the first clone");
}

#[test]
fn vector_hits_follow_the_placeholder_sequence() {
    let store = Store::open("ranks");
    let vectors = store.vectors();
    for id in [100u64, 200, 300] {
        vectors.save(id, &[1.0, 0.0], &[]).unwrap();
    }

    let hits = vectors.search(&[0.0, 1.0], 10).unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].id, 100);
    assert_eq!(hits[1].id, 200);
    assert_eq!(hits[2].id, 300);
    for pair in hits.windows(2) {
        assert!(pair[0].score > pair[1].score);
    }
}

#[test]
fn memories_and_state_do_not_interfere() {
    let store = Store::open("separate");

    store.memories().add(1, "memory text", 0.5).unwrap();
    store.state().save(1, "working", b"state blob").unwrap();

    // Each facade reads back only what it wrote.
    let entries = store.memories().list(1).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content, "memory text");

    let snapshot = store.state().load(1).unwrap().unwrap();
    assert_eq!(snapshot.data, b"state blob");
}
