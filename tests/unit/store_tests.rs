use notary::domain::fingerprint;
use notary::infrastructure::{InMemoryRecordStore, RecordStore, SqliteRecordStore, StoreError};
use std::sync::Barrier;

fn stores() -> Vec<(&'static str, Box<dyn RecordStore>)> {
    vec![
        ("memory", Box::new(InMemoryRecordStore::new()) as Box<dyn RecordStore>),
        ("sqlite", Box::new(SqliteRecordStore::new_in_memory().unwrap())),
    ]
}

#[test]
fn test_lookup_absent_is_none() {
    for (name, store) in stores() {
        let found = store.lookup(&fingerprint(b"never submitted")).unwrap();
        assert!(found.is_none(), "{name}");
    }
}

#[test]
fn test_insert_then_lookup() {
    for (name, store) in stores() {
        let fp = fingerprint(b"test content");
        let inserted = store.try_insert(fp, "0x123", 100).unwrap();

        let found = store.lookup(&fp).unwrap().expect(name);
        assert_eq!(found, inserted, "{name}");
        assert_eq!(found.submitter, "0x123");
        assert_eq!(found.recorded_at, 100);
    }
}

#[test]
fn test_duplicate_returns_existing_record_unchanged() {
    for (name, store) in stores() {
        let fp = fingerprint(b"same content");
        let first = store.try_insert(fp, "0x111", 100).unwrap();

        match store.try_insert(fp, "0x222", 200) {
            Err(StoreError::AlreadyExists(existing)) => assert_eq!(*existing, first, "{name}"),
            other => panic!("{name}: expected AlreadyExists, got {other:?}"),
        }

        let stored = store.lookup(&fp).unwrap().unwrap();
        assert_eq!(stored.submitter, "0x111", "{name}");
        assert_eq!(stored.recorded_at, 100, "{name}");
    }
}

#[test]
fn test_count() {
    for (name, store) in stores() {
        assert_eq!(store.count().unwrap(), 0, "{name}");

        store.try_insert(fingerprint(b"content 1"), "0x123", 1).unwrap();
        store.try_insert(fingerprint(b"content 2"), "0x456", 2).unwrap();
        let _ = store.try_insert(fingerprint(b"content 1"), "0x789", 3);

        assert_eq!(store.count().unwrap(), 2, "{name}");
    }
}

#[test]
fn test_sqlite_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notary.db");
    let path = path.to_str().unwrap();
    let fp = fingerprint(b"durable");

    {
        let store = SqliteRecordStore::new(path).unwrap();
        store.try_insert(fp, "0xabc", 42).unwrap();
    }

    let reopened = SqliteRecordStore::new(path).unwrap();
    let found = reopened.lookup(&fp).unwrap().unwrap();
    assert_eq!(found.submitter, "0xabc");
    assert_eq!(found.recorded_at, 42);
    assert!(matches!(
        reopened.try_insert(fp, "0xdef", 43),
        Err(StoreError::AlreadyExists(_))
    ));
}

#[test]
fn test_concurrent_inserts_same_fingerprint_single_winner() {
    const WRITERS: usize = 16;

    for (name, store) in stores() {
        let fp = fingerprint(b"contested");
        let barrier = Barrier::new(WRITERS);

        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..WRITERS)
                .map(|i| {
                    let store = &store;
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        store.try_insert(fp, &format!("0x{i}"), i as i64)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winners: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1, "{name}");
        let winner = winners[0];

        for result in &results {
            match result {
                Ok(_) => {}
                Err(StoreError::AlreadyExists(existing)) => assert_eq!(**existing, *winner),
                Err(e) => panic!("{name}: unexpected error {e}"),
            }
        }
        assert_eq!(store.count().unwrap(), 1, "{name}");
    }
}

#[test]
fn test_concurrent_inserts_distinct_fingerprints_all_succeed() {
    const WRITERS: usize = 16;
    let store = InMemoryRecordStore::new();

    std::thread::scope(|s| {
        for i in 0..WRITERS {
            let store = &store;
            s.spawn(move || {
                let content = format!("document {i}");
                store
                    .try_insert(fingerprint(content.as_bytes()), "0x123", i as i64)
                    .unwrap();
            });
        }
    });

    assert_eq!(store.count().unwrap(), WRITERS);
}
