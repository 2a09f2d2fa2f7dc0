#![cfg(feature = "serde")]

//! Integration tests for serde support in dualmap.
//!
//! These tests verify that dictionaries persist as ordered record sequences
//! and honor the save/load contract across serde formats.

use dualmap::{Entry, SynchronizedDictionary};
use rstest::rstest;

// =============================================================================
// Entry
// =============================================================================

#[rstest]
fn test_entry_json_shape() {
    let entry = Entry::new("speed".to_string(), 3);
    assert_eq!(
        serde_json::to_string(&entry).unwrap(),
        r#"{"key":"speed","value":3}"#
    );

    let restored: Entry<String, i32> = serde_json::from_str(r#"{"key":"speed","value":3}"#).unwrap();
    assert_eq!(restored, entry);
}

// =============================================================================
// SynchronizedDictionary
// =============================================================================

#[rstest]
fn test_dictionary_json_roundtrip() {
    let dictionary: SynchronizedDictionary<String, i32> = (1..=20)
        .map(|index| (format!("key{index}"), index))
        .collect();

    let json = serde_json::to_string(&dictionary).unwrap();
    let restored: SynchronizedDictionary<String, i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(dictionary, restored);
    assert_eq!(restored.records().len(), 20);
}

#[rstest]
fn test_serialization_does_not_mutate_records() {
    let mut dictionary: SynchronizedDictionary<String, i32> = SynchronizedDictionary::new();
    dictionary.set("a".to_string(), 1);

    let _ = serde_json::to_string(&dictionary).unwrap();

    assert!(dictionary.records().is_empty());
}

#[rstest]
fn test_duplicate_records_survive_a_save_load_cycle() {
    let json = r#"[{"key":"a","value":1},{"key":"b","value":2},{"key":"a","value":3}]"#;

    let loaded: SynchronizedDictionary<String, i32> = serde_json::from_str(json).unwrap();
    let saved = serde_json::to_string(&loaded).unwrap();

    assert!(loaded.is_empty());
    assert!(loaded.has_duplicate_keys());
    assert_eq!(saved, json);
}

#[rstest]
fn test_fixed_duplicate_reloads_after_edit() {
    let json = r#"[{"key":"a","value":1},{"key":"a","value":3}]"#;
    let mut loaded: SynchronizedDictionary<String, i32> = serde_json::from_str(json).unwrap();

    loaded.records_mut()[1].key = "c".to_string();
    loaded.reload().unwrap();

    assert_eq!(loaded.get("a"), Ok(&1));
    assert_eq!(loaded.get("c"), Ok(&3));
}

#[rstest]
fn test_nested_dictionaries_roundtrip() {
    let mut inner: SynchronizedDictionary<String, i32> = SynchronizedDictionary::new();
    inner.set("x".to_string(), 1);
    let mut outer: SynchronizedDictionary<String, SynchronizedDictionary<String, i32>> =
        SynchronizedDictionary::new();
    outer.set("inner".to_string(), inner);

    let json = serde_json::to_string(&outer).unwrap();
    let restored: SynchronizedDictionary<String, SynchronizedDictionary<String, i32>> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(restored.get("inner").and_then(|map| map.get("x")), Ok(&1));
}
