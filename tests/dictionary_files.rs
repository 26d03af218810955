//! Integration tests for loading dictionaries from disk.

use std::collections::BTreeMap;

use tempfile::TempDir;

use guid_words::{encode, Dictionary, DictionaryFile, GuidWordsError};

// ============================================================================
// Test Helpers
// ============================================================================

fn numbered_data() -> BTreeMap<String, String> {
    (0..=255u8)
        .map(|b| (format!("{:02x}", b), format!("n{}", b)))
        .collect()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write dictionary file");
    path
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_load_json_dictionary() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let file = DictionaryFile {
        data: numbered_data(),
        reverse: None,
    };
    let path = write_file(&dir, "words.json", &serde_json::to_string(&file).unwrap());

    let dict = Dictionary::from_path(&path).unwrap();
    assert_eq!(encode(&dict, "00ff").unwrap(), "n0 n255");
}

#[test]
fn test_load_yaml_dictionary() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let file = DictionaryFile {
        data: numbered_data(),
        reverse: None,
    };
    let path = write_file(&dir, "words.yml", &serde_yaml::to_string(&file).unwrap());

    let dict = Dictionary::from_path(&path).unwrap();
    assert_eq!(dict.lookup_byte("n16"), Some(0x10));
}

#[test]
fn test_builtin_round_trips_through_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let builtin = Dictionary::builtin().unwrap();
    let file = DictionaryFile {
        data: builtin.to_table(),
        reverse: None,
    };
    let path = write_file(&dir, "copy.json", &serde_json::to_string_pretty(&file).unwrap());

    let loaded = Dictionary::from_path(&path).unwrap();
    for (byte, word) in builtin.iter() {
        assert_eq!(loaded.word(byte), word);
    }
}

#[test]
fn test_corrupt_dictionary_fails_fast() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut data = numbered_data();
    data.insert("80".to_string(), "n1".to_string());
    let file = DictionaryFile { data, reverse: None };
    let path = write_file(&dir, "dup.json", &serde_json::to_string(&file).unwrap());

    assert!(matches!(
        Dictionary::from_path(&path),
        Err(GuidWordsError::DuplicateWord { first: 0x01, second: 0x80, .. })
    ));
}

#[test]
fn test_unknown_extension_and_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_file(&dir, "words.txt", "00 aardvark");
    assert!(matches!(
        Dictionary::from_path(&path),
        Err(GuidWordsError::UnsupportedDictionaryFormat(ext)) if ext == "txt"
    ));

    assert!(matches!(
        Dictionary::from_path(dir.path().join("absent.json")),
        Err(GuidWordsError::Io(_))
    ));
}
