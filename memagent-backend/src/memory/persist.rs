//! Whole-file JSON persistence for memory collections.
//!
//! Every collection is one pretty-printed JSON document. Reads tolerate a
//! missing or malformed file (logged, treated as absent); writes replace
//! the whole file. Nothing here propagates an error up the stack — the
//! in-memory collection stays authoritative when a write fails.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Create the memory root (and parents) if absent. Idempotent.
pub fn ensure_dir(root: &Path) -> bool {
    if let Err(e) = fs::create_dir_all(root) {
        log::error!("Failed to create memory directory {}: {}", root.display(), e);
        return false;
    }
    true
}

fn collection_path(root: &Path, name: &str) -> PathBuf {
    root.join(name)
}

/// Load a collection file. A missing file is not an error; unreadable or
/// malformed content is logged and also reported as absent.
pub fn load_collection<T: DeserializeOwned>(root: &Path, name: &str) -> Option<T> {
    let path = collection_path(root, name);
    if !path.exists() {
        return None;
    }

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Malformed JSON in {}: {}", path.display(), e);
            None
        }
    }
}

/// Rewrite a collection file as indented JSON. Returns false (after
/// logging) when serialization or the write fails.
pub fn save_collection<T: Serialize>(root: &Path, name: &str, value: &T) -> bool {
    let path = collection_path(root, name);

    let json = match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize {}: {}", name, e);
            return false;
        }
    };

    if let Err(e) = fs::write(&path, json) {
        log::error!("Failed to write {}: {}", path.display(), e);
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<Vec<String>> = load_collection(dir.path(), "missing.json");
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let loaded: Option<Vec<String>> = load_collection(dir.path(), "bad.json");
        assert!(loaded.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let value = vec!["a".to_string(), "b".to_string()];
        assert!(save_collection(dir.path(), "list.json", &value));
        let loaded: Option<Vec<String>> = load_collection(dir.path(), "list.json");
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn saved_files_are_indented() {
        let dir = tempfile::tempdir().unwrap();
        save_collection(dir.path(), "list.json", &vec![1, 2]);
        let raw = fs::read_to_string(dir.path().join("list.json")).unwrap();
        assert!(raw.contains("\n  1,"));
    }
}
