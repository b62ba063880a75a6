use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::StoreError;

/// Key holding the `{ "identifier": ... }` record of the signed-in user.
pub const USER_RECORD_KEY: &str = "user-record";

/// Key holding the chat transcript.
pub const MESSAGE_LOG_KEY: &str = "message-log";

/// Key holding the media gallery listing.
pub const MEDIA_INDEX_KEY: &str = "media-index";

/// A process-independent string store that survives restarts.
///
/// Values are JSON documents; the typed `load`/`save` helpers on
/// `dyn KeyValueStore` do the (de)serialization.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a key that does not exist is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

impl dyn KeyValueStore {
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::InvalidValue {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(value).map_err(|source| StoreError::InvalidValue {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw)
    }
}

/// Remove the chat transcript and media listing wholesale.
/// The signed-in user record is left alone.
pub fn clear_app_data(store: &dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(MESSAGE_LOG_KEY)?;
    store.remove(MEDIA_INDEX_KEY)?;
    debug!("Cleared message log and media index");
    Ok(())
}

// ============================================================================
// File-backed store
// ============================================================================

pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&data_dir).map_err(|e| StoreError::io(&data_dir, e))?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        // Write then rename so a crash never leaves a half-written record.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| StoreError::io(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store: SharedStore = Arc::new(FileStore::new(dir.path().to_path_buf()).unwrap());
            store.save("note", &Note { text: "hi".into() }).unwrap();
        }
        let reopened: SharedStore = Arc::new(FileStore::new(dir.path().to_path_buf()).unwrap());
        let note: Option<Note> = reopened.load("note").unwrap();
        assert_eq!(note, Some(Note { text: "hi".into() }));
    }

    #[test]
    fn test_file_store_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::new(nested.clone()).unwrap();
        assert_eq!(store.data_dir(), nested.as_path());
        assert!(nested.is_dir());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert!(store.remove("never-written").is_ok());
        assert!(MemoryStore::new().remove("never-written").is_ok());
    }

    #[test]
    fn test_load_malformed_value_is_error() {
        let store = MemoryStore::shared();
        store.set("note", "{not json").unwrap();
        let result: Result<Option<Note>, _> = store.load("note");
        assert!(matches!(result, Err(StoreError::InvalidValue { .. })));
    }

    #[test]
    fn test_clear_app_data_keeps_user_record() {
        let store = MemoryStore::shared();
        store.set(USER_RECORD_KEY, r#"{"identifier":"Banku"}"#).unwrap();
        store.set(MESSAGE_LOG_KEY, "[]").unwrap();
        store.set(MEDIA_INDEX_KEY, "[]").unwrap();

        clear_app_data(store.as_ref()).unwrap();

        assert!(store.get(USER_RECORD_KEY).unwrap().is_some());
        assert!(store.get(MESSAGE_LOG_KEY).unwrap().is_none());
        assert!(store.get(MEDIA_INDEX_KEY).unwrap().is_none());
    }
}
