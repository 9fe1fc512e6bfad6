use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::storage::Storage;

/// On-disk layout of the storage file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StorageFile {
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,

    #[serde(default)]
    storages: Map<String, Value>,
}

/// Loads and flushes [`Storage`] values to a single JSON file, keyed by name
pub struct StorageManager {
    path: PathBuf,
    file: StorageFile,
}

impl StorageManager {
    /// Open the storage file at `path`.
    ///
    /// A missing file starts empty. A file that cannot be parsed is logged and
    /// replaced on the next flush.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            info!("Storage file not found, starting empty at {:?}", path);
            return Ok(Self {
                path,
                file: StorageFile::default(),
            });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage file {:?}", path))?;

        let file = match serde_json::from_str::<StorageFile>(&contents) {
            Ok(file) => file,
            Err(e) => {
                warn!("Storage file {:?} is corrupt ({}), starting empty", path, e);
                StorageFile::default()
            }
        };

        info!(
            "Loaded {} storage entries from {:?}",
            file.storages.len(),
            path
        );
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Time of the last successful flush, as recorded in the file
    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.file.saved_at
    }

    /// Restore the storage saved under `key`, or a default one
    pub fn restore<T>(&self, key: &str) -> Storage<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(value) = self.file.storages.get(key) else {
            debug!("No saved value for storage {}", key);
            return Storage::default();
        };

        match serde_json::from_value::<T>(value.clone()) {
            Ok(value) => Storage::new(value),
            Err(e) => {
                warn!("Saved value for storage {} is invalid ({}), using default", key, e);
                Storage::default()
            }
        }
    }

    /// Write `storage` to disk under `key` if it was touched.
    ///
    /// Returns whether a write happened.
    pub fn flush<T: Serialize>(&mut self, key: &str, storage: &mut Storage<T>) -> Result<bool> {
        if !storage.is_dirty() {
            return Ok(false);
        }

        let value = serde_json::to_value(storage.get())
            .with_context(|| format!("Failed to serialize storage {}", key))?;
        self.file.storages.insert(key.to_string(), value);
        self.write()?;

        storage.mark_clean();
        debug!("Flushed storage {}", key);
        Ok(true)
    }

    fn write(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create storage directory")?;
        }

        self.file.saved_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(&self.file)
            .context("Failed to serialize storage file")?;

        fs::write(&self.path, json).context("Failed to write storage file")?;

        info!("Saved storage to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const KEY: &str = "test.presets";

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let manager = StorageManager::open(dir.path().join("storage.json")).unwrap();

        let storage: Storage<BTreeMap<i32, String>> = manager.restore(KEY);
        assert!(storage.get().is_empty());
        assert!(manager.saved_at().is_none());
    }

    #[test]
    fn test_flush_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut manager = StorageManager::open(&path).unwrap();
        assert_eq!(manager.path(), path.as_path());
        let mut storage: Storage<BTreeMap<i32, String>> = manager.restore(KEY);

        // Nothing touched yet
        assert!(!manager.flush(KEY, &mut storage).unwrap());
        assert!(!path.exists());

        storage.get_mut().insert(3, "type:helmet".to_string());
        storage.get_mut().insert(1, "tier:mythic".to_string());
        storage.touched();
        assert!(manager.flush(KEY, &mut storage).unwrap());
        assert!(!storage.is_dirty());
        assert!(manager.saved_at().is_some());

        let reopened = StorageManager::open(&path).unwrap();
        let restored: Storage<BTreeMap<i32, String>> = reopened.restore(KEY);
        let entries: Vec<_> = restored.get().iter().collect();
        assert_eq!(
            entries,
            vec![
                (&1, &"tier:mythic".to_string()),
                (&3, &"type:helmet".to_string())
            ]
        );
    }

    #[test]
    fn test_corrupt_file_replaced_on_flush() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let mut manager = StorageManager::open(&path).unwrap();
        let mut storage: Storage<BTreeMap<i32, String>> = manager.restore(KEY);
        assert!(storage.get().is_empty());

        storage.get_mut().insert(2, "type:wand".to_string());
        storage.touched();
        assert!(manager.flush(KEY, &mut storage).unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<Value>(&contents).is_ok());

        let reopened = StorageManager::open(&path).unwrap();
        let restored: Storage<BTreeMap<i32, String>> = reopened.restore(KEY);
        assert_eq!(restored.get().get(&2).map(String::as_str), Some("type:wand"));
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut manager = StorageManager::open(&path).unwrap();
        let mut storage: Storage<BTreeMap<i32, String>> = manager.restore(KEY);
        storage.get_mut().insert(1, "tier:rare".to_string());
        storage.touched();
        manager.flush(KEY, &mut storage).unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json["saved_at"].is_string());
        assert_eq!(json["storages"][KEY]["1"], "tier:rare");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_value_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"storages":{"test.presets":[1,2,3]}}"#).unwrap();

        let manager = StorageManager::open(&path).unwrap();
        let storage: Storage<BTreeMap<i32, String>> = manager.restore(KEY);
        assert!(storage.get().is_empty());
    }
}
