// SPDX-License-Identifier: MPL-2.0
//! File-backed settings store using CBOR format.
//!
//! Preferences owned by the host (remember-position, skip duration) and the
//! per-media resume positions are kept in one CBOR map in the data directory,
//! separate from the user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable deployments:
//! 1. Use `open_in()` with explicit directory override
//! 2. Set `SWIPE_DECK_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::application::port::{SettingValue, SettingsStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// [`SettingsStore`] persisted as a CBOR map.
///
/// Every write rewrites the whole file. The map is small (a handful of
/// preferences plus one entry per media item ever resumed).
#[derive(Debug)]
pub struct StateFileStore {
    path: Option<PathBuf>,
    values: Mutex<BTreeMap<String, SettingValue>>,
}

impl StateFileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). A missing file is not an
    /// error; an unreadable one yields an empty store and a warning key.
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the store in a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        });

        let (values, warning) = match path.as_deref() {
            Some(path) if path.exists() => match read_map(path) {
                Ok(values) => (values, None),
                Err(warning) => {
                    tracing::warn!(path = %path.display(), warning, "state file unreadable");
                    (BTreeMap::new(), Some(warning.to_string()))
                }
            },
            Some(_) => (BTreeMap::new(), None),
            None => (BTreeMap::new(), Some("state-path-error".to_string())),
        };

        (
            Self {
                path,
                values: Mutex::new(values),
            },
            warning,
        )
    }

    /// Location of the backing file, if a data directory could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn values(&self) -> MutexGuard<'_, BTreeMap<String, SettingValue>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values().get(key).copied()
    }

    fn put(&self, key: &str, value: SettingValue) -> Result<(), StoreError> {
        let mut values = self.values();
        values.insert(key.to_string(), value);
        let Some(path) = self.path.as_deref() else {
            return Err(StoreError::Write("no data directory".to_string()));
        };
        write_map(path, &values)
    }
}

fn read_map(path: &Path) -> Result<BTreeMap<String, SettingValue>, &'static str> {
    let file = fs::File::open(path).map_err(|_| "state-read-error")?;
    ciborium::from_reader(BufReader::new(file)).map_err(|_| "state-parse-error")
}

fn write_map(path: &Path, values: &BTreeMap<String, SettingValue>) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
    }
    let file = fs::File::create(path).map_err(|e| StoreError::Write(e.to_string()))?;
    ciborium::into_writer(values, BufWriter::new(file))
        .map_err(|e| StoreError::Write(e.to_string()))
}

impl SettingsStore for StateFileStore {
    fn get_int(&self, key: &str, default: i32) -> Result<i32, StoreError> {
        SettingValue::int_or(self.get(key), key, default)
    }

    fn set_int(&self, key: &str, value: i32) -> Result<(), StoreError> {
        self.put(key, SettingValue::Int(value))
    }

    fn get_bool(&self, key: &str, default: bool) -> Result<bool, StoreError> {
        SettingValue::bool_or(self.get(key), key, default)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError> {
        self.put(key, SettingValue::Bool(value))
    }

    fn get_long(&self, key: &str, default: i64) -> Result<i64, StoreError> {
        SettingValue::long_or(self.get(key), key, default)
    }

    fn set_long(&self, key: &str, value: i64) -> Result<(), StoreError> {
        self.put(key, SettingValue::Long(value))
    }
}
