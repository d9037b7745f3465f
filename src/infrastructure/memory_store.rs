// SPDX-License-Identifier: MPL-2.0
//! In-memory adapter implementing the [`SettingsStore`] port.
//!
//! Backs tests and dry runs of the trace player. Nothing survives the process.

use crate::application::port::{SettingValue, SettingsStore, StoreError};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Volatile key-value settings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, SettingValue>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Whether `key` has a stored value of any type.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values().contains_key(key)
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, SettingValue>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values().get(key).copied()
    }

    fn put(&self, key: &str, value: SettingValue) {
        self.values().insert(key.to_string(), value);
    }
}

impl SettingsStore for MemoryStore {
    fn get_int(&self, key: &str, default: i32) -> Result<i32, StoreError> {
        SettingValue::int_or(self.get(key), key, default)
    }

    fn set_int(&self, key: &str, value: i32) -> Result<(), StoreError> {
        self.put(key, SettingValue::Int(value));
        Ok(())
    }

    fn get_bool(&self, key: &str, default: bool) -> Result<bool, StoreError> {
        SettingValue::bool_or(self.get(key), key, default)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError> {
        self.put(key, SettingValue::Bool(value));
        Ok(())
    }

    fn get_long(&self, key: &str, default: i64) -> Result<i64, StoreError> {
        SettingValue::long_or(self.get(key), key, default)
    }

    fn set_long(&self, key: &str, value: i64) -> Result<(), StoreError> {
        self.put(key, SettingValue::Long(value));
        Ok(())
    }
}
