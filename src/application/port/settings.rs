// SPDX-License-Identifier: MPL-2.0
//! Key-value settings port definition.
//!
//! This module defines the [`SettingsStore`] trait through which the control
//! surface reads preferences and persists playback positions. One store is
//! created at startup and handed to every component that needs it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Errors that can occur while reading or writing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing storage could not be read.
    Read(String),
    /// The backing storage could not be written.
    Write(String),
    /// A stored value has an unexpected type.
    TypeMismatch {
        /// Key holding the value.
        key: String,
    },
}

impl StoreError {
    fn mismatch(key: &str) -> Self {
        StoreError::TypeMismatch {
            key: key.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Read(msg) => write!(f, "Settings read failed: {msg}"),
            StoreError::Write(msg) => write!(f, "Settings write failed: {msg}"),
            StoreError::TypeMismatch { key } => write!(f, "Unexpected value type for '{key}'"),
        }
    }
}

impl std::error::Error for StoreError {}

/// A single stored scalar, as kept by the bundled store adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingValue {
    Int(i32),
    Bool(bool),
    Long(i64),
}

impl SettingValue {
    /// Reads `stored` as an int, `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TypeMismatch`] if another type is stored.
    pub fn int_or(stored: Option<Self>, key: &str, default: i32) -> Result<i32, StoreError> {
        match stored {
            None => Ok(default),
            Some(SettingValue::Int(v)) => Ok(v),
            Some(_) => Err(StoreError::mismatch(key)),
        }
    }

    /// Reads `stored` as a bool, `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TypeMismatch`] if another type is stored.
    pub fn bool_or(stored: Option<Self>, key: &str, default: bool) -> Result<bool, StoreError> {
        match stored {
            None => Ok(default),
            Some(SettingValue::Bool(v)) => Ok(v),
            Some(_) => Err(StoreError::mismatch(key)),
        }
    }

    /// Reads `stored` as a long, `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TypeMismatch`] if another type is stored.
    pub fn long_or(stored: Option<Self>, key: &str, default: i64) -> Result<i64, StoreError> {
        match stored {
            None => Ok(default),
            Some(SettingValue::Long(v)) => Ok(v),
            Some(_) => Err(StoreError::mismatch(key)),
        }
    }
}

/// Port for persistent scalar key-value settings.
///
/// Getters return `default` when the key is absent. Methods take `&self`;
/// implementations synchronize internally so one store can be shared.
pub trait SettingsStore: Send + Sync {
    /// Reads a 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the storage cannot be read.
    fn get_int(&self, key: &str, default: i32) -> Result<i32, StoreError>;

    /// Writes a 32-bit integer.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the storage cannot be written.
    fn set_int(&self, key: &str, value: i32) -> Result<(), StoreError>;

    /// Reads a boolean.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the storage cannot be read.
    fn get_bool(&self, key: &str, default: bool) -> Result<bool, StoreError>;

    /// Writes a boolean.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the storage cannot be written.
    fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError>;

    /// Reads a 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the storage cannot be read.
    fn get_long(&self, key: &str, default: i64) -> Result<i64, StoreError>;

    /// Writes a 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the storage cannot be written.
    fn set_long(&self, key: &str, value: i64) -> Result<(), StoreError>;
}

/// Shared handle to the settings store.
pub type SharedSettings = Arc<dyn SettingsStore>;
