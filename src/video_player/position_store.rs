// SPDX-License-Identifier: MPL-2.0
//! Per-media resume positions.
//!
//! Positions are stored under `lastPosition_<hash>` in the shared settings
//! store and gated by the `RememberPosition` preference. Store failures never
//! reach the caller: reads fall back to the start of the media, writes are
//! dropped with a warning.

use crate::application::port::SharedSettings;
use crate::config::{DEFAULT_REMEMBER_POSITION, KEY_LAST_POSITION_PREFIX, KEY_REMEMBER_POSITION};
use crate::domain::media::MediaLocator;

#[derive(Clone)]
pub struct PositionStore {
    settings: SharedSettings,
}

impl PositionStore {
    #[must_use]
    pub fn new(settings: SharedSettings) -> Self {
        Self { settings }
    }

    /// Settings key for `locator`.
    #[must_use]
    pub fn key(locator: &MediaLocator) -> String {
        format!("{KEY_LAST_POSITION_PREFIX}{}", locator.stable_hash())
    }

    /// Whether the remember-position preference is on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.settings
            .get_bool(KEY_REMEMBER_POSITION, DEFAULT_REMEMBER_POSITION)
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "reading remember-position failed");
                DEFAULT_REMEMBER_POSITION
            })
    }

    /// Returns where playback of `locator` should start.
    #[must_use]
    pub fn load(&self, locator: &MediaLocator) -> u64 {
        if !self.is_enabled() {
            return 0;
        }
        match self.settings.get_long(&Self::key(locator), 0) {
            Ok(ms) => u64::try_from(ms).unwrap_or(0),
            Err(err) => {
                tracing::warn!(%locator, error = %err, "reading resume position failed");
                0
            }
        }
    }

    /// Records the position of `locator`, overwriting any previous one.
    pub fn save(&self, locator: &MediaLocator, position_ms: u64) {
        if !self.is_enabled() {
            return;
        }
        let value = i64::try_from(position_ms).unwrap_or(i64::MAX);
        if let Err(err) = self.settings.set_long(&Self::key(locator), value) {
            tracing::warn!(%locator, error = %err, "writing resume position failed");
        }
    }
}

impl std::fmt::Debug for PositionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{SettingsStore, StoreError};
    use crate::infrastructure::MemoryStore;
    use std::sync::Arc;

    struct FailingStore;

    impl SettingsStore for FailingStore {
        fn get_int(&self, _: &str, _: i32) -> Result<i32, StoreError> {
            Err(StoreError::Read("offline".into()))
        }
        fn set_int(&self, _: &str, _: i32) -> Result<(), StoreError> {
            Err(StoreError::Write("offline".into()))
        }
        fn get_bool(&self, _: &str, _: bool) -> Result<bool, StoreError> {
            Err(StoreError::Read("offline".into()))
        }
        fn set_bool(&self, _: &str, _: bool) -> Result<(), StoreError> {
            Err(StoreError::Write("offline".into()))
        }
        fn get_long(&self, _: &str, _: i64) -> Result<i64, StoreError> {
            Err(StoreError::Read("offline".into()))
        }
        fn set_long(&self, _: &str, _: i64) -> Result<(), StoreError> {
            Err(StoreError::Write("offline".into()))
        }
    }

    fn locator() -> MediaLocator {
        MediaLocator::parse("content://media/external/video/7").unwrap()
    }

    #[test]
    fn key_uses_prefix_and_stable_hash() {
        let key = PositionStore::key(&locator());
        assert!(key.starts_with("lastPosition_"));
        assert_eq!(key.len(), "lastPosition_".len() + 16);
        assert_eq!(key, PositionStore::key(&locator()));
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = PositionStore::new(Arc::new(MemoryStore::new()));
        assert_eq!(store.load(&locator()), 0);

        store.save(&locator(), 42_500);
        assert_eq!(store.load(&locator()), 42_500);

        store.save(&locator(), 1_000);
        assert_eq!(store.load(&locator()), 1_000);
    }

    #[test]
    fn disabled_preference_never_writes() {
        let settings = Arc::new(MemoryStore::new());
        settings.set_bool(KEY_REMEMBER_POSITION, false).unwrap();
        let store = PositionStore::new(settings.clone());

        store.save(&locator(), 42_500);
        store.save(&locator(), 43_000);

        assert_eq!(settings.get_long(&PositionStore::key(&locator()), -1), Ok(-1));
        assert_eq!(store.load(&locator()), 0);
    }

    #[test]
    fn disabled_preference_ignores_existing_entry() {
        let settings = Arc::new(MemoryStore::new());
        settings
            .set_long(&PositionStore::key(&locator()), 9_000)
            .unwrap();
        settings.set_bool(KEY_REMEMBER_POSITION, false).unwrap();

        assert_eq!(PositionStore::new(settings).load(&locator()), 0);
    }

    #[test]
    fn store_failures_fall_back_to_start() {
        let store = PositionStore::new(Arc::new(FailingStore));
        assert!(store.is_enabled());
        store.save(&locator(), 5_000);
        assert_eq!(store.load(&locator()), 0);
    }

    #[test]
    fn negative_stored_value_loads_as_start() {
        let settings = Arc::new(MemoryStore::new());
        settings
            .set_long(&PositionStore::key(&locator()), -20)
            .unwrap();
        assert_eq!(PositionStore::new(settings).load(&locator()), 0);
    }
}
