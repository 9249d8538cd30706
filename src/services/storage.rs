use gloo_storage::{LocalStorage, Storage};

use crate::config::Config;
use crate::models::error::AppError;
use crate::models::onboarding::FlagStore;

/// Onboarding flag kept in the browser's localStorage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageFlagStore {
    key: &'static str,
}

impl LocalStorageFlagStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for LocalStorageFlagStore {
    fn default() -> Self {
        Self::new(Config::ONBOARDING_STORAGE_KEY)
    }
}

impl FlagStore for LocalStorageFlagStore {
    /// Missing or unreadable entries count as "not seen".
    fn load(&self) -> bool {
        LocalStorage::get::<bool>(self.key).unwrap_or(false)
    }

    fn save(&self, seen: bool) -> Result<(), AppError> {
        LocalStorage::set(self.key, seen)
            .map_err(|e| AppError::StorageError(format!("Failed to save {}: {e:?}", self.key)))
    }
}
