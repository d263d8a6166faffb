use crate::core::preferences::{KeyValueStore, Preferences};
use web_sys::Storage;

/// `window.localStorage`. A missing or blocked store reads as empty and
/// drops writes.
#[derive(Clone, Default)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("failed to persist {}: {:?}", key, e);
            }
        }
    }
}

pub fn preferences() -> Preferences<LocalStore> {
    Preferences::new(LocalStore::open())
}
