use portfolio_core::PreferenceStore;
use web_sys::Storage;

/// `window.localStorage` as a preference store. Unavailable storage reads
/// as empty and drops writes.
pub(crate) struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub(crate) fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::warn!("gallery: local storage unavailable");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            gloo::console::warn!("gallery: storage set failed", key);
        }
    }
}
