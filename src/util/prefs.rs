//! Persisted key-value preference storage.
//!
//! `PreferenceStore` keeps storage injectable so theme logic can be driven
//! by an in-memory fake in tests; `LocalStorage` is the browser
//! implementation backed by `window.localStorage`. Reads and writes degrade
//! silently when storage is unavailable.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

/// A string key-value store for user preferences.
pub trait PreferenceStore {
    /// Read the value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` for `key`. Failures are ignored.
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage` (`csr` builds); a silent no-op elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
