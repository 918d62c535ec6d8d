//! Browser Session Storage
//!
//! `localStorage` behind the core's `SessionStorage` seam.

use proje_core::SessionStorage;

/// `window.localStorage`. Calls are no-ops when storage is unavailable
/// (private mode, sandboxed iframes).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage write failed: {:?}", e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("localStorage remove failed: {:?}", e);
            }
        }
    }
}
