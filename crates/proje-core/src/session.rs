//! Session Store
//!
//! Persists the logged-in user across page loads. The stored payload is
//! trusted as-is: no expiry and no check against the backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::Session;

/// Durable key/value storage (`localStorage` in the browser)
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Reads and writes the single session entry
pub struct SessionStore<S> {
    storage: S,
    key: String,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Stored session, or `None` when absent or unreadable
    pub fn load(&self) -> Option<Session> {
        let raw = self.storage.get(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Ignoring unreadable session under '{}': {}", self.key, e);
                None
            }
        }
    }

    /// Write `session`, or remove the entry when `None`
    pub fn save(&self, session: Option<&Session>) {
        match session {
            Some(session) => match serde_json::to_string(session) {
                Ok(raw) => self.storage.set(&self.key, &raw),
                Err(e) => log::error!("Session could not be serialized: {}", e),
            },
            None => self.storage.remove(&self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: 3,
            first_name: "Can".to_string(),
            last_name: "Öztürk".to_string(),
            email: "can@example.com".to_string(),
        }
    }

    #[test]
    fn test_empty_storage_has_no_session() {
        let store = SessionStore::new(MemoryStorage::new(), "currentUser");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = SessionStore::new(MemoryStorage::new(), "currentUser");
        store.save(Some(&session()));
        assert_eq!(store.load(), Some(session()));
    }

    #[test]
    fn test_save_none_removes_entry() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone(), "currentUser");
        store.save(Some(&session()));
        store.save(None);
        assert_eq!(store.load(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_stored_payload_uses_wire_keys() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone(), "currentUser");
        store.save(Some(&session()));
        let raw = storage.get("currentUser").unwrap();
        assert!(raw.contains(r#""KullaniciID":3"#));
    }

    #[test]
    fn test_corrupt_payload_reads_as_guest() {
        let storage = MemoryStorage::new();
        storage.set("currentUser", "{not json");
        let store = SessionStore::new(storage, "currentUser");
        assert_eq!(store.load(), None);
    }
}
