//! Session Store
//!
//! The current session lives in one local storage entry. Screens go through
//! [`SessionStore`] so tests can swap in [`MemorySessionStore`].

use std::cell::RefCell;

use crate::models::SessionRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("could not serialize session: {0}")]
    Serialize(String),
    #[error("could not write session: {0}")]
    Write(String),
}

pub trait SessionStore {
    /// Stored record, `None` when absent or malformed
    fn read(&self) -> Option<SessionRecord>;

    fn write(&self, record: &SessionRecord) -> Result<(), SessionError>;

    fn clear(&self);

    fn is_logged_in(&self) -> bool {
        self.read().is_some_and(|record| record.is_logged_in)
    }

    /// Bearer token of an authenticated session
    fn token(&self) -> Option<String> {
        self.read()
            .filter(SessionRecord::is_authenticated)
            .map(|record| record.token)
    }
}

/// Parse stored text, treating anything unreadable as no session
pub fn parse_session(raw: &str) -> Option<SessionRecord> {
    match serde_json::from_str::<SessionRecord>(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("[SESSION] Ignoring malformed session record: {}", e);
            None
        }
    }
}

fn serialize_session(record: &SessionRecord) -> Result<String, SessionError> {
    serde_json::to_string(record).map_err(|e| SessionError::Serialize(e.to_string()))
}

// ========================
// Browser Storage
// ========================

pub struct LocalStorageSessionStore {
    key: String,
}

impl LocalStorageSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn read(&self) -> Option<SessionRecord> {
        let raw = Self::storage()?.get_item(&self.key).ok()??;
        parse_session(&raw)
    }

    fn write(&self, record: &SessionRecord) -> Result<(), SessionError> {
        let storage = Self::storage().ok_or(SessionError::Unavailable)?;
        let raw = serialize_session(record)?;
        storage
            .set_item(&self.key, &raw)
            .map_err(|e| SessionError::Write(format!("{:?}", e)))?;
        log::info!("[SESSION] Stored session for key {:?}", self.key);
        Ok(())
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(&self.key).is_err() {
                log::warn!("[SESSION] Could not remove key {:?}", self.key);
            }
        }
    }
}

// ========================
// In-Memory Storage
// ========================

/// Holds serialized text like the browser does, so malformed
/// records can be simulated
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn with_session(record: &SessionRecord) -> Self {
        let store = Self::new();
        if let Ok(raw) = serialize_session(record) {
            *store.raw.borrow_mut() = Some(raw);
        }
        store
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Option<SessionRecord> {
        self.raw.borrow().as_deref().and_then(parse_session)
    }

    fn write(&self, record: &SessionRecord) -> Result<(), SessionError> {
        *self.raw.borrow_mut() = Some(serialize_session(record)?);
        Ok(())
    }

    fn clear(&self) {
        *self.raw.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::test_support::session_for;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_through_text() {
        let store = MemorySessionStore::new();
        assert_eq!(store.read(), None);

        let session = session_for(Role::User);
        store.write(&session).unwrap();
        assert_eq!(store.read(), Some(session));
        assert!(store.raw().unwrap().contains("\"isLoggedIn\":true"));
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_malformed_text_reads_as_absent() {
        for raw in ["", "not json", "null", "[1,2]", r#"{"isLoggedIn":"yes"}"#] {
            let store = MemorySessionStore::with_raw(raw);
            assert_eq!(store.read(), None, "raw = {raw:?}");
            assert!(!store.is_logged_in());
        }
    }

    #[test]
    fn test_empty_object_is_logged_out() {
        let store = MemorySessionStore::with_raw("{}");
        assert!(store.read().is_some());
        assert!(!store.is_logged_in());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_clear_removes_session() {
        let store = MemorySessionStore::with_session(&session_for(Role::Admin));
        assert!(store.is_logged_in());
        store.clear();
        assert_eq!(store.raw(), None);
        assert!(!store.is_logged_in());
    }
}
