//! Session Model
//!
//! The session is nothing but an optional bearer token mirrored into
//! durable storage. Token presence is the only authentication signal.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::StorageError;

/// Durable home of the raw token string
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// In-memory storage, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.stored()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Session<S: TokenStorage> {
    token: Option<String>,
    storage: S,
}

impl<S: TokenStorage> Session<S> {
    /// Start from whatever the storage holds; an empty string counts as nothing
    pub fn hydrate(storage: S) -> Self {
        let token = storage.load().filter(|t| !t.is_empty());
        debug!(restored = token.is_some(), "session hydrated");
        Self { token, storage }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Memory is updated even when the storage write fails, so the session
    /// still works until the page goes away.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), StorageError> {
        let token = token.into();
        let saved = self.storage.save(&token);
        if let Err(e) = &saved {
            warn!(error = %e, "token not persisted");
        }
        self.token = Some(token);
        saved
    }

    pub fn clear_token(&mut self) -> Result<(), StorageError> {
        self.token = None;
        let removed = self.storage.remove();
        if let Err(e) = &removed {
            warn!(error = %e, "stored token not removed");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage whose writes always fail
    struct BrokenStorage;

    impl TokenStorage for BrokenStorage {
        fn load(&self) -> Option<String> {
            None
        }
        fn save(&self, _token: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove(&self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn starts_empty_without_stored_token() {
        let session = Session::hydrate(MemoryStorage::default());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn hydrates_from_storage() {
        let session = Session::hydrate(MemoryStorage::with_token("abc"));
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn empty_stored_token_is_ignored() {
        let session = Session::hydrate(MemoryStorage::with_token(""));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn set_and_clear_mirror_into_storage() {
        let storage = MemoryStorage::default();
        let mut session = Session::hydrate(storage.clone());

        session.set_token("abc").unwrap();
        assert_eq!(storage.stored().as_deref(), Some("abc"));
        assert!(session.is_authenticated());

        session.clear_token().unwrap();
        assert_eq!(storage.stored(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn failed_write_still_sets_memory() {
        let mut session = Session::hydrate(BrokenStorage);
        assert_eq!(session.set_token("abc"), Err(StorageError::Unavailable));
        assert_eq!(session.token(), Some("abc"));

        assert!(session.clear_token().is_err());
        assert_eq!(session.token(), None);
    }
}
