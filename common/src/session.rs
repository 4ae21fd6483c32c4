//! Bearer-token session kept in persistent browser storage.
//!
//! The store is written against [`CredentialBackend`] so the frontend can
//! plug in `localStorage` while tests use an in-memory map.

use thiserror::Error;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("authentication failed: token or user id is missing")]
    MissingCredentials,
    #[error("credential storage unavailable: {0}")]
    Storage(String),
}

/// Raw string key-value storage.
pub trait CredentialBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

pub struct CredentialStore<B> {
    backend: B,
}

impl<B: CredentialBackend> CredentialStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The stored token, if any. An empty value counts as no token.
    pub fn token(&self) -> Option<String> {
        self.backend.read(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.backend.read(USER_ID_KEY).filter(|id| !id.is_empty())
    }

    pub fn save(&self, token: &str, user_id: &str) -> Result<(), SessionError> {
        if token.is_empty() || user_id.is_empty() {
            return Err(SessionError::MissingCredentials);
        }
        self.backend.write(TOKEN_KEY, token)?;
        if let Err(err) = self.backend.write(USER_ID_KEY, user_id) {
            // The write error is the one reported; a failed rollback leaves
            // a token without user id, which `clear` can still remove.
            self.backend.remove(TOKEN_KEY).ok();
            return Err(err);
        }
        Ok(())
    }

    /// Removes both keys. Each removal is attempted; the first failure is
    /// returned.
    pub fn clear(&self) -> Result<(), SessionError> {
        let token = self.backend.remove(TOKEN_KEY);
        let user_id = self.backend.remove(USER_ID_KEY);
        token.and(user_id)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{CredentialBackend, SessionError};

    #[derive(Default)]
    pub struct MemoryBackend {
        pub entries: RefCell<HashMap<String, String>>,
        pub read_only: bool,
        /// Keys whose removal fails.
        pub locked: Vec<&'static str>,
    }

    impl CredentialBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
            if self.read_only {
                return Err(SessionError::Storage("quota exceeded".into()));
            }
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), SessionError> {
            if self.locked.contains(&key) {
                return Err(SessionError::Storage(format!("{key} is locked")));
            }
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryBackend;
    use super::*;

    #[test]
    fn save_then_read_back() {
        let store = CredentialStore::new(MemoryBackend::default());

        store.save("abc.def.ghi", "1").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("abc.def.ghi"));
        assert_eq!(store.user_id().as_deref(), Some("1"));
    }

    #[test]
    fn clear_forgets_everything() {
        let store = CredentialStore::new(MemoryBackend::default());
        store.save("abc", "1").unwrap();

        assert_eq!(store.clear(), Ok(()));

        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert_eq!(store.user_id(), None);
    }

    #[test]
    fn clear_reports_a_failed_removal_and_still_removes_the_other_key() {
        let store = CredentialStore::new(MemoryBackend {
            locked: vec![TOKEN_KEY],
            ..MemoryBackend::default()
        });
        store.save("abc", "1").unwrap();

        assert!(matches!(store.clear(), Err(SessionError::Storage(_))));
        assert_eq!(store.user_id(), None);
        assert_eq!(store.token().as_deref(), Some("abc"));
    }

    #[test]
    fn empty_values_are_refused_and_nothing_is_written() {
        let store = CredentialStore::new(MemoryBackend::default());

        assert_eq!(store.save("", "1"), Err(SessionError::MissingCredentials));
        assert_eq!(store.save("abc", ""), Err(SessionError::MissingCredentials));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn blank_stored_token_is_not_a_session() {
        let backend = MemoryBackend::default();
        backend.entries.borrow_mut().insert(TOKEN_KEY.into(), String::new());

        assert!(!CredentialStore::new(backend).is_authenticated());
    }

    #[test]
    fn storage_failure_is_reported() {
        let store = CredentialStore::new(MemoryBackend {
            read_only: true,
            ..MemoryBackend::default()
        });

        assert!(matches!(store.save("abc", "1"), Err(SessionError::Storage(_))));
        assert!(!store.is_authenticated());
    }
}
