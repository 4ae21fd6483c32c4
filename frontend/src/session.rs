//! `localStorage` backend for the credential store.

use common::session::{CredentialBackend, CredentialStore, SessionError};
use gloo_storage::{LocalStorage, Storage};

/// Values are stored as raw strings (not JSON encoded) under the keys
/// defined in `common::session`.
pub struct BrowserStorage;

impl CredentialBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| SessionError::Storage(format!("{:?}", err)))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| SessionError::Storage(format!("{:?}", err)))
    }
}

pub fn credentials() -> CredentialStore<BrowserStorage> {
    CredentialStore::new(BrowserStorage)
}
