use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Keys held by the session store.
///
/// The wire names match the ones a browser client keeps in local storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKey {
    Token,
    UserId,
    Answers,
}

impl SessionKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SessionKey::Token => "token",
            SessionKey::UserId => "userId",
            SessionKey::Answers => "answers",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key/value store scoped to one client.
///
/// A `set` must be visible to every later `get` on the same store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: SessionKey) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn set(&self, key: SessionKey, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Clearing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn clear(&self, key: SessionKey) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<Mutex<HashMap<SessionKey, String>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: SessionKey) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&key).cloned())
    }

    async fn set(&self, key: SessionKey, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key, value.to_owned());
        Ok(())
    }

    async fn clear(&self, key: SessionKey) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(&key);
        Ok(())
    }
}

/// Storage handles behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub session: Arc<dyn SessionStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let session: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        Self { session }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_is_visible_to_next_get() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get(SessionKey::Token).await.unwrap(), None);

        store.set(SessionKey::Token, "t1").await.unwrap();
        store.set(SessionKey::Token, "t2").await.unwrap();

        assert_eq!(
            store.get(SessionKey::Token).await.unwrap().as_deref(),
            Some("t2")
        );
        assert_eq!(store.get(SessionKey::UserId).await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let store = InMemorySessionStore::new();
        let other = store.clone();
        store.set(SessionKey::UserId, "alice").await.unwrap();

        assert_eq!(
            other.get(SessionKey::UserId).await.unwrap().as_deref(),
            Some("alice")
        );

        other.clear(SessionKey::UserId).await.unwrap();
        other.clear(SessionKey::UserId).await.unwrap();
        assert_eq!(store.get(SessionKey::UserId).await.unwrap(), None);
    }
}
