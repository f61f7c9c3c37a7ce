use std::sync::Arc;

use tracing::warn;

use quiz_core::model::{AnswerSet, AuthToken, Session, UserId};
use storage::repository::{SessionKey, SessionStore};

use crate::error::SessionError;

/// Typed access to the session store: credentials and the last answer set.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
}

impl SessionService {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Persist the credentials of a fresh login, replacing earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot be written.
    pub async fn save_session(&self, token: &AuthToken, user_id: &UserId) -> Result<(), SessionError> {
        self.store.set(SessionKey::Token, token.as_str()).await?;
        self.store.set(SessionKey::UserId, user_id.as_str()).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot be read.
    pub async fn load_session(&self) -> Result<Session, SessionError> {
        let token = self.token().await?;
        let user_id = self
            .store
            .get(SessionKey::UserId)
            .await?
            .and_then(|raw| UserId::new(raw).ok());
        Ok(Session::new(token, user_id))
    }

    /// The stored bearer token, if any. Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot be read.
    pub async fn token(&self) -> Result<Option<AuthToken>, SessionError> {
        let raw = self.store.get(SessionKey::Token).await?;
        Ok(raw.and_then(|raw| AuthToken::new(raw).ok()))
    }

    /// # Errors
    ///
    /// Returns `SessionError` if encoding or the store write fails.
    pub async fn save_answers(&self, answers: &AnswerSet) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(answers)?;
        self.store.set(SessionKey::Answers, &encoded).await?;
        Ok(())
    }

    /// The most recently saved answer set.
    ///
    /// A stored value that does not parse is logged and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the store cannot be read.
    pub async fn load_answers(&self) -> Result<Option<AnswerSet>, SessionError> {
        let Some(raw) = self.store.get(SessionKey::Answers).await? else {
            return Ok(None);
        };
        match serde_json::from_str::<Option<AnswerSet>>(&raw) {
            Ok(answers) => Ok(answers),
            Err(err) => {
                warn!(error = %err, "stored answers are unreadable; ignoring them");
                Ok(None)
            }
        }
    }
}
