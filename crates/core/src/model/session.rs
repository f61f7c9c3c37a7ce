use std::fmt;

use crate::error::ModelError;

/// Opaque bearer credential. Shape and expiry are the backend's concern.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// # Errors
    ///
    /// Returns `ModelError::EmptyToken` for an empty or whitespace-only value.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::EmptyToken);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens end up in log fields; keep them out of Debug output.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    /// # Errors
    ///
    /// Returns `ModelError::EmptyUserId` for an empty or whitespace-only value.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::EmptyUserId);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Authentication state as persisted for the current client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<AuthToken>,
    user_id: Option<UserId>,
}

impl Session {
    #[must_use]
    pub fn new(token: Option<AuthToken>, user_id: Option<UserId>) -> Self {
        Self { token, user_id }
    }

    #[must_use]
    pub fn authenticated(token: AuthToken, user_id: UserId) -> Self {
        Self::new(Some(token), Some(user_id))
    }

    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
