use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("auth token cannot be empty")]
    EmptyToken,
    #[error("user id cannot be empty")]
    EmptyUserId,
}
