use dioxus::prelude::*;
use services::{AuthError, QuizError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    SignedOut,
    MissingCode,
    LoginRejected,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::SignedOut => "You are not signed in.",
            ViewError::MissingCode => "The sign-in link has no authorization code.",
            ViewError::LoginRejected => "Sign-in was not accepted.",
        }
    }

    #[must_use]
    pub fn from_quiz(err: &QuizError) -> Self {
        match err {
            QuizError::MissingToken => ViewError::SignedOut,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn from_auth(err: &AuthError) -> Self {
        match err {
            AuthError::MissingCode => ViewError::MissingCode,
            AuthError::Api(_) | AuthError::IncompleteLogin => ViewError::LoginRejected,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
