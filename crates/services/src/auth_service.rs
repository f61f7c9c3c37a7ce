use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};
use url::Url;

use quiz_core::model::{AuthToken, Session, UserId};

use crate::api::QuizApi;
use crate::error::AuthError;
use crate::session_service::SessionService;

/// Sign-in flows: the local placeholder login and the OAuth round trip.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn QuizApi>,
    session: Arc<SessionService>,
    oauth_start_url: Url,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>, session: Arc<SessionService>, oauth_start_url: Url) -> Self {
        Self {
            api,
            session,
            oauth_start_url,
        }
    }

    /// Target of the full-page redirect that starts the OAuth flow.
    #[must_use]
    pub fn oauth_start_url(&self) -> &Url {
        &self.oauth_start_url
    }

    /// Sign in without the backend: any non-blank login/password pair is accepted.
    ///
    /// Stores a placeholder token and the login as user id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` when either field is blank, or
    /// `AuthError::Session` if the session cannot be stored.
    pub async fn fake_login(&self, login: &str, password: &str) -> Result<Session, AuthError> {
        let login = login.trim();
        if login.is_empty() || password.trim().is_empty() {
            warn!("local login rejected: login and password are required");
            return Err(AuthError::MissingCredentials);
        }

        let token = AuthToken::new(placeholder_token())?;
        let user_id = UserId::new(login)?;
        self.session.save_session(&token, &user_id).await?;
        info!(user = %user_id, "signed in with local placeholder credentials");

        Ok(Session::authenticated(token, user_id))
    }

    /// Finish the OAuth round trip with the `code` query parameter.
    ///
    /// Without a code nothing is called and nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCode` for an absent or blank code,
    /// `AuthError::Api` when the exchange fails, `AuthError::IncompleteLogin`
    /// when the backend answers without a token, or `AuthError::Session` if the
    /// session cannot be stored.
    pub async fn complete_callback(&self, code: Option<&str>) -> Result<Session, AuthError> {
        let Some(code) = code.map(str::trim).filter(|code| !code.is_empty()) else {
            warn!("authorization callback reached without a code");
            return Err(AuthError::MissingCode);
        };

        let response = self.api.login_external(code).await.inspect_err(|err| {
            warn!(error = %err, "authorization code exchange failed");
        })?;

        let Some(token) = response.token.and_then(|raw| AuthToken::new(raw).ok()) else {
            warn!("authorization code exchange returned no token");
            return Err(AuthError::IncompleteLogin);
        };
        let user_id = match response.user_id {
            Some(raw) => UserId::new(raw)?,
            None => {
                warn!("authorization code exchange returned no user id");
                return Err(AuthError::IncompleteLogin);
            }
        };

        self.session.save_session(&token, &user_id).await?;
        info!(user = %user_id, "signed in through external provider");

        Ok(Session::authenticated(token, user_id))
    }
}

fn placeholder_token() -> String {
    format!("fake-{:016x}", rand::rng().random::<u64>())
}
