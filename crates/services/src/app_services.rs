use std::sync::Arc;

use storage::repository::Storage;

use crate::api::{ApiClient, QuizApi};
use crate::auth_service::AuthService;
use crate::config::ClientConfig;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::session_service::SessionService;

/// Assembles app-facing services over one storage backend and one API.
#[derive(Clone)]
pub struct AppServices {
    session: Arc<SessionService>,
    auth: Arc<AuthService>,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP API client.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: &ClientConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let api: Arc<dyn QuizApi> = Arc::new(ApiClient::from_config(config));
        Ok(Self::new(&storage, api, config))
    }

    #[must_use]
    pub fn new(storage: &Storage, api: Arc<dyn QuizApi>, config: &ClientConfig) -> Self {
        let session = Arc::new(SessionService::new(Arc::clone(&storage.session)));
        let auth = Arc::new(AuthService::new(
            Arc::clone(&api),
            Arc::clone(&session),
            config.oauth_start_url.clone(),
        ));
        let quiz = Arc::new(QuizService::new(api, Arc::clone(&session)));

        Self {
            session,
            auth,
            quiz,
        }
    }

    #[must_use]
    pub fn session(&self) -> Arc<SessionService> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
