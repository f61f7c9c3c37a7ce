use std::sync::Arc;

use services::{AuthService, QuizService};

use crate::navigation::ExternalNavigator;

pub trait UiApp: Send + Sync {
    fn auth_service(&self) -> Arc<AuthService>;
    fn quiz_service(&self) -> Arc<QuizService>;
    fn external_navigator(&self) -> Arc<dyn ExternalNavigator>;
}

#[derive(Clone)]
pub struct AppContext {
    auth_service: Arc<AuthService>,
    quiz_service: Arc<QuizService>,
    external_navigator: Arc<dyn ExternalNavigator>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth_service: app.auth_service(),
            quiz_service: app.quiz_service(),
            external_navigator: app.external_navigator(),
        }
    }

    #[must_use]
    pub fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth_service)
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    /// Handle for navigations that leave the app (the OAuth start page).
    #[must_use]
    pub fn external_navigator(&self) -> Arc<dyn ExternalNavigator> {
        Arc::clone(&self.external_navigator)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
