#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod config;
pub mod error;
pub mod quiz_service;
pub mod session_service;

pub use api::{ApiClient, LoginResponse, QuizApi};
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use config::ClientConfig;
pub use error::{
    ApiError, AppServicesError, AuthError, ConfigError, QuizError, RequestError, SessionError,
};
pub use quiz_service::QuizService;
pub use session_service::SessionService;
