//! Backend API surface consumed by the quiz client.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use quiz_core::model::{
    AnswerSet, AttemptId, AttemptResult, AuthToken, SubmissionReceipt, Test, TestId, TestSummary,
};

use crate::error::ApiError;

mod client;

pub use client::ApiClient;

/// Body of `GET /auth/login`.
///
/// Both fields are optional on the wire so an empty success body still decodes;
/// callers decide whether a missing token is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub user_id: Option<String>,
}

/// Backends send user ids as strings or integers; both are kept as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

/// Body of `POST /tests/{id}/answers`.
#[derive(Debug, Serialize)]
pub(crate) struct AnswersPayload<'a> {
    pub answers: &'a AnswerSet,
}

/// One round trip per call against the quiz backend.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Exchange an OAuth authorization code for a session.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-success status.
    async fn login_external(&self, code: &str) -> Result<LoginResponse, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status, or a malformed body.
    async fn get_tests(&self, token: &AuthToken) -> Result<Vec<TestSummary>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status, or a malformed body.
    async fn get_test_by_id(&self, id: TestId, token: &AuthToken) -> Result<Test, ApiError>;

    /// Submit the answers for one attempt.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status, or a malformed body.
    async fn send_answers(
        &self,
        test_id: TestId,
        answers: &AnswerSet,
        token: &AuthToken,
    ) -> Result<SubmissionReceipt, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-success status, or a malformed body.
    async fn get_result(
        &self,
        attempt_id: AttemptId,
        token: &AuthToken,
    ) -> Result<AttemptResult, ApiError>;
}
