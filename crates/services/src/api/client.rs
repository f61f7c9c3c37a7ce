use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use quiz_core::model::{
    AnswerSet, AttemptId, AttemptResult, AuthToken, SubmissionReceipt, Test, TestId, TestSummary,
};

use crate::api::{AnswersPayload, LoginResponse, QuizApi};
use crate::config::{ClientConfig, join_segments};
use crate::error::{ApiError, RequestError};

/// reqwest-backed client for the quiz backend.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform one request and return the raw JSON body.
    ///
    /// A token is sent as a bearer credential; without one no authorization
    /// header is set. A body is sent as JSON. A success response with an empty
    /// or non-JSON body yields an empty object.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Request` for a non-success status (message taken from
    /// the body's `message` field when present) and `ApiError::Transport` when
    /// the request cannot be completed.
    pub async fn request<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        token: Option<&AuthToken>,
    ) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        debug!(%method, %url, authorized = token.is_some(), "sending api request");

        let mut builder: RequestBuilder = self.client.request(method.clone(), url.clone());
        if let Some(token) = token {
            builder = builder.bearer_auth(token.as_str());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.inspect_err(|err| {
            warn!(%method, %url, error = %err, "api request could not be sent");
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = RequestError::from_body(status, &bytes);
            warn!(%method, %url, status = status.as_u16(), message = %err.message, "api request failed");
            return Err(err.into());
        }

        Ok(parse_body(&bytes))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        join_segments(&self.base_url, segments)
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))
    }

    async fn get<T>(&self, url: Url, token: Option<&AuthToken>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let value = self.request::<Value>(Method::GET, url, None, token).await?;
        decode(value)
    }
}

#[async_trait]
impl QuizApi for ApiClient {
    async fn login_external(&self, code: &str) -> Result<LoginResponse, ApiError> {
        let mut url = self.endpoint(&["auth", "login"])?;
        url.query_pairs_mut().append_pair("code", code);
        self.get(url, None).await
    }

    async fn get_tests(&self, token: &AuthToken) -> Result<Vec<TestSummary>, ApiError> {
        let url = self.endpoint(&["tests"])?;
        self.get(url, Some(token)).await
    }

    async fn get_test_by_id(&self, id: TestId, token: &AuthToken) -> Result<Test, ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["tests", &id])?;
        self.get(url, Some(token)).await
    }

    async fn send_answers(
        &self,
        test_id: TestId,
        answers: &AnswerSet,
        token: &AuthToken,
    ) -> Result<SubmissionReceipt, ApiError> {
        let test_id = test_id.to_string();
        let url = self.endpoint(&["tests", &test_id, "answers"])?;
        let payload = AnswersPayload { answers };
        let value = self
            .request(Method::POST, url, Some(&payload), Some(token))
            .await?;
        decode(value)
    }

    async fn get_result(
        &self,
        attempt_id: AttemptId,
        token: &AuthToken,
    ) -> Result<AttemptResult, ApiError> {
        let attempt_id = attempt_id.to_string();
        let url = self.endpoint(&["results", &attempt_id])?;
        self.get(url, Some(token)).await
    }
}

fn parse_body(bytes: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Null) | Err(_) => Value::Object(Map::new()),
        Ok(value) => value,
    }
}

/// An empty object stands for "no content" and maps to the type's default.
fn decode<T>(value: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if value.as_object().is_some_and(Map::is_empty) {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(ApiError::Decode)
}
