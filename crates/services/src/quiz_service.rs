use std::sync::Arc;

use tracing::{debug, info, warn};

use quiz_core::model::{
    AnswerSet, AttemptId, AttemptResult, AuthToken, SubmissionReceipt, Test, TestId, TestSummary,
};

use crate::api::QuizApi;
use crate::error::QuizError;
use crate::session_service::SessionService;

/// Test listing, test taking, and result lookup for the signed-in user.
#[derive(Clone)]
pub struct QuizService {
    api: Arc<dyn QuizApi>,
    session: Arc<SessionService>,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>, session: Arc<SessionService>) -> Self {
        Self { api, session }
    }

    /// # Errors
    ///
    /// Returns `QuizError::MissingToken` when nobody is signed in, or the API error.
    pub async fn list_tests(&self) -> Result<Vec<TestSummary>, QuizError> {
        let token = self.require_token().await?;
        let tests = self.api.get_tests(&token).await?;
        debug!(count = tests.len(), "loaded test list");
        Ok(tests)
    }

    /// # Errors
    ///
    /// Returns `QuizError::MissingToken` when nobody is signed in, or the API error.
    pub async fn load_test(&self, id: TestId) -> Result<Test, QuizError> {
        let token = self.require_token().await?;
        let test = self.api.get_test_by_id(id, &token).await?;
        debug!(test_id = %id, questions = test.questions.len(), "loaded test");
        Ok(test)
    }

    /// Persist `answers` as the latest attempt, then submit them to the backend.
    ///
    /// Only the local save can fail the call. Submission problems are logged and
    /// reported as `Ok(None)` so the result page stays reachable.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the answers cannot be stored.
    pub async fn finish_attempt(
        &self,
        test_id: TestId,
        answers: &AnswerSet,
    ) -> Result<Option<SubmissionReceipt>, QuizError> {
        self.session.save_answers(answers).await?;
        info!(test_id = %test_id, answered = answers.len(), "stored answers for attempt");

        let Some(token) = self.session.token().await? else {
            warn!(test_id = %test_id, "not signed in; answers kept locally only");
            return Ok(None);
        };

        match self.api.send_answers(test_id, answers, &token).await {
            Ok(receipt) => {
                info!(test_id = %test_id, attempt_id = ?receipt.attempt_id, "answers submitted");
                Ok(Some(receipt))
            }
            Err(err) => {
                warn!(test_id = %test_id, error = %err, "answer submission failed");
                Ok(None)
            }
        }
    }

    /// The answer set stored by the last finished attempt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the store cannot be read.
    pub async fn saved_answers(&self) -> Result<Option<AnswerSet>, QuizError> {
        Ok(self.session.load_answers().await?)
    }

    /// # Errors
    ///
    /// Returns `QuizError::MissingToken` when nobody is signed in, or the API error.
    pub async fn fetch_result(&self, attempt_id: AttemptId) -> Result<AttemptResult, QuizError> {
        let token = self.require_token().await?;
        Ok(self.api.get_result(attempt_id, &token).await?)
    }

    async fn require_token(&self) -> Result<AuthToken, QuizError> {
        self.session.token().await?.ok_or_else(|| {
            warn!("request needs a signed-in session");
            QuizError::MissingToken
        })
    }
}
