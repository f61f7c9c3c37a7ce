mod answers;
mod ids;
mod quiz;
mod session;
mod submission;

pub use answers::AnswerSet;
pub use ids::{AttemptId, QuestionId, TestId};
pub use quiz::{Question, Test, TestSummary};
pub use session::{AuthToken, Session, UserId};
pub use submission::{AttemptResult, SubmissionReceipt};
