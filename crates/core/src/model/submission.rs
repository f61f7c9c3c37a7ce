use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::AttemptId;

/// Backend acknowledgement for a submitted answer set.
///
/// The body can be any JSON value (a bare status string is common). Only an
/// `attemptId` field of an object body is interpreted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct SubmissionReceipt {
    pub attempt_id: Option<AttemptId>,
    pub body: Value,
}

impl SubmissionReceipt {
    /// The body when it is a plain string, e.g. `"Saved"`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.as_str()
    }
}

impl From<Value> for SubmissionReceipt {
    fn from(body: Value) -> Self {
        Self {
            attempt_id: attempt_id_of(&body),
            body,
        }
    }
}

impl From<SubmissionReceipt> for Value {
    fn from(receipt: SubmissionReceipt) -> Self {
        receipt.body
    }
}

/// Server-computed outcome of one attempt.
///
/// Backends answer with a single record object or an array of records; both
/// are kept as sent and exposed through [`AttemptResult::records`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct AttemptResult {
    pub attempt_id: Option<AttemptId>,
    pub body: Value,
}

impl AttemptResult {
    #[must_use]
    pub fn records(&self) -> Vec<&Map<String, Value>> {
        match &self.body {
            Value::Object(record) => vec![record],
            Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Value> for AttemptResult {
    fn from(body: Value) -> Self {
        Self {
            attempt_id: attempt_id_of(&body),
            body,
        }
    }
}

impl From<AttemptResult> for Value {
    fn from(result: AttemptResult) -> Self {
        result.body
    }
}

fn attempt_id_of(body: &Value) -> Option<AttemptId> {
    body.get("attemptId")
        .and_then(|raw| AttemptId::deserialize(raw).ok())
}
