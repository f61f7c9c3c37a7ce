use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// Chosen option per question for one attempt.
///
/// Serializes as a JSON object keyed by the question id (`{"1":"Red"}`) and
/// iterates in ascending question order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, String>);

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option` for `question`, replacing any earlier choice for it.
    ///
    /// Returns the previous choice, if any.
    pub fn select(&mut self, question: QuestionId, option: impl Into<String>) -> Option<String> {
        self.0.insert(question, option.into())
    }

    #[must_use]
    pub fn get(&self, question: QuestionId) -> Option<&str> {
        self.0.get(&question).map(String::as_str)
    }

    #[must_use]
    pub fn is_selected(&self, question: QuestionId, option: &str) -> bool {
        self.get(question) == Some(option)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.0.iter().map(|(id, option)| (*id, option.as_str()))
    }
}

impl FromIterator<(QuestionId, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
