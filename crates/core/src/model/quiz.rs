use serde::{Deserialize, Serialize};

use crate::model::{QuestionId, TestId};

/// Summary form of a test, as listed on the tests page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSummary {
    pub id: TestId,
    #[serde(default)]
    pub title: String,
}

/// A full test with its ordered questions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: TestId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Test {
    #[must_use]
    pub fn summary(&self) -> TestSummary {
        TestSummary {
            id: self.id,
            title: self.title.clone(),
        }
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }
}

/// One question. Options are display strings; the chosen answer is stored verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}
