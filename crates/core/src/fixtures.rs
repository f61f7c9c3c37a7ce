//! Canned tests and questions for tests and local fakes of the backend.

use crate::model::{Question, QuestionId, Test, TestId, TestSummary};

#[must_use]
pub fn sample_tests() -> Vec<TestSummary> {
    vec![
        TestSummary {
            id: TestId::new(1),
            title: "Math test".into(),
        },
        TestSummary {
            id: TestId::new(2),
            title: "Food survey".into(),
        },
        TestSummary {
            id: TestId::new(3),
            title: "General knowledge".into(),
        },
    ]
}

/// Two-question test used by the answer flow scenarios.
#[must_use]
pub fn sample_test(id: TestId) -> Test {
    let title = sample_tests()
        .into_iter()
        .find(|summary| summary.id == id)
        .map_or_else(|| format!("Test {id}"), |summary| summary.title);

    Test {
        id,
        title,
        questions: vec![
            Question {
                id: QuestionId::new(1),
                text: "Favourite colour?".into(),
                options: vec!["Red".into(), "Blue".into(), "Green".into()],
            },
            Question {
                id: QuestionId::new(2),
                text: "Favourite food?".into(),
                options: vec!["Pizza".into(), "Sushi".into(), "Burger".into()],
            },
        ],
    }
}
