use quiz_core::model::{AnswerSet, QuestionId};

/// Lines for the result page. `None` means nothing was stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub lines: Option<Vec<String>>,
}

#[must_use]
pub fn answer_line(question: QuestionId, option: &str) -> String {
    format!("Question {question}: {option}")
}

#[must_use]
pub fn map_result(answers: Option<&AnswerSet>) -> ResultVm {
    ResultVm {
        lines: answers.map(|answers| {
            answers
                .iter()
                .map(|(question, option)| answer_line(question, option))
                .collect()
        }),
    }
}
