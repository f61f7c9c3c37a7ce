use quiz_core::model::{AnswerSet, QuestionId, Test};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    pub selected: bool,
}

/// A question with its options, flagged against the current answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<OptionVm>,
}

#[must_use]
pub fn map_question_cards(test: &Test, answers: &AnswerSet) -> Vec<QuestionCardVm> {
    test.questions
        .iter()
        .map(|question| QuestionCardVm {
            id: question.id,
            text: question.text.clone(),
            options: question
                .options
                .iter()
                .map(|option| OptionVm {
                    label: option.clone(),
                    selected: answers.is_selected(question.id, option),
                })
                .collect(),
        })
        .collect()
}
