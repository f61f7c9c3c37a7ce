use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{AnswerSet, QuestionId, TestId};
use tracing::{error, warn};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::QuestionCard;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_question_cards;

#[component]
pub fn TestTakingView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz = ctx.quiz_service();
    let test_id = TestId::new(id);

    let mut answers = use_signal(AnswerSet::default);
    let mut finishing = use_signal(|| false);

    let resource = use_resource({
        let quiz = quiz.clone();
        move || {
            let quiz = quiz.clone();
            async move {
                quiz.load_test(test_id).await.map_err(|err| {
                    warn!(test_id = %test_id, error = %err, "failed to load test");
                    ViewError::from_quiz(&err)
                })
            }
        }
    });

    let state = view_state_from_resource(&resource);

    let finish = move |_| {
        if finishing() {
            return;
        }
        finishing.set(true);
        let quiz = quiz.clone();
        let snapshot = answers.read().clone();
        spawn(async move {
            match quiz.finish_attempt(test_id, &snapshot).await {
                Ok(_) => {
                    navigator.push(Route::TestResult { id });
                }
                Err(err) => {
                    error!(test_id = %test_id, error = %err, "could not store answers");
                    finishing.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "page test-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(test) => {
                    let cards = map_question_cards(&test, &answers.read());
                    rsx! {
                        h2 { "{test.title}" }
                        for card in cards {
                            QuestionCard {
                                key: "{card.id}",
                                on_select: {
                                    let question: QuestionId = card.id;
                                    move |option: String| {
                                        answers.write().select(question, option);
                                    }
                                },
                                card,
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: finishing(),
                            onclick: finish,
                            "Finish"
                        }
                    }
                },
                ViewState::Error(ViewError::SignedOut) => rsx! {
                    p { class: "error", "{ViewError::SignedOut.message()}" }
                    Link { class: "btn btn-secondary", to: Route::Login {}, "Back to sign in" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}
