use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TestCardVm, map_test_cards};

#[component]
pub fn TestsView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();

    let resource = use_resource(move || {
        let quiz = quiz.clone();
        async move {
            let tests = quiz.list_tests().await.map_err(|err| {
                warn!(error = %err, "failed to load tests");
                ViewError::from_quiz(&err)
            })?;
            Ok(map_test_cards(&tests))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page tests-page",
            h2 { "Available tests" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No tests available." }
                    } else {
                        ul { class: "test-list",
                            for card in cards {
                                TestCard { key: "{card.id}", card }
                            }
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

#[component]
fn TestCard(card: TestCardVm) -> Element {
    let navigator = use_navigator();
    let id = card.id.value();

    rsx! {
        li { class: "test-card",
            span { class: "test-title", "{card.title}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::TestTaking { id });
                },
                "Start"
            }
        }
    }
}
