use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::AnswerSummary;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultVm, map_result};

/// Shows the answers stored by the last finished attempt.
///
/// The route id is informational only; the page reads local storage.
#[component]
pub fn ResultView(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();

    let resource = use_resource(move || {
        let quiz = quiz.clone();
        async move {
            let answers = quiz.saved_answers().await.map_err(|err| {
                warn!(test_id = id, error = %err, "failed to read stored answers");
                ViewError::from_quiz(&err)
            })?;
            Ok::<ResultVm, ViewError>(map_result(answers.as_ref()))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page result-page",
            h2 { "Your result" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    AnswerSummary { lines: vm.lines }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }

            Link { class: "btn btn-secondary", to: Route::Tests {}, "Back to tests" }
        }
    }
}
