use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use tracing::error;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// Return leg of the OAuth redirect: trade `code` for a session.
#[component]
pub fn AuthCallbackView(code: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let auth = ctx.auth_service();

    let resource = use_resource(move || {
        let auth = auth.clone();
        let code = code.clone();
        async move {
            auth.complete_callback(Some(code.as_str()))
                .await
                .map(|_| ())
                .map_err(|err| {
                    error!(error = %err, "external sign-in did not complete");
                    ViewError::from_auth(&err)
                })
        }
    });

    use_effect(move || {
        if matches!(resource.value().read().as_ref(), Some(Ok(()))) {
            navigator.push(Route::Tests {});
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page callback-page",
            h2 { "Signing in" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Completing sign-in, please wait..." }
                },
                ViewState::Ready(()) => rsx! {
                    p { "Signed in. Loading your tests..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    Link { class: "btn btn-secondary", to: Route::Login {}, "Back to sign in" }
                },
            }
        }
    }
}
