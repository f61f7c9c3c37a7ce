use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};
use tracing::debug;

use crate::views::{AuthCallbackView, LoginView, ResultView, TestTakingView, TestsView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[layout(Layout)]
        #[route("/login", LoginView)] Login {},
        #[route("/auth/callback?:code", AuthCallbackView)] AuthCallback { code: String },
        #[route("/tests", TestsView)] Tests {},
        #[route("/test/:id", TestTakingView)] TestTaking { id: u64 },
        #[route("/result/:id", ResultView)] TestResult { id: u64 },
    #[end_layout]
    #[route("/:..segments", RedirectToLogin)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Anything the router does not know goes back to the login screen.
#[component]
fn RedirectToLogin(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    debug!(path = %segments.join("/"), "unknown route; redirecting to login");
    use_effect(move || {
        navigator.replace(Route::Login {});
    });
    rsx! {}
}
