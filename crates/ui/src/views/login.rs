use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::AuthError;
use tracing::error;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::components::CredentialsForm;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let auth = ctx.auth_service();
    let external = ctx.external_navigator();
    let oauth_url = auth.oauth_start_url().clone();

    let mut login = use_signal(String::new);
    let mut password = use_signal(String::new);
    let hint = use_signal(|| None::<&'static str>);

    let submit = move |()| {
        let auth = auth.clone();
        let login_value = login();
        let password_value = password();
        let mut hint = hint;
        spawn(async move {
            match auth.fake_login(&login_value, &password_value).await {
                Ok(_) => {
                    hint.set(None);
                    navigator.push(Route::Tests {});
                }
                Err(AuthError::MissingCredentials) => {
                    hint.set(Some("Enter a login and a password."));
                }
                Err(err) => {
                    error!(error = %err, "local sign-in failed");
                    hint.set(Some(ViewError::Unknown.message()));
                }
            }
        });
    };

    rsx! {
        div { class: "page login-page",
            h2 { "Sign in" }

            CredentialsForm {
                login: login(),
                password: password(),
                on_login_change: move |value| login.set(value),
                on_password_change: move |value| password.set(value),
                on_submit: submit,
            }
            if let Some(text) = hint() {
                p { class: "form-hint", "{text}" }
            }

            hr {}

            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| external.navigate(&oauth_url),
                "Continue with Google"
            }
        }
    }
}
