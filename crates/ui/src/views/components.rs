//! Presentational pieces shared by the pages. No service access here.

use dioxus::prelude::*;

use crate::vm::QuestionCardVm;

#[component]
pub fn CredentialsForm(
    login: String,
    password: String,
    on_login_change: EventHandler<String>,
    on_password_change: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "credentials-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            input {
                id: "login",
                placeholder: "Login",
                value: "{login}",
                oninput: move |evt| on_login_change.call(evt.value()),
            }
            input {
                id: "password",
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |evt| on_password_change.call(evt.value()),
            }
            button { r#type: "submit", "Log in" }
        }
    }
}

#[component]
pub fn QuestionCard(card: QuestionCardVm, on_select: EventHandler<String>) -> Element {
    rsx! {
        section { class: "question-card",
            h3 { "{card.text}" }
            div { class: "question-options",
                for option in card.options {
                    button {
                        key: "{option.label}",
                        r#type: "button",
                        class: if option.selected { "option option--selected" } else { "option" },
                        onclick: {
                            let label = option.label.clone();
                            move |_| on_select.call(label.clone())
                        },
                        "{option.label}"
                    }
                }
            }
        }
    }
}

/// One line per answered question, or a "No data" note when nothing was stored.
#[component]
pub fn AnswerSummary(lines: Option<Vec<String>>) -> Element {
    match lines {
        None => rsx! {
            p { class: "no-data", "No data" }
        },
        Some(lines) => rsx! {
            ul { class: "answer-summary",
                for line in lines {
                    li { key: "{line}", "{line}" }
                }
            }
        },
    }
}
