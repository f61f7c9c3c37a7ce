use std::sync::atomic::Ordering;

use dioxus::prelude::*;
use storage::repository::{SessionKey, SessionStore};
use url::Url;

use super::test_harness::{ViewKind, setup_routed_harness, setup_view_harness};
use crate::navigation::{ExternalNavigator, WebviewNavigator};

#[tokio::test(flavor = "current_thread")]
async fn login_view_offers_both_sign_in_paths() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Sign in"), "missing title in {html}");
    assert!(html.contains("Log in"), "missing submit in {html}");
    assert!(html.contains("Continue with Google"), "missing oauth button in {html}");
    assert!(
        harness.navigator.visited.lock().unwrap().is_empty(),
        "rendering must not leave the app"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn callback_without_code_reports_and_stores_nothing() {
    let mut harness = setup_view_harness(ViewKind::AuthCallback(String::new()));
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("The sign-in link has no authorization code."),
        "missing error in {html}"
    );
    assert!(html.contains("Back to sign in"), "missing login link in {html}");
    assert_eq!(harness.api.login_calls.load(Ordering::SeqCst), 0);
    assert_eq!(harness.store.get(SessionKey::Token).await.unwrap(), None);
    assert_eq!(harness.store.get(SessionKey::UserId).await.unwrap(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn tests_view_lists_tests_for_signed_in_user() {
    let mut harness = setup_view_harness(ViewKind::Tests);
    harness.store.set(SessionKey::Token, "t1").await.unwrap();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Available tests"), "missing title in {html}");
    assert!(html.contains("Math test"), "missing first test in {html}");
    assert!(html.contains("General knowledge"), "missing last test in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tests_view_without_token_is_signed_out() {
    let mut harness = setup_view_harness(ViewKind::Tests);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("You are not signed in."), "missing error in {html}");
    assert!(html.contains("Back to sign in"), "missing login link in {html}");
    assert!(!html.contains("Math test"), "leaked test list in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_taking_view_renders_questions_and_options() {
    let mut harness = setup_view_harness(ViewKind::TestTaking(1));
    harness.store.set(SessionKey::Token, "t1").await.unwrap();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Favourite colour?"), "missing question in {html}");
    assert!(html.contains("Favourite food?"), "missing question in {html}");
    for option in ["Red", "Blue", "Green", "Pizza", "Sushi", "Burger"] {
        assert!(html.contains(option), "missing {option} in {html}");
    }
    assert!(html.contains("Finish"), "missing finish button in {html}");
    assert!(!html.contains("option--selected"), "nothing is chosen yet: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_lists_stored_answers() {
    let mut harness = setup_view_harness(ViewKind::Result(1));
    harness
        .store
        .set(SessionKey::Answers, r#"{"1":"Red","2":"Pizza"}"#)
        .await
        .unwrap();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Your result"), "missing title in {html}");
    assert!(html.contains("Question 1: Red"), "missing answer in {html}");
    assert!(html.contains("Question 2: Pizza"), "missing answer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_without_answers_shows_no_data() {
    let mut harness = setup_view_harness(ViewKind::Result(4));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("No data"), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_path_is_replaced_by_login() {
    let mut harness = setup_routed_harness("/admin/users");
    harness.settle().await;

    assert_eq!(harness.current_path(), "/login");
    let html = harness.render();
    assert!(html.contains("Continue with Google"), "login not shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn callback_with_code_signs_in_and_opens_tests() {
    let mut harness = setup_routed_harness("/auth/callback?code=abc123");
    harness.settle().await;

    assert_eq!(harness.api.login_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        harness.store.get(SessionKey::Token).await.unwrap().as_deref(),
        Some("t1")
    );
    assert_eq!(
        harness.store.get(SessionKey::UserId).await.unwrap().as_deref(),
        Some("u1")
    );
    assert_eq!(harness.current_path(), "/tests");
    let html = harness.render();
    assert!(html.contains("Math test"), "tests list not shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn local_sign_in_unlocks_the_tests_route() {
    let mut harness = setup_routed_harness("/tests");
    harness.auth.fake_login("alice", "x").await.unwrap();
    harness.settle().await;

    assert_eq!(harness.current_path(), "/tests");
    let html = harness.render();
    assert!(html.contains("Food survey"), "tests list not shown in {html}");
    assert!(!html.contains("You are not signed in."), "signed out in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn root_path_opens_login() {
    let mut harness = setup_routed_harness("/");
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Continue with Google"), "login not shown in {html}");
}

#[component]
fn LeaveOnMount() -> Element {
    use_hook(|| {
        let target = Url::parse("http://localhost:8080/auth/google").unwrap();
        WebviewNavigator.navigate(&target);
    });
    rsx! { p { "leaving" } }
}

#[tokio::test(flavor = "current_thread")]
async fn external_navigation_without_webview_is_logged_not_fatal() {
    let mut dom = VirtualDom::new(LeaveOnMount);
    dom.rebuild_in_place();
    let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work()).await;
    dom.process_events();

    assert!(dioxus_ssr::render(&dom).contains("leaving"));
}
