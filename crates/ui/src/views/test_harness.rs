use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use dioxus_router::{Routable, Router};
use quiz_core::fixtures::{sample_test, sample_tests};
use quiz_core::model::{
    AnswerSet, AttemptId, AttemptResult, AuthToken, SubmissionReceipt, Test, TestId, TestSummary,
};
use services::{
    ApiError, AppServices, AuthService, ClientConfig, LoginResponse, QuizApi, QuizService,
};
use storage::repository::{InMemorySessionStore, Storage};
use url::Url;

use crate::context::{UiApp, build_app_context};
use crate::navigation::ExternalNavigator;
use crate::routes::Route;
use crate::views::{AuthCallbackView, LoginView, ResultView, TestTakingView, TestsView};

const OAUTH_START: &str = "http://localhost:8080/auth/google";

/// Serves the fixture tests and counts code exchanges.
#[derive(Default)]
pub struct FixtureApi {
    pub login_calls: AtomicUsize,
}

#[async_trait]
impl QuizApi for FixtureApi {
    async fn login_external(&self, _code: &str) -> Result<LoginResponse, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        Ok(LoginResponse {
            token: Some("t1".into()),
            user_id: Some("u1".into()),
        })
    }

    async fn get_tests(&self, _token: &AuthToken) -> Result<Vec<TestSummary>, ApiError> {
        Ok(sample_tests())
    }

    async fn get_test_by_id(&self, id: TestId, _token: &AuthToken) -> Result<Test, ApiError> {
        Ok(sample_test(id))
    }

    async fn send_answers(
        &self,
        _test_id: TestId,
        _answers: &AnswerSet,
        _token: &AuthToken,
    ) -> Result<SubmissionReceipt, ApiError> {
        Ok(SubmissionReceipt::default())
    }

    async fn get_result(
        &self,
        attempt_id: AttemptId,
        _token: &AuthToken,
    ) -> Result<AttemptResult, ApiError> {
        Ok(AttemptResult {
            attempt_id: Some(attempt_id),
            ..AttemptResult::default()
        })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: Mutex<Vec<String>>,
}

impl ExternalNavigator for RecordingNavigator {
    fn navigate(&self, target: &Url) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(target.to_string());
        }
    }
}

struct TestApp {
    services: AppServices,
    navigator: Arc<RecordingNavigator>,
}

impl UiApp for TestApp {
    fn auth_service(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn external_navigator(&self) -> Arc<dyn ExternalNavigator> {
        Arc::clone(&self.navigator) as Arc<dyn ExternalNavigator>
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    AuthCallback(String),
    Tests,
    TestTaking(u64),
    Result(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::AuthCallback(code) => rsx! { AuthCallbackView { code } },
        ViewKind::Tests => rsx! { TestsView {} },
        ViewKind::TestTaking(id) => rsx! { TestTakingView { id } },
        ViewKind::Result(id) => rsx! { ResultView { id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: InMemorySessionStore,
    pub api: Arc<FixtureApi>,
    pub navigator: Arc<RecordingNavigator>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

struct Fixture {
    app: Arc<TestApp>,
    store: InMemorySessionStore,
    api: Arc<FixtureApi>,
    navigator: Arc<RecordingNavigator>,
}

fn fixture() -> Fixture {
    let store = InMemorySessionStore::new();
    let storage = Storage {
        session: Arc::new(store.clone()),
    };
    let api = Arc::new(FixtureApi::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let config = ClientConfig::new(Url::parse("http://localhost:8080").expect("base url"))
        .expect("client config")
        .with_oauth_start_url(Url::parse(OAUTH_START).expect("oauth url"));

    let services = AppServices::new(&storage, Arc::clone(&api) as Arc<dyn QuizApi>, &config);
    let app = Arc::new(TestApp {
        services,
        navigator: Arc::clone(&navigator),
    });

    Fixture {
        app,
        store,
        api,
        navigator,
    }
}

/// Builds the view over a fresh in-memory store. `store` may be seeded
/// before the first `rebuild`.
pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let Fixture {
        app,
        store,
        api,
        navigator,
    } = fixture();

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        store,
        api,
        navigator,
    }
}

#[derive(Props, Clone)]
struct AppRouterProps {
    app: Arc<TestApp>,
    history: Rc<dyn History>,
}

impl PartialEq for AppRouterProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppRouterHarness(props: AppRouterProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.history.clone());
    rsx! { Router::<Route> {} }
}

/// The real route table over an in-memory history, so redirects and pushes
/// show up in `current_path`.
pub struct RoutedHarness {
    pub dom: VirtualDom,
    pub store: InMemorySessionStore,
    pub api: Arc<FixtureApi>,
    pub auth: Arc<AuthService>,
    history: Rc<dyn History>,
}

impl RoutedHarness {
    /// Rebuild, then let chained resources and navigations resolve.
    pub async fn settle(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
        for _ in 0..8 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn current_path(&self) -> String {
        self.history.current_route()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_routed_harness(initial_path: &str) -> RoutedHarness {
    let Fixture {
        app, store, api, ..
    } = fixture();
    let auth = app.services.auth();
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(initial_path));

    let dom = VirtualDom::new_with_props(
        AppRouterHarness,
        AppRouterProps {
            app,
            history: Rc::clone(&history),
        },
    );

    RoutedHarness {
        dom,
        store,
        api,
        auth,
        history,
    }
}
