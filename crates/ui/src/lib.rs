pub mod app;
pub mod context;
pub mod navigation;
pub mod routes;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use navigation::{ExternalNavigator, WebviewNavigator};
pub use routes::Route;
