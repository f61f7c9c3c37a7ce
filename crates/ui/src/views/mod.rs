mod auth_callback;
mod components;
mod login;
mod result;
mod state;
mod test_taking;
mod tests;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth_callback::AuthCallbackView;
pub use login::LoginView;
pub use result::ResultView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use test_taking::TestTakingView;
pub use tests::TestsView;
