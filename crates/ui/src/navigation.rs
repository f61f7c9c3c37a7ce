use dioxus::document::eval;
use dioxus::prelude::spawn;
use tracing::{info, warn};
use url::Url;

/// Leaves the app for `target`. The router is not involved; control comes back
/// through the `/auth/callback` route.
pub trait ExternalNavigator: Send + Sync {
    fn navigate(&self, target: &Url);
}

/// Replaces the current document location in the webview.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebviewNavigator;

impl ExternalNavigator for WebviewNavigator {
    fn navigate(&self, target: &Url) {
        let literal = match serde_json::to_string(target.as_str()) {
            Ok(literal) => literal,
            Err(err) => {
                warn!(error = %err, "cannot encode external navigation target");
                return;
            }
        };
        info!(target = %target, "leaving app for external sign-in");
        let pending = eval(&format!("window.location.assign({literal});"));
        spawn(async move {
            if let Err(err) = pending.await {
                warn!(error = ?err, "external navigation script failed");
            }
        });
    }
}
