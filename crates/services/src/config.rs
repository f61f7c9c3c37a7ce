use std::env;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

pub const API_BASE_URL_VAR: &str = "QUIZ_API_BASE_URL";
pub const OAUTH_URL_VAR: &str = "QUIZ_OAUTH_URL";

/// Where the backend lives and where the OAuth flow starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub oauth_start_url: Url,
}

impl ClientConfig {
    /// Config for `api_base_url` with the OAuth start at `<base>/auth/google`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CannotBeBase` for urls such as `mailto:` that have no path.
    pub fn new(api_base_url: Url) -> Result<Self, ConfigError> {
        let oauth_start_url = join_segments(&api_base_url, &["auth", "google"])?;
        Ok(Self {
            api_base_url,
            oauth_start_url,
        })
    }

    #[must_use]
    pub fn with_oauth_start_url(mut self, url: Url) -> Self {
        self.oauth_start_url = url;
        self
    }

    /// Read `QUIZ_API_BASE_URL` and `QUIZ_OAUTH_URL`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to something that is not a url.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is not a url.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_raw = non_blank(API_BASE_URL_VAR).unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let config = Self::new(parse_url(API_BASE_URL_VAR, &base_raw)?)?;

        match non_blank(OAUTH_URL_VAR) {
            Some(raw) => Ok(config.with_oauth_start_url(parse_url(OAUTH_URL_VAR, &raw)?)),
            None => Ok(config),
        }
    }
}

/// Parse a url supplied through `var` (env variable or flag name).
///
/// # Errors
///
/// Returns `ConfigError::InvalidUrl` naming `var` when `raw` does not parse.
pub fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        var,
        raw: raw.to_string(),
        source,
    })
}

/// Append path segments to `base`, keeping any existing base path.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, ConfigError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ConfigError::CannotBeBase(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
