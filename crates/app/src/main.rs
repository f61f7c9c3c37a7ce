use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{API_BASE_URL_VAR, OAUTH_URL_VAR};
use services::{AppServices, AuthService, ClientConfig, ConfigError, QuizService};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, ExternalNavigator, UiApp, WebviewNavigator, build_app_context};

const DB_URL_VAR: &str = "QUIZ_DB_URL";
const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    navigator: Arc<dyn ExternalNavigator>,
}

impl UiApp for DesktopApp {
    fn auth_service(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn external_navigator(&self) -> Arc<dyn ExternalNavigator> {
        Arc::clone(&self.navigator)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    api_base_url: Option<String>,
    oauth_url: Option<String>,
    show_help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--api <url>] [--oauth-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --api http://localhost:8080");
    eprintln!("  --oauth-url <api>/auth/google");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DB_URL_VAR}, {API_BASE_URL_VAR}, {OAUTH_URL_VAR}, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            db_url: env(DB_URL_VAR)
                .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url),
            api_base_url: None,
            oauth_url: None,
            show_help: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    parsed.db_url = normalize_sqlite_url(value);
                }
                "--api" => parsed.api_base_url = Some(require_value(args, "--api")?),
                "--oauth-url" => parsed.oauth_url = Some(require_value(args, "--oauth-url")?),
                "--help" | "-h" => parsed.show_help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// Environment config with command-line overrides on top.
    fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        ClientConfig::from_lookup(|name| match name {
            API_BASE_URL_VAR if self.api_base_url.is_some() => self.api_base_url.clone(),
            OAUTH_URL_VAR if self.oauth_url.is_some() => self.oauth_url.clone(),
            _ => std::env::var(name).ok(),
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.show_help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let config = parsed.client_config()?;
    info!(
        api = %config.api_base_url,
        oauth = %config.oauth_start_url,
        db = %parsed.db_url,
        "starting quiz client"
    );

    // Open + migrate SQLite at startup; the session survives restarts.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url, &config).await?;

    match services.session().load_session().await {
        Ok(session) if session.is_authenticated() => {
            info!(user = ?session.user_id().map(|u| u.as_str()), "resuming stored session");
        }
        Ok(_) => info!("no stored session"),
        Err(err) => warn!(error = %err, "stored session unreadable"),
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        navigator: Arc::new(WebviewNavigator),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
