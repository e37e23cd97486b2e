use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{PartError, PartName};
use secrecy::SecretString;
use services::{
    AppServices, Clock, HttpSourceConfig, QuestionService, SessionIdentity, UserSession,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
    #[error("invalid --part value")]
    InvalidPart(#[from] PartError),
}

/// Step-by-step quiz on the desktop.
#[derive(Parser)]
#[command(name = "quiz", about = "Answer a short step-by-step quiz")]
struct Args {
    /// Fetch questions from this REST API instead of the local database
    #[arg(long, env = "QUIZ_API_URL")]
    api_url: Option<String>,

    /// SQLite database used when no API URL is given
    #[arg(long = "db", env = "QUIZ_DB_URL", default_value = "sqlite://quiz.sqlite3")]
    db_url: String,

    /// Name shown in the header and the results
    #[arg(long, env = "QUIZ_USER_NAME", default_value = "Guest")]
    name: String,

    /// Bearer token for the question API
    #[arg(long, env = "QUIZ_AUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Parts offered on the first screen
    #[arg(long = "part", default_values_t = default_parts())]
    parts: Vec<String>,

    /// Page fade duration in milliseconds
    #[arg(long, default_value_t = 300)]
    fade_ms: u64,

    /// Timeout for question API requests
    #[arg(long, default_value_t = 10)]
    http_timeout_secs: u64,
}

fn default_parts() -> Vec<String> {
    ["Frontend", "Backend", "Design"].map(String::from).to_vec()
}

struct DesktopApp {
    services: AppServices,
    parts: Vec<PartName>,
    fade: Duration,
}

impl UiApp for DesktopApp {
    fn question_service(&self) -> Arc<QuestionService> {
        self.services.questions()
    }

    fn user_session(&self) -> Arc<UserSession> {
        self.services.session()
    }

    fn parts(&self) -> Vec<PartName> {
        self.parts.clone()
    }

    fn fade_duration(&self) -> Duration {
        self.fade
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
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

    let invalid = || StartupError::InvalidDbUrl {
        raw: db_url.to_string(),
    };
    let path = db_url.strip_prefix("sqlite://").ok_or_else(invalid)?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(invalid().into());
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

async fn build_services(args: &Args) -> Result<AppServices, Box<dyn std::error::Error>> {
    let identity = SessionIdentity::new(
        args.name.trim(),
        args.token.clone().map(SecretString::from),
    );
    let clock = Clock::system();

    if let Some(api_url) = &args.api_url {
        let config = HttpSourceConfig {
            base_url: api_url.clone(),
            auth_token: identity.auth_token.clone(),
            timeout: Duration::from_secs(args.http_timeout_secs),
        };
        return Ok(AppServices::new_http(config, identity, clock)?);
    }

    let db_url = normalize_sqlite_url(&args.db_url);
    prepare_sqlite_file(&db_url)?;
    Ok(AppServices::new_sqlite(&db_url, identity, clock).await?)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing();

    let parts = args
        .parts
        .iter()
        .map(PartName::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(StartupError::from)?;
    let services = build_services(&args).await?;
    tracing::info!(
        parts = parts.len(),
        fade_ms = args.fade_ms,
        has_token = args.token.is_some(),
        "starting quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        parts,
        fade: Duration::from_millis(args.fade_ms),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Step Quiz")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/quiz.sqlite3");
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/quiz.sqlite3"), "{url}");
        assert_eq!(normalize_sqlite_url("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/q.db"),
            "sqlite:///tmp/q.db"
        );
    }

    #[test]
    fn defaults_match_the_documented_flags() {
        let args = Args::try_parse_from(["quiz"]).unwrap();
        assert_eq!(args.parts, default_parts());
        assert_eq!(args.fade_ms, 300);
        assert_eq!(args.http_timeout_secs, 10);
    }

    #[test]
    fn parts_can_be_repeated() {
        let args = Args::try_parse_from(["quiz", "--part", "Data", "--part", "Ops"]).unwrap();
        assert_eq!(args.parts, vec!["Data".to_string(), "Ops".to_string()]);
    }

    #[test]
    fn file_url_without_path_is_rejected() {
        assert!(prepare_sqlite_file("sqlite://").is_err());
        assert!(prepare_sqlite_file("postgres://x").is_err());
    }
}
