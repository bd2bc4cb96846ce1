use std::str::FromStr;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of the console layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Build the filter directive used when `RUST_LOG` is not set.
///
/// Our own crates log at `level`; HTTP internals are held to warn.
fn default_directive(level: &str) -> String {
    format!(
        "nusmods_sync={level},nusmods_cache={level},nusmods_calendar={level},nusmods_config={level},reqwest=warn,hyper=warn,redis=warn"
    )
}

/// Initialize console logging.
///
/// # Configuration
///
/// - **Filter**: `RUST_LOG` if set, otherwise built from `LOG_LEVEL` (default: "info")
/// - **Format**: `LOG_FORMAT` = `compact` (default) or `json`
/// - **Output**: stderr, so command output on stdout stays clean
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let format = std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LogFormat::Compact);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&log_level)));

    let console_layer = match format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(console_layer).init();
}
