//! Structured logging setup for adcgraph
//!
//! Initializes the `tracing` subscriber used by the CLI and by hosts that
//! embed the ingestion engine. Console output is the default; JSON output is
//! available for log shipping. `RUST_LOG` always takes precedence over the
//! configured level.
//!
//! # Example
//!
//! ```no_run
//! use adcgraph_core::logging;
//!
//! logging::init_from_env();
//!
//! tracing::info!(lines = 120, "Starting ingestion");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Crate targets that follow the configured level.
const TARGETS: [&str; 4] = [
    "adcgraph",
    "adcgraph_core",
    "adcgraph_pipeline",
    "adcgraph_cli",
];

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., adcgraph_pipeline::phases) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Write to stderr so stdout stays clean for rendered graphs
    pub use_stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
            use_stderr: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// JSON output with source locations, for log collectors.
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            use_json: true,
            include_target: true,
            include_location: true,
            use_stderr: true,
        }
    }

    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            ..Default::default()
        }
    }
}

/// Parses a log level, falling back to INFO on anything unrecognized.
///
/// ```
/// use adcgraph_core::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("chatty"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    TARGETS
        .iter()
        .filter_map(|target| format!("{}={}", target, level).parse::<Directive>().ok())
        .fold(EnvFilter::new("warn"), |filter, directive| {
            filter.add_directive(directive)
        })
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        let layer = fmt::layer()
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        match (config.use_json, config.use_stderr) {
            (true, true) => tracing_subscriber::registry()
                .with(filter)
                .with(layer.json().with_writer(std::io::stderr))
                .init(),
            (true, false) => tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init(),
            (false, true) => tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_writer(std::io::stderr))
                .init(),
            (false, false) => tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init(),
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from `ADCGRAPH_LOG_LEVEL` and `ADCGRAPH_LOG_JSON`.
pub fn init_from_env() {
    let level_str = env::var("ADCGRAPH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let level = parse_level(&level_str);

    let use_json = env::var("ADCGRAPH_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    init_logging(LoggingConfig {
        level,
        use_json,
        ..Default::default()
    });
}
