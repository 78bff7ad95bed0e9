use crate::model::LbMethod;
use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_JSON: bool = false;
const DEFAULT_STRICT: bool = false;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdcGraphConfig {
    /// Method stamped on virtual servers declared without `-lbMethod`.
    pub default_lb_method: LbMethod,
    pub log_level: String,
    pub log_json: bool,
    /// Treat a graph with diagnostics as a failed run.
    pub strict: bool,
}

impl Default for AdcGraphConfig {
    fn default() -> Self {
        Self {
            default_lb_method: LbMethod::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: DEFAULT_LOG_JSON,
            strict: DEFAULT_STRICT,
        }
    }
}

impl AdcGraphConfig {
    /// Built-in defaults overlaid with `ADCGRAPH_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_lb_method = env::var("ADCGRAPH_DEFAULT_LB_METHOD")
            .ok()
            .map(|v| LbMethod::from_token(v.trim()))
            .unwrap_or(defaults.default_lb_method);

        let log_level = env::var("ADCGRAPH_LOG_LEVEL")
            .unwrap_or(defaults.log_level)
            .to_lowercase();

        let log_json = parse_bool_var("ADCGRAPH_LOG_JSON")?.unwrap_or(defaults.log_json);
        let strict = parse_bool_var("ADCGRAPH_STRICT")?.unwrap_or(defaults.strict);

        Ok(Self {
            default_lb_method,
            log_level,
            log_json,
            strict,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_lb_method.is_custom() {
            return Err(ConfigError::ValidationFailed(format!(
                "Unknown default load-balancing method: {}. Valid options: {}",
                self.default_lb_method,
                LbMethod::all_variants()
                    .iter()
                    .map(LbMethod::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert(
            "default_lb_method".to_string(),
            self.default_lb_method.to_string(),
        );
        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert("log_json".to_string(), self.log_json.to_string());
        map.insert("strict".to_string(), self.strict.to_string());
        map
    }
}

fn parse_bool_var(key: &str) -> Result<Option<bool>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<bool>()
            .map(Some)
            .map_err(|e| ConfigError::ParseError {
                field: key.to_string(),
                error: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

impl fmt::Display for AdcGraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "adcgraph configuration:")?;
        writeln!(f, "  Default LB Method: {}", self.default_lb_method)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        writeln!(f, "  Strict: {}", self.strict)?;
        Ok(())
    }
}
