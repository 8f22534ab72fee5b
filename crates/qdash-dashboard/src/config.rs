//! Configuration management for the dashboard server.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with QDASH_ prefix)
//! 3. .env files
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound on the simulator qubit limit (2^30 amplitudes is ~16 GiB).
pub const MAX_SIMULATOR_QUBITS: u32 = 30;

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Example jobs to create at startup. `None` leaves the choice to the caller.
    pub seed_jobs: Option<usize>,
    /// Upper bound on a single executor call, in seconds. Unbounded when unset.
    pub execution_timeout_secs: Option<u64>,
    /// Local simulator settings.
    pub simulator: SimulatorConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Local simulator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Backend identifier the simulator serves.
    pub name: String,
    /// Largest job the simulator accepts.
    pub max_qubits: u32,
    /// Fixed sampling seed, for reproducible counts.
    pub seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable console output (for development).
    #[default]
    Console,
    /// JSON structured logging (for production).
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(LogFormat::Console),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::ValidationError(format!(
                "Invalid log format: {other}"
            ))),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 5000).into(),
            seed_jobs: None,
            execution_timeout_secs: None,
            simulator: SimulatorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            name: qdash_adapter_sim::DEFAULT_NAME.to_string(),
            max_qubits: qdash_adapter_sim::DEFAULT_MAX_QUBITS,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Console,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: DashboardConfig = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load .env file if it exists
    /// 2. Load from file if provided
    /// 3. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => DashboardConfig::default(),
        };

        let config = config.merge_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Merge environment variables into this configuration.
    ///
    /// Only variables that are set override the file-loaded (or default)
    /// values. A variable that is set but does not parse is an error.
    pub fn merge_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("QDASH_BIND") {
            self.bind_address = parse_var("QDASH_BIND", &v)?;
        }
        if let Some(v) = lookup("QDASH_SEED_JOBS") {
            self.seed_jobs = Some(parse_var("QDASH_SEED_JOBS", &v)?);
        }
        if let Some(v) = lookup("QDASH_EXECUTION_TIMEOUT_SECS") {
            self.execution_timeout_secs = Some(parse_var("QDASH_EXECUTION_TIMEOUT_SECS", &v)?);
        }

        // Simulator
        if let Some(v) = lookup("QDASH_SIMULATOR_NAME") {
            self.simulator.name = v;
        }
        if let Some(v) = lookup("QDASH_MAX_QUBITS") {
            self.simulator.max_qubits = parse_var("QDASH_MAX_QUBITS", &v)?;
        }
        if let Some(v) = lookup("QDASH_SIMULATOR_SEED") {
            self.simulator.seed = Some(parse_var("QDASH_SIMULATOR_SEED", &v)?);
        }

        // Logging
        if let Some(v) = lookup("QDASH_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("QDASH_LOG_FORMAT") {
            self.logging.format = v.parse()?;
        }

        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.execution_timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "execution_timeout_secs must be greater than 0; omit it to disable the timeout"
                    .to_string(),
            ));
        }

        if self.simulator.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "simulator.name must not be empty".to_string(),
            ));
        }

        if self.simulator.max_qubits == 0 || self.simulator.max_qubits > MAX_SIMULATOR_QUBITS {
            return Err(ConfigError::ValidationError(format!(
                "simulator.max_qubits must be between 1 and {MAX_SIMULATOR_QUBITS}, got {}",
                self.simulator.max_qubits
            )));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        Ok(())
    }

    /// The configured executor timeout, if any.
    pub fn execution_timeout(&self) -> Option<Duration> {
        self.execution_timeout_secs.map(Duration::from_secs)
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::ValidationError(format!("Invalid {key} value '{value}': {e}")))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.bind_address.port(), 5000);
        assert_eq!(config.seed_jobs, None);
        assert_eq!(config.execution_timeout(), None);
        assert_eq!(config.simulator.name, "AerSimulator");
        assert_eq!(config.simulator.max_qubits, 20);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Console);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = DashboardConfig::default()
            .merge_env(env(&[
                ("QDASH_BIND", "0.0.0.0:8080"),
                ("QDASH_SEED_JOBS", "5"),
                ("QDASH_EXECUTION_TIMEOUT_SECS", "30"),
                ("QDASH_MAX_QUBITS", "12"),
                ("QDASH_LOG_FORMAT", "JSON"),
            ]))
            .unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.seed_jobs, Some(5));
        assert_eq!(config.execution_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.simulator.max_qubits, 12);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_unset_env_leaves_values() {
        let base = DashboardConfig {
            seed_jobs: Some(2),
            ..DashboardConfig::default()
        };
        let merged = base.clone().merge_env(env(&[])).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn test_invalid_env_value_is_error() {
        let err = DashboardConfig::default()
            .merge_env(env(&[("QDASH_BIND", "not-an-address")]))
            .unwrap_err();
        assert!(err.to_string().contains("QDASH_BIND"));

        assert!(
            DashboardConfig::default()
                .merge_env(env(&[("QDASH_LOG_FORMAT", "xml")]))
                .is_err()
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DashboardConfig::default();
        config.execution_timeout_secs = Some(0);
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.simulator.max_qubits = 0;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.simulator.max_qubits = MAX_SIMULATOR_QUBITS + 1;
        assert!(config.validate().is_err());

        let mut config = DashboardConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "bind_address: \"127.0.0.1:9000\"\nseed_jobs: 3\nsimulator:\n  max_qubits: 8\n  seed: 42\nlogging:\n  format: json"
        )
        .unwrap();

        let config = DashboardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bind_address.port(), 9000);
        assert_eq!(config.seed_jobs, Some(3));
        assert_eq!(config.simulator.max_qubits, 8);
        assert_eq!(config.simulator.seed, Some(42));
        assert_eq!(config.simulator.name, "AerSimulator");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(
            DashboardConfig::from_file("/nonexistent/qdash.yaml"),
            Err(ConfigError::IoError(_))
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_address: [1, 2").unwrap();
        assert!(matches!(
            DashboardConfig::from_file(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
