// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Logging configuration file types and parsing.
//!
//! JSON5 configuration format supporting:
//! - A default level threshold
//! - Per-category thresholds (most specific category wins)
//! - Output destination and record format
//! - Comments and trailing commas

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::logging::{CategoryFilter, LogLevel, LogSink, OutputFormat, StreamBackend, WriterSink};

/// Logging configuration (JSON5 file format)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Threshold for categories without a filter of their own
    #[serde(default = "default_level")]
    pub level: LogLevel,

    /// Per-category thresholds
    #[serde(default)]
    pub filters: Vec<FilterRule>,

    /// Where records are written
    #[serde(default)]
    pub output: Output,

    /// How message records are rendered
    #[serde(default)]
    pub format: OutputFormat,
}

/// Threshold for one category and its children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterRule {
    /// Dot-separated category path
    pub category: String,

    pub level: LogLevel,
}

/// Output destination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stderr,
    Stdout,
    /// Append to a file, creating it if needed
    File(PathBuf),
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            filters: Vec::new(),
            output: Output::default(),
            format: OutputFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration from a JSON5 file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a JSON5 string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize configuration (plain JSON is valid JSON5)
    pub fn to_json5(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Save configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json5())
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (idx, rule) in self.filters.iter().enumerate() {
            validate_category(&rule.category)?;
            if let Some(prev_idx) = seen.insert(&rule.category, idx) {
                return Err(ConfigError::DuplicateCategory {
                    category: rule.category.clone(),
                    rule_indices: (prev_idx, idx),
                });
            }
        }
        if let Output::File(path) = &self.output {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::EmptyOutputPath);
            }
        }
        Ok(())
    }

    /// Build the category filter described by this configuration
    pub fn build_filter(&self) -> CategoryFilter {
        CategoryFilter::with_categories(
            self.level,
            self.filters
                .iter()
                .map(|rule| (rule.category.clone(), rule.level)),
        )
    }

    /// Validate, open the output and build a ready-to-install backend
    pub fn build_backend(&self) -> Result<StreamBackend, ConfigError> {
        self.validate()?;

        let sink: Box<dyn LogSink> = match &self.output {
            Output::Stderr => Box::new(WriterSink::stderr(self.format)),
            Output::Stdout => Box::new(WriterSink::stdout(self.format)),
            Output::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| ConfigError::IoError(path.clone(), e.to_string()))?;
                Box::new(WriterSink::new(file, self.format))
            }
        };

        Ok(StreamBackend::new(self.build_filter(), sink))
    }
}

/// Validate a dot-separated category name
pub fn validate_category(name: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidCategory {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("category name cannot be empty"));
    }
    if name.split('.').any(str::is_empty) {
        return Err(invalid("category segments cannot be empty"));
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("category name contains whitespace or control characters"));
    }
    Ok(())
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access '{}': {}", .0.display(), .1)]
    IoError(PathBuf, String),

    #[error("failed to parse config: {0}")]
    ParseError(String),

    #[error("invalid category '{name}': {reason}")]
    InvalidCategory { name: String, reason: String },

    #[error("duplicate filter for category '{category}' (filters {} and {})", .rule_indices.0, .rule_indices.1)]
    DuplicateCategory {
        category: String,
        rule_indices: (usize, usize),
    },

    #[error("output file path cannot be empty")]
    EmptyOutputPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogBackend;

    #[test]
    fn test_parse_minimal_config() {
        let config = LoggingConfig::parse("{}").unwrap();
        assert_eq!(config, LoggingConfig::default());
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.output, Output::Stderr);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_full_config_with_comments() {
        let content = r#"{
            // Quiet by default
            level: "warn",
            filters: [
                { category: "app.net", level: "trace" },
                { category: "app.ui", level: "none" },
            ],
            output: { file: "/var/log/app.log" },
            format: "json",
        }"#;

        let config = LoggingConfig::parse(content).unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.filters.len(), 2);
        assert_eq!(config.filters[0].category, "app.net");
        assert_eq!(config.filters[1].level, LogLevel::None);
        assert_eq!(config.output, Output::File(PathBuf::from("/var/log/app.log")));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_accepts_level_aliases() {
        let config = LoggingConfig::parse(
            r#"{ level: "warning", filters: [{ category: "app", level: "ALL" }] }"#,
        )
        .unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.filters[0].level, LogLevel::Trace);
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        let err = LoggingConfig::parse(r#"{ level: "loud" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validate_duplicate_category() {
        let config = LoggingConfig {
            filters: vec![
                FilterRule {
                    category: "app".to_string(),
                    level: LogLevel::Info,
                },
                FilterRule {
                    category: "app".to_string(),
                    level: LogLevel::Trace,
                },
            ],
            ..Default::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateCategory {
                category: "app".to_string(),
                rule_indices: (0, 1),
            })
        );
    }

    #[test]
    fn test_validate_category_names() {
        assert!(validate_category("app").is_ok());
        assert!(validate_category("app.net.tcp").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category(".app").is_err());
        assert!(validate_category("app.").is_err());
        assert!(validate_category("app..net").is_err());
        assert!(validate_category("app net").is_err());
    }

    #[test]
    fn test_validate_empty_output_path() {
        let config = LoggingConfig {
            output: Output::File(PathBuf::new()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyOutputPath));
    }

    #[test]
    fn test_build_filter() {
        let config = LoggingConfig::parse(
            r#"{ level: "error", filters: [{ category: "app", level: "debug" }] }"#,
        )
        .unwrap();
        let filter = config.build_filter();

        assert_eq!(filter.threshold("app.net"), LogLevel::Debug);
        assert_eq!(filter.threshold("other"), LogLevel::Error);
    }

    #[test]
    fn test_build_backend_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let config = LoggingConfig {
            output: Output::File(path.clone()),
            ..Default::default()
        };

        let backend = config.build_backend().unwrap();
        backend.write(LogLevel::Info, "app", b"line\n");
        backend.write(LogLevel::Debug, "app", b"filtered\n");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }

    #[test]
    fn test_build_backend_reports_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.log");
        let config = LoggingConfig {
            output: Output::File(path.clone()),
            ..Default::default()
        };

        match config.build_backend() {
            Err(ConfigError::IoError(p, _)) => assert_eq!(p, path),
            other => panic!("expected IoError, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logging.json5");
        let config = LoggingConfig {
            level: LogLevel::Trace,
            filters: vec![FilterRule {
                category: "app.io".to_string(),
                level: LogLevel::Warn,
            }],
            output: Output::Stdout,
            format: OutputFormat::Json,
        };

        config.save_to_file(&path).unwrap();
        assert_eq!(LoggingConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::DuplicateCategory {
            category: "app".to_string(),
            rule_indices: (1, 3),
        };
        assert_eq!(
            err.to_string(),
            "duplicate filter for category 'app' (filters 1 and 3)"
        );
        let err = ConfigError::IoError(PathBuf::from("/tmp/x"), "denied".to_string());
        assert_eq!(err.to_string(), "failed to access '/tmp/x': denied");
    }
}
