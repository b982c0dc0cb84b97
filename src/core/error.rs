//! Typed error handling for the list-query core
//!
//! The pipeline itself is pure and total: it never errors for empty inputs,
//! absent optional fields, or neutral criteria. Errors only arise at the
//! configuration boundary (loading and validating screen definitions).

use std::fmt;

/// The main error type for the crate
#[derive(Debug)]
pub enum GraderError {
    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraderError::Config(e) => write!(f, "{}", e),
            GraderError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for GraderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraderError::Config(e) => Some(e),
            GraderError::Internal(_) => None,
        }
    }
}

/// Errors related to screen configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse a configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// A screen name appears more than once
    DuplicateScreen { screen: String },

    /// A screen references a field its record type does not have
    UnknownField { screen: String, field: String },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::DuplicateScreen { screen } => {
                write!(f, "Screen '{}' is defined more than once", screen)
            }
            ConfigError::UnknownField { screen, field } => {
                write!(f, "Screen '{}' references unknown field '{}'", screen, field)
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for GraderError {
    fn from(err: ConfigError) -> Self {
        GraderError::Config(err)
    }
}

impl From<serde_yaml::Error> for GraderError {
    fn from(err: serde_yaml::Error) -> Self {
        GraderError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for GraderError {
    fn from(err: std::io::Error) -> Self {
        GraderError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

/// A specialized Result type for configuration operations
pub type GraderResult<T> = Result<T, GraderError>;
