//! Crate-wide error type
//!
//! Every fallible operation in envkit returns [`ConfigError`]. Binaries print
//! the error and exit non-zero; the library never panics on bad input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or consuming configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing a file failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The file or directory involved
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file could not be parsed
    #[error("Failed to parse {}: {message}", path.display())]
    Parse {
        /// The file that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A record could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// The file extension does not map to a known format
    #[error("Unsupported config format for {} (expected .toml or .json)", path.display())]
    UnsupportedFormat {
        /// The offending path
        path: PathBuf,
    },

    /// The selected environment has no profile
    #[error("No database profile for environment '{name}' (known: {})", known.join(", "))]
    UnknownEnvironment {
        /// The requested environment name
        name: String,
        /// Environment names that do exist
        known: Vec<String>,
    },

    /// A field holds a value that fails validation
    #[error("Invalid value for '{field}': {message}")]
    Invalid {
        /// Dotted path of the field (e.g. `development.client`)
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The storage driver reported an error
    #[error("Database error: {0}")]
    Database(String),

    /// An async test body ran past the configured timeout
    #[error("Test timed out after {after_ms}ms")]
    TestTimedOut {
        /// The timeout that was exceeded
        after_ms: u64,
    },

    /// A scaffolded script would overwrite an existing file
    #[error("Script already exists at {}", path.display())]
    ScriptExists {
        /// Path of the existing script
        path: PathBuf,
    },

    /// A script name is not usable as a file stem
    #[error("'{0}' is not a valid script name")]
    InvalidScriptName(String),

    /// A typed record was requested from the registry before registration
    #[error("Config '{type_name}' not registered")]
    NotRegistered {
        /// The type name that was looked up
        type_name: &'static str,
    },
}

impl ConfigError {
    /// Create an Io error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a Parse error for a path
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create an Invalid error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Create a NotRegistered error for a given type
    pub fn not_registered<T: ?Sized>() -> Self {
        Self::NotRegistered {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Prefix the field of an Invalid error with a parent name
    ///
    /// Other variants pass through untouched.
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::Invalid { field, message } => Self::Invalid {
                field: format!("{}.{}", parent, field),
                message,
            },
            other => other,
        }
    }
}

impl From<sea_orm::DbErr> for ConfigError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}
