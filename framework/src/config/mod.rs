//! Configuration module for envkit
//!
//! This module provides:
//! - Environment detection from `APP_ENV` with `.env` file loading
//! - A process-wide registry of typed config records
//! - TOML/JSON loading and saving of those records
//!
//! # Example
//!
//! ```rust,no_run
//! use envkit::{Config, DatabaseEnvironments};
//!
//! let env = Config::init(std::path::Path::new("."));
//! let environments: DatabaseEnvironments =
//!     envkit::config::file::load(std::path::Path::new("config/database.toml")).unwrap();
//! Config::register(environments);
//!
//! let profile = Config::database_profile().unwrap();
//! println!("{} uses {}", env, profile.client);
//! ```

pub mod env;
pub mod file;
pub mod repository;

pub use env::{env, env_optional, load_dotenv, load_dotenv_for, Environment};

use std::path::Path;

use crate::database::{DatabaseEnvironments, EnvironmentProfile};
use crate::error::ConfigError;

/// Main Config facade for accessing configuration
///
/// Records are registered once at startup and are read-only afterwards.
pub struct Config;

impl Config {
    /// Initialize the configuration system
    ///
    /// Loads `.env` files from `project_root` and returns the detected
    /// environment. Call this before reading any environment-dependent value.
    pub fn init(project_root: &Path) -> Environment {
        let env = env::load_dotenv(project_root);
        tracing::debug!(environment = %env, "config initialized");
        env
    }

    /// Initialize for an explicitly chosen environment
    ///
    /// Loads the `.env` files of `env` instead of the one named by APP_ENV.
    pub fn init_for(project_root: &Path, env: &Environment) {
        load_dotenv_for(project_root, env);
        tracing::debug!(environment = %env, "config initialized");
    }

    /// Get a typed config record from the registry
    pub fn get<T: std::any::Any + Send + Sync + Clone>() -> Option<T> {
        repository::get::<T>()
    }

    /// Register a typed config record
    ///
    /// A later registration of the same type replaces the earlier one.
    pub fn register<T: std::any::Any + Send + Sync>(config: T) {
        repository::register(config);
    }

    /// Check if a config type is registered
    pub fn has<T: std::any::Any>() -> bool {
        repository::has::<T>()
    }

    /// Get the current environment
    pub fn environment() -> Environment {
        Environment::detect()
    }

    /// Resolve the profile for the current environment
    ///
    /// # Errors
    ///
    /// Returns an error if no `DatabaseEnvironments` is registered or the
    /// current environment has no profile.
    pub fn database_profile() -> Result<EnvironmentProfile, ConfigError> {
        Self::database_profile_for(&Self::environment())
    }

    /// Resolve the profile for a given environment
    pub fn database_profile_for(env: &Environment) -> Result<EnvironmentProfile, ConfigError> {
        select_profile(Self::get::<DatabaseEnvironments>(), env)
    }
}

fn select_profile(
    environments: Option<DatabaseEnvironments>,
    env: &Environment,
) -> Result<EnvironmentProfile, ConfigError> {
    let environments =
        environments.ok_or_else(ConfigError::not_registered::<DatabaseEnvironments>)?;
    environments.profile(env).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Connection;

    fn environments() -> DatabaseEnvironments {
        DatabaseEnvironments::new()
            .with(
                "development",
                EnvironmentProfile::builder()
                    .connection(Connection::file("./main.sqlite3"))
                    .build(),
            )
            .with("test", EnvironmentProfile::builder().build())
    }

    #[test]
    fn test_select_profile_without_registration() {
        let err = select_profile(None, &Environment::Development).unwrap_err();
        assert!(matches!(err, ConfigError::NotRegistered { .. }));
    }

    #[test]
    fn test_select_profile_unknown_environment() {
        let env = Environment::Custom("staging".to_string());
        let err = select_profile(Some(environments()), &env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownEnvironment { ref name, .. } if name == "staging"
        ));
    }

    #[test]
    fn test_registered_environments_drive_selection() {
        Config::register(environments());
        assert!(Config::has::<DatabaseEnvironments>());

        let test = Config::database_profile_for(&Environment::Test).unwrap();
        assert!(test.connection.is_in_memory());

        let dev = Config::database_profile_for(&Environment::Development).unwrap();
        assert!(!dev.connection.is_in_memory());

        let missing = Config::database_profile_for(&Environment::Custom("qa".to_string()));
        assert!(matches!(missing, Err(ConfigError::UnknownEnvironment { .. })));
    }
}
