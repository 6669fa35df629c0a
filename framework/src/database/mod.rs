//! Database profiles keyed by environment
//!
//! A [`DatabaseEnvironments`] map names each environment (`development`,
//! `test`, ...) and gives it a self-contained [`EnvironmentProfile`]. At
//! startup the active environment picks one profile, which says which
//! driver to load, how to connect, and where migration and seed scripts
//! live.
//!
//! # Example
//!
//! ```rust
//! use envkit::{Connection, DatabaseEnvironments, Environment, EnvironmentProfile};
//!
//! let environments = DatabaseEnvironments::new()
//!     .with("development", EnvironmentProfile::builder()
//!         .connection(Connection::file("./main.sqlite3"))
//!         .build())
//!     .with("test", EnvironmentProfile::builder().build());
//!
//! let profile = environments.profile(&Environment::Test).unwrap();
//! assert!(profile.connection.is_in_memory());
//! ```

pub mod connection;
pub mod profile;
pub mod scripts;

pub use connection::DbConnection;
pub use profile::{
    Client, Connection, DirectoryConfig, EnvironmentProfile, EnvironmentProfileBuilder,
    StorageTarget,
};
pub use scripts::{Script, ScriptKind};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::Environment;
use crate::error::ConfigError;

/// Profiles keyed by environment name
///
/// Names are unique by construction; iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatabaseEnvironments {
    profiles: BTreeMap<String, EnvironmentProfile>,
}

impl DatabaseEnvironments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the profile for `name`, returning the previous one
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        profile: EnvironmentProfile,
    ) -> Option<EnvironmentProfile> {
        self.profiles.insert(name.into(), profile)
    }

    /// Chaining form of [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, profile: EnvironmentProfile) -> Self {
        self.insert(name, profile);
        self
    }

    pub fn get(&self, name: &str) -> Option<&EnvironmentProfile> {
        self.profiles.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvironmentProfile)> {
        self.profiles.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Select the profile for an environment
    ///
    /// # Errors
    ///
    /// `UnknownEnvironment` when the environment has no profile.
    pub fn profile(&self, env: &Environment) -> Result<&EnvironmentProfile, ConfigError> {
        let profile = self
            .get(env.name())
            .ok_or_else(|| ConfigError::UnknownEnvironment {
                name: env.name().to_string(),
                known: self.names().map(str::to_string).collect(),
            })?;
        tracing::debug!(
            environment = %env,
            client = %profile.client,
            "selected database profile"
        );
        Ok(profile)
    }

    /// Validate every profile
    ///
    /// Error fields are prefixed with the environment name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_empty() {
            return Err(ConfigError::invalid(
                "environments",
                "at least one environment is required",
            ));
        }
        for (name, profile) in self.iter() {
            profile.validate().map_err(|e| e.within(name))?;
        }
        Ok(())
    }
}
