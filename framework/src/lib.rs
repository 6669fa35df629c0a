//! envkit: environment-keyed database profiles and test-run settings
//!
//! Two independent records describe how a project is run:
//! - [`DatabaseEnvironments`] maps each environment name to the storage
//!   driver, connection and script directories it uses
//! - [`TestSettings`] holds the options a test run reads at startup
//!
//! Both load from TOML or JSON through [`config::file`], and can be
//! registered in the process-wide [`Config`] registry.

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod paths;
pub mod testing;

pub use config::{env, env_optional, Config, Environment};
pub use database::{
    Client, Connection, DatabaseEnvironments, DbConnection, DirectoryConfig, EnvironmentProfile,
    StorageTarget,
};
pub use error::ConfigError;
pub use testing::{Reporter, TestSettings};
