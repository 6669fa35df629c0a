//! Opening a storage connection for a profile

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::database::profile::{EnvironmentProfile, StorageTarget};
use crate::error::ConfigError;

/// Clonable handle to a sea-orm connection
///
/// # Example
///
/// ```rust,ignore
/// let profile = Config::database_profile()?;
/// let conn = DbConnection::connect(&profile).await?;
/// conn.ping().await?;
/// ```
#[derive(Clone)]
pub struct DbConnection {
    inner: Arc<DatabaseConnection>,
}

impl DbConnection {
    /// Connect using a profile
    ///
    /// For file-backed SQLite profiles the parent directories are created
    /// first; the file itself is created by the `mode=rwc` URL.
    pub async fn connect(profile: &EnvironmentProfile) -> Result<Self, ConfigError> {
        if profile.client.is_sqlite() {
            if let StorageTarget::File(path) = profile.connection.target() {
                ensure_parent(&path)?;
            }
        }

        let url = profile.database_url();
        let mut opt = ConnectOptions::new(&url);
        opt.connect_timeout(Duration::from_secs(30)).sqlx_logging(false);

        // Every pooled connection to `:memory:` gets its own database
        if profile.connection.is_in_memory() {
            opt.max_connections(1).min_connections(1);
        }

        let conn = Database::connect(opt).await?;
        tracing::debug!(url = %url, "database connected");

        Ok(Self {
            inner: Arc::new(conn),
        })
    }

    /// Round-trip a trivial statement
    pub async fn ping(&self) -> Result<(), ConfigError> {
        self.inner.execute_unprepared("SELECT 1").await?;
        Ok(())
    }

    pub fn inner(&self) -> &DatabaseConnection {
        &self.inner
    }
}

impl std::ops::Deref for DbConnection {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

fn ensure_parent(path: &Path) -> Result<(), ConfigError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))
        }
        _ => Ok(()),
    }
}
