//! A single environment's connection profile

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// SQLite's name for a private in-memory database
pub const MEMORY: &str = ":memory:";

/// Descriptors that open a private in-memory SQLite database
const MEMORY_URLS: [&str; 3] = [MEMORY, "sqlite::memory:", "sqlite://:memory:"];

/// Storage driver to load
///
/// Each variant is one driver identifier, spelled exactly as it is
/// written. `Other` holds anything else; `Other("sqlite3")` compares and
/// hashes equal to `Sqlite3`, so a record stays equal after it is saved
/// and loaded again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Client {
    Sqlite3,
    Pg,
    Mysql,
    Mysql2,
    Other(String),
}

impl Client {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Sqlite3 => "sqlite3",
            Self::Pg => "pg",
            Self::Mysql => "mysql",
            Self::Mysql2 => "mysql2",
            Self::Other(name) => name.as_str(),
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.as_str() == "sqlite3"
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Client {}

impl std::hash::Hash for Client {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl TryFrom<String> for Client {
    type Error = ConfigError;

    /// Names are kept verbatim; only blank names are rejected
    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.as_str() {
            n if n.trim().is_empty() => Err(ConfigError::invalid("client", "must not be empty")),
            "sqlite3" => Ok(Self::Sqlite3),
            "pg" => Ok(Self::Pg),
            "mysql" => Ok(Self::Mysql),
            "mysql2" => Ok(Self::Mysql2),
            _ => Ok(Self::Other(name)),
        }
    }
}

impl From<Client> for String {
    fn from(client: Client) -> Self {
        client.as_str().to_string()
    }
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to reach the storage
///
/// Serialized untagged: `{ filename = "..." }` or a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Connection {
    /// File-backed database
    File { filename: PathBuf },
    /// Opaque connection string such as `:memory:` or a URL
    Descriptor(String),
}

/// Where a connection actually lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    File(PathBuf),
    Memory,
    Url(String),
}

impl Connection {
    pub fn file(filename: impl Into<PathBuf>) -> Self {
        Self::File {
            filename: filename.into(),
        }
    }

    pub fn memory() -> Self {
        Self::Descriptor(MEMORY.to_string())
    }

    pub fn target(&self) -> StorageTarget {
        match self {
            Self::File { filename } if filename.as_os_str() == MEMORY => StorageTarget::Memory,
            Self::File { filename } => StorageTarget::File(filename.clone()),
            Self::Descriptor(d) if MEMORY_URLS.contains(&d.as_str()) => StorageTarget::Memory,
            Self::Descriptor(d) => StorageTarget::Url(d.clone()),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.target() == StorageTarget::Memory
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::File { filename } if filename.as_os_str().is_empty() => Err(
                ConfigError::invalid("connection.filename", "must not be empty"),
            ),
            Self::Descriptor(d) if d.trim().is_empty() => {
                Err(ConfigError::invalid("connection", "must not be empty"))
            }
            _ => Ok(()),
        }
    }
}

/// A directory holding migration or seed scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub directory: PathBuf,
}

impl DirectoryConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// Connection profile for one environment
///
/// Field order matters for TOML output: plain values come before tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentProfile {
    pub client: Client,
    pub use_null_as_default: bool,
    pub connection: Connection,
    pub migrations: DirectoryConfig,
    pub seeds: DirectoryConfig,
}

impl EnvironmentProfile {
    /// Create a builder for a profile
    pub fn builder() -> EnvironmentProfileBuilder {
        EnvironmentProfileBuilder::default()
    }

    pub fn migrations_dir(&self) -> &Path {
        &self.migrations.directory
    }

    pub fn seeds_dir(&self) -> &Path {
        &self.seeds.directory
    }

    /// Check the profile is usable on its own
    ///
    /// Field names in errors are relative to the profile; callers add the
    /// environment name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.as_str().trim().is_empty() {
            return Err(ConfigError::invalid("client", "must not be empty"));
        }
        self.connection.validate()?;
        if self.migrations.directory.as_os_str().is_empty() {
            return Err(ConfigError::invalid("migrations.directory", "must not be empty"));
        }
        if self.seeds.directory.as_os_str().is_empty() {
            return Err(ConfigError::invalid("seeds.directory", "must not be empty"));
        }
        Ok(())
    }

    /// Connection URL understood by sea-orm
    ///
    /// SQLite files open in read-write-create mode. Descriptors for other
    /// clients pass through unchanged.
    pub fn database_url(&self) -> String {
        match (self.client.is_sqlite(), self.connection.target()) {
            (true, StorageTarget::Memory) => "sqlite::memory:".to_string(),
            (true, StorageTarget::File(path)) => format!("sqlite:{}?mode=rwc", path.display()),
            (true, StorageTarget::Url(url)) if url.starts_with("sqlite:") => url,
            (true, StorageTarget::Url(path)) => format!("sqlite:{}?mode=rwc", path),
            (false, StorageTarget::File(path)) => path.display().to_string(),
            (false, StorageTarget::Memory) => MEMORY.to_string(),
            (false, StorageTarget::Url(url)) => url,
        }
    }
}

/// Builder for EnvironmentProfile
///
/// Unset fields fall back to a SQLite in-memory profile with
/// `db/migrations` and `db/seeds`.
#[derive(Default)]
pub struct EnvironmentProfileBuilder {
    client: Option<Client>,
    connection: Option<Connection>,
    use_null_as_default: Option<bool>,
    migrations_dir: Option<PathBuf>,
    seeds_dir: Option<PathBuf>,
}

impl EnvironmentProfileBuilder {
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn connection(mut self, connection: Connection) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn use_null_as_default(mut self, enabled: bool) -> Self {
        self.use_null_as_default = Some(enabled);
        self
    }

    pub fn migrations_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.migrations_dir = Some(dir.into());
        self
    }

    pub fn seeds_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.seeds_dir = Some(dir.into());
        self
    }

    pub fn build(self) -> EnvironmentProfile {
        EnvironmentProfile {
            client: self.client.unwrap_or(Client::Sqlite3),
            use_null_as_default: self.use_null_as_default.unwrap_or(true),
            connection: self.connection.unwrap_or_else(Connection::memory),
            migrations: DirectoryConfig::new(
                self.migrations_dir.unwrap_or_else(|| PathBuf::from("db/migrations")),
            ),
            seeds: DirectoryConfig::new(
                self.seeds_dir.unwrap_or_else(|| PathBuf::from("db/seeds")),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::{self, Format};
    use pretty_assertions::assert_eq;

    fn file_profile() -> EnvironmentProfile {
        EnvironmentProfile::builder()
            .connection(Connection::file("./main.sqlite3"))
            .build()
    }

    #[test]
    fn test_client_keeps_spelling() {
        assert_eq!(Client::try_from("sqlite3".to_string()).unwrap(), Client::Sqlite3);
        assert_eq!(Client::try_from("mysql2".to_string()).unwrap(), Client::Mysql2);
        assert_eq!(Client::try_from("postgres".to_string()).unwrap().as_str(), "postgres");
        assert_ne!(Client::Mysql, Client::Mysql2);
        assert!(Client::try_from("  ".to_string()).is_err());
    }

    #[test]
    fn test_client_other_equals_known_variant() {
        assert_eq!(Client::Other("sqlite3".to_string()), Client::Sqlite3);
        assert!(Client::Other("sqlite3".to_string()).is_sqlite());
        assert_ne!(Client::Other("postgres".to_string()), Client::Pg);
    }

    #[test]
    fn test_client_survives_file_round_trip() {
        for name in ["mysql2", "postgres", "postgresql", "pg", "sqlite3"] {
            let profile = EnvironmentProfile::builder()
                .client(Client::try_from(name.to_string()).unwrap())
                .build();
            let text = file::to_string(Format::Json, &profile).unwrap();
            assert!(text.contains(&format!("\"client\": \"{name}\"")), "{text}");

            let back: EnvironmentProfile =
                file::from_str(Format::Json, &text, Path::new("profile.json")).unwrap();
            assert_eq!(back, profile);
            assert_eq!(back.client.as_str(), name);
        }

        let other = EnvironmentProfile::builder()
            .client(Client::Other("sqlite3".to_string()))
            .build();
        let text = file::to_string(Format::Toml, &other).unwrap();
        let back: EnvironmentProfile =
            file::from_str(Format::Toml, &text, Path::new("profile.toml")).unwrap();
        assert_eq!(back, other);
    }

    #[test]
    fn test_connection_targets() {
        assert_eq!(Connection::memory().target(), StorageTarget::Memory);
        assert_eq!(
            Connection::file("./main.sqlite3").target(),
            StorageTarget::File(PathBuf::from("./main.sqlite3"))
        );
        assert_eq!(
            Connection::Descriptor("postgres://localhost/app".to_string()).target(),
            StorageTarget::Url("postgres://localhost/app".to_string())
        );
    }

    #[test]
    fn test_sqlite_memory_urls_are_memory() {
        for url in ["sqlite::memory:", "sqlite://:memory:"] {
            let connection = Connection::Descriptor(url.to_string());
            assert_eq!(connection.target(), StorageTarget::Memory);
            assert!(connection.is_in_memory());
        }

        let profile = EnvironmentProfile::builder()
            .connection(Connection::Descriptor("sqlite::memory:".to_string()))
            .build();
        assert_eq!(profile.database_url(), "sqlite::memory:");
    }

    #[test]
    fn test_connection_json_shapes() {
        let file: Connection = serde_json::from_str(r#"{"filename":"./main.sqlite3"}"#).unwrap();
        assert_eq!(file, Connection::file("./main.sqlite3"));

        let memory: Connection = serde_json::from_str(r#"":memory:""#).unwrap();
        assert!(memory.is_in_memory());
    }

    #[test]
    fn test_profile_uses_camel_case_keys() {
        let json = serde_json::to_value(file_profile()).unwrap();
        assert_eq!(json["client"], "sqlite3");
        assert_eq!(json["useNullAsDefault"], true);
        assert_eq!(json["connection"]["filename"], "./main.sqlite3");
        assert_eq!(json["migrations"]["directory"], "db/migrations");
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let profile = EnvironmentProfile::builder()
            .connection(Connection::Descriptor(String::new()))
            .build();
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "connection"
        ));

        let profile = EnvironmentProfile::builder().seeds_dir("").build();
        assert!(matches!(
            profile.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "seeds.directory"
        ));

        assert!(file_profile().validate().is_ok());
    }

    #[test]
    fn test_database_url() {
        assert_eq!(file_profile().database_url(), "sqlite:./main.sqlite3?mode=rwc");
        assert_eq!(EnvironmentProfile::builder().build().database_url(), "sqlite::memory:");

        let pg = EnvironmentProfile::builder()
            .client(Client::Pg)
            .connection(Connection::Descriptor("postgres://localhost/app".to_string()))
            .build();
        assert_eq!(pg.database_url(), "postgres://localhost/app");
    }
}
