use std::path::Path;
use std::str::FromStr;

/// Variable that selects the active environment
pub const ENV_VAR: &str = "APP_ENV";

/// Environment name selecting a database profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Custom(String),
}

impl Environment {
    /// Detect environment from APP_ENV or default to Development
    pub fn detect() -> Self {
        Self::from_var(std::env::var(ENV_VAR).ok().as_deref())
    }

    /// Map the raw value of APP_ENV; unset means Development
    pub fn from_var(value: Option<&str>) -> Self {
        value.map(Self::from_name).unwrap_or_default()
    }

    /// Map a name to an environment
    ///
    /// `testing` is accepted as an alias for `test`; blank input means
    /// `development`.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "" | "development" => Self::Development,
            "test" | "testing" => Self::Test,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Key of this environment in a profile map
    pub fn name(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Custom(name) => name.as_str(),
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Self::Test)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Load environment variables from .env files with proper precedence
///
/// The environment is detected from APP_ENV first; see
/// [`load_dotenv_for`] for the files read. Returns the environment
/// detected afterwards, since a file may set APP_ENV itself.
pub fn load_dotenv(project_root: &Path) -> Environment {
    load_dotenv_for(project_root, &Environment::detect());
    Environment::detect()
}

/// Load the .env files for a given environment
///
/// Precedence (later entries lose):
/// 1. Actual process environment variables
/// 2. `.env.{environment}.local`
/// 3. `.env.{environment}`
/// 4. `.env.local`
/// 5. `.env`
///
/// dotenvy never overwrites a variable that is already set, so files are
/// read from most to least specific. Missing files are skipped.
pub fn load_dotenv_for(project_root: &Path, env: &Environment) {
    let candidates = [
        format!(".env.{}.local", env.name()),
        format!(".env.{}", env.name()),
        ".env.local".to_string(),
        ".env".to_string(),
    ];

    for file in &candidates {
        let path = project_root.join(file);
        if dotenvy::from_path(&path).is_ok() {
            tracing::debug!(path = %path.display(), environment = %env, "loaded env file");
        }
    }
}

/// Get an environment variable parsed as `T`, or a default
///
/// # Example
/// ```
/// use envkit::config::env;
///
/// let timeout: u64 = env("ENVKIT_DOC_TIMEOUT", 5000);
/// assert_eq!(timeout, 5000);
/// ```
pub fn env<T: FromStr>(key: &str, default: T) -> T {
    env_optional(key).unwrap_or(default)
}

/// Get an optional environment variable parsed as `T`
///
/// Unset and unparseable values both yield `None`.
pub fn env_optional<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
