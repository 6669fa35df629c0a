pub mod check;
pub mod env;
pub mod scripts;
pub mod test_settings;

use envkit::config::file;
use envkit::{
    Config, ConfigError, DatabaseEnvironments, Environment, EnvironmentProfile, TestSettings,
};
use std::path::{Path, PathBuf};

/// Where config lives and which environment is active
pub struct Context {
    pub config_dir: PathBuf,
    pub environment: Environment,
}

impl Context {
    pub fn new(config_dir: PathBuf, env: Option<String>) -> Self {
        Self::with_root(Path::new("."), config_dir, env.as_deref())
    }

    /// Pick the environment, then load its `.env` files from `root`
    ///
    /// `--env` wins over APP_ENV and also decides which `.env.{env}` files
    /// are read.
    pub fn with_root(root: &Path, config_dir: PathBuf, env: Option<&str>) -> Self {
        let environment = match env {
            Some(name) => {
                let environment = Environment::from_name(name);
                Config::init_for(root, &environment);
                environment
            }
            None => Config::init(root),
        };
        Self {
            config_dir,
            environment,
        }
    }

    pub fn database_path(&self) -> PathBuf {
        self.config_dir.join("database.toml")
    }

    pub fn testing_path(&self) -> PathBuf {
        self.config_dir.join("testing.toml")
    }

    pub fn environments(&self) -> Result<DatabaseEnvironments, ConfigError> {
        file::load(&self.database_path())
    }

    pub fn profile(&self) -> Result<EnvironmentProfile, ConfigError> {
        let environments = self.environments()?;
        environments.profile(&self.environment).cloned()
    }

    pub fn test_settings(&self) -> Result<TestSettings, ConfigError> {
        let settings: TestSettings = file::load(&self.testing_path())?;
        Ok(settings.with_env_overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_env_flag_selects_dotenv_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(".env.development"), "TEST_TIMEOUT=1\n").unwrap();
        fs::write(root.join(".env.test"), "TEST_TIMEOUT=2\n").unwrap();
        fs::create_dir(root.join("config")).unwrap();
        fs::write(
            root.join("config/testing.toml"),
            "reporters = [\"default\"]\noutputFile = \"test-results.xml\"\n\
             watch = false\ntestTimeout = 30000\n",
        )
        .unwrap();

        let ctx = Context::with_root(root, root.join("config"), Some("test"));

        assert_eq!(ctx.environment, Environment::Test);
        assert_eq!(ctx.test_settings().unwrap().test_timeout, 2);
    }
}
