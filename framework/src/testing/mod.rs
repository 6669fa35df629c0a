//! Test-run settings
//!
//! A single immutable record read when the test run starts: which
//! reporters to use, where structured results go, whether to watch, and
//! how long one test may run.
//!
//! # Example
//!
//! ```rust
//! use envkit::testing::{Reporter, TestSettings};
//!
//! let settings = TestSettings::builder()
//!     .reporters(vec![Reporter::Default, Reporter::Junit])
//!     .output_file("test-results.xml")
//!     .test_timeout_ms(30_000)
//!     .build();
//!
//! assert!(settings.validate().is_ok());
//! assert!(settings.has_reporter(&Reporter::Junit));
//! ```

mod timeout;

pub use timeout::within;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Output formatter for test results
///
/// Names are kept verbatim. `Other` compares and hashes by name, so
/// `Other("junit")` equals `Junit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Reporter {
    Default,
    Verbose,
    Junit,
    Json,
    Other(String),
}

impl Reporter {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Verbose => "verbose",
            Self::Junit => "junit",
            Self::Json => "json",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Whether this reporter writes to `outputFile`
    pub fn writes_file(&self) -> bool {
        matches!(self.as_str(), "junit" | "json")
    }
}

impl PartialEq for Reporter {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Reporter {}

impl std::hash::Hash for Reporter {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for Reporter {
    fn from(name: String) -> Self {
        match name.as_str() {
            "default" => Self::Default,
            "verbose" => Self::Verbose,
            "junit" => Self::Junit,
            "json" => Self::Json,
            _ => Self::Other(name),
        }
    }
}

impl From<Reporter> for String {
    fn from(reporter: Reporter) -> Self {
        reporter.as_str().to_string()
    }
}

impl std::fmt::Display for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one test run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSettings {
    /// Ordered reporter identifiers
    pub reporters: Vec<Reporter>,
    /// Where structured results are written
    pub output_file: PathBuf,
    /// Re-run on file changes
    pub watch: bool,
    /// Per-test limit in milliseconds
    pub test_timeout: u64,
}

/// Variables that override declared settings
pub const REPORTERS_VAR: &str = "TEST_REPORTERS";
pub const OUTPUT_FILE_VAR: &str = "TEST_OUTPUT_FILE";
pub const WATCH_VAR: &str = "TEST_WATCH";
pub const TIMEOUT_VAR: &str = "TEST_TIMEOUT";

impl TestSettings {
    /// Create a builder for customizing settings
    pub fn builder() -> TestSettingsBuilder {
        TestSettingsBuilder::default()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.test_timeout)
    }

    pub fn has_reporter(&self, reporter: &Reporter) -> bool {
        self.reporters.contains(reporter)
    }

    /// Check that the settings can drive a run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.test_timeout == 0 {
            return Err(ConfigError::invalid(
                "testTimeout",
                "must be a positive number of milliseconds",
            ));
        }
        if self.reporters.is_empty() {
            return Err(ConfigError::invalid("reporters", "at least one reporter is required"));
        }
        if self.reporters.iter().any(|r| r.as_str().is_empty()) {
            return Err(ConfigError::invalid("reporters", "reporter names must not be empty"));
        }
        let needs_file = self.reporters.iter().any(Reporter::writes_file);
        if needs_file && self.output_file.as_os_str().is_empty() {
            return Err(ConfigError::invalid("outputFile", "required by a file reporter"));
        }
        Ok(())
    }

    /// Apply overrides from a variable lookup
    ///
    /// Unset variables and values that do not parse leave the declared
    /// value in place.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(list) = lookup(REPORTERS_VAR) {
            let reporters: Vec<Reporter> = list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| Reporter::from(name.to_string()))
                .collect();
            if !reporters.is_empty() {
                self.reporters = reporters;
            }
        }
        if let Some(path) = lookup(OUTPUT_FILE_VAR).filter(|p| !p.is_empty()) {
            self.output_file = PathBuf::from(path);
        }
        if let Some(watch) = lookup(WATCH_VAR).and_then(|v| v.parse().ok()) {
            self.watch = watch;
        }
        if let Some(ms) = lookup(TIMEOUT_VAR).and_then(|v| v.parse().ok()) {
            self.test_timeout = ms;
        }
        self
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }
}

impl Default for TestSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for TestSettings
#[derive(Default)]
pub struct TestSettingsBuilder {
    reporters: Option<Vec<Reporter>>,
    output_file: Option<PathBuf>,
    watch: Option<bool>,
    test_timeout: Option<u64>,
}

impl TestSettingsBuilder {
    pub fn reporters(mut self, reporters: Vec<Reporter>) -> Self {
        self.reporters = Some(reporters);
        self
    }

    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    pub fn watch(mut self, watch: bool) -> Self {
        self.watch = Some(watch);
        self
    }

    pub fn test_timeout_ms(mut self, ms: u64) -> Self {
        self.test_timeout = Some(ms);
        self
    }

    pub fn build(self) -> TestSettings {
        TestSettings {
            reporters: self.reporters.unwrap_or_else(|| vec![Reporter::Default]),
            output_file: self
                .output_file
                .unwrap_or_else(|| PathBuf::from("test-results.xml")),
            watch: self.watch.unwrap_or(false),
            test_timeout: self.test_timeout.unwrap_or(5000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file::{self, Format};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::Path;

    fn settings() -> TestSettings {
        TestSettings::builder()
            .reporters(vec![Reporter::Default, Reporter::Junit])
            .test_timeout_ms(30_000)
            .build()
    }

    #[test]
    fn test_builder_defaults() {
        let settings = TestSettings::default();
        assert_eq!(settings.reporters, vec![Reporter::Default]);
        assert_eq!(settings.output_file, PathBuf::from("test-results.xml"));
        assert!(!settings.watch);
        assert_eq!(settings.timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_validate() {
        assert!(settings().validate().is_ok());

        let zero = TestSettings::builder().test_timeout_ms(0).build();
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "testTimeout"
        ));

        let none = TestSettings::builder().reporters(vec![]).build();
        assert!(none.validate().is_err());

        let no_file = TestSettings::builder()
            .reporters(vec![Reporter::Junit])
            .output_file("")
            .build();
        assert!(no_file.validate().is_err());
    }

    #[test]
    fn test_serialized_keys_and_order() {
        let json = serde_json::to_value(settings()).unwrap();
        assert_eq!(json["reporters"], serde_json::json!(["default", "junit"]));
        assert_eq!(json["outputFile"], "test-results.xml");
        assert_eq!(json["watch"], false);
        assert_eq!(json["testTimeout"], 30_000);
    }

    #[test]
    fn test_toml_round_trip() {
        let text = file::to_string(Format::Toml, &settings()).unwrap();
        let back: TestSettings =
            file::from_str(Format::Toml, &text, Path::new("testing.toml")).unwrap();
        assert_eq!(back, settings());
    }

    #[test]
    fn test_apply_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (REPORTERS_VAR, "verbose, json"),
            (TIMEOUT_VAR, "1000"),
            (WATCH_VAR, "not-a-bool"),
        ]);
        let settings = settings().apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.reporters, vec![Reporter::Verbose, Reporter::Json]);
        assert_eq!(settings.test_timeout, 1000);
        assert!(!settings.watch);
        assert_eq!(settings.output_file, PathBuf::from("test-results.xml"));
    }

    #[test]
    fn test_unknown_reporter_is_kept() {
        let reporter = Reporter::from("github-actions".to_string());
        assert_eq!(reporter, Reporter::Other("github-actions".to_string()));
        assert_eq!(reporter.to_string(), "github-actions");
    }

    #[test]
    fn test_reporter_names_survive_round_trip() {
        let settings = TestSettings::builder()
            .reporters(vec![
                Reporter::Other("junit".to_string()),
                Reporter::Other(" spaced ".to_string()),
            ])
            .build();
        assert!(settings.has_reporter(&Reporter::Junit));

        let text = file::to_string(Format::Json, &settings).unwrap();
        let back: TestSettings =
            file::from_str(Format::Json, &text, Path::new("testing.json")).unwrap();
        assert_eq!(back, settings);
        assert_eq!(back.reporters[1].as_str(), " spaced ");
    }
}
