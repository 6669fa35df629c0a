mod database;
mod testing;

pub use database::{environments, BASE_DIR};
pub use testing::test_settings;

use envkit::Config;

/// Register all application configs
///
/// Test settings pick up `TEST_*` overrides from the environment.
pub fn register_all() {
    Config::register(environments());
    Config::register(test_settings().with_env_overrides());
}
