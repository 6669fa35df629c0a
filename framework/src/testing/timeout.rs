use std::future::Future;

use super::TestSettings;
use crate::error::ConfigError;

/// Run an async test body under the configured per-test timeout
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn slow_query() {
///     let settings = TestSettings::default();
///     let rows = within(&settings, run_query()).await.unwrap();
/// }
/// ```
pub async fn within<F>(settings: &TestSettings, body: F) -> Result<F::Output, ConfigError>
where
    F: Future,
{
    tokio::time::timeout(settings.timeout(), body)
        .await
        .map_err(|_| ConfigError::TestTimedOut {
            after_ms: settings.test_timeout,
        })
}
