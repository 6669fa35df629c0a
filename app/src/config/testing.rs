use envkit::{Reporter, TestSettings};

/// Settings for `cargo test` runs of this project
pub fn test_settings() -> TestSettings {
    TestSettings::builder()
        .reporters(vec![Reporter::Default, Reporter::Junit])
        .output_file("test-results.xml")
        .watch(false)
        .test_timeout_ms(30_000)
        .build()
}
