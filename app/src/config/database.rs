//! Database profiles for this project
//!
//! `development` keeps its data in `./main.sqlite3`; `test` uses a private
//! in-memory database and its own seeds. Both share one migration set.

use envkit::paths;
use envkit::{Client, Connection, DatabaseEnvironments, EnvironmentProfile};

/// Base for the script directories.
///
/// Empty, so directories resolve against the working directory of the
/// process rather than this crate. Anchoring them elsewhere changes where
/// every tool looks for scripts; confirm before changing.
pub const BASE_DIR: &str = "";

/// Build the profile map
pub fn environments() -> DatabaseEnvironments {
    DatabaseEnvironments::new()
        .with(
            "development",
            EnvironmentProfile::builder()
                .client(Client::Sqlite3)
                .connection(Connection::file("./main.sqlite3"))
                .use_null_as_default(true)
                .migrations_dir(paths::join(BASE_DIR, "./db/migrations"))
                .seeds_dir(paths::join(BASE_DIR, "./db/seeds"))
                .build(),
        )
        .with(
            "test",
            EnvironmentProfile::builder()
                .client(Client::Sqlite3)
                .connection(Connection::memory())
                .use_null_as_default(true)
                .migrations_dir(paths::join(BASE_DIR, "./db/migrations"))
                .seeds_dir(paths::join(BASE_DIR, "./tests/seeds"))
                .build(),
        )
}
