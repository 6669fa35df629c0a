//! Declared configuration for the application
//!
//! `config/database.toml` and `config/testing.toml` are the on-disk form of
//! the same values, read by the `envkit` CLI.

pub mod config;
