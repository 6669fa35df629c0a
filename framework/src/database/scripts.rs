//! Migration and seed script directories
//!
//! Scripts are plain files inside the profile's `migrations.directory` or
//! `seeds.directory`. Running them is left to the migration tool; this
//! module lists and scaffolds them.

use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ConfigError;

/// Kind of script a directory holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    Migration,
    Seed,
}

impl ScriptKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Migration => "migration",
            Self::Seed => "seed",
        }
    }
}

/// A script file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    /// File name including extension
    pub name: String,
    pub path: PathBuf,
}

/// List scripts directly inside `dir`, sorted by file name
///
/// Hidden files (such as `.gitkeep`) are skipped. A missing directory is
/// an empty list.
pub fn list(dir: &Path) -> Result<Vec<Script>, ConfigError> {
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "script directory missing");
        return Ok(Vec::new());
    }

    let mut scripts = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ConfigError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        scripts.push(Script {
            name,
            path: entry.into_path(),
        });
    }

    scripts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(scripts)
}

/// Create a new script in `dir`
///
/// Migrations get a `YYYYMMDDHHMMSS_` prefix so lexical order is apply
/// order. Seeds keep the bare name.
pub fn make(
    dir: &Path,
    kind: ScriptKind,
    name: &str,
    now: NaiveDateTime,
) -> Result<PathBuf, ConfigError> {
    let stem = to_snake_case(name);
    if !is_valid_identifier(&stem) {
        return Err(ConfigError::InvalidScriptName(name.to_string()));
    }

    let file_name = match kind {
        ScriptKind::Migration => format!("{}_{}.sql", now.format("%Y%m%d%H%M%S"), stem),
        ScriptKind::Seed => format!("{}.sql", stem),
    };
    let path = dir.join(file_name);

    if path.exists() {
        return Err(ConfigError::ScriptExists { path });
    }

    fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
    fs::write(&path, template(kind, &stem)).map_err(|e| ConfigError::io(&path, e))?;
    tracing::info!(path = %path.display(), kind = kind.label(), "created script");

    Ok(path)
}

fn template(kind: ScriptKind, stem: &str) -> String {
    match kind {
        ScriptKind::Migration => format!("-- Migration: {stem}\n\n-- up\n\n-- down\n"),
        ScriptKind::Seed => format!("-- Seed: {stem}\n"),
    }
}

fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.trim().chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else if c == '-' || c == ' ' {
            result.push('_');
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(12, 30, 5)
            .unwrap()
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("CreateUsers"), "create_users");
        assert_eq!(to_snake_case("add-email to_users"), "add_email_to_users");
        assert_eq!(to_snake_case("Seed_Users"), "seed_users");
    }

    #[test]
    fn test_make_migration_is_timestamped() {
        let dir = tempfile::tempdir().unwrap();
        let migrations = dir.path().join("db/migrations");

        let path = make(&migrations, ScriptKind::Migration, "CreateUsers", noon()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "20240309123005_create_users.sql"
        );
        assert!(fs::read_to_string(&path).unwrap().contains("-- up"));
    }

    #[test]
    fn test_make_seed_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();

        make(dir.path(), ScriptKind::Seed, "users", noon()).unwrap();
        let err = make(dir.path(), ScriptKind::Seed, "users", noon()).unwrap_err();
        assert!(matches!(err, ConfigError::ScriptExists { .. }));
    }

    #[test]
    fn test_make_rejects_bad_names() {
        let dir = tempfile::tempdir().unwrap();
        let err = make(dir.path(), ScriptKind::Seed, "1users", noon()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScriptName(_)));
        assert!(make(dir.path(), ScriptKind::Seed, "", noon()).is_err());
    }

    #[test]
    fn test_list_sorts_and_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitkeep"), "").unwrap();
        fs::write(dir.path().join("20240102000000_b.sql"), "").unwrap();
        fs::write(dir.path().join("20240101000000_a.sql"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let names: Vec<_> = list(dir.path()).unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["20240101000000_a.sql", "20240102000000_b.sql"]);
    }

    #[test]
    fn test_list_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list(&dir.path().join("absent")).unwrap().is_empty());
    }
}
