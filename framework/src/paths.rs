//! Joining a base directory with a relative config path
//!
//! Joins are lexical and never touch the filesystem. `.` segments are
//! dropped and `..` folds into the previous segment when there is one,
//! so `join("", "./db/migrations")` is `db/migrations`.
//!
//! An empty base yields a path relative to the process working directory,
//! not to the file that declared it.

use std::path::{Component, Path, PathBuf};

/// Join `relative` onto `base` and normalize the result
///
/// An absolute `relative` replaces the base. A result with no segments left
/// is `.`.
pub fn join(base: impl AsRef<Path>, relative: impl AsRef<Path>) -> PathBuf {
    normalize(&base.as_ref().join(relative))
}

/// Lexically normalize a path
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// True when a path would resolve against the working directory
pub fn is_cwd_relative(path: &Path) -> bool {
    path.is_relative()
}
