//! Plugin registry for dev
//!
//! This module provides the `PluginRegistry` struct, which maps command names
//! onto plugin executables found in the ordered search directories. Nothing
//! is cached: every lookup reads the filesystem, so a plugin dropped into a
//! directory is visible on the very next invocation.

use std::collections::BTreeSet;
use std::env::consts::EXE_SUFFIX;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// A view over the ordered plugin search directories.
///
/// Earlier directories shadow later ones: [`resolve`](Self::resolve) returns
/// the first match, while [`list`](Self::list) reports each name once no
/// matter how many directories provide it.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use dev::plugins::PluginRegistry;
///
/// let dirs = vec![PathBuf::from("plugins"), PathBuf::from("/opt/dev/plugins")];
/// let registry = PluginRegistry::new(&dirs);
///
/// if let Some(path) = registry.resolve("build") {
///     println!("build -> {}", path.display());
/// }
/// for name in registry.list() {
///     println!("{}", name);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PluginRegistry<'a> {
    dirs: &'a [PathBuf],
}

impl<'a> PluginRegistry<'a> {
    /// Create a registry over `dirs`, in precedence order.
    pub fn new(dirs: &'a [PathBuf]) -> Self {
        Self { dirs }
    }

    /// The directories searched, in precedence order.
    pub fn dirs(&self) -> &'a [PathBuf] {
        self.dirs
    }

    /// Resolve a command name to its plugin executable.
    ///
    /// Returns the first `dir/<name>` (plus the platform executable suffix)
    /// that is a regular file, or `None` when no directory provides one.
    /// Names that could escape a search directory never resolve.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if !is_plain_name(name) {
            debug!(command = %name, "Rejecting command name that is not a plain file name");
            return None;
        }

        let file_name = format!("{}{}", name, EXE_SUFFIX);
        let found = self
            .dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file());

        match &found {
            Some(path) => debug!(command = %name, path = %path.display(), "Resolved plugin"),
            None => debug!(command = %name, dirs = self.dirs.len(), "Plugin not found"),
        }
        found
    }

    /// List every discoverable command name, sorted and deduplicated.
    ///
    /// Each regular file contributes its file stem. Unreadable directories
    /// are logged and skipped.
    pub fn list(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for dir in self.dirs {
            collect_names(dir, &mut names);
        }
        names.into_iter().collect()
    }
}

fn collect_names(dir: &Path, names: &mut BTreeSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if dir.exists() {
                warn!(dir = %dir.display(), error = %e, "Failed to read plugin directory, skipping");
            }
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            names.insert(stem.to_string_lossy().into_owned());
        }
    }
}

/// A command name must be a single path component.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(format!("{}{}", name, EXE_SUFFIX));
        fs::write(&path, "#!/bin/sh\n").unwrap();
        path
    }

    #[test]
    fn test_resolve_first_directory_wins() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let foo_a = touch(a.path(), "foo");
        touch(b.path(), "foo");
        let bar_b = touch(b.path(), "bar");

        let dirs = vec![a.path().to_path_buf(), b.path().to_path_buf()];
        let registry = PluginRegistry::new(&dirs);
        assert_eq!(registry.resolve("foo"), Some(foo_a));
        assert_eq!(registry.resolve("bar"), Some(bar_b));
    }

    #[test]
    fn test_list_is_sorted_set() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        touch(a.path(), "foo");
        touch(b.path(), "foo");
        touch(b.path(), "bar");

        let dirs = vec![a.path().to_path_buf(), b.path().to_path_buf()];
        assert_eq!(PluginRegistry::new(&dirs).list(), vec!["bar", "foo"]);
    }

    #[test]
    fn test_list_strips_extensions_and_skips_directories() {
        let a = TempDir::new().unwrap();
        fs::write(a.path().join("deploy.sh"), "").unwrap();
        fs::create_dir(a.path().join("subdir")).unwrap();

        let dirs = vec![a.path().to_path_buf()];
        assert_eq!(PluginRegistry::new(&dirs).list(), vec!["deploy"]);
    }

    #[test]
    fn test_resolve_skips_directories_with_plugin_name() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        fs::create_dir(a.path().join(format!("foo{}", EXE_SUFFIX))).unwrap();
        let foo_b = touch(b.path(), "foo");

        let dirs = vec![a.path().to_path_buf(), b.path().to_path_buf()];
        assert_eq!(PluginRegistry::new(&dirs).resolve("foo"), Some(foo_b));
    }

    #[test]
    fn test_missing_directories_resolve_nothing() {
        let tmp = TempDir::new().unwrap();
        let dirs = vec![tmp.path().join("plugins")];
        let registry = PluginRegistry::new(&dirs);
        assert_eq!(registry.resolve("anything"), None);
        assert!(registry.list().is_empty());
        assert_eq!(registry.dirs(), dirs.as_slice());
    }

    #[test]
    fn test_resolve_rejects_path_like_names() {
        let root = TempDir::new().unwrap();
        let plugins = root.path().join("plugins");
        fs::create_dir(&plugins).unwrap();
        touch(root.path(), "outside");

        let dirs = vec![plugins];
        let registry = PluginRegistry::new(&dirs);
        assert_eq!(registry.resolve("../outside"), None);
        assert_eq!(registry.resolve(".."), None);
        assert_eq!(registry.resolve(""), None);
    }

    #[test]
    fn test_listing_reflects_filesystem_changes() {
        let a = TempDir::new().unwrap();
        let dirs = vec![a.path().to_path_buf()];
        let registry = PluginRegistry::new(&dirs);
        assert!(registry.list().is_empty());

        touch(a.path(), "late");
        assert_eq!(registry.list(), vec!["late"]);
        assert!(registry.resolve("late").is_some());
    }
}
