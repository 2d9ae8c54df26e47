//! Plugin search directory resolution.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::config::ConfigDocument;
use crate::context::Locations;

/// Name of the plugin directory looked up next to the executable and in the
/// working directory.
pub const PLUGINS_DIR_NAME: &str = "plugins";

/// Compute the ordered plugin search directories.
///
/// Precedence, earliest first:
/// 1. `plugins/` next to the running executable
/// 2. `plugins/` in the working directory
/// 3. every entry of `[plugins] dirs = [...]`, with `~` expanded
///
/// Candidates that do not exist, or that name a directory already in the
/// list, are skipped. If nothing survives, the working-directory `plugins/`
/// path is returned on its own so the list is never empty.
pub fn plugin_dirs(locations: &Locations, config: &ConfigDocument) -> Vec<PathBuf> {
    let cwd_plugins = locations.cwd.join(PLUGINS_DIR_NAME);

    let mut candidates = Vec::new();
    if let Some(exe_dir) = &locations.exe_dir {
        candidates.push(exe_dir.join(PLUGINS_DIR_NAME));
    }
    candidates.push(cwd_plugins.clone());
    candidates.extend(
        config
            .get_list("plugins", "dirs")
            .iter()
            .map(|entry| expand_dir(entry, locations)),
    );

    let mut dirs = Vec::new();
    let mut seen = HashSet::new();
    for dir in candidates {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "Plugin directory does not exist, skipping");
            continue;
        }
        let identity = fs::canonicalize(&dir).unwrap_or_else(|_| dir.clone());
        if !seen.insert(identity) {
            debug!(dir = %dir.display(), "Plugin directory already searched, skipping");
            continue;
        }
        debug!(dir = %dir.display(), precedence = dirs.len(), "Added plugin directory");
        dirs.push(dir);
    }

    if dirs.is_empty() {
        debug!(dir = %cwd_plugins.display(), "No plugin directories found, using fallback");
        dirs.push(cwd_plugins);
    }
    dirs
}

/// Expand a leading `~` to the home directory and anchor relative paths at
/// the working directory.
fn expand_dir(entry: &str, locations: &Locations) -> PathBuf {
    let expanded = match (entry.strip_prefix('~'), &locations.home) {
        (Some(""), Some(home)) => home.clone(),
        (Some(rest), Some(home)) if rest.starts_with(['/', '\\']) => {
            home.join(rest.trim_start_matches(['/', '\\']))
        }
        _ => PathBuf::from(entry),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        locations.cwd.join(expanded)
    }
}
