//! Config file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::context::Locations;

use super::parser::parse;
use super::types::ConfigDocument;

/// File name of the project-local config.
pub const CONFIG_FILE_NAME: &str = "dev.toml";

/// File name of the optional plugin metadata file.
pub const PLUGIN_META_FILE_NAME: &str = "plugins.toml";

/// Load a config file.
///
/// Never fails: a missing or unreadable file yields an empty document.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load(path: &Path) -> ConfigDocument {
    match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            let values = parse(&text);
            debug!(path = %path.display(), keys = values.len(), "Loaded config file");
            ConfigDocument::new(values, path.to_path_buf())
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Config file not readable, using empty config");
            ConfigDocument::default()
        }
    }
}

/// Candidate config paths, in search order.
///
/// 1. `dev.toml` in the working directory
/// 2. `dev.toml` next to the running executable
/// 3. the platform global config (`%APPDATA%/dev/config.toml` or
///    `~/.config/dev/config.toml`)
pub fn config_candidates(locations: &Locations) -> Vec<PathBuf> {
    let mut candidates = vec![locations.cwd.join(CONFIG_FILE_NAME)];
    if let Some(exe_dir) = &locations.exe_dir {
        candidates.push(exe_dir.join(CONFIG_FILE_NAME));
    }
    if let Some(global) = &locations.global_config {
        candidates.push(global.clone());
    }
    candidates
}

/// Load the first config file that exists, or an empty document.
pub fn find(locations: &Locations) -> ConfigDocument {
    first_existing(&config_candidates(locations))
}

/// Load `plugins.toml` from the working directory, then the executable dir.
pub fn find_plugin_metadata(locations: &Locations) -> ConfigDocument {
    let mut candidates = vec![locations.cwd.join(PLUGIN_META_FILE_NAME)];
    if let Some(exe_dir) = &locations.exe_dir {
        candidates.push(exe_dir.join(PLUGIN_META_FILE_NAME));
    }
    first_existing(&candidates)
}

fn first_existing(candidates: &[PathBuf]) -> ConfigDocument {
    match candidates.iter().find(|p| p.is_file()) {
        Some(path) => {
            info!(path = %path.display(), "Using config file");
            load(path)
        }
        None => {
            debug!(searched = candidates.len(), "No config file found");
            ConfigDocument::default()
        }
    }
}

/// Platform-specific global config path, if the base directory is known.
///
/// On Windows this is the roaming config dir from `dirs` (`%APPDATA%`).
pub fn global_config_path(home: Option<&Path>) -> Option<PathBuf> {
    if cfg!(windows) {
        dirs::config_dir().map(|base| base.join("dev").join("config.toml"))
    } else {
        home.map(|h| h.join(".config").join("dev").join("config.toml"))
    }
}
