//! Startup context.
//!
//! Everything the dispatcher reads is computed once here and passed by
//! reference afterwards: the config document, the plugin search
//! directories, the alias table and plugin metadata. Nothing is mutated
//! after [`AppContext::load`] returns.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::alias::AliasTable;
use crate::config::{self, ConfigDocument};
use crate::error::Result;
use crate::plugins::{plugin_dirs, PluginMetadata, PluginRegistry};

/// Filesystem anchors used for config and plugin discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory containing the running executable.
    pub exe_dir: Option<PathBuf>,
    /// Home directory, for `~` expansion.
    pub home: Option<PathBuf>,
    /// Platform global config file.
    pub global_config: Option<PathBuf>,
}

impl Locations {
    /// Detect locations for the current process.
    pub fn detect() -> Result<Self> {
        let cwd = env::current_dir()?;
        let exe_dir = env::current_exe()
            .ok()
            .map(|exe| exe.canonicalize().unwrap_or(exe))
            .and_then(|exe| exe.parent().map(PathBuf::from));
        let home = dirs::home_dir();
        let global_config = config::global_config_path(home.as_deref());

        let locations = Self {
            cwd,
            exe_dir,
            home,
            global_config,
        };
        debug!(?locations, "Detected locations");
        Ok(locations)
    }
}

/// Immutable per-run context.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub locations: Locations,
    pub config: ConfigDocument,
    pub plugin_dirs: Vec<PathBuf>,
    pub aliases: AliasTable,
    pub metadata: PluginMetadata,
}

impl AppContext {
    /// Load config, search directories, aliases and metadata.
    pub fn load(locations: Locations) -> Self {
        let config = config::find(&locations);
        let plugin_dirs = plugin_dirs(&locations, &config);
        let aliases = AliasTable::from_config(&config);
        let metadata = PluginMetadata::new(config::find_plugin_metadata(&locations));

        Self {
            locations,
            config,
            plugin_dirs,
            aliases,
            metadata,
        }
    }

    /// Registry over this run's search directories.
    pub fn registry(&self) -> PluginRegistry<'_> {
        PluginRegistry::new(&self.plugin_dirs)
    }
}
