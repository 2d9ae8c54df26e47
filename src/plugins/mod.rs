//! Plugin discovery for dev
//!
//! A plugin is any regular file in a search directory; its file stem is the
//! command name. `dev build --release` runs `<dir>/build --release` from the
//! first directory that has a `build` file.
//!
//! # Architecture
//!
//! - **paths**: ordered search directories (executable dir, working dir, config)
//! - **registry**: name resolution (first match wins) and sorted listing
//! - **metadata**: optional descriptions from `plugins.toml`
//!
//! # Search Directory Layout
//!
//! ```text
//! /usr/local/libexec/dev/
//! ├── dev
//! └── plugins/
//!     ├── build
//!     ├── clean
//!     └── hello
//! ./plugins/
//! └── deploy          <- project-local plugin
//! ~/.dev-plugins/     <- listed in [plugins] dirs
//! ```
//!
//! On Windows the file must carry the `.exe` suffix to be resolvable.

pub mod metadata;
pub mod paths;
pub mod registry;

pub use metadata::PluginMetadata;
pub use paths::{plugin_dirs, PLUGINS_DIR_NAME};
pub use registry::PluginRegistry;
