//! Configuration for dev
//!
//! A minimal key/value/section format shared by `dev.toml` and
//! `plugins.toml`:
//!
//! - **types**: `ConfigDocument` and `ConfigValue`
//! - **parser**: the lenient line grammar
//! - **loader**: file loading and the search order
//!
//! Loading never fails. A missing file and an empty file are the same thing,
//! so the dispatcher works with zero configuration.

pub mod loader;
mod parser;
pub mod types;

pub use loader::{find, find_plugin_metadata, global_config_path, load};
pub use types::{ConfigDocument, ConfigValue};
