//! In-memory configuration document.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// A single configuration value: either a scalar string or an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Scalar(String),
    List(Vec<String>),
}

/// A parsed configuration file.
///
/// Keys are stored dotted (`section.key`), or bare when they appear before
/// any section header. A later assignment to the same key replaces the
/// earlier one, whatever its kind. The document is built once and only
/// read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    values: HashMap<String, ConfigValue>,
    path: PathBuf,
}

/// Compose the lookup key for `key` inside `section`.
pub(crate) fn full_key(section: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", section, key)
    }
}

impl ConfigDocument {
    pub(crate) fn new(values: HashMap<String, ConfigValue>, path: PathBuf) -> Self {
        Self { values, path }
    }

    /// Get a scalar value, or `fallback` when the key is absent or holds a list.
    pub fn get(&self, section: &str, key: &str, fallback: &str) -> String {
        match self.values.get(&full_key(section, key)) {
            Some(ConfigValue::Scalar(v)) => v.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Get a list value. Returns an empty vector when absent or scalar.
    pub fn get_list(&self, section: &str, key: &str) -> Vec<String> {
        match self.values.get(&full_key(section, key)) {
            Some(ConfigValue::List(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    /// All scalar keys under `section`, with the section prefix stripped.
    ///
    /// Returns a fresh map, sorted by key.
    pub fn get_section(&self, section: &str) -> BTreeMap<String, String> {
        let prefix = format!("{}.", section);
        self.values
            .iter()
            .filter_map(|(k, v)| match v {
                ConfigValue::Scalar(s) => k
                    .strip_prefix(&prefix)
                    .map(|rest| (rest.to_string(), s.clone())),
                ConfigValue::List(_) => None,
            })
            .collect()
    }

    /// Whether no values were loaded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Path of the loaded file, empty if none was found.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
