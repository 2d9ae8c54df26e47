//! Command aliases from the `[alias]` config section.
//!
//! ```text
//! [alias]
//! b = build
//! ls = list
//! ```
//!
//! Substitution happens once, before built-in matching, so an alias may
//! name a built-in or a plugin. Targets are not looked up again: with
//! `a = b` and `b = c`, `dev a` runs `b`.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::ConfigDocument;

/// Name of the config section holding aliases.
pub const ALIAS_SECTION: &str = "alias";

/// Alias name to target command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// Build the table from the config's `[alias]` section.
    ///
    /// Self-referential aliases and aliases with an empty target are
    /// rejected with a warning.
    pub fn from_config(config: &ConfigDocument) -> Self {
        Self::from_entries(config.get_section(ALIAS_SECTION))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|(alias, target)| {
                if target.is_empty() {
                    warn!(alias = %alias, "Ignoring alias with empty target");
                    false
                } else if alias == target {
                    warn!(alias = %alias, "Ignoring self-referential alias");
                    false
                } else {
                    true
                }
            })
            .collect();
        Self { entries }
    }

    /// Substitute `command` with its alias target, if it is an alias.
    pub fn resolve<'a>(&'a self, command: &'a str) -> &'a str {
        match self.entries.get(command) {
            Some(target) => {
                debug!(
                    alias = %command,
                    target = %target,
                    target_is_alias = self.entries.contains_key(target),
                    "Applied alias"
                );
                target
            }
            None => command,
        }
    }

    /// Iterate `(alias, target)` pairs sorted by alias.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
