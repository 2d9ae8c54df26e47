//! Optional per-plugin metadata from `plugins.toml`.
//!
//! ```text
//! [hello]
//! description = "Greet someone (or the world)"
//! ```

use crate::config::ConfigDocument;

/// Descriptions keyed by plugin name.
#[derive(Debug, Clone, Default)]
pub struct PluginMetadata {
    doc: ConfigDocument,
}

impl PluginMetadata {
    pub fn new(doc: ConfigDocument) -> Self {
        Self { doc }
    }

    /// The description declared for `name`, if any and non-empty.
    pub fn description(&self, name: &str) -> Option<String> {
        let desc = self.doc.get(name, "description", "");
        (!desc.is_empty()).then_some(desc)
    }
}
