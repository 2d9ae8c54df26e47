//! Line grammar for the `dev.toml` / `plugins.toml` format.
//!
//! ```text
//! # comment
//! key = value
//! key = "quoted value"
//! key = ["a", "b", "c"]
//! [section]
//! key = value
//! ```
//!
//! The parser is lenient: any line it does not understand is skipped, so a
//! malformed file still yields every line that did parse.

use std::collections::HashMap;

use tracing::trace;

use super::types::{full_key, ConfigValue};

const BLANKS: [char; 2] = [' ', '\t'];
const BLANKS_AND_QUOTES: [char; 3] = [' ', '\t', '"'];

/// Parse configuration text into a dotted-key map.
pub(crate) fn parse(text: &str) -> HashMap<String, ConfigValue> {
    let mut values = HashMap::new();
    let mut section = String::new();

    for (lineno, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let line = line.trim_start_matches(BLANKS);

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
            section = line[1..line.len() - 1].to_string();
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            trace!(line = lineno + 1, "Skipping unrecognised config line");
            continue;
        };

        let key = key.trim_matches(BLANKS_AND_QUOTES);
        if key.is_empty() {
            trace!(line = lineno + 1, "Skipping config line with empty key");
            continue;
        }

        let value = value.trim_matches(BLANKS_AND_QUOTES);
        let parsed = if value.starts_with('[') {
            ConfigValue::List(parse_list(value))
        } else {
            ConfigValue::Scalar(unquote(value).to_string())
        };

        values.insert(full_key(&section, key), parsed);
    }

    values
}

/// Strip surrounding blanks, then one pair of surrounding double quotes.
fn unquote(s: &str) -> &str {
    let s = s.trim_matches(BLANKS);
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Parse `[a, "b", c]` into its elements.
///
/// Elements are split on every comma, quoted or not. Empty elements are
/// dropped. Without a closing bracket the list is empty.
fn parse_list(s: &str) -> Vec<String> {
    let (Some(open), Some(close)) = (s.find('['), s.rfind(']')) else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    s[open + 1..close]
        .split(',')
        .map(unquote)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
