// select/item.rs - Menu items and the ways to build them

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// A selectable row: `key` is what the menu returns, `label` is what it shows.
///
/// Keys need not be unique. Results are derived from row positions, so two
/// rows sharing a key both report that key when chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: String,
    pub label: String,
}

impl Item {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Item {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Parse a `KEY=LABEL` argument. A bare `LABEL` is its own key.
    pub fn parse(arg: &str) -> Item {
        match arg.split_once('=') {
            Some((key, label)) if !key.is_empty() => Item::new(key, label),
            _ => Item::new(arg, arg),
        }
    }
}

impl<K: Into<String>, L: Into<String>> From<(K, L)> for Item {
    fn from((key, label): (K, L)) -> Self {
        Item::new(key, label)
    }
}

/// Parse items from JSON: either `[{"key": .., "label": ..}, ..]` or a
/// `{"key": "label", ..}` object (document order is kept).
pub fn items_from_json(value: &Value) -> Result<Vec<Item>> {
    match value {
        Value::Array(_) => {
            let items: Vec<Item> = serde_json::from_value(value.clone())
                .context("expected an array of {\"key\", \"label\"} objects")?;
            Ok(items)
        }
        Value::Object(map) => map
            .iter()
            .map(|(key, label)| match label {
                Value::String(s) => Ok(Item::new(key.as_str(), s.as_str())),
                other => bail!("label for '{}' must be a string, got {}", key, other),
            })
            .collect(),
        other => bail!("expected a JSON array or object of items, got {}", other),
    }
}

/// Load items from a JSON file (see [`items_from_json`]).
pub fn load_items_file(path: &Path) -> Result<Vec<Item>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading items file {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("parsing items file {}", path.display()))?;
    items_from_json(&value).with_context(|| format!("items file {}", path.display()))
}
