use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use crate::data::sample;
use crate::model::item::Item;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The immutable tree the browser shows. Built once at startup; there is no
/// way to mutate it afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    items: Vec<Item>,
    source: String,
}

impl Dataset {
    pub fn sample() -> Self {
        Self {
            items: sample::sample_items(),
            source: "built-in sample".to_string(),
        }
    }

    /// Parse a JSON array of items and check the tree invariants.
    pub fn from_json(json: &str, source: &str) -> Result<Self> {
        let items: Vec<Item> =
            serde_json::from_str(json).with_context(|| format!("invalid dataset in {}", source))?;
        validate(&items).with_context(|| format!("invalid dataset in {}", source))?;
        Ok(Self {
            items,
            source: source.to_string(),
        })
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        Self::from_json(&content, &path.display().to_string())
    }

    /// Top-level items, in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Total number of items at every depth.
    pub fn len(&self) -> usize {
        count(&self.items)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }
}

fn count(items: &[Item]) -> usize {
    items
        .iter()
        .map(|i| 1 + i.children().map(count).unwrap_or(0))
        .sum()
}

/// Ids must be unique across the whole tree and dates must be `YYYY-MM-DD`.
pub fn validate(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::new();
    validate_level(items, &mut seen)
}

fn validate_level<'a>(items: &'a [Item], seen: &mut HashSet<&'a str>) -> Result<()> {
    for item in items {
        if item.id.is_empty() {
            bail!("item '{}' has an empty id", item.name);
        }
        if !seen.insert(item.id.as_str()) {
            bail!("duplicate id '{}' ({})", item.id, item.name);
        }
        NaiveDate::parse_from_str(&item.modified_date, DATE_FORMAT).with_context(|| {
            format!(
                "item '{}' has modifiedDate '{}', expected YYYY-MM-DD",
                item.id, item.modified_date
            )
        })?;
        if let Some(children) = item.children() {
            validate_level(children, seen)?;
        }
    }
    Ok(())
}
