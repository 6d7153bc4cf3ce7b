//! Selection-to-dataset resolution

use std::collections::BTreeMap;

use crate::catalog::{Category, Dimension};
use crate::record::Record;
use crate::registry::Registry;

/// Currently chosen value for each filter dimension of a page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    values: BTreeMap<Dimension, String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every dimension `category` descends through, at its default value
    pub fn defaults_for(category: Category) -> Self {
        let values = category
            .dimensions()
            .iter()
            .map(|d| (*d, d.default_value().to_string()))
            .collect();
        Self { values }
    }

    pub fn with(mut self, dimension: Dimension, value: impl Into<String>) -> Self {
        self.set(dimension, value);
        self
    }

    /// Set a value, returns `true` if it changed
    pub fn set(&mut self, dimension: Dimension, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.get(dimension) == Some(value.as_str()) {
            return false;
        }
        self.values.insert(dimension, value);
        true
    }

    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        self.values.get(&dimension).map(String::as_str)
    }

    /// Registry path for `category`, `None` if a needed dimension is unset
    pub fn path_for(&self, category: Category) -> Option<Vec<&str>> {
        category
            .dimensions()
            .iter()
            .map(|d| self.get(*d))
            .collect()
    }
}

/// Records for `category` under `selection`, in stored order.
///
/// Any gap (unset dimension, unknown key, unknown category) yields an empty
/// series; the caller renders a placeholder.
pub fn resolve(registry: &Registry, category: Category, selection: &Selection) -> Vec<Record> {
    match selection.path_for(category) {
        Some(path) => registry.get(category.name(), &path).to_vec(),
        None => {
            tracing::debug!(%category, ?selection, "Selection is missing a dimension");
            Vec::new()
        }
    }
}
