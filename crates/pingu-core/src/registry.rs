//! Immutable hierarchical dataset store.
//!
//! `category -> key -> key -> [Record]`. Built once through [`RegistryBuilder`],
//! validated, then only read. Every traversal goes through [`Registry::get`],
//! which turns any missing step into an empty series.

use crate::error::{RegistryError, Result};
use crate::record::{Record, LABEL_FIELD};

/// One level of the registry tree. Children keep insertion order since charts
/// draw categories left-to-right in that order.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Branch(Vec<(String, Node)>),
    Leaf(Vec<Record>),
}

impl Node {
    pub fn leaf(records: impl IntoIterator<Item = Record>) -> Self {
        Self::Leaf(records.into_iter().collect())
    }

    pub fn branch<K: Into<String>>(children: impl IntoIterator<Item = (K, Node)>) -> Self {
        Self::Branch(children.into_iter().map(|(k, n)| (k.into(), n)).collect())
    }

    fn child(&self, key: &str) -> Option<&Node> {
        match self {
            Self::Branch(children) => children.iter().find(|(k, _)| k == key).map(|(_, n)| n),
            Self::Leaf(_) => None,
        }
    }

    fn records(&self) -> Option<&[Record]> {
        match self {
            Self::Leaf(records) => Some(records),
            Self::Branch(_) => None,
        }
    }

    fn record_count(&self) -> usize {
        match self {
            Self::Leaf(records) => records.len(),
            Self::Branch(children) => children.iter().map(|(_, n)| n.record_count()).sum(),
        }
    }
}

/// Read-only dataset registry
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    categories: Vec<(String, Node)>,
}

impl Registry {
    /// Registry without any category; every lookup is empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Records stored at `category / path...`.
    ///
    /// Absent category, absent segment, a path ending on a branch or running
    /// past a leaf all yield an empty slice.
    pub fn get(&self, category: &str, path: &[&str]) -> &[Record] {
        match self.lookup(category, path) {
            Some(records) => records,
            None => {
                tracing::debug!(category, ?path, "MissingDatasetPath, resolving to empty series");
                &[]
            }
        }
    }

    fn lookup(&self, category: &str, path: &[&str]) -> Option<&[Record]> {
        let mut node = self.category(category)?;
        for key in path {
            node = node.child(key)?;
        }
        node.records()
    }

    fn category(&self, name: &str) -> Option<&Node> {
        self.categories.iter().find(|(k, _)| k == name).map(|(_, n)| n)
    }

    /// Category names in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(k, _)| k.as_str())
    }

    /// Child keys of the branch at `category / prefix...`, empty on miss or leaf
    pub fn keys(&self, category: &str, prefix: &[&str]) -> Vec<&str> {
        let mut node = match self.category(category) {
            Some(node) => node,
            None => return Vec::new(),
        };
        for key in prefix {
            node = match node.child(key) {
                Some(child) => child,
                None => return Vec::new(),
            };
        }
        match node {
            Node::Branch(children) => children.iter().map(|(k, _)| k.as_str()).collect(),
            Node::Leaf(_) => Vec::new(),
        }
    }

    /// Total number of records across all leaves
    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|(_, n)| n.record_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects categories, then validates the whole tree in [`build`](Self::build)
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    categories: Vec<(String, Node)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, name: impl Into<String>, node: Node) -> Self {
        self.categories.push((name.into(), node));
        self
    }

    /// Validate and freeze.
    ///
    /// Rejects duplicate categories, duplicate keys on one level, records that
    /// repeat a measure or shadow the label field, and categories whose
    /// records do not all share one measure-key list.
    pub fn build(self) -> Result<Registry> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.categories.len());
        for (name, node) in &self.categories {
            if seen.contains(&name.as_str()) {
                return Err(RegistryError::DuplicateCategory(name.clone()));
            }
            seen.push(name);

            let mut shape: Option<Vec<String>> = None;
            validate_node(name, name, node, &mut shape)?;
        }

        let registry = Registry {
            categories: self.categories,
        };
        tracing::info!(
            categories = registry.categories.len(),
            records = registry.record_count(),
            "Dataset registry built"
        );
        Ok(registry)
    }
}

fn validate_node(
    category: &str,
    path: &str,
    node: &Node,
    shape: &mut Option<Vec<String>>,
) -> Result<()> {
    match node {
        Node::Branch(children) => {
            for (i, (key, child)) in children.iter().enumerate() {
                if children[..i].iter().any(|(k, _)| k == key) {
                    return Err(RegistryError::DuplicateKey {
                        path: path.to_string(),
                        key: key.clone(),
                    });
                }
                validate_node(category, &format!("{path}/{key}"), child, shape)?;
            }
        }
        Node::Leaf(records) => {
            for record in records {
                validate_record(path, record)?;
                let keys: Vec<String> = record.measure_keys().map(str::to_string).collect();
                let expected = shape.get_or_insert_with(|| keys.clone());
                if *expected != keys {
                    return Err(RegistryError::InconsistentShape {
                        category: category.to_string(),
                        expected: expected.join(", "),
                        found: keys.join(", "),
                    });
                }
            }
        }
    }
    Ok(())
}

fn validate_record(path: &str, record: &Record) -> Result<()> {
    let keys: Vec<&str> = record.measure_keys().collect();
    for (i, key) in keys.iter().enumerate() {
        if *key == LABEL_FIELD {
            return Err(RegistryError::ReservedMeasure {
                path: path.to_string(),
                label: record.label().to_string(),
                key: key.to_string(),
            });
        }
        if keys[..i].contains(key) {
            return Err(RegistryError::DuplicateMeasure {
                path: path.to_string(),
                label: record.label().to_string(),
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, revenue: f64) -> Record {
        Record::new(label).with_number("revenue", revenue)
    }

    fn two_level() -> Registry {
        Registry::builder()
            .category(
                "sales",
                Node::branch([
                    (
                        "2024",
                        Node::branch([
                            ("north", Node::leaf([point("Q1", 10.0), point("Q2", 20.0)])),
                            ("south", Node::leaf([])),
                        ]),
                    ),
                    ("2025", Node::branch([("north", Node::leaf([point("Q1", 30.0)]))])),
                ]),
            )
            .category("flat", Node::leaf([point("A", 1.0)]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_get_full_path_preserves_order() {
        let registry = two_level();
        let records = registry.get("sales", &["2024", "north"]);
        let labels: Vec<_> = records.iter().map(Record::label).collect();
        assert_eq!(labels, vec!["Q1", "Q2"]);
        assert_eq!(registry.get("flat", &[]).len(), 1);
    }

    #[test]
    fn test_get_empty_leaf_is_empty() {
        let registry = two_level();
        assert!(registry.get("sales", &["2024", "south"]).is_empty());
    }

    #[test]
    fn test_missing_steps_resolve_empty() {
        let registry = two_level();
        assert!(registry.get("nope", &[]).is_empty());
        assert!(registry.get("sales", &["1999", "north"]).is_empty());
        assert!(registry.get("sales", &["2025", "south"]).is_empty());
        // stops on a branch
        assert!(registry.get("sales", &["2024"]).is_empty());
        // runs past a leaf
        assert!(registry.get("flat", &["extra"]).is_empty());
        // keys are case-sensitive
        assert!(registry.get("sales", &["2024", "North"]).is_empty());
    }

    #[test]
    fn test_keys_listing() {
        let registry = two_level();
        assert_eq!(registry.keys("sales", &[]), vec!["2024", "2025"]);
        assert_eq!(registry.keys("sales", &["2024"]), vec!["north", "south"]);
        assert!(registry.keys("flat", &[]).is_empty());
        assert!(registry.keys("missing", &[]).is_empty());
        assert_eq!(registry.categories().collect::<Vec<_>>(), vec!["sales", "flat"]);
        assert_eq!(registry.record_count(), 4);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::empty();
        assert!(registry.is_empty());
        assert!(registry.get("sales", &["2024", "north"]).is_empty());
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let err = Registry::builder()
            .category("a", Node::leaf([]))
            .category("a", Node::leaf([]))
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCategory("a".into()));
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let err = Registry::builder()
            .category(
                "sales",
                Node::branch([("x", Node::leaf([])), ("x", Node::leaf([]))]),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                path: "sales".into(),
                key: "x".into()
            }
        );
    }

    #[test]
    fn test_rejects_bad_records() {
        let repeated = Record::new("A").with_number("v", 1.0).with_number("v", 2.0);
        let err = Registry::builder()
            .category("c", Node::leaf([repeated]))
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateMeasure { .. }));

        let shadowing = Record::new("A").with_text("name", "B");
        let err = Registry::builder()
            .category("c", Node::leaf([shadowing]))
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::ReservedMeasure { .. }));
    }

    #[test]
    fn test_rejects_mixed_shapes_across_leaves() {
        let err = Registry::builder()
            .category(
                "c",
                Node::branch([
                    ("a", Node::leaf([point("x", 1.0)])),
                    ("b", Node::leaf([Record::new("y").with_number("demand", 2.0)])),
                ]),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::InconsistentShape {
                category: "c".into(),
                expected: "revenue".into(),
                found: "demand".into(),
            }
        );
    }
}
