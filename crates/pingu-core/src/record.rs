//! Chart-ready records: a category label plus ordered, named measures

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Field name the label is serialized under (what the charts use as x-axis key)
pub const LABEL_FIELD: &str = "name";

/// A single measure value. Numbers feed charts, text is display-only
/// (e.g. pre-formatted revenue like `"$45k"` or a frequency like `"85%"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl Measure {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Measure {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Measure {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One data point of a chart series. Immutable once placed in a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    label: String,
    measures: Vec<(String, Measure)>,
}

impl Record {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            measures: Vec::new(),
        }
    }

    /// Append a numeric measure
    pub fn with_number(self, key: impl Into<String>, value: f64) -> Self {
        self.with(key, Measure::Number(value))
    }

    /// Append a textual measure
    pub fn with_text(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, Measure::Text(value.into()))
    }

    pub fn with(mut self, key: impl Into<String>, value: Measure) -> Self {
        self.measures.push((key.into(), value));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn measures(&self) -> &[(String, Measure)] {
        &self.measures
    }

    /// Measure keys in declaration order
    pub fn measure_keys(&self) -> impl Iterator<Item = &str> {
        self.measures.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&Measure> {
        self.measures.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Numeric value of `key`, `None` if absent or textual
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Measure::as_f64)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Measure::as_text)
    }
}

// Flat object, same field names the chart series are keyed by:
// {"name": "Day 1", "revenue": 1200.0}
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.measures.len() + 1))?;
        map.serialize_entry(LABEL_FIELD, &self.label)?;
        for (key, value) in &self.measures {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let product = Record::new("Running Shoes")
            .with_number("sales", 1200.0)
            .with_text("revenue", "$45k");

        assert_eq!(product.label(), "Running Shoes");
        assert_eq!(product.number("sales"), Some(1200.0));
        assert_eq!(product.text("revenue"), Some("$45k"));
        assert_eq!(product.number("revenue"), None);
        assert!(product.get("missing").is_none());
        assert_eq!(product.measure_keys().collect::<Vec<_>>(), vec!["sales", "revenue"]);
    }

    #[test]
    fn test_record_serializes_flat_in_order() {
        let pair = Record::new("Shoes & Socks")
            .with_text("item1", "Shoes")
            .with_text("item2", "Socks")
            .with_text("freq", "85%");

        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Shoes & Socks","item1":"Shoes","item2":"Socks","freq":"85%"}"#
        );
    }

    #[test]
    fn test_measure_display() {
        assert_eq!(Measure::from(1200.0).to_string(), "1200");
        assert_eq!(Measure::from("85%").to_string(), "85%");
    }
}
