//! Positional ranking for list panels (Top Products, Market Basket)

use crate::record::Record;

/// A record with its 1-based position in the source series.
///
/// The rank is the position, never a sort by metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub rank: usize,
    pub record: &'a Record,
}

impl Ranked<'_> {
    /// `#1`, `#2`, ...
    pub fn badge(&self) -> String {
        format!("#{}", self.rank)
    }
}

pub fn ranked(records: &[Record]) -> Vec<Ranked<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| Ranked { rank: i + 1, record })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_registry, Category};

    #[test]
    fn test_rank_follows_position_not_value() {
        let records = vec![
            Record::new("low").with_number("sales", 10.0),
            Record::new("high").with_number("sales", 900.0),
            Record::new("mid").with_number("sales", 50.0),
        ];
        let list = ranked(&records);
        let labels: Vec<_> = list.iter().map(|r| (r.rank, r.record.label())).collect();
        assert_eq!(labels, vec![(1, "low"), (2, "high"), (3, "mid")]);
        assert_eq!(list[1].badge(), "#2");
    }

    #[test]
    fn test_top_products_ranking() {
        let registry = sample_registry().unwrap();
        let products = registry.get(Category::TopProducts.name(), &[]);
        let list = ranked(products);
        assert_eq!(list.len(), 6);
        for (n, entry) in list.iter().enumerate() {
            assert_eq!(entry.rank, n + 1);
            assert_eq!(entry.record, &products[n]);
        }
        assert_eq!(list[0].record.label(), "Running Shoes");
        assert_eq!(list[5].record.text("revenue"), Some("$5k"));
    }

    #[test]
    fn test_empty_list() {
        assert!(ranked(&[]).is_empty());
    }
}
