//! Dataset catalog: the filter dimensions, the chart categories, and the
//! canonical sample registry every page reads from.

use crate::error::Result;
use crate::record::Record;
use crate::registry::{Node, Registry};
use serde::Serialize;

// ============================================================================
// DIMENSIONS
// ============================================================================

/// A filter discriminator a page exposes as a dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Dimension {
    TimeRange,
    City,
}

impl Dimension {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TimeRange => "Time Range",
            Self::City => "City",
        }
    }

    /// Dropdown options in display order
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::TimeRange => &["Last 30 Days", "Last 6 Months", "Last Year"],
            Self::City => &["All Cities", "New York", "London"],
        }
    }

    /// Value a freshly opened page starts with
    pub fn default_value(&self) -> &'static str {
        self.options()[0]
    }
}

// ============================================================================
// CATEGORIES
// ============================================================================

/// A chart dataset in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Overview,
    Commercial,
    TopProducts,
    SeasonalTrends,
    NewVsReturning,
    ClvTrend,
    MarketBasket,
}

impl Category {
    /// Registry key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Commercial => "commercial",
            Self::TopProducts => "topProducts",
            Self::SeasonalTrends => "seasonalTrends",
            Self::NewVsReturning => "newVsReturning",
            Self::ClvTrend => "clvTrend",
            Self::MarketBasket => "marketBasket",
        }
    }

    /// Discriminators in descent order (time range before city)
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            Self::Overview => &[Dimension::TimeRange, Dimension::City],
            Self::Commercial => &[Dimension::City],
            _ => &[],
        }
    }

    /// Numeric field charts plot for this category
    pub fn metric(&self) -> Option<&'static str> {
        match self {
            Self::Overview | Self::Commercial => Some("revenue"),
            Self::TopProducts => Some("sales"),
            Self::SeasonalTrends => Some("demand"),
            Self::NewVsReturning | Self::ClvTrend => Some("value"),
            Self::MarketBasket => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Overview,
            Self::Commercial,
            Self::TopProducts,
            Self::SeasonalTrends,
            Self::NewVsReturning,
            Self::ClvTrend,
            Self::MarketBasket,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// SAMPLE REGISTRY
// ============================================================================

fn series(metric: &str, points: &[(&str, f64)]) -> Node {
    Node::leaf(
        points
            .iter()
            .map(|&(label, value)| Record::new(label).with_number(metric, value)),
    )
}

fn revenue(points: &[(&str, f64)]) -> Node {
    series("revenue", points)
}

fn product(name: &str, sales: f64, revenue: &str) -> Record {
    Record::new(name)
        .with_number("sales", sales)
        .with_text("revenue", revenue)
}

fn basket(item1: &str, item2: &str, freq: &str) -> Record {
    Record::new(format!("{item1} & {item2}"))
        .with_text("item1", item1)
        .with_text("item2", item2)
        .with_text("freq", freq)
}

/// The canonical dashboard dataset
pub fn sample_registry() -> Result<Registry> {
    Registry::builder()
        .category(
            Category::Overview.name(),
            Node::branch([
                (
                    "Last 30 Days",
                    Node::branch([
                        (
                            "All Cities",
                            revenue(&[
                                ("Day 1", 1200.0),
                                ("Day 5", 1500.0),
                                ("Day 10", 1100.0),
                                ("Day 15", 1800.0),
                                ("Day 20", 1700.0),
                                ("Day 25", 2100.0),
                                ("Day 30", 2300.0),
                            ]),
                        ),
                        (
                            "New York",
                            revenue(&[("Day 1", 500.0), ("Day 15", 900.0), ("Day 30", 1200.0)]),
                        ),
                        (
                            "London",
                            revenue(&[("Day 1", 700.0), ("Day 15", 900.0), ("Day 30", 1100.0)]),
                        ),
                    ]),
                ),
                (
                    "Last 6 Months",
                    Node::branch([
                        (
                            "All Cities",
                            revenue(&[
                                ("Aug", 45000.0),
                                ("Sep", 48000.0),
                                ("Oct", 51000.0),
                                ("Nov", 49000.0),
                                ("Dec", 62000.0),
                                ("Jan", 58000.0),
                            ]),
                        ),
                        ("New York", revenue(&[("Aug", 20000.0), ("Jan", 25000.0)])),
                        ("London", revenue(&[("Aug", 25000.0), ("Jan", 33000.0)])),
                    ]),
                ),
                (
                    "Last Year",
                    Node::branch([
                        (
                            "All Cities",
                            revenue(&[
                                ("Q1", 120000.0),
                                ("Q2", 135000.0),
                                ("Q3", 140000.0),
                                ("Q4", 180000.0),
                            ]),
                        ),
                        ("New York", revenue(&[("Q1", 50000.0), ("Q4", 80000.0)])),
                        ("London", revenue(&[("Q1", 70000.0), ("Q4", 100000.0)])),
                    ]),
                ),
            ]),
        )
        .category(
            Category::Commercial.name(),
            Node::branch([
                (
                    "All Cities",
                    revenue(&[
                        ("Jan", 45000.0),
                        ("Feb", 52000.0),
                        ("Mar", 48000.0),
                        ("Apr", 61000.0),
                        ("May", 55000.0),
                        ("Jun", 67000.0),
                    ]),
                ),
                (
                    "New York",
                    revenue(&[
                        ("Jan", 20000.0),
                        ("Feb", 22000.0),
                        ("Mar", 19000.0),
                        ("Apr", 25000.0),
                        ("May", 23000.0),
                        ("Jun", 30000.0),
                    ]),
                ),
                (
                    "London",
                    revenue(&[
                        ("Jan", 15000.0),
                        ("Feb", 18000.0),
                        ("Mar", 16000.0),
                        ("Apr", 21000.0),
                        ("May", 19000.0),
                        ("Jun", 24000.0),
                    ]),
                ),
            ]),
        )
        .category(
            Category::TopProducts.name(),
            Node::leaf([
                product("Running Shoes", 1200.0, "$45k"),
                product("Leather Bag", 850.0, "$32k"),
                product("Winter Jacket", 600.0, "$28k"),
                product("Smart Watch", 500.0, "$25k"),
                product("Sunglasses", 450.0, "$15k"),
                product("Sports Cap", 300.0, "$5k"),
            ]),
        )
        .category(
            Category::SeasonalTrends.name(),
            series(
                "demand",
                &[("Winter", 65.0), ("Spring", 85.0), ("Summer", 120.0), ("Autumn", 90.0)],
            ),
        )
        .category(
            Category::NewVsReturning.name(),
            series("value", &[("New Customers", 400.0), ("Returning", 800.0)]),
        )
        .category(
            Category::ClvTrend.name(),
            series(
                "value",
                &[
                    ("Jan", 120.0),
                    ("Feb", 125.0),
                    ("Mar", 130.0),
                    ("Apr", 128.0),
                    ("May", 140.0),
                    ("Jun", 155.0),
                ],
            ),
        )
        .category(
            Category::MarketBasket.name(),
            Node::leaf([
                basket("Shoes", "Socks", "85%"),
                basket("Phone", "Case", "70%"),
                basket("Coffee", "Sugar", "65%"),
                basket("Shirt", "Tie", "50%"),
                basket("Laptop", "Mouse", "45%"),
            ]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_registry_builds() {
        let registry = sample_registry().unwrap();
        let names: Vec<_> = registry.categories().collect();
        let expected: Vec<_> = Category::all().iter().map(Category::name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_dropdown_options_match_registry_keys() {
        let registry = sample_registry().unwrap();
        assert_eq!(
            registry.keys(Category::Overview.name(), &[]),
            Dimension::TimeRange.options()
        );
        for range in Dimension::TimeRange.options() {
            assert_eq!(
                registry.keys(Category::Overview.name(), &[*range]),
                Dimension::City.options()
            );
        }
        assert_eq!(
            registry.keys(Category::Commercial.name(), &[]),
            Dimension::City.options()
        );
    }

    #[test]
    fn test_metric_field_present_on_every_record() {
        let registry = sample_registry().unwrap();
        for category in Category::all() {
            let Some(metric) = category.metric() else { continue };
            let path: Vec<&str> = category.dimensions().iter().map(|d| d.default_value()).collect();
            let records = registry.get(category.name(), &path);
            assert!(!records.is_empty(), "{category} has no default data");
            assert!(records.iter().all(|r| r.number(metric).is_some()));
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Dimension::TimeRange.default_value(), "Last 30 Days");
        assert_eq!(Dimension::City.default_value(), "All Cities");
    }

    #[test]
    fn test_category_serde_name() {
        let json = serde_json::to_string(&Category::TopProducts).unwrap();
        assert_eq!(json, r#""topProducts""#);
    }
}
