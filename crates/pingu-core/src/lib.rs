//! # pingu-core
//!
//! Core domain for the PINGU analytics dashboard: chart records, the
//! read-only dataset registry, and the resolver that turns a page's filter
//! selection into a record series.
//! Implements Strategy pattern for number formatting.

pub mod catalog;
pub mod error;
pub mod kpi;
pub mod ranking;
pub mod record;
pub mod registry;
pub mod resolver;

pub use catalog::*;
pub use error::RegistryError;
pub use kpi::*;
pub use ranking::*;
pub use record::*;
pub use registry::*;
pub use resolver::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for number formatting
pub trait NumberFormatter: Send + Sync {
    fn format(&self, num: f64) -> String;
}

/// Compact formatter for large numbers (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactNumberFormatter;

impl NumberFormatter for CompactNumberFormatter {
    fn format(&self, num: f64) -> String {
        let abs = num.abs();
        let sign = if num < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.2}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.2}M", sign, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.2}K", sign, abs / 1_000.0)
        } else {
            format!("{}{:.2}", sign, abs)
        }
    }
}

/// Axis tick formatter: compact suffixes, no trailing zeros (`45K`, `1.5K`, `120`)
#[derive(Debug, Clone, Default)]
pub struct AxisFormatter;

impl NumberFormatter for AxisFormatter {
    fn format(&self, num: f64) -> String {
        let abs = num.abs();
        let sign = if num < 0.0 { "-" } else { "" };

        let (scaled, suffix) = if abs >= 1_000_000_000.0 {
            (abs / 1_000_000_000.0, "B")
        } else if abs >= 1_000_000.0 {
            (abs / 1_000_000.0, "M")
        } else if abs >= 1_000.0 {
            (abs / 1_000.0, "K")
        } else {
            (abs, "")
        };

        let digits = format!("{:.1}", scaled);
        let digits = digits.strip_suffix(".0").unwrap_or(&digits);
        format!("{}{}{}", sign, digits, suffix)
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const BRAND: &str = "#2B4ACB";
    pub const BRAND_LIGHT: &str = "#93a9ff";
    pub const GRID: &str = "#cccccc";
    pub const HOVER: &str = "#f0f0f0";
    pub const BG_PANEL: &str = "#ffffff";
    pub const TEXT_MUTED: &str = "#666666";

    /// Slice colors for pie/donut charts, cycled by index
    pub const PIE: &[&str] = &[BRAND, BRAND_LIGHT];

    pub fn pie_color(index: usize) -> &'static str {
        PIE[index % PIE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_formatter() {
        let formatter = CompactNumberFormatter;
        assert_eq!(formatter.format(1_500_000.0), "1.50M");
        assert_eq!(formatter.format(2_500.0), "2.50K");
        assert_eq!(formatter.format(500.0), "500.00");
    }

    #[test]
    fn test_axis_formatter() {
        let formatter = AxisFormatter;
        assert_eq!(formatter.format(45_000.0), "45K");
        assert_eq!(formatter.format(1_500.0), "1.5K");
        assert_eq!(formatter.format(120.0), "120");
        assert_eq!(formatter.format(0.0), "0");
        assert_eq!(formatter.format(2_000_000.0), "2M");
    }

    #[test]
    fn test_pie_palette_cycles() {
        assert_eq!(colors::pie_color(0), colors::BRAND);
        assert_eq!(colors::pie_color(1), colors::BRAND_LIGHT);
        assert_eq!(colors::pie_color(2), colors::BRAND);
    }
}
