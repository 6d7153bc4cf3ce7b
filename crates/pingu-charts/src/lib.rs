//! # pingu-charts
//!
//! D3.js-style SVG charting built with Leptos.
//! Consumes ordered [`Record`](pingu_core::Record) series and draws them;
//! knows nothing about registries or selections.
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, ticks
//! - `bar` - Category bar chart
//! - `line` - Category line chart
//! - `donut` - Pie/donut chart with legend

pub mod bar;
pub mod chartkit;
pub mod donut;
pub mod line;

pub use bar::*;
pub use chartkit::*;
pub use donut::*;
pub use line::*;

// Re-export colors from pingu-core for convenience
pub use pingu_core::colors;

use leptos::prelude::*;

/// Placeholder text when a selection resolves to no data
pub const NO_DATA: &str = "No data for this selection";

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Standard margins: value axis on the left, category labels below
    pub const fn standard() -> Self {
        Self::new(16.0, 16.0, 30.0, 48.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(600.0, 300.0)
    }
}

// ============================================================================
// SHARED PIECES
// ============================================================================

/// Shown instead of a chart when the series is empty
#[component]
pub fn EmptyChart() -> impl IntoView {
    view! {
        <div class="chart-empty">
            <span class="chart-empty-msg">{NO_DATA}</span>
        </div>
    }
}

/// Dashed horizontal grid lines at the given y positions
#[component]
pub(crate) fn ChartGrid(width: f64, lines: Vec<f64>) -> impl IntoView {
    view! {
        <g class="chart-grid">
            {lines.into_iter().map(|y| {
                view! {
                    <line
                        x1="0" y1=y
                        x2=width y2=y
                        stroke=colors::GRID
                        stroke-width="1"
                        stroke-dasharray="3,3"
                    />
                }
            }).collect_view()}
        </g>
    }
}

/// Left value axis with tick labels
#[component]
pub(crate) fn ValueAxis(height: f64, ticks: Vec<(f64, String)>) -> impl IntoView {
    view! {
        <g class="chart-axis y-axis">
            <line x1="0" y1="0" x2="0" y2=height stroke=colors::BRAND stroke-width="1" />
            {ticks.into_iter().map(|(y, label)| {
                view! {
                    <g transform=format!("translate(0, {})", y)>
                        <line x1="-5" x2="0" stroke=colors::BRAND />
                        <text
                            x="-8"
                            dy="0.32em"
                            text-anchor="end"
                            fill=colors::BRAND
                            font-size="11"
                        >
                            {label}
                        </text>
                    </g>
                }
            }).collect_view()}
        </g>
    }
}

/// Bottom category axis, one label per record
#[component]
pub(crate) fn CategoryAxis(y: f64, width: f64, labels: Vec<(f64, String)>) -> impl IntoView {
    view! {
        <g class="chart-axis x-axis" transform=format!("translate(0, {})", y)>
            <line x1="0" y1="0" x2=width y2="0" stroke=colors::BRAND stroke-width="1" />
            {labels.into_iter().map(|(x, label)| {
                view! {
                    <text
                        x=x
                        y="18"
                        text-anchor="middle"
                        fill=colors::BRAND
                        font-size="11"
                    >
                        {label}
                    </text>
                }
            }).collect_view()}
        </g>
    }
}
