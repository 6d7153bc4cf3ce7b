//! Category bar chart
//!
//! One bar per record, in series order, height from a numeric metric field.

use leptos::prelude::*;
use pingu_core::{CompactNumberFormatter, NumberFormatter, Record};

use crate::{
    chartkit::{axis_ticks, rounded_top_bar, value_scale, BandScale, Scale},
    colors, CategoryAxis, ChartDimensions, ChartGrid, EmptyChart, ValueAxis,
};

/// Bar chart configuration
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    pub width: f64,
    pub height: f64,
    /// Maximum bar width; bars shrink when the band is narrower
    pub bar_size: f64,
    pub corner_radius: f64,
    pub y_ticks: usize,
    pub show_grid: bool,
    pub color: &'static str,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            bar_size: 40.0,
            corner_radius: 4.0,
            y_ticks: 5,
            show_grid: true,
            color: colors::BRAND,
        }
    }
}

/// A positioned bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Computed bar geometry in inner-chart coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub bars: Vec<Bar>,
    pub ticks: Vec<(f64, String)>,
}

/// Lay out `records` by `metric`.
///
/// Records without a numeric `metric` keep their slot with a zero-height bar.
/// Returns `None` when no record carries the metric, so the caller shows a
/// placeholder.
pub fn bar_layout(
    records: &[Record],
    metric: &str,
    dims: &ChartDimensions,
    config: &BarChartConfig,
) -> Option<BarLayout> {
    if !records.iter().any(|r| r.number(metric).is_some()) {
        return None;
    }

    let max = records
        .iter()
        .filter_map(|r| r.number(metric))
        .fold(0.0_f64, f64::max);

    let height = dims.inner_height();
    let y_scale = value_scale(max, height, config.y_ticks);
    let x_scale = BandScale::new(records.len())
        .range(0.0, dims.inner_width())
        .padding(0.1, 0.1);
    let width = x_scale.bandwidth().min(config.bar_size);

    let bars = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let value = record.number(metric).unwrap_or(0.0);
            let y = y_scale.scale(value.max(0.0));
            Bar {
                label: record.label().to_string(),
                value,
                x: x_scale.scale_center(i) - width / 2.0,
                y,
                width,
                height: (height - y).max(0.0),
            }
        })
        .collect();

    Some(BarLayout {
        bars,
        ticks: axis_ticks(&y_scale, config.y_ticks),
    })
}

/// Bar chart component. Without a `metric` there is nothing to plot and the
/// placeholder is shown.
#[component]
pub fn BarChart(
    #[prop(into)] records: Signal<Vec<Record>>,
    metric: Option<&'static str>,
    #[prop(optional)] config: Option<BarChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let dims = ChartDimensions::new(config.width, config.height);
    let hovered = RwSignal::new(None::<usize>);

    let show_grid = config.show_grid;
    let color = config.color;
    let radius = config.corner_radius;

    let layout = move || {
        let layout = metric
            .and_then(|metric| records.with(|records| bar_layout(records, metric, &dims, &config)));
        if layout.is_none() {
            tracing::debug!(?metric, "Bar chart has no data, showing placeholder");
        }
        layout
    };

    view! {
        <div class="chart bar-chart">
            {move || match layout() {
                None => view! { <EmptyChart /> }.into_any(),
                Some(layout) => {
                    let grid_lines: Vec<f64> = layout.ticks.iter().map(|(y, _)| *y).collect();
                    let labels: Vec<(f64, String)> = layout
                        .bars
                        .iter()
                        .map(|b| (b.center_x(), b.label.clone()))
                        .collect();
                    let tooltip_bars = layout.bars.clone();

                    view! {
                        <svg
                            viewBox=dims.viewbox()
                            preserveAspectRatio="xMidYMid meet"
                            style="width: 100%; height: 100%;"
                        >
                            <g transform=dims.inner_transform()>
                                {show_grid.then(|| view! {
                                    <ChartGrid width=dims.inner_width() lines=grid_lines />
                                })}

                                {layout.bars.into_iter().enumerate().map(|(i, bar)| {
                                    let band_x = bar.x - bar.width * 0.25;
                                    let band_w = bar.width * 1.5;
                                    let hover_fill = move || {
                                        if hovered.get() == Some(i) { colors::HOVER } else { "transparent" }
                                    };
                                    view! {
                                        <g
                                            class="bar"
                                            on:mouseenter=move |_| hovered.set(Some(i))
                                            on:mouseleave=move |_| hovered.set(None)
                                        >
                                            <rect
                                                class="bar-hover"
                                                x=band_x
                                                y="0"
                                                width=band_w
                                                height=dims.inner_height()
                                                fill=hover_fill
                                            />
                                            <path
                                                d=rounded_top_bar(bar.x, bar.y, bar.width, bar.height, radius)
                                                fill=color
                                            />
                                        </g>
                                    }
                                }).collect_view()}

                                <ValueAxis height=dims.inner_height() ticks=layout.ticks />
                                <CategoryAxis y=dims.inner_height() width=dims.inner_width() labels=labels />

                                {move || {
                                    hovered.get().and_then(|i| tooltip_bars.get(i).cloned()).map(|bar| {
                                        view! { <BarTooltip bar=bar /> }
                                    })
                                }}
                            </g>
                        </svg>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BarTooltip(bar: Bar) -> impl IntoView {
    let text = format!("{}: {}", bar.label, CompactNumberFormatter.format(bar.value));
    let width = 12.0 + text.len() as f64 * 6.5;
    let x = bar.center_x() - width / 2.0;
    let y = (bar.y - 34.0).max(0.0);
    let text_y = y + 16.0;

    view! {
        <g class="chart-tooltip" pointer-events="none">
            <rect
                x=x
                y=y
                width=width
                height="24"
                rx="8"
                fill=colors::BG_PANEL
                stroke=colors::BRAND
                stroke-width="2"
            />
            <text
                x=bar.center_x()
                y=text_y
                text-anchor="middle"
                fill=colors::BRAND
                font-size="11"
            >
                {text}
            </text>
        </g>
    }
}
