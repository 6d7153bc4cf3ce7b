//! Category line chart (trend over ordered labels)

use leptos::prelude::*;
use pingu_core::Record;

use crate::{
    chartkit::{axis_ticks, line_path, value_scale, BandScale, Scale},
    colors, CategoryAxis, ChartDimensions, ChartGrid, EmptyChart, ValueAxis,
};

/// Line chart configuration
#[derive(Debug, Clone)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    pub dot_radius: f64,
    pub y_ticks: usize,
    pub show_grid: bool,
    pub color: &'static str,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 240.0,
            stroke_width: 3.0,
            dot_radius: 4.0,
            y_ticks: 5,
            show_grid: true,
            color: colors::BRAND,
        }
    }
}

/// Point positions and the path joining them
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub points: Vec<(f64, f64)>,
    pub labels: Vec<(f64, String)>,
    pub path: String,
    pub ticks: Vec<(f64, String)>,
}

/// Lay out records carrying a numeric `metric`; others are skipped.
/// `None` when nothing is plottable.
pub fn line_layout(
    records: &[Record],
    metric: &str,
    dims: &ChartDimensions,
    y_ticks: usize,
) -> Option<LineLayout> {
    let values: Vec<(&str, f64)> = records
        .iter()
        .filter_map(|r| r.number(metric).map(|v| (r.label(), v)))
        .collect();

    if values.is_empty() {
        return None;
    }

    let max = values.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let y_scale = value_scale(max, dims.inner_height(), y_ticks);
    let x_scale = BandScale::new(values.len())
        .range(0.0, dims.inner_width())
        .padding(0.0, 0.25);

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, (_, v))| (x_scale.scale_center(i), y_scale.scale(*v)))
        .collect();

    let labels = values
        .iter()
        .zip(&points)
        .map(|((label, _), (x, _))| (*x, label.to_string()))
        .collect();

    Some(LineLayout {
        path: line_path(&points),
        points,
        labels,
        ticks: axis_ticks(&y_scale, y_ticks),
    })
}

/// Line chart component
#[component]
pub fn LineChart(
    #[prop(into)] records: Signal<Vec<Record>>,
    metric: Option<&'static str>,
    #[prop(optional)] config: Option<LineChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let dims = ChartDimensions::new(config.width, config.height);
    let y_ticks = config.y_ticks;
    let stroke_width = config.stroke_width;
    let dot_radius = config.dot_radius;
    let show_grid = config.show_grid;
    let color = config.color;

    let layout = move || {
        metric.and_then(|metric| records.with(|records| line_layout(records, metric, &dims, y_ticks)))
    };

    view! {
        <div class="chart line-chart">
            {move || match layout() {
                None => view! { <EmptyChart /> }.into_any(),
                Some(layout) => {
                    let grid_lines: Vec<f64> = layout.ticks.iter().map(|(y, _)| *y).collect();

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

                                <path
                                    d=layout.path
                                    fill="none"
                                    stroke=color
                                    stroke-width=stroke_width
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                />

                                {layout.points.into_iter().map(|(x, y)| {
                                    view! {
                                        <circle
                                            cx=x
                                            cy=y
                                            r=dot_radius
                                            fill=colors::BG_PANEL
                                            stroke=color
                                            stroke-width="2"
                                        />
                                    }
                                }).collect_view()}

                                <ValueAxis height=dims.inner_height() ticks=layout.ticks />
                                <CategoryAxis y=dims.inner_height() width=dims.inner_width() labels=layout.labels />
                            </g>
                        </svg>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_layout_orders_points_left_to_right() {
        let records: Vec<Record> = [("Jan", 120.0), ("Feb", 125.0), ("Mar", 130.0), ("Apr", 128.0)]
            .iter()
            .map(|&(l, v)| Record::new(l).with_number("value", v))
            .collect();
        let dims = ChartDimensions::default();
        let layout = line_layout(&records, "value", &dims, 5).unwrap();

        assert_eq!(layout.points.len(), 4);
        assert!(layout.points.windows(2).all(|w| w[0].0 < w[1].0));
        // higher value sits higher on screen
        assert!(layout.points[2].1 < layout.points[0].1);
        assert!(layout.path.starts_with('M'));
        assert_eq!(layout.path.matches('L').count(), 3);
        assert_eq!(layout.labels[3].1, "Apr");
    }

    #[test]
    fn test_line_layout_skips_non_numeric() {
        let records = vec![
            Record::new("a").with_number("value", 1.0),
            Record::new("b").with_text("value", "n/a"),
            Record::new("c").with_number("value", 3.0),
        ];
        let layout = line_layout(&records, "value", &ChartDimensions::default(), 5).unwrap();
        let labels: Vec<_> = layout.labels.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, vec!["a", "c"]);
    }

    #[test]
    fn test_line_layout_empty() {
        assert!(line_layout(&[], "value", &ChartDimensions::default(), 5).is_none());
    }
}
