//! Donut (pie) chart with side legend

use leptos::prelude::*;
use pingu_core::Record;

use crate::{chartkit::arc_slice_path, colors, EmptyChart};

/// Donut chart configuration
#[derive(Debug, Clone)]
pub struct DonutChartConfig {
    pub width: f64,
    pub height: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Gap between slices, in degrees
    pub padding_angle: f64,
    pub show_legend: bool,
}

impl Default for DonutChartConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 200.0,
            inner_radius: 60.0,
            outer_radius: 80.0,
            padding_angle: 5.0,
            show_legend: true,
        }
    }
}

/// One slice of the donut
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Share of the total, 0..=1
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl Slice {
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.fraction * 100.0)
    }
}

/// Split 360 degrees across the positive `metric` values, clockwise from
/// 12 o'clock, leaving `padding_angle` between neighbours.
///
/// Non-positive and non-numeric records get no slice. Colors follow record
/// order through the pie palette.
pub fn donut_slices(records: &[Record], metric: &str, padding_angle: f64) -> Vec<Slice> {
    let values: Vec<(usize, &Record, f64)> = records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.number(metric).filter(|v| *v > 0.0).map(|v| (i, r, v)))
        .collect();

    let total: f64 = values.iter().map(|(_, _, v)| v).sum();
    if values.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let padding = if values.len() > 1 { padding_angle.max(0.0) } else { 0.0 };
    let available = (360.0 - padding * values.len() as f64).max(0.0);

    let mut angle = 0.0;
    values
        .into_iter()
        .map(|(i, record, value)| {
            let fraction = value / total;
            let start = angle;
            let end = start + available * fraction;
            angle = end + padding;
            Slice {
                label: record.label().to_string(),
                value,
                fraction,
                start_angle: start,
                end_angle: end,
                color: colors::pie_color(i),
            }
        })
        .collect()
}

/// Donut chart component
#[component]
pub fn DonutChart(
    #[prop(into)] records: Signal<Vec<Record>>,
    metric: Option<&'static str>,
    #[prop(optional)] config: Option<DonutChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let DonutChartConfig {
        width,
        height,
        inner_radius,
        outer_radius,
        padding_angle,
        show_legend,
    } = config;

    let cx = if show_legend { width * 0.35 } else { width / 2.0 };
    let cy = height / 2.0;

    let slices = move || {
        metric
            .map(|metric| records.with(|records| donut_slices(records, metric, padding_angle)))
            .unwrap_or_default()
    };

    view! {
        <div class="chart donut-chart">
            {move || {
                let slices = slices();
                if slices.is_empty() {
                    return view! { <EmptyChart /> }.into_any();
                }

                let legend = slices.clone();
                let legend_x = width * 0.7;
                let legend_y0 = cy - (legend.len() as f64 - 1.0) * 12.0;

                view! {
                    <svg
                        viewBox=format!("0 0 {} {}", width, height)
                        preserveAspectRatio="xMidYMid meet"
                        style="width: 100%; height: 100%;"
                    >
                        {slices.into_iter().map(|slice| {
                            let d = arc_slice_path(cx, cy, inner_radius, outer_radius, slice.start_angle, slice.end_angle);
                            let title = format!("{}: {}", slice.label, slice.value);
                            view! {
                                <path class="donut-slice" d=d fill=slice.color>
                                    <title>{title}</title>
                                </path>
                            }
                        }).collect_view()}

                        {show_legend.then(|| {
                            legend.into_iter().enumerate().map(|(i, slice)| {
                                let y = legend_y0 + i as f64 * 24.0;
                                let swatch_y = y - 5.0;
                                let text_y = y + 4.0;
                                let text_x = legend_x + 14.0;
                                view! {
                                    <g class="donut-legend">
                                        <rect x=legend_x y=swatch_y width="10" height="10" fill=slice.color />
                                        <text x=text_x y=text_y fill=colors::TEXT_MUTED font-size="12">
                                            {format!("{} ({})", slice.label, slice.percent_label())}
                                        </text>
                                    </g>
                                }
                            }).collect_view()
                        })}
                    </svg>
                }
                .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(points: &[(&str, f64)]) -> Vec<Record> {
        points
            .iter()
            .map(|&(l, v)| Record::new(l).with_number("value", v))
            .collect()
    }

    #[test]
    fn test_slices_proportional_with_padding() {
        let records = split(&[("New Customers", 400.0), ("Returning", 800.0)]);
        let slices = donut_slices(&records, "value", 5.0);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "New Customers");
        assert!((slices[0].fraction - 1.0 / 3.0).abs() < 1e-9);

        let sweep0 = slices[0].end_angle - slices[0].start_angle;
        let sweep1 = slices[1].end_angle - slices[1].start_angle;
        assert!((sweep1 - 2.0 * sweep0).abs() < 1e-9);
        assert!((sweep0 + sweep1 + 10.0 - 360.0).abs() < 1e-9);
        assert!((slices[1].start_angle - slices[0].end_angle - 5.0).abs() < 1e-9);

        assert_eq!(slices[0].color, colors::BRAND);
        assert_eq!(slices[1].color, colors::BRAND_LIGHT);
        assert_eq!(slices[1].percent_label(), "67%");
    }

    #[test]
    fn test_single_slice_is_full_ring() {
        let slices = donut_slices(&split(&[("Only", 5.0)]), "value", 5.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].end_angle - slices[0].start_angle, 360.0);
    }

    #[test]
    fn test_no_positive_values() {
        assert!(donut_slices(&[], "value", 5.0).is_empty());
        assert!(donut_slices(&split(&[("a", 0.0), ("b", -3.0)]), "value", 5.0).is_empty());
    }
}
