use super::axis::{x_labels, y_grid};
use super::legend::Legend;
use contracts::shared::chart::{bar_layout, nice_max, ChartData, Plot};
use leptos::prelude::*;

/// Grouped vertical bars, one color per series
#[component]
pub fn BarChart(
    data: ChartData,
    #[prop(optional)]
    height: Option<f64>,
    /// Fixed axis maximum, e.g. 100 for percentages
    #[prop(optional)]
    y_max: Option<f64>,
    /// Per-category colors for a single series
    #[prop(optional)]
    category_colors: Option<Vec<&'static str>>,
    #[prop(optional)]
    suffix: &'static str,
) -> impl IntoView {
    let plot = Plot::new(480.0, height.unwrap_or(220.0));
    let y_max = y_max.unwrap_or_else(|| nice_max(data.max_value()));
    let bars = bar_layout(&data, &plot, y_max);
    let band_x = {
        let plot = plot;
        let count = data.labels.len();
        move |i| plot.band_center(count, i)
    };
    let legend: Vec<_> = data.series.iter().map(|s| (s.name, s.color)).collect();
    let show_legend = legend.len() > 1;

    view! {
        <div class="chart chart--bar">
            <svg viewBox=format!("0 0 {} {}", plot.width, plot.height) class="chart-svg">
                {y_grid(plot, y_max, suffix)}
                {bars
                    .into_iter()
                    .map(|bar| {
                        let fill = category_colors
                            .as_ref()
                            .and_then(|c| c.get(bar.category).copied())
                            .unwrap_or(data.series[bar.series].color);
                        view! {
                            <rect
                                class="chart-bar"
                                x=bar.x
                                y=bar.y
                                width=bar.width
                                height=bar.height
                                fill=fill
                                rx="2"
                                aria-label=format!("{}: {}{}", data.labels[bar.category], bar.value, suffix)
                            />
                        }
                    })
                    .collect_view()}
                {x_labels(plot, &data.labels, band_x)}
            </svg>
            {show_legend.then(|| view! { <Legend items=legend /> })}
        </div>
    }
}
