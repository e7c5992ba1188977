use super::axis::{x_labels, y_grid};
use super::legend::Legend;
use contracts::shared::chart::{area_path, line_path, line_points, nice_max, ChartData, Plot};
use leptos::prelude::*;

/// One polyline per series; `area` fills the first series down to the axis
#[component]
pub fn LineChart(
    data: ChartData,
    #[prop(optional)]
    height: Option<f64>,
    #[prop(optional)]
    y_max: Option<f64>,
    #[prop(optional)]
    area: bool,
    #[prop(optional)]
    suffix: &'static str,
) -> impl IntoView {
    let plot = Plot::new(480.0, height.unwrap_or(220.0));
    let y_max = y_max.unwrap_or_else(|| nice_max(data.max_value()));
    let count = data.labels.len();
    let legend: Vec<_> = data.series.iter().map(|s| (s.name, s.color)).collect();
    let show_legend = legend.len() > 1;

    let lines = data
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let points = line_points(&series.values, &plot, y_max);
            let fill = (area && i == 0).then(|| {
                view! {
                    <path
                        class="chart-area"
                        d=area_path(&points, plot.baseline())
                        fill=series.color
                        fill-opacity="0.15"
                    />
                }
            });
            let dots = points
                .iter()
                .zip(series.values.iter())
                .map(|(&(x, y), v)| {
                    view! {
                        <circle
                            class="chart-dot"
                            cx=x
                            cy=y
                            r="3"
                            fill=series.color
                            aria-label=format!("{}: {}{}", series.name, v, suffix)
                        />
                    }
                })
                .collect_view();
            view! {
                {fill}
                <path class="chart-line" d=line_path(&points) fill="none" stroke=series.color stroke-width="2" />
                {dots}
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--line">
            <svg viewBox=format!("0 0 {} {}", plot.width, plot.height) class="chart-svg">
                {y_grid(plot, y_max, suffix)}
                {lines}
                {x_labels(plot, &data.labels, move |i| plot.point_x(count, i))}
            </svg>
            {show_legend.then(|| view! { <Legend items=legend /> })}
        </div>
    }
}
