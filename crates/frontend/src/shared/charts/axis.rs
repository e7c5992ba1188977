use contracts::shared::chart::{ticks, Plot};
use leptos::prelude::*;

const TICK_COUNT: usize = 4;

/// Horizontal grid lines with value labels
pub fn y_grid(plot: Plot, y_max: f64, suffix: &'static str) -> impl IntoView {
    ticks(y_max, TICK_COUNT)
        .into_iter()
        .map(|t| {
            let y = plot.y_for(t, y_max);
            view! {
                <line class="chart-grid" x1=plot.left y1=y x2=plot.width - plot.right y2=y />
                <text class="chart-axis-label" x=plot.left - 6.0 y=y + 4.0 text-anchor="end">
                    {format!("{}{}", t.round(), suffix)}
                </text>
            }
        })
        .collect_view()
}

/// Category labels under the plot, `x_of(index)` gives the label center
pub fn x_labels(
    plot: Plot,
    labels: &[&'static str],
    x_of: impl Fn(usize) -> f64,
) -> impl IntoView {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text class="chart-axis-label" x=x_of(i) y=plot.baseline() + 18.0 text-anchor="middle">
                    {*label}
                </text>
            }
        })
        .collect_view()
}
