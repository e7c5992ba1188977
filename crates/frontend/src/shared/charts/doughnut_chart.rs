use super::legend::Legend;
use contracts::shared::chart::{circumference, doughnut_segments, palette_color};
use contracts::shared::format::format_percent;
use leptos::prelude::*;

const RADIUS: f64 = 50.0;

/// Ring chart drawn with `stroke-dasharray` segments
#[component]
pub fn DoughnutChart(
    labels: Vec<&'static str>,
    values: Vec<f64>,
    /// Defaults to the palette
    #[prop(optional)]
    colors: Option<Vec<&'static str>>,
    /// Text in the middle of the ring
    #[prop(optional, into)]
    center_label: Option<String>,
) -> impl IntoView {
    let color_of = move |i: usize| {
        colors
            .as_ref()
            .and_then(|c| c.get(i).copied())
            .unwrap_or_else(|| palette_color(i))
    };
    let segments = doughnut_segments(&values, RADIUS);

    let legend: Vec<_> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, color_of(i)))
        .collect();

    let rings = segments
        .iter()
        .map(|seg| {
            let label = labels.get(seg.index).copied().unwrap_or_default();
            view! {
                <circle
                    class="chart-donut-segment"
                    cx="60"
                    cy="60"
                    r=RADIUS
                    fill="none"
                    stroke=color_of(seg.index)
                    stroke-width="16"
                    stroke-dasharray=format!("{:.2} {:.2}", seg.dash, seg.gap)
                    stroke-dashoffset=format!("{:.2}", seg.offset)
                    transform="rotate(-90 60 60)"
                    aria-label=format!("{}: {}", label, format_percent(seg.fraction * 100.0))
                />
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--doughnut">
            <svg viewBox="0 0 120 120" class="chart-svg chart-svg--square">
                <circle class="donut-bg" cx="60" cy="60" r=RADIUS fill="none" stroke-width="16"
                    stroke-dasharray=format!("{:.2}", circumference(RADIUS)) />
                {rings}
                {center_label.map(|t| view! {
                    <text class="chart-donut-center" x="60" y="64" text-anchor="middle">{t}</text>
                })}
            </svg>
            <Legend items=legend />
        </div>
    }
}
