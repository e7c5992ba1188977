use super::legend::Legend;
use contracts::shared::chart::{points_attr, radar_point, radar_polygon, ChartData};
use leptos::prelude::*;

const SIZE: f64 = 260.0;
const RADIUS: f64 = 90.0;
const RINGS: usize = 4;

#[component]
pub fn RadarChart(
    data: ChartData,
    /// Value at the outer ring
    max: f64,
) -> impl IntoView {
    let center = (SIZE / 2.0, SIZE / 2.0);
    let axes = data.labels.len();

    let rings = (1..=RINGS)
        .map(|r| {
            let ratio = r as f64 / RINGS as f64;
            let ring: Vec<_> = (0..axes)
                .map(|a| radar_point(center, RADIUS, a, axes, ratio))
                .collect();
            view! { <polygon class="chart-grid" points=points_attr(&ring) fill="none" /> }
        })
        .collect_view();

    let spokes = data
        .labels
        .iter()
        .enumerate()
        .map(|(a, label)| {
            let (x, y) = radar_point(center, RADIUS, a, axes, 1.0);
            let (lx, ly) = radar_point(center, RADIUS + 18.0, a, axes, 1.0);
            view! {
                <line class="chart-grid" x1=center.0 y1=center.1 x2=x y2=y />
                <text class="chart-axis-label" x=lx y=ly + 4.0 text-anchor="middle">{*label}</text>
            }
        })
        .collect_view();

    let shapes = data
        .series
        .iter()
        .map(|s| {
            let polygon = radar_polygon(&s.values, max, center, RADIUS);
            view! {
                <polygon
                    class="chart-radar"
                    points=points_attr(&polygon)
                    fill=s.color
                    fill-opacity="0.2"
                    stroke=s.color
                    stroke-width="2"
                />
            }
        })
        .collect_view();

    let legend: Vec<_> = data.series.iter().map(|s| (s.name, s.color)).collect();

    view! {
        <div class="chart chart--radar">
            <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) class="chart-svg">
                {rings}
                {spokes}
                {shapes}
            </svg>
            <Legend items=legend />
        </div>
    }
}
