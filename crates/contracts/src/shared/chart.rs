//! Geometry for the inline SVG charts.
//!
//! Everything here is plain arithmetic over `f64` so it can be tested
//! without a browser; the frontend only turns the results into SVG
//! attributes.

use std::f64::consts::PI;

/// Default series colors
pub const PALETTE: [&str; 6] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Labeled categories with one or more value series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn new(labels: &[&'static str]) -> Self {
        Self {
            labels: labels.to_vec(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, name: &'static str, color: &'static str, values: &[f64]) -> Self {
        self.series.push(Series {
            name,
            color,
            values: values.to_vec(),
        });
        self
    }

    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Chart canvas with padding around the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Plot {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 40.0,
            right: 16.0,
            top: 16.0,
            bottom: 28.0,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }

    /// y coordinate of `value` on an axis from 0 to `y_max`
    pub fn y_for(&self, value: f64, y_max: f64) -> f64 {
        let ratio = if y_max > 0.0 {
            (value / y_max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.baseline() - ratio * self.inner_height()
    }

    /// Center of category `index` out of `count` equal bands
    pub fn band_center(&self, count: usize, index: usize) -> f64 {
        let band = self.inner_width() / count.max(1) as f64;
        self.left + band * (index as f64 + 0.5)
    }

    /// x of point `index` out of `count`, spread edge to edge
    pub fn point_x(&self, count: usize, index: usize) -> f64 {
        if count <= 1 {
            return self.left + self.inner_width() / 2.0;
        }
        self.left + self.inner_width() * index as f64 / (count - 1) as f64
    }
}

/// Rounds an axis maximum up to 1, 2 or 5 times a power of ten
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let fraction = max / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// `count + 1` evenly spaced values from 0 to `y_max`
pub fn ticks(y_max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|i| y_max * i as f64 / count as f64)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub series: usize,
    pub category: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
}

/// Grouped bars: each category band holds one bar per series
pub fn bar_layout(data: &ChartData, plot: &Plot, y_max: f64) -> Vec<Bar> {
    let categories = data.labels.len();
    let series_count = data.series.len();
    if categories == 0 || series_count == 0 {
        return Vec::new();
    }

    let band = plot.inner_width() / categories as f64;
    let group = band * 0.7;
    let bar_width = group / series_count as f64;

    let mut bars = Vec::with_capacity(categories * series_count);
    for (s, series) in data.series.iter().enumerate() {
        for (c, &value) in series.values.iter().enumerate().take(categories) {
            let y = plot.y_for(value, y_max);
            bars.push(Bar {
                series: s,
                category: c,
                x: plot.left + band * c as f64 + (band - group) / 2.0 + bar_width * s as f64,
                y,
                width: bar_width,
                height: plot.baseline() - y,
                value,
            });
        }
    }
    bars
}

pub fn line_points(values: &[f64], plot: &Plot, y_max: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (plot.point_x(values.len(), i), plot.y_for(v, y_max)))
        .collect()
}

/// SVG path `M x,y L x,y ...`
pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{:.1},{:.1}", cmd, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed area under the line down to `baseline`
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L{:.1},{:.1} L{:.1},{:.1} Z",
        line_path(points),
        last.0,
        baseline,
        first.0,
        baseline
    )
}

/// `points` attribute for `<polygon>`/`<polyline>`
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Point on radar axis `axis` of `axes`, first axis pointing up
pub fn radar_point(
    center: (f64, f64),
    radius: f64,
    axis: usize,
    axes: usize,
    ratio: f64,
) -> (f64, f64) {
    let angle = -PI / 2.0 + 2.0 * PI * axis as f64 / axes.max(1) as f64;
    let r = radius * ratio.clamp(0.0, 1.0);
    (center.0 + r * angle.cos(), center.1 + r * angle.sin())
}

pub fn radar_polygon(values: &[f64], max: f64, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let ratio = if max > 0.0 { v / max } else { 0.0 };
            radar_point(center, radius, i, values.len(), ratio)
        })
        .collect()
}

/// One ring segment drawn with `stroke-dasharray`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub index: usize,
    pub fraction: f64,
    /// Degrees clockwise from 12 o'clock
    pub start_angle: f64,
    pub sweep: f64,
    pub dash: f64,
    pub gap: f64,
    pub offset: f64,
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Splits a ring of `radius` proportionally to `values`.
/// Zero or negative totals yield no segments.
pub fn doughnut_segments(values: &[f64], radius: f64) -> Vec<DonutSegment> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let circ = circumference(radius);
    let mut acc = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &v)| {
            let fraction = v.max(0.0) / total;
            let segment = DonutSegment {
                index,
                fraction,
                start_angle: acc * 360.0,
                sweep: fraction * 360.0,
                dash: fraction * circ,
                gap: circ - fraction * circ,
                offset: -acc * circ,
            };
            acc += fraction;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn nice_max_rounds_up() {
        assert_eq!(nice_max(72.0), 100.0);
        assert_eq!(nice_max(12.0), 20.0);
        assert_eq!(nice_max(200.0), 200.0);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(4.2), 5.0);
    }

    #[test]
    fn ticks_are_even() {
        assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn bars_stand_on_baseline() {
        let plot = Plot::new(400.0, 200.0);
        let data = ChartData::new(&["a", "b"])
            .with_series("plan", palette_color(0), &[50.0, 100.0])
            .with_series("actual", palette_color(1), &[25.0, 0.0]);
        let bars = bar_layout(&data, &plot, 100.0);

        assert_eq!(bars.len(), 4);
        for bar in &bars {
            assert!(close(bar.y + bar.height, plot.baseline()));
            assert!(bar.x >= plot.left);
            assert!(bar.x + bar.width <= plot.width - plot.right + 1e-9);
        }
        let full = bars.iter().find(|b| b.value == 100.0).unwrap();
        assert!(close(full.height, plot.inner_height()));
        let zero = bars.iter().find(|b| b.value == 0.0).unwrap();
        assert!(close(zero.height, 0.0));
    }

    #[test]
    fn grouped_bars_do_not_overlap() {
        let plot = Plot::new(300.0, 150.0);
        let data = ChartData::new(&["x"])
            .with_series("a", "#000", &[1.0])
            .with_series("b", "#111", &[2.0]);
        let bars = bar_layout(&data, &plot, 2.0);
        assert!(bars[0].x + bars[0].width <= bars[1].x + 1e-9);
    }

    #[test]
    fn line_spans_plot_width() {
        let plot = Plot::new(600.0, 200.0);
        let points = line_points(&[42.0, 38.0, 72.0], &plot, 100.0);
        assert!(close(points[0].0, plot.left));
        assert!(close(points[2].0, plot.width - plot.right));
        assert!(points[2].1 < points[0].1);
    }

    #[test]
    fn line_and_area_paths() {
        let pts = [(0.0, 10.0), (5.0, 2.5)];
        assert_eq!(line_path(&pts), "M0.0,10.0 L5.0,2.5");
        assert_eq!(area_path(&pts, 20.0), "M0.0,10.0 L5.0,2.5 L5.0,20.0 L0.0,20.0 Z");
        assert_eq!(area_path(&[], 20.0), "");
    }

    #[test]
    fn radar_first_axis_points_up() {
        let polygon = radar_polygon(&[100.0, 50.0, 0.0, 0.0], 100.0, (50.0, 50.0), 40.0);
        assert!(close(polygon[0].0, 50.0));
        assert!(close(polygon[0].1, 10.0));
        assert!(close(polygon[1].0, 70.0));
        assert!(close(polygon[1].1, 50.0));
        assert!(close(polygon[2].0, 50.0));
    }

    #[test]
    fn doughnut_sweeps_sum_to_full_circle() {
        let segments = doughnut_segments(&[65.0, 20.0, 10.0, 5.0], 40.0);
        let sweep: f64 = segments.iter().map(|s| s.sweep).sum();
        let dash: f64 = segments.iter().map(|s| s.dash).sum();
        assert!(close(sweep, 360.0));
        assert!(close(dash, circumference(40.0)));
        assert!(close(segments[1].start_angle, 65.0 * 3.6));
        assert!(close(segments[1].offset, -0.65 * circumference(40.0)));
    }

    #[test]
    fn empty_doughnut_has_no_segments() {
        assert!(doughnut_segments(&[0.0, 0.0], 40.0).is_empty());
        assert!(doughnut_segments(&[], 40.0).is_empty());
    }
}
