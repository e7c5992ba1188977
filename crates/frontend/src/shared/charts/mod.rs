//! Inline SVG charts over `contracts::shared::chart` geometry

mod axis;
pub mod bar_chart;
pub mod doughnut_chart;
pub mod legend;
pub mod line_chart;
pub mod radar_chart;

pub use bar_chart::BarChart;
pub use doughnut_chart::DoughnutChart;
pub use legend::Legend;
pub use line_chart::LineChart;
pub use radar_chart::RadarChart;
