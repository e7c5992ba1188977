mod fund_usage;
mod progress_compliance;
mod quality_compliance;

use contracts::navigation::PerformanceMonitoringView;
use leptos::prelude::*;

pub use fund_usage::FundUsage;
pub use progress_compliance::ProgressCompliance;
pub use quality_compliance::QualityCompliance;

/// 履约过程监管
#[component]
pub fn PerformanceMonitoringScreen(page: PerformanceMonitoringView) -> impl IntoView {
    match page {
        PerformanceMonitoringView::ProgressCompliance => view! { <ProgressCompliance /> }.into_any(),
        PerformanceMonitoringView::QualityCompliance => view! { <QualityCompliance /> }.into_any(),
        PerformanceMonitoringView::FundUsage => view! { <FundUsage /> }.into_any(),
    }
}
