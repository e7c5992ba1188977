mod audit_monitoring;
mod quality_assessment;
mod violation_warning;

use contracts::navigation::ProjectApprovalView;
use leptos::prelude::*;

pub use audit_monitoring::AuditMonitoring;
pub use quality_assessment::QualityAssessment;
pub use violation_warning::ViolationWarningPage;

/// 立项审核监管
#[component]
pub fn ProjectApprovalScreen(page: ProjectApprovalView) -> impl IntoView {
    match page {
        ProjectApprovalView::AuditMonitoring => view! { <AuditMonitoring /> }.into_any(),
        ProjectApprovalView::QualityAssessment => view! { <QualityAssessment /> }.into_any(),
        ProjectApprovalView::ViolationWarning => view! { <ViolationWarningPage /> }.into_any(),
    }
}
