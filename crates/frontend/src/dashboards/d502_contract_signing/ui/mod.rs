mod compliance_review;
mod risk_assessment;
mod signing_process;

use contracts::navigation::ContractSigningView;
use leptos::prelude::*;

pub use compliance_review::ComplianceReview;
pub use risk_assessment::RiskAssessment;
pub use signing_process::SigningProcess;

/// 合同签订监管
#[component]
pub fn ContractSigningScreen(page: ContractSigningView) -> impl IntoView {
    match page {
        ContractSigningView::ComplianceReview => view! { <ComplianceReview /> }.into_any(),
        ContractSigningView::RiskAssessment => view! { <RiskAssessment /> }.into_any(),
        ContractSigningView::SigningProcess => view! { <SigningProcess /> }.into_any(),
    }
}
