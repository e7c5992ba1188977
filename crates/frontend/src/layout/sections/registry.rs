//! Route → screen dispatch.
//!
//! Each section screen matches its own view enum, so adding a page
//! without a screen is a compile error.

use crate::dashboards::d501_project_approval::ProjectApprovalScreen;
use crate::dashboards::d502_contract_signing::ContractSigningScreen;
use crate::dashboards::d503_performance_monitoring::PerformanceMonitoringScreen;
use crate::dashboards::d504_quality_effectiveness::QualityEffectivenessScreen;
use crate::dashboards::d505_fund_supervision::FundSupervisionScreen;
use contracts::navigation::Route;
use leptos::prelude::*;

pub fn render_route(route: Route) -> AnyView {
    match route {
        Route::ProjectApproval(view) => view! { <ProjectApprovalScreen page=view /> }.into_any(),
        Route::ContractSigning(view) => view! { <ContractSigningScreen page=view /> }.into_any(),
        Route::PerformanceMonitoring(view) => {
            view! { <PerformanceMonitoringScreen page=view /> }.into_any()
        }
        Route::QualityEffectiveness(view) => {
            view! { <QualityEffectivenessScreen page=view /> }.into_any()
        }
        Route::FundSupervision(view) => view! { <FundSupervisionScreen page=view /> }.into_any(),
    }
}
