mod budget_execution;
mod expenditure_compliance;
mod fund_security;

use contracts::navigation::FundSupervisionView;
use leptos::prelude::*;

pub use budget_execution::BudgetExecution;
pub use expenditure_compliance::ExpenditureCompliance;
pub use fund_security::FundSecurity;

/// 经费收支监管
#[component]
pub fn FundSupervisionScreen(page: FundSupervisionView) -> impl IntoView {
    match page {
        FundSupervisionView::BudgetExecution => view! { <BudgetExecution /> }.into_any(),
        FundSupervisionView::ExpenditureCompliance => view! { <ExpenditureCompliance /> }.into_any(),
        FundSupervisionView::FundSecurity => view! { <FundSecurity /> }.into_any(),
    }
}
