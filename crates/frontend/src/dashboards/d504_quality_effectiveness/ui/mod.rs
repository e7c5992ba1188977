mod feedback_handling;
mod goal_achievement;
mod indicator_assessment;

use contracts::navigation::QualityEffectivenessView;
use leptos::prelude::*;

pub use feedback_handling::FeedbackHandling;
pub use goal_achievement::GoalAchievement;
pub use indicator_assessment::IndicatorAssessment;

/// 质量成效监管
#[component]
pub fn QualityEffectivenessScreen(page: QualityEffectivenessView) -> impl IntoView {
    match page {
        QualityEffectivenessView::GoalAchievement => view! { <GoalAchievement /> }.into_any(),
        QualityEffectivenessView::IndicatorAssessment => view! { <IndicatorAssessment /> }.into_any(),
        QualityEffectivenessView::FeedbackHandling => view! { <FeedbackHandling /> }.into_any(),
    }
}
