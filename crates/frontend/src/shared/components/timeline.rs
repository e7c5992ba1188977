use contracts::dashboards::common::{StepState, TimelineStep};
use leptos::prelude::*;

/// Horizontal workflow timeline
#[component]
pub fn Timeline(steps: Vec<TimelineStep>) -> impl IntoView {
    view! {
        <div class="timeline">
            {steps
                .into_iter()
                .map(|step| {
                    let modifier = match step.state {
                        StepState::Done => "timeline__step--done",
                        StepState::Current => "timeline__step--current",
                        StepState::Pending => "timeline__step--pending",
                    };
                    view! {
                        <div class=format!("timeline__step {}", modifier)>
                            <div class="timeline__dot"></div>
                            <div class="timeline__name">{step.name}</div>
                            <div class="timeline__caption">{step.caption()}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
