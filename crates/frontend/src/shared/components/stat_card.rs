use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual status of a summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            {icon_name.map(|name| view! {
                <div class="stat-card__icon">{icon(&name)}</div>
            })}
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
