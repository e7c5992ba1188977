use contracts::shared::format::format_percent;
use leptos::prelude::*;

/// Labeled horizontal progress bar
#[component]
pub fn ProgressRow(
    #[prop(into)]
    label: String,
    /// 0..=100
    percent: f64,
    /// Text on the right, defaults to the percent
    #[prop(optional, into)]
    caption: Option<String>,
    #[prop(optional)]
    color: Option<&'static str>,
) -> impl IntoView {
    let width = format!("width: {}%;", percent.clamp(0.0, 100.0));
    let style = match color {
        Some(c) => format!("{} background: {};", width, c),
        None => width,
    };
    let caption = caption.unwrap_or_else(|| format_percent(percent));

    view! {
        <div class="progress-row">
            <div class="progress-row__head">
                <span class="progress-row__label">{label}</span>
                <span class="progress-row__caption">{caption}</span>
            </div>
            <div class="progress-row__track">
                <div class="progress-row__bar" style=style></div>
            </div>
        </div>
    }
}
