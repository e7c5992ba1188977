use leptos::prelude::*;

#[component]
pub fn Legend(items: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {items
                .into_iter()
                .map(|(label, color)| view! {
                    <span class="chart-legend__item">
                        <span class="chart-legend__swatch" style=format!("background: {};", color)></span>
                        {label}
                    </span>
                })
                .collect_view()}
        </div>
    }
}
