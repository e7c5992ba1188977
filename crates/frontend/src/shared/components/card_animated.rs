//! CardAnimated: thaw Card wrapper with an appear animation.
//!
//! The animation lives in `styles.css` (`@keyframes card-appear`).

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds, for staggered cards.
    #[prop(optional)]
    delay_ms: u32,
    /// Card title
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {title.map(|t| view! { <h3 class="card-title">{t}</h3> })}
            {children()}
        </Card>
    }
}
