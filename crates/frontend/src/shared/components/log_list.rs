use contracts::dashboards::common::LogEntry;
use leptos::prelude::*;

/// Opinions, comments and operation logs
#[component]
pub fn LogList(entries: Vec<LogEntry>) -> impl IntoView {
    view! {
        <div class="log-list">
            {entries
                .into_iter()
                .map(|e| view! {
                    <div class="log-list__item">
                        <div class="log-list__meta">
                            <span class="log-list__author">{e.author}</span>
                            <span class="log-list__time">{e.time}</span>
                        </div>
                        <div class="log-list__content">{e.content}</div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
