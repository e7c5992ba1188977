//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Application title
//! - Breadcrumb of the active section/page

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let title = use_context::<AppConfig>()
        .map(|c| c.app.title)
        .unwrap_or_default();

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    let is_sidebar_visible = move || !ctx.sidebar_collapsed();

    let breadcrumb = move || {
        let route = ctx.route();
        format!("{} / {}", route.section().descriptor().title, route.page_title())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "收起导航" } else { "展开导航" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__breadcrumb">{breadcrumb}</div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="通知">
                    {icon("bell")}
                </button>
                <div class="top-header__user">
                    {icon("user")}
                    <span>"管理员"</span>
                </div>
            </div>
        </div>
    }
}
