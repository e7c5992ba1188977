//! Sidebar: one collapsible group per section, sub-pages as children

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::navigation::{sections, SectionDescriptor};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let collapsed = move || ctx.sidebar_collapsed();

    view! {
        <nav class="app-sidebar__content" data-nav-state=move || ctx.snapshot_json()>
            {sections()
                .iter()
                .map(|section| view! { <SidebarGroup section=section collapsed=Signal::derive(collapsed) /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn SidebarGroup(section: &'static SectionDescriptor, collapsed: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let id = section.id;
    let expanded = move || ctx.is_expanded(id);

    view! {
        <div class="app-sidebar__group">
            // Parent item
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.active_section() == id
                title=section.title
                style:padding-left="12px"
                on:click=move |_| ctx.toggle_section_expanded(id.as_str())
            >
                <div class="app-sidebar__item-content">
                    {icon(section.icon)}
                    <Show when=move || !collapsed.get()>
                        <span>{section.title}</span>
                    </Show>
                </div>
                <Show when=move || !collapsed.get()>
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=expanded
                    >
                        {icon("chevron-right")}
                    </div>
                </Show>
            </div>

            // Children
            <Show when=move || expanded() && !collapsed.get()>
                <div class="app-sidebar__children">
                    {section
                        .pages
                        .iter()
                        .map(|page| {
                            let page_id = page.id;
                            view! {
                                <div
                                    class="app-sidebar__item app-sidebar__item--child"
                                    class:app-sidebar__item--active=move || ctx.is_active(id, page_id)
                                    style:padding-left="36px"
                                    on:click=move |_| ctx.navigate(id.as_str(), page_id)
                                >
                                    <div class="app-sidebar__item-content">
                                        <span>{page.title}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
