use super::registry::render_route;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Content area: renders the active route, re-mounting on navigation
#[component]
pub fn SectionPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let route = Memo::new(move |_| ctx.route());

    view! {
        <div
            class="section-page"
            data-section=move || route.get().section().as_str()
            data-page=move || route.get().page_id()
        >
            {move || {
                let route = route.get();
                log::debug!("render {}/{}", route.section(), route.page_id());
                render_route(route)
            }}
        </div>
    }
}
