//! PageFrame — root wrapper for every dashboard page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{section}--{page}"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use contracts::navigation::SectionView;
use leptos::prelude::*;

#[component]
pub fn PageFrame<V: SectionView>(
    /// Registry view the page renders
    page: V,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_dom_id(V::SECTION.as_str(), page.id())
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
