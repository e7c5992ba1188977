use crate::shared::icons::icon;
use contracts::shared::pagination::Paginator;
use leptos::prelude::*;

/// Client-side pagination state for one table.
///
/// `page` is reset to 0 whenever the caller's filters change
/// (see [`TablePager::reset`]).
#[derive(Clone, Copy)]
pub struct TablePager {
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
}

impl TablePager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: RwSignal::new(0),
            page_size: RwSignal::new(page_size),
        }
    }

    pub fn paginator(&self, total: usize) -> Paginator {
        Paginator::new(self.page.get(), self.page_size.get(), total)
    }

    pub fn reset(&self) {
        self.page.set(0);
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size);
        self.page.set(0);
    }
}

/// Pager with the configured default page size
pub fn use_table_pager() -> TablePager {
    let page_size = use_context::<contracts::shared::config::AppConfig>()
        .map(|c| c.table.page_size)
        .unwrap_or(5);
    TablePager::new(page_size)
}

/// PaginationControls component - first/prev/next/last and page size
#[component]
pub fn PaginationControls(
    /// Current paginator (clamped page, total)
    #[prop(into)]
    paginator: Signal<Paginator>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [5, 10, 20])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![5, 10, 20]);

    view! {
        <div class="pagination-controls">
            <span class="pagination-summary">{move || paginator.get().summary()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(paginator.get().first().page())
                disabled=move || !paginator.get().has_prev()
                title="首页"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(paginator.get().prev().page())
                disabled=move || !paginator.get().has_prev()
                title="上一页"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = paginator.get();
                    format!("{} / {}", p.page() + 1, p.page_count())
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(paginator.get().next().page())
                disabled=move || !paginator.get().has_next()
                title="下一页"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(paginator.get().last().page())
                disabled=move || !paginator.get().has_next()
                title="末页"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse() {
                        Ok(size) => on_page_size_change.run(size),
                        Err(err) => log::warn!("bad page size: {}", err),
                    }
                }
                prop:value=move || paginator.get().page_size().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || paginator.get().page_size() == size>
                            {format!("{} 条/页", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Pagination bar wired to a [`TablePager`]
#[component]
pub fn TablePagination(
    pager: TablePager,
    #[prop(into)]
    total: Signal<usize>,
) -> impl IntoView {
    let options = use_context::<contracts::shared::config::AppConfig>()
        .map(|c| c.table.page_size_options)
        .filter(|o| !o.is_empty());

    view! {
        <PaginationControls
            paginator=Signal::derive(move || pager.paginator(total.get()))
            on_page_change=Callback::new(move |page| pager.page.set(page))
            on_page_size_change=Callback::new(move |size| pager.set_page_size(size))
            page_size_options=options.unwrap_or_else(|| vec![5, 10, 20])
        />
    }
}
