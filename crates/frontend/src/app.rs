use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::notice::NoticeService;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Navigation state for the whole app
    provide_context(AppGlobalContext::new());

    // Transient messages for no-op action buttons
    provide_context(NoticeService::new());

    provide_context(config);

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}
