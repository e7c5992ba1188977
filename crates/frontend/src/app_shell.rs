//! Application Shell - root layout of the app
//!
//! `AppShell` = Shell + Sidebar + SectionPage

use crate::layout::left::sidebar::Sidebar;
use crate::layout::sections::SectionPage;
use crate::layout::Shell;
use crate::shared::notice::NoticeToast;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <SectionPage /> }.into_any()
        />
        <NoticeToast />
    }
}
