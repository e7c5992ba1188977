//! Transient notice for display-only actions.
//!
//! Buttons such as "催办" or "导出报告" have no backend; they go through
//! [`NoticeService::run_action`], which logs the request and shows a short
//! message at the bottom of the screen.

use contracts::shared::actions::noop_action;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const NOTICE_MS: u32 = 2500;

#[derive(Clone, Copy)]
pub struct NoticeService {
    message: RwSignal<Option<String>>,
    /// Bumped on every show so an older timer doesn't hide a newer notice
    seq: StoredValue<u64>,
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.message.get()
    }

    pub fn show(&self, text: String) {
        let current = self.seq.get_value() + 1;
        self.seq.set_value(current);
        self.message.set(Some(text));

        let this = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            if this.seq.get_value() == current {
                this.message.set(None);
            }
        });
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }

    pub fn run_action(&self, action: &str, target: &str) {
        self.show(noop_action(action, target));
    }
}

pub fn use_notice() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not found")
}

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notice = use_notice();

    view! {
        <Show when=move || notice.message().is_some()>
            <div class="notice-toast" role="status" on:click=move |_| notice.dismiss()>
                {move || notice.message().unwrap_or_default()}
            </div>
        </Show>
    }
}
