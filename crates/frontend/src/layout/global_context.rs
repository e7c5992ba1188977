use contracts::navigation::{NavigationState, Route, SectionId};
use leptos::prelude::*;

/// Reactive holder of the shell's navigation state.
///
/// One instance is created in `App` and provided through context; every
/// mutation goes through the pure [`NavigationState`] methods.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav: RwSignal<NavigationState>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavigationState::new()),
        }
    }

    pub fn route(&self) -> Route {
        self.nav.with(|s| s.route())
    }

    pub fn active_section(&self) -> SectionId {
        self.nav.with(|s| s.active_section())
    }

    pub fn active_page(&self) -> &'static str {
        self.nav.with(|s| s.active_page())
    }

    pub fn is_active(&self, section: SectionId, page_id: &str) -> bool {
        self.nav
            .with(|s| s.active_section() == section && s.active_page() == page_id)
    }

    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.nav.with(|s| s.is_expanded(section))
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.nav.with(|s| s.sidebar_collapsed())
    }

    pub fn navigate(&self, section_id: &str, page_id: &str) {
        leptos::logging::log!("navigate: {}/{}", section_id, page_id);
        self.nav.update(|s| s.navigate(section_id, page_id));
    }

    pub fn toggle_section_expanded(&self, section_id: &str) {
        self.nav.update(|s| s.toggle_section_expanded(section_id));
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.nav.update(|s| s.set_sidebar_collapsed(collapsed));
    }

    pub fn toggle_sidebar(&self) {
        self.nav.update(|s| s.toggle_sidebar());
    }

    /// JSON snapshot for `data-nav-state` debugging attributes
    pub fn snapshot_json(&self) -> String {
        self.nav.with(|s| {
            serde_json::to_string(s).unwrap_or_else(|err| {
                log::warn!("nav snapshot failed: {}", err);
                String::new()
            })
        })
    }
}
