use super::registry::SectionId;
use super::route::Route;
use serde::Serialize;
use std::collections::BTreeSet;

/// Navigation state of the dashboard shell.
///
/// The active section and page are stored together as a [`Route`], so the
/// page can never belong to a different section than the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    route: Route,
    sidebar_collapsed: bool,
    expanded_sections: BTreeSet<SectionId>,
}

impl Default for NavigationState {
    fn default() -> Self {
        let route = Route::default();
        Self {
            route,
            sidebar_collapsed: false,
            expanded_sections: BTreeSet::from([route.section()]),
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn active_section(&self) -> SectionId {
        self.route.section()
    }

    pub fn active_page(&self) -> &'static str {
        self.route.page_id()
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.expanded_sections.contains(&section)
    }

    pub fn expanded_sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.expanded_sections.iter().copied()
    }

    /// Activate a page by string ids. Unknown ids fall back (see
    /// [`Route::resolve`]) and never leave the state inconsistent.
    pub fn navigate(&mut self, section_id: &str, page_id: &str) {
        self.navigate_to(Route::resolve(section_id, page_id));
    }

    pub fn navigate_to(&mut self, route: Route) {
        log::debug!("navigate: {}/{}", route.section(), route.page_id());
        self.route = route;
    }

    /// Flip a section's expanded flag. Expanding also opens the section's
    /// first page; collapsing leaves the active page alone.
    pub fn toggle_section_expanded(&mut self, section_id: &str) {
        let section = match section_id.parse::<SectionId>() {
            Ok(section) => section,
            Err(err) => {
                log::warn!("toggle ignored: {}", err);
                return;
            }
        };

        if self.expanded_sections.remove(&section) {
            return;
        }
        self.expanded_sections.insert(section);
        self.navigate_to(Route::first_of(section));
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::registry::sections;

    fn expanded(state: &NavigationState) -> Vec<&'static str> {
        state.expanded_sections().map(|s| s.as_str()).collect()
    }

    #[test]
    fn initial_state() {
        let state = NavigationState::new();
        assert_eq!(state.active_section(), SectionId::ProjectApproval);
        assert_eq!(state.active_page(), "audit-monitoring");
        assert!(!state.sidebar_collapsed());
        assert_eq!(expanded(&state), vec!["project-approval"]);
    }

    #[test]
    fn navigate_sets_both_ids() {
        let mut state = NavigationState::new();
        state.navigate("fund-supervision", "fund-security");
        assert_eq!(state.active_section(), SectionId::FundSupervision);
        assert_eq!(state.active_page(), "fund-security");
    }

    #[test]
    fn navigate_does_not_touch_expansion_or_collapse() {
        let mut state = NavigationState::new();
        state.set_sidebar_collapsed(true);
        state.navigate("contract-signing", "risk-assessment");
        assert!(state.sidebar_collapsed());
        assert_eq!(expanded(&state), vec!["project-approval"]);
    }

    #[test]
    fn navigate_with_unknown_ids_stays_consistent() {
        let mut state = NavigationState::new();
        state.navigate("contract-signing", "signing-process");

        state.navigate("no-such-section", "signing-process");
        assert_eq!(state.active_section(), SectionId::ProjectApproval);
        assert_eq!(state.active_page(), "audit-monitoring");

        state.navigate("quality-effectiveness", "no-such-page");
        assert_eq!(state.active_section(), SectionId::QualityEffectiveness);
        assert_eq!(state.active_page(), "goal-achievement");
    }

    #[test]
    fn expanding_a_section_opens_its_first_page() {
        let mut state = NavigationState::new();
        state.toggle_section_expanded("contract-signing");

        assert_eq!(state.active_section(), SectionId::ContractSigning);
        assert_eq!(state.active_page(), "compliance-review");
        assert_eq!(expanded(&state), vec!["project-approval", "contract-signing"]);
    }

    #[test]
    fn collapsing_a_section_keeps_active_page() {
        let mut state = NavigationState::new();
        state.toggle_section_expanded("project-approval");

        assert!(!state.is_expanded(SectionId::ProjectApproval));
        assert_eq!(state.active_section(), SectionId::ProjectApproval);
        assert_eq!(state.active_page(), "audit-monitoring");
    }

    #[test]
    fn collapsing_inactive_section_keeps_active_page() {
        let mut state = NavigationState::new();
        state.toggle_section_expanded("fund-supervision");
        state.navigate("project-approval", "violation-warning");
        state.toggle_section_expanded("fund-supervision");

        assert!(!state.is_expanded(SectionId::FundSupervision));
        assert_eq!(state.active_page(), "violation-warning");
    }

    #[test]
    fn double_toggle_restores_membership() {
        for s in sections() {
            let mut state = NavigationState::new();
            let before = state.is_expanded(s.id);
            state.toggle_section_expanded(s.id.as_str());
            state.toggle_section_expanded(s.id.as_str());
            assert_eq!(state.is_expanded(s.id), before, "section {}", s.id);
        }
    }

    #[test]
    fn unknown_toggle_is_a_no_op() {
        let mut state = NavigationState::new();
        let before = state.clone();
        state.toggle_section_expanded("reports");
        assert_eq!(state, before);
    }

    #[test]
    fn collapsed_flag_is_independent() {
        let mut state = NavigationState::new();
        state.set_sidebar_collapsed(true);
        assert!(state.sidebar_collapsed());
        state.toggle_section_expanded("performance-monitoring");
        assert!(state.sidebar_collapsed());
        assert_eq!(state.active_page(), "progress-compliance");
        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed());
    }

    #[test]
    fn sidebar_collapse_keeps_active_route() {
        let mut state = NavigationState::new();
        state.navigate("quality-effectiveness", "indicator-assessment");

        state.set_sidebar_collapsed(true);
        assert_eq!(state.active_section(), SectionId::QualityEffectiveness);
        assert_eq!(state.active_page(), "indicator-assessment");

        state.toggle_sidebar();
        assert!(!state.sidebar_collapsed());
        assert_eq!(state.active_section(), SectionId::QualityEffectiveness);
        assert_eq!(state.active_page(), "indicator-assessment");

        state.toggle_sidebar();
        assert!(state.sidebar_collapsed());
        assert_eq!(state.active_page(), "indicator-assessment");
    }

    #[test]
    fn expanding_fund_supervision_opens_budget_execution() {
        let mut state = NavigationState::new();
        assert!(!state.is_expanded(SectionId::FundSupervision));

        state.toggle_section_expanded("fund-supervision");

        assert!(state.is_expanded(SectionId::FundSupervision));
        assert_eq!(state.active_section(), SectionId::FundSupervision);
        assert_eq!(state.active_page(), "budget-execution");
    }

    #[test]
    fn clicking_risk_assessment_inside_contract_signing() {
        let mut state = NavigationState::new();
        state.toggle_section_expanded("contract-signing");
        assert_eq!(state.active_page(), "compliance-review");

        state.navigate("contract-signing", "risk-assessment");

        assert_eq!(state.active_section(), SectionId::ContractSigning);
        assert_eq!(state.active_page(), "risk-assessment");
        assert!(state.is_expanded(SectionId::ContractSigning));
        assert!(!state.sidebar_collapsed());
    }

    #[test]
    fn active_page_always_belongs_to_active_section() {
        let mut state = NavigationState::new();
        let moves = [
            ("contract-signing", "fund-usage"),
            ("fund-supervision", "expenditure-compliance"),
            ("bogus", "bogus"),
            ("quality-effectiveness", "feedback-handling"),
        ];
        for (section, page) in moves {
            state.navigate(section, page);
            let descriptor = state.active_section().descriptor();
            assert!(descriptor.page(state.active_page()).is_some());
        }
    }
}
