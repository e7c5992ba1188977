use super::error::NavigationError;
use super::registry::SectionId;
use serde::{Deserialize, Serialize};

/// Inner view of one section. `ALL` follows the registry page order,
/// so `ALL[0]` is the section's first page.
pub trait SectionView: Copy + Eq + Sized + 'static {
    const SECTION: SectionId;
    const ALL: &'static [Self];

    fn id(&self) -> &'static str;

    /// Title from the section registry
    fn title(&self) -> &'static str {
        Self::SECTION
            .descriptor()
            .page(self.id())
            .map(|p| p.title)
            .unwrap_or_default()
    }

    fn parse(page_id: &str) -> Result<Self, NavigationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.id() == page_id)
            .ok_or_else(|| NavigationError::UnknownPage {
                section: Self::SECTION,
                page: page_id.to_string(),
            })
    }

    fn first() -> Self {
        Self::ALL[0]
    }

    /// Like [`SectionView::parse`], falling back to the first view
    fn resolve(page_id: &str) -> Self {
        Self::parse(page_id).unwrap_or_else(|err| {
            log::warn!("{}; falling back to {}", err, Self::first().id());
            Self::first()
        })
    }
}

macro_rules! section_view {
    ($(#[$meta:meta])* $name:ident for $section:expr => { $($variant:ident = $id:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl SectionView for $name {
            const SECTION: SectionId = $section;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn id(&self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <$name as SectionView>::first()
            }
        }
    };
}

section_view! {
    /// 立项审核监管
    ProjectApprovalView for SectionId::ProjectApproval => {
        AuditMonitoring = "audit-monitoring",
        QualityAssessment = "quality-assessment",
        ViolationWarning = "violation-warning",
    }
}

section_view! {
    /// 合同签订监管
    ContractSigningView for SectionId::ContractSigning => {
        ComplianceReview = "compliance-review",
        RiskAssessment = "risk-assessment",
        SigningProcess = "signing-process",
    }
}

section_view! {
    /// 履约过程监管
    PerformanceMonitoringView for SectionId::PerformanceMonitoring => {
        ProgressCompliance = "progress-compliance",
        QualityCompliance = "quality-compliance",
        FundUsage = "fund-usage",
    }
}

section_view! {
    /// 质量成效监管
    QualityEffectivenessView for SectionId::QualityEffectiveness => {
        GoalAchievement = "goal-achievement",
        IndicatorAssessment = "indicator-assessment",
        FeedbackHandling = "feedback-handling",
    }
}

section_view! {
    /// 经费收支监管
    FundSupervisionView for SectionId::FundSupervision => {
        BudgetExecution = "budget-execution",
        ExpenditureCompliance = "expenditure-compliance",
        FundSecurity = "fund-security",
    }
}

/// Active (section, page) pair. The page always belongs to the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "section", content = "page", rename_all = "kebab-case")]
pub enum Route {
    ProjectApproval(ProjectApprovalView),
    ContractSigning(ContractSigningView),
    PerformanceMonitoring(PerformanceMonitoringView),
    QualityEffectiveness(QualityEffectivenessView),
    FundSupervision(FundSupervisionView),
}

impl Default for Route {
    fn default() -> Self {
        Route::ProjectApproval(ProjectApprovalView::default())
    }
}

impl Route {
    pub fn section(&self) -> SectionId {
        match self {
            Route::ProjectApproval(_) => SectionId::ProjectApproval,
            Route::ContractSigning(_) => SectionId::ContractSigning,
            Route::PerformanceMonitoring(_) => SectionId::PerformanceMonitoring,
            Route::QualityEffectiveness(_) => SectionId::QualityEffectiveness,
            Route::FundSupervision(_) => SectionId::FundSupervision,
        }
    }

    pub fn page_id(&self) -> &'static str {
        match self {
            Route::ProjectApproval(v) => v.id(),
            Route::ContractSigning(v) => v.id(),
            Route::PerformanceMonitoring(v) => v.id(),
            Route::QualityEffectiveness(v) => v.id(),
            Route::FundSupervision(v) => v.id(),
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            Route::ProjectApproval(v) => v.title(),
            Route::ContractSigning(v) => v.title(),
            Route::PerformanceMonitoring(v) => v.title(),
            Route::QualityEffectiveness(v) => v.title(),
            Route::FundSupervision(v) => v.title(),
        }
    }

    /// Section's first page
    pub fn first_of(section: SectionId) -> Route {
        match section {
            SectionId::ProjectApproval => Route::ProjectApproval(ProjectApprovalView::first()),
            SectionId::ContractSigning => Route::ContractSigning(ContractSigningView::first()),
            SectionId::PerformanceMonitoring => {
                Route::PerformanceMonitoring(PerformanceMonitoringView::first())
            }
            SectionId::QualityEffectiveness => {
                Route::QualityEffectiveness(QualityEffectivenessView::first())
            }
            SectionId::FundSupervision => Route::FundSupervision(FundSupervisionView::first()),
        }
    }

    fn in_section(section: SectionId, page_id: &str) -> Result<Route, NavigationError> {
        match section {
            SectionId::ProjectApproval => {
                ProjectApprovalView::parse(page_id).map(Route::ProjectApproval)
            }
            SectionId::ContractSigning => {
                ContractSigningView::parse(page_id).map(Route::ContractSigning)
            }
            SectionId::PerformanceMonitoring => {
                PerformanceMonitoringView::parse(page_id).map(Route::PerformanceMonitoring)
            }
            SectionId::QualityEffectiveness => {
                QualityEffectivenessView::parse(page_id).map(Route::QualityEffectiveness)
            }
            SectionId::FundSupervision => {
                FundSupervisionView::parse(page_id).map(Route::FundSupervision)
            }
        }
    }

    /// Strict lookup without fallback
    pub fn try_from_ids(section_id: &str, page_id: &str) -> Result<Route, NavigationError> {
        let section = section_id.parse::<SectionId>()?;
        Route::in_section(section, page_id)
    }

    /// Dispatch with fallback: an unknown section resolves to the default
    /// route, an unknown page to its section's first page. Every fallback
    /// is logged as a warning.
    pub fn resolve(section_id: &str, page_id: &str) -> Route {
        let section = match section_id.parse::<SectionId>() {
            Ok(section) => section,
            Err(err) => {
                let fallback = Route::default();
                log::warn!(
                    "{}; falling back to {}/{}",
                    err,
                    fallback.section(),
                    fallback.page_id()
                );
                return fallback;
            }
        };

        match Route::in_section(section, page_id) {
            Ok(route) => route,
            Err(err) => {
                let fallback = Route::first_of(section);
                log::warn!("{}; falling back to {}", err, fallback.page_id());
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::registry::sections;

    #[test]
    fn view_resolve_defaults_to_first_view() {
        assert_eq!(
            FundSupervisionView::resolve("fund-security"),
            FundSupervisionView::FundSecurity
        );
        assert_eq!(
            FundSupervisionView::resolve("nope"),
            FundSupervisionView::BudgetExecution
        );
    }

    #[test]
    fn every_registry_pair_resolves_strictly() {
        for s in sections() {
            for p in s.pages {
                let route = Route::try_from_ids(s.id.as_str(), p.id)
                    .unwrap_or_else(|e| panic!("{}", e));
                assert_eq!(route.section(), s.id);
                assert_eq!(route.page_id(), p.id);
                assert_eq!(route.page_title(), p.title);
            }
        }
    }

    #[test]
    fn view_enums_follow_registry_order() {
        let pages = SectionId::QualityEffectiveness.descriptor().pages;
        let ids: Vec<&str> = QualityEffectivenessView::ALL.iter().map(|v| v.id()).collect();
        let expected: Vec<&str> = pages.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn view_titles_come_from_registry() {
        assert_eq!(FundSupervisionView::ExpenditureCompliance.title(), "收支合规性监管");
        assert_eq!(QualityEffectivenessView::GoalAchievement.title(), "质量目标达成监管");
        for v in FundSupervisionView::ALL {
            assert!(!v.title().is_empty(), "{} has no title", v.id());
        }
    }

    #[test]
    fn first_of_matches_registry_first_page() {
        for id in SectionId::ALL {
            assert_eq!(Route::first_of(id).page_id(), id.descriptor().first_page().id);
        }
    }

    #[test]
    fn unknown_section_falls_back_to_default() {
        let route = Route::resolve("unknown", "whatever");
        assert_eq!(route, Route::ProjectApproval(ProjectApprovalView::AuditMonitoring));
    }

    #[test]
    fn unknown_page_falls_back_to_first_view() {
        let route = Route::resolve("fund-supervision", "nope");
        assert_eq!(route, Route::FundSupervision(FundSupervisionView::BudgetExecution));
    }

    #[test]
    fn page_from_another_section_is_rejected() {
        assert_eq!(
            Route::try_from_ids("contract-signing", "fund-usage"),
            Err(NavigationError::UnknownPage {
                section: SectionId::ContractSigning,
                page: "fund-usage".to_string(),
            })
        );
        assert_eq!(
            Route::resolve("contract-signing", "fund-usage"),
            Route::ContractSigning(ContractSigningView::ComplianceReview)
        );
    }

    #[test]
    fn route_serializes_with_section_tag() {
        let route = Route::PerformanceMonitoring(PerformanceMonitoringView::FundUsage);
        let json = serde_json::to_value(route).unwrap();
        assert_eq!(json["section"], "performance-monitoring");
        assert_eq!(json["page"], "fund-usage");
    }

    #[test]
    fn serialized_route_ids_parse_back() {
        for s in sections() {
            for p in s.pages {
                let route = Route::try_from_ids(s.id.as_str(), p.id).unwrap();
                let json = serde_json::to_value(route).unwrap();
                let section = json["section"].as_str().unwrap();
                let page = json["page"].as_str().unwrap();
                assert_eq!(Route::try_from_ids(section, page), Ok(route));

                let back: Route = serde_json::from_value(json).unwrap();
                assert_eq!(back, route);
            }
        }
    }
}
