use super::error::NavigationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level supervisory domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    ProjectApproval,
    ContractSigning,
    PerformanceMonitoring,
    QualityEffectiveness,
    FundSupervision,
}

impl SectionId {
    /// Sidebar order
    pub const ALL: [SectionId; 5] = [
        SectionId::ProjectApproval,
        SectionId::ContractSigning,
        SectionId::PerformanceMonitoring,
        SectionId::QualityEffectiveness,
        SectionId::FundSupervision,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::ProjectApproval => "project-approval",
            SectionId::ContractSigning => "contract-signing",
            SectionId::PerformanceMonitoring => "performance-monitoring",
            SectionId::QualityEffectiveness => "quality-effectiveness",
            SectionId::FundSupervision => "fund-supervision",
        }
    }

    fn index(&self) -> usize {
        match self {
            SectionId::ProjectApproval => 0,
            SectionId::ContractSigning => 1,
            SectionId::PerformanceMonitoring => 2,
            SectionId::QualityEffectiveness => 3,
            SectionId::FundSupervision => 4,
        }
    }

    pub fn descriptor(&self) -> &'static SectionDescriptor {
        &SECTIONS[self.index()]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| NavigationError::UnknownSection(s.to_string()))
    }
}

/// Sub-page of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub title: &'static str,
    /// Icon key understood by the frontend icon set
    pub icon: &'static str,
    pub pages: &'static [PageDescriptor],
}

impl SectionDescriptor {
    /// Every section has at least one page.
    pub fn first_page(&self) -> &'static PageDescriptor {
        &self.pages[0]
    }

    pub fn page(&self, page_id: &str) -> Option<&'static PageDescriptor> {
        self.pages.iter().find(|p| p.id == page_id)
    }
}

static SECTIONS: [SectionDescriptor; 5] = [
    SectionDescriptor {
        id: SectionId::ProjectApproval,
        title: "立项审核监管",
        icon: "clipboard-check",
        pages: &[
            PageDescriptor { id: "audit-monitoring", title: "审核过程监控" },
            PageDescriptor { id: "quality-assessment", title: "审核质量评估" },
            PageDescriptor { id: "violation-warning", title: "违规行为预警" },
        ],
    },
    SectionDescriptor {
        id: SectionId::ContractSigning,
        title: "合同签订监管",
        icon: "file-contract",
        pages: &[
            PageDescriptor { id: "compliance-review", title: "合同合规性审查" },
            PageDescriptor { id: "risk-assessment", title: "合同风险评估" },
            PageDescriptor { id: "signing-process", title: "合同签订过程监管" },
        ],
    },
    SectionDescriptor {
        id: SectionId::PerformanceMonitoring,
        title: "履约过程监管",
        icon: "bar-chart",
        pages: &[
            PageDescriptor { id: "progress-compliance", title: "进度合规性监管" },
            PageDescriptor { id: "quality-compliance", title: "质量合规性监管" },
            PageDescriptor { id: "fund-usage", title: "资金使用监管" },
        ],
    },
    SectionDescriptor {
        id: SectionId::QualityEffectiveness,
        title: "质量成效监管",
        icon: "award",
        pages: &[
            PageDescriptor { id: "goal-achievement", title: "质量目标达成监管" },
            PageDescriptor { id: "indicator-assessment", title: "成效指标评估监管" },
            PageDescriptor { id: "feedback-handling", title: "反馈意见处理监管" },
        ],
    },
    SectionDescriptor {
        id: SectionId::FundSupervision,
        title: "经费收支监管",
        icon: "dollar-sign",
        pages: &[
            PageDescriptor { id: "budget-execution", title: "预算执行监管" },
            PageDescriptor { id: "expenditure-compliance", title: "收支合规性监管" },
            PageDescriptor { id: "fund-security", title: "资金安全监管" },
        ],
    },
];

/// All sections in sidebar order
pub fn sections() -> &'static [SectionDescriptor] {
    &SECTIONS
}

/// Lookup by string id
pub fn section(id: &str) -> Option<&'static SectionDescriptor> {
    SECTIONS.iter().find(|s| s.id.as_str() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_lists_five_sections_in_order() {
        let ids: Vec<&str> = sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "project-approval",
                "contract-signing",
                "performance-monitoring",
                "quality-effectiveness",
                "fund-supervision",
            ]
        );
    }

    #[test]
    fn descriptor_index_matches_id() {
        for id in SectionId::ALL {
            assert_eq!(id.descriptor().id, id);
        }
    }

    #[test]
    fn every_section_has_three_unique_pages() {
        let mut all_pages = HashSet::new();
        for s in sections() {
            assert_eq!(s.pages.len(), 3, "section {}", s.id);
            for p in s.pages {
                assert!(all_pages.insert(p.id), "duplicate page id {}", p.id);
                assert!(!p.title.is_empty());
            }
        }
        assert_eq!(all_pages.len(), 15);
    }

    #[test]
    fn first_page_of_fund_supervision() {
        let fund = section("fund-supervision").expect("section exists");
        assert_eq!(fund.first_page().id, "budget-execution");
        assert_eq!(fund.title, "经费收支监管");
    }

    #[test]
    fn page_lookup_is_scoped_to_section() {
        let contracts = section("contract-signing").expect("section exists");
        assert!(contracts.page("risk-assessment").is_some());
        assert!(contracts.page("audit-monitoring").is_none());
    }

    #[test]
    fn unknown_section_id_fails_to_parse() {
        assert_eq!(
            "finance".parse::<SectionId>(),
            Err(NavigationError::UnknownSection("finance".to_string()))
        );
        assert!(section("finance").is_none());
        assert_eq!(
            "quality-effectiveness".parse::<SectionId>(),
            Ok(SectionId::QualityEffectiveness)
        );
    }

    #[test]
    fn section_id_serializes_as_kebab_case() {
        let json = serde_json::to_string(&SectionId::PerformanceMonitoring).unwrap();
        assert_eq!(json, "\"performance-monitoring\"");
    }
}
