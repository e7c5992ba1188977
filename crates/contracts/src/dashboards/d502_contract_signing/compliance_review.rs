use crate::dashboards::common::{finding, share, Finding, Severity, Share};
use crate::shared::chart::{palette_color, ChartData};
use crate::shared::search::Searchable;
use crate::shared::status_filter::StatusTab;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewStatus {
    Reviewing,
    Passed,
    Rejected,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Reviewing => "审核中",
            ReviewStatus::Passed => "已通过",
            ReviewStatus::Rejected => "已退回",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractReview {
    pub id: u32,
    pub name: &'static str,
    pub kind: &'static str,
    pub party: &'static str,
    pub submit_time: &'static str,
    pub status: ReviewStatus,
}

impl Searchable for ContractReview {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.kind, self.party]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTab {
    All,
    Reviewing,
    Passed,
    Rejected,
}

impl StatusTab for ReviewTab {
    type Record = ContractReview;

    const ALL: &'static [Self] = &[
        ReviewTab::All,
        ReviewTab::Reviewing,
        ReviewTab::Passed,
        ReviewTab::Rejected,
    ];

    fn id(&self) -> &'static str {
        match self {
            ReviewTab::All => "all",
            ReviewTab::Reviewing => "reviewing",
            ReviewTab::Passed => "passed",
            ReviewTab::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReviewTab::All => "全部合同",
            ReviewTab::Reviewing => "审核中",
            ReviewTab::Passed => "已通过",
            ReviewTab::Rejected => "已退回",
        }
    }

    fn matches(&self, c: &ContractReview) -> bool {
        match self {
            ReviewTab::All => true,
            ReviewTab::Reviewing => c.status == ReviewStatus::Reviewing,
            ReviewTab::Passed => c.status == ReviewStatus::Passed,
            ReviewTab::Rejected => c.status == ReviewStatus::Rejected,
        }
    }
}

pub fn contracts() -> Vec<ContractReview> {
    vec![
        ContractReview {
            id: 1,
            name: "城市基础设施改造项目合同",
            kind: "工程合同",
            party: "城市建设有限公司",
            submit_time: "2025-05-15",
            status: ReviewStatus::Reviewing,
        },
        ContractReview {
            id: 2,
            name: "智慧城市数据中心建设合同",
            kind: "技术服务合同",
            party: "科技信息有限公司",
            submit_time: "2025-05-14",
            status: ReviewStatus::Passed,
        },
        ContractReview {
            id: 3,
            name: "公共卫生服务中心设备采购合同",
            kind: "采购合同",
            party: "医疗设备有限公司",
            submit_time: "2025-05-13",
            status: ReviewStatus::Rejected,
        },
        ContractReview {
            id: 4,
            name: "城市绿化带改造工程合同",
            kind: "工程合同",
            party: "园林绿化有限公司",
            submit_time: "2025-05-10",
            status: ReviewStatus::Reviewing,
        },
    ]
}

/// Pre-selected contract in the review panel
pub const DEFAULT_SELECTED: u32 = 1;

/// Numbered clause of a contract preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub title: &'static str,
    pub items: &'static [&'static str],
    /// System flag raised on this clause
    pub flag: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractDocument {
    pub title: &'static str,
    pub number: &'static str,
    pub party_a: &'static str,
    pub party_b: &'static str,
    pub amount: &'static str,
    pub term: &'static str,
    pub clauses: &'static [Clause],
}

pub fn contract_document() -> ContractDocument {
    ContractDocument {
        title: "城市基础设施改造项目合同",
        number: "CT2025051501",
        party_a: "市政府城市管理局",
        party_b: "城市建设有限公司",
        amount: "人民币贰仟万元整 (¥20,000,000.00)",
        term: "2025年6月1日至2026年5月31日",
        clauses: &[
            Clause {
                title: "第一条 项目概述",
                items: &["本项目为城市基础设施改造工程，包括但不限于道路修缮、排水系统改造、公共设施更新等内容。"],
                flag: None,
            },
            Clause {
                title: "第二条 工程范围",
                items: &[
                    "2.1 主城区东部片区道路修缮，总长度约15公里；",
                    "2.2 排水系统改造，包括雨水管网更新和污水管网分离；",
                    "2.3 公共设施更新，包括路灯、座椅、垃圾箱等设施的更换和增设。",
                ],
                flag: None,
            },
            Clause {
                title: "第三条 付款方式",
                items: &[
                    "3.1 预付款：合同签订后15个工作日内，甲方向乙方支付合同总额的30%作为预付款；",
                    "3.2 进度款：根据工程进度，分期支付进度款，每季度支付一次，每次支付合同总额的15%；",
                    "3.3 结算款：工程竣工验收合格后，支付至合同总额的95%；",
                    "3.4 质保金：余下5%作为质保金，质保期满后无质量问题一次性付清。",
                ],
                flag: Some("付款条件不明确"),
            },
            Clause {
                title: "第四条 工期要求",
                items: &[
                    "4.1 开工日期：2025年6月1日；",
                    "4.2 竣工日期：2026年5月31日；",
                    "4.3 总工期：12个月。",
                ],
                flag: None,
            },
        ],
    }
}

pub fn compliance_issues() -> Vec<Finding> {
    vec![
        finding(
            "付款条件不明确",
            "第三条中未明确规定进度款支付的具体条件和验收标准",
            Severity::Medium,
        ),
        finding(
            "违约责任条款缺失",
            "合同中未包含明确的违约责任条款，不符合规范要求",
            Severity::High,
        ),
    ]
}

pub const DEFAULT_SUGGESTION: &str = "1. 建议在第三条中明确进度款支付的具体条件，如'经甲方验收合格后支付'；
2. 增加违约责任条款，明确双方违约的情形和相应的违约金计算方式；
3. 建议增加争议解决条款，明确纠纷解决方式和管辖法院。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleReference {
    pub code: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub fn rule_reference() -> RuleReference {
    RuleReference {
        code: "R-2023-105",
        title: "付款条款规范",
        text: "合同中的付款条款应明确规定付款条件、付款时间、付款方式和金额，确保双方权益明确。",
    }
}

pub fn contract_type_distribution() -> ChartData {
    ChartData::new(&["工程合同", "技术服务合同", "采购合同", "其他合同"]).with_series(
        "合同数量",
        palette_color(0),
        &[12.0, 8.0, 5.0, 3.0],
    )
}

pub fn review_result_distribution() -> ChartData {
    ChartData::new(&["已通过", "已退回", "审核中"]).with_series(
        "合同数量",
        palette_color(1),
        &[15.0, 7.0, 6.0],
    )
}

pub fn common_issues() -> Vec<Share> {
    vec![
        share("付款条件不明确", 35.0),
        share("违约责任条款缺失", 25.0),
        share("争议解决条款缺失", 20.0),
        share("质量标准不明确", 15.0),
        share("其他问题", 5.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status_filter::{filter_by_tab, tab_counts};

    #[test]
    fn reviewing_tab_yields_contracts_one_and_four() {
        let ids: Vec<u32> = filter_by_tab(&contracts(), ReviewTab::Reviewing)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn all_tab_returns_all_four() {
        assert_eq!(filter_by_tab(&contracts(), ReviewTab::All), contracts());
    }

    #[test]
    fn status_tabs_partition_contracts() {
        let counts = tab_counts::<ReviewTab>(&contracts());
        let partial: usize = counts.iter().skip(1).map(|(_, c)| c).sum();
        assert_eq!(partial, contracts().len());
        assert_eq!(ReviewTab::parse("rejected"), Some(ReviewTab::Rejected));
    }

    #[test]
    fn default_selection_exists() {
        assert!(contracts().iter().any(|c| c.id == DEFAULT_SELECTED));
    }

    #[test]
    fn payment_clause_is_flagged() {
        let doc = contract_document();
        let flagged: Vec<&str> = doc
            .clauses
            .iter()
            .filter_map(|c| c.flag)
            .collect();
        assert_eq!(flagged, vec!["付款条件不明确"]);
    }
}
