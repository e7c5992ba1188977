use crate::dashboards::common::{finding, Finding, Severity};
use crate::shared::search::Searchable;
use serde::Serialize;

/// Radar axis maximum
pub const RISK_SCALE_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskContract {
    pub id: u32,
    pub name: &'static str,
    pub kind: &'static str,
    pub party: &'static str,
    pub submit_time: &'static str,
    pub risk_score: u32,
}

impl RiskContract {
    pub fn level(&self) -> Severity {
        risk_level(self.risk_score)
    }
}

impl Searchable for RiskContract {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.kind, self.party]
    }
}

/// Score bands: below 50 low, 50..80 medium, 80 and above high
pub fn risk_level(score: u32) -> Severity {
    match score {
        0..=49 => Severity::Low,
        50..=79 => Severity::Medium,
        _ => Severity::High,
    }
}

pub fn risk_contracts() -> Vec<RiskContract> {
    vec![
        RiskContract {
            id: 1,
            name: "城市基础设施改造项目合同",
            kind: "工程合同",
            party: "城市建设有限公司",
            submit_time: "2025-05-15",
            risk_score: 68,
        },
        RiskContract {
            id: 2,
            name: "智慧城市数据中心建设合同",
            kind: "技术服务合同",
            party: "科技信息有限公司",
            submit_time: "2025-05-14",
            risk_score: 42,
        },
        RiskContract {
            id: 3,
            name: "公共卫生服务中心设备采购合同",
            kind: "采购合同",
            party: "医疗设备有限公司",
            submit_time: "2025-05-13",
            risk_score: 85,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskDimension {
    Legal,
    Economic,
    Performance,
    Credit,
    Technical,
}

impl RiskDimension {
    pub const ALL: [RiskDimension; 5] = [
        RiskDimension::Legal,
        RiskDimension::Economic,
        RiskDimension::Performance,
        RiskDimension::Credit,
        RiskDimension::Technical,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RiskDimension::Legal => "legal",
            RiskDimension::Economic => "economic",
            RiskDimension::Performance => "performance",
            RiskDimension::Credit => "credit",
            RiskDimension::Technical => "technical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskDimension::Legal => "法律风险",
            RiskDimension::Economic => "经济风险",
            RiskDimension::Performance => "履约风险",
            RiskDimension::Credit => "信用风险",
            RiskDimension::Technical => "技术风险",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Radar chart value for the selected contract
    pub fn score(&self) -> f64 {
        match self {
            RiskDimension::Legal => 65.0,
            RiskDimension::Economic => 40.0,
            RiskDimension::Performance => 30.0,
            RiskDimension::Credit => 20.0,
            RiskDimension::Technical => 55.0,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            RiskDimension::Legal => Severity::High,
            RiskDimension::Economic | RiskDimension::Technical => Severity::Medium,
            RiskDimension::Performance | RiskDimension::Credit => Severity::Low,
        }
    }

    pub fn findings(&self) -> Vec<Finding> {
        match self {
            RiskDimension::Legal => vec![
                finding("条款漏洞", "合同中缺少明确的违约责任条款，可能导致违约时难以追责", Severity::High),
                finding("争议解决机制不明确", "合同未明确约定争议解决方式和管辖法院，可能导致纠纷解决困难", Severity::Medium),
                finding("知识产权条款缺失", "未明确约定项目成果的知识产权归属，可能引发后续纠纷", Severity::Medium),
            ],
            RiskDimension::Economic => vec![
                finding("付款条件不明确", "进度款支付条件不明确，可能导致付款争议", Severity::Medium),
                finding("价格调整机制缺失", "合同期限较长，但缺少价格调整机制，可能因通胀等因素导致经济损失", Severity::Medium),
            ],
            RiskDimension::Performance => vec![finding(
                "工期安排合理",
                "合同工期安排符合项目实际需求，风险较低",
                Severity::Ok,
            )],
            RiskDimension::Credit => vec![finding(
                "对方信用良好",
                "合同对方近三年无不良信用记录，履约能力较强",
                Severity::Ok,
            )],
            RiskDimension::Technical => vec![finding(
                "技术标准不明确",
                "合同中对技术标准的描述不够详细，可能导致质量争议",
                Severity::Medium,
            )],
        }
    }

    /// Checklist of mitigation suggestions shown under the findings
    pub fn suggestions(&self) -> Vec<&'static str> {
        match self {
            RiskDimension::Legal => vec![
                "增加详细的违约责任条款，明确违约情形和违约金计算方式",
                "增加争议解决条款，明确约定纠纷解决方式和管辖法院",
                "增加知识产权条款，明确项目成果的知识产权归属",
            ],
            _ => Vec::new(),
        }
    }
}

pub fn radar_values() -> Vec<f64> {
    RiskDimension::ALL.iter().map(|d| d.score()).collect()
}

pub fn overall_score() -> u32 {
    68
}

pub fn clause_measures() -> Vec<&'static str> {
    vec![
        "增加详细的违约责任条款，明确违约情形和违约金计算方式",
        "增加争议解决条款，明确约定纠纷解决方式和管辖法院",
        "增加知识产权条款，明确项目成果的知识产权归属",
        "完善付款条件，明确进度款支付的具体条件和验收标准",
        "增加价格调整机制，应对长期合同中可能出现的通胀等因素",
    ]
}

pub fn performance_measures() -> Vec<&'static str> {
    vec![
        "建立定期进度报告机制，及时掌握项目进展",
        "设置关键节点验收制度，确保项目质量",
        "建立变更管理流程，规范处理合同执行过程中的变更",
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskHistory {
    pub contract: &'static str,
    pub date: &'static str,
    pub assessor: &'static str,
    pub score: u32,
}

pub fn assessment_history() -> Vec<RiskHistory> {
    vec![
        RiskHistory { contract: "城市基础设施改造项目合同", date: "2025-05-15", assessor: "张工", score: 68 },
        RiskHistory { contract: "智慧城市数据中心建设合同", date: "2025-05-14", assessor: "李工", score: 42 },
        RiskHistory { contract: "公共卫生服务中心设备采购合同", date: "2025-05-13", assessor: "王工", score: 85 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_match_scores() {
        let labels: Vec<&str> = risk_contracts().iter().map(|c| c.level().risk_label()).collect();
        assert_eq!(labels, vec!["中等风险", "低风险", "高风险"]);
        assert_eq!(risk_level(overall_score()).risk_label(), "中等风险");
    }

    #[test]
    fn radar_has_five_axes() {
        assert_eq!(radar_values(), vec![65.0, 40.0, 30.0, 20.0, 55.0]);
        assert!(radar_values().iter().all(|v| *v <= RISK_SCALE_MAX));
    }

    #[test]
    fn every_dimension_has_findings() {
        for d in RiskDimension::ALL {
            assert!(!d.findings().is_empty(), "{}", d.label());
            assert_eq!(RiskDimension::from_code(d.code()), Some(d));
        }
    }
}
