use crate::shared::search::Searchable;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    MaterialFraud,
    BudgetAnomaly,
    Qualification,
    Duplicate,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 4] = [
        ViolationKind::MaterialFraud,
        ViolationKind::BudgetAnomaly,
        ViolationKind::Qualification,
        ViolationKind::Duplicate,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::MaterialFraud => "fake",
            ViolationKind::BudgetAnomaly => "budget",
            ViolationKind::Qualification => "qualification",
            ViolationKind::Duplicate => "duplicate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViolationKind::MaterialFraud => "材料造假",
            ViolationKind::BudgetAnomaly => "预算异常",
            ViolationKind::Qualification => "资质不符",
            ViolationKind::Duplicate => "重复申报",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "紧急",
            Priority::Medium => "重要",
            Priority::Low => "一般",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationWarning {
    pub id: u32,
    pub project: &'static str,
    pub kind: ViolationKind,
    pub description: &'static str,
    pub time: &'static str,
    pub priority: Priority,
}

impl Searchable for ViolationWarning {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.project, self.kind.label(), self.description]
    }
}

pub fn violation_warnings() -> Vec<ViolationWarning> {
    vec![
        ViolationWarning {
            id: 1,
            project: "城市基础设施改造项目",
            kind: ViolationKind::MaterialFraud,
            description: "提交的工程经验证明材料与实际情况不符",
            time: "2025-05-15 10:30",
            priority: Priority::High,
        },
        ViolationWarning {
            id: 2,
            project: "智慧城市数据中心建设",
            kind: ViolationKind::BudgetAnomaly,
            description: "项目预算明显高于同类项目平均水平",
            time: "2025-05-14 16:45",
            priority: Priority::Medium,
        },
        ViolationWarning {
            id: 3,
            project: "公共卫生服务中心扩建",
            kind: ViolationKind::Qualification,
            description: "申报单位资质等级与项目要求不符",
            time: "2025-05-13 09:20",
            priority: Priority::High,
        },
        ViolationWarning {
            id: 4,
            project: "城市绿化带改造工程",
            kind: ViolationKind::Duplicate,
            description: "项目内容与去年已批准项目高度重合",
            time: "2025-05-12 14:10",
            priority: Priority::Low,
        },
    ]
}

/// Warnings of `kind` (all kinds when `None`) matching `query`
pub fn filter_warnings(
    warnings: &[ViolationWarning],
    kind: Option<ViolationKind>,
    query: &str,
) -> Vec<ViolationWarning> {
    warnings
        .iter()
        .filter(|w| kind.map_or(true, |k| w.kind == k))
        .filter(|w| w.matches_query(query))
        .cloned()
        .collect()
}

pub fn alert_text(count: usize) -> String {
    format!("系统检测到{}个潜在违规行为，请及时处理。", count)
}

pub fn evidence() -> Vec<&'static str> {
    vec![
        "申报材料中第3页工程经验与实际查询结果不符",
        "系统检测到相似材料在其他项目中出现过",
        "资质证书编号与官方数据库记录不一致",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_kind_and_blank_query_keep_all() {
        assert_eq!(filter_warnings(&violation_warnings(), None, "").len(), 4);
        assert_eq!(alert_text(4), "系统检测到4个潜在违规行为，请及时处理。");
    }

    #[test]
    fn filter_by_kind_code() {
        let kind = ViolationKind::from_code("budget");
        let found = filter_warnings(&violation_warnings(), kind, "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].project, "智慧城市数据中心建设");
    }

    #[test]
    fn query_matches_description() {
        let found = filter_warnings(&violation_warnings(), None, "资质");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn priority_labels() {
        let labels: Vec<&str> = violation_warnings().iter().map(|w| w.priority.label()).collect();
        assert_eq!(labels, vec!["紧急", "重要", "紧急", "一般"]);
    }
}
