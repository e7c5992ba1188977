use crate::dashboards::common::{metric, share, Metric, Share};
use crate::shared::chart::ChartData;
use crate::shared::search::Searchable;
use crate::shared::status_filter::StatusTab;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceStatus {
    Compliant,
    Pending,
    NonCompliant,
}

impl ComplianceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "合规",
            ComplianceStatus::Pending => "待审核",
            ComplianceStatus::NonCompliant => "不合规",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transaction {
    pub id: u32,
    pub project: &'static str,
    pub date: &'static str,
    pub kind: &'static str,
    pub amount: f64,
    pub approver: &'static str,
    pub status: ComplianceStatus,
    pub issue: Option<&'static str>,
}

impl Transaction {
    pub fn check_time(&self) -> String {
        format!("{} 14:30", self.date)
    }

    pub fn budget_check(&self) -> &'static str {
        if self.status == ComplianceStatus::NonCompliant && self.issue == Some("超出预算限额") {
            "该支出超出年度预算限额，需要专项申请"
        } else {
            "支出金额在预算范围内"
        }
    }

    /// Actions available in the detail dialog
    pub fn review_actions(&self) -> &'static [&'static str] {
        match self.status {
            ComplianceStatus::Pending => &["标记为不合规", "标记为合规"],
            ComplianceStatus::NonCompliant => &["处理异常"],
            ComplianceStatus::Compliant => &[],
        }
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.project, self.kind, self.approver]
    }
}

pub const CHECKED_BY: &str = "系统自动检查";
pub const APPROVAL_CHECK: &str = "审批流程符合规定，已完成所有必要审批";
pub const INVOICE_CHECK: &str = "发票信息完整，符合票据管理规定";
pub const ATTACHMENT: &str = "发票凭证.pdf";

pub fn transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            project: "城市基础设施改造项目",
            date: "2025-05-15",
            kind: "材料采购",
            amount: 1_500_000.0,
            approver: "张经理",
            status: ComplianceStatus::Compliant,
            issue: None,
        },
        Transaction {
            id: 2,
            project: "智慧城市数据中心建设",
            date: "2025-05-14",
            kind: "设备采购",
            amount: 800_000.0,
            approver: "李经理",
            status: ComplianceStatus::Compliant,
            issue: None,
        },
        Transaction {
            id: 3,
            project: "公共卫生服务中心扩建",
            date: "2025-05-13",
            kind: "咨询服务",
            amount: 300_000.0,
            approver: "王主任",
            status: ComplianceStatus::Pending,
            issue: None,
        },
        Transaction {
            id: 4,
            project: "城市绿化带改造工程",
            date: "2025-05-12",
            kind: "人工费用",
            amount: 500_000.0,
            approver: "赵经理",
            status: ComplianceStatus::NonCompliant,
            issue: Some("超出预算限额"),
        },
    ]
}

/// Status select over the transaction table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceFilter {
    All,
    Compliant,
    Pending,
    NonCompliant,
}

impl StatusTab for ComplianceFilter {
    type Record = Transaction;

    const ALL: &'static [Self] = &[
        ComplianceFilter::All,
        ComplianceFilter::Compliant,
        ComplianceFilter::Pending,
        ComplianceFilter::NonCompliant,
    ];

    fn id(&self) -> &'static str {
        match self {
            ComplianceFilter::All => "all",
            ComplianceFilter::Compliant => "compliant",
            ComplianceFilter::Pending => "pending",
            ComplianceFilter::NonCompliant => "noncompliant",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ComplianceFilter::All => "全部状态",
            ComplianceFilter::Compliant => ComplianceStatus::Compliant.label(),
            ComplianceFilter::Pending => ComplianceStatus::Pending.label(),
            ComplianceFilter::NonCompliant => ComplianceStatus::NonCompliant.label(),
        }
    }

    fn matches(&self, tx: &Transaction) -> bool {
        match self {
            ComplianceFilter::All => true,
            ComplianceFilter::Compliant => tx.status == ComplianceStatus::Compliant,
            ComplianceFilter::Pending => tx.status == ComplianceStatus::Pending,
            ComplianceFilter::NonCompliant => tx.status == ComplianceStatus::NonCompliant,
        }
    }
}

/// Content tabs of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplianceTab {
    #[default]
    Records,
    Rules,
    Analysis,
}

impl ComplianceTab {
    pub const ALL: [ComplianceTab; 3] = [
        ComplianceTab::Records,
        ComplianceTab::Rules,
        ComplianceTab::Analysis,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ComplianceTab::Records => "records",
            ComplianceTab::Rules => "rules",
            ComplianceTab::Analysis => "analysis",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceTab::Records => "交易记录",
            ComplianceTab::Rules => "合规规则",
            ComplianceTab::Analysis => "合规分析",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceRule {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub active: bool,
}

impl ComplianceRule {
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "有效"
        } else {
            "停用"
        }
    }
}

pub fn compliance_rules() -> Vec<ComplianceRule> {
    let rule = |id, name, description, category| ComplianceRule {
        id,
        name,
        description,
        category,
        active: true,
    };
    vec![
        rule(
            1,
            "单笔支出审批流程",
            "金额超过50万元的支出需经过部门经理、财务总监和主管领导三级审批",
            "审批流程",
        ),
        rule(
            2,
            "预算控制规则",
            "各项支出不得超出年度预算的110%，超出部分需专项申请",
            "预算管理",
        ),
        rule(
            3,
            "供应商管理规定",
            "采购金额超过100万元需至少比较三家供应商报价",
            "采购管理",
        ),
        rule(
            4,
            "发票管理规定",
            "所有支出必须有合法有效的发票或收据，且发票信息必须完整准确",
            "票据管理",
        ),
    ]
}

pub fn summary_cards() -> Vec<Metric> {
    vec![
        metric("合规率", "92%"),
        metric("本月交易数", "156"),
        metric("不合规交易", "12"),
        metric("待审核交易", "8"),
    ]
}

pub fn issue_distribution() -> Vec<Share> {
    vec![
        share("预算超支", 45.0),
        share("审批流程不完整", 25.0),
        share("票据不合规", 15.0),
        share("供应商选择不当", 10.0),
        share("其他问题", 5.0),
    ]
}

pub fn compliance_trend() -> ChartData {
    ChartData::new(&["1月", "2月", "3月", "4月", "5月"])
        .with_series("合规率", "#14b8a6", &[85.0, 87.0, 90.0, 88.0, 92.0])
        .with_series("不合规交易数", "#ef4444", &[18.0, 15.0, 12.0, 14.0, 12.0])
}

/// Risk assessment panel: (title, body, tone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskNote {
    pub title: &'static str,
    pub body: &'static str,
    pub tone: Tone,
}

pub fn risk_notes() -> Vec<RiskNote> {
    vec![
        RiskNote {
            title: "整体合规风险较低",
            body: "当前系统合规率为92%，高于行业平均水平，整体合规风险较低。",
            tone: Tone::Success,
        },
        RiskNote {
            title: "预算控制风险提示",
            body: "预算超支问题占不合规问题的45%，建议加强预算控制和监督，避免超预算支出。",
            tone: Tone::Warning,
        },
        RiskNote {
            title: "合规改进建议",
            body: "1. 加强预算执行监控，建立预算预警机制；\n2. 完善审批流程，确保所有支出经过必要审批；\n3. 定期开展合规培训，提高相关人员合规意识。",
            tone: Tone::Info,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status_filter::{filter_by_tab, tab_counts};

    #[test]
    fn status_filter_partitions_records() {
        let counts: Vec<usize> = tab_counts::<ComplianceFilter>(&transactions())
            .into_iter()
            .map(|(_, n)| n)
            .collect();
        assert_eq!(counts, vec![4, 2, 1, 1]);
    }

    #[test]
    fn non_compliant_record_carries_issue() {
        let flagged = filter_by_tab(&transactions(), ComplianceFilter::NonCompliant);
        assert_eq!(flagged[0].issue, Some("超出预算限额"));
        assert_eq!(flagged[0].budget_check(), "该支出超出年度预算限额，需要专项申请");
        assert_eq!(flagged[0].review_actions(), &["处理异常"]);
    }

    #[test]
    fn compliant_record_passes_budget_check() {
        let tx = transactions()[0];
        assert_eq!(tx.budget_check(), "支出金额在预算范围内");
        assert!(tx.review_actions().is_empty());
        assert_eq!(tx.check_time(), "2025-05-15 14:30");
    }

    #[test]
    fn issue_shares_sum_to_whole() {
        let total: f64 = issue_distribution().iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn search_by_approver() {
        let hits: Vec<u32> = transactions()
            .iter()
            .filter(|t| t.matches_query("王主任"))
            .map(|t| t.id)
            .collect();
        assert_eq!(hits, vec![3]);
    }
}
