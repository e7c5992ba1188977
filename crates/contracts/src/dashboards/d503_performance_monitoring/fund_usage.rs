use crate::dashboards::common::{metric, Metric, Severity};
use crate::shared::chart::ChartData;
use crate::shared::format::percent_of;
use crate::shared::search::Searchable;
use crate::shared::status_filter::StatusTab;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowKind {
    Income,
    Expense,
}

impl FlowKind {
    pub fn label(&self) -> &'static str {
        match self {
            FlowKind::Income => "收入",
            FlowKind::Expense => "支出",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApprovalStatus {
    Approved,
    Pending,
}

impl ApprovalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "已审批",
            ApprovalStatus::Pending => "审批中",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FundRecord {
    pub id: u32,
    pub project: &'static str,
    pub date: &'static str,
    pub kind: FlowKind,
    pub amount: f64,
    pub purpose: &'static str,
    pub operator: &'static str,
    pub status: ApprovalStatus,
}

impl FundRecord {
    pub fn description(&self) -> String {
        match self.kind {
            FlowKind::Expense => format!(
                "用于{}的{}，包括设备采购、安装和调试等费用。",
                self.project, self.purpose
            ),
            FlowKind::Income => format!("{}的项目拨款，用于支持项目顺利实施。", self.project),
        }
    }

    pub fn awaits_approval(&self) -> bool {
        self.status == ApprovalStatus::Pending
    }
}

impl Searchable for FundRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.project, self.purpose, self.operator]
    }
}

/// Approval metadata shown in the record detail dialog
pub const DETAIL_APPLICANT: &str = "张三";
pub const DETAIL_APPLY_TIME: &str = "2025-05-10 09:30";
pub const DETAIL_APPROVE_TIME: &str = "2025-05-12 14:20";
pub const DETAIL_ATTACHMENT: &str = "发票凭证.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundTab {
    All,
    Income,
    Expense,
    Pending,
}

impl StatusTab for FundTab {
    type Record = FundRecord;

    const ALL: &'static [Self] = &[FundTab::All, FundTab::Income, FundTab::Expense, FundTab::Pending];

    fn id(&self) -> &'static str {
        match self {
            FundTab::All => "all",
            FundTab::Income => "income",
            FundTab::Expense => "expense",
            FundTab::Pending => "pending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FundTab::All => "全部记录",
            FundTab::Income => "收入记录",
            FundTab::Expense => "支出记录",
            FundTab::Pending => "待审批",
        }
    }

    fn matches(&self, record: &FundRecord) -> bool {
        match self {
            FundTab::All => true,
            FundTab::Income => record.kind == FlowKind::Income,
            FundTab::Expense => record.kind == FlowKind::Expense,
            FundTab::Pending => record.awaits_approval(),
        }
    }
}

/// Project and amount-range filter of the records table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundFilter {
    pub query: String,
    pub project: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl FundFilter {
    pub fn matches(&self, record: &FundRecord) -> bool {
        record.matches_query(&self.query)
            && self.project.as_deref().map_or(true, |p| record.project == p)
            && self.min_amount.map_or(true, |min| record.amount >= min)
            && self.max_amount.map_or(true, |max| record.amount <= max)
    }

    pub fn apply(&self, records: &[FundRecord]) -> Vec<FundRecord> {
        records.iter().filter(|r| self.matches(r)).copied().collect()
    }
}

/// Parses an amount input, blank or invalid text means no bound
pub fn parse_amount_input(text: &str) -> Option<f64> {
    let trimmed = text.trim().replace(',', "");
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

pub fn fund_records() -> Vec<FundRecord> {
    vec![
        FundRecord {
            id: 1,
            project: "城市基础设施改造项目",
            date: "2025-05-15",
            kind: FlowKind::Expense,
            amount: 1_500_000.0,
            purpose: "材料采购",
            operator: "张经理",
            status: ApprovalStatus::Approved,
        },
        FundRecord {
            id: 2,
            project: "智慧城市数据中心建设",
            date: "2025-05-14",
            kind: FlowKind::Expense,
            amount: 800_000.0,
            purpose: "设备采购",
            operator: "李经理",
            status: ApprovalStatus::Approved,
        },
        FundRecord {
            id: 3,
            project: "公共卫生服务中心扩建",
            date: "2025-05-13",
            kind: FlowKind::Income,
            amount: 3_000_000.0,
            purpose: "项目拨款",
            operator: "王主任",
            status: ApprovalStatus::Approved,
        },
        FundRecord {
            id: 4,
            project: "城市绿化带改造工程",
            date: "2025-05-12",
            kind: FlowKind::Expense,
            amount: 500_000.0,
            purpose: "人工费用",
            operator: "赵经理",
            status: ApprovalStatus::Pending,
        },
    ]
}

pub fn record_projects() -> Vec<&'static str> {
    let mut projects: Vec<&'static str> = fund_records().iter().map(|r| r.project).collect();
    projects.dedup();
    projects
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetLine {
    pub category: &'static str,
    pub budget: f64,
    pub actual: f64,
}

impl BudgetLine {
    pub fn execution_rate(&self) -> f64 {
        percent_of(self.actual, self.budget)
    }
}

impl Searchable for BudgetLine {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.category]
    }
}

pub fn budget_lines() -> Vec<BudgetLine> {
    let line = |category, budget, actual| BudgetLine {
        category,
        budget,
        actual,
    };
    vec![
        line("材料费", 5_000_000.0, 3_200_000.0),
        line("人工费", 3_000_000.0, 1_800_000.0),
        line("设备费", 2_500_000.0, 1_500_000.0),
        line("管理费", 1_000_000.0, 400_000.0),
        line("其他费用", 500_000.0, 150_000.0),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetTotals {
    pub budget: f64,
    pub used: f64,
}

impl BudgetTotals {
    pub fn from_lines(lines: &[BudgetLine]) -> Self {
        Self {
            budget: lines.iter().map(|l| l.budget).sum(),
            used: lines.iter().map(|l| l.actual).sum(),
        }
    }

    pub fn remaining(&self) -> f64 {
        self.budget - self.used
    }

    pub fn usage_rate(&self) -> f64 {
        percent_of(self.used, self.budget)
    }
}

pub fn budget_comparison(lines: &[BudgetLine]) -> ChartData {
    let labels: Vec<&'static str> = lines.iter().map(|l| l.category).collect();
    let budgets: Vec<f64> = lines.iter().map(|l| l.budget / 10_000.0).collect();
    let actuals: Vec<f64> = lines.iter().map(|l| l.actual / 10_000.0).collect();
    ChartData::new(&labels)
        .with_series("预算金额(万元)", "#3b82f6", &budgets)
        .with_series("实际支出(万元)", "#14b8a6", &actuals)
}

pub fn execution_trend() -> ChartData {
    ChartData::new(&["1月", "2月", "3月", "4月", "5月"]).with_series(
        "预算执行率",
        "#14b8a6",
        &[15.0, 28.0, 36.0, 48.0, 57.0],
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FundAlert {
    pub project: &'static str,
    pub message: &'static str,
    pub severity: Severity,
}

pub fn fund_alerts() -> Vec<FundAlert> {
    vec![
        FundAlert {
            project: "智慧城市数据中心建设",
            message: "设备采购支出超出预算20%，请及时关注",
            severity: Severity::High,
        },
        FundAlert {
            project: "城市基础设施改造项目",
            message: "材料费用支出进度缓慢，仅完成预算的40%",
            severity: Severity::Medium,
        },
    ]
}

pub fn efficiency_metrics() -> Vec<Metric> {
    vec![
        metric("资金周转率", "2.5次/月"),
        metric("资金使用效率", "85%"),
        metric("资金闲置率", "15%"),
        metric("预算执行偏差率", "±8%"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status_filter::{count_for, filter_by_tab};

    #[test]
    fn totals_are_derived_from_categories() {
        let totals = BudgetTotals::from_lines(&budget_lines());
        assert_eq!(totals.budget, 12_000_000.0);
        assert_eq!(totals.used, 7_050_000.0);
        assert_eq!(totals.remaining(), 4_950_000.0);
        assert!((totals.usage_rate() - 58.75).abs() < 1e-9);
    }

    #[test]
    fn category_execution_rates() {
        let rates: Vec<u32> = budget_lines()
            .iter()
            .map(|l| l.execution_rate().round() as u32)
            .collect();
        assert_eq!(rates, vec![64, 60, 60, 40, 30]);
    }

    #[test]
    fn tabs_split_records() {
        let records = fund_records();
        assert_eq!(count_for(&records, FundTab::All), 4);
        assert_eq!(count_for(&records, FundTab::Income), 1);
        assert_eq!(count_for(&records, FundTab::Expense), 3);
        let pending = filter_by_tab(&records, FundTab::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].project, "城市绿化带改造工程");
    }

    #[test]
    fn amount_range_filter() {
        let filter = FundFilter {
            min_amount: parse_amount_input("600,000"),
            max_amount: parse_amount_input("2000000"),
            ..FundFilter::default()
        };
        let ids: Vec<u32> = filter.apply(&fund_records()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn blank_or_negative_amount_is_no_bound() {
        assert_eq!(parse_amount_input("  "), None);
        assert_eq!(parse_amount_input("-5"), None);
        assert_eq!(parse_amount_input("abc"), None);
    }

    #[test]
    fn description_depends_on_kind() {
        let records = fund_records();
        assert_eq!(
            records[0].description(),
            "用于城市基础设施改造项目的材料采购，包括设备采购、安装和调试等费用。"
        );
        assert_eq!(
            records[2].description(),
            "公共卫生服务中心扩建的项目拨款，用于支持项目顺利实施。"
        );
    }
}
