use crate::dashboards::common::{metric, Metric};
use crate::shared::chart::ChartData;
use serde::Serialize;

pub use crate::dashboards::d503_performance_monitoring::fund_usage::{
    budget_comparison, budget_lines, BudgetLine, BudgetTotals,
};

/// Content tabs of the budget execution page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BudgetTab {
    #[default]
    Overview,
    Details,
    Analysis,
}

impl BudgetTab {
    pub const ALL: [BudgetTab; 3] = [BudgetTab::Overview, BudgetTab::Details, BudgetTab::Analysis];

    pub fn id(&self) -> &'static str {
        match self {
            BudgetTab::Overview => "overview",
            BudgetTab::Details => "details",
            BudgetTab::Analysis => "analysis",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTab::Overview => "预算概览",
            BudgetTab::Details => "预算明细",
            BudgetTab::Analysis => "执行分析",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExecutionHealth {
    Good,
    Normal,
    Lagging,
}

impl ExecutionHealth {
    /// Above 80% is good, below 30% lags
    pub fn from_rate(rate: f64) -> Self {
        if rate > 80.0 {
            ExecutionHealth::Good
        } else if rate < 30.0 {
            ExecutionHealth::Lagging
        } else {
            ExecutionHealth::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExecutionHealth::Good => "良好",
            ExecutionHealth::Normal => "正常",
            ExecutionHealth::Lagging => "滞后",
        }
    }
}

pub fn line_health(line: &BudgetLine) -> ExecutionHealth {
    ExecutionHealth::from_rate(line.execution_rate())
}

/// Category with the lowest execution rate, flagged on the board
pub fn slowest_line(lines: &[BudgetLine]) -> Option<&BudgetLine> {
    lines
        .iter()
        .min_by(|a, b| a.execution_rate().total_cmp(&b.execution_rate()))
}

pub fn execution_trend(totals: &BudgetTotals) -> ChartData {
    ChartData::new(&["1月", "2月", "3月", "4月", "5月"]).with_series(
        "预算执行率",
        "#14b8a6",
        &[15.0, 28.0, 36.0, 48.0, totals.usage_rate()],
    )
}

pub const PLANNED_RATES: [f64; 5] = [70.0, 65.0, 60.0, 55.0, 50.0];

pub fn deviation_chart(lines: &[BudgetLine]) -> ChartData {
    let labels: Vec<&'static str> = lines.iter().map(|l| l.category).collect();
    let actual: Vec<f64> = lines.iter().map(|l| l.execution_rate()).collect();
    ChartData::new(&labels)
        .with_series("计划执行率", "#3b82f6", &PLANNED_RATES[..labels.len().min(PLANNED_RATES.len())])
        .with_series("实际执行率", "#14b8a6", &actual)
}

pub fn efficiency_scores() -> Vec<(Metric, f64)> {
    vec![
        (metric("资金使用效率", "85%"), 85.0),
        (metric("预算执行均衡性", "72%"), 72.0),
        (metric("预算调整频率", "35%"), 35.0),
    ]
}

pub const ANALYSIS_CONCLUSION: &str = "预算执行整体情况良好，资金使用效率较高。但管理费用支出较低，建议关注并加快相关工作进度。预算调整频率较低，表明预算编制较为合理。";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_thresholds() {
        assert_eq!(ExecutionHealth::from_rate(85.0), ExecutionHealth::Good);
        assert_eq!(ExecutionHealth::from_rate(80.0), ExecutionHealth::Normal);
        assert_eq!(ExecutionHealth::from_rate(40.0), ExecutionHealth::Normal);
        assert_eq!(ExecutionHealth::from_rate(29.9), ExecutionHealth::Lagging);
    }

    #[test]
    fn category_health_labels() {
        let labels: Vec<&str> = budget_lines().iter().map(|l| line_health(l).label()).collect();
        assert_eq!(labels, vec!["正常", "正常", "正常", "正常", "正常"]);
    }

    #[test]
    fn slowest_category_is_other_costs() {
        let lines = budget_lines();
        assert_eq!(slowest_line(&lines).map(|l| l.category), Some("其他费用"));
        assert!(slowest_line(&[]).is_none());
    }

    #[test]
    fn trend_ends_at_current_rate() {
        let totals = BudgetTotals::from_lines(&budget_lines());
        let trend = execution_trend(&totals);
        assert_eq!(trend.series[0].values.last().copied(), Some(58.75));
    }

    #[test]
    fn tab_ids_parse() {
        assert_eq!(BudgetTab::parse("details"), Some(BudgetTab::Details));
        assert_eq!(BudgetTab::parse("missing"), None);
        assert_eq!(BudgetTab::default(), BudgetTab::Overview);
    }
}
