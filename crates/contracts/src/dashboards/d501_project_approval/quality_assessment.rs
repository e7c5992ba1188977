use crate::shared::chart::ChartData;
use crate::shared::format::percent_of;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Auditor {
    pub id: u32,
    pub name: &'static str,
    pub department: &'static str,
    pub project_count: u32,
    pub correct_count: u32,
    pub avg_hours: f64,
    /// Assessed accuracy, percent
    pub accuracy: u8,
    /// Assessed efficiency, percent
    pub efficiency: u8,
}

impl Auditor {
    /// Share of correctly reviewed projects
    pub fn correct_rate(&self) -> f64 {
        percent_of(self.correct_count as f64, self.project_count as f64)
    }

    pub fn avg_duration_label(&self) -> String {
        format!("{}小时", self.avg_hours)
    }
}

pub fn auditors() -> Vec<Auditor> {
    vec![
        Auditor { id: 1, name: "张三", department: "技术部", project_count: 45, correct_count: 43, avg_hours: 1.5, accuracy: 95, efficiency: 85 },
        Auditor { id: 2, name: "李四", department: "财务部", project_count: 38, correct_count: 33, avg_hours: 2.0, accuracy: 88, efficiency: 92 },
        Auditor { id: 3, name: "王五", department: "法务部", project_count: 42, correct_count: 39, avg_hours: 1.8, accuracy: 92, efficiency: 78 },
        Auditor { id: 4, name: "赵六", department: "运营部", project_count: 35, correct_count: 30, avg_hours: 2.2, accuracy: 85, efficiency: 90 },
        Auditor { id: 5, name: "钱七", department: "市场部", project_count: 40, correct_count: 36, avg_hours: 1.7, accuracy: 90, efficiency: 82 },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualitySummary {
    pub score: u32,
    pub accuracy: f64,
    pub avg_hours: f64,
}

pub fn quality_summary() -> QualitySummary {
    QualitySummary {
        score: 85,
        accuracy: 92.0,
        avg_hours: 1.8,
    }
}

/// 优/良/中/差
pub fn grade_distribution() -> ChartData {
    ChartData::new(&["优", "良", "中", "差"])
        .with_series("评分分布", "#4ade80", &[65.0, 20.0, 10.0, 5.0])
}

pub const GRADE_COLORS: [&str; 4] = ["#4ade80", "#60a5fa", "#facc15", "#f87171"];

pub fn auditor_performance(auditors: &[Auditor]) -> ChartData {
    let labels: Vec<&'static str> = auditors.iter().map(|a| a.name).collect();
    let accuracy: Vec<f64> = auditors.iter().map(|a| a.accuracy as f64).collect();
    let efficiency: Vec<f64> = auditors.iter().map(|a| a.efficiency as f64).collect();
    ChartData::new(&labels)
        .with_series("审核准确性", "#60a5fa", &accuracy)
        .with_series("审核效率", "#4ade80", &efficiency)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewCase {
    pub project: &'static str,
    pub result: &'static str,
    pub hours: f64,
    pub correct: bool,
}

pub fn recent_cases() -> Vec<ReviewCase> {
    vec![
        ReviewCase { project: "城市基础设施改造项目", result: "通过", hours: 1.2, correct: true },
        ReviewCase { project: "智慧城市数据中心建设", result: "通过", hours: 2.5, correct: true },
        ReviewCase { project: "公共卫生服务中心扩建", result: "退回修改", hours: 1.8, correct: false },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssessmentPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl AssessmentPeriod {
    pub const ALL: [AssessmentPeriod; 4] = [
        AssessmentPeriod::Week,
        AssessmentPeriod::Month,
        AssessmentPeriod::Quarter,
        AssessmentPeriod::Year,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AssessmentPeriod::Week => "week",
            AssessmentPeriod::Month => "month",
            AssessmentPeriod::Quarter => "quarter",
            AssessmentPeriod::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssessmentPeriod::Week => "本周",
            AssessmentPeriod::Month => "本月",
            AssessmentPeriod::Quarter => "本季度",
            AssessmentPeriod::Year => "本年度",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_chart_has_two_series_per_auditor() {
        let data = auditor_performance(&auditors());
        assert_eq!(data.labels, vec!["张三", "李四", "王五", "赵六", "钱七"]);
        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].values, vec![95.0, 88.0, 92.0, 85.0, 90.0]);
        assert_eq!(data.series[1].values, vec![85.0, 92.0, 78.0, 90.0, 82.0]);
    }

    #[test]
    fn correct_rate_is_derived() {
        let a = &auditors()[0];
        assert!((a.correct_rate() - 43.0 / 45.0 * 100.0).abs() < 1e-9);
        assert_eq!(a.avg_duration_label(), "1.5小时");
        assert_eq!(auditors()[1].avg_duration_label(), "2小时");
    }

    #[test]
    fn period_codes_round_trip() {
        assert_eq!(AssessmentPeriod::from_code("quarter"), Some(AssessmentPeriod::Quarter));
        assert_eq!(AssessmentPeriod::from_code("decade"), None);
        assert_eq!(AssessmentPeriod::default().label(), "本月");
    }
}
