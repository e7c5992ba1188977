use crate::shared::chart::ChartData;
use crate::shared::format::percent_of;
use crate::shared::search::Searchable;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityGoal {
    pub id: u32,
    pub indicator: &'static str,
    pub project: &'static str,
    pub target: &'static str,
    pub actual: &'static str,
    /// Numeric target/actual for the comparison chart
    pub target_value: f64,
    pub actual_value: f64,
    pub achieved: bool,
}

impl QualityGoal {
    pub fn state_label(&self) -> &'static str {
        if self.achieved {
            "已达成"
        } else {
            "未达成"
        }
    }

    pub fn explanation(&self) -> String {
        if self.achieved {
            format!(
                "{}指标已达到预期目标，实际测量值为{}，超过目标值{}。",
                self.indicator, self.actual, self.target
            )
        } else {
            format!(
                "{}指标未达到预期目标，实际测量值为{}，低于目标值{}。",
                self.indicator, self.actual, self.target
            )
        }
    }
}

impl Searchable for QualityGoal {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.indicator, self.project]
    }
}

pub fn quality_goals() -> Vec<QualityGoal> {
    let goal = |id, indicator, project, target, actual, target_value, actual_value, achieved| {
        QualityGoal {
            id,
            indicator,
            project,
            target,
            actual,
            target_value,
            actual_value,
            achieved,
        }
    };
    vec![
        goal(1, "道路平整度", "城市基础设施改造项目", "≥95%", "97%", 95.0, 97.0, true),
        goal(2, "排水系统畅通率", "城市基础设施改造项目", "100%", "98%", 100.0, 98.0, false),
        goal(3, "系统响应时间", "智慧城市数据中心建设", "≤200ms", "180ms", 200.0, 180.0, true),
        goal(4, "系统可用性", "智慧城市数据中心建设", "≥99.9%", "99.95%", 99.9, 99.95, true),
        goal(5, "医疗设备合格率", "公共卫生服务中心扩建", "100%", "100%", 100.0, 100.0, true),
    ]
}

pub fn goal_comparison(goals: &[QualityGoal]) -> ChartData {
    let labels: Vec<&'static str> = goals.iter().map(|g| g.indicator).collect();
    let targets: Vec<f64> = goals.iter().map(|g| g.target_value).collect();
    let actuals: Vec<f64> = goals.iter().map(|g| g.actual_value).collect();
    ChartData::new(&labels)
        .with_series("目标值", "#3b82f6", &targets)
        .with_series("实际值", "#14b8a6", &actuals)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementSummary {
    pub total: usize,
    pub achieved: usize,
}

impl AchievementSummary {
    pub fn from_goals(goals: &[QualityGoal]) -> Self {
        Self {
            total: goals.len(),
            achieved: goals.iter().filter(|g| g.achieved).count(),
        }
    }

    pub fn missed(&self) -> usize {
        self.total - self.achieved
    }

    pub fn rate(&self) -> f64 {
        percent_of(self.achieved as f64, self.total as f64)
    }
}

/// Evaluation block of the goal detail dialog
pub const EVALUATOR: &str = "张工";
pub const EVALUATION_DATE: &str = "2025-05-15";
pub const EVALUATION_METHOD: &str = "现场测量";
pub const EVALUATION_SOURCE: &str = "实地检测报告";

pub const MISS_ANALYSIS: &str = "未达成原因分析：部分区域排水管道连接处存在轻微堵塞，影响了整体畅通率。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImprovementForm {
    pub measures: String,
    pub owner: String,
    pub due_date: String,
}

impl Default for ImprovementForm {
    fn default() -> Self {
        Self {
            measures: "1. 对排水系统进行全面检查，清理堵塞点；\n2. 加强日常维护，定期清理排水管道；\n3. 优化排水系统设计，增加检修口，方便后期维护。".to_string(),
            owner: "李工".to_string(),
            due_date: "2025-06-15".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectRating {
    pub project: &'static str,
    pub score: f64,
}

impl ProjectRating {
    /// Filled stars out of five
    pub fn stars(&self) -> usize {
        self.score.round().clamp(0.0, 5.0) as usize
    }

    pub fn grade(&self) -> &'static str {
        if self.score >= 4.5 {
            "优秀"
        } else if self.score >= 3.5 {
            "良好"
        } else if self.score >= 2.5 {
            "合格"
        } else {
            "较差"
        }
    }
}

pub fn project_ratings() -> Vec<ProjectRating> {
    vec![
        ProjectRating {
            project: "城市基础设施改造项目",
            score: 4.0,
        },
        ProjectRating {
            project: "智慧城市数据中心建设",
            score: 5.0,
        },
        ProjectRating {
            project: "公共卫生服务中心扩建",
            score: 5.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_is_derived() {
        let summary = AchievementSummary::from_goals(&quality_goals());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.achieved, 4);
        assert_eq!(summary.missed(), 1);
        assert!((summary.rate() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn empty_goal_list_has_zero_rate() {
        let summary = AchievementSummary::from_goals(&[]);
        assert_eq!(summary.rate(), 0.0);
    }

    #[test]
    fn explanation_depends_on_outcome() {
        let goals = quality_goals();
        assert!(goals[0].explanation().contains("超过目标值≥95%"));
        assert!(goals[1].explanation().contains("低于目标值100%"));
    }

    #[test]
    fn ratings_map_to_grades() {
        let grades: Vec<(&str, usize)> = project_ratings()
            .iter()
            .map(|r| (r.grade(), r.stars()))
            .collect();
        assert_eq!(grades, vec![("良好", 4), ("优秀", 5), ("优秀", 5)]);
    }

    #[test]
    fn comparison_chart_has_two_series() {
        let chart = goal_comparison(&quality_goals());
        assert_eq!(chart.labels.len(), 5);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].values[2], 200.0);
    }
}
