use crate::shared::chart::ChartData;
use crate::shared::search::Searchable;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressStatus {
    Normal,
    Warning,
    Danger,
}

impl ProgressStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStatus::Normal => "正常",
            ProgressStatus::Warning => "警告",
            ProgressStatus::Danger => "严重",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: u32,
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub plan_progress: u8,
    pub actual_progress: u8,
}

impl Task {
    /// Percentage points behind plan, `None` when on or ahead of schedule
    pub fn lag(&self) -> Option<u8> {
        (self.plan_progress > 0 && self.actual_progress < self.plan_progress)
            .then(|| self.plan_progress - self.actual_progress)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledProject {
    pub id: u32,
    pub name: &'static str,
    pub organization: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub tasks: Vec<Task>,
    pub status: ProgressStatus,
}

impl ScheduledProject {
    /// Task with the largest lag
    pub fn worst_task(&self) -> Option<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.lag().is_some())
            .max_by_key(|t| t.lag())
    }
}

impl Searchable for ScheduledProject {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.organization]
    }
}

fn task(
    id: u32,
    name: &'static str,
    start: &'static str,
    end: &'static str,
    plan_progress: u8,
    actual_progress: u8,
) -> Task {
    Task {
        id,
        name,
        start,
        end,
        plan_progress,
        actual_progress,
    }
}

pub fn scheduled_projects() -> Vec<ScheduledProject> {
    vec![
        ScheduledProject {
            id: 1,
            name: "城市基础设施改造项目",
            organization: "城市建设局",
            start_date: "2025-01-15",
            end_date: "2025-12-31",
            tasks: vec![
                task(1, "前期调研", "2025-01-15", "2025-02-28", 100, 100),
                task(2, "方案设计", "2025-03-01", "2025-04-15", 100, 90),
                task(3, "施工准备", "2025-04-16", "2025-05-31", 80, 60),
                task(4, "主体施工", "2025-06-01", "2025-10-31", 30, 20),
                task(5, "验收交付", "2025-11-01", "2025-12-31", 0, 0),
            ],
            status: ProgressStatus::Warning,
        },
        ScheduledProject {
            id: 2,
            name: "智慧城市数据中心建设",
            organization: "信息技术局",
            start_date: "2025-02-01",
            end_date: "2025-11-30",
            tasks: vec![
                task(1, "需求分析", "2025-02-01", "2025-03-15", 100, 100),
                task(2, "系统设计", "2025-03-16", "2025-05-15", 100, 100),
                task(3, "开发实施", "2025-05-16", "2025-09-30", 60, 65),
                task(4, "测试验收", "2025-10-01", "2025-11-30", 0, 0),
            ],
            status: ProgressStatus::Normal,
        },
    ]
}

pub fn lag_reasons() -> Vec<&'static str> {
    vec![
        "材料采购延迟，部分关键材料尚未到位",
        "施工许可证办理流程耗时超出预期",
        "现场准备工作受天气影响进展缓慢",
    ]
}

/// Defaults of the deviation handling form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviationForm {
    pub measure: String,
    pub owner: String,
    pub due_date: String,
}

impl Default for DeviationForm {
    fn default() -> Self {
        Self {
            measure: "加快材料采购流程，协调相关部门加速许可证办理".to_string(),
            owner: "张工".to_string(),
            due_date: "2025-06-10".to_string(),
        }
    }
}

pub fn progress_statistics() -> ChartData {
    ChartData::new(&[
        "城市基础设施改造项目",
        "智慧城市数据中心建设",
        "公共卫生服务中心扩建",
        "城市绿化带改造工程",
    ])
    .with_series("计划进度", "#3b82f6", &[65.0, 70.0, 45.0, 85.0])
    .with_series("实际进度", "#14b8a6", &[55.0, 72.0, 40.0, 80.0])
}

pub fn deviation_trend() -> ChartData {
    ChartData::new(&["1月", "2月", "3月", "4月", "5月"]).with_series(
        "平均进度偏差率",
        "#ef4444",
        &[2.0, 5.0, 8.0, 12.0, 10.0],
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressAnomaly {
    pub project: &'static str,
    pub organization: &'static str,
    pub plan: u8,
    pub actual: u8,
    pub reason: &'static str,
    pub handled: bool,
}

impl ProgressAnomaly {
    pub fn deviation(&self) -> i32 {
        self.actual as i32 - self.plan as i32
    }

    pub fn state_label(&self) -> &'static str {
        if self.handled {
            "已处理"
        } else {
            "处理中"
        }
    }
}

pub fn progress_anomalies() -> Vec<ProgressAnomaly> {
    vec![
        ProgressAnomaly {
            project: "城市基础设施改造项目",
            organization: "城市建设局",
            plan: 65,
            actual: 55,
            reason: "材料采购延迟",
            handled: false,
        },
        ProgressAnomaly {
            project: "公共卫生服务中心扩建",
            organization: "卫生健康委员会",
            plan: 45,
            actual: 40,
            reason: "人力资源不足",
            handled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lag_only_for_tasks_behind_plan() {
        let project = &scheduled_projects()[0];
        let lags: Vec<Option<u8>> = project.tasks.iter().map(|t| t.lag()).collect();
        assert_eq!(lags, vec![None, Some(10), Some(20), Some(10), None]);

        let ahead = &scheduled_projects()[1].tasks[2];
        assert_eq!(ahead.lag(), None);
    }

    #[test]
    fn worst_task_is_preparation() {
        let projects = scheduled_projects();
        assert_eq!(projects[0].worst_task().map(|t| t.name), Some("施工准备"));
        assert!(projects[1].worst_task().is_none());
    }

    #[test]
    fn anomaly_deviation_is_negative() {
        let devs: Vec<i32> = progress_anomalies().iter().map(|a| a.deviation()).collect();
        assert_eq!(devs, vec![-10, -5]);
    }
}
