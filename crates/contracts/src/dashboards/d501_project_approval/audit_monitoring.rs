use crate::dashboards::common::{
    entry, metric, share, timeline, LogEntry, Metric, Share, TimelineStep,
};
use crate::shared::chart::{palette_color, ChartData};
use crate::shared::format::percent_of;
use crate::shared::search::Searchable;
use crate::shared::status_filter::StatusTab;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Review workflow nodes in order
pub const AUDIT_NODES: [&str; 5] = ["初审", "技术评估", "财务审核", "专家评审", "领导审批"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuditStatus {
    Normal,
    Warning,
    Danger,
}

impl AuditStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AuditStatus::Normal => "正常",
            AuditStatus::Warning => "预警",
            AuditStatus::Danger => "异常",
        }
    }

    pub fn is_abnormal(&self) -> bool {
        matches!(self, AuditStatus::Warning | AuditStatus::Danger)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditProject {
    pub id: u32,
    pub name: &'static str,
    pub organization: &'static str,
    /// `YYYY-MM-DD HH:MM`
    pub submit_time: &'static str,
    pub current_node: &'static str,
    pub progress: u8,
    pub status: AuditStatus,
}

impl AuditProject {
    pub fn submit_date(&self) -> Option<NaiveDate> {
        NaiveDateTime::parse_from_str(self.submit_time, "%Y-%m-%d %H:%M")
            .ok()
            .map(|dt| dt.date())
    }

    pub fn is_in_progress(&self) -> bool {
        self.progress > 0 && self.progress < 100
    }

    pub fn is_completed(&self) -> bool {
        self.progress == 100
    }

    /// Workflow position derived from the current node
    pub fn timeline(&self) -> Vec<TimelineStep> {
        timeline(
            &AUDIT_NODES,
            self.current_node,
            &["2025-05-13", "2025-05-14", "2025-05-15", "2025-05-16"],
        )
    }
}

impl Searchable for AuditProject {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.organization, self.current_node]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditTab {
    All,
    InProgress,
    Completed,
    Abnormal,
}

impl StatusTab for AuditTab {
    type Record = AuditProject;

    const ALL: &'static [Self] = &[
        AuditTab::All,
        AuditTab::InProgress,
        AuditTab::Completed,
        AuditTab::Abnormal,
    ];

    fn id(&self) -> &'static str {
        match self {
            AuditTab::All => "all",
            AuditTab::InProgress => "inProgress",
            AuditTab::Completed => "completed",
            AuditTab::Abnormal => "abnormal",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AuditTab::All => "全部审核项目",
            AuditTab::InProgress => "在审项目",
            AuditTab::Completed => "已审项目",
            AuditTab::Abnormal => "异常审核项目",
        }
    }

    fn matches(&self, p: &AuditProject) -> bool {
        match self {
            AuditTab::All => true,
            AuditTab::InProgress => p.is_in_progress(),
            AuditTab::Completed => p.is_completed(),
            AuditTab::Abnormal => p.status.is_abnormal(),
        }
    }
}

/// Filter panel of the audit list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFilter {
    pub query: String,
    pub organization: Option<String>,
    pub node: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AuditFilter {
    pub fn matches(&self, p: &AuditProject) -> bool {
        if !p.matches_query(&self.query) {
            return false;
        }
        if let Some(org) = &self.organization {
            if p.organization != org.as_str() {
                return false;
            }
        }
        if let Some(node) = &self.node {
            if p.current_node != node.as_str() {
                return false;
            }
        }
        if self.from.is_some() || self.to.is_some() {
            let Some(date) = p.submit_date() else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) {
                return false;
            }
            if self.to.is_some_and(|to| date > to) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, projects: &[AuditProject]) -> Vec<AuditProject> {
        projects.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == AuditFilter::default()
    }
}

/// `<input type="date">` value; empty or malformed input means "no bound"
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Select value where `all` (or empty) means "any"
pub fn select_value(value: &str) -> Option<String> {
    match value {
        "" | "all" => None,
        other => Some(other.to_string()),
    }
}

pub fn audit_projects() -> Vec<AuditProject> {
    vec![
        AuditProject {
            id: 1,
            name: "城市基础设施改造项目",
            organization: "城市建设局",
            submit_time: "2025-05-15 09:30",
            current_node: "财务审核",
            progress: 65,
            status: AuditStatus::Normal,
        },
        AuditProject {
            id: 2,
            name: "智慧城市数据中心建设",
            organization: "信息技术局",
            submit_time: "2025-05-14 14:20",
            current_node: "技术评估",
            progress: 45,
            status: AuditStatus::Warning,
        },
        AuditProject {
            id: 3,
            name: "公共卫生服务中心扩建",
            organization: "卫生健康委员会",
            submit_time: "2025-05-13 11:15",
            current_node: "初审",
            progress: 25,
            status: AuditStatus::Normal,
        },
        AuditProject {
            id: 4,
            name: "城市绿化带改造工程",
            organization: "园林绿化局",
            submit_time: "2025-05-10 16:45",
            current_node: "专家评审",
            progress: 85,
            status: AuditStatus::Danger,
        },
        AuditProject {
            id: 5,
            name: "农村饮水安全工程",
            organization: "水利局",
            submit_time: "2025-05-08 10:30",
            current_node: "领导审批",
            progress: 95,
            status: AuditStatus::Normal,
        },
    ]
}

/// Distinct organizations in list order
pub fn organizations(projects: &[AuditProject]) -> Vec<&'static str> {
    let mut orgs: Vec<&'static str> = Vec::new();
    for p in projects {
        if !orgs.contains(&p.organization) {
            orgs.push(p.organization);
        }
    }
    orgs
}

pub fn review_opinions() -> Vec<LogEntry> {
    vec![
        entry(
            "张工 (初审)",
            "2025-05-13 11:30",
            "项目基本符合申报要求，建议进入下一阶段评审。",
        ),
        entry(
            "李工 (技术评估)",
            "2025-05-14 16:20",
            "技术方案可行，但建议加强对安全风险的评估。",
        ),
        entry(
            "王主任 (财务审核)",
            "2025-05-16 09:45",
            "预算编制合理，建议关注成本控制措施的落实。请项目组补充详细的资金使用计划。",
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedAudit {
    pub name: &'static str,
    pub organization: &'static str,
    pub submit_time: &'static str,
    pub finish_time: &'static str,
    pub duration_days: u32,
    pub passed: bool,
}

impl CompletedAudit {
    pub fn result_label(&self) -> &'static str {
        if self.passed {
            "已通过"
        } else {
            "未通过"
        }
    }
}

impl Searchable for CompletedAudit {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.organization]
    }
}

pub fn completed_audits() -> Vec<CompletedAudit> {
    vec![
        CompletedAudit {
            name: "城市公园绿化改造项目",
            organization: "市政园林局",
            submit_time: "2025-04-25 08:30",
            finish_time: "2025-05-10 14:20",
            duration_days: 15,
            passed: true,
        },
        CompletedAudit {
            name: "老旧小区改造提升工程",
            organization: "住建局",
            submit_time: "2025-04-18 13:45",
            finish_time: "2025-05-07 16:30",
            duration_days: 19,
            passed: true,
        },
        CompletedAudit {
            name: "城市废弃物循环利用项目",
            organization: "环保局",
            submit_time: "2025-04-12 09:15",
            finish_time: "2025-05-03 11:40",
            duration_days: 21,
            passed: false,
        },
    ]
}

pub fn completed_opinions() -> Vec<LogEntry> {
    vec![
        entry("赵工 (初审)", "2025-04-27 11:30", "项目材料完整，符合申报要求，建议进入下一阶段评审。"),
        entry("钱工 (技术评估)", "2025-05-02 14:20", "技术方案先进可行，植物选择适合本地气候，灌溉系统设计合理。"),
        entry("孙主任 (财务审核)", "2025-05-06 09:45", "预算编制合理，资金使用计划清晰，符合财务规范。"),
        entry("周教授 (专家评审)", "2025-05-09 10:30", "项目设计符合城市生态建设要求，绿化方案科学合理，建议通过。"),
        entry("吴局长 (领导审批)", "2025-05-10 14:20", "项目整体设计符合城市发展规划，各环节审核均已通过，同意立项。"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbnormalAudit {
    pub name: &'static str,
    pub organization: &'static str,
    pub kind: &'static str,
    /// Red badge when true, yellow otherwise
    pub severe: bool,
    pub found_at: &'static str,
    pub state: &'static str,
    pub handler: &'static str,
}

impl Searchable for AbnormalAudit {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.organization, self.kind]
    }
}

pub fn abnormal_audits() -> Vec<AbnormalAudit> {
    vec![
        AbnormalAudit {
            name: "城市绿化带改造工程",
            organization: "园林绿化局",
            kind: "审核超时",
            severe: true,
            found_at: "2025-05-12 10:30",
            state: "技术评估阶段超时15天",
            handler: "王工",
        },
        AbnormalAudit {
            name: "智慧交通系统升级项目",
            organization: "交通运输局",
            kind: "材料缺失",
            severe: false,
            found_at: "2025-05-14 15:45",
            state: "初审阶段发现材料不完整",
            handler: "张工",
        },
        AbnormalAudit {
            name: "城市供水管网更新项目",
            organization: "水务局",
            kind: "多次退回",
            severe: true,
            found_at: "2025-05-10 09:20",
            state: "技术方案被退回修改3次",
            handler: "刘工",
        },
    ]
}

pub fn abnormal_handling_log() -> Vec<LogEntry> {
    vec![
        entry("系统", "2025-04-28 00:00", "技术评估阶段已达到预警时间（10个工作日），系统自动提醒。"),
        entry("系统", "2025-05-02 00:00", "技术评估阶段已超时，系统自动提醒并标记为异常。"),
        entry("李主任", "2025-05-12 14:20", "已联系技术评估专家，对方因健康原因暂时无法完成评估工作，建议更换评估专家。"),
    ]
}

pub const DEFAULT_HANDLING_MEASURE: &str =
    "建议更换技术评估专家，并重新安排评估工作。已联系张教授接替评估工作，预计3个工作日内完成。";

pub fn abnormal_distribution() -> Vec<Share> {
    vec![
        share("审核超时", 45.0),
        share("材料缺失", 30.0),
        share("多次退回", 15.0),
        share("其他异常", 10.0),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandlingStatus {
    pub pending: u32,
    pub handled: u32,
}

impl HandlingStatus {
    pub fn rate(&self) -> f64 {
        percent_of(
            self.handled as f64,
            (self.pending + self.handled) as f64,
        )
    }
}

pub fn handling_status() -> HandlingStatus {
    HandlingStatus {
        pending: 8,
        handled: 12,
    }
}

pub fn handling_timeliness() -> Vec<Metric> {
    vec![
        metric("平均响应时间", "4.5小时"),
        metric("平均处理时间", "2.3天"),
        metric("超时处理比例", "15%"),
    ]
}

pub fn monthly_applications() -> ChartData {
    ChartData::new(&[
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ])
    .with_series(
        "项目申报数量",
        "#60a5fa",
        &[42.0, 38.0, 45.0, 56.0, 65.0, 58.0, 52.0, 48.0, 60.0, 68.0, 72.0, 63.0],
    )
}

pub fn node_durations() -> ChartData {
    ChartData::new(&AUDIT_NODES).with_series(
        "平均审核时长（天）",
        palette_color(0),
        &[2.0, 5.0, 3.0, 4.0, 1.0],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status_filter::{filter_by_tab, tab_counts};

    #[test]
    fn tab_counts_follow_progress_and_status() {
        let counts = tab_counts::<AuditTab>(&audit_projects());
        assert_eq!(
            counts,
            vec![
                (AuditTab::All, 5),
                (AuditTab::InProgress, 5),
                (AuditTab::Completed, 0),
                (AuditTab::Abnormal, 2),
            ]
        );
    }

    #[test]
    fn abnormal_tab_lists_warning_and_danger() {
        let names: Vec<&str> = filter_by_tab(&audit_projects(), AuditTab::Abnormal)
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["智慧城市数据中心建设", "城市绿化带改造工程"]);
    }

    #[test]
    fn filter_by_org_and_node() {
        let filter = AuditFilter {
            organization: select_value("信息技术局"),
            node: select_value("all"),
            ..Default::default()
        };
        let found = filter.apply(&audit_projects());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        let filter = AuditFilter {
            node: Some("领导审批".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&audit_projects())[0].id, 5);
    }

    #[test]
    fn filter_by_date_range_is_inclusive() {
        let filter = AuditFilter {
            from: parse_date_input("2025-05-10"),
            to: parse_date_input("2025-05-14"),
            ..Default::default()
        };
        let ids: Vec<u32> = filter.apply(&audit_projects()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = AuditFilter {
            from: parse_date_input(""),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&audit_projects()).len(), 5);
    }

    #[test]
    fn query_matches_name_fragment() {
        let filter = AuditFilter {
            query: "饮水".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&audit_projects())[0].id, 5);
    }

    #[test]
    fn timeline_marks_current_node() {
        let project = &audit_projects()[0];
        let steps = project.timeline();
        assert_eq!(steps[2].name, "财务审核");
        assert_eq!(steps[2].caption(), "进行中");
        assert_eq!(steps[1].caption(), "2025-05-14");
        assert_eq!(steps[4].caption(), "待处理");
    }

    #[test]
    fn organizations_are_distinct() {
        assert_eq!(organizations(&audit_projects()).len(), 5);
    }

    #[test]
    fn handling_rate_is_sixty_percent() {
        assert!((handling_status().rate() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn abnormal_distribution_sums_to_hundred() {
        let total: f64 = abnormal_distribution().iter().map(|s| s.percent).sum();
        assert_eq!(total, 100.0);
    }
}
