use crate::dashboards::common::{entry, metric, share, LogEntry, Metric, Share};
use crate::shared::search::Searchable;
use crate::shared::status_filter::StatusTab;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackStatus {
    Open,
    Processing,
    Done,
}

impl FeedbackStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStatus::Open => "未处理",
            FeedbackStatus::Processing => "处理中",
            FeedbackStatus::Done => "已处理",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum FeedbackPriority {
    Low,
    Medium,
    High,
}

impl FeedbackPriority {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackPriority::Low => "低",
            FeedbackPriority::Medium => "中",
            FeedbackPriority::High => "高",
        }
    }

    /// Processing deadline
    pub fn time_limit(&self) -> &'static str {
        match self {
            FeedbackPriority::High => "24小时内",
            FeedbackPriority::Medium => "48小时内",
            FeedbackPriority::Low => "72小时内",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub id: u32,
    pub content: &'static str,
    pub project: &'static str,
    pub submitter: &'static str,
    pub submit_time: &'static str,
    pub priority: FeedbackPriority,
    pub status: FeedbackStatus,
}

impl Feedback {
    pub fn handler(&self) -> &'static str {
        match self.status {
            FeedbackStatus::Open => "-",
            _ => "张工",
        }
    }

    pub fn remaining_time(&self) -> &'static str {
        match self.status {
            FeedbackStatus::Done => "已完成",
            FeedbackStatus::Processing => "12小时",
            FeedbackStatus::Open => "24小时",
        }
    }

    /// Progress notes, empty while nobody picked the item up
    pub fn progress_log(&self) -> Vec<LogEntry> {
        let mut log = Vec::new();
        if self.status != FeedbackStatus::Open {
            log.push(entry(
                "张工",
                "2025-05-15 14:30",
                "已安排工作人员前往现场查看情况，初步判断是路面沉降导致的问题。",
            ));
        }
        if self.status == FeedbackStatus::Done {
            log.push(entry(
                "李工",
                "2025-05-16 10:15",
                "已完成路面修复工作，恢复平整度，并进行了排水系统疏通，解决了积水问题。",
            ));
        }
        log
    }

    /// Row action next to "查看详情"
    pub fn quick_action(&self) -> Option<&'static str> {
        match self.status {
            FeedbackStatus::Open => Some("处理"),
            FeedbackStatus::Processing => Some("催促处理"),
            FeedbackStatus::Done => None,
        }
    }

    /// Primary action of the detail dialog
    pub fn dialog_action(&self) -> Option<&'static str> {
        match self.status {
            FeedbackStatus::Open => Some("分配处理"),
            FeedbackStatus::Processing => Some("更新进展"),
            FeedbackStatus::Done => None,
        }
    }

    pub fn can_reply(&self) -> bool {
        self.status != FeedbackStatus::Done
    }
}

impl Searchable for Feedback {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.content, self.project, self.submitter]
    }
}

pub const FEEDBACK_LOCATION: &str =
    "具体位置：东部片区主干道与支路交叉口，路面有明显凹凸不平现象，雨天积水严重。";

pub fn feedbacks() -> Vec<Feedback> {
    vec![
        Feedback {
            id: 1,
            content: "道路施工后路面不平整，影响行车安全",
            project: "城市基础设施改造项目",
            submitter: "市民张先生",
            submit_time: "2025-05-15 10:30",
            priority: FeedbackPriority::High,
            status: FeedbackStatus::Processing,
        },
        Feedback {
            id: 2,
            content: "数据中心系统偶尔出现卡顿现象",
            project: "智慧城市数据中心建设",
            submitter: "信息部李主任",
            submit_time: "2025-05-14 14:20",
            priority: FeedbackPriority::Medium,
            status: FeedbackStatus::Done,
        },
        Feedback {
            id: 3,
            content: "医疗设备使用说明不够详细，建议完善",
            project: "公共卫生服务中心扩建",
            submitter: "医院王医生",
            submit_time: "2025-05-13 11:15",
            priority: FeedbackPriority::Low,
            status: FeedbackStatus::Done,
        },
        Feedback {
            id: 4,
            content: "排水系统在大雨天气下排水不畅",
            project: "城市基础设施改造项目",
            submitter: "市民赵女士",
            submit_time: "2025-05-10 16:45",
            priority: FeedbackPriority::High,
            status: FeedbackStatus::Open,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTab {
    All,
    Pending,
    Processing,
    Done,
}

impl StatusTab for FeedbackTab {
    type Record = Feedback;

    const ALL: &'static [Self] = &[
        FeedbackTab::All,
        FeedbackTab::Pending,
        FeedbackTab::Processing,
        FeedbackTab::Done,
    ];

    fn id(&self) -> &'static str {
        match self {
            FeedbackTab::All => "all",
            FeedbackTab::Pending => "pending",
            FeedbackTab::Processing => "processing",
            FeedbackTab::Done => "done",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FeedbackTab::All => "全部反馈",
            FeedbackTab::Pending => "未处理",
            FeedbackTab::Processing => "处理中",
            FeedbackTab::Done => "已处理",
        }
    }

    fn matches(&self, feedback: &Feedback) -> bool {
        match self {
            FeedbackTab::All => true,
            FeedbackTab::Pending => feedback.status == FeedbackStatus::Open,
            FeedbackTab::Processing => feedback.status == FeedbackStatus::Processing,
            FeedbackTab::Done => feedback.status == FeedbackStatus::Done,
        }
    }
}

pub fn summary_cards() -> Vec<Metric> {
    vec![
        metric("今日反馈", "12"),
        metric("待处理", "8"),
        metric("处理中", "3"),
        metric("处理率", "85%"),
    ]
}

pub fn feedback_types() -> Vec<Share> {
    vec![
        share("质量问题", 45.0),
        share("功能建议", 30.0),
        share("使用问题", 15.0),
        share("其他", 10.0),
    ]
}

pub fn handling_efficiency() -> Vec<Metric> {
    vec![
        metric("平均响应时间", "2.5小时"),
        metric("平均处理时间", "18小时"),
        metric("按时处理率", "92%"),
    ]
}

/// Satisfaction score out of five
pub const SATISFACTION_SCORE: f64 = 4.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status_filter::{filter_by_tab, tab_counts};

    #[test]
    fn tabs_follow_status() {
        let counts: Vec<usize> = tab_counts::<FeedbackTab>(&feedbacks())
            .into_iter()
            .map(|(_, n)| n)
            .collect();
        assert_eq!(counts, vec![4, 1, 1, 2]);
        let pending = filter_by_tab(&feedbacks(), FeedbackTab::Pending);
        assert_eq!(pending[0].submitter, "市民赵女士");
    }

    #[test]
    fn progress_log_grows_with_status() {
        let items = feedbacks();
        assert_eq!(items[3].progress_log().len(), 0);
        assert_eq!(items[0].progress_log().len(), 1);
        assert_eq!(items[1].progress_log().len(), 2);
    }

    #[test]
    fn actions_by_status() {
        let items = feedbacks();
        assert_eq!(items[3].quick_action(), Some("处理"));
        assert_eq!(items[0].dialog_action(), Some("更新进展"));
        assert!(!items[1].can_reply());
        assert_eq!(items[1].handler(), "张工");
        assert_eq!(items[3].handler(), "-");
    }

    #[test]
    fn deadline_follows_priority() {
        assert_eq!(FeedbackPriority::High.time_limit(), "24小时内");
        assert_eq!(FeedbackPriority::Low.time_limit(), "72小时内");
    }

    #[test]
    fn type_shares_sum_to_whole() {
        let total: f64 = feedback_types().iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
