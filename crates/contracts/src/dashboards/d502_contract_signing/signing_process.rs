use crate::dashboards::common::{
    entry, metric, share, timeline, LogEntry, Metric, Severity, Share, TimelineStep,
};
use crate::shared::chart::ChartData;
use crate::shared::search::Searchable;
use serde::Serialize;

pub const SIGNING_STEPS: [&str; 5] = ["合同发起", "合同起草", "双方审核", "电子签名", "签订完成"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SigningStatus {
    Reviewing,
    Signing,
    Completed,
    Abnormal,
}

impl SigningStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SigningStatus::Reviewing => "审核中",
            SigningStatus::Signing => "签署中",
            SigningStatus::Completed => "已完成",
            SigningStatus::Abnormal => "异常",
        }
    }

    /// Action offered in the detail dialog
    pub fn action(&self) -> Option<&'static str> {
        match self {
            SigningStatus::Reviewing => Some("提交审核意见"),
            SigningStatus::Signing => Some("进行电子签名"),
            SigningStatus::Abnormal => Some("处理异常"),
            SigningStatus::Completed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SigningContract {
    pub id: u32,
    pub name: &'static str,
    pub parties: &'static str,
    pub status: SigningStatus,
    pub current_step: &'static str,
    pub time: &'static str,
    pub abnormal_reason: Option<&'static str>,
}

impl SigningContract {
    pub fn timeline(&self) -> Vec<TimelineStep> {
        let current = if self.status == SigningStatus::Completed {
            ""
        } else {
            self.current_step
        };
        timeline(
            &SIGNING_STEPS,
            current,
            &["2025-05-10", "2025-05-12", "2025-05-14", "2025-05-15", "2025-05-15"],
        )
    }
}

impl Searchable for SigningContract {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.parties]
    }
}

pub fn signing_contracts() -> Vec<SigningContract> {
    vec![
        SigningContract {
            id: 1,
            name: "城市基础设施改造项目合同",
            parties: "市政府城市管理局 - 城市建设有限公司",
            status: SigningStatus::Reviewing,
            current_step: "双方审核",
            time: "2025-05-15 10:30",
            abnormal_reason: None,
        },
        SigningContract {
            id: 2,
            name: "智慧城市数据中心建设合同",
            parties: "信息技术局 - 科技信息有限公司",
            status: SigningStatus::Signing,
            current_step: "电子签名",
            time: "2025-05-14 14:20",
            abnormal_reason: None,
        },
        SigningContract {
            id: 3,
            name: "公共卫生服务中心设备采购合同",
            parties: "卫生健康委员会 - 医疗设备有限公司",
            status: SigningStatus::Completed,
            current_step: "签订完成",
            time: "2025-05-13 11:15",
            abnormal_reason: None,
        },
        SigningContract {
            id: 4,
            name: "城市绿化带改造工程合同",
            parties: "园林绿化局 - 园林绿化有限公司",
            status: SigningStatus::Abnormal,
            current_step: "双方审核",
            time: "2025-05-10 16:45",
            abnormal_reason: Some("合同条款多次修改"),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SigningStats {
    pub today: u32,
    pub week: u32,
    pub month: u32,
    pub abnormal_rate: f64,
}

pub fn signing_stats() -> SigningStats {
    SigningStats {
        today: 12,
        week: 68,
        month: 245,
        abnormal_rate: 5.2,
    }
}

pub fn operation_log() -> Vec<LogEntry> {
    vec![
        entry("张经理 (甲方)", "2025-05-12 11:30", "提交合同初稿"),
        entry("李总 (乙方)", "2025-05-13 16:20", "提出修改意见，要求调整付款条件"),
        entry("张经理 (甲方)", "2025-05-14 09:45", "接受修改意见，更新合同条款"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbnormalRecord {
    pub contract: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

pub fn abnormal_records() -> Vec<AbnormalRecord> {
    vec![
        AbnormalRecord {
            contract: "城市绿化带改造工程合同",
            date: "2025-05-10",
            description: "合同条款多次修改，已超过系统预警阈值",
            severity: Severity::High,
        },
        AbnormalRecord {
            contract: "智慧城市数据中心建设合同",
            date: "2025-05-14",
            description: "电子签名流程延迟，已超过24小时未完成",
            severity: Severity::Medium,
        },
        AbnormalRecord {
            contract: "城市供水管网更新项目合同",
            date: "2025-05-16",
            description: "合同审核时间已超过预期，请及时跟进",
            severity: Severity::Low,
        },
    ]
}

pub fn signing_trend() -> ChartData {
    ChartData::new(&["1月", "2月", "3月", "4月", "5月"])
        .with_series("合同签订数量", "#3b82f6", &[65.0, 78.0, 52.0, 91.0, 85.0])
        .with_series("异常合同数量", "#ef4444", &[5.0, 7.0, 3.0, 6.0, 4.0])
}

pub fn type_distribution() -> Vec<Share> {
    vec![
        share("工程合同", 45.0),
        share("技术服务合同", 25.0),
        share("采购合同", 20.0),
        share("其他合同", 10.0),
    ]
}

pub fn efficiency() -> Vec<Metric> {
    vec![
        metric("平均签订周期", "7.5天"),
        metric("最长签订周期", "21天"),
        metric("最短签订周期", "2天"),
        metric("按时完成率", "85%"),
    ]
}

pub fn signing_methods() -> Vec<Share> {
    vec![
        share("电子签名", 65.0),
        share("线下签署", 30.0),
        share("混合方式", 5.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::common::StepState;

    #[test]
    fn signing_stats_keep_fractional_abnormal_rate() {
        let stats = signing_stats();
        assert_eq!(stats, stats);
        assert_eq!((stats.today, stats.week, stats.month), (12, 68, 245));
        assert!((stats.abnormal_rate - 5.2).abs() < 1e-9);
    }

    #[test]
    fn actions_depend_on_status() {
        let actions: Vec<Option<&str>> = signing_contracts()
            .iter()
            .map(|c| c.status.action())
            .collect();
        assert_eq!(
            actions,
            vec![Some("提交审核意见"), Some("进行电子签名"), None, Some("处理异常")]
        );
    }

    #[test]
    fn only_abnormal_contract_has_reason() {
        let with_reason: Vec<u32> = signing_contracts()
            .iter()
            .filter(|c| c.abnormal_reason.is_some())
            .map(|c| c.id)
            .collect();
        assert_eq!(with_reason, vec![4]);
    }

    #[test]
    fn completed_contract_timeline_is_done() {
        let completed = &signing_contracts()[2];
        assert!(completed.timeline().iter().all(|s| s.state == StepState::Done));

        let reviewing = &signing_contracts()[0];
        assert_eq!(reviewing.timeline()[2].state, StepState::Current);
    }

    #[test]
    fn trend_has_two_series() {
        let trend = signing_trend();
        assert_eq!(trend.series.len(), 2);
        assert_eq!(trend.max_value(), 91.0);
    }
}
