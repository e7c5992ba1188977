use crate::shared::chart::ChartData;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityMetrics {
    pub risk_score: u32,
    pub abnormal_transactions: u32,
    pub security_level: &'static str,
    pub last_scan: &'static str,
}

impl SecurityMetrics {
    pub fn last_scan_date(&self) -> &'static str {
        self.last_scan.split(' ').next().unwrap_or(self.last_scan)
    }
}

pub fn security_metrics() -> SecurityMetrics {
    SecurityMetrics {
        risk_score: 15,
        abnormal_transactions: 3,
        security_level: "安全",
        last_scan: "2025-05-20 08:30",
    }
}

/// Period select of the risk monitoring chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitoringPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl MonitoringPeriod {
    pub const ALL: [MonitoringPeriod; 4] = [
        MonitoringPeriod::Week,
        MonitoringPeriod::Month,
        MonitoringPeriod::Quarter,
        MonitoringPeriod::Year,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MonitoringPeriod::Week => "week",
            MonitoringPeriod::Month => "month",
            MonitoringPeriod::Quarter => "quarter",
            MonitoringPeriod::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MonitoringPeriod::Week => "本周",
            MonitoringPeriod::Month => "本月",
            MonitoringPeriod::Quarter => "本季度",
            MonitoringPeriod::Year => "本年度",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

pub fn risk_monitoring() -> ChartData {
    ChartData::new(&["1月", "2月", "3月", "4月", "5月"])
        .with_series("风险评分", "#ef4444", &[25.0, 22.0, 18.0, 20.0, 15.0])
        .with_series("异常交易数", "#f59e0b", &[8.0, 6.0, 5.0, 4.0, 3.0])
}

pub fn risk_summary(metrics: &SecurityMetrics) -> String {
    format!(
        "当前风险评分为{}分，处于安全范围内。近期风险评分呈下降趋势，异常交易数量减少，资金安全状况持续改善。",
        metrics.risk_score
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AlertLevel {
    Medium,
    High,
}

impl AlertLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::Medium => "中",
            AlertLevel::High => "高",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAlert {
    pub id: u32,
    pub kind: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub level: AlertLevel,
    pub resolved: bool,
}

impl RiskAlert {
    pub fn status_label(&self) -> &'static str {
        if self.resolved {
            "已处理"
        } else {
            "处理中"
        }
    }
}

pub fn risk_alerts() -> Vec<RiskAlert> {
    vec![
        RiskAlert {
            id: 1,
            kind: "异常交易",
            description: "检测到短时间内多笔大额资金转出",
            time: "2025-05-18 14:30",
            level: AlertLevel::High,
            resolved: true,
        },
        RiskAlert {
            id: 2,
            kind: "权限异常",
            description: "非授权人员尝试访问资金管理系统",
            time: "2025-05-17 09:45",
            level: AlertLevel::High,
            resolved: true,
        },
        RiskAlert {
            id: 3,
            kind: "系统漏洞",
            description: "资金管理系统存在安全漏洞",
            time: "2025-05-15 16:20",
            level: AlertLevel::Medium,
            resolved: false,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckFrequency {
    Daily,
    Realtime,
    Weekly,
    Monthly,
}

impl CheckFrequency {
    pub fn label(&self) -> &'static str {
        match self {
            CheckFrequency::Daily => "每日",
            CheckFrequency::Realtime => "实时",
            CheckFrequency::Weekly => "每周",
            CheckFrequency::Monthly => "每月",
        }
    }

    pub fn next_check(&self) -> &'static str {
        match self {
            CheckFrequency::Daily => "2025-05-21",
            CheckFrequency::Weekly => "2025-05-22",
            _ => "2025-06-10",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecurityCheck {
    pub id: u32,
    pub name: &'static str,
    pub last_check: &'static str,
    pub frequency: CheckFrequency,
    /// Found problem, `None` when the check passed
    pub issue: Option<&'static str>,
    pub scope: &'static str,
}

impl SecurityCheck {
    pub fn passed(&self) -> bool {
        self.issue.is_none()
    }

    pub fn result_label(&self) -> &'static str {
        if self.passed() {
            "正常"
        } else {
            "发现风险"
        }
    }
}

pub const CHECK_METHOD: &str = "自动化扫描";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationForm {
    pub measures: String,
    pub owner: String,
    pub due_date: String,
}

impl Default for RemediationForm {
    fn default() -> Self {
        Self {
            measures: "已安排技术团队修复发现的安全漏洞，预计3个工作日内完成修复。".to_string(),
            owner: "张工".to_string(),
            due_date: "2025-05-23".to_string(),
        }
    }
}

pub fn security_checks() -> Vec<SecurityCheck> {
    vec![
        SecurityCheck {
            id: 1,
            name: "资金账户安全检查",
            last_check: "2025-05-20",
            frequency: CheckFrequency::Daily,
            issue: None,
            scope: "检查资金账户的访问权限、操作日志和异常交易记录，确保资金账户安全。",
        },
        SecurityCheck {
            id: 2,
            name: "交易行为异常检测",
            last_check: "2025-05-20",
            frequency: CheckFrequency::Realtime,
            issue: None,
            scope: "通过AI算法分析交易行为模式，识别可能的异常交易行为。",
        },
        SecurityCheck {
            id: 3,
            name: "权限管理审计",
            last_check: "2025-05-15",
            frequency: CheckFrequency::Weekly,
            issue: None,
            scope: "审计系统用户权限设置，确保权限分配合理，无越权操作风险。",
        },
        SecurityCheck {
            id: 4,
            name: "系统安全漏洞扫描",
            last_check: "2025-05-10",
            frequency: CheckFrequency::Monthly,
            issue: Some("发现2个中危漏洞"),
            scope: "扫描系统潜在安全漏洞，及时发现并修复安全隐患。",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProtectionMeasure {
    pub title: &'static str,
    pub description: &'static str,
    pub caption: &'static str,
    pub value: &'static str,
}

pub fn protection_measures() -> Vec<ProtectionMeasure> {
    vec![
        ProtectionMeasure {
            title: "多因素认证",
            description: "已为所有资金管理系统用户启用多因素认证，提高账户安全性。",
            caption: "覆盖率",
            value: "100%",
        },
        ProtectionMeasure {
            title: "交易监控系统",
            description: "实时监控所有资金交易，自动识别异常交易行为并发出预警。",
            caption: "运行状态",
            value: "正常",
        },
        ProtectionMeasure {
            title: "权限分级管理",
            description: "实施严格的权限分级管理，确保资金操作权限合理分配，防止越权操作。",
            caption: "最近审计",
            value: "2025-05-15",
        },
        ProtectionMeasure {
            title: "数据加密存储",
            description: "所有资金数据采用高强度加密存储，防止数据泄露风险。",
            caption: "加密强度",
            value: "AES-256",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Training {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub completed: bool,
}

impl Training {
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "已完成"
        } else {
            "计划中"
        }
    }

    pub fn date_caption(&self) -> &'static str {
        if self.completed {
            "培训时间"
        } else {
            "计划时间"
        }
    }
}

pub fn trainings() -> Vec<Training> {
    vec![
        Training {
            title: "资金安全意识培训",
            description: "为所有财务人员开展资金安全意识培训，提高安全防范意识。",
            date: "2025-04-15",
            completed: true,
        },
        Training {
            title: "资金安全应急演练",
            description: "组织开展资金安全应急演练，提高应对资金安全事件的能力。",
            date: "2025-04-25",
            completed: true,
        },
        Training {
            title: "安全操作规范培训",
            description: "计划开展资金操作安全规范培训，确保操作人员严格遵守安全规范。",
            date: "2025-06-15",
            completed: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_scan_shows_date_only() {
        assert_eq!(security_metrics().last_scan_date(), "2025-05-20");
    }

    #[test]
    fn only_vulnerability_scan_found_risk() {
        let failed: Vec<&str> = security_checks()
            .iter()
            .filter(|c| !c.passed())
            .map(|c| c.name)
            .collect();
        assert_eq!(failed, vec!["系统安全漏洞扫描"]);
        assert_eq!(security_checks()[3].result_label(), "发现风险");
    }

    #[test]
    fn next_check_by_frequency() {
        assert_eq!(CheckFrequency::Daily.next_check(), "2025-05-21");
        assert_eq!(CheckFrequency::Weekly.next_check(), "2025-05-22");
        assert_eq!(CheckFrequency::Realtime.next_check(), "2025-06-10");
    }

    #[test]
    fn unresolved_alerts() {
        let open: Vec<u32> = risk_alerts().iter().filter(|a| !a.resolved).map(|a| a.id).collect();
        assert_eq!(open, vec![3]);
    }

    #[test]
    fn period_codes_round_trip_through_select() {
        for period in MonitoringPeriod::ALL {
            assert_eq!(MonitoringPeriod::from_code(period.code()), Some(period));
        }
        assert_eq!(MonitoringPeriod::default().label(), "本月");
    }

    #[test]
    fn summary_mentions_score() {
        assert!(risk_summary(&security_metrics()).contains("15分"));
    }
}
