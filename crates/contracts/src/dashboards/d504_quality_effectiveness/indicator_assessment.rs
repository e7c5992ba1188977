use crate::shared::format::percent_of;
use crate::shared::search::Searchable;
use crate::shared::status_filter::{count_for, StatusTab};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReviewState {
    Reviewed,
    Reviewing,
    Abnormal,
}

impl ReviewState {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewState::Reviewed => "已审核",
            ReviewState::Reviewing => "审核中",
            ReviewState::Abnormal => "异常",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataSource {
    FieldMeasurement,
    FieldTest,
    SystemMonitoring,
    SystemLog,
    DeviceInspection,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::FieldMeasurement => "实地测量",
            DataSource::FieldTest => "实地测试",
            DataSource::SystemMonitoring => "系统监控",
            DataSource::SystemLog => "系统日志",
            DataSource::DeviceInspection => "设备检测",
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            DataSource::FieldMeasurement => "专业设备测量",
            DataSource::SystemMonitoring => "自动监控记录",
            _ => "人工检测",
        }
    }

    pub fn process(&self) -> &'static str {
        match self {
            DataSource::FieldMeasurement => {
                "使用专业测量设备，在项目区域内随机选取10个点位进行测量，取平均值作为最终结果。"
            }
            DataSource::SystemMonitoring => {
                "通过系统监控工具，连续24小时监测系统响应时间，取平均值作为最终结果。"
            }
            _ => "对所有医疗设备进行全面检测，记录合格设备数量与总数量的比值。",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub id: u32,
    pub name: &'static str,
    pub project: &'static str,
    pub source: DataSource,
    pub collect_time: &'static str,
    pub status: ReviewState,
    pub value: &'static str,
    pub historical_average: &'static str,
    pub abnormal_reason: Option<&'static str>,
}

impl Searchable for Indicator {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.project, self.source.label()]
    }
}

pub const COLLECTOR: &str = "张工";

pub const ANOMALY_NOTICE: &str =
    "系统检测到数据波动异常，当前值与历史数据相比波动过大，建议进行人工核查。";

pub fn indicators() -> Vec<Indicator> {
    vec![
        Indicator {
            id: 1,
            name: "道路平整度",
            project: "城市基础设施改造项目",
            source: DataSource::FieldMeasurement,
            collect_time: "2025-05-15",
            status: ReviewState::Reviewed,
            value: "97%",
            historical_average: "95%",
            abnormal_reason: None,
        },
        Indicator {
            id: 2,
            name: "排水系统畅通率",
            project: "城市基础设施改造项目",
            source: DataSource::FieldTest,
            collect_time: "2025-05-14",
            status: ReviewState::Reviewed,
            value: "98%",
            historical_average: "97%",
            abnormal_reason: None,
        },
        Indicator {
            id: 3,
            name: "系统响应时间",
            project: "智慧城市数据中心建设",
            source: DataSource::SystemMonitoring,
            collect_time: "2025-05-15",
            status: ReviewState::Reviewing,
            value: "180ms",
            historical_average: "210ms",
            abnormal_reason: None,
        },
        Indicator {
            id: 4,
            name: "系统可用性",
            project: "智慧城市数据中心建设",
            source: DataSource::SystemLog,
            collect_time: "2025-05-15",
            status: ReviewState::Reviewed,
            value: "99.95%",
            historical_average: "99.8%",
            abnormal_reason: None,
        },
        Indicator {
            id: 5,
            name: "医疗设备合格率",
            project: "公共卫生服务中心扩建",
            source: DataSource::DeviceInspection,
            collect_time: "2025-05-13",
            status: ReviewState::Abnormal,
            value: "100%",
            historical_average: "98%",
            abnormal_reason: Some("数据波动异常"),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorTab {
    All,
    Reviewed,
    Reviewing,
    Abnormal,
}

impl IndicatorTab {
    fn state(&self) -> Option<ReviewState> {
        match self {
            IndicatorTab::All => None,
            IndicatorTab::Reviewed => Some(ReviewState::Reviewed),
            IndicatorTab::Reviewing => Some(ReviewState::Reviewing),
            IndicatorTab::Abnormal => Some(ReviewState::Abnormal),
        }
    }
}

impl StatusTab for IndicatorTab {
    type Record = Indicator;

    const ALL: &'static [Self] = &[
        IndicatorTab::All,
        IndicatorTab::Reviewed,
        IndicatorTab::Reviewing,
        IndicatorTab::Abnormal,
    ];

    fn id(&self) -> &'static str {
        match self {
            IndicatorTab::All => "all",
            IndicatorTab::Reviewed => "reviewed",
            IndicatorTab::Reviewing => "reviewing",
            IndicatorTab::Abnormal => "abnormal",
        }
    }

    fn label(&self) -> &'static str {
        match self.state() {
            Some(state) => state.label(),
            None => "全部指标",
        }
    }

    fn matches(&self, indicator: &Indicator) -> bool {
        self.state().map_or(true, |s| indicator.status == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataAnomaly {
    pub title: &'static str,
    pub date: &'static str,
    pub detail: &'static str,
    /// Beyond the warning threshold, otherwise only a notable fluctuation
    pub critical: bool,
}

pub fn data_anomalies() -> Vec<DataAnomaly> {
    vec![
        DataAnomaly {
            title: "医疗设备合格率数据异常",
            date: "2025-05-13",
            detail: "当前值100%，历史均值98%，波动超过预警阈值",
            critical: true,
        },
        DataAnomaly {
            title: "系统响应时间数据波动",
            date: "2025-05-15",
            detail: "当前值180ms，历史均值210ms，波动较大但在合理范围内",
            critical: false,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewStatistics {
    pub total: usize,
    pub reviewed: usize,
    pub reviewing: usize,
    pub abnormal: usize,
}

impl ReviewStatistics {
    pub fn from_indicators(items: &[Indicator]) -> Self {
        Self {
            total: count_for(items, IndicatorTab::All),
            reviewed: count_for(items, IndicatorTab::Reviewed),
            reviewing: count_for(items, IndicatorTab::Reviewing),
            abnormal: count_for(items, IndicatorTab::Abnormal),
        }
    }

    pub fn progress(&self) -> f64 {
        percent_of(self.reviewed as f64, self.total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status_filter::tab_counts;

    #[test]
    fn statistics_are_derived() {
        let stats = ReviewStatistics::from_indicators(&indicators());
        assert_eq!(
            stats,
            ReviewStatistics {
                total: 5,
                reviewed: 3,
                reviewing: 1,
                abnormal: 1,
            }
        );
        assert!((stats.progress() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn state_tabs_partition_the_list() {
        let counts = tab_counts::<IndicatorTab>(&indicators());
        let partial: usize = counts
            .iter()
            .filter(|(tab, _)| *tab != IndicatorTab::All)
            .map(|(_, n)| n)
            .sum();
        assert_eq!(partial, 5);
    }

    #[test]
    fn only_abnormal_indicator_has_reason() {
        for indicator in indicators() {
            assert_eq!(
                indicator.abnormal_reason.is_some(),
                indicator.status == ReviewState::Abnormal
            );
        }
    }

    #[test]
    fn search_covers_source() {
        let hits: Vec<u32> = indicators()
            .iter()
            .filter(|i| i.matches_query("系统监控"))
            .map(|i| i.id)
            .collect();
        assert_eq!(hits, vec![3]);
    }
}
