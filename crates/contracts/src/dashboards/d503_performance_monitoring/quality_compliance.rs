use crate::dashboards::common::{share, Share};
use crate::shared::chart::ChartData;
use crate::shared::search::Searchable;
use crate::shared::status_filter::StatusTab;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityCheck {
    pub id: u32,
    pub project: &'static str,
    pub check_time: &'static str,
    pub inspector: &'static str,
    pub standard: &'static str,
    pub qualified: bool,
    pub issues: Vec<&'static str>,
}

impl QualityCheck {
    pub fn result_label(&self) -> &'static str {
        if self.qualified {
            "合格"
        } else {
            "不合格"
        }
    }
}

impl Searchable for QualityCheck {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.project, self.inspector, self.standard]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckTab {
    All,
    Qualified,
    Unqualified,
    /// Unqualified checks tracked through rectification
    Rectification,
}

impl StatusTab for CheckTab {
    type Record = QualityCheck;

    const ALL: &'static [Self] = &[
        CheckTab::All,
        CheckTab::Qualified,
        CheckTab::Unqualified,
        CheckTab::Rectification,
    ];

    fn id(&self) -> &'static str {
        match self {
            CheckTab::All => "all",
            CheckTab::Qualified => "qualified",
            CheckTab::Unqualified => "unqualified",
            CheckTab::Rectification => "rectification",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CheckTab::All => "全部检查",
            CheckTab::Qualified => "合格检查",
            CheckTab::Unqualified => "不合格检查",
            CheckTab::Rectification => "整改跟踪",
        }
    }

    fn matches(&self, check: &QualityCheck) -> bool {
        match self {
            CheckTab::All => true,
            CheckTab::Qualified => check.qualified,
            CheckTab::Unqualified | CheckTab::Rectification => !check.qualified,
        }
    }
}

pub fn quality_checks() -> Vec<QualityCheck> {
    vec![
        QualityCheck {
            id: 1,
            project: "城市基础设施改造项目",
            check_time: "2025-05-15 10:30",
            inspector: "张工",
            standard: "市政工程质量标准 GB50500-2013",
            qualified: true,
            issues: vec![],
        },
        QualityCheck {
            id: 2,
            project: "智慧城市数据中心建设",
            check_time: "2025-05-14 14:20",
            inspector: "李工",
            standard: "信息系统工程监理规范 GB/T 19668-2017",
            qualified: false,
            issues: vec!["服务器机房温控系统不达标", "备份系统测试未通过"],
        },
        QualityCheck {
            id: 3,
            project: "公共卫生服务中心扩建",
            check_time: "2025-05-13 11:15",
            inspector: "王工",
            standard: "医疗建筑工程质量验收规范 GB 51212-2016",
            qualified: true,
            issues: vec![],
        },
        QualityCheck {
            id: 4,
            project: "城市绿化带改造工程",
            check_time: "2025-05-10 16:45",
            inspector: "赵工",
            standard: "园林绿化工程施工及验收规范 CJJ/T 82-2012",
            qualified: false,
            issues: vec!["灌溉系统安装不规范", "部分植物种植深度不符合要求"],
        },
    ]
}

pub const CHECK_ITEMS: [&str; 4] = ["材料质量检查", "施工工艺检查", "安全措施检查", "环保措施检查"];

pub const RECTIFICATION_REQUIREMENTS: [&str; 4] = [
    "立即停止相关工作，进行整改",
    "提交整改方案，经审核通过后实施",
    "整改完成后，重新申请质量检查",
    "整改期限：7个工作日内",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyQuality {
    pub checks: u32,
    pub failures: u32,
    pub pending_rectification: u32,
}

impl MonthlyQuality {
    pub fn pass_rate(&self) -> f64 {
        crate::shared::format::percent_of((self.checks - self.failures) as f64, self.checks as f64)
    }
}

pub fn monthly_quality() -> MonthlyQuality {
    MonthlyQuality {
        checks: 156,
        failures: 22,
        pending_rectification: 18,
    }
}

pub fn check_statistics() -> ChartData {
    ChartData::new(&["1月", "2月", "3月", "4月", "5月"])
        .with_series("质量检查次数", "#3b82f6", &[45.0, 52.0, 38.0, 65.0, 48.0])
        .with_series("不合格次数", "#ef4444", &[5.0, 7.0, 3.0, 8.0, 6.0])
}

pub fn common_problems() -> Vec<Share> {
    vec![
        share("材料质量不达标", 35.0),
        share("施工工艺不规范", 25.0),
        share("设备安装不合格", 20.0),
        share("验收标准不达标", 15.0),
        share("其他问题", 5.0),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rectification {
    pub pending: u32,
    pub done: u32,
}

impl Rectification {
    pub fn completion_rate(&self) -> f64 {
        crate::shared::format::percent_of(self.done as f64, (self.pending + self.done) as f64)
    }
}

pub fn rectification() -> Rectification {
    Rectification {
        pending: 18,
        done: 54,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status_filter::filter_by_tab;

    #[test]
    fn rectification_tab_shows_unqualified_checks() {
        let unqualified = filter_by_tab(&quality_checks(), CheckTab::Unqualified);
        let rectification = filter_by_tab(&quality_checks(), CheckTab::Rectification);
        assert_eq!(unqualified, rectification);
        let ids: Vec<u32> = rectification.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn unqualified_checks_list_issues() {
        for check in quality_checks() {
            assert_eq!(check.qualified, check.issues.is_empty(), "check {}", check.id);
        }
    }

    #[test]
    fn pass_rate_matches_card() {
        let rate = monthly_quality().pass_rate();
        assert_eq!(format!("{:.1}", rate), "85.9");
    }

    #[test]
    fn rectification_completion_is_75_percent() {
        assert!((rectification().completion_rate() - 75.0).abs() < 1e-9);
    }
}
