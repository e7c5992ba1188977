//! Building blocks shared by several dashboards

use serde::Serialize;

/// Named share of a whole, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Share {
    pub label: &'static str,
    pub percent: f64,
}

pub const fn share(label: &'static str, percent: f64) -> Share {
    Share { label, percent }
}

/// Label/value pair for summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

pub const fn metric(label: &'static str, value: &'static str) -> Metric {
    Metric { label, value }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

/// One node of a workflow timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    pub name: &'static str,
    pub state: StepState,
    /// Completion date for done steps
    pub date: Option<&'static str>,
}

impl TimelineStep {
    pub fn caption(&self) -> &'static str {
        match self.state {
            StepState::Done => self.date.unwrap_or("已完成"),
            StepState::Current => "进行中",
            StepState::Pending => "待处理",
        }
    }
}

/// Builds a timeline for a linear workflow positioned at `current`.
///
/// Steps before `current` are done and take their dates from `dates`;
/// an unknown `current` marks every step done.
pub fn timeline(
    steps: &[&'static str],
    current: &str,
    dates: &[&'static str],
) -> Vec<TimelineStep> {
    let position = steps.iter().position(|s| *s == current);
    steps
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            let state = match position {
                Some(p) if i == p => StepState::Current,
                Some(p) if i > p => StepState::Pending,
                _ => StepState::Done,
            };
            TimelineStep {
                name,
                state,
                date: if state == StepState::Done {
                    dates.get(i).copied()
                } else {
                    None
                },
            }
        })
        .collect()
}

/// Comment, opinion or operation log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub author: &'static str,
    pub time: &'static str,
    pub content: &'static str,
}

pub const fn entry(author: &'static str, time: &'static str, content: &'static str) -> LogEntry {
    LogEntry {
        author,
        time,
        content,
    }
}

/// Finding with a severity, e.g. a compliance issue or risk item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub title: &'static str,
    pub detail: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Ok,
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn risk_label(&self) -> &'static str {
        match self {
            Severity::Ok | Severity::Low => "低风险",
            Severity::Medium => "中等风险",
            Severity::High => "高风险",
        }
    }
}

pub const fn finding(title: &'static str, detail: &'static str, severity: Severity) -> Finding {
    Finding {
        title,
        detail,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: [&str; 4] = ["发起", "起草", "审核", "完成"];

    #[test]
    fn timeline_splits_at_current_step() {
        let t = timeline(&STEPS, "审核", &["05-10", "05-12"]);
        let states: Vec<StepState> = t.iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![StepState::Done, StepState::Done, StepState::Current, StepState::Pending]
        );
        assert_eq!(t[1].caption(), "05-12");
        assert_eq!(t[2].caption(), "进行中");
        assert_eq!(t[3].caption(), "待处理");
    }

    #[test]
    fn unknown_current_step_means_finished() {
        let t = timeline(&STEPS, "归档", &[]);
        assert!(t.iter().all(|s| s.state == StepState::Done));
        assert_eq!(t[0].caption(), "已完成");
    }
}
