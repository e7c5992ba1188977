//! 立项审核监管
pub mod audit_monitoring;
pub mod quality_assessment;
pub mod violation_warning;
