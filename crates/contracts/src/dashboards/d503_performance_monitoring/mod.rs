//! 履约过程监管
pub mod fund_usage;
pub mod progress_compliance;
pub mod quality_compliance;
