//! 合同签订监管
pub mod compliance_review;
pub mod risk_assessment;
pub mod signing_process;
