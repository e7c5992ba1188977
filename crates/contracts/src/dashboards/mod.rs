pub mod common;
pub mod d501_project_approval;
pub mod d502_contract_signing;
pub mod d503_performance_monitoring;
pub mod d504_quality_effectiveness;
pub mod d505_fund_supervision;
