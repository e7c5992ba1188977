//! 资金监管
pub mod budget_execution;
pub mod expenditure_compliance;
pub mod fund_security;
