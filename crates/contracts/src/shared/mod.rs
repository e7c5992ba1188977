pub mod actions;
pub mod chart;
pub mod config;
pub mod format;
pub mod pagination;
pub mod search;
pub mod status_filter;
