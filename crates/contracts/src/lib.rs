pub mod dashboards;
pub mod navigation;
pub mod shared;
