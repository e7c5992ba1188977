pub mod error;
pub mod registry;
pub mod route;
pub mod state;

pub use error::NavigationError;
pub use registry::{section, sections, PageDescriptor, SectionDescriptor, SectionId};
pub use route::{
    ContractSigningView, FundSupervisionView, PerformanceMonitoringView, ProjectApprovalView,
    QualityEffectivenessView, Route, SectionView,
};
pub use state::NavigationState;
