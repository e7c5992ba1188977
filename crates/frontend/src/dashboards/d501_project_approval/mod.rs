pub mod ui;

pub use ui::ProjectApprovalScreen;
