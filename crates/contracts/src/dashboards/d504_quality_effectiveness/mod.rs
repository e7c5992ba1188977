//! 质量成效监管
pub mod feedback_handling;
pub mod goal_achievement;
pub mod indicator_assessment;
