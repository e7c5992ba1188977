use super::registry::SectionId;

/// Errors from parsing navigation ids
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("unknown section id '{0}'")]
    UnknownSection(String),

    #[error("section '{section}' has no page '{page}'")]
    UnknownPage { section: SectionId, page: String },
}
