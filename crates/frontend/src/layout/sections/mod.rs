mod page;
pub mod registry;

pub use page::SectionPage;
