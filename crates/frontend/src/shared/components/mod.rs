pub mod card_animated;
pub mod date_input;
pub mod log_list;
pub mod page_header;
pub mod pagination_controls;
pub mod progress_row;
pub mod stat_card;
pub mod timeline;
pub mod ui;

pub use card_animated::CardAnimated;
pub use date_input::DateInput;
pub use log_list::LogList;
pub use page_header::PageHeader;
pub use pagination_controls::{use_table_pager, PaginationControls, TablePager, TablePagination};
pub use progress_row::ProgressRow;
pub use stat_card::{StatCard, StatTone};
pub use timeline::Timeline;
