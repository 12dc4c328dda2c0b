pub mod header;
pub mod pagination;
pub mod record_table;
pub mod search_bar;
pub mod sort_controls;

pub use header::Header;
pub use pagination::Pagination;
pub use record_table::RecordTable;
pub use search_bar::SearchBar;
pub use sort_controls::SortControls;
