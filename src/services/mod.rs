pub mod error_handling;
pub mod list_pipeline;
pub mod list_view;
pub mod record_source;

pub use error_handling::{DashboardError, FetchError, UserErrorFormatter};
pub use list_pipeline::{compute_page, filter_records, paginate, sort_records, PageView};
pub use list_view::{FetchState, ListView};
pub use record_source::{HttpRecordSource, MockRecordSource, RecordSource};
