pub mod page;
pub mod preferences;
pub mod profile;
pub mod record;
pub mod sort;

pub use page::{PageState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use preferences::Preferences;
pub use profile::UserProfile;
pub use record::Record;
pub use sort::{SortDirection, SortField, SortSpec};
