pub mod filter;
pub mod format;
pub mod property;
pub mod view_state;

pub use filter::{filter_all, FilterCriteria, FixtureBounds, StatusFilter, ValueRange};
pub use format::{format_price, group_indian, group_thousands};
pub use property::{PropertyRecord, PropertyStatus};
pub use view_state::{Action, ViewMode, ViewState};
