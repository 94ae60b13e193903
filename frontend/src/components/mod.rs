pub mod chart;
pub mod entry_list;
pub mod icons;
pub mod photo_selector;
pub mod stat_card;

pub use chart::CashFlowChart;
pub use entry_list::{EntryList, EntryRow};
pub use photo_selector::ProfilePhotoSelector;
pub use stat_card::{StatCard, StatIcon};
