pub mod empty_state;
pub mod filter_panel;
pub mod field_array_rows;
pub mod pagination_controls;
pub mod table;
pub mod ui;

pub use empty_state::EmptyState;
pub use filter_panel::{FilterPanel, FilterSelect, FilterTag, FilterTags};
pub use field_array_rows::RowActions;
pub use pagination_controls::PaginationControls;
