//! Движок списков: фильтрация, сортировка и мемоизированное представление
//! коллекции сущностей, полученной с сервера.

pub mod derived_view;
pub mod entity;
pub mod filter;
pub mod filter_state;
pub mod paging;

pub use derived_view::{derive_view, SortDirection, SortSpec, ViewCache, ViewStatus};
pub use entity::{Entity, FieldValue};
pub use filter::{
    category_options, FilterDef, FilterError, FilterKind, FilterOption, FilterSet, PriceBucket,
    Predicate,
};
pub use filter_state::{FilterState, ALL};
pub use paging::{paginate, Page};
