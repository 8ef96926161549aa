//! Общие типы дашборда складского учета: сущности API и движок списков/форм,
//! не зависящий от UI.

pub mod domain;
pub mod enums;
pub mod shared;
