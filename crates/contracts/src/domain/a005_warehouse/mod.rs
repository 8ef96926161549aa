pub mod aggregate;

pub use aggregate::{Warehouse, WAREHOUSE_FILTERS};
