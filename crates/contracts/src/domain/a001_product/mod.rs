pub mod aggregate;

pub use aggregate::{Product, ProductAttributesDraft, StockLevel, UpdateAttributesRequest, PRODUCT_FILTERS};
