pub mod attributes;
pub mod list;
