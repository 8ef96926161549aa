pub mod a001_product;
pub mod a002_bundle;
pub mod a003_notification;
pub mod a004_location;
pub mod a005_warehouse;
pub mod a006_transfer;
pub mod a007_custom_plan;
pub mod a008_store;
pub mod common;
