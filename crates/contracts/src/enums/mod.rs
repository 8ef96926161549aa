pub mod location_type;
pub mod notification_kind;
pub mod product_status;
pub mod transfer_status;
