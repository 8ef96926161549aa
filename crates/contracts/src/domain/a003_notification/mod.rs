pub mod aggregate;

pub use aggregate::{MarkReadRequest, Notification, NOTIFICATION_FILTERS};
