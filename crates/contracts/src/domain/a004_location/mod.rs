pub mod aggregate;

pub use aggregate::{Location, LOCATION_FILTERS};
