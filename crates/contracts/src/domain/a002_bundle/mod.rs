pub mod aggregate;

pub use aggregate::{Bundle, BundleDraft, BundleItem, BundleRequest, BUNDLE_FILTERS};
