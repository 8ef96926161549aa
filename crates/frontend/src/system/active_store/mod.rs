pub mod api;
pub mod context;
pub mod storage;

pub use context::{use_active_store, use_store_scoped, ActiveStoreContext, ActiveStoreProvider};
