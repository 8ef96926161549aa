pub mod active_store;
