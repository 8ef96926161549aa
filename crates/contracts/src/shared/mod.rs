pub mod collection;
pub mod form;
pub mod request_guard;
