pub mod api_utils;
pub mod components;
pub mod config;
pub mod entity_store;
pub mod form_view_model;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod list_view;
pub mod page_frame;
pub mod toast;
