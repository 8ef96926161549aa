//! Common types for all domain entities

pub mod entity_metadata;

pub use entity_metadata::EntityMetadata;
