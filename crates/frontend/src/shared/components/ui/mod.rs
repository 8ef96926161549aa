pub mod badge;
pub mod field;

pub use badge::{Badge, BadgeVariant};
pub use field::{SelectField, TextAreaField, TextField};
