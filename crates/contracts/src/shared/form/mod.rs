//! Состояние форм с динамическими массивами полей

pub mod field_array;
pub mod key_value;
pub mod validation;

pub use field_array::{FieldArray, FieldArrayError, FormDraft, FormPhase, FormSession, SubmitError};
pub use key_value::{KeyValueArray, KeyValueRow, RenamePolicy};
pub use validation::{FieldError, Validate, ValidationErrors};
