use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ошибка валидации одного поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Проверка строки массива полей (или другой части формы)
pub trait Validate {
    fn validate(&self) -> Vec<FieldError>;
}

/// Ошибки валидации формы: по полям формы и по строкам массивов полей.
///
/// Ошибки строк хранятся по имени массива и индексу строки, чтобы форма
/// могла показать сообщение рядом с нужной строкой.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
    rows: BTreeMap<String, BTreeMap<usize, Vec<FieldError>>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.rows.values().all(|r| r.is_empty())
    }

    pub fn count(&self) -> usize {
        self.fields.len()
            + self
                .rows
                .values()
                .flat_map(|r| r.values())
                .map(|e| e.len())
                .sum::<usize>()
    }

    pub fn add_field(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError::new(field, message));
    }

    /// Проверить обязательное текстовое поле
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add_field(field, message);
        }
    }

    pub fn add_row(&mut self, array: &str, index: usize, error: FieldError) {
        self.rows
            .entry(array.to_string())
            .or_default()
            .entry(index)
            .or_default()
            .push(error);
    }

    /// Ошибки поля формы (первое сообщение)
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// Ошибки строки `index` массива `array`
    pub fn row(&self, array: &str, index: usize) -> &[FieldError] {
        self.rows
            .get(array)
            .and_then(|r| r.get(&index))
            .map(|e| e.as_slice())
            .unwrap_or(&[])
    }

    /// Индексы строк массива, в которых есть ошибки
    pub fn invalid_rows(&self, array: &str) -> Vec<usize> {
        self.rows
            .get(array)
            .map(|r| r.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.fields.extend(other.fields);
        for (array, rows) in other.rows {
            let target = self.rows.entry(array).or_default();
            for (index, errors) in rows {
                target.entry(index).or_default().extend(errors);
            }
        }
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "form has {} validation error(s)", self.count())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_errors_are_indexed() {
        let mut errors = ValidationErrors::new();
        errors.add_row("lines", 2, FieldError::new("quantity", "must be positive"));
        errors.add_row("lines", 2, FieldError::new("productId", "required"));
        errors.add_field("description", "required");

        assert_eq!(errors.row("lines", 2).len(), 2);
        assert!(errors.row("lines", 0).is_empty());
        assert!(errors.row("other", 2).is_empty());
        assert_eq!(errors.invalid_rows("lines"), vec![2]);
        assert_eq!(errors.field("description"), Some("required"));
        assert_eq!(errors.count(), 3);
    }

    #[test]
    fn test_require_and_merge() {
        let mut a = ValidationErrors::new();
        a.require("name", "  ", "name is required");
        a.require("code", "X1", "code is required");

        let mut b = ValidationErrors::new();
        b.add_row("lines", 0, FieldError::new("quantity", "required"));
        a.merge(b);

        assert_eq!(a.count(), 2);
        assert!(a.into_result().is_err());
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
