use super::field_array::{FieldArray, FieldArrayError};
use super::validation::{FieldError, ValidationErrors};
use std::collections::BTreeMap;

/// Что делать, если при переименовании ключ уже занят
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenamePolicy {
    /// Отклонить переименование (`FieldArrayError::DuplicateKey`)
    #[default]
    Reject,
    /// Удалить строку с занятым ключом, переименованная строка забирает ключ
    Overwrite,
}

/// Строка редактора "ключ - значение"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValueRow<V> {
    pub key: String,
    pub value: V,
}

/// Редактор характеристик/атрибутов: упорядоченные пары ключ-значение
/// поверх `FieldArray` (минимум одна строка).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueArray<V> {
    rows: FieldArray<KeyValueRow<V>>,
}

impl<V: Default + Clone> KeyValueArray<V> {
    pub fn new() -> Self {
        Self {
            rows: FieldArray::new(),
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, V)>) -> Self {
        let rows = pairs
            .into_iter()
            .map(|(key, value)| KeyValueRow { key, value })
            .collect();
        Self {
            rows: FieldArray::from_rows(rows),
        }
    }

    pub fn rows(&self) -> &[KeyValueRow<V>] {
        self.rows.rows()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.rows.iter().find(|r| r.key == key).map(|r| &r.value)
    }

    /// Добавить пустую строку для ввода нового ключа
    pub fn append(&mut self) -> usize {
        self.rows.append()
    }

    /// Добавить пару; занятый ключ отклоняется
    pub fn insert(&mut self, key: &str, value: V) -> Result<usize, FieldArrayError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(FieldArrayError::EmptyKey);
        }
        if self.position(key).is_some() {
            return Err(FieldArrayError::DuplicateKey(key.to_string()));
        }
        // пустая заготовка строки заполняется вместо добавления новой
        if let Some(blank) = self.rows.iter().position(|r| r.key.is_empty()) {
            self.rows.set(
                blank,
                KeyValueRow {
                    key: key.to_string(),
                    value,
                },
            )?;
            return Ok(blank);
        }
        Ok(self.rows.push(KeyValueRow {
            key: key.to_string(),
            value,
        }))
    }

    pub fn set_value(&mut self, index: usize, value: V) -> Result<(), FieldArrayError> {
        self.rows.update(index, |r| r.value = value)
    }

    pub fn remove(&mut self, index: usize) -> Result<KeyValueRow<V>, FieldArrayError> {
        self.rows.remove(index)
    }

    /// Переместить строку; ключи и значения не меняются
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<(), FieldArrayError> {
        self.rows.move_row(from, to)
    }

    pub fn remove_key(&mut self, key: &str) -> Result<KeyValueRow<V>, FieldArrayError> {
        let index = self
            .position(key)
            .ok_or_else(|| FieldArrayError::UnknownKey(key.to_string()))?;
        self.rows.remove(index)
    }

    /// Переименовать ключ строки `index`. Значение и позиция строки сохраняются.
    pub fn rename_at(
        &mut self,
        index: usize,
        new_key: &str,
        policy: RenamePolicy,
    ) -> Result<(), FieldArrayError> {
        let new_key = new_key.trim();
        if new_key.is_empty() {
            return Err(FieldArrayError::EmptyKey);
        }
        let current = self
            .rows
            .get(index)
            .ok_or(FieldArrayError::OutOfRange {
                index,
                len: self.rows.len(),
            })?
            .key
            .clone();
        if current == new_key {
            return Ok(());
        }

        let mut index = index;
        if let Some(colliding) = self.position(new_key) {
            match policy {
                RenamePolicy::Reject => {
                    return Err(FieldArrayError::DuplicateKey(new_key.to_string()));
                }
                RenamePolicy::Overwrite => {
                    log::debug!("rename '{}' -> '{}' overwrites existing key", current, new_key);
                    self.rows.remove(colliding)?;
                    if colliding < index {
                        index -= 1;
                    }
                }
            }
        }

        self.rows.update(index, |r| r.key = new_key.to_string())
    }

    pub fn rename(
        &mut self,
        old_key: &str,
        new_key: &str,
        policy: RenamePolicy,
    ) -> Result<(), FieldArrayError> {
        let index = self
            .position(old_key)
            .ok_or_else(|| FieldArrayError::UnknownKey(old_key.to_string()))?;
        self.rename_at(index, new_key, policy)
    }

    /// Пустые ключи и повторы ключей - ошибки соответствующих строк.
    /// Единственная пустая строка не считается ошибкой, если `allow_blank`.
    pub fn validate_into(&self, array: &str, allow_blank: bool, errors: &mut ValidationErrors) {
        let only_blank = self.rows.len() == 1 && self.rows().first().is_some_and(|r| r.key.is_empty());
        if only_blank && allow_blank {
            return;
        }
        for (index, row) in self.rows.iter().enumerate() {
            if row.key.trim().is_empty() {
                errors.add_row(array, index, FieldError::new("key", "Key is required"));
            } else if self.position(&row.key) != Some(index) {
                errors.add_row(array, index, FieldError::new("key", "Duplicate key"));
            }
        }
    }

    /// Пары с непустыми ключами
    pub fn to_map(&self) -> BTreeMap<String, V> {
        self.rows
            .iter()
            .filter(|r| !r.key.trim().is_empty())
            .map(|r| (r.key.clone(), r.value.clone()))
            .collect()
    }
}

impl<V: Default + Clone> Default for KeyValueArray<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs() -> KeyValueArray<String> {
        KeyValueArray::from_pairs(vec![
            ("color".to_string(), "red".to_string()),
            ("weight".to_string(), "2kg".to_string()),
            ("size".to_string(), "XL".to_string()),
        ])
    }

    fn keys(arr: &KeyValueArray<String>) -> Vec<&str> {
        arr.rows().iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn test_rename_keeps_value_and_position() {
        let mut arr = attrs();
        arr.rename("weight", "mass", RenamePolicy::Reject).unwrap();
        assert_eq!(keys(&arr), vec!["color", "mass", "size"]);
        assert_eq!(arr.get("mass").map(String::as_str), Some("2kg"));
        assert_eq!(arr.get("weight"), None);
    }

    #[test]
    fn test_rename_collision_rejected_by_default() {
        let mut arr = attrs();
        let err = arr
            .rename("color", "size", RenamePolicy::default())
            .unwrap_err();
        assert_eq!(err, FieldArrayError::DuplicateKey("size".into()));
        assert_eq!(arr, attrs());
    }

    #[test]
    fn test_rename_collision_overwrite_policy() {
        let mut arr = attrs();
        arr.rename("color", "size", RenamePolicy::Overwrite).unwrap();
        assert_eq!(keys(&arr), vec!["size", "weight"]);
        assert_eq!(arr.get("size").map(String::as_str), Some("red"));

        // коллизия со строкой выше переименуемой
        let mut arr = attrs();
        arr.rename("size", "color", RenamePolicy::Overwrite).unwrap();
        assert_eq!(keys(&arr), vec!["weight", "color"]);
        assert_eq!(arr.get("color").map(String::as_str), Some("XL"));
    }

    #[test]
    fn test_rename_to_same_key_is_noop() {
        let mut arr = attrs();
        arr.rename("size", " size ", RenamePolicy::Reject).unwrap();
        assert_eq!(arr, attrs());
    }

    #[test]
    fn test_rename_errors() {
        let mut arr = attrs();
        assert_eq!(
            arr.rename("shape", "form", RenamePolicy::Reject),
            Err(FieldArrayError::UnknownKey("shape".into()))
        );
        assert_eq!(
            arr.rename("size", "  ", RenamePolicy::Reject),
            Err(FieldArrayError::EmptyKey)
        );
    }

    #[test]
    fn test_move_row_keeps_pairs() {
        let mut arr = attrs();
        arr.move_row(2, 0).unwrap();
        assert_eq!(keys(&arr), vec!["size", "color", "weight"]);
        assert_eq!(arr.get("size").map(String::as_str), Some("XL"));
        assert!(arr.move_row(0, 3).is_err());
    }

    #[test]
    fn test_insert_fills_blank_row_first() {
        let mut arr: KeyValueArray<Option<u32>> = KeyValueArray::new();
        assert_eq!(arr.insert("users", Some(10)).unwrap(), 0);
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.insert("projects", None).unwrap(), 1);
        assert_eq!(
            arr.insert("users", Some(5)),
            Err(FieldArrayError::DuplicateKey("users".into()))
        );
    }

    #[test]
    fn test_remove_keeps_floor() {
        let mut arr = attrs();
        arr.remove_key("color").unwrap();
        arr.remove_key("weight").unwrap();
        arr.remove_key("size").unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr.rows()[0], KeyValueRow::default());
        assert!(arr.to_map().is_empty());
    }

    #[test]
    fn test_validate_blank_and_duplicate_keys() {
        let mut arr = attrs();
        arr.append();
        arr.rows.update(1, |r| r.key = "color".into()).unwrap();

        let mut errors = ValidationErrors::new();
        arr.validate_into("attributes", true, &mut errors);
        assert_eq!(errors.invalid_rows("attributes"), vec![1, 3]);

        let mut errors = ValidationErrors::new();
        KeyValueArray::<String>::new().validate_into("attributes", true, &mut errors);
        assert!(errors.is_empty());
    }
}
