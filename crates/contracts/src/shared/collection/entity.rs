use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Значение поля сущности, доступное движку списков по имени поля
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Flag(bool),
}

impl FieldValue<'_> {
    /// Текстовое представление для поиска и категориальных фильтров
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Timestamp(dt) => dt.to_rfc3339(),
            FieldValue::Flag(b) => b.to_string(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Сравнение двух значений одного поля.
    ///
    /// Значения разных видов сравниваются по текстовому представлению,
    /// NaN считается равным любому числу.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            (FieldValue::Flag(a), FieldValue::Flag(b)) => a.cmp(b),
            (a, b) => a.to_text().cmp(&b.to_text()),
        }
    }
}

/// Сущность, которую можно показывать в списке.
///
/// Идентичность определяется только `entity_id`; остальные поля движок
/// читает через `field` и никогда не изменяет.
pub trait Entity {
    /// Стабильный уникальный идентификатор
    fn entity_id(&self) -> &str;

    /// Значение поля по имени (`None` если поля нет или оно пустое)
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Сравнивает две сущности по указанному полю.
    /// Сущности без значения поля идут после сущностей со значением.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering
    where
        Self: Sized,
    {
        match (self.field(field), other.field(field)) {
            (Some(a), Some(b)) => a.compare(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Простая сущность для тестов движка
    #[derive(Debug, Clone, PartialEq)]
    pub struct Item {
        pub id: String,
        pub name: String,
        pub sku: String,
        pub status: String,
        pub price: f64,
    }

    impl Item {
        pub fn new(id: &str, name: &str, sku: &str, status: &str, price: f64) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                sku: sku.to_string(),
                status: status.to_string(),
                price,
            }
        }

        pub fn priced(id: &str, price: f64) -> Self {
            Self::new(id, id, id, "active", price)
        }
    }

    impl Entity for Item {
        fn entity_id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "id" => Some(FieldValue::Text(&self.id)),
                "name" => Some(FieldValue::Text(&self.name)),
                "sku" => Some(FieldValue::Text(&self.sku)),
                "status" => Some(FieldValue::Text(&self.status)),
                "price" => Some(FieldValue::Number(self.price)),
                _ => None,
            }
        }
    }

    pub fn ids<E: Entity>(items: &[E]) -> Vec<String> {
        items.iter().map(|e| e.entity_id().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::Item;
    use super::*;

    #[test]
    fn test_text_compare_is_case_insensitive() {
        let a = FieldValue::Text("apple");
        let b = FieldValue::Text("Banana");
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn test_missing_field_sorts_last() {
        let a = Item::priced("a", 10.0);
        let b = Item::priced("b", 5.0);
        assert_eq!(a.compare_by_field(&b, "price"), Ordering::Greater);
        assert_eq!(a.compare_by_field(&b, "unknown"), Ordering::Equal);
    }
}
