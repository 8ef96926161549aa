use super::entity::{Entity, FieldValue};
use super::filter_state::{FilterState, ALL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown bucket '{value}' for filter '{key}'")]
    UnknownBucket { key: String, value: String },
}

/// Выбор в фильтре: либо "Все", либо конкретное значение
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterOption<T> {
    #[default]
    All,
    Only(T),
}

impl<T> FilterOption<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterOption::All)
    }

    pub fn as_ref(&self) -> FilterOption<&T> {
        match self {
            FilterOption::All => FilterOption::All,
            FilterOption::Only(v) => FilterOption::Only(v),
        }
    }
}

impl<T: fmt::Display> FilterOption<T> {
    /// Значение для `<select>` / query string
    pub fn key(&self) -> String {
        match self {
            FilterOption::All => ALL.to_string(),
            FilterOption::Only(v) => v.to_string(),
        }
    }
}

impl<T: FromStr> FilterOption<T> {
    /// `"all"` и пустая строка дают `All`
    pub fn parse(raw: &str) -> Result<Self, T::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL {
            return Ok(FilterOption::All);
        }
        raw.parse().map(FilterOption::Only)
    }
}

/// Ценовые диапазоны фильтра по цене
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBucket {
    #[serde(rename = "under50")]
    Under50,
    #[serde(rename = "50to100")]
    From50To100,
    #[serde(rename = "over100")]
    Over100,
}

impl PriceBucket {
    pub fn code(&self) -> &'static str {
        match self {
            PriceBucket::Under50 => "under50",
            PriceBucket::From50To100 => "50to100",
            PriceBucket::Over100 => "over100",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceBucket::Under50 => "Under $50",
            PriceBucket::From50To100 => "$50 - $100",
            PriceBucket::Over100 => "Over $100",
        }
    }

    pub fn all() -> Vec<PriceBucket> {
        vec![
            PriceBucket::Under50,
            PriceBucket::From50To100,
            PriceBucket::Over100,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "under50" => Some(PriceBucket::Under50),
            "50to100" => Some(PriceBucket::From50To100),
            "over100" => Some(PriceBucket::Over100),
            _ => None,
        }
    }

    /// under50: v < 50; 50to100: 50 <= v <= 100; over100: v > 100
    pub fn contains(&self, value: f64) -> bool {
        match self {
            PriceBucket::Under50 => value < 50.0,
            PriceBucket::From50To100 => (50.0..=100.0).contains(&value),
            PriceBucket::Over100 => value > 100.0,
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PriceBucket {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or(())
    }
}

/// Один предикат фильтрации
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Поиск подстроки без учета регистра по любому из полей.
    /// Запрос из одних пробелов не ограничивает список, в остальных
    /// случаях он сравнивается как есть, вместе с пробелами.
    Search {
        query: String,
        fields: Vec<&'static str>,
    },
    /// Точное совпадение значения поля
    Category {
        field: &'static str,
        value: FilterOption<String>,
    },
    /// Числовое поле в диапазоне
    Bucket {
        field: &'static str,
        bucket: FilterOption<PriceBucket>,
    },
}

impl Predicate {
    pub fn search(query: impl Into<String>, fields: &[&'static str]) -> Self {
        Predicate::Search {
            query: query.into(),
            fields: fields.to_vec(),
        }
    }

    pub fn category(field: &'static str, value: FilterOption<String>) -> Self {
        Predicate::Category { field, value }
    }

    pub fn bucket(field: &'static str, bucket: FilterOption<PriceBucket>) -> Self {
        Predicate::Bucket { field, bucket }
    }

    /// Не ограничивает ли предикат список вообще
    pub fn is_unconstrained(&self) -> bool {
        match self {
            Predicate::Search { query, .. } => query.trim().is_empty(),
            Predicate::Category { value, .. } => value.is_all(),
            Predicate::Bucket { bucket, .. } => bucket.is_all(),
        }
    }

    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        match self {
            Predicate::Search { query, fields } => {
                if query.trim().is_empty() {
                    return true;
                }
                let needle = query.to_lowercase();
                fields.iter().any(|f| {
                    entity
                        .field(f)
                        .map(|v| v.to_text().to_lowercase().contains(&needle))
                        .unwrap_or(false)
                })
            }
            Predicate::Category { field, value } => match value {
                FilterOption::All => true,
                FilterOption::Only(expected) => match entity.field(field) {
                    Some(FieldValue::Text(actual)) => actual == expected.as_str(),
                    Some(other) => other.to_text() == *expected,
                    None => false,
                },
            },
            Predicate::Bucket { field, bucket } => match bucket {
                FilterOption::All => true,
                FilterOption::Only(bucket) => entity
                    .field(field)
                    .and_then(|v| v.as_number())
                    .map(|n| bucket.contains(n))
                    .unwrap_or(false),
            },
        }
    }
}

/// Вид фильтра, объявленного для списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Search { fields: &'static [&'static str] },
    Category { field: &'static str },
    Bucket { field: &'static str },
}

/// Объявление фильтра списка: ключ в `FilterState` и вид предиката
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDef {
    pub key: &'static str,
    pub kind: FilterKind,
}

impl FilterDef {
    pub const fn search(key: &'static str, fields: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: FilterKind::Search { fields },
        }
    }

    pub const fn category(key: &'static str, field: &'static str) -> Self {
        Self {
            key,
            kind: FilterKind::Category { field },
        }
    }

    pub const fn bucket(key: &'static str, field: &'static str) -> Self {
        Self {
            key,
            kind: FilterKind::Bucket { field },
        }
    }
}

/// Набор предикатов, объединенных через AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    predicates: Vec<Predicate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: Predicate) -> Self {
        self.push(predicate);
        self
    }

    /// Неограничивающие предикаты не сохраняются
    pub fn push(&mut self, predicate: Predicate) {
        if !predicate.is_unconstrained() {
            self.predicates.push(predicate);
        }
    }

    /// Построить набор предикатов из состояния фильтров по объявлениям списка.
    /// Ключи состояния без объявления игнорируются.
    pub fn compile(defs: &[FilterDef], state: &FilterState) -> Result<Self, FilterError> {
        let mut set = Self::new();
        for def in defs {
            let Some(value) = state.get(def.key) else {
                continue;
            };
            let predicate = match def.kind {
                FilterKind::Search { fields } => Predicate::search(value, fields),
                FilterKind::Category { field } => {
                    Predicate::category(field, FilterOption::Only(value.to_string()))
                }
                FilterKind::Bucket { field } => {
                    let bucket = FilterOption::<PriceBucket>::parse(value).map_err(|_| {
                        FilterError::UnknownBucket {
                            key: def.key.to_string(),
                            value: value.to_string(),
                        }
                    })?;
                    Predicate::bucket(field, bucket)
                }
            };
            set.push(predicate);
        }
        Ok(set)
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        self.predicates.iter().all(|p| p.matches(entity))
    }
}

/// Различные значения поля в коллекции (отсортированы), для построения
/// списка вариантов категориального фильтра
pub fn category_options<E: Entity>(source: &[E], field: &str) -> Vec<String> {
    source
        .iter()
        .filter_map(|e| e.field(field).map(|v| v.to_text()))
        .filter(|v| !v.is_empty() && v != ALL)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::entity::fixtures::Item;
    use super::*;

    fn laptop() -> Item {
        Item::new("1", "Laptop Pro X1", "LP-X1-2024", "active", 1299.0)
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let item = laptop();
        let fields = ["name", "sku"];
        assert!(Predicate::search("laptop", &fields).matches(&item));
        assert!(Predicate::search("LP-X1", &fields).matches(&item));
        assert!(Predicate::search("lp-x1", &fields).matches(&item));
        assert!(!Predicate::search("tablet", &fields).matches(&item));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(Predicate::search("", &["name"]).matches(&laptop()));
        assert!(Predicate::search("   ", &["name"]).matches(&laptop()));
    }

    #[test]
    fn test_search_keeps_surrounding_spaces() {
        let item = laptop();
        let fields = ["name", "sku"];
        assert!(!Predicate::search("x1 ", &fields).matches(&item));
        assert!(Predicate::search("pro ", &fields).matches(&item));
        assert!(Predicate::search(" pro x1", &fields).matches(&item));
    }

    #[test]
    fn test_search_ignores_unlisted_fields() {
        assert!(!Predicate::search("active", &["name", "sku"]).matches(&laptop()));
    }

    #[test]
    fn test_category_predicate() {
        let item = laptop();
        assert!(Predicate::category("status", FilterOption::All).matches(&item));
        assert!(
            Predicate::category("status", FilterOption::Only("active".into())).matches(&item)
        );
        assert!(
            !Predicate::category("status", FilterOption::Only("inactive".into())).matches(&item)
        );
    }

    #[test]
    fn test_bucket_boundaries() {
        let cases = [
            (49.99, PriceBucket::Under50, true),
            (50.0, PriceBucket::Under50, false),
            (50.0, PriceBucket::From50To100, true),
            (100.0, PriceBucket::From50To100, true),
            (100.01, PriceBucket::From50To100, false),
            (100.0, PriceBucket::Over100, false),
            (100.01, PriceBucket::Over100, true),
        ];
        for (value, bucket, expected) in cases {
            assert_eq!(bucket.contains(value), expected, "{} in {}", value, bucket);
        }
    }

    #[test]
    fn test_bucket_codes() {
        for bucket in PriceBucket::all() {
            assert_eq!(PriceBucket::from_code(bucket.code()), Some(bucket));
        }
        assert_eq!(
            serde_json::to_string(&PriceBucket::From50To100).unwrap(),
            "\"50to100\""
        );
    }

    #[test]
    fn test_filter_option_parse() {
        assert_eq!(FilterOption::<PriceBucket>::parse("all"), Ok(FilterOption::All));
        assert_eq!(FilterOption::<PriceBucket>::parse(""), Ok(FilterOption::All));
        assert_eq!(
            FilterOption::<PriceBucket>::parse("over100"),
            Ok(FilterOption::Only(PriceBucket::Over100))
        );
        assert!(FilterOption::<PriceBucket>::parse("cheap").is_err());
        assert_eq!(FilterOption::Only(PriceBucket::Under50).key(), "under50");
        assert_eq!(FilterOption::<PriceBucket>::All.key(), "all");
    }

    const DEFS: &[FilterDef] = &[
        FilterDef::search("q", &["name", "sku"]),
        FilterDef::category("status", "status"),
        FilterDef::bucket("price", "price"),
    ];

    #[test]
    fn test_compile_skips_unconstrained_filters() {
        let state = FilterState::new().with("status", "all").with("unknown", "x");
        let set = FilterSet::compile(DEFS, &state).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_compile_unknown_bucket_is_error() {
        let state = FilterState::new().with("price", "cheap");
        let err = FilterSet::compile(DEFS, &state).unwrap_err();
        assert_eq!(
            err,
            FilterError::UnknownBucket {
                key: "price".into(),
                value: "cheap".into()
            }
        );
    }

    #[test]
    fn test_combined_filter_is_and() {
        let items = vec![
            Item::new("1", "a", "a", "active", 30.0),
            Item::new("2", "b", "b", "active", 80.0),
            Item::new("3", "c", "c", "inactive", 30.0),
        ];
        let state = FilterState::new()
            .with("status", "active")
            .with("price", "under50");
        let set = FilterSet::compile(DEFS, &state).unwrap();
        let matched: Vec<&str> = items
            .iter()
            .filter(|i| set.matches(*i))
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(matched, vec!["1"]);
    }

    #[test]
    fn test_category_options_are_distinct_and_sorted() {
        let items = vec![
            Item::new("1", "a", "a", "inactive", 1.0),
            Item::new("2", "b", "b", "active", 1.0),
            Item::new("3", "c", "c", "active", 1.0),
        ];
        assert_eq!(category_options(&items, "status"), vec!["active", "inactive"]);
    }
}
