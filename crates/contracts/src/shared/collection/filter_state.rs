use super::filter::FilterDef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Зарезервированное значение фильтра: "без ограничения"
pub const ALL: &str = "all";

/// Текущие значения фильтров списка: ключ фильтра -> выбранное значение.
///
/// Отсутствие ключа, пустая строка и `"all"` означают одно и то же:
/// фильтр не ограничивает список.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Активное значение фильтра или `None`, если фильтр не ограничивает
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| is_active_value(v))
    }

    /// Сырое значение (для привязки к полям ввода), `"all"` для неактивных
    pub fn raw(&self, key: &str) -> &str {
        self.values.get(key).map(|v| v.as_str()).unwrap_or(ALL)
    }

    /// Значение хранится без пробелов по краям: так оно одинаково
    /// сравнивается в фильтрах, попадает в query string и в теги фильтров.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let value = value.trim();
        if is_active_value(value) {
            self.values.insert(key, value.to_string());
        } else {
            self.values.remove(&key);
        }
    }

    /// Builder-вариант `set` для тестов и начальных состояний
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Сбросить все фильтры к "all"
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Оставить только ключи, объявленные фильтрами списка.
    /// Чужие параметры строки запроса (`utm_source` и т.п.) отбрасываются.
    pub fn retain_keys(&mut self, defs: &[FilterDef]) {
        self.values.retain(|key, _| defs.iter().any(|d| d.key == key));
    }

    /// Есть ли хотя бы один ограничивающий фильтр
    pub fn is_active(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Сериализация в query string для ссылок на отфильтрованный список
    pub fn to_query(&self) -> String {
        serde_qs::to_string(&self.values).unwrap_or_default()
    }

    /// Разбор query string; неактивные значения отбрасываются
    pub fn from_query(query: &str) -> Result<Self, serde_qs::Error> {
        let query = query.trim_start_matches('?');
        let raw: BTreeMap<String, String> = serde_qs::from_str(query)?;
        let mut state = Self::new();
        for (k, v) in raw {
            state.set(k, v);
        }
        Ok(state)
    }
}

fn is_active_value(value: &str) -> bool {
    !value.is_empty() && value != ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_empty_are_unconstrained() {
        let mut state = FilterState::new();
        state.set("status", "all");
        state.set("q", "");
        state.set("category", "tools");
        assert_eq!(state.get("status"), None);
        assert_eq!(state.get("q"), None);
        assert_eq!(state.get("category"), Some("tools"));
        assert_eq!(state.raw("status"), ALL);
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_setting_all_clears_previous_value() {
        let mut state = FilterState::new().with("status", "active");
        state.set("status", ALL);
        assert!(!state.is_active());
    }

    #[test]
    fn test_query_string() {
        let state = FilterState::new()
            .with("status", "active")
            .with("price", "under50");
        let query = state.to_query();
        assert_eq!(query, "price=under50&status=active");

        let parsed = FilterState::from_query(&format!("?{}", query)).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_query_string_drops_sentinels() {
        let parsed = FilterState::from_query("status=all&q=lap").unwrap();
        assert_eq!(parsed, FilterState::new().with("q", "lap"));
    }

    #[test]
    fn test_values_are_stored_trimmed() {
        let mut state = FilterState::new();
        state.set("status", " active ");
        state.set("category", " all ");
        assert_eq!(state.get("status"), Some("active"));
        assert_eq!(state.raw("status"), "active");
        assert_eq!(state.get("category"), None);
        assert_eq!(state.to_query(), "status=active");

        let parsed = FilterState::from_query("status=active%20").unwrap();
        assert_eq!(parsed, FilterState::new().with("status", "active"));
    }

    #[test]
    fn test_retain_keys_drops_undeclared_parameters() {
        const DEFS: &[FilterDef] = &[
            FilterDef::search("q", &["name"]),
            FilterDef::category("status", "status"),
        ];
        let mut state = FilterState::from_query("utm_source=mail&status=active").unwrap();
        state.retain_keys(DEFS);
        assert_eq!(state, FilterState::new().with("status", "active"));
        assert_eq!(state.active_count(), 1);

        let mut foreign = FilterState::from_query("utm_source=mail").unwrap();
        foreign.retain_keys(DEFS);
        assert!(!foreign.is_active());
        assert_eq!(foreign.active_count(), 0);
    }
}
