use super::entity::Entity;
use super::filter::{FilterDef, FilterError, FilterSet};
use super::filter_state::FilterState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Сортировка списка по полю
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Asc
    }

    /// Клик по заголовку колонки: то же поле меняет направление,
    /// новое поле начинает с возрастания
    pub fn toggle(current: Option<&SortSpec>, field: &str) -> SortSpec {
        match current {
            Some(spec) if spec.field == field => SortSpec {
                field: spec.field.clone(),
                direction: match spec.direction {
                    SortDirection::Asc => SortDirection::Desc,
                    SortDirection::Desc => SortDirection::Asc,
                },
            },
            _ => SortSpec::asc(field),
        }
    }
}

/// Фильтрует коллекцию в исходном порядке и при необходимости сортирует.
///
/// Сортировка стабильная: равные ключи сохраняют порядок источника.
/// Источник не изменяется.
pub fn derive_view<E: Entity + Clone>(
    source: &[E],
    filters: &FilterSet,
    sort: Option<&SortSpec>,
) -> Vec<E> {
    let mut items: Vec<E> = source
        .iter()
        .filter(|e| filters.matches(*e))
        .cloned()
        .collect();

    if let Some(spec) = sort {
        items.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, &spec.field);
            match spec.direction {
                SortDirection::Asc => cmp,
                SortDirection::Desc => cmp.reverse(),
            }
        });
    }

    items
}

/// Что показать на месте списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// Коллекция пуста сама по себе
    NoEntities,
    /// Сущности есть, но ни одна не прошла фильтры
    NoMatches,
    Populated(usize),
}

impl ViewStatus {
    pub fn classify(source_len: usize, view_len: usize) -> Self {
        if source_len == 0 {
            ViewStatus::NoEntities
        } else if view_len == 0 {
            ViewStatus::NoMatches
        } else {
            ViewStatus::Populated(view_len)
        }
    }
}

struct CachedView<E> {
    source: Arc<Vec<E>>,
    filters: FilterState,
    sort: Option<SortSpec>,
    result: Arc<Vec<E>>,
}

/// Мемоизированное производное представление коллекции.
///
/// Пока ссылка на источник (`Arc`), состояние фильтров и сортировка не
/// менялись, возвращается тот же `Arc` без пересчета.
pub struct ViewCache<E> {
    defs: &'static [FilterDef],
    cached: Option<CachedView<E>>,
    recomputations: usize,
}

impl<E: Entity + Clone> ViewCache<E> {
    pub fn new(defs: &'static [FilterDef]) -> Self {
        Self {
            defs,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn defs(&self) -> &'static [FilterDef] {
        self.defs
    }

    pub fn view(
        &mut self,
        source: &Arc<Vec<E>>,
        filters: &FilterState,
        sort: Option<&SortSpec>,
    ) -> Result<Arc<Vec<E>>, FilterError> {
        if let Some(cached) = &self.cached {
            if Arc::ptr_eq(&cached.source, source)
                && cached.filters == *filters
                && cached.sort.as_ref() == sort
            {
                return Ok(Arc::clone(&cached.result));
            }
        }

        let set = FilterSet::compile(self.defs, filters)?;
        let result = if set.is_empty() && sort.is_none() {
            // без фильтров и сортировки представление совпадает с источником
            Arc::clone(source)
        } else {
            Arc::new(derive_view(source, &set, sort))
        };
        self.recomputations += 1;
        log::debug!(
            "derived view recomputed: {} of {} entities",
            result.len(),
            source.len()
        );

        self.cached = Some(CachedView {
            source: Arc::clone(source),
            filters: filters.clone(),
            sort: sort.cloned(),
            result: Arc::clone(&result),
        });
        Ok(result)
    }

    /// Сколько раз представление пересчитывалось
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::entity::fixtures::{ids, Item};
    use super::super::filter::Predicate;
    use super::super::filter::FilterOption;
    use super::*;
    use std::collections::BTreeSet;

    const DEFS: &[FilterDef] = &[
        FilterDef::search("q", &["name", "sku"]),
        FilterDef::category("status", "status"),
        FilterDef::bucket("price", "price"),
    ];

    fn source() -> Arc<Vec<Item>> {
        Arc::new(vec![
            Item::new("1", "Laptop Pro X1", "LP-X1-2024", "active", 1299.0),
            Item::new("2", "USB Cable", "USB-C-01", "active", 9.99),
            Item::new("3", "Laptop Stand", "LS-100", "inactive", 49.99),
            Item::new("4", "Monitor", "MN-27", "active", 50.0),
            Item::new("5", "Keyboard", "KB-77", "inactive", 100.0),
            Item::new("6", "Mouse", "MS-12", "active", 100.01),
        ])
    }

    fn view_ids(source: &Arc<Vec<Item>>, state: &FilterState) -> Vec<String> {
        let set = FilterSet::compile(DEFS, state).unwrap();
        ids(&derive_view(source, &set, None))
    }

    #[test]
    fn test_price_buckets_scenario() {
        let items = vec![
            Item::priced("a", 49.99),
            Item::priced("b", 50.00),
            Item::priced("c", 100.00),
            Item::priced("d", 100.01),
        ];
        let run = |bucket: &str| {
            let set = FilterSet::compile(DEFS, &FilterState::new().with("price", bucket)).unwrap();
            derive_view(&items, &set, None)
                .into_iter()
                .map(|i| i.price)
                .collect::<Vec<_>>()
        };
        assert_eq!(run("under50"), vec![49.99]);
        assert_eq!(run("50to100"), vec![50.00, 100.00]);
        assert_eq!(run("over100"), vec![100.01]);
    }

    #[test]
    fn test_query_string_values_with_spaces_still_match() {
        let src = source();
        let state = FilterState::from_query("status=active%20").unwrap();
        assert_eq!(view_ids(&src, &state), vec!["1", "2", "4", "6"]);

        let state = FilterState::from_query("q=x1%20").unwrap();
        assert_eq!(view_ids(&src, &state), vec!["1"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let src = source();
        let state = FilterState::new().with("q", "la").with("status", "active");
        assert_eq!(view_ids(&src, &state), view_ids(&src, &state));
    }

    #[test]
    fn test_clearing_filters_restores_source() {
        let src = source();
        let mut state = FilterState::new()
            .with("q", "laptop")
            .with("status", "inactive")
            .with("price", "under50");
        assert_eq!(view_ids(&src, &state), vec!["3"]);

        state.reset();
        assert_eq!(view_ids(&src, &state), ids(&src));
    }

    #[test]
    fn test_and_composition_is_intersection() {
        let src = source();
        let p1 = FilterState::new().with("status", "active");
        let p2 = FilterState::new().with("price", "50to100");
        let both = FilterState::new()
            .with("status", "active")
            .with("price", "50to100");

        let a: BTreeSet<String> = view_ids(&src, &p1).into_iter().collect();
        let b: BTreeSet<String> = view_ids(&src, &p2).into_iter().collect();
        let expected: Vec<String> = a.intersection(&b).cloned().collect();
        assert_eq!(view_ids(&src, &both), expected);
        assert_eq!(expected, vec!["4"]);
    }

    #[test]
    fn test_filtering_keeps_source_order() {
        let src = source();
        let state = FilterState::new().with("status", "active");
        assert_eq!(view_ids(&src, &state), vec!["1", "2", "4", "6"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let items = vec![
            Item::new("1", "b", "x", "active", 10.0),
            Item::new("2", "a", "x", "active", 20.0),
            Item::new("3", "c", "x", "inactive", 10.0),
            Item::new("4", "d", "x", "active", 10.0),
        ];
        let set = FilterSet::new();
        let asc = derive_view(&items, &set, Some(&SortSpec::asc("price")));
        assert_eq!(ids(&asc), vec!["1", "3", "4", "2"]);

        let desc = derive_view(&items, &set, Some(&SortSpec::desc("price")));
        assert_eq!(ids(&desc), vec!["2", "1", "3", "4"]);

        let by_status = derive_view(&items, &set, Some(&SortSpec::asc("status")));
        assert_eq!(ids(&by_status), vec!["1", "2", "4", "3"]);
    }

    #[test]
    fn test_derive_does_not_mutate_source() {
        let src = source();
        let before = (*src).clone();
        let set = FilterSet::new().with(Predicate::category(
            "status",
            FilterOption::Only("active".to_string()),
        ));
        let _ = derive_view(&src, &set, Some(&SortSpec::desc("name")));
        assert_eq!(*src, before);
    }

    #[test]
    fn test_cache_returns_same_reference_for_unchanged_inputs() {
        let src = source();
        let state = FilterState::new().with("status", "active");
        let sort = SortSpec::asc("name");
        let mut cache = ViewCache::new(DEFS);

        let first = cache.view(&src, &state, Some(&sort)).unwrap();
        let second = cache.view(&src, &state.clone(), Some(&sort.clone())).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.recomputations(), 1);
    }

    #[test]
    fn test_cache_recomputes_on_any_input_change() {
        let src = source();
        let mut cache = ViewCache::new(DEFS);
        let state = FilterState::new().with("status", "active");

        let first = cache.view(&src, &state, None).unwrap();

        let changed_filter = state.clone().with("q", "mouse");
        let second = cache.view(&src, &changed_filter, None).unwrap();
        assert_eq!(ids(&second), vec!["6"]);

        // новое содержимое источника под новой ссылкой
        let refreshed = Arc::new((*src).clone());
        let third = cache.view(&refreshed, &changed_filter, None).unwrap();
        assert!(!Arc::ptr_eq(&second, &third));

        let sorted = cache
            .view(&refreshed, &state, Some(&SortSpec::desc("price")))
            .unwrap();
        assert_eq!(ids(&sorted), vec!["1", "6", "4", "2"]);
        assert_eq!(ids(&first), vec!["1", "2", "4", "6"]);
        assert_eq!(cache.recomputations(), 4);
    }

    #[test]
    fn test_cache_without_filters_shares_source() {
        let src = source();
        let mut cache = ViewCache::new(DEFS);
        let view = cache.view(&src, &FilterState::new(), None).unwrap();
        assert!(Arc::ptr_eq(&view, &src));
    }

    #[test]
    fn test_cache_propagates_filter_errors() {
        let src = source();
        let mut cache = ViewCache::new(DEFS);
        let state = FilterState::new().with("price", "free");
        assert!(cache.view(&src, &state, None).is_err());
    }

    #[test]
    fn test_view_status() {
        assert_eq!(ViewStatus::classify(0, 0), ViewStatus::NoEntities);
        assert_eq!(ViewStatus::classify(5, 0), ViewStatus::NoMatches);
        assert_eq!(ViewStatus::classify(5, 2), ViewStatus::Populated(2));
    }

    #[test]
    fn test_sort_toggle() {
        let first = SortSpec::toggle(None, "name");
        assert_eq!(first, SortSpec::asc("name"));
        let second = SortSpec::toggle(Some(&first), "name");
        assert_eq!(second, SortSpec::desc("name"));
        let third = SortSpec::toggle(Some(&second), "price");
        assert_eq!(third, SortSpec::asc("price"));
    }
}
