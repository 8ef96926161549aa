//! Модель списка: фильтры, сортировка и страницы поверх `EntityStore`.
//!
//! Производное представление считается через `ViewCache`, поэтому повторное
//! чтение при неизменных источнике, фильтрах и сортировке возвращает тот же
//! `Arc` без пересчета.

use super::entity_store::EntityStore;
use contracts::shared::collection::{
    category_options, paginate, Entity, FilterDef, FilterState, SortSpec, ViewCache, ViewStatus, ALL,
};
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::window;

/// Результат вычисления представления
#[derive(Debug)]
pub struct ViewSnapshot<E> {
    pub items: Arc<Vec<E>>,
    pub status: ViewStatus,
    pub error: Option<String>,
}

impl<E> Clone for ViewSnapshot<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            status: self.status,
            error: self.error.clone(),
        }
    }
}

// Сравнение по указателю: одинаковый Arc означает одинаковое представление
impl<E> PartialEq for ViewSnapshot<E> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
            && self.status == other.status
            && self.error == other.error
    }
}

pub struct ListView<E: Send + Sync + 'static> {
    pub store: EntityStore<E>,
    pub filters: RwSignal<FilterState>,
    pub sort: RwSignal<Option<SortSpec>>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    pub filters_expanded: RwSignal<bool>,
    defs: &'static [FilterDef],
    snapshot: Memo<ViewSnapshot<E>>,
}

impl<E: Send + Sync + 'static> Clone for ListView<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for ListView<E> {}

impl<E: Entity + Clone + Send + Sync + 'static> ListView<E> {
    pub fn new(store: EntityStore<E>, defs: &'static [FilterDef], page_size: usize) -> Self {
        let filters = RwSignal::new(FilterState::new());
        let sort = RwSignal::new(None::<SortSpec>);
        let cache = StoredValue::new(ViewCache::<E>::new(defs));

        let data = store.data();
        let snapshot = Memo::new(move |_| {
            let source = data.get();
            let result = filters.with(|state| {
                sort.with(|sort| {
                    cache
                        .try_update_value(|cache| cache.view(&source, state, sort.as_ref()))
                        .unwrap_or_else(|| Ok(Arc::clone(&source)))
                })
            });
            match result {
                Ok(items) => ViewSnapshot {
                    status: ViewStatus::classify(source.len(), items.len()),
                    items,
                    error: None,
                },
                Err(e) => {
                    log::warn!("filter state rejected: {}", e);
                    ViewSnapshot {
                        status: ViewStatus::classify(source.len(), 0),
                        items: Arc::new(Vec::new()),
                        error: Some(e.to_string()),
                    }
                }
            }
        });

        Self {
            store,
            filters,
            sort,
            page: RwSignal::new(0),
            page_size: RwSignal::new(page_size.max(1)),
            filters_expanded: RwSignal::new(false),
            defs,
            snapshot,
        }
    }

    /// Начальная сортировка
    pub fn with_sort(self, spec: SortSpec) -> Self {
        self.sort.set(Some(spec));
        self
    }

    /// Прочитать фильтры из строки запроса и записывать их обратно при
    /// каждом изменении (`history.replaceState`), чтобы список можно было
    /// сохранить в закладках.
    pub fn sync_with_url(self) -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let parsed = FilterState::from_query(&search).map(|mut state| {
            state.retain_keys(self.defs);
            state
        });
        match parsed {
            Ok(state) if state.is_active() => {
                self.filters.set(state);
                self.filters_expanded.set(true);
            }
            Ok(_) => {}
            Err(e) => log::warn!("ignoring malformed query string {:?}: {}", search, e),
        }

        let filters = self.filters;
        Effect::new(move |_| {
            let query = filters.with(|f| f.to_query());
            let new_url = if query.is_empty() {
                window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_else(|| "/".to_string())
            } else {
                format!("?{}", query)
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search.trim_start_matches('?') != query {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
        self
    }

    pub fn set_filter(&self, key: &str, value: String) {
        self.filters.update(|f| f.set(key, value));
        self.page.set(0);
    }

    pub fn clear_filter(&self, key: &str) {
        self.filters.update(|f| f.clear(key));
        self.page.set(0);
    }

    pub fn reset_filters(&self) {
        self.filters.update(|f| f.reset());
        self.page.set(0);
    }

    /// Значение фильтра для элемента управления ("all" для неактивного)
    pub fn filter_value(&self, key: &'static str) -> Signal<String> {
        let filters = self.filters;
        Signal::derive(move || {
            filters.with(|f| f.get(key).unwrap_or(ALL).to_string())
        })
    }

    /// Текст поискового фильтра (пусто, если не задан)
    pub fn search_text(&self, key: &'static str) -> Signal<String> {
        let filters = self.filters;
        Signal::derive(move || filters.with(|f| f.get(key).unwrap_or_default().to_string()))
    }

    pub fn toggle_sort(&self, field: &str) {
        self.sort
            .update(|current| *current = Some(SortSpec::toggle(current.as_ref(), field)));
    }

    pub fn active_filters_count(&self) -> Signal<usize> {
        let filters = self.filters;
        Signal::derive(move || filters.with(|f| f.active_count()))
    }

    pub fn items(&self) -> Signal<Arc<Vec<E>>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| Arc::clone(&s.items)))
    }

    pub fn status(&self) -> Signal<ViewStatus> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.status))
    }

    pub fn filter_error(&self) -> Signal<Option<String>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.error.clone()))
    }

    /// Текущая страница представления
    pub fn page_items(&self) -> Signal<Vec<E>> {
        let (snapshot, page, page_size) = (self.snapshot, self.page, self.page_size);
        Signal::derive(move || {
            snapshot.with(|s| paginate(&s.items, page.get(), page_size.get()).items.to_vec())
        })
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let (snapshot, page_size) = (self.snapshot, self.page_size);
        Signal::derive(move || snapshot.with(|s| paginate(&s.items, 0, page_size.get()).total_pages))
    }

    pub fn total_items(&self) -> Signal<usize> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.items.len()))
    }

    /// Страница после ограничения диапазоном
    pub fn current_page(&self) -> Signal<usize> {
        let (snapshot, page, page_size) = (self.snapshot, self.page, self.page_size);
        Signal::derive(move || snapshot.with(|s| paginate(&s.items, page.get(), page_size.get()).page))
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size.max(1));
        self.page.set(0);
    }

    /// Варианты категориального фильтра по всей исходной коллекции
    pub fn options(&self, field: &'static str) -> Signal<Vec<String>> {
        let data = self.store.data();
        Signal::derive(move || data.with(|items| category_options(items.as_slice(), field)))
    }
}
