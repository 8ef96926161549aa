use crate::shared::entity_store::EntityStore;
use contracts::domain::a008_store::Store;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use super::{api, storage};

/// Активный магазин и список доступных магазинов.
///
/// Единственный владелец выбора магазина: чтение через `use_active_store`,
/// запись через `set_active`, которая сохраняет выбор в localStorage.
/// Изменения из других вкладок приходят событием `storage`.
#[derive(Clone, Copy)]
pub struct ActiveStoreContext {
    stores: RwSignal<Vec<Store>>,
    active_id: RwSignal<Option<String>>,
}

impl ActiveStoreContext {
    fn new() -> Self {
        Self {
            stores: RwSignal::new(Vec::new()),
            active_id: RwSignal::new(storage::get_active_store()),
        }
    }

    pub fn stores(&self) -> Signal<Vec<Store>> {
        self.stores.into()
    }

    pub fn active_id(&self) -> Signal<Option<String>> {
        self.active_id.into()
    }

    pub fn active(&self) -> Signal<Option<Store>> {
        let (stores, active_id) = (self.stores, self.active_id);
        Signal::derive(move || {
            let id = active_id.get()?;
            stores.with(|s| s.iter().find(|store| store.id == id).cloned())
        })
    }

    /// Код валюты активного магазина (пусто, пока магазин не выбран)
    pub fn currency(&self) -> Signal<String> {
        let active = self.active();
        Signal::derive(move || active.with(|s| s.as_ref().map(|s| s.currency.clone()).unwrap_or_default()))
    }

    pub fn set_active(&self, id: &str) {
        if self.active_id.with_untracked(|current| current.as_deref() == Some(id)) {
            return;
        }
        log::info!("active store changed to {}", id);
        storage::save_active_store(id);
        self.active_id.set(Some(id.to_string()));
    }

    /// Выбрать магазин по умолчанию, если сохраненный недоступен
    fn reconcile(&self, stores: Vec<Store>) {
        let current = self.active_id.get_untracked();
        let valid = current
            .as_deref()
            .is_some_and(|id| stores.iter().any(|s| s.id == id));
        if !valid {
            match stores.first() {
                Some(first) => {
                    storage::save_active_store(&first.id);
                    self.active_id.set(Some(first.id.clone()));
                }
                None => {
                    storage::clear_active_store();
                    self.active_id.set(None);
                }
            }
        }
        self.stores.set(stores);
    }

    fn apply_external(&self, key: Option<String>, new_value: Option<String>) {
        if key.as_deref() != Some(storage::ACTIVE_STORE_KEY) {
            return;
        }
        let new_value = new_value.filter(|id| !id.is_empty());
        if self.active_id.get_untracked() != new_value {
            log::debug!("active store changed in another tab: {:?}", new_value);
            self.active_id.set(new_value);
        }
    }
}

#[component]
pub fn ActiveStoreProvider(children: Children) -> impl IntoView {
    let context = ActiveStoreContext::new();

    spawn_local(async move {
        match api::fetch_stores().await {
            Ok(stores) => context.reconcile(stores),
            Err(e) => log::warn!("failed to load stores: {}", e),
        }
    });

    // Провайдер живет все время работы приложения, слушатель не снимается
    let _ = window_event_listener(ev::storage, move |event| {
        context.apply_external(event.key(), event.new_value());
    });

    provide_context(context);

    children()
}

/// Контекст активного магазина
pub fn use_active_store() -> ActiveStoreContext {
    use_context::<ActiveStoreContext>().expect("ActiveStoreProvider not found in component tree")
}

/// Хранилище коллекции активного магазина: загружается при монтировании и
/// перезагружается при смене магазина (в том числе из другой вкладки).
pub fn use_store_scoped<E, F, Fut>(loader: F) -> EntityStore<E>
where
    E: Clone + Send + Sync + 'static,
    F: Fn(Option<String>) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<E>, String>> + 'static,
{
    let active_id = use_active_store().active_id();
    let store = EntityStore::new(move || loader(active_id.get_untracked()));

    Effect::new(move |_| {
        active_id.track();
        store.refetch();
    });

    store
}
