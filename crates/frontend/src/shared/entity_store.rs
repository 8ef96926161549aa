//! Адаптер хранилища сущностей поверх HTTP API.
//!
//! `EntityStore<E>` держит исходную коллекцию страницы как `Arc<Vec<E>>`:
//! производные представления сравнивают указатели, поэтому коллекция
//! заменяется целиком только после загрузки. Ответы, пришедшие после более
//! нового запроса или после размонтирования компонента, отбрасываются.
//!
//! `Mutation<I, O>` выполняет запрос изменения и при успехе перезагружает
//! связанные хранилища; ошибка показывается одним уведомлением.

use super::toast::{use_toasts, ToastService};
use contracts::shared::request_guard::RequestGuard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

type LocalFuture<T> = Pin<Box<dyn Future<Output = Result<T, String>>>>;
type Loader<E> = Rc<dyn Fn() -> LocalFuture<Vec<E>>>;

pub struct EntityStore<E: Send + Sync + 'static> {
    data: RwSignal<Arc<Vec<E>>>,
    is_loading: RwSignal<bool>,
    is_loaded: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    loader: StoredValue<Loader<E>, LocalStorage>,
    guard: StoredValue<RequestGuard>,
}

impl<E: Send + Sync + 'static> Clone for EntityStore<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for EntityStore<E> {}

impl<E: Clone + Send + Sync + 'static> EntityStore<E> {
    /// Создать хранилище с функцией загрузки. Загрузка не запускается,
    /// пока не вызван `refetch`.
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<E>, String>> + 'static,
    {
        let loader: Loader<E> = Rc::new(move || Box::pin(loader()));
        let guard = RequestGuard::new();

        let guard_for_cleanup = guard.clone();
        on_cleanup(move || guard_for_cleanup.retire());

        Self {
            data: RwSignal::new(Arc::new(Vec::new())),
            is_loading: RwSignal::new(false),
            is_loaded: RwSignal::new(false),
            error: RwSignal::new(None),
            loader: StoredValue::new_local(loader),
            guard: StoredValue::new(guard),
        }
    }

    pub fn data(&self) -> Signal<Arc<Vec<E>>> {
        self.data.into()
    }

    pub fn is_loading(&self) -> Signal<bool> {
        self.is_loading.into()
    }

    /// Была ли хотя бы одна успешная загрузка
    pub fn is_loaded(&self) -> Signal<bool> {
        self.is_loaded.into()
    }

    pub fn error(&self) -> Signal<Option<String>> {
        self.error.into()
    }

    /// Загрузить коллекцию заново. Более поздний вызов вытесняет ответ
    /// более раннего.
    pub fn refetch(&self) {
        let Some(guard) = self.guard.try_get_value() else {
            return;
        };
        let Some(future) = self.loader.try_with_value(|load| load()) else {
            return;
        };
        let ticket = guard.issue();
        let (data, is_loading, is_loaded, error) =
            (self.data, self.is_loading, self.is_loaded, self.error);

        is_loading.set(true);
        spawn_local(async move {
            let result = future.await;
            let applied = guard.apply(ticket, result, |result| {
                match result {
                    Ok(items) => {
                        log::debug!("entity store loaded {} items", items.len());
                        data.set(Arc::new(items));
                        error.set(None);
                        is_loaded.set(true);
                    }
                    Err(e) => {
                        log::warn!("entity store load failed: {}", e);
                        error.set(Some(e));
                    }
                }
                is_loading.set(false);
            });
            if !applied {
                log::debug!("stale entity store response dropped");
            }
        });
    }

    /// Изменить локальную копию коллекции (без запроса к серверу).
    pub fn update_local(&self, f: impl FnOnce(&mut Vec<E>)) {
        self.data.update(|items| f(Arc::make_mut(items)));
    }
}

type Action<I, O> = Rc<dyn Fn(I) -> LocalFuture<O>>;
type Invalidation = Rc<dyn Fn()>;

pub struct Mutation<I: 'static, O: 'static> {
    is_pending: RwSignal<bool>,
    action: StoredValue<Action<I, O>, LocalStorage>,
    invalidates: StoredValue<Vec<Invalidation>, LocalStorage>,
    guard: StoredValue<RequestGuard>,
    toasts: Option<ToastService>,
}

impl<I: 'static, O: 'static> Clone for Mutation<I, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: 'static, O: 'static> Copy for Mutation<I, O> {}

impl<I: 'static, O: 'static> Mutation<I, O> {
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn(I) -> Fut + 'static,
        Fut: Future<Output = Result<O, String>> + 'static,
    {
        let action: Action<I, O> = Rc::new(move |input| Box::pin(action(input)));
        let guard = RequestGuard::new();

        let guard_for_cleanup = guard.clone();
        on_cleanup(move || guard_for_cleanup.retire());

        Self {
            is_pending: RwSignal::new(false),
            action: StoredValue::new_local(action),
            invalidates: StoredValue::new_local(Vec::new()),
            guard: StoredValue::new(guard),
            toasts: use_toasts(),
        }
    }

    /// Перезагружать `store` после каждой успешной мутации
    pub fn invalidates<E: Clone + Send + Sync + 'static>(self, store: EntityStore<E>) -> Self {
        self.invalidates
            .update_value(|list| list.push(Rc::new(move || store.refetch())));
        self
    }

    pub fn is_pending(&self) -> Signal<bool> {
        self.is_pending.into()
    }

    pub fn mutate(&self, input: I) {
        self.mutate_with(input, |_| {});
    }

    /// Выполнить мутацию и передать результат в `on_done` (если компонент
    /// еще смонтирован).
    pub fn mutate_with(&self, input: I, on_done: impl FnOnce(&Result<O, String>) + 'static) {
        let Some(guard) = self.guard.try_get_value() else {
            return;
        };
        let Some(future) = self.action.try_with_value(|action| action(input)) else {
            return;
        };
        let (is_pending, invalidates, toasts) = (self.is_pending, self.invalidates, self.toasts);

        is_pending.set(true);
        spawn_local(async move {
            let result = future.await;
            if guard.is_retired() {
                log::debug!("mutation finished after unmount, result ignored");
                return;
            }
            is_pending.set(false);
            match &result {
                Ok(_) => invalidates.with_value(|list| list.iter().for_each(|refetch| refetch())),
                Err(e) => match toasts {
                    Some(toasts) => toasts.error(e.clone()),
                    None => log::warn!("mutation failed: {}", e),
                },
            }
            on_done(&result);
        });
    }
}
