//! Всплывающие уведомления.
//!
//! `ToastService` предоставляется в `App`; ошибки мутаций и загрузки
//! показываются одним уведомлением без автоматического повтора.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

const TOAST_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = Uuid::new_v4();
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        let service = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            service.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Сервис уведомлений из контекста, если он предоставлен
pub fn use_toasts() -> Option<ToastService> {
    use_context::<ToastService>()
}

/// Стек уведомлений в правом нижнем углу
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not found in context");

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let intent = match toast.kind {
                        ToastKind::Success => MessageBarIntent::Success,
                        ToastKind::Error => MessageBarIntent::Error,
                    };
                    let id = toast.id;
                    view! {
                        <div class="toast-host__item" on:click=move |_| service.dismiss(id)>
                            <MessageBar intent=intent>
                                <span>{toast.message}</span>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
