//! Верхняя панель: переключатель меню, название и выбор активного магазина.

use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::icons::icon;
use crate::system::active_store::use_active_store;
use leptos::prelude::*;

#[component]
fn StoreSelect() -> impl IntoView {
    let active_store = use_active_store();
    let stores = active_store.stores();
    let active_id = active_store.active_id();

    view! {
        <label class="top-header__store">
            {icon("store")}
            <select
                class="top-header__store-select"
                prop:value=move || active_id.get().unwrap_or_default()
                disabled=move || stores.get().is_empty()
                on:change=move |ev| active_store.set_active(&event_target_value(&ev))
            >
                {move || {
                    let current = active_id.get();
                    stores.get().into_iter().map(|store| {
                        let selected = current.as_deref() == Some(store.id.as_str());
                        view! {
                            <option value=store.id.clone() selected=selected>
                                {format!("{} ({})", store.name, store.currency)}
                            </option>
                        }
                    }).collect_view()
                }}
            </select>
        </label>
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() { icon("chevrons-left") } else { icon("chevrons-right") }}
                </button>
                <span class="top-header__title">"Inventory"</span>
            </div>

            <div class="top-header__actions">
                <StoreSelect />
                <button
                    class="top-header__icon-btn"
                    title="Notifications"
                    on:click=move |_| ctx.open(Section::Notifications)
                >
                    {icon("notifications")}
                </button>
            </div>
        </div>
    }
}
