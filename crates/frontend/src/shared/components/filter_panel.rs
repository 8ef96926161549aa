use crate::shared::icons::icon;
use contracts::shared::collection::{FilterState, ALL};
use leptos::prelude::*;

/// Сворачиваемая панель фильтров с пагинацией в заголовке.
///
/// Поля фильтров передаются как дочерние элементы.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,

    /// Количество активных фильтров (бейдж)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Пагинация в заголовке панели
    #[prop(optional, into)]
    pagination_controls: ViewFn,

    /// Активные фильтры в виде тегов
    #[prop(optional, into)]
    filter_tags: ViewFn,

    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("arrow-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">
                    {children()}
                    <div class="filter-panel__tags">{filter_tags.run()}</div>
                </div>
            </div>
        </div>
    }
}

/// Выбор значения категориального фильтра. Первый вариант всегда "All".
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,

    /// Текущее значение ("all" если фильтр не задан)
    #[prop(into)]
    value: Signal<String>,

    /// Пары (код, подпись)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,

    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <select
                class="filter-field__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=ALL>"All"</option>
                {move || options.get().into_iter().map(|(code, caption)| {
                    let selected_code = code.clone();
                    view! {
                        <option value=code selected=move || value.get() == selected_code>
                            {caption}
                        </option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

/// Тег активного фильтра
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

/// Теги для всех активных фильтров; `labels` сопоставляет ключ фильтра с
/// подписью, ключи без подписи показываются как есть.
#[component]
pub fn FilterTags(
    #[prop(into)]
    filters: Signal<FilterState>,

    labels: &'static [(&'static str, &'static str)],

    /// Сбросить фильтр по ключу
    on_remove: Callback<String>,
) -> impl IntoView {
    let label_for = move |key: &str| {
        labels
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
            .unwrap_or(key)
            .to_string()
    };

    view! {
        {move || filters.with(|state| {
            state
                .iter()
                .map(|(key, value)| {
                    let key = key.to_string();
                    let label = format!("{}: {}", label_for(&key), value);
                    view! {
                        <FilterTag label=label on_remove=Callback::new(move |_| on_remove.run(key.clone())) />
                    }
                })
                .collect_view()
        })}
    }
}
