use crate::shared::icons::icon;
use leptos::prelude::*;

const PAGE_SIZE_OPTIONS: &[usize] = &[25, 50, 100, 200];

/// Навигация по страницам производного представления
#[component]
pub fn PaginationControls(
    /// Текущая страница (с нуля)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Количество элементов после фильтрации
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    let nav_button = move |icon_name: &'static str, title: &'static str, target: fn(usize, usize) -> usize, disabled: Signal<bool>| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || disabled.get()
                on:click=move |_| on_page_change.run(target(current_page.get(), total_pages.get()))
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav_button("chevrons-left", "First page", |_, _| 0, Signal::derive(is_first))}
            {nav_button("chevron-left", "Previous page", |page, _| page.saturating_sub(1), Signal::derive(is_first))}
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    current_page.get() + 1,
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            {nav_button("chevron-right", "Next page", |page, total| (page + 1).min(total.saturating_sub(1)), Signal::derive(is_last))}
            {nav_button("chevrons-right", "Last page", |_, total| total.saturating_sub(1), Signal::derive(is_last))}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
