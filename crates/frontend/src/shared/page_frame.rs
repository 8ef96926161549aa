//! PageFrame: корневая обертка страницы раздела.
//!
//! Корневой элемент получает `id` вида `"{entity}--{category}"`, например
//! `"a001_product--list"`, и атрибут `data-page-category`.

use leptos::prelude::*;

/// Список записей с фильтрами и пагинацией
pub const PAGE_CAT_LIST: &str = "list";

/// Форма одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Самостоятельная форма (не привязанная к записи)
pub const PAGE_CAT_FORM: &str = "form";

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--form",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
