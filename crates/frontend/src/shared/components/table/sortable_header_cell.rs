//! Сортируемая ячейка заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     align="right"
//!     sort=list.sort
//!     on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::collection::SortSpec;
use leptos::prelude::*;
use thaw::*;

/// Заголовок колонки: клик переключает сортировку по полю
/// (новое поле по возрастанию, повторный клик меняет направление).
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Поле сущности для сортировки
    sort_field: &'static str,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<Option<SortSpec>>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// left / right
    #[prop(optional, default = "left")]
    align: &'static str,

    #[prop(optional, default = true)]
    resizable: bool,
) -> impl IntoView {
    let header_class = if align == "right" {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    view! {
        <TableHeaderCell resizable=resizable min_width=min_width>
            <div class=header_class on:click=move |_| on_sort.run(sort_field.to_string())>
                {label}
                <span class=move || sort.with(|s| get_sort_class(s.as_ref(), sort_field))>
                    {move || sort.with(|s| get_sort_indicator(s.as_ref(), sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
