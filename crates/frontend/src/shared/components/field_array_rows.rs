use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопки строки массива полей: вверх, вниз, удалить.
///
/// Удаление последней строки разрешено: массив сам оставит одну пустую.
#[component]
pub fn RowActions(
    index: usize,

    /// Текущее количество строк
    #[prop(into)]
    len: Signal<usize>,

    /// Форма не редактируется (идет отправка)
    #[prop(into)]
    locked: Signal<bool>,

    /// (откуда, куда)
    on_move: Callback<(usize, usize)>,

    on_remove: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="row-actions">
            <button
                class="row-actions__btn"
                title="Move up"
                disabled=move || locked.get() || index == 0
                on:click=move |_| on_move.run((index, index - 1))
            >
                {icon("arrow-up")}
            </button>
            <button
                class="row-actions__btn"
                title="Move down"
                disabled=move || { locked.get() || index + 1 >= len.get() }
                on:click=move |_| on_move.run((index, index + 1))
            >
                {icon("arrow-down")}
            </button>
            <button
                class="row-actions__btn row-actions__btn--danger"
                title="Remove"
                disabled=move || locked.get()
                on:click=move |_| on_remove.run(index)
            >
                {icon("delete")}
            </button>
        </div>
    }
}
