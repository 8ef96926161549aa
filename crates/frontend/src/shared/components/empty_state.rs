use contracts::shared::collection::ViewStatus;
use leptos::prelude::*;
use thaw::*;

/// Заглушка на месте пустого списка.
///
/// Пустая коллекция и отсутствие совпадений показываются по-разному; во
/// втором случае предлагается сбросить фильтры.
#[component]
pub fn EmptyState(
    #[prop(into)]
    status: Signal<ViewStatus>,

    /// Идет первая загрузка
    #[prop(into)]
    is_loading: Signal<bool>,

    /// Подпись для пустой коллекции, например "No products yet"
    #[prop(into)]
    empty_text: String,

    on_reset_filters: Callback<()>,
) -> impl IntoView {
    move || match status.get() {
        ViewStatus::Populated(_) => view! { <></> }.into_any(),
        ViewStatus::NoEntities if is_loading.get() => view! {
            <div class="empty-state">
                <Spinner />
            </div>
        }
        .into_any(),
        ViewStatus::NoEntities => view! {
            <div class="empty-state">
                <span class="empty-state__text">{empty_text.clone()}</span>
            </div>
        }
        .into_any(),
        ViewStatus::NoMatches => view! {
            <div class="empty-state">
                <span class="empty-state__text">"No items match the current filters"</span>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_reset_filters.run(())>
                    "Reset filters"
                </Button>
            </div>
        }
        .into_any(),
    }
}
