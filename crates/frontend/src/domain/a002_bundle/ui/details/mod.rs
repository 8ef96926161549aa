use super::super::api;
use crate::shared::components::ui::TextField;
use crate::shared::components::RowActions;
use crate::shared::entity_store::Mutation;
use crate::shared::form_view_model::FormViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a002_bundle::{Bundle, BundleDraft, BundleItem, BundleRequest};
use contracts::shared::form::FormPhase;
use leptos::prelude::*;
use thaw::*;

fn item_at(d: &BundleDraft, index: usize) -> BundleItem {
    d.items.get(index).cloned().unwrap_or_default()
}

#[component]
fn BundleItemRow(
    vm: FormViewModel<BundleDraft>,
    index: usize,
    product_options: Signal<Vec<(String, String)>>,
    len: Signal<usize>,
    locked: Signal<bool>,
) -> impl IntoView {
    let product_id = vm.read(move |d| item_at(d, index).product_id);
    let quantity = vm.read(move |d| match item_at(d, index).quantity {
        0 => String::new(),
        q => q.to_string(),
    });
    let product_error = vm.row_error("items", index, "productId");
    let quantity_error = vm.row_error("items", index, "quantity");

    view! {
        <div class="field-array__row">
            <div class="field-array__cell field-array__cell--wide">
                <select
                    class="form__select"
                    prop:value=move || product_id.get()
                    disabled=move || locked.get()
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        vm.try_edit(|d| d.items.update(index, |item| item.product_id = id));
                    }
                >
                    <option value="">"Select a product"</option>
                    {move || product_options.get().into_iter().map(|(id, caption)| {
                        let selected_id = id.clone();
                        view! {
                            <option value=id selected=move || product_id.get() == selected_id>{caption}</option>
                        }
                    }).collect_view()}
                </select>
                {move || product_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            </div>
            <div class="field-array__cell">
                <input
                    class="form__input"
                    type="number"
                    min="1"
                    placeholder="Qty"
                    prop:value=move || quantity.get()
                    disabled=move || locked.get()
                    on:input=move |ev| {
                        let quantity = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                        vm.try_edit(|d| d.items.update(index, |item| item.quantity = quantity));
                    }
                />
                {move || quantity_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            </div>
            <RowActions
                index=index
                len=len
                locked=locked
                on_move=Callback::new(move |(from, to)| vm.try_edit(|d| d.items.move_row(from, to)))
                on_remove=Callback::new(move |i| vm.try_edit(|d| d.items.remove(i).map(|_| ())))
            />
        </div>
    }
}

/// Форма набора: реквизиты и состав (минимум одна строка).
///
/// `bundle == None` открывает форму создания.
#[component]
#[allow(non_snake_case)]
pub fn BundleDetails(
    bundle: Option<Bundle>,
    /// (id товара, подпись) для выбора в строках состава
    #[prop(into)]
    product_options: Signal<Vec<(String, String)>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let is_new = bundle.is_none();
    let draft = bundle.as_ref().map(BundleDraft::from_bundle).unwrap_or_default();
    let vm = FormViewModel::new(draft);
    let toasts = use_toasts();

    let save_mutation = Mutation::new(|(id, request): (Option<String>, BundleRequest)| {
        api::save_bundle(id, request)
    });

    let len = vm.read(|d| d.items.len());
    let locked = vm.is_locked();
    let is_submitting = Signal::derive(move || vm.phase().get() == FormPhase::Submitting);
    let total_units = vm.read(|d| d.items.iter().map(|i| i.quantity).sum::<u32>());

    let save = move |_| {
        vm.submit(
            save_mutation,
            |d| (d.id.clone(), d.to_request()),
            move |saved: &Bundle| {
                if let Some(toasts) = toasts {
                    toasts.success(format!("Bundle \"{}\" saved", saved.name));
                }
                on_saved.run(());
            },
        );
    };
    let cancel = move |_| {
        if vm.cancel() {
            on_close.run(());
        }
    };

    view! {
        <div class="details-panel">
            <div class="details-panel__header">
                <h2 class="details-panel__title">
                    {if is_new { "New bundle".to_string() } else { format!("Bundle: {}", bundle.as_ref().map(|b| b.name.as_str()).unwrap_or_default()) }}
                </h2>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="form__row">
                <TextField
                    label="Name"
                    value=vm.read(|d| d.name.clone())
                    on_input=Callback::new(move |v| vm.edit(|d| d.name = v))
                    error=vm.field_error("name")
                    disabled=locked
                />
                <TextField
                    label="SKU"
                    value=vm.read(|d| d.sku.clone())
                    on_input=Callback::new(move |v| vm.edit(|d| d.sku = v))
                    error=vm.field_error("sku")
                    disabled=locked
                />
                <TextField
                    label="Price"
                    input_type="number"
                    value=vm.read(|d| d.price.clone())
                    on_input=Callback::new(move |v| vm.edit(|d| d.price = v))
                    error=vm.field_error("price")
                    disabled=locked
                />
            </div>

            <h3 class="details-panel__section">
                {move || format!("Items ({} units)", total_units.get())}
            </h3>
            <div class="field-array">
                <For
                    each=move || 0..len.get()
                    key=|index| *index
                    children=move |index| view! {
                        <BundleItemRow vm=vm index=index product_options=product_options len=len locked=locked />
                    }
                />
            </div>
            <div class="details-panel__toolbar">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.edit(|d| {
                        d.items.append();
                    })
                    disabled=locked
                >
                    {icon("plus")}
                    " Add item"
                </Button>
            </div>

            <div class="details-panel__actions">
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=locked>
                    {move || if is_submitting.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=cancel disabled=is_submitting>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

