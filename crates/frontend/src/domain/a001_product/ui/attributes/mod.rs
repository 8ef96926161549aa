//! Редактор характеристик товара: массив пар ключ-значение.
//!
//! Переименование ключа применяется при уходе из поля. Если новый ключ уже
//! занят, по умолчанию переименование отклоняется; с включенной опцией
//! "Overwrite" строка с занятым ключом удаляется.

use super::super::api;
use crate::shared::components::RowActions;
use crate::shared::entity_store::Mutation;
use crate::shared::form_view_model::FormViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_product::{Product, ProductAttributesDraft, UpdateAttributesRequest};
use contracts::shared::form::{FormPhase, RenamePolicy};
use leptos::prelude::*;
use thaw::*;

#[component]
fn AttributeRow(
    vm: FormViewModel<ProductAttributesDraft>,
    index: usize,
    policy: RwSignal<RenamePolicy>,
    len: Signal<usize>,
    locked: Signal<bool>,
) -> impl IntoView {
    let key = vm.read(move |d| {
        d.attributes
            .rows()
            .get(index)
            .map(|r| r.key.clone())
            .unwrap_or_default()
    });
    let value = vm.read(move |d| {
        d.attributes
            .rows()
            .get(index)
            .map(|r| r.value.clone())
            .unwrap_or_default()
    });
    let key_error = vm.row_error("attributes", index, "key");
    let value_error = vm.row_error("attributes", index, "value");

    view! {
        <div class="field-array__row">
            <div class="field-array__cell">
                <input
                    class="form__input"
                    class:form__input--invalid=move || key_error.get().is_some()
                    placeholder="Attribute"
                    prop:value=move || key.get()
                    disabled=move || locked.get()
                    on:change=move |ev| {
                        let new_key = event_target_value(&ev);
                        let policy = policy.get_untracked();
                        vm.try_edit(|d| d.attributes.rename_at(index, &new_key, policy));
                    }
                />
                {move || key_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            </div>
            <div class="field-array__cell">
                <input
                    class="form__input"
                    class:form__input--invalid=move || value_error.get().is_some()
                    placeholder="Value"
                    prop:value=move || value.get()
                    disabled=move || locked.get()
                    on:input=move |ev| {
                        let new_value = event_target_value(&ev);
                        vm.try_edit(|d| d.attributes.set_value(index, new_value));
                    }
                />
                {move || value_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            </div>
            <RowActions
                index=index
                len=len
                locked=locked
                on_move=Callback::new(move |(from, to)| vm.try_edit(|d| d.attributes.move_row(from, to)))
                on_remove=Callback::new(move |i| vm.try_edit(|d| d.attributes.remove(i).map(|_| ())))
            />
        </div>
    }
}

#[component]
pub fn ProductAttributesEditor(
    product: Product,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = FormViewModel::new(ProductAttributesDraft::from_product(&product));
    let policy = RwSignal::new(RenamePolicy::default());
    let mutation = Mutation::new(|(id, request): (String, UpdateAttributesRequest)| {
        api::update_attributes(id, request)
    });
    let toasts = use_toasts();

    let len = vm.read(|d| d.attributes.len());
    let locked = vm.is_locked();
    let is_submitting = Signal::derive(move || vm.phase().get() == FormPhase::Submitting);

    let save = move |_| {
        vm.submit(
            mutation,
            |d| (d.product_id.clone(), d.to_request()),
            move |_| {
                if let Some(toasts) = toasts {
                    toasts.success("Attributes saved");
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
                <h2 class="details-panel__title">{format!("Attributes: {}", product.name)}</h2>
                <span class="details-panel__subtitle">{product.sku.clone()}</span>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="field-array">
                <For
                    each=move || 0..len.get()
                    key=|index| *index
                    children=move |index| view! {
                        <AttributeRow vm=vm index=index policy=policy len=len locked=locked />
                    }
                />
            </div>

            <div class="details-panel__toolbar">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.edit(|d| {
                        d.attributes.append();
                    })
                    disabled=locked
                >
                    {icon("plus")}
                    " Add attribute"
                </Button>
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || policy.get() == RenamePolicy::Overwrite
                        on:change=move |ev| {
                            policy.set(if event_target_checked(&ev) {
                                RenamePolicy::Overwrite
                            } else {
                                RenamePolicy::Reject
                            });
                        }
                    />
                    " Overwrite existing keys on rename"
                </label>
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
