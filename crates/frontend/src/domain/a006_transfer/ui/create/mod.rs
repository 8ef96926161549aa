//! Форма создания перемещения между складами.

use super::super::api;
use crate::shared::components::ui::{SelectField, TextAreaField};
use crate::shared::components::RowActions;
use crate::shared::entity_store::Mutation;
use crate::shared::form_view_model::FormViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a006_transfer::{Transfer, TransferDraft, TransferLine};
use contracts::shared::form::FormPhase;
use leptos::prelude::*;
use thaw::*;

fn line_at(d: &TransferDraft, index: usize) -> TransferLine {
    d.lines.get(index).cloned().unwrap_or_default()
}

#[component]
fn TransferLineRow(
    vm: FormViewModel<TransferDraft>,
    index: usize,
    product_options: Signal<Vec<(String, String)>>,
    len: Signal<usize>,
    locked: Signal<bool>,
) -> impl IntoView {
    let product_id = vm.read(move |d| line_at(d, index).product_id);
    let quantity = vm.read(move |d| match line_at(d, index).quantity {
        0 => String::new(),
        q => q.to_string(),
    });
    let quantity_error = vm.row_error("lines", index, "quantity");

    view! {
        <div class="field-array__row">
            <SelectField
                label=format!("Line {}", index + 1)
                value=product_id
                options=product_options
                on_change=Callback::new(move |id: String| {
                    vm.try_edit(|d| d.lines.update(index, |line| line.product_id = id))
                })
                error=vm.row_error("lines", index, "productId")
                disabled=locked
                placeholder="Select a product"
            />
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
                        vm.try_edit(|d| d.lines.update(index, |line| line.quantity = quantity));
                    }
                />
                {move || quantity_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            </div>
            <RowActions
                index=index
                len=len
                locked=locked
                on_move=Callback::new(move |(from, to)| vm.try_edit(|d| d.lines.move_row(from, to)))
                on_remove=Callback::new(move |i| vm.try_edit(|d| d.lines.remove(i).map(|_| ())))
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TransferCreate(
    #[prop(into)]
    warehouse_options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    product_options: Signal<Vec<(String, String)>>,
    on_close: Callback<()>,
    /// Вызывается с созданным перемещением
    on_created: Callback<Transfer>,
) -> impl IntoView {
    let vm = FormViewModel::new(TransferDraft::default());
    let create = Mutation::new(api::create_transfer);
    let toasts = use_toasts();

    let len = vm.read(|d| d.lines.len());
    let locked = vm.is_locked();
    let is_submitting = Signal::derive(move || vm.phase().get() == FormPhase::Submitting);

    let submit = move |_| {
        vm.submit(create, TransferDraft::to_request, move |transfer: &Transfer| {
            if let Some(toasts) = toasts {
                toasts.success(format!("Transfer {} created", transfer.reference));
            }
            on_created.run(transfer.clone());
        });
    };
    let cancel = move |_| {
        if vm.cancel() {
            on_close.run(());
        }
    };

    view! {
        <div class="details-panel">
            <div class="details-panel__header">
                <h2 class="details-panel__title">"New transfer"</h2>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="form__row">
                <SelectField
                    label="From warehouse"
                    value=vm.read(|d| d.from_warehouse_id.clone())
                    options=warehouse_options
                    on_change=Callback::new(move |id| vm.edit(|d| d.from_warehouse_id = id))
                    error=vm.field_error("fromWarehouseId")
                    disabled=locked
                    placeholder="Select source"
                />
                <SelectField
                    label="To warehouse"
                    value=vm.read(|d| d.to_warehouse_id.clone())
                    options=warehouse_options
                    on_change=Callback::new(move |id| vm.edit(|d| d.to_warehouse_id = id))
                    error=vm.field_error("toWarehouseId")
                    disabled=locked
                    placeholder="Select destination"
                />
            </div>

            <h3 class="details-panel__section">"Lines"</h3>
            <div class="field-array">
                <For
                    each=move || 0..len.get()
                    key=|index| *index
                    children=move |index| view! {
                        <TransferLineRow vm=vm index=index product_options=product_options len=len locked=locked />
                    }
                />
            </div>
            <div class="details-panel__toolbar">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.edit(|d| {
                        d.lines.append();
                    })
                    disabled=locked
                >
                    {icon("plus")}
                    " Add line"
                </Button>
            </div>

            <TextAreaField
                label="Note"
                value=vm.read(|d| d.note.clone())
                on_input=Callback::new(move |v| vm.edit(|d| d.note = v))
                disabled=locked
                rows=3
            />

            <div class="details-panel__actions">
                <Button appearance=ButtonAppearance::Primary on_click=submit disabled=locked>
                    {move || if is_submitting.get() { "Creating..." } else { "Create transfer" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=cancel disabled=is_submitting>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
