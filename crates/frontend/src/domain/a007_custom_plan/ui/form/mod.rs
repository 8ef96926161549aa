//! Запрос индивидуального тарифа.
//!
//! Функции тарифа редактируются как пары "название - лимит" (пустой лимит
//! означает "без ограничения" и не отправляется), ограничения как список
//! строк. Обе секции всегда содержат хотя бы одну строку.

use super::super::api;
use crate::shared::components::ui::{TextAreaField, TextField};
use crate::shared::components::RowActions;
use crate::shared::entity_store::Mutation;
use crate::shared::form_view_model::FormViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_FORM};
use crate::shared::toast::use_toasts;
use contracts::domain::a007_custom_plan::{CustomPlanDraft, CustomPlanResponse, MAX_LIMITATION_LEN};
use contracts::shared::form::{FormPhase, RenamePolicy};
use leptos::prelude::*;
use thaw::*;

#[component]
fn FeatureRow(
    vm: FormViewModel<CustomPlanDraft>,
    index: usize,
    len: Signal<usize>,
    locked: Signal<bool>,
) -> impl IntoView {
    let key = vm.read(move |d| {
        d.features
            .rows()
            .get(index)
            .map(|r| r.key.clone())
            .unwrap_or_default()
    });
    let limit = vm.read(move |d| {
        d.features
            .rows()
            .get(index)
            .and_then(|r| r.value)
            .map(|v| v.to_string())
            .unwrap_or_default()
    });
    let key_error = vm.row_error("features", index, "key");

    view! {
        <div class="field-array__row">
            <div class="field-array__cell field-array__cell--wide">
                <input
                    class="form__input"
                    class:form__input--invalid=move || key_error.get().is_some()
                    placeholder="Feature (e.g. users)"
                    prop:value=move || key.get()
                    disabled=move || locked.get()
                    on:change=move |ev| {
                        let new_key = event_target_value(&ev);
                        vm.try_edit(|d| d.features.rename_at(index, &new_key, RenamePolicy::Reject));
                    }
                />
                {move || key_error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            </div>
            <div class="field-array__cell">
                <input
                    class="form__input"
                    type="number"
                    min="0"
                    placeholder="Unlimited"
                    prop:value=move || limit.get()
                    disabled=move || locked.get()
                    on:input=move |ev| {
                        let limit = event_target_value(&ev).trim().parse::<u32>().ok();
                        vm.try_edit(|d| d.features.set_value(index, limit));
                    }
                />
            </div>
            <RowActions
                index=index
                len=len
                locked=locked
                on_move=Callback::new(move |(from, to)| vm.try_edit(|d| d.features.move_row(from, to)))
                on_remove=Callback::new(move |i| vm.try_edit(|d| d.features.remove(i).map(|_| ())))
            />
        </div>
    }
}

#[component]
fn LimitationRow(
    vm: FormViewModel<CustomPlanDraft>,
    index: usize,
    len: Signal<usize>,
    locked: Signal<bool>,
) -> impl IntoView {
    let text = vm.read(move |d| d.limitations.get(index).cloned().unwrap_or_default());
    let error = vm.row_error("limitations", index, "text");

    view! {
        <div class="field-array__row">
            <div class="field-array__cell field-array__cell--wide">
                <input
                    class="form__input"
                    class:form__input--invalid=move || error.get().is_some()
                    placeholder="e.g. No phone support"
                    maxlength=MAX_LIMITATION_LEN.to_string()
                    prop:value=move || text.get()
                    disabled=move || locked.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.try_edit(|d| d.limitations.set(index, value));
                    }
                />
                {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
            </div>
            <RowActions
                index=index
                len=len
                locked=locked
                on_move=Callback::new(move |(from, to)| vm.try_edit(|d| d.limitations.move_row(from, to)))
                on_remove=Callback::new(move |i| vm.try_edit(|d| d.limitations.remove(i).map(|_| ())))
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CustomPlanForm() -> impl IntoView {
    let vm = FormViewModel::new(CustomPlanDraft::default());
    let request = Mutation::new(api::request_custom_plan);
    let toasts = use_toasts();
    let response = RwSignal::new(None::<CustomPlanResponse>);

    let features_len = vm.read(|d| d.features.len());
    let limitations_len = vm.read(|d| d.limitations.len());
    let locked = vm.is_locked();
    let phase = vm.phase();
    let is_submitting = Signal::derive(move || phase.get() == FormPhase::Submitting);
    // Memo: форма перестраивается только при завершении, а не при каждом вводе
    let outcome = Memo::new(move |_| phase.get().is_terminal().then(|| phase.get()));

    let submit = move |_| {
        vm.submit(request, CustomPlanDraft::to_request, move |r: &CustomPlanResponse| {
            if let Some(toasts) = toasts {
                toasts.success("Custom plan request sent");
            }
            response.set(Some(r.clone()));
        });
    };
    let start_over = move || {
        response.set(None);
        vm.reset(CustomPlanDraft::default());
    };

    view! {
        <PageFrame page_id="a007_custom_plan--form" category=PAGE_CAT_FORM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Request a custom plan"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || match outcome.get() {
                    Some(FormPhase::Submitted) => view! {
                        <div class="details-panel">
                            <p class="details-panel__message">
                                {move || response.get().map(|r| format!("Request {} received. We will contact you shortly.", r.request_id))}
                            </p>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| start_over()>
                                "New request"
                            </Button>
                        </div>
                    }.into_any(),
                    Some(_) => view! {
                        <div class="details-panel">
                            <p class="details-panel__message">"Request discarded."</p>
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| start_over()>
                                "Start again"
                            </Button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="details-panel">
                            {move || vm.error.get().map(|e| view! {
                                <div class="warning-box warning-box--error">
                                    <span class="warning-box__text">{e}</span>
                                </div>
                            })}

                            <TextAreaField
                                label="What do you need?"
                                value=vm.read(|d| d.description.clone())
                                on_input=Callback::new(move |v| vm.edit(|d| d.description = v))
                                error=vm.field_error("description")
                                disabled=locked
                            />
                            <TextField
                                label="Company size (employees)"
                                input_type="number"
                                value=vm.read(|d| d.company_size.clone())
                                on_input=Callback::new(move |v| vm.edit(|d| d.company_size = v))
                                error=vm.field_error("companySize")
                                disabled=locked
                            />

                            <h3 class="details-panel__section">"Features"</h3>
                            <div class="field-array">
                                <For
                                    each=move || 0..features_len.get()
                                    key=|index| *index
                                    children=move |index| view! {
                                        <FeatureRow vm=vm index=index len=features_len locked=locked />
                                    }
                                />
                            </div>
                            <div class="details-panel__toolbar">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| vm.edit(|d| {
                                        d.features.append();
                                    })
                                    disabled=locked
                                >
                                    {icon("plus")}
                                    " Add feature"
                                </Button>
                            </div>

                            <h3 class="details-panel__section">"Limitations"</h3>
                            <div class="field-array">
                                <For
                                    each=move || 0..limitations_len.get()
                                    key=|index| *index
                                    children=move |index| view! {
                                        <LimitationRow vm=vm index=index len=limitations_len locked=locked />
                                    }
                                />
                            </div>
                            <div class="details-panel__toolbar">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| vm.edit(|d| {
                                        d.limitations.append();
                                    })
                                    disabled=locked
                                >
                                    {icon("plus")}
                                    " Add limitation"
                                </Button>
                            </div>

                            <div class="details-panel__actions">
                                <Button appearance=ButtonAppearance::Primary on_click=submit disabled=locked>
                                    {move || if is_submitting.get() { "Sending..." } else { "Send request" }}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| {
                                        vm.cancel();
                                    }
                                    disabled=is_submitting
                                >
                                    "Cancel"
                                </Button>
                            </div>
                        </div>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
