//! Поля форм с подписью и сообщением об ошибке валидации.

use leptos::prelude::*;

#[component]
fn FieldFrame(
    #[prop(into)]
    label: String,
    error: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <span class="form__label">{label}</span>
            {children()}
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </label>
    }
}

#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    placeholder: String,
    /// text / number
    #[prop(optional, default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <FieldFrame label=label error=error>
            <input
                class="form__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </FieldFrame>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, default = 4)]
    rows: u32,
) -> impl IntoView {
    view! {
        <FieldFrame label=label error=error>
            <textarea
                class="form__textarea"
                rows=rows
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </FieldFrame>
    }
}

/// Выпадающий список; `options`: пары (значение, подпись), первым идет
/// пустой вариант с подписью `placeholder`.
#[component]
pub fn SelectField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <FieldFrame label=label error=error>
            <select
                class="form__select"
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || options.get().into_iter().map(|(code, caption)| {
                    let selected_code = code.clone();
                    view! {
                        <option value=code selected=move || value.get() == selected_code>{caption}</option>
                    }
                }).collect_view()}
            </select>
        </FieldFrame>
    }
}
