//! Общая часть view model форм с массивами полей.
//!
//! Состояние формы целиком хранится в `FormSession` из contracts; здесь
//! только реактивная обертка и связь с `Mutation`.

use super::entity_store::Mutation;
use contracts::shared::form::{FieldArrayError, FormDraft, FormPhase, FormSession, SubmitError};
use leptos::prelude::*;

pub struct FormViewModel<D: Send + Sync + 'static> {
    pub session: RwSignal<FormSession<D>>,
    /// Сообщение над формой (отклоненное действие, итог валидации)
    pub error: RwSignal<Option<String>>,
}

impl<D: Send + Sync + 'static> Clone for FormViewModel<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormViewModel<D> {}

impl<D: FormDraft + Send + Sync + 'static> FormViewModel<D> {
    pub fn new(draft: D) -> Self {
        Self {
            session: RwSignal::new(FormSession::new(draft)),
            error: RwSignal::new(None),
        }
    }

    /// Начать заново с другим черновиком
    pub fn reset(&self, draft: D) {
        self.session.set(FormSession::new(draft));
        self.error.set(None);
    }

    pub fn phase(&self) -> Signal<FormPhase> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.phase()))
    }

    /// Поля недоступны: идет отправка или форма завершена
    pub fn is_locked(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| !s.is_editable()))
    }

    /// Прочитать значение из черновика
    pub fn read<T: Send + Sync + 'static>(&self, f: impl Fn(&D) -> T + Send + Sync + 'static) -> Signal<T> {
        let session = self.session;
        Signal::derive(move || session.with(|s| f(s.draft())))
    }

    pub fn edit(&self, f: impl FnOnce(&mut D)) {
        let result = self.session.try_update(|s| s.edit(f));
        self.report(result.unwrap_or(Ok(())));
    }

    pub fn try_edit(&self, f: impl FnOnce(&mut D) -> Result<(), FieldArrayError>) {
        let result = self.session.try_update(|s| s.try_edit(f));
        self.report(result.unwrap_or(Ok(())));
    }

    fn report(&self, result: Result<(), FieldArrayError>) {
        match result {
            Ok(()) => {}
            Err(e) => {
                log::debug!("form edit rejected: {}", e);
                self.error.set(Some(e.to_string()));
            }
        }
    }

    /// Ошибка поля верхнего уровня из последней попытки отправки
    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.errors().field(field).map(str::to_string)))
    }

    /// Ошибка поля строки массива
    pub fn row_error(&self, array: &'static str, index: usize, field: &'static str) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || {
            session.with(|s| {
                s.errors()
                    .row(array, index)
                    .iter()
                    .find(|e| e.field == field)
                    .map(|e| e.message.clone())
            })
        })
    }

    /// Проверить форму и отправить черновик через `mutation`.
    ///
    /// Ошибка сервера возвращает форму к редактированию без потери строк;
    /// `on_success` вызывается после перехода в `Submitted`.
    pub fn submit<I: 'static, O: 'static>(
        &self,
        mutation: Mutation<I, O>,
        to_input: impl FnOnce(&D) -> I,
        on_success: impl FnOnce(&O) + 'static,
    ) {
        let begun = self.session.try_update(|s| s.begin_submit());
        let draft = match begun {
            Some(Ok(draft)) => draft,
            Some(Err(SubmitError::Invalid(errors))) => {
                self.error.set(Some(format!("Please fix {} error(s) before submitting", errors.count())));
                return;
            }
            Some(Err(e)) => {
                self.error.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        self.error.set(None);

        let session = self.session;
        mutation.mutate_with(to_input(&draft), move |result| {
            let submitted = session.try_update(|s| settle(s, result)).unwrap_or(false);
            if let (true, Ok(output)) = (submitted, result) {
                on_success(output);
            }
        });
    }

    /// Отменить форму. `false`, если отмена сейчас невозможна (идет отправка).
    pub fn cancel(&self) -> bool {
        let result = self.session.try_update(|s| s.cancel()).unwrap_or(Ok(()));
        let cancelled = result.is_ok();
        self.report(result);
        cancelled
    }
}

/// Применить ответ сервера к сессии; `true`, если форма отправлена.
/// Ошибку транспорта уже показало уведомление `Mutation`, в ошибки формы
/// она не попадает.
fn settle<D: FormDraft, O>(session: &mut FormSession<D>, result: &Result<O, String>) -> bool {
    session.finish_submit(&result.as_ref().map(|_| ())) == FormPhase::Submitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_custom_plan::CustomPlanDraft;

    fn submitting_session() -> FormSession<CustomPlanDraft> {
        let mut draft = CustomPlanDraft {
            description: "Regional wholesaler".into(),
            company_size: "25".into(),
            ..Default::default()
        };
        draft.limitations.set(0, "No SSO".into()).unwrap();
        let mut session = FormSession::new(draft);
        session.begin_submit().unwrap();
        session
    }

    #[test]
    fn test_transport_error_stays_out_of_form_errors() {
        let mut session = submitting_session();
        let result: Result<(), String> = Err("HTTP 502".into());
        assert!(!settle(&mut session, &result));
        assert_eq!(session.phase(), FormPhase::Editing);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_successful_response_submits() {
        let mut session = submitting_session();
        assert!(settle(&mut session, &Ok::<u32, String>(7)));
        assert_eq!(session.phase(), FormPhase::Submitted);
    }
}
