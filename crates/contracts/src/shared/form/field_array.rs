use super::validation::{Validate, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldArrayError {
    #[error("form is being submitted")]
    Busy,
    #[error("form is already closed")]
    Closed,
    #[error("row {index} is out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("key '{0}' already exists")]
    DuplicateKey(String),
    #[error("key '{0}' not found")]
    UnknownKey(String),
    #[error("key must not be empty")]
    EmptyKey,
}

/// Упорядоченный список строк формы, в котором всегда есть хотя бы одна строка.
///
/// Удаление последней строки заменяет ее пустой строкой.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldArray<T> {
    rows: Vec<T>,
}

impl<T: Default + Clone> FieldArray<T> {
    pub fn new() -> Self {
        Self {
            rows: vec![T::default()],
        }
    }

    /// Пустой входной список дает одну пустую строку
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Self::new()
        } else {
            Self { rows }
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Всегда `false`: массив не бывает пустым
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// Добавить пустую строку в конец, возвращает ее индекс
    pub fn append(&mut self) -> usize {
        self.rows.push(T::default());
        self.rows.len() - 1
    }

    pub fn push(&mut self, row: T) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Удалить строку. Если строка единственная, массив сбрасывается
    /// к одной пустой строке.
    pub fn remove(&mut self, index: usize) -> Result<T, FieldArrayError> {
        self.check(index)?;
        let removed = self.rows.remove(index);
        if self.rows.is_empty() {
            self.rows.push(T::default());
        }
        Ok(removed)
    }

    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut T)) -> Result<(), FieldArrayError> {
        self.check(index)?;
        f(&mut self.rows[index]);
        Ok(())
    }

    pub fn set(&mut self, index: usize, row: T) -> Result<(), FieldArrayError> {
        self.update(index, |r| *r = row)
    }

    /// Переместить строку `from` на позицию `to`
    pub fn move_row(&mut self, from: usize, to: usize) -> Result<(), FieldArrayError> {
        self.check(from)?;
        self.check(to)?;
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.rows = vec![T::default()];
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    fn check(&self, index: usize) -> Result<(), FieldArrayError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(FieldArrayError::OutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }
}

impl<T: Default + Clone + Validate> FieldArray<T> {
    /// Проверить все строки; ошибки сохраняются под именем массива и индексом
    pub fn validate_into(&self, array: &str, errors: &mut ValidationErrors) {
        for (index, row) in self.rows.iter().enumerate() {
            for error in row.validate() {
                errors.add_row(array, index, error);
            }
        }
    }
}

impl<T: Default + Clone> Default for FieldArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Стадия формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Форма заполняется (в массивах n >= 1 строк)
    Editing,
    Submitting,
    Submitted,
    Cancelled,
}

impl FormPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FormPhase::Submitted | FormPhase::Cancelled)
    }
}

/// Ошибка отправки формы
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    State(#[from] FieldArrayError),
}

/// Черновик формы, который можно проверить целиком перед отправкой
pub trait FormDraft: Default + Clone {
    fn validate(&self) -> ValidationErrors;
}

/// Сессия редактирования формы с массивами полей.
///
/// Любые изменения черновика запрещены во время отправки и после
/// завершения формы (отправлена или отменена).
#[derive(Debug, Clone)]
pub struct FormSession<D> {
    draft: D,
    phase: FormPhase,
    errors: ValidationErrors,
}

impl<D: FormDraft> FormSession<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            phase: FormPhase::Editing,
            errors: ValidationErrors::new(),
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Ошибки последней попытки отправки
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_editable(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    fn ensure_editable(&self) -> Result<(), FieldArrayError> {
        match self.phase {
            FormPhase::Editing => Ok(()),
            FormPhase::Submitting => Err(FieldArrayError::Busy),
            FormPhase::Submitted | FormPhase::Cancelled => Err(FieldArrayError::Closed),
        }
    }

    /// Изменить черновик
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut D) -> R) -> Result<R, FieldArrayError> {
        self.ensure_editable()?;
        Ok(f(&mut self.draft))
    }

    /// Изменение, которое само может быть отклонено (например, remove по индексу)
    pub fn try_edit<R>(
        &mut self,
        f: impl FnOnce(&mut D) -> Result<R, FieldArrayError>,
    ) -> Result<R, FieldArrayError> {
        self.ensure_editable()?;
        f(&mut self.draft)
    }

    /// Проверить форму и перейти в `Submitting`.
    ///
    /// Возвращает копию черновика для сериализации. При ошибках
    /// валидации форма остается в `Editing`.
    pub fn begin_submit(&mut self) -> Result<D, SubmitError> {
        self.ensure_editable()?;
        let errors = self.draft.validate();
        if !errors.is_empty() {
            log::debug!("form validation failed: {}", errors);
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }
        self.errors = ValidationErrors::new();
        self.phase = FormPhase::Submitting;
        Ok(self.draft.clone())
    }

    /// Результат отправки: успех завершает форму, ошибка транспорта
    /// возвращает ее в `Editing` без потери строк.
    pub fn finish_submit<E: std::fmt::Display>(&mut self, result: &Result<(), E>) -> FormPhase {
        if self.phase != FormPhase::Submitting {
            log::warn!("finish_submit called in phase {:?}", self.phase);
            return self.phase;
        }
        self.phase = match result {
            Ok(()) => FormPhase::Submitted,
            Err(e) => {
                log::warn!("form submission failed: {}", e);
                FormPhase::Editing
            }
        };
        self.phase
    }

    /// Отмена: черновик отбрасывается, запрос на сервер не отправляется
    pub fn cancel(&mut self) -> Result<(), FieldArrayError> {
        if self.phase == FormPhase::Submitting {
            return Err(FieldArrayError::Busy);
        }
        if self.phase.is_terminal() {
            return Err(FieldArrayError::Closed);
        }
        self.draft = D::default();
        self.errors = ValidationErrors::new();
        self.phase = FormPhase::Cancelled;
        Ok(())
    }
}

impl<D: FormDraft> Default for FormSession<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

#[cfg(test)]
mod tests {
    use super::super::validation::FieldError;
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Line {
        product: String,
        quantity: u32,
    }

    impl Validate for Line {
        fn validate(&self) -> Vec<FieldError> {
            let mut errors = Vec::new();
            if self.product.trim().is_empty() {
                errors.push(FieldError::new("product", "required"));
            }
            if self.quantity == 0 {
                errors.push(FieldError::new("quantity", "must be positive"));
            }
            errors
        }
    }

    #[derive(Debug, Clone, Default)]
    struct Draft {
        note: String,
        lines: FieldArray<Line>,
    }

    impl FormDraft for Draft {
        fn validate(&self) -> ValidationErrors {
            let mut errors = ValidationErrors::new();
            errors.require("note", &self.note, "required");
            self.lines.validate_into("lines", &mut errors);
            errors
        }
    }

    fn line(product: &str, quantity: u32) -> Line {
        Line {
            product: product.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_new_array_has_one_blank_row() {
        let arr: FieldArray<Line> = FieldArray::new();
        assert_eq!(arr.rows(), &[Line::default()]);
        assert_eq!(FieldArray::<Line>::from_rows(Vec::new()).len(), 1);
    }

    #[test]
    fn test_removing_last_row_resets_to_blank() {
        let mut arr = FieldArray::from_rows(vec![line("a", 1)]);
        let removed = arr.remove(0).unwrap();
        assert_eq!(removed, line("a", 1));
        assert_eq!(arr.rows(), &[Line::default()]);
    }

    #[test]
    fn test_length_never_drops_below_one() {
        let mut arr: FieldArray<Line> = FieldArray::new();
        // детерминированная последовательность append/remove
        let ops = [true, false, false, true, true, false, false, false, true, false];
        for (step, append) in ops.iter().enumerate() {
            if *append {
                arr.append();
            } else {
                let last = arr.len() - 1;
                arr.remove(step % (last + 1)).unwrap();
            }
            assert!(arr.len() >= 1, "step {}", step);
        }
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut arr: FieldArray<Line> = FieldArray::new();
        assert_eq!(
            arr.remove(3),
            Err(FieldArrayError::OutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_move_row() {
        let mut arr = FieldArray::from_rows(vec![line("a", 1), line("b", 1), line("c", 1)]);
        arr.move_row(0, 2).unwrap();
        let names: Vec<&str> = arr.iter().map(|l| l.product.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_submit_reports_row_errors_by_index() {
        let mut session = FormSession::new(Draft {
            note: "restock".into(),
            lines: FieldArray::from_rows(vec![line("a", 1), line("", 0), line("c", 2)]),
        });
        let err = session.begin_submit().unwrap_err();
        let SubmitError::Invalid(errors) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.invalid_rows("lines"), vec![1]);
        assert_eq!(errors.row("lines", 1).len(), 2);
        assert_eq!(session.phase(), FormPhase::Editing);
        assert_eq!(session.errors().count(), 2);
    }

    #[test]
    fn test_append_rejected_while_submitting() {
        let mut session = FormSession::new(Draft {
            note: "restock".into(),
            lines: FieldArray::from_rows(vec![line("a", 1)]),
        });
        let payload = session.begin_submit().unwrap();
        assert_eq!(payload.lines.len(), 1);
        assert_eq!(session.phase(), FormPhase::Submitting);
        assert_eq!(
            session.edit(|d| d.lines.append()),
            Err(FieldArrayError::Busy)
        );
        assert_eq!(session.cancel(), Err(FieldArrayError::Busy));
    }

    #[test]
    fn test_transport_failure_allows_retry() {
        let mut session = FormSession::new(Draft {
            note: "restock".into(),
            lines: FieldArray::from_rows(vec![line("a", 1), line("b", 2)]),
        });
        session.begin_submit().unwrap();
        let phase = session.finish_submit(&Err::<(), _>("HTTP 500"));
        assert_eq!(phase, FormPhase::Editing);
        assert_eq!(session.draft().lines.len(), 2);
        assert!(session.errors().is_empty());

        session.edit(|d| d.lines.append()).unwrap();
        session
            .try_edit(|d| d.lines.update(2, |l| *l = line("c", 3)))
            .unwrap();
        session.begin_submit().unwrap();
        assert_eq!(
            session.finish_submit(&Ok::<(), String>(())),
            FormPhase::Submitted
        );
        assert_eq!(session.edit(|_| ()), Err(FieldArrayError::Closed));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut session = FormSession::new(Draft {
            note: "restock".into(),
            lines: FieldArray::from_rows(vec![line("a", 1), line("b", 2)]),
        });
        session.cancel().unwrap();
        assert_eq!(session.phase(), FormPhase::Cancelled);
        assert_eq!(session.draft().lines.len(), 1);
        assert!(session.draft().note.is_empty());
        assert_eq!(session.cancel(), Err(FieldArrayError::Closed));
    }
}
