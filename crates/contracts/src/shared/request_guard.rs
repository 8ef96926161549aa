use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Билет асинхронного запроса, выданный `RequestGuard`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Защита асинхронных продолжений.
///
/// Результат запроса применяется только если его билет последний из
/// выданных и владелец (компонент) еще жив. Более новый запрос вытесняет
/// старый (last-write-wins), `retire` отменяет все выданные билеты.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    generation: Arc<AtomicU64>,
    retired: Arc<AtomicBool>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выдать билет для нового запроса
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.retired.load(Ordering::SeqCst) && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Владелец размонтирован: ни один результат больше не применяется
    pub fn retire(&self) {
        self.retired.store(true, Ordering::SeqCst);
    }

    pub fn is_retired(&self) -> bool {
        self.retired.load(Ordering::SeqCst)
    }

    /// Применить результат, если билет еще актуален.
    /// Возвращает `false`, если результат отброшен.
    pub fn apply<T>(&self, ticket: RequestTicket, value: T, f: impl FnOnce(T)) -> bool {
        if self.is_current(ticket) {
            f(value);
            true
        } else {
            log::debug!("stale response dropped (ticket {})", ticket.0);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_newer_request_supersedes_older() {
        let guard = RequestGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));

        let applied = RefCell::new(Vec::new());
        // второй ответ пришел раньше первого
        guard.apply(second, "second", |v| applied.borrow_mut().push(v));
        guard.apply(first, "first", |v| applied.borrow_mut().push(v));
        assert_eq!(*applied.borrow(), vec!["second"]);
    }

    #[test]
    fn test_retired_guard_drops_everything() {
        let guard = RequestGuard::new();
        let ticket = guard.issue();
        let clone = guard.clone();
        clone.retire();
        assert!(guard.is_retired());
        assert!(!guard.apply(ticket, 1, |_| panic!("must not be applied")));
    }
}
