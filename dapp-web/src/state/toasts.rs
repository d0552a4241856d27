//! Toast notifications
//!
//! A small store of on-screen notifications plus the transaction toaster: a
//! handle over one persistent toast that a transaction's status stream keeps
//! mutating in place. The store is plain state with change listeners; the
//! viewport component bridges it into signals and schedules the auto-dismiss
//! timers.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::TxStatus;

use crate::utils::constants::TOAST_AUTO_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// One rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    /// Small secondary line (the raw transaction status).
    pub detail: Option<String>,
    pub kind: ToastKind,
    /// Marked loading while the underlying operation is still in flight.
    pub loading: bool,
    /// Auto-dismiss delay in milliseconds; `None` keeps the toast up.
    pub dismiss_after: Option<u32>,
    /// Bumped on every update so a scheduled dismissal can tell whether the
    /// toast changed under it.
    pub revision: u64,
}

/// The mutable parts of a toast, used both to create and to update one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastUpdate {
    pub message: String,
    pub detail: Option<String>,
    pub kind: ToastKind,
    pub loading: bool,
    pub dismiss_after: Option<u32>,
}

impl ToastUpdate {
    /// Plain one-shot notification that goes away on its own.
    pub fn notice(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            detail: None,
            kind,
            loading: false,
            dismiss_after: Some(TOAST_AUTO_DISMISS_MS),
        }
    }
}

struct ToastsInner {
    stack: Vec<Toast>,
    next_id: u64,
    listeners: Vec<Box<dyn Fn(&[Toast])>>,
}

/// Notification store.
pub struct Toasts {
    inner: Rc<RefCell<ToastsInner>>,
}

impl Clone for Toasts {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ToastsInner {
                stack: Vec::new(),
                next_id: 1,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn push(&self, update: ToastUpdate) -> u64 {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.stack.push(Toast {
                id,
                message: update.message,
                detail: update.detail,
                kind: update.kind,
                loading: update.loading,
                dismiss_after: update.dismiss_after,
                revision: 0,
            });
            id
        };
        self.notify();
        id
    }

    /// Mutate an existing toast in place. Returns false when the toast was
    /// already dismissed.
    pub fn update(&self, id: u64, update: ToastUpdate) -> bool {
        let found = {
            let mut inner = self.inner.borrow_mut();
            match inner.stack.iter_mut().find(|t| t.id == id) {
                Some(toast) => {
                    toast.message = update.message;
                    toast.detail = update.detail;
                    toast.kind = update.kind;
                    toast.loading = update.loading;
                    toast.dismiss_after = update.dismiss_after;
                    toast.revision += 1;
                    true
                }
                None => false,
            }
        };
        if found {
            self.notify();
        }
        found
    }

    pub fn dismiss(&self, id: u64) {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.stack.len();
            inner.stack.retain(|t| t.id != id);
            inner.stack.len() != before
        };
        if removed {
            self.notify();
        }
    }

    /// Dismiss only if the toast has not been updated since `revision` was
    /// observed; lets a scheduled dismissal stand down when the toast moved
    /// on.
    pub fn dismiss_if_current(&self, id: u64, revision: u64) -> bool {
        let matches = self
            .get(id)
            .map(|t| t.revision == revision)
            .unwrap_or(false);
        if matches {
            self.dismiss(id);
        }
        matches
    }

    pub fn get(&self, id: u64) -> Option<Toast> {
        self.inner.borrow().stack.iter().find(|t| t.id == id).cloned()
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.borrow().stack.clone()
    }

    pub fn on_change(&self, listener: impl Fn(&[Toast]) + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let inner = self.inner.borrow();
        for listener in &inner.listeners {
            listener(&snapshot);
        }
    }
}

/// Presentation of a transaction status: terminal success and terminal
/// failure auto-dismiss, everything else stays up and keeps spinning.
pub fn tx_status_update(status: &TxStatus) -> ToastUpdate {
    match status {
        TxStatus::Finalized { .. } => ToastUpdate {
            message: "Transaction successful".into(),
            detail: Some(status.label().into()),
            kind: ToastKind::Success,
            loading: false,
            dismiss_after: Some(TOAST_AUTO_DISMISS_MS),
        },
        TxStatus::Invalid { .. } | TxStatus::Drop { .. } => ToastUpdate {
            message: "Transaction failed".into(),
            detail: Some(status.label().into()),
            kind: ToastKind::Error,
            loading: false,
            dismiss_after: Some(TOAST_AUTO_DISMISS_MS),
        },
        _ => ToastUpdate {
            message: "Transaction in progress...".into(),
            detail: Some(status.label().into()),
            kind: ToastKind::Info,
            loading: true,
            dismiss_after: None,
        },
    }
}

/// Handle over the one toast a transaction keeps updating.
#[derive(Clone)]
pub struct TxToaster {
    toasts: Toasts,
    id: u64,
}

impl TxToaster {
    pub fn new(toasts: &Toasts, initial_message: &str) -> Self {
        let id = toasts.push(ToastUpdate {
            message: initial_message.to_string(),
            detail: None,
            kind: ToastKind::Info,
            loading: true,
            dismiss_after: None,
        });
        Self { toasts: toasts.clone(), id }
    }

    pub fn update_tx_status(&self, status: &TxStatus) {
        self.toasts.update(self.id, tx_status_update(status));
    }

    pub fn on_error(&self, message: &str) {
        self.toasts.update(
            self.id,
            ToastUpdate {
                message: format!("Tx Error: {message}"),
                detail: None,
                kind: ToastKind::Error,
                loading: false,
                dismiss_after: Some(TOAST_AUTO_DISMISS_MS),
            },
        );
    }
}

/// Toast context handed to components.
#[derive(Clone, Copy)]
pub struct ToastContext {
    store: StoredValue<Toasts, LocalStorage>,
    /// Rendered by the toast viewport.
    pub stack: RwSignal<Vec<Toast>>,
}

impl ToastContext {
    pub fn info(&self, message: impl Into<String>) {
        self.store.get_value().push(ToastUpdate::notice(message, ToastKind::Info));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.store.get_value().push(ToastUpdate::notice(message, ToastKind::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.store.get_value().push(ToastUpdate::notice(message, ToastKind::Error));
    }

    pub fn dismiss(&self, id: u64) {
        self.store.get_value().dismiss(id);
    }

    pub fn tx_toaster(&self, initial_message: &str) -> TxToaster {
        TxToaster::new(&self.store.get_value(), initial_message)
    }
}

pub fn provide_toast_context() -> ToastContext {
    let store = Toasts::new();
    let stack = RwSignal::new(Vec::new());

    // Bridge store changes into the signal and arm the auto-dismiss timer
    // for every (toast, revision) pair exactly once. A timer firing against
    // a toast that was updated in the meantime stands down.
    let scheduled: Rc<RefCell<HashSet<(u64, u64)>>> = Rc::new(RefCell::new(HashSet::new()));
    let timer_store = store.clone();
    store.on_change(move |snapshot| {
        stack.set(snapshot.to_vec());

        for toast in snapshot {
            let Some(delay) = toast.dismiss_after else { continue };
            let key = (toast.id, toast.revision);
            if !scheduled.borrow_mut().insert(key) {
                continue;
            }

            let store = timer_store.clone();
            let scheduled = Rc::clone(&scheduled);
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(delay).await;
                store.dismiss_if_current(key.0, key.1);
                scheduled.borrow_mut().remove(&key);
            });
        }
    });

    let ctx = ToastContext { store: StoredValue::new_local(store), stack };
    provide_context(ctx);
    ctx
}

pub fn use_toast_context() -> ToastContext {
    expect_context::<ToastContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toaster() -> (Toasts, TxToaster) {
        let toasts = Toasts::new();
        let toaster = TxToaster::new(&toasts, "Signing transaction...");
        (toasts, toaster)
    }

    #[test]
    fn starts_as_a_loading_info_toast() {
        let (toasts, _toaster) = toaster();
        let stack = toasts.snapshot();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].kind, ToastKind::Info);
        assert!(stack[0].loading);
        assert_eq!(stack[0].dismiss_after, None);
        assert_eq!(stack[0].message, "Signing transaction...");
    }

    #[test]
    fn finalized_settles_into_an_auto_dismissing_success() {
        let (toasts, toaster) = toaster();
        toaster.update_tx_status(&TxStatus::Finalized { block_hash: "0xabc".into() });

        let stack = toasts.snapshot();
        assert_eq!(stack.len(), 1, "the same toast is mutated, never a new one");
        assert_eq!(stack[0].kind, ToastKind::Success);
        assert!(!stack[0].loading);
        assert_eq!(stack[0].dismiss_after, Some(TOAST_AUTO_DISMISS_MS));
        assert_eq!(stack[0].detail.as_deref(), Some("Finalized"));
    }

    #[test]
    fn invalid_and_drop_are_terminal_failures() {
        for status in [
            TxStatus::Invalid { error: "bad".into() },
            TxStatus::Drop { error: "gone".into() },
        ] {
            let (toasts, toaster) = toaster();
            toaster.update_tx_status(&status);
            let toast = toasts.snapshot().remove(0);
            assert_eq!(toast.kind, ToastKind::Error);
            assert!(!toast.loading);
            assert_eq!(toast.dismiss_after, Some(TOAST_AUTO_DISMISS_MS));
        }
    }

    #[test]
    fn other_statuses_keep_the_toast_loading() {
        let (toasts, toaster) = toaster();
        toaster.update_tx_status(&TxStatus::Broadcasting);

        let toast = toasts.snapshot().remove(0);
        assert_eq!(toast.kind, ToastKind::Info);
        assert!(toast.loading);
        assert_eq!(toast.dismiss_after, None);
        assert_eq!(toast.detail.as_deref(), Some("Broadcasting"));
    }

    #[test]
    fn on_error_overrides_even_a_terminal_state() {
        let (toasts, toaster) = toaster();
        toaster.update_tx_status(&TxStatus::Finalized { block_hash: "0xabc".into() });
        toaster.on_error("account balance too low");

        let toast = toasts.snapshot().remove(0);
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(!toast.loading);
        assert_eq!(toast.message, "Tx Error: account balance too low");
        assert_eq!(toast.dismiss_after, Some(TOAST_AUTO_DISMISS_MS));
    }

    #[test]
    fn scheduled_dismissal_stands_down_after_an_update() {
        let (toasts, toaster) = toaster();
        let toast = toasts.snapshot().remove(0);

        toaster.update_tx_status(&TxStatus::Broadcasting);
        // A dismissal scheduled against the original revision is stale now.
        assert!(!toasts.dismiss_if_current(toast.id, toast.revision));
        assert_eq!(toasts.snapshot().len(), 1);

        let current = toasts.get(toast.id).unwrap();
        assert!(toasts.dismiss_if_current(toast.id, current.revision));
        assert!(toasts.snapshot().is_empty());
    }

    #[test]
    fn updating_a_dismissed_toast_is_a_no_op() {
        let (toasts, toaster) = toaster();
        let id = toasts.snapshot()[0].id;
        toasts.dismiss(id);
        assert!(!toasts.update(id, ToastUpdate::notice("late", ToastKind::Info)));
        toaster.update_tx_status(&TxStatus::Broadcasting);
        assert!(toasts.snapshot().is_empty());
    }
}
