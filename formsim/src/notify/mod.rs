//! Toast notifications.
//!
//! Controllers never crash on a failed operation; they convert the error
//! into a transient toast. Rendering is out of scope here, but the
//! dismissal contract is not: a toast disappears [`TOAST_DISMISS_AFTER`]
//! after being shown, or earlier when dismissed explicitly.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::providers::TimeProvider;

/// How long a toast stays visible before auto-dismissing.
pub const TOAST_DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// A completed operation.
    Success,
    /// A failed operation or rejected draft.
    Error,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Message shown to the user.
    pub message: String,
    /// Success or error styling.
    pub kind: ToastKind,
}

#[derive(Debug)]
struct ShownToast {
    toast: Toast,
    shown_at: Duration,
    dismissed: bool,
}

/// Shared sink for toasts, owning the dismissal clock.
///
/// Clones share the same toast list, so the list controller and any number
/// of edit controllers surface notifications through one notifier. The full
/// history is retained for inspection; [`Notifier::visible`] applies the
/// dismissal contract against the injected clock.
#[derive(Clone)]
pub struct Notifier<T> {
    time: T,
    shown: Rc<RefCell<Vec<ShownToast>>>,
}

impl<T: TimeProvider> Notifier<T> {
    /// Create a notifier over the given clock.
    pub fn new(time: T) -> Self {
        Self {
            time,
            shown: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Show a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.show(Toast {
            message: message.into(),
            kind: ToastKind::Success,
        });
    }

    /// Show an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast {
            message: message.into(),
            kind: ToastKind::Error,
        });
    }

    fn show(&self, toast: Toast) {
        tracing::debug!("toast ({:?}): {}", toast.kind, toast.message);
        self.shown.borrow_mut().push(ShownToast {
            toast,
            shown_at: self.time.now(),
            dismissed: false,
        });
    }

    /// Toasts currently on screen: shown less than [`TOAST_DISMISS_AFTER`]
    /// ago and not explicitly dismissed.
    pub fn visible(&self) -> Vec<Toast> {
        let now = self.time.now();
        self.shown
            .borrow()
            .iter()
            .filter(|shown| !shown.dismissed && now < shown.shown_at + TOAST_DISMISS_AFTER)
            .map(|shown| shown.toast.clone())
            .collect()
    }

    /// Explicitly dismiss everything currently visible.
    pub fn dismiss_all(&self) {
        for shown in self.shown.borrow_mut().iter_mut() {
            shown.dismissed = true;
        }
    }

    /// Every toast ever shown, in order, regardless of visibility.
    pub fn history(&self) -> Vec<Toast> {
        self.shown
            .borrow()
            .iter()
            .map(|shown| shown.toast.clone())
            .collect()
    }

    /// The most recently shown toast, if any.
    pub fn latest(&self) -> Option<Toast> {
        self.shown.borrow().last().map(|shown| shown.toast.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::TokioTimeProvider;

    #[tokio::test(start_paused = true)]
    async fn toast_auto_dismisses_after_deadline() {
        let time = TokioTimeProvider::new();
        let notifier = Notifier::new(time.clone());

        notifier.success("saved");
        assert_eq!(notifier.visible().len(), 1);

        time.sleep(TOAST_DISMISS_AFTER - Duration::from_millis(1)).await;
        assert_eq!(notifier.visible().len(), 1);

        time.sleep(Duration::from_millis(1)).await;
        assert!(notifier.visible().is_empty());
        // History survives dismissal.
        assert_eq!(notifier.history().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn explicit_dismissal_clears_before_deadline() {
        let notifier = Notifier::new(TokioTimeProvider::new());

        notifier.error("boom");
        notifier.dismiss_all();

        assert!(notifier.visible().is_empty());
        assert_eq!(notifier.latest().unwrap().kind, ToastKind::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn clones_share_the_toast_list() {
        let notifier = Notifier::new(TokioTimeProvider::new());
        let other = notifier.clone();

        other.success("from the clone");

        assert_eq!(notifier.visible().len(), 1);
    }
}
