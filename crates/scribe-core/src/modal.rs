//! Single-slot modal dialog controller.
//!
//! ## Learning: Shared Mutable State with `Rc<RefCell<_>>`
//!
//! Dialog content needs a way to close itself, which means it must hold a
//! handle back into the controller's state. On a single UI thread,
//! `Rc<RefCell<_>>` gives shared ownership with runtime-checked borrows, and
//! handing out a `Weak` keeps a forgotten close handle from keeping the
//! slot alive.
//!
//! The controller is intentionally `!Send`: every operation runs on the UI
//! thread in dispatch order.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Whether a dialog is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalStatus {
    Idle,
    Showing,
}

/// Callback that clears the controller's slot.
///
/// Every handle clears whatever dialog is current when invoked, including
/// handles from dialogs that have since been replaced.
#[derive(Clone)]
pub struct CloseHandle {
    close: Rc<dyn Fn()>,
}

impl CloseHandle {
    /// Closes the active dialog, if any.
    pub fn close(&self) {
        (self.close)();
    }
}

impl fmt::Debug for CloseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseHandle").finish_non_exhaustive()
    }
}

/// Borrowed view of the dialog currently occupying the slot.
#[derive(Debug)]
pub struct ActiveModal<'a, C> {
    pub title: &'a str,
    pub content: &'a C,
    pub close: &'a CloseHandle,
}

struct Record<C> {
    title: String,
    close: CloseHandle,
    /// `None` while lent out by `update_active`.
    content: Option<C>,
}

struct Slot<C> {
    active: Option<Record<C>>,
    /// Bumped on every show and close, so lent-out content can tell
    /// whether its record was superseded.
    generation: u64,
}

/// Content taken out of the slot for the duration of an update.
///
/// Dropping it returns the content to its record, unless the record was
/// closed or replaced in the meantime. This also runs while unwinding.
struct Lent<'s, C> {
    slot: &'s RefCell<Slot<C>>,
    generation: u64,
    content: Option<C>,
}

impl<C> Drop for Lent<'_, C> {
    fn drop(&mut self) {
        let Some(content) = self.content.take() else {
            return;
        };
        let Ok(mut slot) = self.slot.try_borrow_mut() else {
            return;
        };
        if slot.generation == self.generation {
            if let Some(record) = slot.active.as_mut() {
                record.content = Some(content);
                return;
            }
        }
        drop(slot);
        tracing::trace!("Modal superseded during update");
        drop(content);
    }
}

/// Hosts at most one dialog at a time.
pub struct ModalController<C> {
    slot: Rc<RefCell<Slot<C>>>,
}

impl<C: 'static> ModalController<C> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                active: None,
                generation: 0,
            })),
        }
    }

    /// Shows a dialog, replacing any dialog already shown.
    ///
    /// `build` runs synchronously, exactly once, and receives the handle the
    /// content should call to close itself. A replaced dialog's close handle
    /// is discarded without being invoked. A panic in `build` propagates to
    /// the caller and leaves the slot untouched.
    pub fn show<F>(&self, title: impl Into<String>, build: F)
    where
        F: FnOnce(CloseHandle) -> C,
    {
        let title = title.into();
        let close = self.close_handle();
        let content = build(close.clone());

        let previous = {
            let mut slot = self.slot.borrow_mut();
            slot.generation += 1;
            slot.active.replace(Record {
                title: title.clone(),
                close,
                content: Some(content),
            })
        };

        match &previous {
            Some(old) => tracing::debug!(from = %old.title, to = %title, "Replacing modal"),
            None => tracing::debug!(title = %title, "Showing modal"),
        }
        drop(previous);
    }

    /// Invokes the stored dialog's close handle, as its dismiss button does.
    pub fn dismiss(&self) {
        let close = self
            .slot
            .borrow()
            .active
            .as_ref()
            .map(|record| record.close.clone());
        if let Some(close) = close {
            close.close();
        }
    }

    /// Showing from `show` until any close, including while the content is
    /// being updated.
    pub fn status(&self) -> ModalStatus {
        if self.slot.borrow().active.is_some() {
            ModalStatus::Showing
        } else {
            ModalStatus::Idle
        }
    }

    pub fn is_showing(&self) -> bool {
        self.status() == ModalStatus::Showing
    }

    /// Returns the title of the active dialog.
    pub fn title(&self) -> Option<String> {
        self.slot
            .borrow()
            .active
            .as_ref()
            .map(|record| record.title.clone())
    }

    /// Reads the active dialog.
    ///
    /// Returns `None` when idle, and while the content is lent to
    /// [`Self::update_active`]. `f` must not show or close dialogs.
    pub fn with_active<R>(&self, f: impl FnOnce(ActiveModal<'_, C>) -> R) -> Option<R> {
        let slot = self.slot.borrow();
        let record = slot.active.as_ref()?;
        let content = record.content.as_ref()?;
        Some(f(ActiveModal {
            title: &record.title,
            content,
            close: &record.close,
        }))
    }

    /// Lends the active content to `f` for mutation.
    ///
    /// Title and close handle stay in the slot, so `status`, `title` and
    /// `dismiss` behave normally from inside `f`. The content may close
    /// itself or show a replacement; it is returned to the slot only if
    /// neither happened. Returns `None` when idle or already lent.
    pub fn update_active<R>(&self, f: impl FnOnce(&mut C) -> R) -> Option<R> {
        let mut lent = {
            let mut slot = self.slot.borrow_mut();
            let generation = slot.generation;
            let content = slot.active.as_mut()?.content.take()?;
            Lent {
                slot: &self.slot,
                generation,
                content: Some(content),
            }
        };

        lent.content.as_mut().map(f)
    }

    fn close_handle(&self) -> CloseHandle {
        let slot: Weak<RefCell<Slot<C>>> = Rc::downgrade(&self.slot);
        CloseHandle {
            close: Rc::new(move || {
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                let closed = {
                    let mut slot = slot.borrow_mut();
                    slot.generation += 1;
                    slot.active.take()
                };
                if let Some(closed) = closed {
                    tracing::debug!(title = %closed.title, "Closed modal");
                }
            }),
        }
    }
}

impl<C: 'static> Default for ModalController<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for ModalController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("ModalController")
            .field("title", &slot.active.as_ref().map(|a| &a.title))
            .field("generation", &slot.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Body(&'static str);

    #[test]
    fn test_starts_idle() {
        let modal: ModalController<Body> = ModalController::new();
        assert_eq!(modal.status(), ModalStatus::Idle);
        assert!(modal.title().is_none());
    }

    #[test]
    fn test_show_then_close() {
        let modal = ModalController::new();
        let mut stored = None;
        modal.show("Insert Table", |close| {
            stored = Some(close);
            Body("table")
        });

        assert_eq!(modal.status(), ModalStatus::Showing);
        assert_eq!(modal.title().as_deref(), Some("Insert Table"));
        assert_eq!(modal.with_active(|a| a.content.clone()), Some(Body("table")));

        stored.unwrap().close();
        assert_eq!(modal.status(), ModalStatus::Idle);
    }

    #[test]
    fn test_builder_runs_exactly_once() {
        let modal = ModalController::new();
        let calls = Cell::new(0);
        modal.show("Once", |_| {
            calls.set(calls.get() + 1);
            Body("once")
        });
        let _ = modal.title();
        let _ = modal.with_active(|a| a.content.clone());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_second_show_replaces_first() {
        let modal = ModalController::new();
        modal.show("Insert Link", |_| Body("link"));
        modal.show("Insert Table", |_| Body("table"));

        assert_eq!(modal.title().as_deref(), Some("Insert Table"));
        assert_eq!(modal.with_active(|a| a.content.clone()), Some(Body("table")));
    }

    #[test]
    fn test_show_is_idempotent() {
        let once = ModalController::new();
        once.show("About", |_| Body("about"));

        let twice = ModalController::new();
        twice.show("About", |_| Body("about"));
        twice.show("About", |_| Body("about"));

        assert_eq!(once.status(), twice.status());
        assert_eq!(once.title(), twice.title());
        assert_eq!(
            once.with_active(|a| a.content.clone()),
            twice.with_active(|a| a.content.clone())
        );
    }

    #[test]
    fn test_stale_close_clears_current_dialog() {
        let modal = ModalController::new();
        let mut first = None;
        modal.show("Insert Link", |close| {
            first = Some(close);
            Body("link")
        });
        modal.show("Insert Table", |_| Body("table"));

        first.unwrap().close();
        assert_eq!(modal.status(), ModalStatus::Idle);
    }

    #[test]
    fn test_close_when_idle_is_noop() {
        let modal = ModalController::new();
        let mut stored = None;
        modal.show("A", |close| {
            stored = Some(close);
            Body("a")
        });
        let close = stored.unwrap();
        close.close();
        close.close();
        assert_eq!(modal.status(), ModalStatus::Idle);
    }

    #[test]
    fn test_dismiss_invokes_stored_close() {
        let modal = ModalController::new();
        modal.show("A", |_| Body("a"));
        modal.dismiss();
        assert!(!modal.is_showing());

        // Dismissing an idle controller does nothing.
        modal.dismiss();
        assert!(!modal.is_showing());
    }

    #[test]
    fn test_close_outlives_controller() {
        let modal = ModalController::new();
        let mut stored = None;
        modal.show("A", |close| {
            stored = Some(close);
            Body("a")
        });
        drop(modal);
        stored.unwrap().close();
    }

    struct Closer {
        close: CloseHandle,
        clicks: u32,
    }

    #[test]
    fn test_update_active_keeps_open_content() {
        let modal = ModalController::new();
        modal.show("Counter", |close| Closer { close, clicks: 0 });

        let clicks = modal.update_active(|c| {
            c.clicks += 1;
            c.clicks
        });
        assert_eq!(clicks, Some(1));
        assert_eq!(modal.with_active(|a| a.content.clicks), Some(1));
    }

    #[test]
    fn test_content_can_close_itself_during_update() {
        let modal = ModalController::new();
        modal.show("Self closing", |close| Closer { close, clicks: 0 });

        modal.update_active(|c| c.close.close());
        assert_eq!(modal.status(), ModalStatus::Idle);
    }

    #[test]
    fn test_replacement_during_update_wins() {
        let modal = Rc::new(ModalController::new());
        modal.show("First", |close| Closer { close, clicks: 0 });

        let inner = Rc::clone(&modal);
        modal.update_active(|_| inner.show("Second", |close| Closer { close, clicks: 7 }));

        assert_eq!(modal.title().as_deref(), Some("Second"));
        assert_eq!(modal.with_active(|a| a.content.clicks), Some(7));
    }

    #[test]
    fn test_update_active_when_idle() {
        let modal: ModalController<Body> = ModalController::new();
        assert!(modal.update_active(|_| ()).is_none());
    }

    #[test]
    fn test_controller_stays_showing_during_update() {
        let modal = Rc::new(ModalController::new());
        modal.show("Lent", |close| Closer { close, clicks: 0 });

        let inner = Rc::clone(&modal);
        let seen = modal.update_active(|_| (inner.status(), inner.title()));
        assert_eq!(seen, Some((ModalStatus::Showing, Some("Lent".to_string()))));
        assert_eq!(modal.status(), ModalStatus::Showing);
    }

    #[test]
    fn test_dismiss_from_inside_update_closes() {
        let modal = Rc::new(ModalController::new());
        modal.show("Lent", |close| Closer { close, clicks: 0 });

        let inner = Rc::clone(&modal);
        modal.update_active(|_| inner.dismiss());
        assert_eq!(modal.status(), ModalStatus::Idle);
        assert!(modal.with_active(|_| ()).is_none());
    }

    #[test]
    fn test_nested_update_is_refused() {
        let modal = Rc::new(ModalController::new());
        modal.show("Lent", |close| Closer { close, clicks: 0 });

        let inner = Rc::clone(&modal);
        let nested = modal.update_active(|_| inner.update_active(|c| c.clicks));
        assert_eq!(nested, Some(None));
        assert_eq!(modal.with_active(|a| a.content.clicks), Some(0));
    }

    #[test]
    fn test_panic_during_update_restores_content() {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let modal = ModalController::new();
        modal.show("Fragile", |close| Closer { close, clicks: 0 });

        let result = catch_unwind(AssertUnwindSafe(|| {
            modal.update_active(|c| {
                c.clicks = 3;
                panic!("update failed");
            })
        }));
        assert!(result.is_err());
        assert_eq!(modal.status(), ModalStatus::Showing);
        assert_eq!(modal.with_active(|a| a.content.clicks), Some(3));
    }
}
