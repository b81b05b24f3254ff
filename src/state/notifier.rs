//! Modal notifications: confirm, success, error and info.
//!
//! DESIGN
//! ======
//! There is a single modal slot. Opening a modal while another is showing
//! replaces it and drops the old callbacks unfired. Each opened modal gets a
//! generation number; `affirm`, `dismiss` and `finish_close` carry the
//! generation they were rendered for, so a click on a modal that has since
//! been replaced is a no-op.
//!
//! Closing a success/error/info modal is two-phase: `dismiss` marks it as
//! closing (the host plays the hide transition), `finish_close` removes it
//! and only then runs `on_close`. Callbacks always run after the internal
//! borrow is released, so they may open another modal.

#[cfg(test)]
#[path = "notifier_test.rs"]
mod notifier_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Delay between `dismiss` and `finish_close`, matching the CSS fade.
pub const CLOSE_TRANSITION_MS: u32 = 300;

pub const DEFAULT_CONFIRM_LABEL: &str = "Confirmar";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancelar";
const ACKNOWLEDGE_LABEL: &str = "Aceptar";

pub type Callback = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Confirm,
    Success,
    Error,
    Info,
}

impl ModalKind {
    pub fn header_class(self) -> &'static str {
        match self {
            Self::Confirm => "modal-header bg-warning",
            Self::Success => "modal-header bg-success text-white",
            Self::Error => "modal-header bg-danger text-white",
            Self::Info => "modal-header bg-info text-white",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Confirm => "⚠",
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Info => "ℹ",
        }
    }
}

/// What the modal host draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub kind: ModalKind,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    /// Only confirm modals have a cancel button.
    pub cancel_label: Option<String>,
    pub generation: u64,
    pub closing: bool,
}

struct ActiveModal {
    view: ModalView,
    on_confirm: Option<Callback>,
    on_close: Option<Callback>,
}

#[derive(Default)]
struct NotifierInner {
    active: Option<ActiveModal>,
    generation: u64,
}

type ModalSink = Rc<dyn Fn(Option<&ModalView>)>;

/// Shared handle to the modal slot.
#[derive(Clone)]
pub struct Notifier {
    inner: Rc<RefCell<NotifierInner>>,
    sink: ModalSink,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self { inner: Rc::default(), sink: Rc::new(|_| {}) }
    }

    /// Report every change of the visible modal to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: impl Fn(Option<&ModalView>) + 'static) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    pub fn current(&self) -> Option<ModalView> {
        self.inner.borrow().active.as_ref().map(|a| a.view.clone())
    }

    /// Ask for confirmation with the default button labels.
    pub fn confirm(&self, title: &str, message: &str, on_confirm: impl FnOnce() + 'static) -> u64 {
        self.confirm_with_labels(title, message, on_confirm, DEFAULT_CONFIRM_LABEL, DEFAULT_CANCEL_LABEL)
    }

    pub fn confirm_with_labels(
        &self,
        title: &str,
        message: &str,
        on_confirm: impl FnOnce() + 'static,
        confirm_label: &str,
        cancel_label: &str,
    ) -> u64 {
        self.open(
            ModalKind::Confirm,
            title,
            message,
            (confirm_label, Some(cancel_label)),
            Some(Box::new(on_confirm)),
            None,
        )
    }

    pub fn success(&self, title: &str, message: &str, on_close: Option<Callback>) -> u64 {
        self.open(ModalKind::Success, title, message, (ACKNOWLEDGE_LABEL, None), None, on_close)
    }

    pub fn error(&self, title: &str, message: &str, on_close: Option<Callback>) -> u64 {
        self.open(ModalKind::Error, title, message, (ACKNOWLEDGE_LABEL, None), None, on_close)
    }

    pub fn info(&self, title: &str, message: &str, on_close: Option<Callback>) -> u64 {
        self.open(ModalKind::Info, title, message, (ACKNOWLEDGE_LABEL, None), None, on_close)
    }

    fn open(
        &self,
        kind: ModalKind,
        title: &str,
        message: &str,
        (confirm_label, cancel_label): (&str, Option<&str>),
        on_confirm: Option<Callback>,
        on_close: Option<Callback>,
    ) -> u64 {
        let (view, replaced) = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            let view = ModalView {
                kind,
                title: title.to_owned(),
                message: message.to_owned(),
                confirm_label: confirm_label.to_owned(),
                cancel_label: cancel_label.map(str::to_owned),
                generation: inner.generation,
                closing: false,
            };
            let replaced = inner.active.replace(ActiveModal { view: view.clone(), on_confirm, on_close });
            (view, replaced)
        };
        drop(replaced);
        (self.sink)(Some(&view));
        view.generation
    }

    /// The confirm button of modal `generation` was pressed. Closes it and
    /// runs `on_confirm` once. Returns `false` for stale or non-confirm
    /// modals.
    pub fn affirm(&self, generation: u64) -> bool {
        let callback = {
            let mut inner = self.inner.borrow_mut();
            match &inner.active {
                Some(active) if active.view.generation == generation && active.view.kind == ModalKind::Confirm => {}
                _ => return false,
            }
            inner.active.take().and_then(|active| active.on_confirm)
        };
        (self.sink)(None);
        if let Some(callback) = callback {
            callback();
        }
        true
    }

    /// Cancel, close button, backdrop or the acknowledge button of modal
    /// `generation`. A confirm closes at once without its callback; other
    /// kinds start their close transition.
    pub fn dismiss(&self, generation: u64) -> bool {
        let (visible, dropped) = {
            let mut inner = self.inner.borrow_mut();
            let Some(active) = inner.active.as_mut() else {
                return false;
            };
            if active.view.generation != generation || active.view.closing {
                return false;
            }
            if active.view.kind == ModalKind::Confirm {
                (None, inner.active.take())
            } else {
                active.view.closing = true;
                (Some(active.view.clone()), None)
            }
        };
        drop(dropped);
        (self.sink)(visible.as_ref());
        true
    }

    /// End the close transition of modal `generation` and run its
    /// `on_close`, if any.
    pub fn finish_close(&self, generation: u64) -> bool {
        let callback = {
            let mut inner = self.inner.borrow_mut();
            match &inner.active {
                Some(active) if active.view.generation == generation && active.view.closing => {}
                _ => return false,
            }
            inner.active.take().and_then(|active| active.on_close)
        };
        (self.sink)(None);
        if let Some(callback) = callback {
            callback();
        }
        true
    }
}
