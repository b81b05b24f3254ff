use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = count.clone();
    (count, move || handle.set(handle.get() + 1))
}

#[test]
fn confirm_runs_callback_once() {
    let notifier = Notifier::new();
    let (count, on_confirm) = counter();
    let generation = notifier.confirm("Aprobar", "¿Aprobar el anticipo?", on_confirm);

    assert!(notifier.affirm(generation));
    assert!(!notifier.affirm(generation));
    assert_eq!(count.get(), 1);
    assert!(notifier.current().is_none());
}

#[test]
fn dismissed_confirm_never_runs_callback() {
    let notifier = Notifier::new();
    let (count, on_confirm) = counter();
    let generation = notifier.confirm("Rechazar", "¿Rechazar?", on_confirm);

    assert!(notifier.dismiss(generation));
    assert!(!notifier.affirm(generation));
    assert_eq!(count.get(), 0);
    assert!(notifier.current().is_none());
}

#[test]
fn confirm_uses_default_labels() {
    let notifier = Notifier::new();
    notifier.confirm("t", "m", || {});
    let view = notifier.current().unwrap();
    assert_eq!(view.confirm_label, "Confirmar");
    assert_eq!(view.cancel_label.as_deref(), Some("Cancelar"));
}

#[test]
fn custom_labels_are_kept() {
    let notifier = Notifier::new();
    notifier.confirm_with_labels("t", "m", || {}, "Sí, aprobar", "Volver");
    let view = notifier.current().unwrap();
    assert_eq!(view.confirm_label, "Sí, aprobar");
    assert_eq!(view.cancel_label.as_deref(), Some("Volver"));
}

#[test]
fn on_close_waits_for_transition_end() {
    let notifier = Notifier::new();
    let (count, on_close) = counter();
    let generation = notifier.success("Listo", "Guardado", Some(Box::new(on_close)));

    assert!(notifier.dismiss(generation));
    assert_eq!(count.get(), 0);
    assert!(notifier.current().unwrap().closing);

    assert!(notifier.finish_close(generation));
    assert_eq!(count.get(), 1);
    assert!(notifier.current().is_none());
    assert!(!notifier.finish_close(generation));
}

#[test]
fn finish_close_requires_dismiss_first() {
    let notifier = Notifier::new();
    let generation = notifier.error("Error", "Falló", None);
    assert!(!notifier.finish_close(generation));
    assert!(notifier.current().is_some());
}

#[test]
fn affirm_does_not_apply_to_success() {
    let notifier = Notifier::new();
    let generation = notifier.info("Info", "Hola", None);
    assert!(!notifier.affirm(generation));
}

#[test]
fn newer_modal_replaces_older_and_drops_its_callbacks() {
    let notifier = Notifier::new();
    let (confirmed, on_confirm) = counter();
    let first = notifier.confirm("Primero", "uno", on_confirm);
    let second = notifier.error("Segundo", "dos", None);

    assert!(second > first);
    assert!(!notifier.affirm(first));
    assert_eq!(confirmed.get(), 0);
    assert_eq!(notifier.current().unwrap().title, "Segundo");
}

#[test]
fn sink_sees_open_closing_and_closed() {
    let seen: Rc<RefCell<Vec<Option<bool>>>> = Rc::default();
    let log = seen.clone();
    let notifier = Notifier::new().with_sink(move |view| log.borrow_mut().push(view.map(|v| v.closing)));

    let generation = notifier.success("ok", "ok", None);
    notifier.dismiss(generation);
    notifier.finish_close(generation);

    assert_eq!(*seen.borrow(), vec![Some(false), Some(true), None]);
}

#[test]
fn callback_may_open_another_modal() {
    let notifier = Notifier::new();
    let inner = notifier.clone();
    let generation = notifier.confirm("Aprobar", "¿Seguro?", move || {
        inner.success("Anticipo aprobado", "Listo", None);
    });

    assert!(notifier.affirm(generation));
    assert_eq!(notifier.current().unwrap().kind, ModalKind::Success);
}
