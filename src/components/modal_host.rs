//! Draws the notifier's single modal and drives its close transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! The notifier marks a dismissed modal as `closing`; this host lets the
//! CSS fade run for
//! [`CLOSE_TRANSITION_MS`](crate::state::notifier::CLOSE_TRANSITION_MS)
//! and then calls `finish_close`, which is when `on_close` callbacks fire.

use leptos::prelude::*;

use crate::app::NotifierHandle;
use crate::state::notifier::{ModalKind, ModalView};

#[cfg(feature = "csr")]
fn schedule_finish(notifier: NotifierHandle, generation: u64) {
    gloo_timers::callback::Timeout::new(crate::state::notifier::CLOSE_TRANSITION_MS, move || {
        notifier.with_value(|n| n.finish_close(generation));
    })
    .forget();
}

#[cfg(not(feature = "csr"))]
fn schedule_finish(notifier: NotifierHandle, generation: u64) {
    notifier.with_value(|n| n.finish_close(generation));
}

fn primary_class(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Confirm => "btn btn-warning",
        ModalKind::Success => "btn btn-success",
        ModalKind::Error => "btn btn-danger",
        ModalKind::Info => "btn btn-info",
    }
}

#[component]
pub fn ModalHost() -> impl IntoView {
    let modal = expect_context::<RwSignal<Option<ModalView>>>();
    let notifier = expect_context::<NotifierHandle>();

    Effect::new(move || {
        if let Some(view) = modal.get() {
            if view.closing {
                schedule_finish(notifier, view.generation);
            }
        }
    });

    move || {
        modal.get().map(|view| {
            let generation = view.generation;
            let kind = view.kind;
            let dismiss = move |_| {
                notifier.with_value(|n| n.dismiss(generation));
            };
            let primary = move |_| {
                notifier.with_value(|n| {
                    if kind == ModalKind::Confirm {
                        n.affirm(generation)
                    } else {
                        n.dismiss(generation)
                    }
                });
            };
            let dialog_class = if view.closing { "modal fade d-block" } else { "modal fade show d-block" };
            let cancel = view.cancel_label.map(|label| {
                view! { <button class="btn btn-secondary" on:click=dismiss>{label}</button> }
            });

            view! {
                <div class="modal-backdrop fade show" on:click=dismiss></div>
                <div class=dialog_class tabindex="-1" role="dialog">
                    <div class="modal-dialog modal-dialog-centered" role="document">
                        <div class="modal-content">
                            <div class=kind.header_class()>
                                <h5 class="modal-title">{kind.icon()} " " {view.title}</h5>
                                <button type="button" class="btn-close" aria-label="Cerrar" on:click=dismiss></button>
                            </div>
                            <div class="modal-body">
                                <p class="mb-0">{view.message}</p>
                            </div>
                            <div class="modal-footer">
                                {cancel}
                                <button class=primary_class(kind) on:click=primary>{view.confirm_label}</button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
