//! Request form for a new salary advance.

use leptos::prelude::*;

use crate::util::format::parse_amount;

/// Amount and notes as typed. An unparsable amount is passed on as NaN so
/// the controller refuses it like any other invalid amount.
#[component]
pub fn AdvanceForm(on_submit: Callback<(f64, String)>) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run((parse_amount(&amount.get_untracked()), notes.get_untracked()));
        amount.set(String::new());
        notes.set(String::new());
    };

    view! {
        <form class="row g-2 align-items-end mb-3" on:submit=submit>
            <div class="col-md-3">
                <label class="form-label small mb-1">"Monto (Gs.)"</label>
                <input
                    type="text"
                    inputmode="numeric"
                    class="form-control form-control-sm"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
            </div>
            <div class="col-md-6">
                <label class="form-label small mb-1">"Observaciones"</label>
                <input
                    type="text"
                    class="form-control form-control-sm"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                />
            </div>
            <div class="col-md-3">
                <button type="submit" class="btn btn-sm btn-primary w-100">"Solicitar anticipo"</button>
            </div>
        </form>
    }
}
