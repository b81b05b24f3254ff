//! HR dialog reviewing one employee's overtime hours for a month.

use leptos::prelude::*;

use crate::app::{ApiHandle, NotifierHandle};
use crate::components::attendance_filters::today;
use crate::components::panel_body::PanelBody;
use crate::components::panel_tab::decision_prompt;
use crate::components::record_table::RowActions;
use crate::components::spawn;
use crate::config::EmployeeContext;
use crate::net::api::ApprovalTarget;
use crate::net::browser::BrowserTransport;
use crate::state::extra_hours::{OvertimeReview, OvertimeView};
use crate::state::status::Decision;
use crate::util::format::{MONTH_NAMES, year_options};

type ReviewHandle = StoredValue<OvertimeReview<BrowserTransport>, LocalStorage>;

#[component]
pub fn ExtraHoursDialog() -> impl IntoView {
    let api = expect_context::<ApiHandle>();
    let notifier = expect_context::<NotifierHandle>();
    let context = expect_context::<EmployeeContext>();

    let (current_year, current_month) = today();
    let year = RwSignal::new(current_year);
    let month = RwSignal::new(current_month);
    let open = RwSignal::new(false);
    let sheet = RwSignal::new(OvertimeView::default());

    let review: ReviewHandle = StoredValue::new_local(
        OvertimeReview::new(context, api.get_value(), notifier.get_value())
            .with_sink(move |view| sheet.set(view.clone())),
    );

    let on_show = move |_| {
        open.set(true);
        let review = review.get_value();
        let (y, m) = (year.get_untracked(), month.get_untracked());
        spawn(async move { review.open(y, m).await });
    };
    let on_close = move |_| open.set(false);

    let on_decide = Callback::new(move |(record_id, decision): (i64, Decision)| {
        let (title, question) = decision_prompt(ApprovalTarget::OvertimeHour, decision);
        let review = review.get_value();
        notifier.with_value(|n| {
            n.confirm(&title, &question, move || {
                spawn(async move {
                    review.decide(record_id, decision).await;
                });
            })
        });
    });
    let actions = RowActions { on_decide, on_upload: None };

    let month_options = MONTH_NAMES
        .iter()
        .zip(1u8..)
        .map(|(name, value)| view! { <option value=value.to_string() selected={value == current_month}>{*name}</option> })
        .collect_view();
    let year_choices = year_options(current_year)
        .into_iter()
        .map(|value| view! { <option value=value.to_string() selected={value == current_year}>{value}</option> })
        .collect_view();

    let body = Signal::derive(move || sheet.get().body);

    view! {
        <div class="d-flex gap-2 align-items-end mb-3">
            <select
                class="form-select form-select-sm w-auto"
                on:change=move |ev| {
                    if let Ok(m) = event_target_value(&ev).parse() {
                        month.set(m);
                    }
                }
            >
                {month_options}
            </select>
            <select
                class="form-select form-select-sm w-auto"
                on:change=move |ev| {
                    if let Ok(y) = event_target_value(&ev).parse() {
                        year.set(y);
                    }
                }
            >
                {year_choices}
            </select>
            <button class="btn btn-sm btn-outline-primary" on:click=on_show>"Ver horas extra"</button>
        </div>
        <Show when=move || open.get()>
            <div class="modal-backdrop fade show"></div>
            <div class="modal fade show d-block" tabindex="-1" role="dialog">
                <div class="modal-dialog modal-lg modal-dialog-scrollable" role="document">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{move || sheet.get().title}</h5>
                            <button type="button" class="btn-close" aria-label="Cerrar" on:click=on_close></button>
                        </div>
                        <div class="modal-body">
                            <PanelBody panel=body actions/>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
