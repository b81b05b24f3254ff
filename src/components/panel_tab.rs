//! One tab pane: owns a [`PanelController`] and mirrors its view into a
//! signal.

use leptos::prelude::*;

use crate::app::{ApiHandle, NotifierHandle};
use crate::components::advance_form::AdvanceForm;
use crate::components::attendance_filters::AttendanceFilters;
use crate::components::extra_hours_dialog::ExtraHoursDialog;
use crate::components::panel_body::PanelBody;
use crate::components::record_table::RowActions;
use crate::components::spawn;
use crate::config::EmployeeContext;
use crate::net::api::{ApprovalTarget, PeriodFilter};
use crate::net::browser::BrowserTransport;
use crate::state::controller::{PanelController, PickedFile};
use crate::state::panel::{PanelKind, PanelView};
use crate::state::status::Decision;

type ControllerHandle = StoredValue<PanelController<BrowserTransport>, LocalStorage>;

/// Confirm-dialog title and question for a decision.
pub(crate) fn decision_prompt(target: ApprovalTarget, decision: Decision) -> (String, String) {
    let noun = target.noun().to_lowercase();
    (
        format!("{} {noun}", decision.label()),
        format!("¿Está seguro de que desea {} este registro?", decision.label().to_lowercase()),
    )
}

fn load(controller: ControllerHandle, page: u32, period: Option<PeriodFilter>) {
    let controller = controller.get_value();
    spawn(async move { controller.load(page, period).await });
}

#[component]
pub fn PanelTab(kind: PanelKind, active: RwSignal<PanelKind>) -> impl IntoView {
    let api = expect_context::<ApiHandle>();
    let notifier = expect_context::<NotifierHandle>();
    let context = expect_context::<EmployeeContext>();

    let panel = RwSignal::new(PanelView::Idle);
    let controller: ControllerHandle = StoredValue::new_local(
        PanelController::new(kind, context, api.get_value(), notifier.get_value())
            .with_sink(move |view| panel.set(view.clone())),
    );

    // Every activation reloads page 1 with the current filters.
    Effect::new(move || {
        if active.get() == kind {
            load(controller, 1, None);
        }
    });

    let on_page = Callback::new(move |page: u32| load(controller, page, None));
    let on_filter = Callback::new(move |period: PeriodFilter| load(controller, 1, Some(period)));

    let on_decide = Callback::new(move |(record_id, decision): (i64, Decision)| {
        let Some(target) = kind.approval_target() else {
            return;
        };
        let (title, question) = decision_prompt(target, decision);
        let controller = controller.get_value();
        notifier.with_value(|n| {
            n.confirm(&title, &question, move || {
                spawn(async move {
                    controller.decide(record_id, decision).await;
                });
            })
        });
    });

    let on_upload = kind.justification_target().map(|_| {
        Callback::new(move |(record_id, picked): (i64, PickedFile)| {
            let controller = controller.get_value();
            spawn(async move {
                controller.upload_picked(record_id, picked).await;
            });
        })
    });

    let on_create = Callback::new(move |(amount, notes): (f64, String)| {
        let controller = controller.get_value();
        spawn(async move {
            controller.create_advance(amount, &notes).await;
        });
    });

    let filters = kind
        .supports_period_filter()
        .then(|| view! { <AttendanceFilters on_apply=on_filter/> });
    let advance_form = (kind == PanelKind::Advances).then(|| view! { <AdvanceForm on_submit=on_create/> });
    let overtime = (kind == PanelKind::ExtraIncome && context.role.is_privileged())
        .then(|| view! { <ExtraHoursDialog/> });

    let actions = RowActions { on_decide, on_upload };
    let pane_class = move || {
        if active.get() == kind { "tab-pane fade show active" } else { "tab-pane fade" }
    };

    view! {
        <div id=kind.dom_id() class=pane_class role="tabpanel">
            {filters}
            {advance_form}
            {overtime}
            <PanelBody panel actions on_page/>
        </div>
    }
}
