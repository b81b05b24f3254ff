//! Per-period overtime sheet for one employee, reviewed by HR.

#[cfg(test)]
#[path = "extra_hours_test.rs"]
mod extra_hours_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::EmployeeContext;
use crate::net::api::{ApiError, ApprovalTarget, HrApi, Transport};
use crate::net::types::{OvertimeHour, OvertimeSheet};
use crate::state::notifier::Notifier;
use crate::state::panel::{PanelView, TableView};
use crate::state::records::{PanelRecord, RenderContext};
use crate::state::sequence::RequestSeq;
use crate::state::status::Decision;
use crate::util::format::period_key;

pub const EMPTY_MESSAGE: &str = "No hay horas extra registradas en este período";
pub const ERROR_MESSAGE: &str = "Error al cargar horas extra";

/// Heading and body of the review dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OvertimeView {
    pub title: String,
    pub body: PanelView,
}

pub fn sheet_title(sheet: &OvertimeSheet) -> String {
    format!("Horas Extra - {} ({})", sheet.employee_name, sheet.period)
}

pub fn render_sheet(sheet: &OvertimeSheet, ctx: &RenderContext<'_>) -> OvertimeView {
    let body = if sheet.items.is_empty() {
        PanelView::Empty(EMPTY_MESSAGE.to_owned())
    } else {
        PanelView::Table(TableView {
            headers: OvertimeHour::HEADERS.to_vec(),
            rows: sheet.items.iter().map(|hour| hour.to_row(ctx)).collect(),
            pager: None,
        })
    };
    OvertimeView { title: sheet_title(sheet), body }
}

#[derive(Default)]
struct ReviewState {
    period: Option<String>,
    seq: RequestSeq,
    view: OvertimeView,
}

type ReviewSink = Rc<dyn Fn(&OvertimeView)>;

pub struct OvertimeReview<T> {
    context: EmployeeContext,
    api: Rc<HrApi<T>>,
    notifier: Notifier,
    state: Rc<RefCell<ReviewState>>,
    sink: ReviewSink,
}

impl<T> Clone for OvertimeReview<T> {
    fn clone(&self) -> Self {
        Self {
            context: self.context,
            api: self.api.clone(),
            notifier: self.notifier.clone(),
            state: self.state.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<T: Transport> OvertimeReview<T> {
    pub fn new(context: EmployeeContext, api: Rc<HrApi<T>>, notifier: Notifier) -> Self {
        Self { context, api, notifier, state: Rc::default(), sink: Rc::new(|_| {}) }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: impl Fn(&OvertimeView) + 'static) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    pub fn view(&self) -> OvertimeView {
        self.state.borrow().view.clone()
    }

    pub fn period(&self) -> Option<String> {
        self.state.borrow().period.clone()
    }

    fn publish(&self) {
        let view = self.view();
        (self.sink)(&view);
    }

    /// Load the sheet for `year`/`month`.
    pub async fn open(&self, year: i32, month: u8) {
        self.fetch(period_key(year, month)).await;
    }

    /// Refetch the sheet last opened; no-op before the first `open`.
    pub async fn reload(&self) {
        let period = self.period();
        if let Some(period) = period {
            self.fetch(period).await;
        }
    }

    async fn fetch(&self, period: String) {
        let token = {
            let mut state = self.state.borrow_mut();
            state.period = Some(period.clone());
            state.view = OvertimeView { title: String::new(), body: PanelView::Loading };
            state.seq.issue()
        };
        self.publish();

        let result = self.api.fetch_overtime(self.context.employee_id, &period).await;
        let view = match result {
            Ok(sheet) => {
                let ctx = RenderContext { role: self.context.role, api_prefix: &self.api.config().api_prefix };
                render_sheet(&sheet, &ctx)
            }
            Err(e) => {
                leptos::logging::warn!("overtime sheet {period} failed: {e}");
                OvertimeView { title: String::new(), body: PanelView::Error(ERROR_MESSAGE.to_owned()) }
            }
        };

        let applied = {
            let mut state = self.state.borrow_mut();
            if state.seq.is_current(token) {
                state.view = view;
                true
            } else {
                false
            }
        };
        if applied {
            self.publish();
        }
    }

    /// Approve or reject one overtime entry, then refetch the sheet.
    pub async fn decide(&self, record_id: i64, decision: Decision) -> bool {
        match self.api.decide(ApprovalTarget::OvertimeHour, record_id, decision).await {
            Ok(_) => {
                let title = match decision {
                    Decision::Approve => "Hora extra aprobada",
                    Decision::Reject => "Hora extra rechazada",
                };
                self.notifier
                    .success(title, "La operación se realizó correctamente", None);
                self.reload().await;
                true
            }
            Err(e) => {
                self.notifier.error("Error", &decision_failure(&e, decision), None);
                false
            }
        }
    }
}

fn decision_failure(err: &ApiError, decision: Decision) -> String {
    err.user_message(&format!("No se pudo {} la hora extra", decision.label().to_lowercase()))
}
