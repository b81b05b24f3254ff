//! One controller per panel: fetch, render, mutate, refetch.
//!
//! DESIGN
//! ======
//! The controller owns its [`PanelState`] behind `Rc<RefCell<_>>` and never
//! holds the borrow across an `.await`. Each load takes a request token
//! first; when the reply arrives, a newer load has always won and the stale
//! reply is dropped. Every state change is pushed to the view sink so the
//! component can mirror it into a signal.
//!
//! Mutations (upload, decide, create) report through the [`Notifier`] and
//! then refetch page 1 without blanking the table.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::config::EmployeeContext;
use crate::net::api::{ApiError, Collection, HrApi, PageQuery, PeriodFilter, Transport, justification_url};
use crate::net::types::{
    Advance, AttendanceEntry, ExtraIncome, LeaveRequest, NewAdvance, PayrollRun, Sanction, VacationGrant,
};
use crate::state::notifier::Notifier;
use crate::state::panel::{PanelKind, PanelState, PanelView};
use crate::state::records::{PanelRecord, RenderContext, render_general, render_page};
use crate::state::status::Decision;
use crate::util::upload::FileUpload;

/// A file picked in the browser, or why it could not be read.
pub type PickedFile = Result<FileUpload, ApiError>;

type ViewSink = Rc<dyn Fn(&PanelView)>;

/// Reasons a new advance is refused before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceFormError {
    #[error("El monto debe ser mayor a cero")]
    InvalidAmount,
}

/// Check and normalize the advance form.
///
/// # Errors
///
/// Returns [`AdvanceFormError::InvalidAmount`] for non-finite or
/// non-positive amounts.
pub fn build_advance(employee_id: i64, amount: f64, notes: &str) -> Result<NewAdvance, AdvanceFormError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AdvanceFormError::InvalidAmount);
    }
    let notes = Some(notes.trim()).filter(|n| !n.is_empty()).map(str::to_owned);
    Ok(NewAdvance { employee_id, amount, notes })
}

pub struct PanelController<T> {
    kind: PanelKind,
    context: EmployeeContext,
    api: Rc<HrApi<T>>,
    notifier: Notifier,
    state: Rc<RefCell<PanelState>>,
    sink: ViewSink,
}

impl<T> Clone for PanelController<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            context: self.context,
            api: self.api.clone(),
            notifier: self.notifier.clone(),
            state: self.state.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<T: Transport> PanelController<T> {
    pub fn new(kind: PanelKind, context: EmployeeContext, api: Rc<HrApi<T>>, notifier: Notifier) -> Self {
        Self {
            kind,
            context,
            api,
            notifier,
            state: Rc::new(RefCell::new(PanelState::new(kind))),
            sink: Rc::new(|_| {}),
        }
    }

    #[must_use]
    pub fn with_sink(mut self, sink: impl Fn(&PanelView) + 'static) -> Self {
        self.sink = Rc::new(sink);
        self
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn view(&self) -> PanelView {
        self.state.borrow().view().clone()
    }

    pub fn page(&self) -> u32 {
        self.state.borrow().page()
    }

    pub fn period(&self) -> PeriodFilter {
        self.state.borrow().period()
    }

    fn publish(&self) {
        let view = self.view();
        (self.sink)(&view);
    }

    /// Show the loading indicator and fetch `page`. `period: None` keeps
    /// the current filters.
    pub async fn load(&self, page: u32, period: Option<PeriodFilter>) {
        self.fetch(page, period, true).await;
    }

    /// Refetch page 1 with the current filters, keeping the old view until
    /// the reply lands.
    pub async fn reload_first_page(&self) {
        self.fetch(1, None, false).await;
    }

    async fn fetch(&self, page: u32, period: Option<PeriodFilter>, show_loading: bool) {
        let ticket = self.state.borrow_mut().begin_load(page, period, show_loading);
        if show_loading {
            self.publish();
        }
        let result = self.fetch_view(&ticket.query).await;
        if let Err(e) = &result {
            leptos::logging::warn!("{} panel load failed: {e}", self.kind.tab_label());
        }
        let applied = self.state.borrow_mut().complete_load(ticket.token, result);
        if applied {
            self.publish();
        }
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext { role: self.context.role, api_prefix: &self.api.config().api_prefix }
    }

    async fn fetch_view(&self, query: &PageQuery) -> Result<PanelView, ApiError> {
        match self.kind {
            PanelKind::General => {
                let general = self.api.fetch_general(self.context.employee_id).await?;
                Ok(render_general(&general))
            }
            PanelKind::Attendance => self.fetch_table::<AttendanceEntry>(Collection::Attendance, query).await,
            PanelKind::Vacations => self.fetch_table::<VacationGrant>(Collection::Vacations, query).await,
            PanelKind::LeaveRequests => self.fetch_table::<LeaveRequest>(Collection::LeaveRequests, query).await,
            PanelKind::Sanctions => self.fetch_table::<Sanction>(Collection::Sanctions, query).await,
            PanelKind::Payroll => self.fetch_table::<PayrollRun>(Collection::Payroll, query).await,
            PanelKind::Advances => self.fetch_table::<Advance>(Collection::Advances, query).await,
            PanelKind::ExtraIncome => self.fetch_table::<ExtraIncome>(Collection::ExtraIncome, query).await,
        }
    }

    async fn fetch_table<R: PanelRecord + DeserializeOwned>(
        &self,
        collection: Collection,
        query: &PageQuery,
    ) -> Result<PanelView, ApiError> {
        let page = self
            .api
            .fetch_page::<R>(self.context.employee_id, collection, query)
            .await?;
        Ok(render_page(&page, self.kind, &self.render_context()))
    }

    /// Upload a file the browser finished reading. A failed read opens an
    /// error modal and sends nothing.
    pub async fn upload_picked(&self, record_id: i64, picked: PickedFile) -> bool {
        match picked {
            Ok(upload) => self.upload_justification(record_id, upload).await,
            Err(e) => {
                leptos::logging::warn!("reading picked file failed: {e}");
                self.notifier
                    .error("Archivo no válido", "No se pudo leer el archivo seleccionado", None);
                false
            }
        }
    }

    /// Upload a justification for `record_id`. Invalid files are refused
    /// with an error modal and never sent. Returns whether the upload
    /// succeeded.
    pub async fn upload_justification(&self, record_id: i64, upload: FileUpload) -> bool {
        let Some(target) = self.kind.justification_target() else {
            return false;
        };
        if let Err(e) = upload.validate() {
            self.notifier.error("Archivo no válido", &e.to_string(), None);
            return false;
        }
        match self.api.upload_justification(target, record_id, &upload).await {
            Ok(_) => {
                self.notifier
                    .success("Justificativo subido", "El justificativo se subió correctamente", None);
                self.reload_first_page().await;
                true
            }
            Err(e) => {
                self.notifier
                    .error("Error", &e.user_message("Error al subir el justificativo"), None);
                false
            }
        }
    }

    /// Approve or reject `record_id`. Returns whether the server accepted
    /// the decision.
    pub async fn decide(&self, record_id: i64, decision: Decision) -> bool {
        let Some(target) = self.kind.approval_target() else {
            return false;
        };
        match self.api.decide(target, record_id, decision).await {
            Ok(reply) => {
                if self.kind.patches_optimistically() {
                    let receipt = reply
                        .stored_path
                        .as_deref()
                        .map(|path| justification_url(&self.api.config().api_prefix, path));
                    if self.state.borrow_mut().apply_decision(record_id, decision, receipt) {
                        self.publish();
                    }
                }
                let title = format!("{} {}", target.noun(), decision.outcome());
                self.notifier
                    .success(&title, "La operación se realizó correctamente", None);
                self.reload_first_page().await;
                true
            }
            Err(e) => {
                let fallback = format!("No se pudo {} el registro", decision.label().to_lowercase());
                self.notifier.error("Error", &e.user_message(&fallback), None);
                false
            }
        }
    }

    /// Request a new advance for the displayed employee. Returns whether
    /// the advance was created.
    pub async fn create_advance(&self, amount: f64, notes: &str) -> bool {
        if self.kind != PanelKind::Advances {
            return false;
        }
        let advance = match build_advance(self.context.employee_id, amount, notes) {
            Ok(advance) => advance,
            Err(e) => {
                self.notifier.error("Datos no válidos", &e.to_string(), None);
                return false;
            }
        };
        match self.api.create_advance(&advance).await {
            Ok(reply) => {
                let message = reply
                    .message
                    .unwrap_or_else(|| "El anticipo fue registrado".to_owned());
                self.notifier.success("Anticipo solicitado", &message, None);
                self.reload_first_page().await;
                true
            }
            Err(e) => {
                self.notifier
                    .error("Error", &e.user_message("Error al solicitar el anticipo"), None);
                false
            }
        }
    }
}
