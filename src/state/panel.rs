//! Panel view models and per-panel load state.
//!
//! DESIGN
//! ======
//! A panel's screen is always exactly one [`PanelView`]. Rendering from wire
//! data to a view is pure (see `state::records`); components only draw the
//! view. [`PanelState`] owns the page, filters and request tokens of one
//! tab, so nothing about a panel lives in shared globals.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::net::api::{ApiError, ApprovalTarget, Collection, JustificationTarget, PageQuery, PeriodFilter};
use crate::state::sequence::{RequestSeq, RequestToken};
use crate::state::status::{ActionStatus, BadgeTone, Decision};

/// The tabs of the employee record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelKind {
    General,
    Attendance,
    Vacations,
    LeaveRequests,
    Sanctions,
    Payroll,
    Advances,
    ExtraIncome,
}

impl PanelKind {
    pub const ALL: [Self; 8] = [
        Self::General,
        Self::Attendance,
        Self::Vacations,
        Self::LeaveRequests,
        Self::Sanctions,
        Self::Payroll,
        Self::Advances,
        Self::ExtraIncome,
    ];

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Attendance => "Asistencias",
            Self::Vacations => "Vacaciones",
            Self::LeaveRequests => "Permisos",
            Self::Sanctions => "Sanciones",
            Self::Payroll => "Liquidaciones",
            Self::Advances => "Anticipos",
            Self::ExtraIncome => "Ingresos Extras",
        }
    }

    /// Stable id used for the tab's DOM container.
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::General => "general-content",
            Self::Attendance => "asistencias-content",
            Self::Vacations => "vacaciones-content",
            Self::LeaveRequests => "permisos-content",
            Self::Sanctions => "sanciones-content",
            Self::Payroll => "liquidaciones-content",
            Self::Advances => "anticipos-content",
            Self::ExtraIncome => "ingresos-extras-content",
        }
    }

    /// Backing collection; `None` for the general summary.
    pub fn collection(self) -> Option<Collection> {
        match self {
            Self::General => None,
            Self::Attendance => Some(Collection::Attendance),
            Self::Vacations => Some(Collection::Vacations),
            Self::LeaveRequests => Some(Collection::LeaveRequests),
            Self::Sanctions => Some(Collection::Sanctions),
            Self::Payroll => Some(Collection::Payroll),
            Self::Advances => Some(Collection::Advances),
            Self::ExtraIncome => Some(Collection::ExtraIncome),
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Self::General => "No hay datos generales",
            Self::Attendance => "No hay registros de asistencia",
            Self::Vacations => "No hay registros de vacaciones",
            Self::LeaveRequests => "No hay solicitudes de permiso",
            Self::Sanctions => "No hay sanciones registradas",
            Self::Payroll => "No hay liquidaciones registradas",
            Self::Advances => "No hay anticipos registrados",
            Self::ExtraIncome => "No hay ingresos extras registrados",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Self::General => "Error al cargar datos generales",
            Self::Attendance => "Error al cargar asistencias",
            Self::Vacations => "Error al cargar vacaciones",
            Self::LeaveRequests => "Error al cargar permisos",
            Self::Sanctions => "Error al cargar sanciones",
            Self::Payroll => "Error al cargar liquidaciones",
            Self::Advances => "Error al cargar anticipos",
            Self::ExtraIncome => "Error al cargar ingresos extras",
        }
    }

    /// Only attendance can be narrowed by month and year.
    pub fn supports_period_filter(self) -> bool {
        matches!(self, Self::Attendance)
    }

    /// Panels whose decided rows are patched in place before the refetch.
    pub fn patches_optimistically(self) -> bool {
        matches!(self, Self::Advances)
    }

    pub fn approval_target(self) -> Option<ApprovalTarget> {
        match self {
            Self::Advances => Some(ApprovalTarget::Advance),
            Self::ExtraIncome => Some(ApprovalTarget::ExtraIncome),
            _ => None,
        }
    }

    pub fn justification_target(self) -> Option<JustificationTarget> {
        match self {
            Self::LeaveRequests => Some(JustificationTarget::LeaveRequest),
            Self::Sanctions => Some(JustificationTarget::Sanction),
            Self::Advances => Some(JustificationTarget::Advance),
            _ => None,
        }
    }
}

/// One table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellView {
    Text(String),
    Strong(String),
    Badge { label: String, tone: BadgeTone },
    /// Badge of an approvable record; replaced when a decision lands.
    Status(ActionStatus),
    /// Download link and/or upload control for a justification document.
    Justification { link: Option<String>, upload: Option<JustificationTarget> },
    /// Decision buttons; empty when nothing can be decided.
    Actions(Vec<Decision>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    pub record_id: Option<i64>,
    pub cells: Vec<CellView>,
}

impl RowView {
    pub fn status(&self) -> Option<ActionStatus> {
        self.cells.iter().find_map(|cell| match cell {
            CellView::Status(status) => Some(*status),
            _ => None,
        })
    }

    pub fn actions(&self) -> &[Decision] {
        self.cells
            .iter()
            .find_map(|cell| match cell {
                CellView::Actions(actions) => Some(actions.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Swap in a new status badge and drop the action buttons. Returns
    /// `false` when the row has no status cell.
    pub fn apply_status(&mut self, status: ActionStatus) -> bool {
        let mut found = false;
        for cell in &mut self.cells {
            match cell {
                CellView::Status(current) => {
                    *current = status;
                    found = true;
                }
                CellView::Actions(actions) if status.is_terminal() => actions.clear(),
                _ => {}
            }
        }
        found
    }

    /// Point the justification cell at a freshly stored document.
    pub fn attach_document(&mut self, link: String) -> bool {
        for cell in &mut self.cells {
            if let CellView::Justification { link: current, .. } = cell {
                *current = Some(link);
                return true;
            }
        }
        false
    }
}

/// One pagination button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerControl {
    pub label: &'static str,
    pub target: u32,
}

/// First/previous/current/next/last pagination state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerView {
    pub page: u32,
    pub pages: u32,
}

impl PagerView {
    /// A pager exists only when there is more than one page.
    pub fn build(page: u32, pages: u32) -> Option<Self> {
        (pages > 1).then(|| Self { page: page.clamp(1, pages), pages })
    }

    pub fn first(self) -> Option<PagerControl> {
        (self.page > 1).then_some(PagerControl { label: "Primera", target: 1 })
    }

    pub fn previous(self) -> Option<PagerControl> {
        (self.page > 1).then(|| PagerControl { label: "Anterior", target: self.page - 1 })
    }

    pub fn next(self) -> Option<PagerControl> {
        (self.page < self.pages).then(|| PagerControl { label: "Siguiente", target: self.page + 1 })
    }

    pub fn last(self) -> Option<PagerControl> {
        (self.page < self.pages).then(|| PagerControl { label: "Última", target: self.pages })
    }

    /// Current-page marker, e.g. `"2 / 3"`.
    pub fn label(self) -> String {
        format!("{} / {}", self.page, self.pages)
    }

    pub fn leading_controls(self) -> Vec<PagerControl> {
        self.first().into_iter().chain(self.previous()).collect()
    }

    pub fn trailing_controls(self) -> Vec<PagerControl> {
        self.next().into_iter().chain(self.last()).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<RowView>,
    pub pager: Option<PagerView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: String,
}

/// The general tab: KPI cards, job details and today's attendance.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    pub kpis: Vec<SummaryItem>,
    pub details: Vec<SummaryItem>,
    pub employment_status: String,
    pub employment_tone: BadgeTone,
    pub today: Vec<SummaryItem>,
}

/// Everything a panel container can show.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PanelView {
    /// Tab not activated yet.
    #[default]
    Idle,
    Loading,
    Error(String),
    Empty(String),
    Table(TableView),
    Summary(SummaryView),
}

impl PanelView {
    pub fn table(&self) -> Option<&TableView> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// What a started load needs to finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub token: RequestToken,
    pub query: PageQuery,
}

/// Page, filters and current view of one panel.
#[derive(Clone, Debug)]
pub struct PanelState {
    kind: PanelKind,
    page: u32,
    period: PeriodFilter,
    seq: RequestSeq,
    view: PanelView,
}

impl PanelState {
    pub fn new(kind: PanelKind) -> Self {
        Self { kind, page: 1, period: PeriodFilter::default(), seq: RequestSeq::default(), view: PanelView::Idle }
    }

    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn period(&self) -> PeriodFilter {
        self.period
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    /// Start a load. `period: None` keeps the current filters; panels that
    /// cannot filter always send none. With `show_loading` the view becomes
    /// the loading indicator, otherwise the old view stays until the reply.
    pub fn begin_load(&mut self, page: u32, period: Option<PeriodFilter>, show_loading: bool) -> LoadTicket {
        self.page = page.max(1);
        self.period = if self.kind.supports_period_filter() {
            period.unwrap_or(self.period)
        } else {
            PeriodFilter::default()
        };
        if show_loading {
            self.view = PanelView::Loading;
        }
        LoadTicket { token: self.seq.issue(), query: PageQuery::new(self.page, self.period) }
    }

    /// Apply a finished load. Returns `false`, leaving the view untouched,
    /// when a newer load has started since `token` was issued.
    pub fn complete_load(&mut self, token: RequestToken, result: Result<PanelView, ApiError>) -> bool {
        if !self.seq.is_current(token) {
            return false;
        }
        self.view = match result {
            Ok(view) => view,
            Err(_) => PanelView::Error(self.kind.error_message().to_owned()),
        };
        true
    }

    /// Patch the decided row in place. Returns `false` when the row is not
    /// on screen or is no longer pending.
    pub fn apply_decision(&mut self, record_id: i64, decision: Decision, document: Option<String>) -> bool {
        let PanelView::Table(table) = &mut self.view else {
            return false;
        };
        let Some(row) = table.rows.iter_mut().find(|r| r.record_id == Some(record_id)) else {
            return false;
        };
        let Some(Ok(next)) = row.status().map(|s| s.apply(decision)) else {
            return false;
        };
        if let Some(link) = document {
            row.attach_document(link);
        }
        row.apply_status(next)
    }
}
