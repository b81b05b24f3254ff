//! Pure rendering from wire records to panel views.
//!
//! Every record type knows its table headers and how to turn itself into a
//! [`RowView`]; [`render_page`] wraps a page of them with the empty state
//! and pager. Nothing here touches the DOM or the network.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::config::Role;
use crate::net::api::{JustificationTarget, justification_url};
use crate::net::types::{
    Advance, AttendanceEntry, EmployeeGeneral, ExtraIncome, LeaveRequest, OvertimeHour, Paged, PayrollRun, Sanction,
    VacationGrant,
};
use crate::state::panel::{CellView, PagerView, PanelKind, PanelView, RowView, SummaryItem, SummaryView, TableView};
use crate::state::status::{ActionStatus, BadgeTone, Decision, tone_for_label};
use crate::util::format::{
    MISSING, format_currency, format_iso_date, format_optional_currency, month_name, text_or_dash,
};

/// Who is looking and where documents are served from.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub role: Role,
    pub api_prefix: &'a str,
}

impl RenderContext<'_> {
    /// Approve/reject buttons for a record in `status`.
    fn decisions(&self, status: ActionStatus) -> CellView {
        if self.role.is_privileged() && !status.is_terminal() {
            CellView::Actions(vec![Decision::Approve, Decision::Reject])
        } else {
            CellView::Actions(Vec::new())
        }
    }

    /// Link to the stored document, if any, next to the upload control.
    /// A stored file can always be replaced.
    fn justification(&self, stored: Option<&str>, upload: Option<JustificationTarget>) -> CellView {
        let link = stored
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|path| justification_url(self.api_prefix, path));
        CellView::Justification { link, upload }
    }
}

/// A wire record that renders as one table row.
pub trait PanelRecord {
    const HEADERS: &'static [&'static str];

    fn to_row(&self, ctx: &RenderContext<'_>) -> RowView;
}

/// Render one page of records; an empty page shows the panel's empty
/// message and no table.
pub fn render_page<R: PanelRecord>(page: &Paged<R>, kind: PanelKind, ctx: &RenderContext<'_>) -> PanelView {
    if page.items.is_empty() {
        return PanelView::Empty(kind.empty_message().to_owned());
    }
    PanelView::Table(TableView {
        headers: R::HEADERS.to_vec(),
        rows: page.items.iter().map(|record| record.to_row(ctx)).collect(),
        pager: PagerView::build(page.page, page.pages),
    })
}

fn text(value: impl Into<String>) -> CellView {
    CellView::Text(value.into())
}

fn span(start: Option<&str>, end: Option<&str>) -> String {
    format!(
        "{} a {}",
        start.map_or_else(|| MISSING.to_owned(), format_iso_date),
        end.map_or_else(|| MISSING.to_owned(), format_iso_date)
    )
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Sí" } else { "No" }
}

impl PanelRecord for AttendanceEntry {
    const HEADERS: &'static [&'static str] = &["Fecha", "Entrada", "Salida", "Presente", "Observaciones"];

    fn to_row(&self, _ctx: &RenderContext<'_>) -> RowView {
        let tone = match self.present.trim().to_lowercase().as_str() {
            "sí" | "si" => BadgeTone::Success,
            _ => BadgeTone::Danger,
        };
        RowView {
            record_id: Some(self.id),
            cells: vec![
                text(format_iso_date(&self.date)),
                text(text_or_dash(self.check_in.as_deref())),
                text(text_or_dash(self.check_out.as_deref())),
                CellView::Badge { label: self.present.clone(), tone },
                text(text_or_dash(self.notes.as_deref())),
            ],
        }
    }
}

impl PanelRecord for VacationGrant {
    const HEADERS: &'static [&'static str] = &["Año", "Disponibles", "Tomados", "Pendientes", "Período", "Estado"];

    fn to_row(&self, _ctx: &RenderContext<'_>) -> RowView {
        let tone = if ActionStatus::parse(&self.status) == Some(ActionStatus::Approved) {
            BadgeTone::Success
        } else {
            BadgeTone::Warning
        };
        RowView {
            record_id: None,
            cells: vec![
                CellView::Strong(self.year.to_string()),
                text(self.available_days.to_string()),
                text(self.taken_days.to_string()),
                text(self.pending_days.to_string()),
                text(span(self.start.as_deref(), self.end.as_deref())),
                CellView::Badge { label: self.status.clone(), tone },
            ],
        }
    }
}

impl PanelRecord for LeaveRequest {
    const HEADERS: &'static [&'static str] =
        &["Tipo", "Motivo", "Período", "Días", "Con Goce", "Justificativo", "Estado"];

    fn to_row(&self, ctx: &RenderContext<'_>) -> RowView {
        RowView {
            record_id: Some(self.id),
            cells: vec![
                text(text_or_dash(self.kind.as_deref())),
                text(text_or_dash(self.reason.as_deref())),
                text(span(Some(self.start.as_str()), Some(self.end.as_str()))),
                text(self.days.to_string()),
                text(self.paid.clone()),
                ctx.justification(self.justification.as_deref(), Some(JustificationTarget::LeaveRequest)),
                CellView::Badge { label: self.status.clone(), tone: tone_for_label(&self.status) },
            ],
        }
    }
}

impl PanelRecord for Sanction {
    const HEADERS: &'static [&'static str] = &["Tipo", "Motivo", "Monto", "Fecha", "Descripción", "Justificativo"];

    fn to_row(&self, ctx: &RenderContext<'_>) -> RowView {
        // Sanction documents are filed by HR only.
        let upload = ctx.role.is_privileged().then_some(JustificationTarget::Sanction);
        RowView {
            record_id: Some(self.id),
            cells: vec![
                CellView::Strong(text_or_dash(self.kind.as_deref())),
                text(text_or_dash(self.reason.as_deref())),
                text(format_currency(self.amount)),
                text(format_iso_date(&self.date)),
                text(text_or_dash(self.description.as_deref())),
                ctx.justification(self.justification.as_deref(), upload),
            ],
        }
    }
}

impl PanelRecord for PayrollRun {
    const HEADERS: &'static [&'static str] =
        &["Período", "Salario Base", "Ingresos Extras", "Descuentos", "Aporte IPS", "Neto", "Días"];

    fn to_row(&self, _ctx: &RenderContext<'_>) -> RowView {
        RowView {
            record_id: Some(self.id),
            cells: vec![
                CellView::Strong(self.period.clone()),
                text(format_currency(self.base_salary)),
                text(format_currency(self.extra_income)),
                text(format_currency(self.deductions)),
                text(format_currency(self.social_security)),
                CellView::Strong(format_currency(self.net_salary)),
                text(self.days_worked.map_or_else(|| MISSING.to_owned(), |d| d.to_string())),
            ],
        }
    }
}

impl PanelRecord for Advance {
    const HEADERS: &'static [&'static str] =
        &["Fecha Solicitud", "Monto", "Estado", "Aplicado", "Justificativo", "Acciones"];

    fn to_row(&self, ctx: &RenderContext<'_>) -> RowView {
        let status = ActionStatus::of_advance(self);
        RowView {
            record_id: Some(self.id),
            cells: vec![
                text(self.requested_at.as_deref().map_or_else(|| MISSING.to_owned(), format_iso_date)),
                CellView::Strong(format_currency(self.amount)),
                CellView::Status(status),
                text(yes_no(self.applied)),
                ctx.justification(self.justification.as_deref(), Some(JustificationTarget::Advance)),
                ctx.decisions(status),
            ],
        }
    }
}

fn income_period(month: Option<u8>, year: Option<i32>) -> String {
    match (month.and_then(month_name), year) {
        (Some(name), Some(year)) => format!("{name} {year}"),
        (Some(name), None) => name.to_owned(),
        (None, Some(year)) => year.to_string(),
        (None, None) => MISSING.to_owned(),
    }
}

impl PanelRecord for ExtraIncome {
    const HEADERS: &'static [&'static str] =
        &["Tipo", "Monto", "Período", "Estado", "Justificativo", "Creado", "Acciones"];

    fn to_row(&self, ctx: &RenderContext<'_>) -> RowView {
        let status = self.status.as_deref().and_then(ActionStatus::parse);
        let (status_cell, actions) = match status {
            Some(status) => (CellView::Status(status), ctx.decisions(status)),
            None => (
                CellView::Badge { label: text_or_dash(self.status.as_deref()), tone: BadgeTone::Secondary },
                CellView::Actions(Vec::new()),
            ),
        };
        RowView {
            record_id: Some(self.id),
            cells: vec![
                text(text_or_dash(self.kind.as_deref())),
                text(format_optional_currency(self.amount)),
                text(income_period(self.month, self.year)),
                status_cell,
                ctx.justification(self.justification.as_deref(), None),
                text(self.created_at.as_deref().map_or_else(|| MISSING.to_owned(), format_iso_date)),
                actions,
            ],
        }
    }
}

impl PanelRecord for OvertimeHour {
    const HEADERS: &'static [&'static str] = &["Fecha", "Horas", "Monto", "Estado", "Acciones"];

    fn to_row(&self, ctx: &RenderContext<'_>) -> RowView {
        let status = ActionStatus::parse(&self.status);
        let (status_cell, actions) = match status {
            Some(status) => (CellView::Status(status), ctx.decisions(status)),
            None => (
                CellView::Badge { label: self.status.clone(), tone: BadgeTone::Secondary },
                CellView::Actions(Vec::new()),
            ),
        };
        RowView {
            record_id: Some(self.id),
            cells: vec![
                text(format_iso_date(&self.date)),
                text(self.hours.to_string()),
                text(format_currency(self.amount)),
                status_cell,
                actions,
            ],
        }
    }
}

fn item(label: &'static str, value: impl Into<String>) -> SummaryItem {
    SummaryItem { label, value: value.into() }
}

/// Render the general tab.
pub fn render_general(general: &EmployeeGeneral) -> PanelView {
    let status = text_or_dash(general.status.as_deref());
    let employment_tone = if status.eq_ignore_ascii_case("activo") { BadgeTone::Success } else { BadgeTone::Danger };
    let today = &general.today;
    let present = match today.present {
        Some(true) => "Sí",
        Some(false) => "No",
        None => MISSING,
    };
    PanelView::Summary(SummaryView {
        kpis: vec![
            item("Asistencias del mes", general.month_attendance.to_string()),
            item("Vacaciones pendientes", general.pending_vacation_days.to_string()),
            item("Sanciones activas", general.active_sanctions.to_string()),
            item("Permisos usados", general.used_leaves.to_string()),
        ],
        details: vec![
            item("Nombre", text_or_dash(general.full_name.as_deref())),
            item("Código", text_or_dash(general.code.as_deref())),
            item("Cargo", text_or_dash(general.job_title.as_deref())),
            item("Email", text_or_dash(general.email.as_deref())),
            item("Teléfono", text_or_dash(general.phone.as_deref())),
            item(
                "Fecha de ingreso",
                general.hire_date.as_deref().map_or_else(|| MISSING.to_owned(), format_iso_date),
            ),
            item("Antigüedad", text_or_dash(general.seniority.as_deref())),
            item("Salario base", format_currency(general.base_salary)),
        ],
        employment_status: status,
        employment_tone,
        today: vec![
            item("Entrada", text_or_dash(today.check_in.as_deref())),
            item("Salida", text_or_dash(today.check_out.as_deref())),
            item("Presente", present),
            item("Observaciones", text_or_dash(today.notes.as_deref())),
        ],
    })
}
