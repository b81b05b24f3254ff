//! Wire DTOs for the HR back-end's employee-record endpoints.
//!
//! DESIGN
//! ======
//! The back-end speaks Spanish field names; serde renames map them onto
//! English fields here so the rest of the crate never sees wire keys.
//! Fields the server sometimes omits default instead of failing the whole
//! page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

fn first_page() -> u32 {
    1
}

/// A server-determined page of records.
///
/// Attendance, leave, sanctions, payroll and advances report the page as
/// `current_page`; extra income uses `page`. Vacations are unpaged, so
/// both counters default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paged<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default = "first_page", alias = "current_page")]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

/// A KPI the server reports either as a number or preformatted text
/// (e.g. `"87.5%"`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum KpiValue {
    Number(f64),
    Text(String),
}

impl Default for KpiValue {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) if n.fract().abs() < f64::EPSILON => write!(f, "{n:.0}"),
            Self::Number(n) => write!(f, "{n:.1}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Today's attendance summary shown on the general tab.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TodaySummary {
    #[serde(default, rename = "hora_entrada")]
    pub check_in: Option<String>,
    #[serde(default, rename = "hora_salida")]
    pub check_out: Option<String>,
    #[serde(default, rename = "presente")]
    pub present: Option<bool>,
    #[serde(default, rename = "observaciones")]
    pub notes: Option<String>,
}

/// `GET /api/empleados/{id}/general`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmployeeGeneral {
    pub id: i64,
    #[serde(default, rename = "codigo")]
    pub code: Option<String>,
    #[serde(default, rename = "nombre_completo")]
    pub full_name: Option<String>,
    #[serde(default, rename = "cargo")]
    pub job_title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "telefono")]
    pub phone: Option<String>,
    #[serde(default, rename = "fecha_ingreso")]
    pub hire_date: Option<String>,
    #[serde(default, rename = "antiguedad")]
    pub seniority: Option<String>,
    #[serde(default, rename = "estado")]
    pub status: Option<String>,
    #[serde(default, rename = "salario_base")]
    pub base_salary: f64,
    #[serde(default, rename = "asistencia_mes")]
    pub month_attendance: KpiValue,
    #[serde(default, rename = "vacaciones_pendientes")]
    pub pending_vacation_days: KpiValue,
    #[serde(default, rename = "sanciones_activas")]
    pub active_sanctions: KpiValue,
    #[serde(default, rename = "permisos_usados")]
    pub used_leaves: KpiValue,
    #[serde(default, rename = "resumen_hoy")]
    pub today: TodaySummary,
}

/// Row of `GET /api/empleados/{id}/asistencias`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AttendanceEntry {
    pub id: i64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(default, rename = "entrada")]
    pub check_in: Option<String>,
    #[serde(default, rename = "salida")]
    pub check_out: Option<String>,
    #[serde(default, rename = "presente")]
    pub present: String,
    #[serde(default, rename = "observaciones")]
    pub notes: Option<String>,
}

/// Row of `GET /api/empleados/{id}/vacaciones`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VacationGrant {
    #[serde(rename = "año")]
    pub year: i32,
    #[serde(default, rename = "dias_disponibles")]
    pub available_days: i64,
    #[serde(default, rename = "dias_tomados")]
    pub taken_days: i64,
    #[serde(default, rename = "dias_pendientes")]
    pub pending_days: i64,
    #[serde(default, rename = "fecha_inicio")]
    pub start: Option<String>,
    #[serde(default, rename = "fecha_fin")]
    pub end: Option<String>,
    #[serde(default, rename = "estado")]
    pub status: String,
}

/// Row of `GET /api/empleados/{id}/permisos`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeaveRequest {
    pub id: i64,
    #[serde(default, rename = "tipo")]
    pub kind: Option<String>,
    #[serde(default, rename = "motivo")]
    pub reason: Option<String>,
    #[serde(rename = "fecha_inicio")]
    pub start: String,
    #[serde(rename = "fecha_fin")]
    pub end: String,
    #[serde(default, rename = "dias")]
    pub days: i64,
    #[serde(default, rename = "con_goce")]
    pub paid: String,
    #[serde(default, rename = "justificativo")]
    pub justification: Option<String>,
    #[serde(default, rename = "estado")]
    pub status: String,
}

/// Row of `GET /api/empleados/{id}/sanciones`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Sanction {
    pub id: i64,
    #[serde(default, rename = "tipo")]
    pub kind: Option<String>,
    #[serde(default, rename = "motivo")]
    pub reason: Option<String>,
    #[serde(default, rename = "monto")]
    pub amount: f64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(default, rename = "descripcion")]
    pub description: Option<String>,
    #[serde(default, rename = "justificativo")]
    pub justification: Option<String>,
}

/// Row of `GET /api/empleados/{id}/liquidaciones`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PayrollRun {
    pub id: i64,
    #[serde(rename = "periodo")]
    pub period: String,
    #[serde(default, rename = "salario_base")]
    pub base_salary: f64,
    #[serde(default, rename = "ingresos_extras")]
    pub extra_income: f64,
    #[serde(default, rename = "descuentos")]
    pub deductions: f64,
    #[serde(default, rename = "aporte_ips")]
    pub social_security: f64,
    #[serde(default, rename = "salario_neto")]
    pub net_salary: f64,
    #[serde(default, rename = "dias_trabajados")]
    pub days_worked: Option<i64>,
}

/// Row of `GET /api/empleados/{id}/anticipos`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Advance {
    pub id: i64,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(default, rename = "fecha_solicitud")]
    pub requested_at: Option<String>,
    #[serde(default, rename = "aprobado")]
    pub approved: bool,
    #[serde(default, rename = "rechazado")]
    pub rejected: bool,
    #[serde(default, rename = "fecha_rechazo")]
    pub rejected_at: Option<String>,
    #[serde(default, rename = "aplicado")]
    pub applied: bool,
    #[serde(default, rename = "justificativo")]
    pub justification: Option<String>,
}

/// Row of `GET /api/empleados/{id}/ingresos-extras`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExtraIncome {
    pub id: i64,
    #[serde(default, rename = "tipo")]
    pub kind: Option<String>,
    #[serde(default, rename = "monto")]
    pub amount: Option<f64>,
    #[serde(default, rename = "mes")]
    pub month: Option<u8>,
    #[serde(default, rename = "año")]
    pub year: Option<i32>,
    #[serde(default, rename = "estado")]
    pub status: Option<String>,
    #[serde(default, rename = "justificativo")]
    pub justification: Option<String>,
    #[serde(default, rename = "fecha_creacion")]
    pub created_at: Option<String>,
}

/// Row of `GET /api/empleados/{id}/horas-extras`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OvertimeHour {
    pub id: i64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(default, rename = "horas")]
    pub hours: f64,
    #[serde(default, rename = "monto")]
    pub amount: f64,
    #[serde(default, rename = "estado")]
    pub status: String,
}

/// `GET /api/empleados/{id}/horas-extras?periodo=YYYY-MM`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OvertimeSheet {
    #[serde(default)]
    pub items: Vec<OvertimeHour>,
    #[serde(default, rename = "empleado")]
    pub employee_name: String,
    #[serde(default, rename = "periodo")]
    pub period: String,
}

/// Body of `POST /anticipos/create`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAdvance {
    #[serde(rename = "empleado_id")]
    pub employee_id: i64,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "observaciones", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Reply of every mutating endpoint.
///
/// A present `error` is a domain failure even when the status is 200.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MutationReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Stored path of an uploaded justification or generated receipt.
    #[serde(default, alias = "ruta_pdf", rename = "ruta")]
    pub stored_path: Option<String>,
    /// Id of a newly created record.
    #[serde(default)]
    pub id: Option<i64>,
}
