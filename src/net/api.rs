//! REST API client for the employee-record endpoints.
//!
//! Endpoint paths are pure functions of the configured prefix so they can
//! be checked without a network. Requests go through the [`Transport`]
//! trait: the browser implementation lives in `net::browser`, tests plug in
//! a recording mock.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A JSON `{"error": "..."}` body
//! is a domain error whatever the HTTP status; anything else that is not a
//! 2xx with a decodable body is a status or parse error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{EmployeeGeneral, MutationReply, NewAdvance, OvertimeSheet, Paged};
use crate::config::{CSRF_HEADER, ClientConfig};
use crate::state::status::Decision;
use crate::util::upload::FileUpload;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx status without a server-provided error message.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// Empty or malformed body.
    #[error("invalid response: {0}")]
    Parse(String),
    /// Server-reported domain error.
    #[error("{0}")]
    Domain(String),
}

impl ApiError {
    /// Text for an error modal: the server's own message for domain
    /// errors, `fallback` for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Domain(message) => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Raw HTTP reply handed back by a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request header as name and value.
pub type Header = (&'static str, String);

/// Body of a mutating request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody<'a> {
    Empty,
    Json(serde_json::Value),
    File(&'a FileUpload),
}

/// HTTP seam between the API client and the network.
///
/// Futures are not `Send`: the client runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpReply, ApiError>;
    async fn post(&self, url: &str, headers: &[Header], body: RequestBody<'_>) -> Result<HttpReply, ApiError>;
}

/// Paged record collections under `/api/empleados/{id}/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Attendance,
    Vacations,
    LeaveRequests,
    Sanctions,
    Payroll,
    Advances,
    ExtraIncome,
}

impl Collection {
    pub fn segment(self) -> &'static str {
        match self {
            Self::Attendance => "asistencias",
            Self::Vacations => "vacaciones",
            Self::LeaveRequests => "permisos",
            Self::Sanctions => "sanciones",
            Self::Payroll => "liquidaciones",
            Self::Advances => "anticipos",
            Self::ExtraIncome => "ingresos-extras",
        }
    }
}

/// Records that accept a justification upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JustificationTarget {
    LeaveRequest,
    Sanction,
    Advance,
}

impl JustificationTarget {
    pub fn segment(self) -> &'static str {
        match self {
            Self::LeaveRequest => "permisos",
            Self::Sanction => "sanciones",
            Self::Advance => "anticipos",
        }
    }
}

/// Records that accept approve/reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalTarget {
    Advance,
    ExtraIncome,
    OvertimeHour,
}

impl ApprovalTarget {
    pub fn segment(self) -> &'static str {
        match self {
            Self::Advance => "anticipos",
            Self::ExtraIncome => "ingresos-extras",
            Self::OvertimeHour => "horas-extra",
        }
    }

    /// Noun used in notifications.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Advance => "Anticipo",
            Self::ExtraIncome => "Ingreso extra",
            Self::OvertimeHour => "Hora extra",
        }
    }
}

/// Optional month/year narrowing; only attendance honours it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeriodFilter {
    pub month: Option<u8>,
    pub year: Option<i32>,
}

impl PeriodFilter {
    pub fn is_empty(self) -> bool {
        self.month.is_none() && self.year.is_none()
    }
}

/// Query of one page read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub period: PeriodFilter,
}

impl PageQuery {
    /// Page numbers below 1 are clamped to 1.
    pub fn new(page: u32, period: PeriodFilter) -> Self {
        Self { page: page.max(1), period }
    }

    /// `page=N[&mes=M][&year=Y]`; each filter is sent only when set.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}", self.page);
        if let Some(month) = self.period.month {
            query.push_str(&format!("&mes={month}"));
        }
        if let Some(year) = self.period.year {
            query.push_str(&format!("&year={year}"));
        }
        query
    }
}

fn employee_base(prefix: &str, employee_id: i64) -> String {
    format!("{prefix}/api/empleados/{employee_id}")
}

pub fn general_endpoint(prefix: &str, employee_id: i64) -> String {
    format!("{}/general", employee_base(prefix, employee_id))
}

pub fn collection_endpoint(prefix: &str, employee_id: i64, collection: Collection, query: &PageQuery) -> String {
    format!(
        "{}/{}?{}",
        employee_base(prefix, employee_id),
        collection.segment(),
        query.to_query_string()
    )
}

pub fn overtime_endpoint(prefix: &str, employee_id: i64, period: &str) -> String {
    format!("{}/horas-extras?periodo={period}", employee_base(prefix, employee_id))
}

pub fn upload_endpoint(prefix: &str, target: JustificationTarget, record_id: i64) -> String {
    format!("{prefix}/{}/{record_id}/upload-justificativo", target.segment())
}

pub fn create_advance_endpoint(prefix: &str) -> String {
    format!("{prefix}/anticipos/create")
}

pub fn decision_endpoint(prefix: &str, target: ApprovalTarget, record_id: i64, decision: Decision) -> String {
    format!("{prefix}/{}/{record_id}/{}", target.segment(), decision.path_segment())
}

/// Download link for a stored justification path.
///
/// Files are served from `{prefix}/uploads/`; stored paths that already
/// include the `uploads/` directory are not doubled.
pub fn justification_url(prefix: &str, stored_path: &str) -> String {
    let path = stored_path.trim().trim_start_matches('/');
    if path.starts_with("uploads/") {
        format!("{prefix}/{path}")
    } else {
        format!("{prefix}/uploads/{path}")
    }
}

fn domain_error(value: &serde_json::Value) -> Option<String> {
    match value.get("error")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn parse_body(reply: &HttpReply) -> Result<serde_json::Value, ApiError> {
    if reply.body.trim().is_empty() {
        return if reply.is_success() {
            Err(ApiError::Parse("empty response".to_owned()))
        } else {
            Err(ApiError::Status(reply.status))
        };
    }
    match serde_json::from_str::<serde_json::Value>(&reply.body) {
        Ok(value) => Ok(value),
        Err(_) if !reply.is_success() => Err(ApiError::Status(reply.status)),
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

/// Decode a read reply into `R`.
pub(crate) fn decode_read<R: DeserializeOwned>(reply: &HttpReply) -> Result<R, ApiError> {
    let value = parse_body(reply)?;
    if let Some(message) = domain_error(&value) {
        return Err(ApiError::Domain(message));
    }
    if !reply.is_success() {
        return Err(ApiError::Status(reply.status));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Decode a mutation reply; an `error` member becomes [`ApiError::Domain`].
pub(crate) fn decode_mutation(reply: &HttpReply) -> Result<MutationReply, ApiError> {
    decode_read(reply)
}

/// Typed client over a [`Transport`].
pub struct HrApi<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> HrApi<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn prefix(&self) -> &str {
        &self.config.api_prefix
    }

    /// Headers attached to every mutating request.
    pub fn mutation_headers(&self) -> Vec<Header> {
        self.config
            .csrf_token
            .as_ref()
            .map(|token| vec![(CSRF_HEADER, token.clone())])
            .unwrap_or_default()
    }

    async fn read<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        let result = match self.transport.get(url).await {
            Ok(reply) => decode_read(&reply),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            leptos::logging::warn!("GET {url} failed: {e}");
        }
        result
    }

    async fn write(&self, url: &str, body: RequestBody<'_>) -> Result<MutationReply, ApiError> {
        let headers = self.mutation_headers();
        let result = match self.transport.post(url, &headers, body).await {
            Ok(reply) => decode_mutation(&reply),
            Err(e) => Err(e),
        };
        match &result {
            Ok(_) => leptos::logging::log!("POST {url} ok"),
            Err(e) => leptos::logging::warn!("POST {url} failed: {e}"),
        }
        result
    }

    /// `GET /api/empleados/{id}/general`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, parse or domain failure.
    pub async fn fetch_general(&self, employee_id: i64) -> Result<EmployeeGeneral, ApiError> {
        self.read(&general_endpoint(self.prefix(), employee_id)).await
    }

    /// One page of a record collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, parse or domain failure.
    pub async fn fetch_page<R: DeserializeOwned>(
        &self,
        employee_id: i64,
        collection: Collection,
        query: &PageQuery,
    ) -> Result<Paged<R>, ApiError> {
        self.read(&collection_endpoint(self.prefix(), employee_id, collection, query))
            .await
    }

    /// Overtime hours of one employee for a `YYYY-MM` period.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, parse or domain failure.
    pub async fn fetch_overtime(&self, employee_id: i64, period: &str) -> Result<OvertimeSheet, ApiError> {
        self.read(&overtime_endpoint(self.prefix(), employee_id, period)).await
    }

    /// Multipart upload of a justification document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, parse or domain failure.
    pub async fn upload_justification(
        &self,
        target: JustificationTarget,
        record_id: i64,
        upload: &FileUpload,
    ) -> Result<MutationReply, ApiError> {
        let url = upload_endpoint(self.prefix(), target, record_id);
        self.write(&url, RequestBody::File(upload)).await
    }

    /// `POST /anticipos/create`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, parse or domain failure.
    pub async fn create_advance(&self, advance: &NewAdvance) -> Result<MutationReply, ApiError> {
        let body = serde_json::to_value(advance).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.write(&create_advance_endpoint(self.prefix()), RequestBody::Json(body))
            .await
    }

    /// Approve or reject a pending record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, parse or domain failure.
    pub async fn decide(
        &self,
        target: ApprovalTarget,
        record_id: i64,
        decision: Decision,
    ) -> Result<MutationReply, ApiError> {
        let url = decision_endpoint(self.prefix(), target, record_id, decision);
        self.write(&url, RequestBody::Empty).await
    }
}
