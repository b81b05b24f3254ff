use super::*;
use crate::net::mock::{MockTransport, RecordedBody};
use crate::net::types::AttendanceEntry;
use futures::executor::block_on;
use serde_json::json;

fn api(transport: &MockTransport, token: Option<&str>) -> HrApi<MockTransport> {
    HrApi::new(transport.clone(), ClientConfig::new(None, token))
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn general_endpoint_formats_expected_path() {
    assert_eq!(general_endpoint("/rrhh", 7), "/rrhh/api/empleados/7/general");
}

#[test]
fn collection_endpoint_includes_page_and_filters() {
    let query = PageQuery::new(2, PeriodFilter { month: Some(3), year: Some(2024) });
    assert_eq!(
        collection_endpoint("/rrhh", 7, Collection::Attendance, &query),
        "/rrhh/api/empleados/7/asistencias?page=2&mes=3&year=2024"
    );
}

#[test]
fn collection_endpoint_sends_each_filter_independently() {
    let month_only = PageQuery::new(1, PeriodFilter { month: Some(5), year: None });
    assert_eq!(month_only.to_query_string(), "page=1&mes=5");
    let year_only = PageQuery::new(1, PeriodFilter { month: None, year: Some(2023) });
    assert_eq!(year_only.to_query_string(), "page=1&year=2023");
}

#[test]
fn page_query_clamps_page_to_one() {
    assert_eq!(PageQuery::new(0, PeriodFilter::default()).page, 1);
}

#[test]
fn collection_segments_match_backend_routes() {
    let segments: Vec<_> = [
        Collection::Attendance,
        Collection::Vacations,
        Collection::LeaveRequests,
        Collection::Sanctions,
        Collection::Payroll,
        Collection::Advances,
        Collection::ExtraIncome,
    ]
    .iter()
    .map(|c| c.segment())
    .collect();
    assert_eq!(
        segments,
        ["asistencias", "vacaciones", "permisos", "sanciones", "liquidaciones", "anticipos", "ingresos-extras"]
    );
}

#[test]
fn mutation_endpoints_format_expected_paths() {
    assert_eq!(
        upload_endpoint("/rrhh", JustificationTarget::Sanction, 5),
        "/rrhh/sanciones/5/upload-justificativo"
    );
    assert_eq!(create_advance_endpoint("/rrhh"), "/rrhh/anticipos/create");
    assert_eq!(
        decision_endpoint("/rrhh", ApprovalTarget::ExtraIncome, 3, Decision::Reject),
        "/rrhh/ingresos-extras/3/reject"
    );
    assert_eq!(
        decision_endpoint("/rrhh", ApprovalTarget::OvertimeHour, 8, Decision::Approve),
        "/rrhh/horas-extra/8/approve"
    );
    assert_eq!(overtime_endpoint("/rrhh", 7, "2024-03"), "/rrhh/api/empleados/7/horas-extras?periodo=2024-03");
}

#[test]
fn justification_url_serves_from_uploads_without_doubling() {
    assert_eq!(justification_url("/rrhh", "permisos/p.pdf"), "/rrhh/uploads/permisos/p.pdf");
    assert_eq!(justification_url("/rrhh", "uploads/sanciones/s.pdf"), "/rrhh/uploads/sanciones/s.pdf");
    assert_eq!(justification_url("/rrhh", "/anticipos/a.pdf"), "/rrhh/uploads/anticipos/a.pdf");
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_read_reports_domain_error_even_on_ok_status() {
    let reply = HttpReply { status: 200, body: r#"{"error":"Empleado no encontrado"}"#.to_owned() };
    let result: Result<serde_json::Value, _> = decode_read(&reply);
    assert_eq!(result, Err(ApiError::Domain("Empleado no encontrado".to_owned())));
}

#[test]
fn decode_read_empty_body_is_parse_error() {
    let reply = HttpReply { status: 200, body: "  ".to_owned() };
    let result: Result<serde_json::Value, _> = decode_read(&reply);
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn decode_read_html_error_page_is_status_error() {
    let reply = HttpReply { status: 500, body: "<html>boom</html>".to_owned() };
    let result: Result<serde_json::Value, _> = decode_read(&reply);
    assert_eq!(result, Err(ApiError::Status(500)));
}

#[test]
fn decode_read_null_error_member_is_not_a_failure() {
    let reply = HttpReply { status: 200, body: r#"{"error":null,"message":"ok"}"#.to_owned() };
    let result = decode_mutation(&reply).unwrap();
    assert_eq!(result.message.as_deref(), Some("ok"));
}

#[test]
fn decode_read_shape_mismatch_is_parse_error() {
    let reply = HttpReply { status: 200, body: r#"{"items": 3}"#.to_owned() };
    let result: Result<Paged<AttendanceEntry>, _> = decode_read(&reply);
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn user_message_only_exposes_domain_text() {
    assert_eq!(ApiError::Domain("sin saldo".to_owned()).user_message("Error"), "sin saldo");
    assert_eq!(ApiError::Transport("offline".to_owned()).user_message("Error"), "Error");
}

// =============================================================
// Client
// =============================================================

#[test]
fn fetch_page_issues_single_get() {
    let transport = MockTransport::new();
    transport.reply_json(200, json!({ "items": [], "pages": 0, "current_page": 1 }));
    let client = api(&transport, None);

    let query = PageQuery::new(1, PeriodFilter::default());
    let page: Paged<AttendanceEntry> = block_on(client.fetch_page(7, Collection::Attendance, &query)).unwrap();

    assert!(page.items.is_empty());
    assert_eq!(transport.urls(), ["/rrhh/api/empleados/7/asistencias?page=1"]);
}

#[test]
fn decide_sends_csrf_header_and_no_body() {
    let transport = MockTransport::new();
    transport.reply_json(200, json!({ "message": "anticipo rechazado" }));
    let client = api(&transport, Some("tok-1"));

    block_on(client.decide(ApprovalTarget::Advance, 4, Decision::Reject)).unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].url, "/rrhh/anticipos/4/reject");
    assert_eq!(calls[0].headers, vec![("X-CSRFToken", "tok-1".to_owned())]);
    assert_eq!(calls[0].body, RecordedBody::Empty);
}

#[test]
fn mutation_without_token_sends_no_headers() {
    let client = api(&MockTransport::new(), None);
    assert!(client.mutation_headers().is_empty());
}

#[test]
fn create_advance_posts_json_body() {
    let transport = MockTransport::new();
    transport.reply_json(200, json!({ "message": "anticipo creado", "id": 12 }));
    let client = api(&transport, None);

    let body = NewAdvance { employee_id: 7, amount: 300_000.0, notes: Some("urgente".to_owned()) };
    let reply = block_on(client.create_advance(&body)).unwrap();

    assert_eq!(reply.id, Some(12));
    assert_eq!(
        transport.calls()[0].body,
        RecordedBody::Json(json!({ "empleado_id": 7, "monto": 300000.0, "observaciones": "urgente" }))
    );
}

#[test]
fn upload_justification_posts_file() {
    let transport = MockTransport::new();
    transport.reply_json(200, json!({ "message": "uploaded", "ruta": "permisos/p.pdf" }));
    let client = api(&transport, None);

    let upload = FileUpload { file_name: "p.pdf".to_owned(), content_type: None, bytes: vec![0] };
    let reply = block_on(client.upload_justification(JustificationTarget::LeaveRequest, 2, &upload)).unwrap();

    assert_eq!(reply.stored_path.as_deref(), Some("permisos/p.pdf"));
    assert_eq!(transport.calls()[0].url, "/rrhh/permisos/2/upload-justificativo");
    assert_eq!(transport.calls()[0].body, RecordedBody::File("p.pdf".to_owned()));
}

#[test]
fn domain_error_on_mutation_surfaces_message() {
    let transport = MockTransport::new();
    transport.reply_json(400, json!({ "error": "El anticipo no puede ser mayor al salario base" }));
    let client = api(&transport, None);

    let body = NewAdvance { employee_id: 7, amount: 9e9, notes: None };
    let err = block_on(client.create_advance(&body)).unwrap_err();

    assert_eq!(err, ApiError::Domain("El anticipo no puede ser mayor al salario base".to_owned()));
}
