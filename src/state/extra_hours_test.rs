use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::config::{ClientConfig, Role};
use crate::net::mock::MockTransport;
use crate::state::notifier::ModalKind;
use crate::state::status::ActionStatus;

fn review(mock: &MockTransport) -> (OvertimeReview<MockTransport>, Notifier) {
    let api = Rc::new(HrApi::new(mock.clone(), ClientConfig::default()));
    let notifier = Notifier::new();
    let context = EmployeeContext { employee_id: 42, role: Role::Privileged };
    (OvertimeReview::new(context, api, notifier.clone()), notifier)
}

fn sheet(status: &str) -> serde_json::Value {
    json!({
        "items": [{"id": 3, "fecha": "2024-03-12", "horas": 2.5, "monto": 75000, "estado": status}],
        "empleado": "Ana Benítez",
        "periodo": "2024-03",
    })
}

#[test]
fn open_fetches_period_and_titles_sheet() {
    let mock = MockTransport::new();
    mock.reply_json(200, sheet("PENDIENTE"));
    let (review, _) = review(&mock);

    block_on(review.open(2024, 3));

    assert_eq!(mock.urls(), vec!["/rrhh/api/empleados/42/horas-extras?periodo=2024-03"]);
    let view = review.view();
    assert_eq!(view.title, "Horas Extra - Ana Benítez (2024-03)");
    let row = &view.body.table().unwrap().rows[0];
    assert_eq!(row.cells[1], crate::state::panel::CellView::Text("2.5".into()));
    assert_eq!(row.status(), Some(ActionStatus::Pending));
    assert_eq!(row.actions().len(), 2);
}

#[test]
fn empty_sheet_shows_message() {
    let mock = MockTransport::new();
    mock.reply_json(200, json!({"items": [], "empleado": "Ana", "periodo": "2024-04"}));
    let (review, _) = review(&mock);

    block_on(review.open(2024, 4));

    assert_eq!(review.view().body, PanelView::Empty(EMPTY_MESSAGE.into()));
}

#[test]
fn failed_sheet_shows_error() {
    let mock = MockTransport::new();
    mock.reply_raw(500, "");
    let (review, _) = review(&mock);

    block_on(review.open(2024, 4));

    assert_eq!(review.view().body, PanelView::Error(ERROR_MESSAGE.into()));
}

#[test]
fn decision_posts_and_refetches_same_period() {
    let mock = MockTransport::new();
    mock.reply_json(200, sheet("PENDIENTE"))
        .reply_json(200, json!({"message": "ok"}))
        .reply_json(200, sheet("APROBADO"));
    let (review, notifier) = review(&mock);

    let accepted = block_on(async {
        review.open(2024, 3).await;
        review.decide(3, Decision::Approve).await
    });

    assert!(accepted);
    let urls = mock.urls();
    assert_eq!(urls[1], "/rrhh/horas-extra/3/approve");
    assert_eq!(urls[2], urls[0]);
    assert_eq!(notifier.current().unwrap().title, "Hora extra aprobada");
    let view = review.view();
    let row = &view.body.table().unwrap().rows[0];
    assert_eq!(row.status(), Some(ActionStatus::Approved));
    assert!(row.actions().is_empty());
}

#[test]
fn failed_decision_reports_error() {
    let mock = MockTransport::new();
    mock.fail("offline");
    let (review, notifier) = review(&mock);

    assert!(!block_on(review.decide(3, Decision::Reject)));
    let modal = notifier.current().unwrap();
    assert_eq!(modal.kind, ModalKind::Error);
    assert_eq!(modal.message, "No se pudo rechazar la hora extra");
}

#[test]
fn reload_before_open_does_nothing() {
    let mock = MockTransport::new();
    let (review, _) = review(&mock);
    block_on(review.reload());
    assert!(mock.calls().is_empty());
}
