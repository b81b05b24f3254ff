use super::*;

fn advance_row(id: i64, status: ActionStatus) -> RowView {
    let actions = if status.is_terminal() { Vec::new() } else { vec![Decision::Approve, Decision::Reject] };
    RowView {
        record_id: Some(id),
        cells: vec![CellView::Text("10/03/2024".into()), CellView::Status(status), CellView::Actions(actions)],
    }
}

fn table_of(rows: Vec<RowView>) -> PanelView {
    PanelView::Table(TableView { headers: vec!["Fecha", "Estado", "Acciones"], rows, pager: None })
}

// =============================================================
// PanelKind
// =============================================================

#[test]
fn only_attendance_filters_by_period() {
    let filtering: Vec<_> = PanelKind::ALL
        .into_iter()
        .filter(|k| k.supports_period_filter())
        .collect();
    assert_eq!(filtering, vec![PanelKind::Attendance]);
}

#[test]
fn only_advances_patch_optimistically() {
    assert!(PanelKind::Advances.patches_optimistically());
    assert!(!PanelKind::ExtraIncome.patches_optimistically());
}

#[test]
fn general_has_no_collection() {
    assert_eq!(PanelKind::General.collection(), None);
    assert_eq!(PanelKind::Payroll.collection(), Some(Collection::Payroll));
}

#[test]
fn panel_messages_are_distinct() {
    let errors: std::collections::HashSet<_> = PanelKind::ALL.iter().map(|k| k.error_message()).collect();
    assert_eq!(errors.len(), PanelKind::ALL.len());
    assert_eq!(PanelKind::Attendance.error_message(), "Error al cargar asistencias");
    assert_eq!(PanelKind::Attendance.empty_message(), "No hay registros de asistencia");
}

#[test]
fn decision_and_upload_targets() {
    assert_eq!(PanelKind::Advances.approval_target(), Some(ApprovalTarget::Advance));
    assert_eq!(PanelKind::ExtraIncome.approval_target(), Some(ApprovalTarget::ExtraIncome));
    assert_eq!(PanelKind::LeaveRequests.approval_target(), None);
    assert_eq!(PanelKind::Sanctions.justification_target(), Some(JustificationTarget::Sanction));
    assert_eq!(PanelKind::Payroll.justification_target(), None);
}

// =============================================================
// PagerView
// =============================================================

#[test]
fn single_page_has_no_pager() {
    assert_eq!(PagerView::build(1, 1), None);
    assert_eq!(PagerView::build(1, 0), None);
}

#[test]
fn middle_page_has_all_controls() {
    let pager = PagerView::build(2, 3).unwrap();
    assert_eq!(pager.label(), "2 / 3");
    assert_eq!(
        pager.leading_controls(),
        vec![PagerControl { label: "Primera", target: 1 }, PagerControl { label: "Anterior", target: 1 }]
    );
    assert_eq!(
        pager.trailing_controls(),
        vec![PagerControl { label: "Siguiente", target: 3 }, PagerControl { label: "Última", target: 3 }]
    );
}

#[test]
fn first_page_hides_backward_controls() {
    let pager = PagerView::build(1, 4).unwrap();
    assert!(pager.leading_controls().is_empty());
    assert_eq!(pager.trailing_controls().len(), 2);
}

#[test]
fn last_page_hides_forward_controls() {
    let pager = PagerView::build(4, 4).unwrap();
    assert_eq!(pager.leading_controls().len(), 2);
    assert!(pager.trailing_controls().is_empty());
}

#[test]
fn out_of_range_page_is_clamped() {
    let pager = PagerView::build(9, 3).unwrap();
    assert_eq!(pager.page, 3);
}

// =============================================================
// RowView
// =============================================================

#[test]
fn apply_status_replaces_badge_and_clears_actions() {
    let mut row = advance_row(7, ActionStatus::Pending);
    assert_eq!(row.actions().len(), 2);
    assert!(row.apply_status(ActionStatus::Approved));
    assert_eq!(row.status(), Some(ActionStatus::Approved));
    assert!(row.actions().is_empty());
}

#[test]
fn apply_status_without_status_cell_reports_false() {
    let mut row = RowView { record_id: Some(1), cells: vec![CellView::Text("x".into())] };
    assert!(!row.apply_status(ActionStatus::Rejected));
}

// =============================================================
// PanelState
// =============================================================

#[test]
fn begin_load_shows_loading_and_builds_query() {
    let mut state = PanelState::new(PanelKind::Attendance);
    let period = PeriodFilter { month: Some(3), year: Some(2024) };
    let ticket = state.begin_load(2, Some(period), true);
    assert!(state.view().is_loading());
    assert_eq!(ticket.query.to_query_string(), "page=2&mes=3&year=2024");
}

#[test]
fn begin_load_without_period_keeps_filters() {
    let mut state = PanelState::new(PanelKind::Attendance);
    state.begin_load(1, Some(PeriodFilter { month: Some(5), year: None }), true);
    let ticket = state.begin_load(3, None, true);
    assert_eq!(ticket.query.period.month, Some(5));
    assert_eq!(state.page(), 3);
}

#[test]
fn non_filtering_panel_ignores_period() {
    let mut state = PanelState::new(PanelKind::Payroll);
    let ticket = state.begin_load(1, Some(PeriodFilter { month: Some(1), year: Some(2023) }), true);
    assert!(ticket.query.period.is_empty());
}

#[test]
fn soft_load_keeps_previous_view() {
    let mut state = PanelState::new(PanelKind::Advances);
    let first = state.begin_load(1, None, true);
    state.complete_load(first.token, Ok(table_of(vec![advance_row(1, ActionStatus::Pending)])));
    state.begin_load(1, None, false);
    assert!(state.view().table().is_some());
}

#[test]
fn stale_completion_is_discarded() {
    let mut state = PanelState::new(PanelKind::Sanctions);
    let old = state.begin_load(1, None, true);
    let new = state.begin_load(2, None, true);
    assert!(!state.complete_load(old.token, Ok(PanelView::Empty("old".into()))));
    assert!(state.view().is_loading());
    assert!(state.complete_load(new.token, Ok(PanelView::Empty("new".into()))));
    assert_eq!(state.view(), &PanelView::Empty("new".into()));
}

#[test]
fn failure_renders_panel_error_message() {
    let mut state = PanelState::new(PanelKind::Vacations);
    let ticket = state.begin_load(1, None, true);
    state.complete_load(ticket.token, Err(ApiError::Status(500)));
    assert_eq!(state.view(), &PanelView::Error("Error al cargar vacaciones".into()));
}

#[test]
fn apply_decision_patches_pending_row_only() {
    let mut state = PanelState::new(PanelKind::Advances);
    let ticket = state.begin_load(1, None, true);
    state.complete_load(
        ticket.token,
        Ok(table_of(vec![advance_row(1, ActionStatus::Pending), advance_row(2, ActionStatus::Approved)])),
    );

    assert!(state.apply_decision(1, Decision::Reject, None));
    assert!(!state.apply_decision(2, Decision::Reject, None));
    assert!(!state.apply_decision(99, Decision::Approve, None));

    let rows = &state.view().table().unwrap().rows;
    assert_eq!(rows[0].status(), Some(ActionStatus::Rejected));
    assert_eq!(rows[1].status(), Some(ActionStatus::Approved));
}
