//! General tab: KPI cards, job details and today's attendance.

use leptos::prelude::*;

use crate::state::panel::{SummaryItem, SummaryView};

fn detail_rows(items: Vec<SummaryItem>) -> impl IntoView {
    items
        .into_iter()
        .map(|item| {
            view! {
                <tr>
                    <th class="text-muted fw-normal w-50">{item.label}</th>
                    <td>{item.value}</td>
                </tr>
            }
        })
        .collect_view()
}

#[component]
pub fn GeneralSummary(summary: SummaryView) -> impl IntoView {
    let kpis = summary
        .kpis
        .into_iter()
        .map(|kpi| {
            view! {
                <div class="col-6 col-md-3">
                    <div class="card text-center h-100">
                        <div class="card-body">
                            <div class="fs-3 fw-bold">{kpi.value}</div>
                            <div class="small text-muted">{kpi.label}</div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="row g-3 mb-3">{kpis}</div>
        <div class="row g-3">
            <div class="col-md-7">
                <div class="card h-100">
                    <div class="card-header d-flex justify-content-between align-items-center">
                        <span>"Datos laborales"</span>
                        <span class=summary.employment_tone.css_class()>{summary.employment_status}</span>
                    </div>
                    <table class="table table-sm mb-0">
                        <tbody>{detail_rows(summary.details)}</tbody>
                    </table>
                </div>
            </div>
            <div class="col-md-5">
                <div class="card h-100">
                    <div class="card-header">"Asistencia de hoy"</div>
                    <table class="table table-sm mb-0">
                        <tbody>{detail_rows(summary.today)}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
