//! Table rendering for one page of records.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::state::controller::PickedFile;
use crate::state::panel::{CellView, TableView};
use crate::state::status::Decision;
use crate::util::upload::ALLOWED_EXTENSIONS;

/// Callbacks a row can fire.
#[derive(Clone, Copy)]
pub struct RowActions {
    pub on_decide: Callback<(i64, Decision)>,
    pub on_upload: Option<Callback<(i64, PickedFile)>>,
}

#[component]
pub fn RecordTable(table: TableView, actions: RowActions) -> impl IntoView {
    let headers = table
        .headers
        .iter()
        .map(|h| view! { <th>{*h}</th> })
        .collect_view();
    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            let record_id = row.record_id;
            let cells = row
                .cells
                .into_iter()
                .map(|cell| cell_view(cell, record_id, actions))
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="table-responsive">
            <table class="table table-sm table-hover align-middle">
                <thead class="table-light">
                    <tr>{headers}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

fn decision_class(decision: Decision) -> &'static str {
    match decision {
        Decision::Approve => "btn btn-sm btn-success me-1",
        Decision::Reject => "btn btn-sm btn-danger",
    }
}

fn cell_view(cell: CellView, record_id: Option<i64>, actions: RowActions) -> AnyView {
    match cell {
        CellView::Text(text) => view! { <td>{text}</td> }.into_any(),
        CellView::Strong(text) => view! { <td><strong>{text}</strong></td> }.into_any(),
        CellView::Badge { label, tone } => view! { <td><span class=tone.css_class()>{label}</span></td> }.into_any(),
        CellView::Status(status) => {
            view! { <td><span class=status.tone().css_class()>{status.label()}</span></td> }.into_any()
        }
        CellView::Justification { link, upload } => {
            let link = link.map(|href| {
                view! {
                    <a href=href target="_blank" rel="noopener" class="btn btn-sm btn-outline-primary me-1">
                        "Ver"
                    </a>
                }
            });
            let picker = upload
                .and(record_id)
                .zip(actions.on_upload)
                .map(|(id, on_upload)| view! { <UploadPicker record_id=id on_upload/> });
            let missing = (link.is_none() && picker.is_none()).then_some("-");
            view! { <td>{link}{picker}{missing}</td> }.into_any()
        }
        CellView::Actions(decisions) => {
            let buttons = record_id.map(|id| {
                decisions
                    .into_iter()
                    .map(|decision| {
                        view! {
                            <button
                                class=decision_class(decision)
                                on:click=move |_| actions.on_decide.run((id, decision))
                            >
                                {decision.label()}
                            </button>
                        }
                    })
                    .collect_view()
            });
            view! { <td class="text-nowrap">{buttons}</td> }.into_any()
        }
    }
}

/// `accept` attribute matching the server's extension list.
fn accept_list() -> String {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// File input that reads the picked file and hands it upward.
#[component]
fn UploadPicker(record_id: i64, on_upload: Callback<(i64, PickedFile)>) -> impl IntoView {
    view! {
        <label class="btn btn-sm btn-outline-secondary mb-0">
            "Subir"
            <input
                type="file"
                class="d-none"
                accept=accept_list()
                on:change=move |ev| read_picked(&ev, record_id, on_upload)
            />
        </label>
    }
}

#[cfg(feature = "csr")]
fn read_picked(ev: &leptos::ev::Event, record_id: i64, on_upload: Callback<(i64, PickedFile)>) {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    let file = input.files().and_then(|files| files.get(0));
    // Reset so picking the same file again still fires `change`.
    input.set_value("");
    let Some(file) = file else {
        return;
    };
    super::spawn(async move {
        on_upload.run((record_id, crate::net::browser::read_file(file).await));
    });
}

#[cfg(not(feature = "csr"))]
fn read_picked(_ev: &leptos::ev::Event, _record_id: i64, _on_upload: Callback<(i64, PickedFile)>) {}
