//! Draws whatever a panel currently shows: loading, error, empty, table or
//! summary.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::general_panel::GeneralSummary;
use crate::components::pager::Pager;
use crate::components::record_table::{RecordTable, RowActions};
use crate::state::panel::PanelView;

#[component]
pub fn PanelBody(
    #[prop(into)] panel: Signal<PanelView>,
    actions: RowActions,
    #[prop(optional)] on_page: Option<Callback<u32>>,
) -> impl IntoView {
    move || match panel.get() {
        PanelView::Idle => ().into_any(),
        PanelView::Loading => view! {
            <div class="text-center py-4">
                <div class="spinner-border text-primary" role="status"></div>
                <p class="text-muted mt-2 mb-0">"Cargando..."</p>
            </div>
        }
        .into_any(),
        PanelView::Error(message) => view! { <div class="alert alert-danger">{message}</div> }.into_any(),
        PanelView::Empty(message) => view! { <div class="alert alert-info">{message}</div> }.into_any(),
        PanelView::Table(table) => {
            let pager = table.pager;
            let pager = on_page.map(|on_page| view! { <Pager pager on_page/> });
            view! {
                <RecordTable table actions/>
                {pager}
            }
            .into_any()
        }
        PanelView::Summary(summary) => view! { <GeneralSummary summary/> }.into_any(),
    }
}
