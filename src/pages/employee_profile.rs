//! Employee record page: the tab strip and one pane per panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted into the server-rendered employee page. Each pane owns its own
//! controller; selecting a tab only flips `active`, and the pane reacts by
//! loading page 1.

use leptos::prelude::*;

use crate::components::panel_tab::PanelTab;
use crate::state::panel::PanelKind;

fn tab_class(selected: bool) -> &'static str {
    if selected { "nav-link active" } else { "nav-link" }
}

#[component]
pub fn EmployeeProfilePage() -> impl IntoView {
    let active = RwSignal::new(PanelKind::General);

    let tabs = PanelKind::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <li class="nav-item" role="presentation">
                    <button
                        type="button"
                        role="tab"
                        class=move || tab_class(active.get() == kind)
                        aria-controls=kind.dom_id()
                        on:click=move |_| active.set(kind)
                    >
                        {kind.tab_label()}
                    </button>
                </li>
            }
        })
        .collect_view();
    let panes = PanelKind::ALL
        .into_iter()
        .map(|kind| view! { <PanelTab kind active/> })
        .collect_view();

    view! {
        <div class="legajo">
            <ul class="nav nav-tabs mb-3" role="tablist">{tabs}</ul>
            <div class="tab-content">{panes}</div>
        </div>
    }
}
