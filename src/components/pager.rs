//! First/previous/current/next/last pagination strip.

use leptos::prelude::*;

use crate::state::panel::{PagerControl, PagerView};

/// Renders nothing when `pager` is `None` (a single page).
#[component]
pub fn Pager(pager: Option<PagerView>, on_page: Callback<u32>) -> impl IntoView {
    pager.map(|pager| {
        let button = move |control: PagerControl| {
            view! {
                <li class="page-item">
                    <button class="page-link" on:click=move |_| on_page.run(control.target)>
                        {control.label}
                    </button>
                </li>
            }
        };
        view! {
            <nav aria-label="Paginación">
                <ul class="pagination pagination-sm justify-content-center">
                    {pager.leading_controls().into_iter().map(button).collect_view()}
                    <li class="page-item active">
                        <span class="page-link">{pager.label()}</span>
                    </li>
                    {pager.trailing_controls().into_iter().map(button).collect_view()}
                </ul>
            </nav>
        }
    })
}
