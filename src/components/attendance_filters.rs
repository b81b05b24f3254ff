//! Month/year selects narrowing the attendance list.

use leptos::prelude::*;

use crate::net::api::PeriodFilter;
use crate::util::format::{FIRST_FILTER_YEAR, MONTH_NAMES, year_options};

/// Current `(year, month)` from the browser clock.
#[cfg(feature = "csr")]
pub(crate) fn today() -> (i32, u8) {
    let now = js_sys::Date::new_0();
    let year = i32::try_from(now.get_full_year()).unwrap_or(FIRST_FILTER_YEAR);
    let month = u8::try_from(now.get_month() + 1).unwrap_or(1);
    (year, month)
}

#[cfg(not(feature = "csr"))]
pub(crate) fn today() -> (i32, u8) {
    (FIRST_FILTER_YEAR, 1)
}

/// Parse a select value; the empty "all" option means no filter.
fn parse_choice<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

#[component]
pub fn AttendanceFilters(on_apply: Callback<PeriodFilter>) -> impl IntoView {
    let month = RwSignal::new(None::<u8>);
    let year = RwSignal::new(None::<i32>);

    let month_options = MONTH_NAMES
        .iter()
        .zip(1u8..)
        .map(|(name, value)| view! { <option value=value.to_string()>{*name}</option> })
        .collect_view();
    let year_choices = year_options(today().0)
        .into_iter()
        .map(|value| view! { <option value=value.to_string()>{value}</option> })
        .collect_view();

    let apply = move |_| on_apply.run(PeriodFilter { month: month.get_untracked(), year: year.get_untracked() });
    let clear = move |_| {
        month.set(None);
        year.set(None);
        on_apply.run(PeriodFilter::default());
    };

    view! {
        <div class="row g-2 align-items-end mb-3">
            <div class="col-auto">
                <label class="form-label small mb-1">"Mes"</label>
                <select
                    class="form-select form-select-sm"
                    prop:value=move || month.get().map(|m| m.to_string()).unwrap_or_default()
                    on:change=move |ev| month.set(parse_choice(&event_target_value(&ev)))
                >
                    <option value="">"Todos"</option>
                    {month_options}
                </select>
            </div>
            <div class="col-auto">
                <label class="form-label small mb-1">"Año"</label>
                <select
                    class="form-select form-select-sm"
                    prop:value=move || year.get().map(|y| y.to_string()).unwrap_or_default()
                    on:change=move |ev| year.set(parse_choice(&event_target_value(&ev)))
                >
                    <option value="">"Todos"</option>
                    {year_choices}
                </select>
            </div>
            <div class="col-auto">
                <button class="btn btn-sm btn-primary me-1" on:click=apply>"Filtrar"</button>
                <button class="btn btn-sm btn-outline-secondary" on:click=clear>"Limpiar"</button>
            </div>
        </div>
    }
}
