//! # legajo
//!
//! Leptos + WASM client for the digital employee record of the HR
//! back-end. Renders one tab per record collection, drives pagination,
//! uploads and approve/reject actions, and reports outcomes in modals.
//!
//! Everything except the browser transport and the DOM mount is plain Rust
//! and is tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: read the page configuration and mount the app into
/// the mount element.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already set: {e}");
    }

    let (config, context) = match config::read_from_document() {
        Ok(found) => found,
        Err(e) => {
            leptos::logging::error!("legajo not mounted: {e}");
            return;
        }
    };
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config::MOUNT_ELEMENT_ID))
    else {
        return;
    };
    leptos::logging::log!("legajo mounted for employee {}", context.employee_id);
    leptos::mount::mount_to(root.unchecked_into(), move || view! { <App config context/> }).forget();
}
