//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components draw panel views and modals and forward user actions to the
//! controllers in `state`. Shared handles (API client, notifier, employee
//! context) come from Leptos context providers set up in `app`.

pub mod advance_form;
pub mod attendance_filters;
pub mod extra_hours_dialog;
pub mod general_panel;
pub mod modal_host;
pub mod panel_body;
pub mod panel_tab;
pub mod pager;
pub mod record_table;

use std::future::Future;

/// Run `task` on the page's event loop. Outside the browser there is no
/// loop to run it on and the task is dropped.
pub(crate) fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}
