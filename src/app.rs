//! Root application component and shared context handles.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::modal_host::ModalHost;
use crate::config::{ClientConfig, EmployeeContext};
use crate::net::api::HrApi;
use crate::net::browser::BrowserTransport;
use crate::pages::employee_profile::EmployeeProfilePage;
use crate::state::notifier::{ModalView, Notifier};

/// API client shared by every panel.
pub type Api = Rc<HrApi<BrowserTransport>>;

/// Context handle to the [`Api`]; local because the client is not `Send`.
pub type ApiHandle = StoredValue<Api, LocalStorage>;

/// Context handle to the page's single [`Notifier`].
pub type NotifierHandle = StoredValue<Notifier, LocalStorage>;

/// Root application component.
///
/// Provides the API client, the notifier, the visible modal and the
/// employee context to every child.
#[component]
pub fn App(config: ClientConfig, context: EmployeeContext) -> impl IntoView {
    provide_meta_context();

    let stylesheet = format!("{}/static/css/legajo.css", config.api_prefix);

    let modal = RwSignal::new(None::<ModalView>);
    let notifier = Notifier::new().with_sink(move |view| modal.set(view.cloned()));
    let api: Api = Rc::new(HrApi::new(BrowserTransport, config));

    provide_context::<ApiHandle>(StoredValue::new_local(api));
    provide_context::<NotifierHandle>(StoredValue::new_local(notifier));
    provide_context(modal);
    provide_context(context);

    view! {
        <Stylesheet id="legajo" href=stylesheet/>
        <Title text="Legajo digital"/>

        <EmployeeProfilePage/>
        <ModalHost/>
    }
}
