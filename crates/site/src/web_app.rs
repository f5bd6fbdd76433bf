use std::rc::Rc;

use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host::HostServices;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="PromptDesk" />
        <Meta name="description" content="A retro desktop shell for prompt engineering." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host_services = HostServices::new(
        Rc::new(platform_host_web::optimize_service()),
        Rc::new(platform_host_web::viewport_service()),
    );

    view! {
        <DesktopProvider host_services=host_services>
            <DesktopShell />
        </DesktopProvider>
    }
}
