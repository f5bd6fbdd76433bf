//! Host-side runtime helpers: effect execution and browser environment sync.
//!
//! Keeps reducer semantics pure by moving timers, DOM focus, and viewport
//! queries behind a typed boundary that entry layers inject and tests mock.

use std::rc::Rc;
use std::time::Duration;

use leptos::{ev, on_cleanup, set_timeout, window_event_listener, Callable, Callback};
use platform_host::{HostServices, OptimizeService, ViewportRect, ViewportService};

use crate::model::{IconId, WindowId, WindowRect, CLICK_DISAMBIGUATION_MS};
use crate::reducer::{DesktopAction, RuntimeEffect};
use crate::runtime_context::DesktopRuntimeContext;

/// DOM id carried by a window's primary text input, targeted by
/// [`RuntimeEffect::FocusWindowInput`].
pub fn window_primary_input_dom_id(window_id: WindowId) -> String {
    format!("window-{}-primary-input", window_id.0)
}

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    optimize: Rc<dyn OptimizeService>,
    viewport: Rc<dyn ViewportService>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            optimize: Rc::new(platform_host_web::optimize_service()),
            viewport: Rc::new(platform_host_web::viewport_service()),
        }
    }
}

impl DesktopHostContext {
    /// Wraps an injected service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            optimize: services.optimize,
            viewport: services.viewport,
        }
    }

    /// Returns the configured prompt-optimize service.
    pub fn optimize_service(&self) -> Rc<dyn OptimizeService> {
        self.optimize.clone()
    }

    /// Returns the current viewport rect in desktop coordinates.
    pub fn desktop_viewport_rect(&self) -> WindowRect {
        viewport_window_rect(self.viewport.viewport_rect())
    }

    /// Whether the viewport currently selects the compact fixed layout.
    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }

    /// Dispatches the current viewport class immediately and re-dispatches it
    /// on every browser resize.
    pub fn install_viewport_sync(&self, dispatch: Callback<DesktopAction>) {
        let host = self.clone();
        let sync = move || {
            dispatch.call(DesktopAction::SetViewportClass {
                viewport: host.desktop_viewport_rect(),
                compact: host.is_compact(),
            });
        };
        sync();
        let listener = window_event_listener(ev::resize, move |_| sync());
        on_cleanup(move || listener.remove());
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleIconClickTimeout {
                icon_id,
                generation,
            } => schedule_icon_click_timeout(runtime, icon_id, generation),
            RuntimeEffect::FocusWindowInput(window_id) => focus_window_input(window_id),
        }
    }
}

/// Converts a host-service viewport rect into desktop geometry.
fn viewport_window_rect(rect: ViewportRect) -> WindowRect {
    WindowRect {
        x: rect.x,
        y: rect.y,
        w: rect.w,
        h: rect.h,
    }
}

fn schedule_icon_click_timeout(runtime: DesktopRuntimeContext, icon_id: IconId, generation: u64) {
    set_timeout(
        move || {
            runtime.dispatch_action(DesktopAction::IconClickTimeout {
                icon_id,
                generation,
            });
        },
        Duration::from_millis(CLICK_DISAMBIGUATION_MS),
    );
}

/// Moves browser focus into the window's primary input, if the app rendered
/// one. Deferred a tick so the element exists after an open.
fn focus_window_input(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(&window_primary_input_dom_id(window_id))
        else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}
