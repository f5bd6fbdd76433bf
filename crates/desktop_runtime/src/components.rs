//! Desktop shell UI composition.
//!
//! Components here render from the runtime context signals and translate DOM
//! events into reducer actions; all window/icon semantics live in
//! [`crate::reducer`]. Global pointer tracking for drag and resize sessions is
//! wired on the desktop root so `End*` runs on every exit path, including
//! `pointercancel`.

mod icon;
mod prompt_studio;
mod window;

use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconLayer, DesktopRoot, DesktopWindowLayer, MenuBar, MenuItem,
};

use crate::model::PointerPosition;
use crate::reducer::DesktopAction;
use crate::runtime_context::{use_desktop_runtime, DesktopRuntimeContext};

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

pub(crate) fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
    if interaction.icon_drag.is_some() {
        runtime.dispatch_action(DesktopAction::EndIconDrag);
    }
}

#[component]
/// Renders the full desktop shell UI: menu bar, icon layer, and window stack.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
        if interaction.icon_drag.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateIconDrag { pointer });
        }
    });
    let on_pointer_end =
        Callback::new(move |_: web_sys::PointerEvent| end_active_pointer_interaction(runtime));
    // Pointer-down that bubbles up to the root landed on empty desktop or
    // window chrome; either way the icon selection is stale.
    let on_pointer_down = Callback::new(move |_: web_sys::PointerEvent| {
        let any_selected = runtime
            .state
            .get_untracked()
            .icons
            .iter()
            .any(|icon| icon.selected);
        if any_selected {
            runtime.dispatch_action(DesktopAction::ClearIconSelection);
        }
    });

    view! {
        <DesktopRoot
            id="desktop-shell-root".to_string()
            compact=Signal::derive(move || state.get().compact)
            on_pointermove=on_pointer_move
            on_pointerup=on_pointer_end
            on_pointercancel=on_pointer_end
            on_pointerdown=on_pointer_down
        >
            <ShellMenuBar />
            <DesktopBackdrop>
                <DesktopIconLayer>
                    <For each=move || state.get().icons key=|icon| icon.id.0 let:icon>
                        <icon::DesktopIconView icon_id=icon.id />
                    </For>
                    <icon::IconSnapPreviewView />
                </DesktopIconLayer>

                <DesktopWindowLayer>
                    <For each=move || state.get().windows key=|win| win.id.0 let:win>
                        <window::DesktopWindow window_id=win.id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
        </DesktopRoot>
    }
}

#[component]
/// Fixed menu bar: shell name, focused window title, and restore entries for
/// minimized windows.
fn ShellMenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let focused_title = move || {
        state
            .get()
            .windows
            .iter()
            .find(|w| w.is_focused)
            .map(|w| w.title.clone())
            .unwrap_or_default()
    };
    let minimized = move || {
        state
            .get()
            .windows
            .iter()
            .filter(|w| w.state.is_minimized())
            .map(|w| (w.id, w.title.clone()))
            .collect::<Vec<_>>()
    };

    view! {
        <MenuBar>
            <MenuItem on_click=Callback::new(move |_| {
                let about = state
                    .get_untracked()
                    .icons
                    .iter()
                    .find(|icon| icon.app_id == crate::model::AppId::About)
                    .map(|icon| icon.id);
                if let Some(icon_id) = about {
                    runtime.dispatch_action(DesktopAction::ActivateIcon { icon_id });
                }
            })>
                <strong>"PromptDesk"</strong>
            </MenuItem>
            <span class="ui-menu-focused-title">{focused_title}</span>
            <For each=minimized key=|(id, _)| id.0 let:entry>
                <MenuItem on_click=Callback::new(move |_| {
                    runtime
                        .dispatch_action(DesktopAction::ToggleMinimize {
                            window_id: entry.0,
                        });
                })>{entry.1.clone()}</MenuItem>
            </For>
        </MenuBar>
    }
}

#[component]
/// Static usage notes shown by the Read Me window.
pub(crate) fn ReadMeView() -> impl IntoView {
    view! {
        <div class="app-readme">
            <h2>"Welcome to PromptDesk"</h2>
            <p>
                "Double-click a desktop icon to open its app. Drag icons to "
                "rearrange them; they snap to the grid when released."
            </p>
            <p>
                "Windows drag by their title bar and resize from any edge or "
                "corner. Double-click a title bar to maximize. Minimized "
                "windows come back from the menu bar."
            </p>
            <p>
                "Prompt Studio turns a rough request into a structured prompt, "
                "either with the built-in template or the remote optimizer."
            </p>
        </div>
    }
}

#[component]
/// About box content.
pub(crate) fn AboutView() -> impl IntoView {
    view! {
        <div class="app-about">
            <h2>"PromptDesk"</h2>
            <p>"A retro desktop for prompt engineering."</p>
            <p class="app-about-version">{format!("Version {}", env!("CARGO_PKG_VERSION"))}</p>
        </div>
    }
}
