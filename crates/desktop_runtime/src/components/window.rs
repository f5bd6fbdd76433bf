//! Managed window component: frame, chrome, resize handles, and app body.

use leptos::*;
use system_ui::{
    Icon, IconName, IconSize, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

use super::{
    pointer_from_pointer_event, prompt_studio::PromptStudioView, stop_mouse_event,
    try_set_pointer_capture, AboutView, ReadMeView,
};
use crate::apps::app_icon_name;
use crate::model::{AppId, ResizeDirection, WindowId, WindowRect, WindowState};
use crate::reducer::{window_display_rect, DesktopAction};
use crate::runtime_context::use_desktop_runtime;

fn window_style(rect: WindowRect, z_index: u64) -> String {
    let mut style = format!("left:{}px;top:{}px;z-index:{};", rect.x, rect.y, z_index);
    // Zero dimensions are intrinsic: omit them so content sizes the frame.
    if rect.w > 0 {
        style.push_str(&format!("width:{}px;", rect.w));
    }
    if rect.h > 0 {
        style.push_str(&format!("height:{}px;", rect.h));
    }
    style
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = Signal::derive(move || {
        state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        let should_focus = window
            .get_untracked()
            .map(|w| !w.is_focused || w.state.is_minimized())
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });
    let minimize = move |_| runtime.dispatch_action(DesktopAction::ToggleMinimize { window_id });
    let toggle_maximize =
        move |_| runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    let close = move |_| runtime.dispatch_action(DesktopAction::CloseWindow { window_id });

    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    });

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                let display = window_display_rect(&state.get_untracked(), window_id)
                    .unwrap_or(win.rect);
                let style = window_style(display, win.z_index);
                let maximized = win.state.is_maximized();
                let compact = state.get_untracked().compact;
                let show_handles =
                    win.flags.resizable && win.state == WindowState::Normal && !compact;
                let maximize_icon = if maximized {
                    IconName::WindowRestore
                } else {
                    IconName::WindowMaximize
                };
                let maximize_label = if maximized {
                    "Restore window"
                } else {
                    "Maximize window"
                };

                view! {
                    <WindowFrame
                        style=style
                        aria_label=win.title.clone()
                        focused=win.is_focused
                        minimized=win.state.is_minimized()
                        maximized=maximized
                        on_pointerdown=focus
                    >
                        <WindowTitleBar
                            on_pointerdown=begin_move
                            on_dblclick=titlebar_double_click
                        >
                            <WindowTitle>
                                <span aria-hidden="true">
                                    <Icon icon=app_icon_name(win.app_id) size=IconSize::Sm />
                                </span>
                                <span>{win.title.clone()}</span>
                            </WindowTitle>
                            <WindowControls>
                                <WindowControlButton
                                    aria_label="Minimize window".to_string()
                                    disabled=!win.flags.minimizable
                                    on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    })
                                    on_mousedown=Callback::new(|ev| stop_mouse_event(&ev))
                                    on_click=Callback::new(move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize(ev);
                                    })
                                >
                                    <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                                </WindowControlButton>
                                <WindowControlButton
                                    aria_label=maximize_label.to_string()
                                    disabled=!win.flags.maximizable
                                    on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    })
                                    on_mousedown=Callback::new(|ev| stop_mouse_event(&ev))
                                    on_click=Callback::new(move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_maximize(ev);
                                    })
                                >
                                    <Icon icon=maximize_icon size=IconSize::Xs />
                                </WindowControlButton>
                                <WindowControlButton
                                    aria_label="Close window".to_string()
                                    on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    })
                                    on_mousedown=Callback::new(|ev| stop_mouse_event(&ev))
                                    on_click=Callback::new(move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    })
                                >
                                    <Icon icon=IconName::Dismiss size=IconSize::Xs />
                                </WindowControlButton>
                            </WindowControls>
                        </WindowTitleBar>
                        <WindowBody>
                            {match win.app_id {
                                AppId::PromptStudio => {
                                    view! { <PromptStudioView window_id=window_id /> }.into_view()
                                }
                                AppId::ReadMe => view! { <ReadMeView /> }.into_view(),
                                AppId::About => view! { <AboutView /> }.into_view(),
                            }}
                        </WindowBody>
                        <Show when=move || show_handles fallback=|| ()>
                            {ResizeDirection::ALL
                                .into_iter()
                                .map(|direction| {
                                    let begin_resize = Callback::new(
                                        move |ev: web_sys::PointerEvent| {
                                            if ev.button() != 0 {
                                                return;
                                            }
                                            try_set_pointer_capture(&ev);
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                            runtime
                                                .dispatch_action(DesktopAction::BeginResize {
                                                    window_id,
                                                    direction,
                                                    pointer: pointer_from_pointer_event(&ev),
                                                });
                                        },
                                    );
                                    view! {
                                        <ResizeHandle
                                            direction=direction.css_token()
                                            on_pointerdown=begin_resize
                                        />
                                    }
                                })
                                .collect_view()}
                        </Show>
                    </WindowFrame>
                }
            }}
        </Show>
    }
}
