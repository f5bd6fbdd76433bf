//! Reusable Leptos primitives with a stable `data-ui-*` DOM contract.
//!
//! The desktop shell composes these instead of emitting ad hoc markup, so the
//! CSS layers can target `data-ui-kind` tokens without caring which component
//! rendered them.

use leptos::*;
use web_sys::{MouseEvent, PointerEvent};

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Root desktop shell primitive hosting the global pointer surface.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] compact: MaybeSignal<bool>,
    #[prop(optional)] on_pointermove: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_pointercancel: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-compact=move || bool_token(compact.get())
            on:pointermove=move |ev| {
                if let Some(cb) = on_pointermove.as_ref() {
                    cb.call(ev);
                }
            }
            on:pointerup=move |ev| {
                if let Some(cb) = on_pointerup.as_ref() {
                    cb.call(ev);
                }
            }
            on:pointercancel=move |ev| {
                if let Some(cb) = on_pointercancel.as_ref() {
                    cb.call(ev);
                }
            }
            on:pointerdown=move |ev| {
                if let Some(cb) = on_pointerdown.as_ref() {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop backdrop hosting the icon and window layers.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Layer hosting freely positioned desktop icons.
pub fn DesktopIconLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher button with free positioning.
pub fn DesktopIconButton(
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] dragging: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon-button"
            style=move || style.get()
            title=title
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-selected=move || bool_token(selected.get())
            data-ui-dragging=move || bool_token(dragging.get())
            on:pointerdown=move |ev| {
                if let Some(cb) = on_pointerdown.as_ref() {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Ghost cell showing where a dragged icon would land on release.
pub fn IconSnapPreview(#[prop(into)] style: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div
            class="ui-icon-snap-preview"
            style=move || style.get()
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon-snap-preview"
        />
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Fixed menu bar pinned to the top of the desktop.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-menu-bar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menu-bar"
        >
            {children()}
        </header>
    }
}

#[component]
/// Clickable menu bar entry.
pub fn MenuItem(
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-menu-item"
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            on:click=move |ev| {
                if let Some(cb) = on_click.as_ref() {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| {
                if let Some(cb) = on_pointerdown.as_ref() {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window title bar hosting the drag surface and chrome controls.
pub fn WindowTitleBar(
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(cb) = on_pointerdown.as_ref() {
                    cb.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(cb) = on_dblclick.as_ref() {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Window title text slot.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
/// Window chrome control cluster.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Single window chrome control (minimize/maximize/close).
pub fn WindowControlButton(
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            on:pointerdown=move |ev| {
                if let Some(cb) = on_pointerdown.as_ref() {
                    cb.call(ev);
                }
            }
            on:mousedown=move |ev| {
                if let Some(cb) = on_mousedown.as_ref() {
                    cb.call(ev);
                }
            }
            on:click=move |ev| {
                if let Some(cb) = on_click.as_ref() {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Window content slot.
pub fn WindowBody(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-body" data-ui-primitive="true" data-ui-kind="window-body">
            {children()}
        </div>
    }
}

#[component]
/// Directional window resize hit-region.
pub fn ResizeHandle(
    /// Stable direction token (for example `n`, `sw`) used by the CSS layer
    /// to place the region and pick the cursor.
    direction: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-direction=direction
            on:pointerdown=move |ev| {
                if let Some(cb) = on_pointerdown.as_ref() {
                    cb.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] primary: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-button"
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=if primary { "primary" } else { "standard" }
            on:click=move |ev| {
                if let Some(cb) = on_click.as_ref() {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Labeled form field wrapper.
pub fn FieldGroup(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <label class="ui-field-group" data-ui-primitive="true" data-ui-kind="field-group">
            <span class="ui-field-label">{label}</span>
            {children()}
        </label>
    }
}

#[component]
/// Multi-line text input bound to a signal.
pub fn TextArea(
    #[prop(optional, into)] id: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <textarea
            id=id
            class="ui-textarea"
            rows=rows
            placeholder=placeholder
            readonly=readonly
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="textarea"
            on:input=move |ev| {
                if let Some(cb) = on_input.as_ref() {
                    cb.call(event_target_value(&ev));
                }
            }
        >
            {value.get_untracked()}
        </textarea>
    }
}

#[component]
/// Single-line text input bound to a signal.
pub fn TextField(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="ui-text-field"
            placeholder=placeholder
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=move |ev| {
                if let Some(cb) = on_input.as_ref() {
                    cb.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Select control; options are rendered by the caller.
pub fn SelectField(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <select
            class="ui-select-field"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="select-field"
            on:change=move |ev| {
                if let Some(cb) = on_change.as_ref() {
                    cb.call(event_target_value(&ev));
                }
            }
        >
            {children()}
        </select>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Tone of an inline status message.
pub enum MessageTone {
    /// Neutral/informational.
    #[default]
    Info,
    /// User-visible failure.
    Error,
}

impl MessageTone {
    const fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

#[component]
/// Inline status message rendered under a form action.
pub fn InlineMessage(
    #[prop(default = MessageTone::Info)] tone: MessageTone,
    #[prop(into)] text: Signal<String>,
) -> impl IntoView {
    view! {
        <p
            class="ui-inline-message"
            role=if matches!(tone, MessageTone::Error) { "alert" } else { "status" }
            data-ui-primitive="true"
            data-ui-kind="inline-message"
            data-ui-tone=tone.token()
        >
            {move || text.get()}
        </p>
    }
}
