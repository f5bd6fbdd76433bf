//! Desktop icon components: launcher buttons and the drag snap preview.

use leptos::*;
use system_ui::{DesktopIconButton, Icon, IconSize, IconSnapPreview};

use super::{pointer_from_pointer_event, try_set_pointer_capture};
use crate::apps::app_icon_name;
use crate::model::{IconId, PointerPosition};
use crate::reducer::DesktopAction;
use crate::runtime_context::use_desktop_runtime;

fn position_style(position: PointerPosition) -> String {
    format!("left:{}px;top:{}px;", position.x, position.y)
}

#[component]
pub(super) fn DesktopIconView(icon_id: IconId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;

    let icon = Signal::derive(move || {
        state
            .get()
            .icons
            .into_iter()
            .find(|icon| icon.id == icon_id)
    });
    // While a drag session is live, the icon follows the free-form pointer
    // position; the stored grid-aligned position applies at rest.
    let dragging = Signal::derive(move || {
        interaction
            .get()
            .icon_drag
            .as_ref()
            .is_some_and(|session| session.icon_id == icon_id)
    });
    let display_position = Signal::derive(move || {
        let session_live = interaction
            .get()
            .icon_drag
            .as_ref()
            .filter(|session| session.icon_id == icon_id)
            .map(|session| session.live);
        session_live.or_else(|| icon.get().map(|icon| icon.position))
    });

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginIconDrag {
            icon_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! {
        <Show when=move || icon.get().is_some() fallback=|| ()>
            {move || {
                let record = icon.get().expect("icon exists while shown");
                let style = Signal::derive(move || {
                    display_position.get().map(position_style).unwrap_or_default()
                });
                view! {
                    <DesktopIconButton
                        style=style
                        title=record.label.clone()
                        selected=Signal::derive(move || {
                            icon.get().map(|icon| icon.selected).unwrap_or(false)
                        })
                        dragging=dragging
                        on_pointerdown=on_pointerdown
                    >
                        <span>
                            <Icon icon=app_icon_name(record.app_id) size=IconSize::Lg />
                        </span>
                        <span>{record.label.clone()}</span>
                    </DesktopIconButton>
                }
            }}
        </Show>
    }
}

#[component]
/// Ghost cell marking where the dragged icon would land if released now.
pub(super) fn IconSnapPreviewView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let interaction = runtime.interaction;

    let preview = Signal::derive(move || interaction.get().icon_snap_preview);

    view! {
        <Show when=move || preview.get().is_some() fallback=|| ()>
            <IconSnapPreview style=Signal::derive(move || {
                preview.get().map(position_style).unwrap_or_default()
            }) />
        </Show>
    }
}
