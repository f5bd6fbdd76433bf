//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::apps;
use crate::grid;
use crate::model::{
    DesktopState, DragSession, IconDragSession, IconId, InteractionState, OpenWindowRequest,
    PendingIconClick, PointerPosition, ResizeDirection, ResizeSession, WindowId, WindowRecord,
    WindowRect, WindowState,
};
use crate::window_manager::{
    display_rect, drag_rect, focus_window, recenter_rect, refresh_focus, resize_rect,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a new window using the supplied request.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id; the record is discarded outright.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Toggle a window between minimized and restored.
    ToggleMinimize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Toggle a window between maximized and restored.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from an edge or corner.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        direction: ResizeDirection,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Begin dragging a desktop icon.
    BeginIconDrag {
        /// Icon being dragged.
        icon_id: IconId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress icon drag; recomputes the snap preview.
    UpdateIconDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active icon drag, committing a move or registering a click
    /// candidate.
    EndIconDrag,
    /// Resolve a pending single click after the disambiguation delay.
    IconClickTimeout {
        /// Icon the candidate was registered for.
        icon_id: IconId,
        /// Generation stamp captured when the candidate was registered.
        generation: u64,
    },
    /// Activate an icon (double-click): focus the app's window or open one.
    ActivateIcon {
        /// Icon to activate.
        icon_id: IconId,
    },
    /// Clear icon selection (pointer-down on empty desktop).
    ClearIconSelection,
    /// Record a viewport change and, on layout-class flips, re-center open
    /// draggable windows.
    SetViewportClass {
        /// New viewport rectangle.
        viewport: WindowRect,
        /// Whether the new viewport is compact.
        compact: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to
/// execute.
pub enum RuntimeEffect {
    /// Arm the single-click disambiguation timer for an icon.
    ScheduleIconClickTimeout {
        /// Icon the candidate belongs to.
        icon_id: IconId,
        /// Generation stamp to echo back in [`DesktopAction::IconClickTimeout`].
        generation: u64,
    },
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions referencing entities that are not present.
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// The target icon id was not found in the current state.
    #[error("icon not found")]
    IconNotFound,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting
/// side effects.
///
/// This function is the authoritative transition engine for window and icon
/// management. Geometry requests that would violate minimum sizes or the
/// menu-bar boundary are rejected silently per-axis; operations on entities
/// lacking the relevant capability flag are guarded no-ops.
///
/// # Errors
///
/// Returns [`ReducerError`] when an action references a window or icon that
/// is not present.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let window_id = next_window_id(state);
            let cascade = ((window_id.0 as i32) - 1) % 6 * 24;
            let mut rect = req
                .rect
                .unwrap_or_else(|| WindowRect::default().offset(cascade, cascade));
            if req.flags.resizable && rect.w > 0 && rect.h > 0 {
                rect = rect.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            }
            let record = WindowRecord {
                id: window_id,
                app_id: req.app_id,
                title: req
                    .title
                    .unwrap_or_else(|| req.app_id.title().to_string()),
                rect,
                restore_rect: None,
                z_index: 0,
                is_focused: false,
                state: WindowState::Normal,
                flags: req.flags,
            };
            state.windows.push(record);
            focus_window(state, window_id);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound);
            }
            refresh_focus(state);
        }
        DesktopAction::FocusWindow { window_id } => {
            if !focus_window(state, window_id) {
                return Err(ReducerError::WindowNotFound);
            }
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::ToggleMinimize { window_id } => {
            let window = find_window_mut(state, window_id)?;
            if !window.flags.minimizable {
                return Ok(effects);
            }
            match window.state {
                WindowState::Minimized => {
                    focus_window(state, window_id);
                    effects.push(RuntimeEffect::FocusWindowInput(window_id));
                }
                // Leaving maximized for minimized only changes the lifecycle
                // state; the pre-maximize snapshot is not consumed.
                WindowState::Normal | WindowState::Maximized => {
                    window.state = WindowState::Minimized;
                    window.is_focused = false;
                    refresh_focus(state);
                }
            }
        }
        DesktopAction::ToggleMaximize { window_id } => {
            let window = find_window_mut(state, window_id)?;
            if !window.flags.maximizable {
                return Ok(effects);
            }
            match window.state {
                WindowState::Maximized => {
                    if let Some(snapshot) = window.restore_rect.take() {
                        window.rect = snapshot;
                    }
                    window.state = WindowState::Normal;
                    focus_window(state, window_id);
                }
                WindowState::Normal | WindowState::Minimized => {
                    // Snapshot is overwritten on every entry, so a window
                    // re-maximized without a restore in between forgets the
                    // earlier snapshot.
                    window.restore_rect = Some(window.rect);
                    window.state = WindowState::Maximized;
                    focus_window(state, window_id);
                }
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let compact = state.compact;
            let window = find_window_mut(state, window_id)?;
            if compact
                || interaction.has_active_session()
                || !window.flags.draggable
                || window.state.is_maximized()
            {
                return Ok(effects);
            }
            let rect_start = window.rect;
            focus_window(state, window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let viewport = state.viewport;
                let window = find_window_mut(state, session.window_id)?;
                if !window.state.is_maximized() {
                    window.rect = drag_rect(session.rect_start, dx, dy, viewport);
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            direction,
            pointer,
        } => {
            let compact = state.compact;
            let window = find_window_mut(state, window_id)?;
            if compact
                || interaction.has_active_session()
                || !window.flags.resizable
                || window.state.is_maximized()
            {
                return Ok(effects);
            }
            let rect_start = window.rect;
            focus_window(state, window_id);
            interaction.resizing = Some(ResizeSession {
                window_id,
                direction,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.window_id)?;
                if window.flags.resizable && !window.state.is_maximized() {
                    window.rect = resize_rect(session.rect_start, session.direction, dx, dy);
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::BeginIconDrag { icon_id, pointer } => {
            let origin = state
                .icon(icon_id)
                .map(|icon| icon.position)
                .ok_or(ReducerError::IconNotFound)?;
            if state.compact || interaction.has_active_session() {
                return Ok(effects);
            }
            interaction.icon_drag = Some(IconDragSession {
                icon_id,
                pointer_start: pointer,
                origin,
                live: origin,
                moved: false,
            });
        }
        DesktopAction::UpdateIconDrag { pointer } => {
            if let Some(session) = interaction.icon_drag.as_mut() {
                if pointer != session.pointer_start {
                    session.moved = true;
                }
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.live = PointerPosition {
                    x: session.origin.x + dx,
                    y: session.origin.y + dy,
                };
                interaction.icon_snap_preview =
                    Some(grid::committed_icon_position(session.live, state.viewport));
            }
        }
        DesktopAction::EndIconDrag => {
            interaction.icon_snap_preview = None;
            let Some(session) = interaction.icon_drag.take() else {
                return Ok(effects);
            };
            if session.moved {
                let committed = grid::committed_icon_position(session.live, state.viewport);
                if let Some(icon) = state.icons.iter_mut().find(|i| i.id == session.icon_id) {
                    icon.position = committed;
                }
                return Ok(effects);
            }

            // Zero-movement release: click candidate.
            let second_click = interaction
                .pending_click
                .map(|pending| pending.icon_id == session.icon_id)
                .unwrap_or(false);
            if second_click {
                interaction.pending_click = None;
                let nested = reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::ActivateIcon {
                        icon_id: session.icon_id,
                    },
                )?;
                effects.extend(nested);
            } else {
                let generation = state.next_click_generation;
                state.next_click_generation += 1;
                interaction.pending_click = Some(PendingIconClick {
                    icon_id: session.icon_id,
                    generation,
                });
                effects.push(RuntimeEffect::ScheduleIconClickTimeout {
                    icon_id: session.icon_id,
                    generation,
                });
            }
        }
        DesktopAction::IconClickTimeout {
            icon_id,
            generation,
        } => {
            let matches = interaction.pending_click
                == Some(PendingIconClick {
                    icon_id,
                    generation,
                });
            if matches {
                interaction.pending_click = None;
                for icon in &mut state.icons {
                    icon.selected = icon.id == icon_id;
                }
            }
        }
        DesktopAction::ActivateIcon { icon_id } => {
            let app_id = state
                .icon(icon_id)
                .map(|icon| icon.app_id)
                .ok_or(ReducerError::IconNotFound)?;
            for icon in &mut state.icons {
                icon.selected = icon.id == icon_id;
            }
            if let Some(window_id) = state.window_for_app(app_id) {
                let nested =
                    reduce_desktop(state, interaction, DesktopAction::FocusWindow { window_id })?;
                effects.extend(nested);
            } else {
                let nested = reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::OpenWindow(apps::default_open_request(app_id)),
                )?;
                effects.extend(nested);
            }
        }
        DesktopAction::ClearIconSelection => {
            for icon in &mut state.icons {
                icon.selected = false;
            }
        }
        DesktopAction::SetViewportClass { viewport, compact } => {
            let class_changed = state.compact != compact;
            state.viewport = viewport;
            state.compact = compact;
            if class_changed {
                // Stored pixel positions are meaningless across a layout
                // flip; active sessions are dropped and draggable windows
                // re-centered.
                interaction.dragging = None;
                interaction.resizing = None;
                interaction.icon_drag = None;
                interaction.icon_snap_preview = None;
                for window in &mut state.windows {
                    if !window.flags.draggable {
                        continue;
                    }
                    if window.state.is_maximized() {
                        // The stored rect is not shown while maximized; the
                        // snapshot is what restore will reveal, so that is
                        // what gets re-centered.
                        if let Some(snapshot) = window.restore_rect {
                            window.restore_rect = Some(recenter_rect(snapshot, viewport));
                        }
                    } else {
                        window.rect = recenter_rect(window.rect, viewport);
                    }
                }
            }
        }
    }

    Ok(effects)
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

/// Convenience wrapper exposing the display rect for components.
pub fn window_display_rect(state: &DesktopState, window_id: WindowId) -> Option<WindowRect> {
    state
        .window(window_id)
        .map(|window| display_rect(window, state.viewport))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grid::{ICON_CELL_HEIGHT, ICON_CELL_WIDTH, ICON_GRID_OFFSET_X, ICON_GRID_OFFSET_Y};
    use crate::model::{AppId, MENU_BAR_HEIGHT};
    use crate::window_manager::DRAG_KEEP_VISIBLE_PX;

    fn fresh() -> (DesktopState, InteractionState) {
        let mut state = DesktopState::default();
        state.icons = apps::default_desktop_icons();
        (state, InteractionState::default())
    }

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        app_id: AppId,
    ) -> WindowId {
        let _ = reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(app_id)),
        )
        .expect("open window");
        state.windows.last().expect("window").id
    }

    fn window<'a>(state: &'a DesktopState, id: WindowId) -> &'a WindowRecord {
        state.window(id).expect("window exists")
    }

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn open_window_focuses_it_and_assigns_monotonic_z() {
        let (mut state, mut interaction) = fresh();

        let first = open(&mut state, &mut interaction, AppId::ReadMe);
        let second = open(&mut state, &mut interaction, AppId::PromptStudio);

        assert_eq!(state.focused_window_id(), Some(second));
        assert_eq!(window(&state, first).z_index, 1);
        assert_eq!(window(&state, second).z_index, 2);
    }

    #[test]
    fn z_indices_are_never_reused_after_close() {
        let (mut state, mut interaction) = fresh();

        let a = open(&mut state, &mut interaction, AppId::ReadMe);
        let b = open(&mut state, &mut interaction, AppId::PromptStudio);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: a },
        )
        .expect("focus a");
        assert_eq!(window(&state, a).z_index, 3);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: a },
        )
        .expect("close a");
        // Survivor keeps its z; nothing is renumbered.
        assert_eq!(window(&state, b).z_index, 2);

        let c = open(&mut state, &mut interaction, AppId::About);
        assert_eq!(window(&state, c).z_index, 4);
    }

    #[test]
    fn focusing_the_front_window_does_not_consume_a_z_value() {
        let (mut state, mut interaction) = fresh();

        let win = open(&mut state, &mut interaction, AppId::PromptStudio);
        let z_before = window(&state, win).z_index;
        let next_z_before = state.next_z;

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: win },
        )
        .expect("focus focused window");

        assert_eq!(window(&state, win).z_index, z_before);
        assert_eq!(state.next_z, next_z_before);
        assert!(effects.contains(&RuntimeEffect::FocusWindowInput(win)));
    }

    #[test]
    fn maximize_then_restore_round_trips_the_rect() {
        let (mut state, mut interaction) = fresh();

        let mut req = OpenWindowRequest::new(AppId::PromptStudio);
        req.rect = Some(WindowRect {
            x: 50,
            y: 60,
            w: 400,
            h: 300,
        });
        reduce_desktop(&mut state, &mut interaction, DesktopAction::OpenWindow(req))
            .expect("open");
        let win = state.windows.last().expect("window").id;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("maximize");
        assert!(window(&state, win).state.is_maximized());
        // Stored rect is untouched while maximized; display is derived.
        assert_eq!(
            window(&state, win).rect,
            WindowRect {
                x: 50,
                y: 60,
                w: 400,
                h: 300
            }
        );
        let display = window_display_rect(&state, win).expect("display rect");
        assert_eq!((display.x, display.y), (0, MENU_BAR_HEIGHT));
        assert_eq!(display.w, state.viewport.w);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("restore");
        let restored = window(&state, win);
        assert_eq!(
            restored.rect,
            WindowRect {
                x: 50,
                y: 60,
                w: 400,
                h: 300
            }
        );
        assert_eq!(restored.state, WindowState::Normal);
        assert_eq!(restored.restore_rect, None);
    }

    #[test]
    fn snapshot_is_overwritten_on_each_maximize() {
        let (mut state, mut interaction) = fresh();
        let win = open(&mut state, &mut interaction, AppId::PromptStudio);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("maximize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("restore");

        // Move the window, then maximize again: the snapshot must hold the
        // new rect, not the original one.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(10, 40),
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(90, 120),
            },
        )
        .expect("update move");
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end move");
        let moved_rect = window(&state, win).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("re-maximize");
        assert_eq!(window(&state, win).restore_rect, Some(moved_rect));
    }

    #[test]
    fn minimize_from_maximized_keeps_the_snapshot() {
        let (mut state, mut interaction) = fresh();
        let win = open(&mut state, &mut interaction, AppId::PromptStudio);
        let original = window(&state, win).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("maximize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMinimize { window_id: win },
        )
        .expect("minimize");

        let record = window(&state, win);
        assert_eq!(record.state, WindowState::Minimized);
        assert_eq!(record.restore_rect, Some(original));
        assert!(!record.is_focused);
    }

    #[test]
    fn minimize_moves_focus_to_the_next_topmost_window() {
        let (mut state, mut interaction) = fresh();
        let back = open(&mut state, &mut interaction, AppId::ReadMe);
        let front = open(&mut state, &mut interaction, AppId::PromptStudio);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMinimize { window_id: front },
        )
        .expect("minimize front");

        assert_eq!(state.focused_window_id(), Some(back));
    }

    #[test]
    fn minimize_is_a_noop_without_the_capability_flag() {
        let (mut state, mut interaction) = fresh();
        let mut req = apps::default_open_request(AppId::About);
        req.flags.minimizable = false;
        reduce_desktop(&mut state, &mut interaction, DesktopAction::OpenWindow(req))
            .expect("open");
        let win = state.windows.last().expect("window").id;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMinimize { window_id: win },
        )
        .expect("guarded no-op");
        assert_eq!(window(&state, win).state, WindowState::Normal);
    }

    #[test]
    fn drag_updates_the_rect_and_clamps_to_the_menu_bar() {
        let (mut state, mut interaction) = fresh();
        let win = open(&mut state, &mut interaction, AppId::PromptStudio);
        let start = window(&state, win).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(200, 200),
            },
        )
        .expect("begin");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(225, 240),
            },
        )
        .expect("update");
        assert_eq!(window(&state, win).rect.x, start.x + 25);
        assert_eq!(window(&state, win).rect.y, start.y + 40);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(200, -2000),
            },
        )
        .expect("update above viewport");
        assert_eq!(window(&state, win).rect.y, MENU_BAR_HEIGHT);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: pointer(9000, 200),
            },
        )
        .expect("update far right");
        assert_eq!(
            window(&state, win).rect.x,
            state.viewport.w - DRAG_KEEP_VISIBLE_PX
        );

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove).expect("end");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn drag_is_blocked_while_maximized_or_compact() {
        let (mut state, mut interaction) = fresh();
        let win = open(&mut state, &mut interaction, AppId::PromptStudio);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("maximize");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(5, 5),
            },
        )
        .expect("guarded");
        assert_eq!(interaction.dragging, None);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("restore");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewportClass {
                viewport: WindowRect {
                    x: 0,
                    y: 0,
                    w: 600,
                    h: 800,
                },
                compact: true,
            },
        )
        .expect("compact");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(5, 5),
            },
        )
        .expect("guarded");
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn resize_is_blocked_in_the_compact_layout() {
        let (mut state, mut interaction) = fresh();
        let win = open(&mut state, &mut interaction, AppId::PromptStudio);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewportClass {
                viewport: WindowRect {
                    x: 0,
                    y: 0,
                    w: 600,
                    h: 800,
                },
                compact: true,
            },
        )
        .expect("compact");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                direction: ResizeDirection::EAST,
                pointer: pointer(5, 5),
            },
        )
        .expect("guarded");
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn resize_east_grows_and_west_freezes_below_minimum() {
        let (mut state, mut interaction) = fresh();
        let mut req = OpenWindowRequest::new(AppId::PromptStudio);
        req.rect = Some(WindowRect {
            x: 100,
            y: 100,
            w: 400,
            h: 300,
        });
        reduce_desktop(&mut state, &mut interaction, DesktopAction::OpenWindow(req))
            .expect("open");
        let win = state.windows.last().expect("window").id;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                direction: ResizeDirection::EAST,
                pointer: pointer(500, 200),
            },
        )
        .expect("begin east");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: pointer(650, 200),
            },
        )
        .expect("update east");
        assert_eq!(window(&state, win).rect.w, 550);
        assert_eq!(window(&state, win).rect.x, 100);
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndResize).expect("end");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                direction: ResizeDirection::WEST,
                pointer: pointer(100, 200),
            },
        )
        .expect("begin west");
        // 550 - 240 = 310 < 320: the axis freezes for the frame.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: pointer(340, 200),
            },
        )
        .expect("update west");
        assert_eq!(window(&state, win).rect.w, 550);
        assert_eq!(window(&state, win).rect.x, 100);
    }

    #[test]
    fn north_resize_never_crosses_the_menu_bar() {
        let (mut state, mut interaction) = fresh();
        let mut req = OpenWindowRequest::new(AppId::PromptStudio);
        req.rect = Some(WindowRect {
            x: 100,
            y: MENU_BAR_HEIGHT + 8,
            w: 400,
            h: 300,
        });
        reduce_desktop(&mut state, &mut interaction, DesktopAction::OpenWindow(req))
            .expect("open");
        let win = state.windows.last().expect("window").id;
        let before = window(&state, win).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                direction: ResizeDirection::NORTH,
                pointer: pointer(300, before.y),
            },
        )
        .expect("begin north");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: pointer(300, before.y - 20),
            },
        )
        .expect("update north");
        assert_eq!(window(&state, win).rect, before);
    }

    #[test]
    fn resize_on_a_fixed_window_never_opens_a_session() {
        let (mut state, mut interaction) = fresh();
        let req = apps::default_open_request(AppId::About);
        reduce_desktop(&mut state, &mut interaction, DesktopAction::OpenWindow(req))
            .expect("open");
        let win = state.windows.last().expect("window").id;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                direction: ResizeDirection::SOUTH_EAST,
                pointer: pointer(10, 10),
            },
        )
        .expect("guarded");
        assert_eq!(interaction.resizing, None);
    }

    #[test]
    fn icon_drag_commits_a_clamped_grid_aligned_position() {
        let (mut state, mut interaction) = fresh();
        let icon_id = state.icons[0].id;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag {
                icon_id,
                pointer: pointer(30, 50),
            },
        )
        .expect("begin");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateIconDrag {
                pointer: pointer(431, 277),
            },
        )
        .expect("update");
        // Snap preview is live while dragging and display-only.
        assert!(interaction.icon_snap_preview.is_some());

        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndIconDrag).expect("end");
        let committed = state.icons[0].position;
        assert_eq!((committed.x - ICON_GRID_OFFSET_X) % ICON_CELL_WIDTH, 0);
        assert_eq!((committed.y - ICON_GRID_OFFSET_Y) % ICON_CELL_HEIGHT, 0);
        assert!(committed.x >= 0 && committed.x <= state.viewport.w - ICON_CELL_WIDTH);
        assert_eq!(interaction.icon_snap_preview, None);
        assert_eq!(interaction.icon_drag, None);
        // A moved drag is never a click.
        assert_eq!(interaction.pending_click, None);
    }

    #[test]
    fn lone_click_selects_after_the_timeout() {
        let (mut state, mut interaction) = fresh();
        let icon_id = state.icons[0].id;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag {
                icon_id,
                pointer: pointer(30, 50),
            },
        )
        .expect("begin");
        let effects =
            reduce_desktop(&mut state, &mut interaction, DesktopAction::EndIconDrag).expect("end");
        let generation = match effects.as_slice() {
            [RuntimeEffect::ScheduleIconClickTimeout {
                icon_id: id,
                generation,
            }] => {
                assert_eq!(*id, icon_id);
                *generation
            }
            other => panic!("expected a scheduled timeout, got {other:?}"),
        };

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::IconClickTimeout {
                icon_id,
                generation,
            },
        )
        .expect("timeout");
        assert!(state.icons[0].selected);
        assert!(state.windows.is_empty(), "single click must not open");
        assert_eq!(interaction.pending_click, None);
    }

    #[test]
    fn double_click_opens_exactly_once_and_suppresses_the_single_click() {
        let (mut state, mut interaction) = fresh();
        let icon_id = state.icons[0].id;
        let app_id = state.icons[0].app_id;

        let mut stale_generation = None;
        for _ in 0..2 {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::BeginIconDrag {
                    icon_id,
                    pointer: pointer(30, 50),
                },
            )
            .expect("begin");
            let effects = reduce_desktop(&mut state, &mut interaction, DesktopAction::EndIconDrag)
                .expect("end");
            for effect in effects {
                if let RuntimeEffect::ScheduleIconClickTimeout { generation, .. } = effect {
                    stale_generation = Some(generation);
                }
            }
        }

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].app_id, app_id);
        assert_eq!(interaction.pending_click, None);

        // The stale timeout from the first click must be ignored.
        let windows_before = state.windows.len();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::IconClickTimeout {
                icon_id,
                generation: stale_generation.expect("first click scheduled"),
            },
        )
        .expect("stale timeout");
        assert_eq!(state.windows.len(), windows_before);
    }

    #[test]
    fn activating_an_icon_with_an_open_window_focuses_it() {
        let (mut state, mut interaction) = fresh();
        let icon_id = state.icons[0].id;
        let app_id = state.icons[0].app_id;
        let existing = open(&mut state, &mut interaction, app_id);
        let other = open(&mut state, &mut interaction, AppId::ReadMe);
        assert_eq!(state.focused_window_id(), Some(other));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon { icon_id },
        )
        .expect("activate");
        assert_eq!(state.focused_window_id(), Some(existing));
        assert_eq!(state.windows.len(), 2, "no duplicate window opened");
    }

    #[test]
    fn icon_drag_is_blocked_while_a_window_session_is_active() {
        let (mut state, mut interaction) = fresh();
        let win = open(&mut state, &mut interaction, AppId::PromptStudio);
        let icon_id = state.icons[0].id;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: pointer(10, 40),
            },
        )
        .expect("begin move");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag {
                icon_id,
                pointer: pointer(30, 50),
            },
        )
        .expect("guarded");
        assert_eq!(interaction.icon_drag, None);
    }

    #[test]
    fn icon_drag_is_blocked_in_the_compact_layout() {
        let (mut state, mut interaction) = fresh();
        let icon_id = state.icons[0].id;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewportClass {
                viewport: WindowRect {
                    x: 0,
                    y: 0,
                    w: 600,
                    h: 800,
                },
                compact: true,
            },
        )
        .expect("compact");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginIconDrag {
                icon_id,
                pointer: pointer(30, 50),
            },
        )
        .expect("guarded");
        assert_eq!(interaction.icon_drag, None);
        assert_eq!(interaction.icon_snap_preview, None);
    }

    #[test]
    fn layout_class_flip_recenters_draggable_windows() {
        let (mut state, mut interaction) = fresh();
        let win = open(&mut state, &mut interaction, AppId::PromptStudio);

        let narrow = WindowRect {
            x: 0,
            y: 0,
            w: 480,
            h: 800,
        };
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewportClass {
                viewport: narrow,
                compact: true,
            },
        )
        .expect("enter compact");
        let rect = window(&state, win).rect;
        assert_eq!(rect.x, ((narrow.w - rect.w) / 2).max(0));
        assert!(rect.y >= MENU_BAR_HEIGHT);

        // Same class again: no re-centering churn.
        let moved = WindowRect { x: 3, ..rect };
        state
            .windows
            .iter_mut()
            .find(|w| w.id == win)
            .expect("window")
            .rect = moved;
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewportClass {
                viewport: narrow,
                compact: true,
            },
        )
        .expect("still compact");
        assert_eq!(window(&state, win).rect, moved);
    }

    #[test]
    fn layout_class_flip_recenters_the_snapshot_of_a_maximized_window() {
        let (mut state, mut interaction) = fresh();
        let win = open(&mut state, &mut interaction, AppId::PromptStudio);
        let original = window(&state, win).rect;

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("maximize");

        let narrow = WindowRect {
            x: 0,
            y: 0,
            w: 480,
            h: 800,
        };
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewportClass {
                viewport: narrow,
                compact: true,
            },
        )
        .expect("enter compact");
        // Still maximized: the stored rect stays put, only the snapshot moves.
        assert_eq!(window(&state, win).rect, original);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: win },
        )
        .expect("restore");
        let restored = window(&state, win).rect;
        assert_eq!(restored.w, original.w);
        assert_eq!(restored.h, original.h);
        assert_eq!(restored.x, ((narrow.w - restored.w) / 2).max(0));
        assert_eq!(
            restored.y,
            MENU_BAR_HEIGHT + ((narrow.h - MENU_BAR_HEIGHT - restored.h) / 2).max(0)
        );
    }

    #[test]
    fn actions_on_missing_entities_are_errors() {
        let (mut state, mut interaction) = fresh();
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::CloseWindow {
                    window_id: WindowId(99)
                }
            ),
            Err(ReducerError::WindowNotFound)
        );
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::ActivateIcon {
                    icon_id: IconId(99)
                }
            ),
            Err(ReducerError::IconNotFound)
        );
    }
}
