//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{
    AxisPull, DesktopState, ResizeDirection, WindowId, WindowRect, WindowRecord, WindowState,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MENU_BAR_HEIGHT,
};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 320;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Margin kept on-screen while dragging so the title bar stays grabbable.
pub const DRAG_KEEP_VISIBLE_PX: i32 = 100;

/// Focuses and raises `window_id`, assigning the next monotonic z-index.
///
/// Z values are never reused or renumbered; closing a window leaves the
/// survivors' z-indices untouched, so the counter only moves forward.
/// Focusing the window that is already focused and frontmost is a no-op and
/// does not consume a z value.
///
/// Returns `false` when the window is not present.
pub fn focus_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let top_z = state.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };

    if window.is_focused && window.z_index == top_z && !window.state.is_minimized() {
        return true;
    }

    let raised = state.next_z;
    state.next_z += 1;
    for window in &mut state.windows {
        window.is_focused = window.id == window_id;
        if window.is_focused {
            window.z_index = raised;
            if window.state.is_minimized() {
                window.state = WindowState::Normal;
            }
        }
    }
    true
}

/// Moves focus to the topmost non-minimized window after a minimize or close.
pub fn refresh_focus(state: &mut DesktopState) {
    for window in &mut state.windows {
        window.is_focused = false;
    }
    if let Some(top) = state
        .windows
        .iter_mut()
        .filter(|w| !w.state.is_minimized())
        .max_by_key(|w| w.z_index)
    {
        top.is_focused = true;
    }
}

/// Computes the dragged rect for a window, clamped so the title bar stays
/// reachable: `x` within `[0, vw - margin]`, `y` within
/// `[MENU_BAR_HEIGHT, vh - margin]`.
pub fn drag_rect(start: WindowRect, dx: i32, dy: i32, viewport: WindowRect) -> WindowRect {
    let moved = start.offset(dx, dy);
    let max_x = (viewport.w - DRAG_KEEP_VISIBLE_PX).max(0);
    let max_y = (viewport.h - DRAG_KEEP_VISIBLE_PX).max(MENU_BAR_HEIGHT);
    WindowRect {
        x: moved.x.clamp(0, max_x),
        y: moved.y.clamp(MENU_BAR_HEIGHT, max_y),
        ..start
    }
}

/// Applies resize deltas for a direction, composing the two independent
/// per-axis rules.
pub fn resize_rect(start: WindowRect, direction: ResizeDirection, dx: i32, dy: i32) -> WindowRect {
    let (x, w) = resize_horizontal(start, direction.x, dx);
    let (y, h) = resize_vertical(start, direction.y, dy);
    WindowRect { x, y, w, h }
}

/// Horizontal resize rule.
///
/// A positive pull (east edge) grows the width with the delta, clamped up to
/// the minimum, origin fixed. A negative pull (west edge) shifts the origin
/// to keep the east edge fixed, but applies only while the candidate width
/// stays at or above the minimum; below it the edge stops responding for the
/// frame rather than clamping.
fn resize_horizontal(start: WindowRect, pull: AxisPull, dx: i32) -> (i32, i32) {
    match pull {
        AxisPull::Keep => (start.x, start.w),
        AxisPull::Pos => (start.x, (start.w + dx).max(MIN_WINDOW_WIDTH)),
        AxisPull::Neg => {
            let candidate = start.w - dx;
            if candidate >= MIN_WINDOW_WIDTH {
                (start.x + dx, candidate)
            } else {
                (start.x, start.w)
            }
        }
    }
}

/// Vertical resize rule; the north edge additionally refuses any frame that
/// would push the window top above the menu bar.
fn resize_vertical(start: WindowRect, pull: AxisPull, dy: i32) -> (i32, i32) {
    match pull {
        AxisPull::Keep => (start.y, start.h),
        AxisPull::Pos => (start.y, (start.h + dy).max(MIN_WINDOW_HEIGHT)),
        AxisPull::Neg => {
            let candidate = start.h - dy;
            let top = start.y + dy;
            if candidate >= MIN_WINDOW_HEIGHT && top >= MENU_BAR_HEIGHT {
                (top, candidate)
            } else {
                (start.y, start.h)
            }
        }
    }
}

/// Viewport-filling rect shown while a window is maximized, anchored below
/// the menu bar. The window's stored rect is not touched while maximized.
pub fn maximized_rect(viewport: WindowRect) -> WindowRect {
    WindowRect {
        x: 0,
        y: MENU_BAR_HEIGHT,
        w: viewport.w,
        h: (viewport.h - MENU_BAR_HEIGHT).max(0),
    }
}

/// Rect a window is displayed at: derived while maximized, stored otherwise.
pub fn display_rect(window: &WindowRecord, viewport: WindowRect) -> WindowRect {
    if window.state.is_maximized() {
        maximized_rect(viewport)
    } else {
        window.rect
    }
}

/// Re-centers a window in the viewport, used when the layout class flips and
/// stored pixel positions stop being meaningful. Intrinsic (zero) dimensions
/// are estimated with the defaults for centering only.
pub fn recenter_rect(rect: WindowRect, viewport: WindowRect) -> WindowRect {
    let w = if rect.w > 0 {
        rect.w
    } else {
        DEFAULT_WINDOW_WIDTH
    };
    let h = if rect.h > 0 {
        rect.h
    } else {
        DEFAULT_WINDOW_HEIGHT
    };
    WindowRect {
        x: ((viewport.w - w) / 2).max(0),
        y: (MENU_BAR_HEIGHT + (viewport.h - MENU_BAR_HEIGHT - h) / 2).max(MENU_BAR_HEIGHT),
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    #[test]
    fn east_resize_grows_with_the_delta_and_keeps_the_origin() {
        let start = rect(100, 100, 400, 300);
        let resized = resize_rect(start, ResizeDirection::EAST, 150, 0);
        assert_eq!(resized, rect(100, 100, 550, 300));
    }

    #[test]
    fn west_resize_below_minimum_freezes_the_axis() {
        // 400 - 120 = 280 < 320: both width and x keep their pre-drag values.
        let start = rect(100, 100, 400, 300);
        let resized = resize_rect(start, ResizeDirection::WEST, 120, 0);
        assert_eq!(resized, rect(100, 100, 400, 300));
    }

    #[test]
    fn west_resize_above_minimum_keeps_the_east_edge_fixed() {
        let start = rect(100, 100, 400, 300);
        let resized = resize_rect(start, ResizeDirection::WEST, 60, 0);
        assert_eq!(resized, rect(160, 100, 340, 300));
        assert_eq!(resized.x + resized.w, start.x + start.w);
    }

    #[test]
    fn north_resize_stopping_at_the_menu_bar_rejects_the_frame() {
        let start = rect(100, MENU_BAR_HEIGHT + 10, 400, 400);
        let resized = resize_rect(start, ResizeDirection::NORTH, 0, -20);
        assert_eq!(resized, start);
    }

    #[test]
    fn corner_resize_composes_axis_rules_independently() {
        // Horizontal: west shrink below minimum freezes x/w. Vertical: south
        // growth still applies.
        let start = rect(100, 100, 330, 300);
        let resized = resize_rect(start, ResizeDirection::SOUTH_WEST, 40, 25);
        assert_eq!(resized, rect(100, 100, 330, 325));
    }

    #[test]
    fn drag_clamps_to_menu_bar_and_visible_margin() {
        let viewport = rect(0, 0, 1000, 700);
        let start = rect(200, 200, 400, 300);

        let above = drag_rect(start, 0, -500, viewport);
        assert_eq!(above.y, MENU_BAR_HEIGHT);

        let far_right = drag_rect(start, 2000, 0, viewport);
        assert_eq!(far_right.x, 1000 - DRAG_KEEP_VISIBLE_PX);

        let unchanged_size = drag_rect(start, 35, 40, viewport);
        assert_eq!((unchanged_size.w, unchanged_size.h), (400, 300));
        assert_eq!((unchanged_size.x, unchanged_size.y), (235, 240));
    }

    #[test]
    fn maximized_rect_fills_the_viewport_below_the_menu_bar() {
        let viewport = rect(0, 0, 1200, 760);
        assert_eq!(
            maximized_rect(viewport),
            rect(0, MENU_BAR_HEIGHT, 1200, 760 - MENU_BAR_HEIGHT)
        );
    }

    #[test]
    fn recenter_estimates_intrinsic_dimensions() {
        let viewport = rect(0, 0, 600, 500);
        let centered = recenter_rect(rect(900, 900, 0, 0), viewport);
        assert_eq!(centered.x, (600 - DEFAULT_WINDOW_WIDTH) / 2);
        assert!(centered.y >= MENU_BAR_HEIGHT);
        // Intrinsic dimensions stay intrinsic.
        assert_eq!((centered.w, centered.h), (0, 0));
    }
}
