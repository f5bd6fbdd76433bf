//! Core data model for the desktop shell: windows, icons, and interaction sessions.

use serde::{Deserialize, Serialize};

/// Height of the fixed menu bar pinned to the top of the desktop, in px.
pub const MENU_BAR_HEIGHT: i32 = 28;
/// Default width for windows opened without an explicit rect.
pub const DEFAULT_WINDOW_WIDTH: i32 = 480;
/// Default height for windows opened without an explicit rect.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;
/// Delay before a lone icon click is committed as a single click, in ms.
pub const CLICK_DISAMBIGUATION_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identity of a managed window.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identity of a desktop icon.
pub struct IconId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Built-in applications the desktop surface can open.
pub enum AppId {
    /// The prompt-templating tool.
    PromptStudio,
    /// Static usage notes.
    ReadMe,
    /// About box.
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer position in CSS pixels.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in CSS pixels. A zero width or height means
/// "intrinsic": the render layer omits that dimension and lets content size
/// the window.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width, `0` for intrinsic.
    pub w: i32,
    /// Height, `0` for intrinsic.
    pub h: i32,
}

impl WindowRect {
    /// Returns this rect translated by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns this rect with both dimensions raised to the given minimums.
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 72,
            y: MENU_BAR_HEIGHT + 24,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Lifecycle state of a managed window. Minimized and maximized are mutually
/// exclusive by construction.
pub enum WindowState {
    /// Free-floating at its stored rect.
    #[default]
    Normal,
    /// Hidden from the surface, restorable from the menu bar.
    Minimized,
    /// Filling the viewport below the menu bar; the stored rect is untouched
    /// while in this state.
    Maximized,
}

impl WindowState {
    /// Whether the window is minimized.
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized)
    }

    /// Whether the window is maximized.
    pub fn is_maximized(self) -> bool {
        matches!(self, Self::Maximized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Per-window capability flags; operations on windows lacking the flag are
/// guarded no-ops.
pub struct WindowFlags {
    /// Window can be resized from its edges and corners.
    pub resizable: bool,
    /// Window can be dragged by its title bar.
    pub draggable: bool,
    /// Window exposes the minimize control.
    pub minimizable: bool,
    /// Window exposes the maximize control.
    pub maximizable: bool,
}

impl Default for WindowFlags {
    fn default() -> Self {
        Self {
            resizable: true,
            draggable: true,
            minimizable: true,
            maximizable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A managed window.
pub struct WindowRecord {
    /// Stable identity.
    pub id: WindowId,
    /// Owning application.
    pub app_id: AppId,
    /// Title bar text.
    pub title: String,
    /// Stored geometry; meaningful for display only while not maximized.
    pub rect: WindowRect,
    /// Pre-maximize snapshot, overwritten on every entry to
    /// [`WindowState::Maximized`] and consumed verbatim on restore.
    pub restore_rect: Option<WindowRect>,
    /// Stacking order; strictly monotonic across focus events, never reused.
    pub z_index: u64,
    /// Whether this window currently holds focus.
    pub is_focused: bool,
    /// Lifecycle state.
    pub state: WindowState,
    /// Capability flags.
    pub flags: WindowFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A desktop launcher icon. The stored position is grid-aligned at rest; only
/// the live drag position inside [`IconDragSession`] is free-form.
pub struct IconRecord {
    /// Stable identity.
    pub id: IconId,
    /// Application opened on double-click.
    pub app_id: AppId,
    /// Label under the glyph.
    pub label: String,
    /// Grid-aligned position of the icon's cell.
    pub position: PointerPosition,
    /// Whether the icon is selected.
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-axis resize pull: which way an axis edge is being dragged.
pub enum AxisPull {
    /// Axis not involved in this resize.
    Keep,
    /// Dragging the near edge (west or north): origin shifts with the edge.
    Neg,
    /// Dragging the far edge (east or south): origin stays fixed.
    Pos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Resize direction as a pair of per-axis pulls. The `(Keep, Keep)` pair is
/// not constructible through [`ResizeDirection::new`] and none of the named
/// constants carry it.
pub struct ResizeDirection {
    /// Horizontal pull.
    pub x: AxisPull,
    /// Vertical pull.
    pub y: AxisPull,
}

impl ResizeDirection {
    /// North edge.
    pub const NORTH: Self = Self {
        x: AxisPull::Keep,
        y: AxisPull::Neg,
    };
    /// South edge.
    pub const SOUTH: Self = Self {
        x: AxisPull::Keep,
        y: AxisPull::Pos,
    };
    /// East edge.
    pub const EAST: Self = Self {
        x: AxisPull::Pos,
        y: AxisPull::Keep,
    };
    /// West edge.
    pub const WEST: Self = Self {
        x: AxisPull::Neg,
        y: AxisPull::Keep,
    };
    /// North-east corner.
    pub const NORTH_EAST: Self = Self {
        x: AxisPull::Pos,
        y: AxisPull::Neg,
    };
    /// North-west corner.
    pub const NORTH_WEST: Self = Self {
        x: AxisPull::Neg,
        y: AxisPull::Neg,
    };
    /// South-east corner.
    pub const SOUTH_EAST: Self = Self {
        x: AxisPull::Pos,
        y: AxisPull::Pos,
    };
    /// South-west corner.
    pub const SOUTH_WEST: Self = Self {
        x: AxisPull::Neg,
        y: AxisPull::Pos,
    };

    /// All eight edge and corner directions, in render order.
    pub const ALL: [Self; 8] = [
        Self::NORTH,
        Self::SOUTH,
        Self::EAST,
        Self::WEST,
        Self::NORTH_EAST,
        Self::NORTH_WEST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
    ];

    /// Builds a direction from per-axis pulls, rejecting the no-op pair.
    pub fn new(x: AxisPull, y: AxisPull) -> Option<Self> {
        if matches!((x, y), (AxisPull::Keep, AxisPull::Keep)) {
            return None;
        }
        Some(Self { x, y })
    }

    /// Stable token used by the CSS layer for handle placement and cursors.
    pub const fn css_token(self) -> &'static str {
        match (self.y, self.x) {
            (AxisPull::Neg, AxisPull::Keep) => "n",
            (AxisPull::Pos, AxisPull::Keep) => "s",
            (AxisPull::Keep, AxisPull::Pos) => "e",
            (AxisPull::Keep, AxisPull::Neg) => "w",
            (AxisPull::Neg, AxisPull::Pos) => "ne",
            (AxisPull::Neg, AxisPull::Neg) => "nw",
            (AxisPull::Pos, AxisPull::Pos) => "se",
            (AxisPull::Pos, AxisPull::Neg) => "sw",
            (AxisPull::Keep, AxisPull::Keep) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active window drag session. Holds the pointer/rect starting points so
/// moves are offset-preserving.
pub struct DragSession {
    /// Window being dragged.
    pub window_id: WindowId,
    /// Pointer position at session start.
    pub pointer_start: PointerPosition,
    /// Window rect at session start.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active window resize session.
pub struct ResizeSession {
    /// Window being resized.
    pub window_id: WindowId,
    /// Edge or corner being dragged.
    pub direction: ResizeDirection,
    /// Pointer position at session start.
    pub pointer_start: PointerPosition,
    /// Window rect at session start.
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active icon drag session. `live` is free-form and may leave the viewport;
/// clamping and grid snapping happen at commit.
pub struct IconDragSession {
    /// Icon being dragged.
    pub icon_id: IconId,
    /// Pointer position at session start.
    pub pointer_start: PointerPosition,
    /// Icon position at session start.
    pub origin: PointerPosition,
    /// Current free-form display position.
    pub live: PointerPosition,
    /// Whether any pointer movement occurred; once set, the session can no
    /// longer resolve as a click.
    pub moved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A click candidate awaiting single-vs-double disambiguation.
pub struct PendingIconClick {
    /// Icon that was clicked.
    pub icon_id: IconId,
    /// Generation stamp; a timeout carrying a stale generation is ignored.
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer-interaction state. At most one session is active at a
/// time; sessions own the global pointer listeners exclusively.
pub struct InteractionState {
    /// Active window drag, if any.
    pub dragging: Option<DragSession>,
    /// Active window resize, if any.
    pub resizing: Option<ResizeSession>,
    /// Active icon drag, if any.
    pub icon_drag: Option<IconDragSession>,
    /// Grid cell the dragged icon would land in if released now; display only.
    pub icon_snap_preview: Option<PointerPosition>,
    /// Click candidate awaiting its disambiguation timeout.
    pub pending_click: Option<PendingIconClick>,
}

impl InteractionState {
    /// Whether any drag or resize session currently owns the pointer.
    pub fn has_active_session(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some() || self.icon_drag.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Authoritative desktop surface state.
pub struct DesktopState {
    /// Next window id to assign.
    pub next_window_id: u64,
    /// Next z-index to assign on focus; monotonic, never reused.
    pub next_z: u64,
    /// Click-candidate generation counter.
    pub next_click_generation: u64,
    /// Open windows, unordered; stacking comes from `z_index` alone.
    pub windows: Vec<WindowRecord>,
    /// Desktop icons.
    pub icons: Vec<IconRecord>,
    /// Current viewport rectangle, kept in sync by the host layer.
    pub viewport: WindowRect,
    /// Whether the viewport is in compact mode (drag/resize disabled).
    pub compact: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_z: 1,
            next_click_generation: 1,
            windows: Vec::new(),
            icons: Vec::new(),
            viewport: WindowRect {
                x: 0,
                y: 0,
                w: 1280,
                h: 800,
            },
            compact: false,
        }
    }
}

impl DesktopState {
    /// Returns the focused window id, if any window holds focus.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    /// Returns the window record for `window_id`.
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Returns the icon record for `icon_id`.
    pub fn icon(&self, icon_id: IconId) -> Option<&IconRecord> {
        self.icons.iter().find(|i| i.id == icon_id)
    }

    /// Returns the topmost open window for `app_id`, if one exists.
    pub fn window_for_app(&self, app_id: AppId) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.app_id == app_id)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Request to open a new window.
pub struct OpenWindowRequest {
    /// Application to mount.
    pub app_id: AppId,
    /// Title override; defaults to the app title.
    pub title: Option<String>,
    /// Initial geometry; defaults to a cascaded position with app defaults.
    pub rect: Option<WindowRect>,
    /// Capability flags.
    pub flags: WindowFlags,
}

impl OpenWindowRequest {
    /// Builds a request with default title, geometry, and flags.
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            title: None,
            rect: None,
            flags: WindowFlags::default(),
        }
    }
}
