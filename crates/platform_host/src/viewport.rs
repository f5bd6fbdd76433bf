//! Viewport-class host-service contracts.

/// Viewport width (px) at or below which the shell switches to compact mode.
pub const COMPACT_VIEWPORT_MAX_WIDTH: i32 = 768;

/// Pixel rectangle of the area available to the desktop surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportRect {
    /// Left edge in CSS pixels.
    pub x: i32,
    /// Top edge in CSS pixels.
    pub y: i32,
    /// Width in CSS pixels.
    pub w: i32,
    /// Height in CSS pixels.
    pub h: i32,
}

/// Host service answering viewport geometry and layout-class queries.
pub trait ViewportService {
    /// Current full viewport rectangle.
    fn viewport_rect(&self) -> ViewportRect;

    /// Whether the viewport is narrow enough for the compact fixed layout.
    fn is_compact(&self) -> bool {
        self.viewport_rect().w <= COMPACT_VIEWPORT_MAX_WIDTH
    }
}

/// Fixed-geometry viewport service for tests and non-browser targets.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewportService {
    rect: ViewportRect,
}

impl FixedViewportService {
    /// Creates a service that always reports `rect`.
    pub fn new(rect: ViewportRect) -> Self {
        Self { rect }
    }
}

impl Default for FixedViewportService {
    fn default() -> Self {
        Self::new(ViewportRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 800,
        })
    }
}

impl ViewportService for FixedViewportService {
    fn viewport_rect(&self) -> ViewportRect {
        self.rect
    }
}
