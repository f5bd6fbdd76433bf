//! Icon grid geometry: pure snap and clamp helpers.
//!
//! Icon cells form a fixed lattice offset from the top-left of the desktop.
//! Snapping is total over any real-valued input; cell indices are clamped to
//! zero so snapped positions never leave the lattice.

use crate::model::{PointerPosition, WindowRect};

/// Width of one icon cell, in px.
pub const ICON_CELL_WIDTH: i32 = 88;
/// Height of one icon cell, in px.
pub const ICON_CELL_HEIGHT: i32 = 96;
/// Horizontal lattice offset, in px.
pub const ICON_GRID_OFFSET_X: i32 = 24;
/// Vertical lattice offset, in px. Keeps the first row clear of the menu bar.
pub const ICON_GRID_OFFSET_Y: i32 = 40;
/// Strip at the bottom of the viewport kept free of icons, in px.
pub const ICON_FOOTER_RESERVED_PX: i32 = 48;

/// Snaps a free position to the nearest icon cell origin.
///
/// Ties round away from zero. Pure and total; negative inputs land in the
/// first cell on that axis.
pub fn snap_to_grid(x: f64, y: f64) -> PointerPosition {
    PointerPosition {
        x: snap_axis(x, ICON_GRID_OFFSET_X, ICON_CELL_WIDTH),
        y: snap_axis(y, ICON_GRID_OFFSET_Y, ICON_CELL_HEIGHT),
    }
}

fn snap_axis(value: f64, offset: i32, cell: i32) -> i32 {
    let index = ((value - offset as f64) / cell as f64).round().max(0.0);
    index as i32 * cell + offset
}

/// Clamps a free icon position so the whole cell stays inside the viewport,
/// above the reserved footer strip.
pub fn clamp_icon_position(position: PointerPosition, viewport: WindowRect) -> PointerPosition {
    let max_x = (viewport.w - ICON_CELL_WIDTH).max(0);
    let max_y = (viewport.h - ICON_CELL_HEIGHT - ICON_FOOTER_RESERVED_PX).max(0);
    PointerPosition {
        x: position.x.clamp(0, max_x),
        y: position.y.clamp(0, max_y),
    }
}

/// Computes the position an icon would be committed to if released at
/// `live`: clamp to the viewport, snap to the lattice, then step back to the
/// last in-bounds cell when rounding carried the snap past the clamp bound
/// (viewport edges need not be lattice-aligned).
pub fn committed_icon_position(live: PointerPosition, viewport: WindowRect) -> PointerPosition {
    let clamped = clamp_icon_position(live, viewport);
    let snapped = snap_to_grid(clamped.x as f64, clamped.y as f64);
    let max_x = (viewport.w - ICON_CELL_WIDTH).max(0);
    let max_y = (viewport.h - ICON_CELL_HEIGHT - ICON_FOOTER_RESERVED_PX).max(0);
    PointerPosition {
        x: cap_to_last_cell(snapped.x, max_x, ICON_GRID_OFFSET_X, ICON_CELL_WIDTH),
        y: cap_to_last_cell(snapped.y, max_y, ICON_GRID_OFFSET_Y, ICON_CELL_HEIGHT),
    }
}

/// Steps a snapped coordinate down to the last cell origin at or below
/// `max`, keeping grid alignment. The first cell is the floor even when
/// `max` sits below it (degenerate viewports).
fn cap_to_last_cell(snapped: i32, max: i32, offset: i32, cell: i32) -> i32 {
    if snapped <= max {
        return snapped;
    }
    let last_index = (max - offset).div_euclid(cell).max(0);
    last_index * cell + offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 800,
        }
    }

    #[test]
    fn snap_is_idempotent() {
        let samples = [
            (-250.0, -40.0),
            (0.0, 0.0),
            (23.9, 39.9),
            (68.0, 88.0),
            (500.5, 321.25),
            (1279.0, 799.0),
        ];
        for (x, y) in samples {
            let once = snap_to_grid(x, y);
            let twice = snap_to_grid(once.x as f64, once.y as f64);
            assert_eq!(once, twice, "snap not idempotent for ({x}, {y})");
        }
    }

    #[test]
    fn snap_results_are_grid_aligned_and_non_negative() {
        for (x, y) in [(-900.0, -900.0), (3.0, 7.0), (611.0, 455.0)] {
            let snapped = snap_to_grid(x, y);
            assert_eq!((snapped.x - ICON_GRID_OFFSET_X) % ICON_CELL_WIDTH, 0);
            assert_eq!((snapped.y - ICON_GRID_OFFSET_Y) % ICON_CELL_HEIGHT, 0);
            assert!(snapped.x >= ICON_GRID_OFFSET_X);
            assert!(snapped.y >= ICON_GRID_OFFSET_Y);
        }
    }

    #[test]
    fn midpoint_rounds_away_from_zero() {
        // Exactly halfway between cell 0 and cell 1 on the x axis.
        let midpoint = ICON_GRID_OFFSET_X as f64 + ICON_CELL_WIDTH as f64 / 2.0;
        let snapped = snap_to_grid(midpoint, ICON_GRID_OFFSET_Y as f64);
        assert_eq!(snapped.x, ICON_GRID_OFFSET_X + ICON_CELL_WIDTH);
    }

    #[test]
    fn commit_keeps_icons_inside_the_viewport() {
        let wild = PointerPosition { x: 5000, y: -300 };
        let committed = committed_icon_position(wild, viewport());
        assert!(committed.x <= viewport().w - ICON_CELL_WIDTH);
        assert!(committed.y <= viewport().h - ICON_CELL_HEIGHT - ICON_FOOTER_RESERVED_PX);
        assert!(committed.x >= 0 && committed.y >= 0);
        assert_eq!((committed.x - ICON_GRID_OFFSET_X) % ICON_CELL_WIDTH, 0);
        assert_eq!((committed.y - ICON_GRID_OFFSET_Y) % ICON_CELL_HEIGHT, 0);
    }

    #[test]
    fn commit_stays_in_bounds_when_the_viewport_is_not_cell_aligned() {
        // 1250 is not a multiple of the cell width: the clamp bound is 1162
        // and the nearest lattice origin (1168) lies past it, so the commit
        // must fall back to the previous cell.
        let unaligned = WindowRect {
            x: 0,
            y: 0,
            w: 1250,
            h: 800,
        };
        let committed = committed_icon_position(PointerPosition { x: 5000, y: 100 }, unaligned);
        assert!(committed.x <= unaligned.w - ICON_CELL_WIDTH);
        assert_eq!((committed.x - ICON_GRID_OFFSET_X) % ICON_CELL_WIDTH, 0);
        assert_eq!(committed.x, 12 * ICON_CELL_WIDTH + ICON_GRID_OFFSET_X);
    }

    #[test]
    fn commit_handles_degenerate_viewports() {
        let tiny = WindowRect {
            x: 0,
            y: 0,
            w: 40,
            h: 30,
        };
        let committed = committed_icon_position(PointerPosition { x: 10, y: 10 }, tiny);
        // Clamp floor is zero; snapping then lands in the first cell.
        assert_eq!(
            committed,
            PointerPosition {
                x: ICON_GRID_OFFSET_X,
                y: ICON_GRID_OFFSET_Y
            }
        );
    }
}
