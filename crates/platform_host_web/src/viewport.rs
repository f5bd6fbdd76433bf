//! Browser viewport adapter.

use platform_host::{ViewportRect, ViewportService};

/// Viewport adapter backed by `window.innerWidth`/`innerHeight`.
///
/// On non-WASM targets it reports a fixed desktop-sized rect so native unit
/// tests of consumers see stable geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewportService;

impl ViewportService for BrowserViewportService {
    fn viewport_rect(&self) -> ViewportRect {
        current_viewport_rect()
    }
}

#[cfg(target_arch = "wasm32")]
fn current_viewport_rect() -> ViewportRect {
    let Some(window) = web_sys::window() else {
        return fallback_rect();
    };
    let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as i32
    };
    ViewportRect {
        x: 0,
        y: 0,
        w: read(window.inner_width()),
        h: read(window.inner_height()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn current_viewport_rect() -> ViewportRect {
    fallback_rect()
}

fn fallback_rect() -> ViewportRect {
    ViewportRect {
        x: 0,
        y: 0,
        w: 1280,
        h: 800,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_target_reports_the_fallback_rect() {
        let service = BrowserViewportService;
        assert_eq!(service.viewport_rect(), fallback_rect());
        assert!(!service.is_compact());
    }
}
