//! Host service bundle assembled by entry layers and consumed by the runtime.

use std::rc::Rc;

use crate::optimize::{NoopOptimizeService, OptimizeService};
use crate::viewport::{FixedViewportService, ViewportService};

/// Bundle of platform services injected into the desktop runtime.
///
/// Entry layers (browser, tests) assemble the bundle from whichever adapters
/// fit the target; the runtime only sees the trait objects.
#[derive(Clone)]
pub struct HostServices {
    /// Remote prompt-optimize endpoint client.
    pub optimize: Rc<dyn OptimizeService>,
    /// Viewport geometry and layout-class queries.
    pub viewport: Rc<dyn ViewportService>,
}

impl HostServices {
    /// Builds a bundle from explicit service implementations.
    pub fn new(optimize: Rc<dyn OptimizeService>, viewport: Rc<dyn ViewportService>) -> Self {
        Self { optimize, viewport }
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self {
            optimize: Rc::new(NoopOptimizeService),
            viewport: Rc::new(FixedViewportService::default()),
        }
    }
}
