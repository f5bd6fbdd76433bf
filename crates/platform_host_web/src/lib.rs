//! Browser adapters for the `platform_host` service contracts.
//!
//! Concrete `fetch`/`web-sys` implementations live here behind the same
//! traits the desktop runtime consumes, keeping the runtime free of direct
//! interop. Non-WASM targets get deterministic fallback shims.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
mod optimize;
mod viewport;

pub use optimize::{WebOptimizeService, DEFAULT_OPTIMIZE_ENDPOINT};
pub use viewport::BrowserViewportService;

/// Builds the default browser optimize-endpoint adapter.
pub fn optimize_service() -> WebOptimizeService {
    WebOptimizeService::default()
}

/// Builds the default browser viewport adapter.
pub fn viewport_service() -> BrowserViewportService {
    BrowserViewportService
}
