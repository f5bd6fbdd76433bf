//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the
//! optimize-endpoint wire types and service trait plus viewport/layout-class
//! queries, while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod optimize;
pub mod viewport;

pub use host::HostServices;
pub use optimize::{
    LocalEchoOptimizeService, NoopOptimizeService, OptimizeError, OptimizeErrorPayload,
    OptimizeFuture, OptimizeRequest, OptimizeResponse, OptimizeService, OptimizeUsage,
};
pub use viewport::{
    FixedViewportService, ViewportRect, ViewportService, COMPACT_VIEWPORT_MAX_WIDTH,
};
