//! Desktop runtime: state model, reducer, and shell components for the
//! PromptDesk desktop surface.

pub mod apps;
pub mod components;
pub mod grid;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use components::DesktopShell;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
