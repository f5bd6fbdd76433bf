//! Shared UI primitive library for the desktop shell and its built-in apps.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the shell CSS layers. Shell
//! code composes these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, DesktopBackdrop, DesktopIconButton, DesktopIconLayer, DesktopRoot, DesktopWindowLayer,
    FieldGroup, IconSnapPreview, InlineMessage, MenuBar, MenuItem, MessageTone, ResizeHandle,
    SelectField, TextArea, TextField, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
