//! Shared UI primitive library for the desktop shell and its hosted apps.
//!
//! The crate owns reusable Leptos primitives, a small icon API, and the stable `data-ui-*` DOM
//! contract consumed by the shell stylesheet. Apps compose these primitives instead of emitting
//! ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonVariant, Card, DesktopBackdrop, DesktopIconButton, DesktopIconColumn,
    DesktopWindowLayer, EmptyState, IconColumnSide, MenuBar, MenuBarSection, ResizeHandle,
    TerminalLine, TerminalPrompt, TerminalSurface, TextArea, WindowBody, WindowControlButton,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, Card, EmptyState, Icon, IconName, IconSize, TerminalLine,
        TerminalPrompt, TerminalSurface, TextArea,
    };
}
