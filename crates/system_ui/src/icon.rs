//! Centralized icon tokens.
//!
//! Icons render as a glyph inside a tagged span; the stylesheet swaps in artwork keyed by
//! `data-ui-icon` so components never hardcode asset paths.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon identifiers available to the shell and apps.
pub enum IconName {
    /// About / layout panel.
    Layout,
    /// Product box.
    Box,
    /// Terminal prompt.
    Terminal,
    /// Pen nib.
    PenTool,
    /// Sticky note.
    StickyNote,
    /// Video camera.
    Video,
    /// Open book.
    BookOpen,
    /// Airplane.
    Plane,
    /// Graduation cap.
    GraduationCap,
    /// Shopping bag.
    ShoppingBag,
    /// Titlebar minimize.
    WindowMinimize,
    /// Titlebar maximize.
    WindowMaximize,
    /// Titlebar restore.
    WindowRestore,
    /// Close / dismiss.
    Dismiss,
    /// Network indicator.
    Wifi,
    /// Battery indicator.
    Battery,
}

impl IconName {
    /// Stable token used in the DOM contract.
    pub fn token(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Box => "box",
            Self::Terminal => "terminal",
            Self::PenTool => "pen-tool",
            Self::StickyNote => "sticky-note",
            Self::Video => "video",
            Self::BookOpen => "book-open",
            Self::Plane => "plane",
            Self::GraduationCap => "graduation-cap",
            Self::ShoppingBag => "shopping-bag",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
            Self::Wifi => "wifi",
            Self::Battery => "battery",
        }
    }

    /// Text fallback shown before the stylesheet artwork loads.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Layout => "▦",
            Self::Box => "▣",
            Self::Terminal => ">_",
            Self::PenTool => "✎",
            Self::StickyNote => "▤",
            Self::Video => "▶",
            Self::BookOpen => "❐",
            Self::Plane => "✈",
            Self::GraduationCap => "✦",
            Self::ShoppingBag => "◫",
            Self::WindowMinimize => "–",
            Self::WindowMaximize => "□",
            Self::WindowRestore => "❐",
            Self::Dismiss => "×",
            Self::Wifi => "≋",
            Self::Battery => "▮",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Titlebar controls.
    Xs,
    /// Inline text.
    #[default]
    Sm,
    /// Desktop launcher icons.
    Lg,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon token.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}
