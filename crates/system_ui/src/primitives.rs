//! Shared structural, control, and shell primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Quiet button used inside titlebars and toolbars.
    Quiet,
    /// Danger/destructive button.
    Danger,
}

impl ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which side of the desktop a launcher column hugs.
pub enum IconColumnSide {
    /// Left edge, icons aligned to the start.
    Left,
    /// Right edge, icons aligned to the end.
    Right,
}

impl IconColumnSide {
    fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

// Optional callback props become event handlers that do nothing when unset.
fn forward<E: 'static>(callback: Option<Callback<E>>) -> impl Fn(E) + 'static {
    move |ev| {
        if let Some(callback) = callback {
            callback.call(ev);
        }
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            on:pointerdown=forward(on_pointerdown)
            on:click=forward(on_click)
        >
            {children()}
        </button>
    }
}

#[component]
/// Bordered content card.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Placeholder shown when a list has nothing to render.
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state">
            <p data-ui-slot="title">{title}</p>
            {detail.map(|detail| view! { <p data-ui-slot="detail">{detail}</p> })}
        </div>
    }
}

#[component]
/// Multi-line text input.
pub fn TextArea(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] aria_label: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <textarea
            id=id
            class=merge_layout_class("ui-textarea", layout_class)
            aria-label=aria_label
            placeholder=placeholder
            spellcheck="false"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-area"
            on:input=forward(on_input)
            on:keydown=forward(on_keydown)
        ></textarea>
    }
}

#[component]
/// Fixed top menu bar.
pub fn MenuBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-menubar", layout_class)
            style=move || style.get()
            role="menubar"
            data-ui-primitive="true"
            data-ui-kind="menubar"
        >
            {children()}
        </header>
    }
}

#[component]
/// Grouped cluster inside the menu bar.
pub fn MenuBarSection(ui_slot: &'static str, children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-menubar-section"
            data-ui-primitive="true"
            data-ui-kind="menubar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical launcher column pinned to one side of the desktop.
pub fn DesktopIconColumn(side: IconColumnSide, children: Children) -> impl IntoView {
    view! {
        <nav
            class="ui-desktop-icon-column"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-column"
            data-ui-slot=side.token()
        >
            {children()}
        </nav>
    }
}

#[component]
/// Desktop icon launcher button.
pub fn DesktopIconButton(
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon-button"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:click=forward(on_click)
        >
            {children()}
        </button>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-window-layer"
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=forward(on_pointerdown)
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive.
pub fn WindowTitleBar(
    #[prop(optional, into)] draggable: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-draggable=move || bool_token(draggable.get())
            on:pointerdown=forward(on_pointerdown)
            on:dblclick=forward(on_dblclick)
        >
            {children()}
        </header>
    }
}

#[component]
/// Shared window title group.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar control button.
///
/// Pointer-down is swallowed so pressing a control never starts a titlebar drag.
pub fn WindowControlButton(
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_label=aria_label
            ui_slot="window-control"
            variant=ButtonVariant::Quiet
            on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            })
            on_click=Callback::new(move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Shared window body primitive.
pub fn WindowBody(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-body" data-ui-primitive="true" data-ui-kind="window-body">
            {children()}
        </div>
    }
}

#[component]
/// Border zone that starts a resize gesture.
pub fn ResizeHandle(
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=forward(on_pointerdown)
        ></div>
    }
}

#[component]
/// Scrollable monospace terminal surface.
pub fn TerminalSurface(
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-terminal-surface"
            role="log"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="terminal-surface"
            on:click=forward(on_click)
        >
            {children()}
        </div>
    }
}

#[component]
/// Single transcript line.
pub fn TerminalLine(#[prop(into)] text: String, #[prop(optional)] tone: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class="ui-terminal-line"
            data-ui-primitive="true"
            data-ui-kind="terminal-line"
            data-ui-tone=tone.unwrap_or("output")
        >
            {text}
        </div>
    }
}

#[component]
/// Prompt row hosting the terminal input.
pub fn TerminalPrompt(#[prop(into)] prompt: String, children: Children) -> impl IntoView {
    view! {
        <div class="ui-terminal-prompt" data-ui-primitive="true" data-ui-kind="terminal-prompt">
            <span data-ui-slot="prompt">{prompt}</span>
            {children()}
        </div>
    }
}
