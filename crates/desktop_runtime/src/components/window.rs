use leptos::*;
use system_ui::{
    Icon, IconName, IconSize, ResizeHandle, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::use_desktop_runtime;
use crate::{
    apps,
    gesture::pointer_from_pointer_event,
    model::{AppId, ResizeEdge},
    reducer::DesktopAction,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

// Secondary mouse buttons and non-primary touches never start a gesture.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn resize_edge_slot(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "n",
        ResizeEdge::South => "s",
        ResizeEdge::East => "e",
        ResizeEdge::West => "w",
        ResizeEdge::NorthEast => "ne",
        ResizeEdge::NorthWest => "nw",
        ResizeEdge::SouthEast => "se",
        ResizeEdge::SouthWest => "sw",
    }
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let Some(descriptor) = apps::app_descriptor(app_id) else {
        logging::debug_warn!("skipping window without descriptor: {app_id}");
        return ().into_view();
    };

    let style = Signal::derive(move || {
        state.with(|desktop| {
            desktop
                .window(app_id)
                .map(|window| desktop.frame_rect(window).css(window.z_index))
                .unwrap_or_default()
        })
    });
    let focused = Signal::derive(move || state.with(|desktop| desktop.active_window_id() == Some(app_id)));
    let maximized = Signal::derive(move || {
        state.with(|desktop| {
            desktop
                .window(app_id)
                .map(|window| window.is_maximized)
                .unwrap_or(false)
        })
    });
    let accepts_gestures =
        Signal::derive(move || state.with(|desktop| desktop.accepts_gestures(app_id)));

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { app_id });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || !accepts_gestures.get_untracked() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let toggle_maximize = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id });
    });
    let minimize = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::MinimizeWindow { app_id });
    });
    let close = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CloseWindow { app_id });
    });

    let contents = apps::render_window_contents(app_id);

    view! {
        <WindowFrame
            style=style
            aria_label=descriptor.title.to_string()
            focused=focused
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar
                draggable=accepts_gestures
                on_pointerdown=begin_move
                on_dblclick=toggle_maximize
            >
                <WindowTitle>
                    <Icon icon=descriptor.icon size=IconSize::Sm />
                    <span>{descriptor.title}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Minimize window" on_click=minimize>
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() {
                                "Restore window"
                            } else {
                                "Maximize window"
                            };
                            label.to_string()
                        })
                        on_click=toggle_maximize
                    >
                        {move || {
                            let icon = if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <Icon icon size=IconSize::Xs /> }
                        }}
                    </WindowControlButton>
                    <WindowControlButton aria_label="Close window" on_click=close>
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
            <Show when=move || accepts_gestures.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle app_id edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(app_id: AppId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            app_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=resize_edge_slot(edge) on_pointerdown /> }
}
