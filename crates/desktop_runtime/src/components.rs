//! Desktop shell UI composition and interaction surfaces.

mod menu_bar;
mod window;

use leptos::*;
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconColumn, DesktopWindowLayer, Icon,
    IconColumnSide, IconSize,
};

use self::{menu_bar::DesktopMenuBar, window::DesktopWindow};
use crate::{
    apps::{self, AppDescriptor},
    reducer::DesktopAction,
    window_manager::split_icon_columns,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
fn DesktopIcon(descriptor: AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = descriptor.app_id;

    view! {
        <DesktopIconButton
            aria_label=format!("Open {}", descriptor.title)
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::OpenApp { app_id });
            })
        >
            <span>
                <Icon icon=descriptor.icon size=IconSize::Lg />
            </span>
            <span>{descriptor.title}</span>
        </DesktopIconButton>
    }
}

#[component]
fn DesktopIconColumns() -> impl IntoView {
    let (left, right) = split_icon_columns(apps::app_registry());

    view! {
        <DesktopIconColumn side=IconColumnSide::Left>
            {left
                .into_iter()
                .map(|descriptor| view! { <DesktopIcon descriptor /> })
                .collect_view()}
        </DesktopIconColumn>
        <DesktopIconColumn side=IconColumnSide::Right>
            {right
                .into_iter()
                .map(|descriptor| view! { <DesktopIcon descriptor /> })
                .collect_view()}
        </DesktopIconColumn>
    }
}

#[component]
/// Renders the full desktop shell UI: menu bar, launcher columns, and the window stack.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let menu_bar_height = state.with_untracked(|desktop| desktop.config().menu_bar_height);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-compact=move || state.with(|desktop| desktop.is_compact_layout()).to_string()
            data-gesture=move || {
                runtime
                    .interaction
                    .with(|interaction| interaction.active_gesture().is_some())
                    .to_string()
            }
        >
            <DesktopMenuBar height=menu_bar_height />
            <DesktopBackdrop>
                <DesktopIconColumns />
                <DesktopWindowLayer>
                    <For
                        each=move || state.with(|desktop| desktop.rendered_window_ids())
                        key=|app_id| *app_id
                        let:app_id
                    >
                        <DesktopWindow app_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>
        </div>
    }
}
