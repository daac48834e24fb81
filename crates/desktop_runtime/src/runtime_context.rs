//! The desktop's single state container: signals, dispatcher, and boot sequence.

use leptos::*;

use crate::{
    config::DesktopConfig,
    effect_executor,
    gesture::GestureScope,
    host,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Handle shared with every desktop component through Leptos context.
///
/// Components read the signals and send [`DesktopAction`]s; only the dispatcher writes state.
pub struct DesktopRuntimeContext {
    /// Window map, viewport, and z-order counter.
    pub state: RwSignal<DesktopState>,
    /// Drag or resize session in flight.
    pub interaction: RwSignal<InteractionState>,
    /// Pending [`RuntimeEffect`]s, drained by the effect executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Listeners owned by the gesture in flight, if any.
    pub gesture: StoredValue<Option<GestureScope>>,
    /// Entry point into [`reduce_desktop`].
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Sends one action to the reducer.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

// Runs the reducer on snapshots and publishes only what changed, so untouched signals do not
// wake their subscribers.
fn apply_action(
    state: RwSignal<DesktopState>,
    interaction: RwSignal<InteractionState>,
    effects: RwSignal<Vec<RuntimeEffect>>,
    action: DesktopAction,
) {
    let before_desktop = state.with_untracked(DesktopState::clone);
    let before_gesture = interaction.with_untracked(InteractionState::clone);
    let mut desktop = before_desktop.clone();
    let mut gesture = before_gesture.clone();

    let emitted = match reduce_desktop(&mut desktop, &mut gesture, action) {
        Ok(emitted) => emitted,
        Err(err) => {
            logging::debug_warn!("desktop reducer rejected action: {err}");
            return;
        }
    };

    if desktop != before_desktop {
        state.set(desktop);
    }
    if gesture != before_gesture {
        interaction.set(gesture);
    }
    if !emitted.is_empty() {
        effects.update(|queue| queue.extend(emitted));
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext, boot_apps: Vec<crate::AppId>) {
    effect_executor::install(runtime);

    runtime.dispatch_action(DesktopAction::SetViewport {
        viewport: host::browser_viewport(),
    });
    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::SetViewport {
            viewport: host::browser_viewport(),
        });
    });
    on_cleanup(move || {
        resize_listener.remove();
        runtime.gesture.try_update_value(|scope| scope.take());
    });

    for app_id in boot_apps {
        runtime.dispatch_action(DesktopAction::OpenApp { app_id });
    }
    logging::log!(
        "desktop runtime booted with {} window(s)",
        runtime.state.get_untracked().windows().len()
    );
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and opens the boot apps.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let config = DesktopConfig::load_embedded();
    let boot_apps = config.boot_apps.clone();
    let state = create_rw_signal(DesktopState::new(config));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let gesture = store_value(None::<GestureScope>);

    let dispatch = Callback::new(move |action: DesktopAction| {
        apply_action(state, interaction, effects, action);
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        effects,
        gesture,
        dispatch,
    };

    provide_context(runtime);
    install_runtime_orchestration(runtime, boot_apps);
    children()
}

/// Fetches the handle installed by [`DesktopProvider`].
///
/// # Panics
///
/// Panics when no [`DesktopProvider`] is mounted above the caller.
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("use_desktop_runtime called outside DesktopProvider")
}
