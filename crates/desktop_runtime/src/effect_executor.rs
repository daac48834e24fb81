//! Drains [`RuntimeEffect`]s queued by the dispatcher and performs them against the browser.

use leptos::*;

use crate::{gesture, host, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Runs queued effects in emission order whenever the queue becomes non-empty.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        // Taking the batch first lets effects that dispatch queue into a fresh vector.
        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        for effect in batch {
            perform(runtime, effect);
        }
    });
}

fn perform(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(app_id) => host::focus_window_input(app_id),
        RuntimeEffect::AcquireGesture(kind) => {
            // Old listeners detach before the new scope goes live.
            runtime.gesture.set_value(None);
            runtime
                .gesture
                .set_value(Some(gesture::install_listeners(runtime, kind)));
        }
        RuntimeEffect::ReleaseGesture => runtime.gesture.set_value(None),
    }
}
