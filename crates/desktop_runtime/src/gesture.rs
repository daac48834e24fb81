//! Scoped ownership of the window-level listeners that back a drag or resize gesture.
//!
//! A [`GestureScope`] is created when the reducer emits
//! [`RuntimeEffect::AcquireGesture`](crate::RuntimeEffect::AcquireGesture) and is dropped on
//! [`RuntimeEffect::ReleaseGesture`](crate::RuntimeEffect::ReleaseGesture), when the next gesture
//! replaces it, or when the runtime owner is disposed. Every one of those paths runs the release
//! hooks exactly once.

use leptos::*;

use crate::{
    model::{GestureKind, PointerPosition},
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

/// Release hooks for an in-flight gesture.
#[derive(Default)]
pub struct GestureScope {
    releases: Vec<Box<dyn FnOnce()>>,
}

impl GestureScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook to run when the scope ends.
    pub fn defer(&mut self, release: impl FnOnce() + 'static) {
        self.releases.push(Box::new(release));
    }
}

#[cfg(test)]
impl GestureScope {
    fn len(&self) -> usize {
        self.releases.len()
    }

    fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

impl Drop for GestureScope {
    fn drop(&mut self) {
        for release in self.releases.drain(..) {
            release();
        }
    }
}

impl std::fmt::Debug for GestureScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureScope")
            .field("releases", &self.releases.len())
            .finish()
    }
}

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Installs window pointer listeners that feed the active gesture back into the reducer.
pub(crate) fn install_listeners(runtime: DesktopRuntimeContext, kind: GestureKind) -> GestureScope {
    let mut scope = GestureScope::new();

    let pointer_move = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        runtime.dispatch_action(match kind {
            GestureKind::Move => DesktopAction::UpdateMove { pointer },
            GestureKind::Resize => DesktopAction::UpdateResize { pointer },
        });
    });
    scope.defer(move || pointer_move.remove());

    let pointer_up = window_event_listener(ev::pointerup, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        runtime.dispatch_action(match kind {
            GestureKind::Move => DesktopAction::EndMove { pointer },
            GestureKind::Resize => DesktopAction::EndResize,
        });
    });
    scope.defer(move || pointer_up.remove());

    let pointer_cancel = window_event_listener(ev::pointercancel, move |_| {
        runtime.dispatch_action(DesktopAction::CancelGesture);
    });
    scope.defer(move || pointer_cancel.remove());

    let blur = window_event_listener(ev::blur, move |_| {
        runtime.dispatch_action(DesktopAction::CancelGesture);
    });
    scope.defer(move || blur.remove());

    scope
}
