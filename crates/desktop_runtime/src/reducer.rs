//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::apps::app_descriptor;
use crate::model::{
    AppId, DesktopState, DragSession, GestureKind, InteractionState, PointerPosition, Position,
    ResizeEdge, ResizeSession, Size, Viewport,
};
use crate::window_manager::resize_geometry;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Create, restore, or raise the window for an app.
    OpenApp {
        /// App to open.
        app_id: AppId,
    },
    /// Close a window, discarding its geometry.
    CloseWindow {
        /// Window to close.
        app_id: AppId,
    },
    /// Bring an open window to front.
    FocusWindow {
        /// Window to focus.
        app_id: AppId,
    },
    /// Hide a window without touching its stacking or geometry.
    MinimizeWindow {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Flip the maximized flag.
    ToggleMaximize {
        /// Window to maximize or restore.
        app_id: AppId,
    },
    /// Write a final drag position.
    DragEnd {
        /// Window that was dragged.
        app_id: AppId,
        /// Top-left corner after the drag.
        position: Position,
    },
    /// Write a new size, clamped to the configured minimums.
    ResizeWindow {
        /// Window being resized.
        app_id: AppId,
        /// Requested size.
        size: Size,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag at the final pointer position.
    EndMove {
        /// Pointer position on release.
        pointer: PointerPosition,
    },
    /// Begin resizing a window from one of its handles.
    BeginResize {
        /// Window being resized.
        app_id: AppId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active resize, keeping the last applied size.
    EndResize,
    /// Abandon any active gesture (pointer cancel, window blur).
    CancelGesture,
    /// Record the browser viewport size.
    SetViewport {
        /// New viewport dimensions.
        viewport: Viewport,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(AppId),
    /// Install window-level pointer listeners for a gesture.
    AcquireGesture(GestureKind),
    /// Drop the gesture listeners installed by the last [`RuntimeEffect::AcquireGesture`].
    ReleaseGesture,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions. State is never modified when one is returned.
pub enum ReducerError {
    /// The target window is not open.
    #[error("window not found: {0}")]
    WindowNotFound(AppId),
    /// The app has no registry entry.
    #[error("unknown app: {0}")]
    UnknownApp(AppId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action names a window that is not open and
/// [`ReducerError::UnknownApp`] when an app id has no descriptor.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id } => {
            let descriptor = app_descriptor(app_id).ok_or(ReducerError::UnknownApp(app_id))?;
            state.open_window(descriptor);
            effects.push(RuntimeEffect::FocusWindowInput(app_id));
        }
        DesktopAction::CloseWindow { app_id } => {
            if !state.close_window(app_id) {
                return Err(ReducerError::WindowNotFound(app_id));
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            require_window(state, app_id)?;
            if state.focus_window(app_id) {
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::MinimizeWindow { app_id } => {
            require_window(state, app_id)?;
            state.minimize_window(app_id);
        }
        DesktopAction::ToggleMaximize { app_id } => {
            require_window(state, app_id)?;
            state.toggle_maximize(app_id);
        }
        // Maximized windows and the compact layout keep their stored geometry untouched.
        DesktopAction::DragEnd { app_id, position } => {
            require_window(state, app_id)?;
            if state.accepts_gestures(app_id) {
                state.commit_position(app_id, position);
            }
        }
        DesktopAction::ResizeWindow { app_id, size } => {
            require_window(state, app_id)?;
            if state.accepts_gestures(app_id) {
                state.commit_size(app_id, size);
            }
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let window = require_window(state, app_id)?;
            let position_start = window.position;
            if !state.accepts_gestures(app_id) {
                return Ok(effects);
            }
            state.focus_window(app_id);
            interaction.resizing = None;
            interaction.dragging = Some(DragSession {
                app_id,
                pointer_start: pointer,
                position_start,
            });
            effects.push(RuntimeEffect::AcquireGesture(GestureKind::Move));
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let position = session.position_start.offset(
                    pointer.x - session.pointer_start.x,
                    pointer.y - session.pointer_start.y,
                );
                state.commit_position(session.app_id, position);
            }
        }
        DesktopAction::EndMove { pointer } => {
            if let Some(session) = interaction.dragging.take() {
                let position = session.position_start.offset(
                    pointer.x - session.pointer_start.x,
                    pointer.y - session.pointer_start.y,
                );
                state.commit_position(session.app_id, position);
                effects.push(RuntimeEffect::ReleaseGesture);
            }
        }
        DesktopAction::BeginResize {
            app_id,
            edge,
            pointer,
        } => {
            let window = require_window(state, app_id)?;
            let (position_start, size_start) = (window.position, window.size);
            if !state.accepts_gestures(app_id) {
                return Ok(effects);
            }
            state.focus_window(app_id);
            interaction.dragging = None;
            interaction.resizing = Some(ResizeSession {
                app_id,
                edge,
                pointer_start: pointer,
                position_start,
                size_start,
            });
            effects.push(RuntimeEffect::AcquireGesture(GestureKind::Resize));
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let min = Size {
                    width: state.config.min_window_width,
                    height: state.config.min_window_height,
                };
                let (position, size) = resize_geometry(
                    session.position_start,
                    session.size_start,
                    session.edge,
                    pointer.x - session.pointer_start.x,
                    pointer.y - session.pointer_start.y,
                    min,
                );
                state.commit_position(session.app_id, position);
                state.commit_size(session.app_id, size);
            }
        }
        DesktopAction::EndResize => {
            if interaction.resizing.take().is_some() {
                effects.push(RuntimeEffect::ReleaseGesture);
            }
        }
        DesktopAction::CancelGesture => {
            if interaction.active_gesture().is_some() {
                *interaction = InteractionState::default();
                effects.push(RuntimeEffect::ReleaseGesture);
            }
        }
        DesktopAction::SetViewport { viewport } => {
            state.viewport = viewport;
        }
    }

    settle_gesture(state, interaction, &mut effects);
    Ok(effects)
}

fn require_window(
    state: &DesktopState,
    app_id: AppId,
) -> Result<&crate::model::WindowState, ReducerError> {
    state
        .window(app_id)
        .ok_or(ReducerError::WindowNotFound(app_id))
}

// A gesture outlives its window only until the next action: closing, minimizing, maximizing, or
// entering the compact layout all end it.
fn settle_gesture(
    state: &DesktopState,
    interaction: &mut InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) {
    let Some((app_id, _)) = interaction.active_gesture() else {
        return;
    };
    if state.accepts_gestures(app_id) {
        return;
    }
    *interaction = InteractionState::default();
    if !effects.contains(&RuntimeEffect::ReleaseGesture) {
        effects.push(RuntimeEffect::ReleaseGesture);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("action accepted")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) {
        reduce(state, interaction, DesktopAction::OpenApp { app_id });
    }

    fn z_of(state: &DesktopState, app_id: AppId) -> u32 {
        state.window(app_id).expect("window open").z_index
    }

    #[test]
    fn open_assigns_increasing_z_and_activates() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Terminal);
        open(&mut state, &mut interaction, AppId::Memo);

        assert_eq!(z_of(&state, AppId::Terminal), 10);
        assert_eq!(z_of(&state, AppId::Memo), 11);
        assert_eq!(state.active_window_id(), Some(AppId::Memo));
    }

    #[test]
    fn open_seeds_geometry_from_descriptor() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Terminal);

        let window = state.window(AppId::Terminal).expect("terminal");
        assert_eq!(window.position, Position { x: 200, y: 250 });
        assert_eq!(
            window.size,
            Size {
                width: 600,
                height: 400
            }
        );
        assert!(window.is_open && !window.is_minimized && !window.is_maximized);
    }

    #[test]
    fn z_index_wraps_to_floor_after_ceiling() {
        let config = crate::config::DesktopConfig {
            z_index_floor: 10,
            z_index_ceiling: 12,
            ..Default::default()
        };
        let mut state = DesktopState::new(config);
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Terminal);
        open(&mut state, &mut interaction, AppId::Memo);
        open(&mut state, &mut interaction, AppId::Learn);
        open(&mut state, &mut interaction, AppId::Travel);

        assert_eq!(z_of(&state, AppId::Learn), 12);
        assert_eq!(z_of(&state, AppId::Travel), 10);
    }

    #[test]
    fn focusing_active_window_twice_changes_nothing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        open(&mut state, &mut interaction, AppId::Memo);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: AppId::Terminal,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(AppId::Terminal)]);
        let after_first = state.clone();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: AppId::Terminal,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state, after_first);
        assert_eq!(z_of(&state, AppId::Terminal), 12);
    }

    #[test]
    fn reopening_visible_window_only_changes_z() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        open(&mut state, &mut interaction, AppId::Memo);
        let before = state.window(AppId::Terminal).cloned().expect("terminal");

        open(&mut state, &mut interaction, AppId::Terminal);

        let after = state.window(AppId::Terminal).cloned().expect("terminal");
        assert_eq!(after.z_index, 12);
        assert_eq!(
            WindowStateGeometry::of(&after),
            WindowStateGeometry::of(&before)
        );
        assert_eq!(state.active_window_id(), Some(AppId::Terminal));
    }

    #[test]
    fn opening_active_window_still_raises_it() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        open(&mut state, &mut interaction, AppId::Terminal);

        assert_eq!(z_of(&state, AppId::Terminal), 11);
    }

    #[test]
    fn minimize_hides_window_and_keeps_z_and_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        let before = state.window(AppId::Terminal).cloned().expect("terminal");

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Terminal,
            },
        );

        let after = state.window(AppId::Terminal).expect("terminal");
        assert!(after.is_minimized);
        assert_eq!(after.z_index, before.z_index);
        assert_eq!(after.rect(), before.rect());
        assert!(state.rendered_window_ids().is_empty());
        assert_eq!(state.active_window_id(), None);
    }

    #[test]
    fn focus_does_not_restore_minimized_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Terminal,
            },
        );
        let before = state.clone();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: AppId::Terminal,
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn maximize_twice_restores_geometry_exactly() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        let before = state.window(AppId::Terminal).expect("terminal").rect();

        for _ in 0..2 {
            reduce(
                &mut state,
                &mut interaction,
                DesktopAction::ToggleMaximize {
                    app_id: AppId::Terminal,
                },
            );
        }

        let window = state.window(AppId::Terminal).expect("terminal");
        assert!(!window.is_maximized);
        assert_eq!(window.rect(), before);
        assert_eq!(state.frame_rect(window), before);
    }

    #[test]
    fn maximized_window_fills_viewport_below_menu_bar() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Terminal,
            },
        );

        let window = state.window(AppId::Terminal).expect("terminal");
        let frame = state.frame_rect(window);
        assert_eq!((frame.x, frame.y, frame.w, frame.h), (0, 32, 1280, 768));
    }

    #[test]
    fn maximize_of_background_window_brings_it_forward() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        open(&mut state, &mut interaction, AppId::Memo);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Terminal,
            },
        );

        assert_eq!(z_of(&state, AppId::Terminal), 12);
        assert_eq!(state.active_window_id(), Some(AppId::Terminal));
    }

    #[test]
    fn resize_clamps_to_minimums() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                app_id: AppId::Terminal,
                size: Size {
                    width: 12,
                    height: -40,
                },
            },
        );

        assert_eq!(
            state.window(AppId::Terminal).expect("terminal").size,
            Size {
                width: 300,
                height: 200
            }
        );
    }

    #[test]
    fn close_then_open_reseeds_defaults() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DragEnd {
                app_id: AppId::Terminal,
                position: Position { x: 5, y: 60 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Terminal,
            },
        );
        assert!(state.window(AppId::Terminal).is_none());
        assert_eq!(state.active_window_id(), None);

        open(&mut state, &mut interaction, AppId::Terminal);

        let window = state.window(AppId::Terminal).expect("terminal");
        assert_eq!(window.position, Position { x: 200, y: 250 });
    }

    #[test]
    fn unknown_window_is_rejected_without_mutation() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        let before = state.clone();

        for action in [
            DesktopAction::CloseWindow {
                app_id: AppId::Memo,
            },
            DesktopAction::FocusWindow {
                app_id: AppId::Memo,
            },
            DesktopAction::MinimizeWindow {
                app_id: AppId::Memo,
            },
            DesktopAction::ToggleMaximize {
                app_id: AppId::Memo,
            },
            DesktopAction::ResizeWindow {
                app_id: AppId::Memo,
                size: Size {
                    width: 400,
                    height: 400,
                },
            },
        ] {
            let result = reduce_desktop(&mut state, &mut interaction, action);
            assert_eq!(result, Err(ReducerError::WindowNotFound(AppId::Memo)));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn drag_gesture_moves_window_and_releases_listeners() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::AcquireGesture(GestureKind::Move)]);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );
        assert_eq!(
            state.window(AppId::Terminal).expect("terminal").position,
            Position { x: 225, y: 290 }
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove {
                pointer: PointerPosition { x: 40, y: 60 },
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::ReleaseGesture]);
        assert_eq!(interaction, InteractionState::default());
        assert_eq!(
            state.window(AppId::Terminal).expect("terminal").position,
            Position { x: 230, y: 300 }
        );
    }

    #[test]
    fn resize_gesture_applies_edge_rules() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Terminal,
                edge: ResizeEdge::West,
                pointer: PointerPosition { x: 200, y: 300 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 150, y: 999 },
            },
        );
        let effects = reduce(&mut state, &mut interaction, DesktopAction::EndResize);

        let window = state.window(AppId::Terminal).expect("terminal");
        assert_eq!(
            window.size,
            Size {
                width: 650,
                height: 400
            }
        );
        assert_eq!(window.position, Position { x: 150, y: 250 });
        assert_eq!(effects, vec![RuntimeEffect::ReleaseGesture]);
    }

    #[test]
    fn gesture_updates_without_session_are_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        let before = state.clone();

        for action in [
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 1, y: 1 },
            },
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 1, y: 1 },
            },
            DesktopAction::EndResize,
            DesktopAction::CancelGesture,
        ] {
            assert!(reduce(&mut state, &mut interaction, action).is_empty());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn gestures_do_not_start_on_maximized_or_compact_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Terminal,
            },
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Terminal,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert!(effects.is_empty());
        assert_eq!(interaction.active_gesture(), None);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Terminal,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewport {
                viewport: Viewport {
                    width: 390,
                    height: 844,
                },
            },
        );
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert!(effects.is_empty());
        assert_eq!(interaction.active_gesture(), None);
    }

    #[test]
    fn maximized_window_ignores_drag_end_and_resize() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        let before = state.window(AppId::Terminal).expect("terminal").rect();
        let maximize = DesktopAction::ToggleMaximize {
            app_id: AppId::Terminal,
        };

        reduce(&mut state, &mut interaction, maximize.clone());
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                app_id: AppId::Terminal,
                size: Size {
                    width: 900,
                    height: 900,
                },
            },
        );
        assert!(effects.is_empty());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DragEnd {
                app_id: AppId::Terminal,
                position: Position { x: 5, y: 5 },
            },
        );
        reduce(&mut state, &mut interaction, maximize);

        assert_eq!(state.window(AppId::Terminal).expect("terminal").rect(), before);
    }

    #[test]
    fn compact_layout_ignores_drag_end_and_resize() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        let before = state.window(AppId::Terminal).expect("terminal").rect();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewport {
                viewport: Viewport {
                    width: 400,
                    height: 800,
                },
            },
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                app_id: AppId::Terminal,
                size: Size {
                    width: 1000,
                    height: 1000,
                },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DragEnd {
                app_id: AppId::Terminal,
                position: Position { x: 40, y: 40 },
            },
        );

        assert_eq!(state.window(AppId::Terminal).expect("terminal").rect(), before);
    }

    #[test]
    fn maximize_of_minimized_window_is_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Terminal,
            },
        );
        let before = state.clone();

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::Terminal,
            },
        );

        assert_eq!(state, before);
        assert!(!state.window(AppId::Terminal).expect("terminal").is_maximized);
    }

    #[test]
    fn closing_window_mid_gesture_releases_listeners() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Terminal,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Terminal,
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::ReleaseGesture]);
        assert_eq!(interaction.active_gesture(), None);
    }

    #[test]
    fn cancel_gesture_keeps_last_applied_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: -20, y: 5 },
            },
        );

        let effects = reduce(&mut state, &mut interaction, DesktopAction::CancelGesture);

        assert_eq!(effects, vec![RuntimeEffect::ReleaseGesture]);
        assert_eq!(
            state.window(AppId::Terminal).expect("terminal").position,
            Position { x: 180, y: 255 }
        );
    }

    #[derive(Debug, PartialEq)]
    struct WindowStateGeometry {
        position: Position,
        size: Size,
        is_minimized: bool,
        is_maximized: bool,
    }

    impl WindowStateGeometry {
        fn of(window: &crate::model::WindowState) -> Self {
            Self {
                position: window.position,
                size: window.size,
                is_minimized: window.is_minimized,
                is_maximized: window.is_maximized,
            }
        }
    }
}
