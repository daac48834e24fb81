use desktop_runtime::{
    reduce_desktop, AppId, DesktopAction, DesktopState, GestureKind, InteractionState,
    PointerPosition, ResizeEdge, RuntimeEffect, Size, Viewport,
};
use pretty_assertions::assert_eq;

fn dispatch(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    reduce_desktop(state, interaction, action).expect("action accepted")
}

#[test]
fn open_focus_resize_minimize_reopen() {
    let mut state = DesktopState::default();
    let mut ui = InteractionState::default();

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::OpenApp {
            app_id: AppId::Terminal,
        },
    );
    assert_eq!(state.window(AppId::Terminal).map(|w| w.z_index), Some(10));
    assert_eq!(state.active_window_id(), Some(AppId::Terminal));

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::OpenApp {
            app_id: AppId::Memo,
        },
    );
    assert_eq!(state.window(AppId::Memo).map(|w| w.z_index), Some(11));
    assert_eq!(state.active_window_id(), Some(AppId::Memo));

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::FocusWindow {
            app_id: AppId::Terminal,
        },
    );
    assert_eq!(state.window(AppId::Terminal).map(|w| w.z_index), Some(12));

    let effects = dispatch(
        &mut state,
        &mut ui,
        DesktopAction::BeginResize {
            app_id: AppId::Terminal,
            edge: ResizeEdge::SouthEast,
            pointer: PointerPosition { x: 800, y: 650 },
        },
    );
    assert_eq!(effects, vec![RuntimeEffect::AcquireGesture(GestureKind::Resize)]);
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::UpdateResize {
            pointer: PointerPosition { x: 850, y: 680 },
        },
    );
    dispatch(&mut state, &mut ui, DesktopAction::EndResize);
    let resized = Size {
        width: 650,
        height: 430,
    };
    assert_eq!(state.window(AppId::Terminal).map(|w| w.size), Some(resized));
    // Focused on gesture start already, so no extra raise.
    assert_eq!(state.window(AppId::Terminal).map(|w| w.z_index), Some(12));

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::MinimizeWindow {
            app_id: AppId::Terminal,
        },
    );
    assert_eq!(state.rendered_window_ids(), vec![AppId::Memo]);
    assert_eq!(state.window(AppId::Terminal).map(|w| w.size), Some(resized));

    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::OpenApp {
            app_id: AppId::Terminal,
        },
    );
    let terminal = state.window(AppId::Terminal).expect("terminal");
    assert!(!terminal.is_minimized);
    assert_eq!(terminal.z_index, 13);
    assert_eq!(terminal.size, resized);
    assert_eq!(state.active_window_id(), Some(AppId::Terminal));
}

#[test]
fn focus_raises_z_without_reordering_rendered_windows() {
    let mut state = DesktopState::default();
    let mut ui = InteractionState::default();
    for app_id in [AppId::Welcome, AppId::Terminal, AppId::Learn] {
        dispatch(&mut state, &mut ui, DesktopAction::OpenApp { app_id });
    }
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::FocusWindow {
            app_id: AppId::Welcome,
        },
    );

    assert_eq!(
        state.rendered_window_ids(),
        vec![AppId::Welcome, AppId::Terminal, AppId::Learn]
    );
    let z = |app_id| state.window(app_id).map(|w| w.z_index);
    assert_eq!(
        (z(AppId::Terminal), z(AppId::Learn), z(AppId::Welcome)),
        (Some(11), Some(12), Some(13))
    );
}

#[test]
fn compact_viewport_forces_full_screen_frames() {
    let mut state = DesktopState::default();
    let mut ui = InteractionState::default();
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::OpenApp {
            app_id: AppId::Learn,
        },
    );
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::SetViewport {
            viewport: Viewport {
                width: 600,
                height: 900,
            },
        },
    );

    let learn = state.window(AppId::Learn).expect("learn");
    let frame = state.frame_rect(learn);
    assert_eq!((frame.x, frame.y, frame.w, frame.h), (0, 32, 600, 868));
    // Stored geometry survives for when the viewport grows again.
    assert_eq!(
        learn.size,
        Size {
            width: 500,
            height: 500
        }
    );
}

#[test]
fn shrinking_into_compact_layout_ends_active_drag() {
    let mut state = DesktopState::default();
    let mut ui = InteractionState::default();
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::OpenApp {
            app_id: AppId::Travel,
        },
    );
    dispatch(
        &mut state,
        &mut ui,
        DesktopAction::BeginMove {
            app_id: AppId::Travel,
            pointer: PointerPosition { x: 0, y: 0 },
        },
    );

    let effects = dispatch(
        &mut state,
        &mut ui,
        DesktopAction::SetViewport {
            viewport: Viewport {
                width: 500,
                height: 700,
            },
        },
    );

    assert_eq!(effects, vec![RuntimeEffect::ReleaseGesture]);
    assert_eq!(ui, InteractionState::default());
}
