//! Window-manager transition helpers used by the desktop reducer.
//!
//! Every function here assumes the caller already verified the target window exists when it
//! returns `()`. Lookups that may miss return `bool` so the reducer can reject the action before
//! anything is mutated.

use crate::apps::{app_descriptor, AppDescriptor};
use crate::model::{
    AppId, DesktopState, Position, ResizeEdge, Size, Viewport, WindowRect, WindowState,
};

/// Bounded, wrapping source of stacking values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZIndexCounter {
    floor: u32,
    ceiling: u32,
    next: u32,
}

impl ZIndexCounter {
    pub fn new(floor: u32, ceiling: u32) -> Self {
        Self {
            floor,
            ceiling: ceiling.max(floor),
            next: floor,
        }
    }

    /// Returns the current value and advances, wrapping to the floor after the ceiling.
    pub fn next_z_index(&mut self) -> u32 {
        let current = self.next;
        self.next = if current >= self.ceiling {
            self.floor
        } else {
            current + 1
        };
        current
    }
}

impl DesktopState {
    pub(crate) fn window_mut(&mut self, app_id: AppId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| w.id == app_id)
    }

    fn raise(&mut self, app_id: AppId) {
        let z_index = self.z_counter.next_z_index();
        if let Some(window) = self.window_mut(app_id) {
            window.z_index = z_index;
        }
        self.active_window = Some(app_id);
    }

    /// Creates, restores, or raises the window for `descriptor`.
    pub(crate) fn open_window(&mut self, descriptor: &AppDescriptor) {
        let app_id = descriptor.app_id;
        if let Some(window) = self.window_mut(app_id) {
            window.is_minimized = false;
            self.raise(app_id);
            return;
        }

        let z_index = self.z_counter.next_z_index();
        let position = descriptor
            .default_position
            .unwrap_or(self.config.fallback_position);
        let size = descriptor.default_size.unwrap_or(self.config.fallback_size);
        self.windows.push(WindowState {
            id: app_id,
            is_open: true,
            is_minimized: false,
            is_maximized: false,
            z_index,
            position,
            size,
        });
        self.active_window = Some(app_id);
    }

    /// Removes the window. Returns `false` when no such window exists.
    pub(crate) fn close_window(&mut self, app_id: AppId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != app_id);
        if self.windows.len() == before {
            return false;
        }
        if self.active_window == Some(app_id) {
            self.active_window = None;
        }
        true
    }

    /// Brings an open, visible window to front. Returns `true` when stacking changed.
    pub(crate) fn focus_window(&mut self, app_id: AppId) -> bool {
        if self.active_window == Some(app_id) {
            return false;
        }
        match self.window(app_id) {
            Some(window) if !window.is_minimized => {
                self.raise(app_id);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn minimize_window(&mut self, app_id: AppId) {
        if let Some(window) = self.window_mut(app_id) {
            window.is_minimized = true;
        }
        if self.active_window == Some(app_id) {
            self.active_window = None;
        }
    }

    /// Flips the maximized flag and focuses the window. Minimized windows are left alone.
    pub(crate) fn toggle_maximize(&mut self, app_id: AppId) {
        let Some(window) = self.window_mut(app_id) else {
            return;
        };
        if window.is_minimized {
            return;
        }
        window.is_maximized = !window.is_maximized;
        self.focus_window(app_id);
    }

    pub(crate) fn commit_position(&mut self, app_id: AppId, position: Position) {
        if let Some(window) = self.window_mut(app_id) {
            window.position = position;
        }
    }

    pub(crate) fn commit_size(&mut self, app_id: AppId, size: Size) {
        let (min_w, min_h) = (self.config.min_window_width, self.config.min_window_height);
        if let Some(window) = self.window_mut(app_id) {
            window.size = size.clamped_min(min_w, min_h);
        }
    }

    /// Returns `true` when drag and resize gestures may start on `app_id`.
    pub(crate) fn accepts_gestures(&self, app_id: AppId) -> bool {
        !self.is_compact_layout()
            && self
                .window(app_id)
                .map(|w| !w.is_maximized && !w.is_minimized)
                .unwrap_or(false)
    }

    /// Windows the shell mounts, in opening order. Minimized windows and ids without a registry
    /// entry are left out; stacking comes from each window's z-index.
    pub fn rendered_window_ids(&self) -> Vec<AppId> {
        self.rendered_window_ids_by(|app_id| app_descriptor(app_id).is_some())
    }

    fn rendered_window_ids_by(&self, has_descriptor: impl Fn(AppId) -> bool) -> Vec<AppId> {
        self.windows
            .iter()
            .filter(|window| !window.is_minimized && has_descriptor(window.id))
            .map(|window| window.id)
            .collect()
    }

    /// On-screen frame for a window, honoring maximize and the compact layout.
    pub fn frame_rect(&self, window: &WindowState) -> WindowRect {
        if window.is_maximized || self.is_compact_layout() {
            return fill_rect(self.viewport, self.config.menu_bar_height);
        }
        window.rect()
    }
}

/// Viewport-filling frame below the menu bar.
pub fn fill_rect(viewport: Viewport, menu_bar_height: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: menu_bar_height,
        w: viewport.width.max(0),
        h: (viewport.height - menu_bar_height).max(0),
    }
}

/// Applies a resize delta for `edge`, clamping each dimension to its minimum.
///
/// West and north handles move the position by the amount the size actually grew so the
/// opposite edge stays put.
pub fn resize_geometry(
    position: Position,
    size: Size,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min: Size,
) -> (Position, Size) {
    let mut width = size.width;
    let mut height = size.height;
    if edge.includes_east() {
        width += dx;
    }
    if edge.includes_west() {
        width -= dx;
    }
    if edge.includes_south() {
        height += dy;
    }
    if edge.includes_north() {
        height -= dy;
    }
    let resized = Size { width, height }.clamped_min(min.width, min.height);

    let mut moved = position;
    if edge.includes_west() {
        moved.x -= resized.width - size.width;
    }
    if edge.includes_north() {
        moved.y -= resized.height - size.height;
    }
    (moved, resized)
}

/// Splits icons into left and right columns; the left column takes the odd one out.
pub fn split_icon_columns<T: Copy>(items: &[T]) -> (Vec<T>, Vec<T>) {
    let midpoint = items.len().div_ceil(2);
    (items[..midpoint].to_vec(), items[midpoint..].to_vec())
}
