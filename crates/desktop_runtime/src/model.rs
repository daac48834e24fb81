use serde::Deserialize;

use crate::config::DesktopConfig;
use crate::window_manager::ZIndexCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    Welcome,
    ProductOs,
    Terminal,
    Write,
    Memo,
    Videos,
    Comics,
    Travel,
    Learn,
    Store,
}

impl AppId {
    pub const ALL: [AppId; 10] = [
        Self::Welcome,
        Self::ProductOs,
        Self::Terminal,
        Self::Write,
        Self::Memo,
        Self::Videos,
        Self::Comics,
        Self::Travel,
        Self::Learn,
        Self::Store,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::ProductOs => "product_os",
            Self::Terminal => "terminal",
            Self::Write => "write",
            Self::Memo => "memo",
            Self::Videos => "videos",
            Self::Comics => "comics",
            Self::Travel => "travel",
            Self::Learn => "learn",
            Self::Store => "store",
        }
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

/// Rendered frame geometry in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn from_parts(position: Position, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }

    pub fn css(self, z_index: u32) -> String {
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            self.x, self.y, self.w, self.h, z_index
        )
    }
}

/// Browser viewport dimensions, including the menu bar strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub id: AppId,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub position: Position,
    pub size: Size,
}

impl WindowState {
    pub fn rect(&self) -> WindowRect {
        WindowRect::from_parts(self.position, self.size)
    }
}

/// Window state store. Only [`crate::reduce_desktop`] mutates it; the shell reads snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub(crate) windows: Vec<WindowState>,
    pub(crate) active_window: Option<AppId>,
    pub(crate) z_counter: ZIndexCounter,
    pub(crate) viewport: Viewport,
    pub(crate) config: DesktopConfig,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopState {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            windows: Vec::new(),
            active_window: None,
            z_counter: ZIndexCounter::new(config.z_index_floor, config.z_index_ceiling),
            viewport: Viewport::default(),
            config,
        }
    }

    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    pub fn window(&self, app_id: AppId) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.id == app_id)
    }

    pub fn active_window_id(&self) -> Option<AppId> {
        self.active_window
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Returns `true` when the viewport is below the compact breakpoint.
    pub fn is_compact_layout(&self) -> bool {
        self.viewport.width < self.config.compact_breakpoint
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn includes_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn includes_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn includes_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn includes_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub position_start: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub app_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub position_start: Position,
    pub size_start: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Move,
    Resize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn active_gesture(&self) -> Option<(AppId, GestureKind)> {
        if let Some(session) = self.dragging.as_ref() {
            return Some((session.app_id, GestureKind::Move));
        }
        self.resizing
            .as_ref()
            .map(|session| (session.app_id, GestureKind::Resize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_edges_combine_two_axes() {
        assert!(ResizeEdge::SouthEast.includes_south() && ResizeEdge::SouthEast.includes_east());
        assert!(ResizeEdge::NorthWest.includes_north() && ResizeEdge::NorthWest.includes_west());
        assert!(!ResizeEdge::East.includes_north() && !ResizeEdge::East.includes_south());
    }

    #[test]
    fn compact_layout_tracks_breakpoint() {
        let mut state = DesktopState::default();
        assert!(!state.is_compact_layout());
        state.viewport = Viewport {
            width: 767,
            height: 900,
        };
        assert!(state.is_compact_layout());
    }
}
