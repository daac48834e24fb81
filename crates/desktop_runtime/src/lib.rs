//! Desktop window manager and shell for the portfolio site.
//!
//! [`DesktopProvider`] owns the reducer-backed [`DesktopState`]; [`DesktopShell`] renders the menu
//! bar, launcher columns, and window stack from it. All window transitions go through
//! [`reduce_desktop`].

pub mod apps;
pub mod components;
pub mod config;
mod effect_executor;
pub mod gesture;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use apps::{app_descriptor, app_registry, AppDescriptor};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use window_manager::{fill_rect, resize_geometry, split_icon_columns, ZIndexCounter};
