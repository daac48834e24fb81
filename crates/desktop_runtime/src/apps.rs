//! Static app registry and the id → view dispatch for hosted sub-applications.

mod static_apps;

use desktop_app_memo::MemoApp;
use desktop_app_terminal::TerminalApp;
use leptos::*;
use system_ui::IconName;

use crate::host::window_primary_input_dom_id;
use crate::model::{AppId, Position, Size};

pub use static_apps::{calculate_store_price, StoreProduct, STORE_PRODUCTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub title: &'static str,
    pub icon: IconName,
    pub default_position: Option<Position>,
    pub default_size: Option<Size>,
}

const fn geometry(x: i32, y: i32, width: i32, height: i32) -> (Option<Position>, Option<Size>) {
    (Some(Position { x, y }), Some(Size { width, height }))
}

const fn descriptor(
    app_id: AppId,
    title: &'static str,
    icon: IconName,
    (default_position, default_size): (Option<Position>, Option<Size>),
) -> AppDescriptor {
    AppDescriptor {
        app_id,
        title,
        icon,
        default_position,
        default_size,
    }
}

// Order matters: the first half fills the left icon column.
const APP_REGISTRY: [AppDescriptor; 10] = [
    descriptor(AppId::Welcome, "About", IconName::Layout, geometry(100, 80, 800, 600)),
    descriptor(AppId::ProductOs, "Product OS", IconName::Box, geometry(50, 50, 1200, 700)),
    descriptor(AppId::Terminal, "Terminal", IconName::Terminal, geometry(200, 250, 600, 400)),
    descriptor(AppId::Write, "Write", IconName::PenTool, geometry(150, 50, 1400, 850)),
    descriptor(AppId::Store, "Store", IconName::ShoppingBag, geometry(120, 90, 900, 640)),
    descriptor(AppId::Memo, "Memo", IconName::StickyNote, geometry(800, 100, 600, 600)),
    descriptor(AppId::Videos, "Videos", IconName::Video, geometry(400, 200, 600, 450)),
    descriptor(AppId::Comics, "Comics", IconName::BookOpen, geometry(500, 100, 400, 600)),
    descriptor(AppId::Travel, "Travel", IconName::Plane, geometry(100, 300, 350, 500)),
    descriptor(AppId::Learn, "Learn", IconName::GraduationCap, geometry(600, 150, 500, 500)),
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn app_descriptor(app_id: AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == app_id)
}

/// Apps linked from the menu bar quick-launch strip.
pub fn menu_bar_shortcuts() -> [AppId; 3] {
    [AppId::ProductOs, AppId::Write, AppId::Videos]
}

pub fn render_window_contents(app_id: AppId) -> View {
    match app_id {
        AppId::Welcome => static_apps::welcome_view(),
        AppId::ProductOs => static_apps::product_os_view(),
        AppId::Terminal => {
            view! { <TerminalApp input_id=window_primary_input_dom_id(app_id) /> }.into_view()
        }
        AppId::Write => static_apps::write_view(),
        AppId::Memo => {
            view! { <MemoApp input_id=window_primary_input_dom_id(app_id) /> }.into_view()
        }
        AppId::Videos => static_apps::videos_view(),
        AppId::Comics => static_apps::comics_view(),
        AppId::Travel => static_apps::travel_view(),
        AppId::Learn => static_apps::learn_view(),
        AppId::Store => static_apps::store_view(),
    }
}
