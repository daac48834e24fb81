use std::time::Duration;

use leptos::*;
use system_ui::{Button, ButtonVariant, Icon, IconName, IconSize, MenuBar, MenuBarSection};

use super::use_desktop_runtime;
use crate::{apps, model::AppId, reducer::DesktopAction};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuClockSnapshot {
    /// 0 is Sunday.
    weekday: u32,
    /// 1 is January.
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl MenuClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    /// Formats like `Sat Oct 18 14:05`.
    fn label(self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("");
        let month = self
            .month
            .checked_sub(1)
            .and_then(|index| MONTHS.get(index as usize))
            .copied()
            .unwrap_or("");
        format!(
            "{weekday} {month} {} {:02}:{:02}",
            self.day, self.hour, self.minute
        )
    }
}

#[component]
fn QuickLink(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let title = apps::app_descriptor(app_id)
        .map(|descriptor| descriptor.title)
        .unwrap_or_else(|| app_id.slug());

    view! {
        <Button
            variant=ButtonVariant::Quiet
            ui_slot="quick-link"
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::OpenApp { app_id });
            })
        >
            {title}
        </Button>
    }
}

#[component]
pub(super) fn DesktopMenuBar(height: i32) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_now = create_rw_signal(MenuClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(MenuClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <MenuBar style=format!("height:{height}px;")>
            <MenuBarSection ui_slot="brand">
                <Button
                    variant=ButtonVariant::Quiet
                    ui_slot="brand"
                    aria_label="About this site"
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::OpenApp {
                            app_id: AppId::Welcome,
                        });
                    })
                >
                    "Joey" <span data-ui-slot="accent">"connects"</span> ".os"
                </Button>
            </MenuBarSection>
            <MenuBarSection ui_slot="quick-links">
                {apps::menu_bar_shortcuts()
                    .into_iter()
                    .map(|app_id| view! { <QuickLink app_id /> })
                    .collect_view()}
            </MenuBarSection>
            <MenuBarSection ui_slot="status">
                <Icon icon=IconName::Wifi size=IconSize::Sm />
                <Icon icon=IconName::Battery size=IconSize::Sm />
                <time data-ui-slot="clock">{move || clock_now.get().label()}</time>
            </MenuBarSection>
        </MenuBar>
    }
}
