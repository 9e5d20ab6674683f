use dioxus::prelude::*;

use super::components::{IconButton, TopBar};
use crate::nav::NavEvent;
use crate::state::AppState;

#[component]
pub fn DashboardScreen() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let dashboard_url = app_state.read().dashboard_url.clone().unwrap_or_default();

    rsx! {
        TopBar {
            title: "Fire Detector",
            IconButton {
                label: "🔔",
                on_press: move |_| {
                    app_state.write().nav.apply(NavEvent::AlarmsPressed);
                },
            }
            IconButton {
                label: "⚙",
                on_press: move |_| {
                    app_state.write().nav.apply(NavEvent::SettingsPressed);
                },
            }
        }

        // The dashboard is whatever the configured URL serves: scripting and
        // DOM storage run in the host webview, navigation is not intercepted,
        // and there is no offline fallback.
        iframe {
            src: "{dashboard_url}",
            style: "flex: 1; width: 100%; border: none;",
        }
    }
}
