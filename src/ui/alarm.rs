use dioxus::prelude::*;

use super::components::{EmptyState, IconButton, TopBar};
use crate::nav::NavEvent;
use crate::state::{AlarmItem, AppState};

#[component]
pub fn AlarmScreen() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let alarms = app_state.read().alarms.clone();

    rsx! {
        TopBar {
            title: "Notifications",
            IconButton {
                label: "✕",
                on_press: move |_| {
                    app_state.write().nav.apply(NavEvent::Back);
                },
            }
        }

        AlarmList {
            alarms,
            on_select: move |_| {
                app_state.write().nav.apply(NavEvent::AlarmSelected);
            },
        }
    }
}

/// List body: placeholder for an empty feed, one row per entry otherwise.
#[component]
fn AlarmList(alarms: Vec<AlarmItem>, on_select: EventHandler<()>) -> Element {
    rsx! {
        if alarms.is_empty() {
            EmptyState { message: "No notifications" }
        } else {
            div {
                style: "flex: 1; overflow: auto; background: white;",
                for alarm in alarms {
                    AlarmRow {
                        key: "{alarm.id}",
                        alarm,
                        on_press: move |_| on_select.call(()),
                    }
                }
            }
        }
    }
}

#[component]
fn AlarmRow(alarm: AlarmItem, on_press: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "padding: 14px 16px; border-bottom: 1px solid #eee; cursor: pointer;",
            onclick: move |_| on_press.call(()),

            div { style: "font-size: 14px; font-weight: 600; color: #333;", "{alarm.title}" }
            div { style: "margin-top: 4px; font-size: 13px; color: #888;", "{alarm.message}" }
            div { style: "margin-top: 6px; font-size: 11px; color: #aaa;", "{alarm.time}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::sample_alarms;

    #[component]
    fn Harness(alarms: Vec<AlarmItem>) -> Element {
        rsx! {
            AlarmList { alarms, on_select: move |_| {} }
        }
    }

    fn render_list(alarms: Vec<AlarmItem>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { alarms });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn empty_feed_shows_the_placeholder_and_no_rows() {
        let html = render_list(Vec::new());
        assert!(html.contains("No notifications"));
        assert!(!html.contains("Fire detected"));
    }

    #[test]
    fn single_item_renders_exactly_one_row() {
        let html = render_list(sample_alarms());
        assert_eq!(html.matches("Fire detected").count(), 1);
        assert!(html.contains("2024-12-12 14:23"));
        assert!(!html.contains("No notifications"));
    }
}
