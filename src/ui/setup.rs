use dioxus::prelude::*;
use tracing::{error, info};

use super::components::{Card, TopBar};
use crate::nav::NavEvent;
use crate::state::AppState;

/// Client-side gate applied before the store write. Only the scheme prefix
/// is checked; the store itself accepts anything.
fn is_valid_url(input: &str) -> bool {
    input.starts_with("http")
}

#[component]
pub fn SetupScreen() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();

    let mut url = use_signal(|| {
        app_state
            .read()
            .dashboard_url
            .clone()
            .unwrap_or_default()
    });
    let mut show_error = use_signal(|| false);

    // Back is only offered when setup was reached from the dashboard, i.e. a
    // URL was already configured before entering this screen.
    let show_back = app_state.read().nav.can_go_back();

    let on_save = move |_| {
        let candidate = url();
        if !is_valid_url(&candidate) {
            show_error.set(true);
            return;
        }

        info!("Saving dashboard URL");
        let store = app_state.read().config.clone();
        spawn(async move {
            // Navigation waits for the write so the dashboard never reads a
            // stale or empty URL.
            match store.save_dashboard_url(&candidate).await {
                Ok(()) => {
                    let mut state = app_state.write();
                    state.dashboard_url = Some(candidate);
                    state.nav.apply(NavEvent::UrlSaved);
                }
                Err(e) => error!("Failed to save dashboard URL: {}", e),
            }
        });
    };

    rsx! {
        if show_back {
            TopBar {
                title: "Fire Detector",
                subtitle: "Dashboard URL setup",
                on_back: move |_| {
                    app_state.write().nav.apply(NavEvent::Back);
                },
            }
        } else {
            TopBar {
                title: "Fire Detector",
                subtitle: "Dashboard URL setup",
            }
        }

        div {
            style: "flex: 1; padding: 16px; background: #f7f7f7; overflow: auto;",

            Card {
                span { style: "font-size: 15px; font-weight: 600;", "Web dashboard URL" }
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: #888;",
                    "Enter the URL of the fire-detection dashboard."
                }

                input {
                    r#type: "text",
                    value: "{url}",
                    placeholder: "https://example.com/dashboard",
                    style: "width: 100%; box-sizing: border-box; margin-top: 16px; padding: 10px 12px; border: 1px solid #ccc; border-radius: 6px; font-size: 14px;",
                    oninput: move |evt| {
                        url.set(evt.value());
                        show_error.set(false);
                    },
                }

                if show_error() {
                    p {
                        style: "margin: 6px 0 0 0; font-size: 12px; color: #dc3545;",
                        "Enter a valid URL."
                    }
                }

                button {
                    style: "width: 100%; margin-top: 16px; padding: 12px; border: none; border-radius: 8px; background: linear-gradient(90deg, #e53935, #ff7043); color: white; font-size: 14px; font-weight: bold; cursor: pointer;",
                    onclick: on_save,
                    "Save"
                }
            }
        }
    }
}
