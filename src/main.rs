mod config;
mod nav;
mod push;
mod state;
mod ui;

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use tokio::sync::mpsc;
use tracing::debug;

use push::PushEvent;
use state::AppState;

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("fire_detector_client=debug,info")
        .init();

    // Launch the Dioxus app with custom window title
    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("Fire Detector")))
        .launch(App);
}

#[component]
fn App() -> Element {
    // Initialize application state
    use_context_provider(|| Signal::new(AppState::new()));
    let mut app_state = use_context::<Signal<AppState>>();

    // Wire the push boundary and mirror configuration changes into the UI state
    use_future(move || async move {
        // Pull the persisted configuration in without touching the render
        // path; the splash delay dwarfs this read.
        let store = app_state.read().config.clone();
        store.load().await;
        let loaded = store.dashboard_url();
        app_state.write().dashboard_url = loaded;

        let registrar = app_state.read().registrar.clone();
        let (push_tx, push_rx) = mpsc::channel(16);
        // The sender stays in state for the app's lifetime; the external
        // messaging subsystem delivers token/message events through it.
        app_state.write().push_tx = Some(push_tx);
        spawn(push::run_push_listener(push_rx, registrar));

        match std::env::var("FIRE_PUSH_TOKEN") {
            Ok(token) if !token.trim().is_empty() => {
                let events = app_state.read().push_tx.clone();
                if let Some(events) = events {
                    let _ = events.send(PushEvent::TokenRotated(token)).await;
                }
            }
            _ => debug!("No push token issued at startup"),
        }

        config_watch_task(app_state).await;
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif; margin: 0; padding: 0;",
            ui::Screen {}
        }
    }
}

/// Background task that keeps the UI state in sync with the config store.
async fn config_watch_task(mut app_state: Signal<AppState>) {
    debug!("Config watch task started");

    let store = app_state.read().config.clone();
    let mut updates = store.subscribe();

    while updates.changed().await.is_ok() {
        let url = updates.borrow().clone();
        app_state.write().dashboard_url = url;
    }

    debug!("Config watch task ended");
}
