use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use crate::nav::NavEvent;
use crate::state::AppState;

/// How long the branding panel stays up before routing.
const SPLASH_DURATION_MS: u64 = 1500;

#[component]
pub fn SplashScreen() -> Element {
    let mut app_state = use_context::<Signal<AppState>>();

    // The delay suspends only this screen; after it elapses the router
    // decides between setup and dashboard from the stored configuration.
    use_future(move || async move {
        sleep(Duration::from_millis(SPLASH_DURATION_MS)).await;

        let has_url = app_state
            .read()
            .dashboard_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        app_state.write().nav.apply(NavEvent::SplashFinished { has_url });
    });

    rsx! {
        div {
            style: "flex: 1; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, #e53935, #ff7043);",

            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 10px;",

                div {
                    style: "width: 96px; height: 96px; border-radius: 50%; background: rgba(255,255,255,0.22); display: flex; align-items: center; justify-content: center; font-size: 48px;",
                    "🔥"
                }
                span {
                    style: "font-size: 28px; font-weight: 600; color: white; margin-top: 12px;",
                    "Fire Detector"
                }
                span {
                    style: "font-size: 14px; color: rgba(255,255,255,0.9);",
                    "Fire detection system"
                }
            }
        }
    }
}
