mod alarm;
mod components;
mod dashboard;
mod setup;
mod splash;

use dioxus::prelude::*;

use crate::nav::Route;
use crate::state::AppState;

#[component]
pub fn Screen() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let route = app_state.read().nav.current();

    match route {
        Route::Splash => rsx! { splash::SplashScreen {} },
        Route::Setup => rsx! { setup::SetupScreen {} },
        Route::Dashboard => rsx! { dashboard::DashboardScreen {} },
        Route::Alarm => rsx! { alarm::AlarmScreen {} },
    }
}
