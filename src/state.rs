use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::{self, ConfigStore};
use crate::nav::Nav;
use crate::push::{PushEvent, TokenRegistrar};

/// A single entry on the alarm screen.
#[derive(Debug, Clone, PartialEq)]
pub struct AlarmItem {
    /// Unique within a displayed list.
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Preformatted timestamp, e.g. "2024-12-12 14:23".
    pub time: String,
}

/// Placeholder feed until a real alert source is wired in.
pub fn sample_alarms() -> Vec<AlarmItem> {
    vec![AlarmItem {
        id: 1,
        title: "Fire detected".to_string(),
        message: "A fire has been detected.".to_string(),
        time: "2024-12-12 14:23".to_string(),
    }]
}

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Persisted configuration service
    pub config: Arc<ConfigStore>,
    /// Push token registrar
    pub registrar: TokenRegistrar,
    /// Handle into the push-event channel, set once the listener is wired
    pub push_tx: Option<mpsc::Sender<PushEvent>>,
    /// Navigation state machine
    pub nav: Nav,
    /// Mirror of the stored dashboard URL, kept live by the watch task
    pub dashboard_url: Option<String>,
    /// Alarm entries shown on the alarm screen
    pub alarms: Vec<AlarmItem>,
}

impl Default for AppState {
    fn default() -> Self {
        // No disk access here; the app shell loads the persisted value off
        // the render path and mirrors it in.
        Self {
            config: Arc::new(ConfigStore::open(config::default_path())),
            registrar: TokenRegistrar::new(),
            push_tx: None,
            nav: Nav::new(),
            dashboard_url: None,
            alarms: sample_alarms(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
