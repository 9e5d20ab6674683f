pub mod registrar;

pub use registrar::TokenRegistrar;

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info};

/// Events delivered by the external push-messaging subsystem.
#[derive(Debug, Clone)]
pub enum PushEvent {
    /// A new or rotated registration token for this install. Tokens may
    /// rotate at any time and are never persisted locally.
    TokenRotated(String),
    /// An inbound notification or data message. Currently logged only, not
    /// surfaced to the alarm screen.
    Message {
        title: Option<String>,
        body: Option<String>,
        data: HashMap<String, String>,
    },
}

/// Consume push events until the channel closes.
///
/// Token rotations are forwarded to the registrar fire-and-forget: each
/// issuance is sent at most once, with no de-duplication and no ordering
/// between rapid rotations.
pub async fn run_push_listener(mut events: mpsc::Receiver<PushEvent>, registrar: TokenRegistrar) {
    info!("Push listener started");

    while let Some(event) = events.recv().await {
        match event {
            PushEvent::TokenRotated(token) => {
                debug!("New registration token issued");
                registrar.register(token);
            }
            PushEvent::Message { title, body, data } => {
                info!(?title, ?body, ?data, "Push message received");
            }
        }
    }

    info!("Push listener stopped");
}
