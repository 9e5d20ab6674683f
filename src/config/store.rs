use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

/// On-disk settings shape. A single key, replaced wholesale on every save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Settings {
    dashboard_url: Option<String>,
}

/// Persisted dashboard configuration with live observation.
///
/// Consumers either poll [`dashboard_url`](ConfigStore::dashboard_url) or
/// hold a [`subscribe`](ConfigStore::subscribe) receiver. Every save is
/// visible to receivers before `save_dashboard_url` returns to its caller,
/// so navigation gated on the save never reads a stale value.
///
/// The store performs no URL validation; the `http` prefix gate belongs to
/// the setup screen.
pub struct ConfigStore {
    path: PathBuf,
    tx: watch::Sender<Option<String>>,
}

impl ConfigStore {
    /// Open the store backed by `path`.
    ///
    /// No disk access happens here, so construction is safe on the UI event
    /// loop; call [`load`](ConfigStore::load) to pull the persisted value in.
    pub fn open(path: PathBuf) -> Self {
        let (tx, _) = watch::channel(None);
        Self { path, tx }
    }

    /// Read the persisted value and publish it to observers.
    ///
    /// A missing file is the unset state, not an error. An unreadable or
    /// malformed file is logged and likewise treated as unset; the next save
    /// replaces it.
    pub async fn load(&self) {
        let value = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => match serde_json::from_str::<Settings>(&raw) {
                Ok(settings) => settings.dashboard_url,
                Err(e) => {
                    warn!(
                        "Ignoring malformed settings file {}: {}",
                        self.path.display(),
                        e
                    );
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read settings file {}: {}", self.path.display(), e);
                None
            }
        };

        self.tx.send_replace(value);
    }

    /// The currently stored URL, or `None` if never set.
    pub fn dashboard_url(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    /// Live view of the stored URL. Receivers are notified on every save.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }

    /// Replace the stored URL and publish it to live observers.
    ///
    /// The file is written to a temporary sibling and renamed over the
    /// target, so a crash mid-save leaves the previous value intact.
    pub async fn save_dashboard_url(&self, url: &str) -> Result<()> {
        let settings = Settings {
            dashboard_url: Some(url.to_string()),
        };
        let raw = serde_json::to_vec_pretty(&settings).context("Failed to encode settings")?;

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create settings directory {}", dir.display()))?;
        }

        // Unique temp name per save so overlapping saves never interleave
        // writes into the same file before the rename.
        static SAVE_SUFFIX: AtomicU64 = AtomicU64::new(0);
        let tmp = self.path.with_extension(format!(
            "tmp-{}-{}",
            std::process::id(),
            SAVE_SUFFIX.fetch_add(1, Ordering::Relaxed)
        ));
        tokio::fs::write(&tmp, &raw)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        self.tx.send_replace(Some(url.to_string()));
        info!("Dashboard URL saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "fire-detector-{}-{}-{}.json",
            tag,
            std::process::id(),
            n
        ))
    }

    async fn open_loaded(path: PathBuf) -> ConfigStore {
        let store = ConfigStore::open(path);
        store.load().await;
        store
    }

    #[tokio::test]
    async fn missing_file_is_unset() {
        let store = open_loaded(temp_path("missing")).await;
        assert_eq!(store.dashboard_url(), None);
    }

    #[tokio::test]
    async fn malformed_file_is_unset() {
        let path = temp_path("malformed");
        std::fs::write(&path, b"not json").unwrap();

        let store = open_loaded(path.clone()).await;
        assert_eq!(store.dashboard_url(), None);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn save_then_read_round_trips() {
        let path = temp_path("roundtrip");
        let store = open_loaded(path.clone()).await;

        store
            .save_dashboard_url("http://dashboard.local/view")
            .await
            .unwrap();
        assert_eq!(
            store.dashboard_url(),
            Some("http://dashboard.local/view".to_string())
        );

        // A fresh store sees the persisted value.
        let reopened = open_loaded(path.clone()).await;
        assert_eq!(
            reopened.dashboard_url(),
            Some("http://dashboard.local/view".to_string())
        );

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn repeated_save_is_idempotent() {
        let path = temp_path("idempotent");
        let store = open_loaded(path.clone()).await;

        store.save_dashboard_url("http://a.example").await.unwrap();
        store.save_dashboard_url("http://a.example").await.unwrap();
        assert_eq!(store.dashboard_url(), Some("http://a.example".to_string()));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let path = temp_path("overwrite");
        let store = open_loaded(path.clone()).await;

        store.save_dashboard_url("http://old.example").await.unwrap();
        store.save_dashboard_url("http://new.example").await.unwrap();

        let reopened = open_loaded(path.clone()).await;
        assert_eq!(
            reopened.dashboard_url(),
            Some("http://new.example".to_string())
        );

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn observers_see_the_value_before_save_returns() {
        let path = temp_path("observe");
        let store = open_loaded(path.clone()).await;
        let mut rx = store.subscribe();

        assert_eq!(*rx.borrow(), None);
        store.save_dashboard_url("http://live.example").await.unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(
            *rx.borrow_and_update(),
            Some("http://live.example".to_string())
        );

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn overlapping_saves_leave_a_parseable_file() {
        let path = temp_path("concurrent");
        let store = open_loaded(path.clone()).await;

        let (a, b) = tokio::join!(
            store.save_dashboard_url("http://first.example"),
            store.save_dashboard_url("http://second.example"),
        );
        a.unwrap();
        b.unwrap();

        // Whichever rename landed last wins; the file is never a blend of
        // the two writes.
        let reopened = open_loaded(path.clone()).await;
        let url = reopened.dashboard_url().unwrap();
        assert!(url == "http://first.example" || url == "http://second.example");

        let _ = std::fs::remove_file(path);
    }
}
