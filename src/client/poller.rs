//! Polling Driver - periodic `/state` fetcher owning the snapshot slot.
//!
//! One tokio task ticks on a fixed interval and issues an independent GET
//! per tick. A successful, valid response replaces the committed snapshot
//! atomically; any failure leaves the slot untouched and the next tick
//! retries. The render path only ever reads the slot, never blocks on I/O.

use crate::model::config::AppConfig;
use crate::model::snapshot::{SnapshotError, StateSnapshot};
use reqwest::Client;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("state fetch failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("snapshot rejected: {0}")]
    Invalid(#[from] SnapshotError),
}

#[derive(Default)]
struct SlotState {
    last: Option<StateSnapshot>,
    fulfilled: bool,
}

/// Shared handle to the single mutable snapshot slot.
///
/// Replacement is one reference swap under the lock, so readers see either
/// the previous complete snapshot or the new complete one, never a mix.
#[derive(Clone, Default)]
pub struct SnapshotSlot {
    inner: Arc<Mutex<SlotState>>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the committed snapshot and mark the slot fulfilled.
    pub fn commit(&self, snapshot: StateSnapshot) {
        let mut s = self.inner.lock().unwrap();
        s.last = Some(snapshot);
        s.fulfilled = true;
    }

    /// Latest committed snapshot, if any fetch has succeeded yet.
    pub fn latest(&self) -> Option<StateSnapshot> {
        self.inner.lock().unwrap().last.clone()
    }

    /// False until the first successful fetch commits.
    pub fn is_fulfilled(&self) -> bool {
        self.inner.lock().unwrap().fulfilled
    }
}

pub struct StatePoller {
    client: Client,
    state_url: String,
    interval: Duration,
    slot: SnapshotSlot,
}

impl StatePoller {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.server.fetch_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            state_url: format!("{}/state", config.server.url.trim_end_matches('/')),
            interval: Duration::from_millis(config.display.poll_interval_ms),
            slot: SnapshotSlot::new(),
        }
    }

    /// Reader handle for the render path.
    pub fn slot(&self) -> SnapshotSlot {
        self.slot.clone()
    }

    /// One GET + parse + validate. Does not touch the slot.
    pub async fn fetch_once(&self) -> Result<StateSnapshot, PollError> {
        let snapshot: StateSnapshot = self
            .client
            .get(&self.state_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Run the polling loop until the returned task is aborted.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                ticker.tick().await;
                match self.fetch_once().await {
                    Ok(snapshot) => {
                        tracing::debug!(
                            round = snapshot.round,
                            robots = snapshot.robots.len(),
                            "snapshot committed"
                        );
                        self.slot.commit(snapshot);
                    }
                    Err(e) => {
                        tracing::warn!("poll failed, keeping previous snapshot: {e}");
                    }
                }
            }
        })
    }
}
