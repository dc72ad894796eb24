//! Backend availability polling and model lifecycle control.

use crate::client::{types::HealthResponse, Backend};
use crate::config::{HEALTH_POLL_INTERVAL, MODEL_RECONCILE_DELAY};
use crate::platform::Platform;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Reachability of the backend as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Offline,
    Online,
}

/// Distilled view of one successful health probe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HealthSnapshot {
    pub model_loaded: bool,
    pub platforms_ready: BTreeSet<Platform>,
    pub image_generation: bool,
}

impl HealthSnapshot {
    fn from_wire(reply: &HealthResponse) -> Self {
        let platforms_ready = Platform::ALL
            .iter()
            .copied()
            .filter(|platform| reply.platforms.iter().any(|name| name == platform.wire_id()))
            .collect();
        Self {
            model_loaded: reply.model_server == "ok",
            platforms_ready,
            image_generation: reply.image_generation,
        }
    }
}

/// What gets displayed: availability plus the latest snapshot. Both fields
/// are replaced together under the lock, so readers never observe a
/// half-updated state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusView {
    pub availability: Availability,
    pub snapshot: Option<HealthSnapshot>,
}

pub struct HealthMonitor {
    backend: Arc<dyn Backend>,
    state: RwLock<StatusView>,
    poll_interval: Duration,
    reconcile_delay: Duration,
}

impl HealthMonitor {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::with_timing(backend, HEALTH_POLL_INTERVAL, MODEL_RECONCILE_DELAY)
    }

    pub fn with_timing(
        backend: Arc<dyn Backend>,
        poll_interval: Duration,
        reconcile_delay: Duration,
    ) -> Self {
        Self {
            backend,
            state: RwLock::new(StatusView::default()),
            poll_interval,
            reconcile_delay,
        }
    }

    pub async fn status(&self) -> StatusView {
        self.state.read().await.clone()
    }

    /// One probe. Availability follows probe success; a failed probe keeps
    /// the last snapshot around as stale display data.
    pub async fn probe(&self) {
        match self.backend.health().await {
            Ok(reply) => {
                let snapshot = HealthSnapshot::from_wire(&reply);
                let mut state = self.state.write().await;
                state.availability = Availability::Online;
                state.snapshot = Some(snapshot);
            }
            Err(err) => {
                debug!(error = %err, "health probe failed");
                let mut state = self.state.write().await;
                state.availability = Availability::Offline;
            }
        }
    }

    /// Periodic polling loop; the first probe fires immediately. Runs until
    /// the owning task is aborted.
    pub async fn run(self: Arc<Self>) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        loop {
            ticker.tick().await;
            self.probe().await;
        }
    }

    /// Load or unload the generation model. The displayed state flips
    /// optimistically, then one reconciliation probe converges on backend
    /// truth: after a short fixed delay on success, immediately on failure.
    pub async fn set_model_loaded(&self, loaded: bool) {
        {
            let mut state = self.state.write().await;
            if let Some(snapshot) = state.snapshot.as_mut() {
                snapshot.model_loaded = loaded;
            }
        }

        let call = if loaded {
            self.backend.model_start().await
        } else {
            self.backend.model_stop().await
        };

        if let Err(err) = call {
            warn!(error = %err, loaded, "model toggle failed");
            self.probe().await;
            return;
        }

        tokio::time::sleep(self.reconcile_delay).await;
        self.probe().await;
    }
}
