use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::features::sessions::services::SessionStore;

/// Background worker that evicts expired search sessions
pub struct SessionSweeper {
    store: Arc<SessionStore>,
    interval: Duration,
}

impl SessionSweeper {
    pub fn new(store: Arc<SessionStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run the sweep loop until the shutdown signal is received
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) {
        tracing::info!(
            "Session sweeper started (interval: {}s, ttl: {}s)",
            self.interval.as_secs(),
            self.store.ttl().as_secs()
        );

        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *shutdown_rx.borrow() {
                break;
            }

            tokio::select! {
                _ = ticker.tick() => {
                    let removed = self.store.sweep().await;
                    if removed > 0 {
                        tracing::info!(
                            "Session sweep removed {} expired sessions ({} remaining)",
                            removed,
                            self.store.len().await
                        );
                    } else {
                        tracing::debug!("Session sweep found no expired sessions");
                    }
                }
                changed = shutdown_rx.changed() => {
                    // A dropped sender also means shutdown
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        tracing::info!("Session sweeper stopped");
    }
}
