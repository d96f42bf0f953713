use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use whois_dns_application::use_cases::SweepExpiredRecordsUseCase;

const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Periodically evicts correlation records older than the expiry window.
pub struct ExpirySweepJob {
    sweep: Arc<SweepExpiredRecordsUseCase>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl ExpirySweepJob {
    pub fn new(sweep: Arc<SweepExpiredRecordsUseCase>) -> Self {
        Self {
            sweep,
            interval: DEFAULT_SWEEP_INTERVAL,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            expire_secs = self.sweep.expire_window().as_secs(),
            "Starting expiry sweep job"
        );

        let job = Arc::clone(&self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(job.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = job.shutdown.cancelled() => {
                        info!("ExpirySweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let outcome = job.sweep.execute();
                        if outcome.evicted > 0 {
                            info!(
                                evicted = outcome.evicted,
                                active = outcome.active,
                                "Expired correlation records swept"
                            );
                        } else {
                            debug!(active = outcome.active, "Sweep found nothing to evict");
                        }
                    }
                }
            }
        });
    }
}
