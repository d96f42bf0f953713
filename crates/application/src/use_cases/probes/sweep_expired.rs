use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::ports::CorrelationStore;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepOutcome {
    pub evicted: usize,
    pub active: usize,
}

pub struct SweepExpiredRecordsUseCase {
    store: Arc<dyn CorrelationStore>,
    expire_window: Duration,
}

impl SweepExpiredRecordsUseCase {
    pub fn new(store: Arc<dyn CorrelationStore>, expire_window: Duration) -> Self {
        Self {
            store,
            expire_window,
        }
    }

    pub fn expire_window(&self) -> Duration {
        self.expire_window
    }

    pub fn execute(&self) -> SweepOutcome {
        self.execute_at(Instant::now())
    }

    pub fn execute_at(&self, now: Instant) -> SweepOutcome {
        let evicted = self.store.sweep(now, self.expire_window);
        SweepOutcome {
            evicted,
            active: self.store.active_count(),
        }
    }
}
