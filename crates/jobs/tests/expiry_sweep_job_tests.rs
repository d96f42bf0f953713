use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;
use whois_dns_application::use_cases::SweepExpiredRecordsUseCase;
use whois_dns_jobs::{ExpirySweepJob, JobRunner};

mod helpers;
use helpers::CountingStore;

fn sweep_use_case(store: Arc<CountingStore>) -> Arc<SweepExpiredRecordsUseCase> {
    Arc::new(SweepExpiredRecordsUseCase::new(
        store,
        Duration::from_secs(5),
    ))
}

#[tokio::test]
async fn test_expiry_sweep_job_starts_without_panic() {
    let store = Arc::new(CountingStore::new());
    let job = Arc::new(ExpirySweepJob::new(sweep_use_case(store)));

    job.start().await;

    sleep(Duration::from_millis(10)).await;
}

#[tokio::test]
async fn test_expiry_sweep_job_fires_on_interval() {
    let store = Arc::new(CountingStore::new());
    let job = Arc::new(
        ExpirySweepJob::new(sweep_use_case(store.clone()))
            .with_interval(Duration::from_millis(50)),
    );

    job.start().await;

    sleep(Duration::from_millis(300)).await;

    assert!(
        store.sweep_call_count() >= 3,
        "Sweep should have fired repeatedly"
    );
}

#[tokio::test]
async fn test_expiry_sweep_job_passes_expire_window() {
    let store = Arc::new(CountingStore::with_expired(4));
    let job = Arc::new(
        ExpirySweepJob::new(sweep_use_case(store.clone()))
            .with_interval(Duration::from_millis(50)),
    );

    job.start().await;

    sleep(Duration::from_millis(120)).await;

    assert_eq!(store.pending_expired(), 0);
    assert_eq!(store.last_max_age(), Duration::from_secs(5));
}

#[tokio::test]
async fn test_expiry_sweep_job_shuts_down_on_cancellation() {
    let store = Arc::new(CountingStore::new());
    let token = CancellationToken::new();

    let job = Arc::new(
        ExpirySweepJob::new(sweep_use_case(store.clone()))
            .with_interval(Duration::from_millis(50))
            .with_cancellation(token.clone()),
    );

    job.start().await;
    sleep(Duration::from_millis(120)).await;

    let count_before = store.sweep_call_count();
    assert!(count_before >= 1, "Should have fired at least once");

    token.cancel();
    sleep(Duration::from_millis(60)).await;

    let count_after = store.sweep_call_count();
    sleep(Duration::from_millis(200)).await;

    assert_eq!(
        store.sweep_call_count(),
        count_after,
        "Should not fire after cancellation"
    );
}

#[tokio::test]
async fn test_job_runner_starts_sweep_with_shutdown_token() {
    let store = Arc::new(CountingStore::new());
    let token = CancellationToken::new();

    JobRunner::new()
        .with_expiry_sweep(
            ExpirySweepJob::new(sweep_use_case(store.clone()))
                .with_interval(Duration::from_millis(50)),
        )
        .with_shutdown_token(token.clone())
        .start()
        .await;

    sleep(Duration::from_millis(120)).await;
    assert!(store.sweep_call_count() >= 1);

    token.cancel();
    sleep(Duration::from_millis(60)).await;
    let count_after = store.sweep_call_count();
    sleep(Duration::from_millis(200)).await;

    assert_eq!(store.sweep_call_count(), count_after);
}
