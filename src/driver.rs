use crate::model::{RunConfig, RunSummary, WorkerReport};
use crate::worker::worker;
use chrono::Utc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// Spawns one task per worker and waits for all of them.
///
/// The wait has no deadline: a worker stuck on a request that never completes
/// keeps the driver waiting with it. Only the join phase is timed.
pub async fn run(config: &RunConfig) -> RunSummary {
    let (tx, mut rx) = mpsc::channel(config.workers().min(100));

    let mut set = JoinSet::new();
    for rank in 0..config.workers() {
        println!("creating thread {rank}");
        set.spawn(worker(
            rank,
            config.requests_per_worker(),
            config.url().to_string(),
            tx.clone(),
        ));
    }

    drop(tx);

    let capacity = config.workers();
    let collector = tokio::spawn(async move {
        let mut reports = Vec::with_capacity(capacity);
        while let Some(report) = rx.recv().await {
            reports.push(report);
        }
        reports
    });

    let started_at = Utc::now();
    let start = Instant::now();

    while let Some(res) = set.join_next().await {
        if let Err(e) = res {
            tracing::error!(error = %e, "worker task did not complete");
        }
    }

    let elapsed = start.elapsed();
    let finished_at = Utc::now();

    let mut reports: Vec<WorkerReport> = match collector.await {
        Ok(reports) => reports,
        Err(e) => {
            tracing::error!(error = %e, "report collector did not complete");
            Vec::new()
        }
    };
    reports.sort_by_key(|r| r.id);

    RunSummary {
        elapsed,
        started_at,
        finished_at,
        reports,
    }
}
