use crate::model::WorkerReport;
use crate::request::issue_request;
use tokio::sync::mpsc;

/// Issues up to `requests` sequential GETs against `url`, stopping at the first
/// failure. The report is sent once, after the loop ends.
pub async fn worker(rank: usize, requests: usize, url: String, tx: mpsc::Sender<WorkerReport>) {
    let client = reqwest::Client::new();

    let mut report = WorkerReport {
        id: rank,
        sent: 0,
        succeeded: 0,
        failure: None,
    };

    for _ in 0..requests {
        report.sent += 1;
        match issue_request(&client, &url).await {
            Ok(()) => report.succeeded += 1,
            Err(e) => {
                println!("thread {rank} failed");
                report.failure = Some(e);
                break;
            }
        }
    }
    tracing::debug!(
        worker = rank,
        sent = report.sent,
        succeeded = report.succeeded,
        "worker finished"
    );

    if tx.send(report).await.is_err() {
        tracing::warn!(worker = rank, "report receiver dropped");
    }
}
