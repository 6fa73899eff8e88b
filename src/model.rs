use crate::args::ArgError;
use crate::request::RequestError;
use chrono::{DateTime, Utc};
use std::num::NonZeroUsize;
use std::time::Duration;

pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_REQUESTS_PER_WORKER: usize = 1000;

/// Validated settings for one run. Only constructible through `new`, so both
/// counts are always positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    url: String,
    workers: NonZeroUsize,
    requests_per_worker: NonZeroUsize,
    summary: bool,
}

impl RunConfig {
    /// Counts arrive signed, straight from the command line.
    pub fn new(url: String, workers: i64, requests_per_worker: i64) -> Result<Self, ArgError> {
        let workers = positive(workers).ok_or(ArgError::InvalidThreadCount)?;
        let requests_per_worker =
            positive(requests_per_worker).ok_or(ArgError::InvalidRequestCount)?;
        Ok(Self {
            url,
            workers,
            requests_per_worker,
            summary: false,
        })
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn requests_per_worker(&self) -> usize {
        self.requests_per_worker.get()
    }

    pub fn summary(&self) -> bool {
        self.summary
    }
}

fn positive(n: i64) -> Option<NonZeroUsize> {
    usize::try_from(n).ok().and_then(NonZeroUsize::new)
}

/// What a worker did before it terminated.
#[derive(Debug)]
pub struct WorkerReport {
    pub id: usize,
    pub sent: usize,
    pub succeeded: usize,
    pub failure: Option<RequestError>,
}

impl WorkerReport {
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Sorted by worker id.
    pub reports: Vec<WorkerReport>,
}

impl RunSummary {
    pub fn requests_sent(&self) -> usize {
        self.reports.iter().map(|r| r.sent).sum()
    }

    pub fn requests_succeeded(&self) -> usize {
        self.reports.iter().map(|r| r.succeeded).sum()
    }

    pub fn failed_workers(&self) -> usize {
        self.reports.iter().filter(|r| r.failed()).count()
    }

    pub fn aggregate_line(&self) -> String {
        format!(
            "{}/{} requests succeeded, {}/{} threads failed ({} .. {})",
            self.requests_succeeded(),
            self.requests_sent(),
            self.failed_workers(),
            self.reports.len(),
            self.started_at.format("%H:%M:%S%.3f"),
            self.finished_at.format("%H:%M:%S%.3f"),
        )
    }
}
