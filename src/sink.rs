//! Report sinks consuming pipeline outcomes
//!
//! A sink is an external consumer of a final success or error value. The
//! pipeline boundary routes each run's outcome to a sink exactly once:
//! either the final comment collection or the failure reason, never both.

use crate::error::Error;
use crate::types::Comment;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Trait for consumers of a pipeline run's terminal outcome
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Consume the final comment collection of a successful run
    async fn report_success(&self, comments: &[Comment]);

    /// Consume the failure reason of a failed run
    async fn report_failure(&self, error: &Error);
}

/// Sink that logs outcomes via `tracing`
///
/// The stock textual output channel: the final comment collection goes to
/// an info-level log, a failure reason to an error-level log.
pub struct LogSink;

#[async_trait]
impl ReportSink for LogSink {
    async fn report_success(&self, comments: &[Comment]) {
        let texts: Vec<&str> = comments.iter().map(|c| c.as_str()).collect();
        info!(comments = ?texts, "pipeline finished");
    }

    async fn report_failure(&self, error: &Error) {
        error!(%error, "something went wrong");
    }
}

/// A recorded report, as captured by [`MemorySink`]
#[derive(Clone, Debug, PartialEq)]
pub enum Report {
    /// Successful run with its final comment collection
    Success(Vec<Comment>),
    /// Failed run with the failure reason rendered as text
    Failure(String),
}

/// Sink that records outcomes in memory
///
/// Used by tests and embedders that want to inspect outcomes after the fact,
/// for example a UI surface displaying the returned value or error text.
#[derive(Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Report>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports recorded so far, in arrival order
    pub async fn reports(&self) -> Vec<Report> {
        self.reports.lock().await.clone()
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn report_success(&self, comments: &[Comment]) {
        self.reports
            .lock()
            .await
            .push(Report::Success(comments.to_vec()));
    }

    async fn report_failure(&self, error: &Error) {
        self.reports
            .lock()
            .await
            .push(Report::Failure(error.to_string()));
    }
}
