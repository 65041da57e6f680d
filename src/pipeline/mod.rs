//! Sequential fetch pipeline executor
//!
//! This module orchestrates the four pipeline steps in strict order:
//! 1. Authenticate - produce an identity token for the actor
//! 2. FetchProfile - retrieve the account profile
//! 3. FetchPosts - retrieve the post collection
//! 4. FetchComments - retrieve the comment collection
//!
//! The caller suspends at each step boundary; step N+1 begins only after
//! step N completes successfully. The first failure stops the pipeline,
//! discards the remaining steps, and surfaces as a single [`Error::Step`].

use crate::error::{Error, Result};
use crate::sink::ReportSink;
use crate::source::FeedSource;
use crate::types::{Comment, Event, Step};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Sequential fetch pipeline executor
///
/// Holds the step provider and the event channel; each [`run`](Self::run)
/// call executes one complete pipeline pass. Steps never execute
/// concurrently, and no concurrent runs are coordinated by the executor.
pub struct FetchPipeline {
    /// Step provider
    source: Arc<dyn FeedSource>,
    /// Event channel for emitting step and pipeline events
    event_tx: broadcast::Sender<Event>,
}

impl FetchPipeline {
    /// Create a new pipeline executor
    pub fn new(source: Arc<dyn FeedSource>, event_tx: broadcast::Sender<Event>) -> Self {
        Self { source, event_tx }
    }

    /// Execute one pipeline run for the given actor
    ///
    /// Runs the four steps strictly in order, threading each step's output
    /// into the next. Emits [`Event::StepStarted`]/[`Event::StepCompleted`]
    /// around every step, then [`Event::PipelineCompleted`] or
    /// [`Event::PipelineFailed`] for the terminal outcome.
    ///
    /// # Errors
    ///
    /// Returns the first step failure; later steps are never invoked.
    pub async fn run(&self, actor: &str) -> Result<Vec<Comment>> {
        info!(actor, source = self.source.name(), "starting fetch pipeline");

        let result = self.run_steps(actor).await;
        match result {
            Ok(comments) => {
                info!(comment_count = comments.len(), "pipeline completed");
                self.emit(Event::PipelineCompleted {
                    comments: comments.clone(),
                });
                Ok(comments)
            }
            Err(Error::Step { step, reason }) => {
                warn!(%step, reason, "pipeline stopped at failed step");
                self.emit(Event::PipelineFailed {
                    step,
                    error: reason.clone(),
                });
                Err(Error::Step { step, reason })
            }
            Err(other) => Err(other),
        }
    }

    /// Execute one run and route the outcome to a report sink
    ///
    /// Exactly one of `report_success`/`report_failure` is invoked per call,
    /// never both; the result is returned unchanged afterwards.
    pub async fn run_reported(
        &self,
        actor: &str,
        sink: &dyn ReportSink,
    ) -> Result<Vec<Comment>> {
        match self.run(actor).await {
            Ok(comments) => {
                sink.report_success(&comments).await;
                Ok(comments)
            }
            Err(err) => {
                sink.report_failure(&err).await;
                Err(err)
            }
        }
    }

    async fn run_steps(&self, actor: &str) -> Result<Vec<Comment>> {
        let identity = self
            .step(Step::Authenticate, self.source.authenticate(actor))
            .await?;
        let profile = self
            .step(Step::FetchProfile, self.source.fetch_profile(&identity))
            .await?;
        let posts = self
            .step(Step::FetchPosts, self.source.fetch_posts(&profile))
            .await?;
        let comments = self
            .step(Step::FetchComments, self.source.fetch_comments(&posts))
            .await?;
        Ok(comments)
    }

    /// Run a single step, emitting its boundary events
    ///
    /// Errors from a misbehaving source that are not already step failures
    /// are attributed to the step that produced them.
    async fn step<T>(&self, step: Step, fut: impl Future<Output = Result<T>>) -> Result<T> {
        self.emit(Event::StepStarted { step });
        debug!(%step, "step started");
        match fut.await {
            Ok(value) => {
                self.emit(Event::StepCompleted { step });
                debug!(%step, "step completed");
                Ok(value)
            }
            Err(err @ Error::Step { .. }) => Err(err),
            Err(other) => Err(Error::step(step, other.to_string())),
        }
    }

    fn emit(&self, event: Event) {
        // Send fails only when no subscribers exist, which is fine.
        let _ = self.event_tx.send(event);
    }
}
