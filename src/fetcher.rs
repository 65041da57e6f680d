//! Top-level library handle

use crate::config::Config;
use crate::error::Result;
use crate::joke::JokeClient;
use crate::pipeline::FetchPipeline;
use crate::sink::{LogSink, ReportSink};
use crate::source::{FeedSource, SimulatedFeedSource};
use crate::types::{Comment, Event};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;

/// Main entry point for embedding feedflow
///
/// Owns the configuration, the event channel, and the pipeline executor.
/// Consumers subscribe to events and trigger runs; an external surface (a
/// CLI, a popup button) only needs to call [`run`](Self::run) or
/// [`run_default`](Self::run_default) and display the returned value or
/// error text.
pub struct FeedFetcher {
    config: Arc<Config>,
    pipeline: FetchPipeline,
    event_tx: broadcast::Sender<Event>,
}

impl FeedFetcher {
    /// Create a fetcher backed by the stock simulated source
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let source = Arc::new(SimulatedFeedSource::new(config.pipeline.clone()));
        Self::with_source(config, source)
    }

    /// Create a fetcher backed by a custom feed source
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the configuration is invalid.
    pub fn with_source(config: Config, source: Arc<dyn FeedSource>) -> Result<Self> {
        config.validate()?;

        let (event_tx, _) = broadcast::channel(config.pipeline.event_capacity);
        let pipeline = FetchPipeline::new(source.clone(), event_tx.clone());

        info!(
            source = source.name(),
            default_actor = %config.pipeline.default_actor,
            "feed fetcher initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            pipeline,
            event_tx,
        })
    }

    /// Subscribe to pipeline events
    ///
    /// Each subscriber receives every event emitted after the subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one pipeline run for the given actor
    ///
    /// # Errors
    ///
    /// Returns the first step failure; later steps are never invoked.
    pub async fn run(&self, actor: &str) -> Result<Vec<Comment>> {
        self.pipeline.run(actor).await
    }

    /// Execute one run and route the outcome to the given report sink
    ///
    /// Exactly one of the sink's success/failure methods is invoked.
    pub async fn run_reported(
        &self,
        actor: &str,
        sink: &dyn ReportSink,
    ) -> Result<Vec<Comment>> {
        self.pipeline.run_reported(actor, sink).await
    }

    /// Zero-argument entry point: one run with the configured default actor
    ///
    /// The outcome goes to a [`LogSink`] in addition to being returned.
    pub async fn run_default(&self) -> Result<Vec<Comment>> {
        let actor = self.config.pipeline.default_actor.clone();
        self.run_reported(&actor, &LogSink).await
    }

    /// Create a joke client from the fetcher's configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Network`] if the HTTP client cannot be built.
    pub fn joke_client(&self) -> Result<JokeClient> {
        JokeClient::new(self.config.joke.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::error::Error;
    use crate::types::Step;
    use std::time::Duration;

    fn fast_config(inject_failure: bool) -> Config {
        Config {
            pipeline: PipelineConfig {
                step_latency: Duration::ZERO,
                inject_profile_failure: inject_failure,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_config() {
        let mut config = fast_config(true);
        config.pipeline.event_capacity = 0;
        assert!(FeedFetcher::new(config).is_err());
    }

    #[tokio::test]
    async fn test_run_default_uses_configured_actor() {
        let fetcher = FeedFetcher::new(fast_config(true)).unwrap();
        let mut events = fetcher.subscribe();

        let err = fetcher.run_default().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Step {
                step: Step::FetchProfile,
                ..
            }
        ));

        // First event of the run is the authenticate step starting.
        assert_eq!(
            events.recv().await.unwrap(),
            Event::StepStarted {
                step: Step::Authenticate
            }
        );
    }

    #[tokio::test]
    async fn test_subscribers_see_terminal_event() {
        let fetcher = FeedFetcher::new(fast_config(false)).unwrap();
        let mut events = fetcher.subscribe();

        let comments = fetcher.run("bnit").await.unwrap();

        let mut terminal = None;
        while let Ok(event) = events.try_recv() {
            terminal = Some(event);
        }
        assert_eq!(terminal, Some(Event::PipelineCompleted { comments }));
    }
}
