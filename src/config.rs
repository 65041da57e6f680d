//! Configuration types for feedflow

use crate::error::{Error, Result};
use crate::types::Step;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level library configuration
///
/// Works out of the box with zero configuration: the defaults reproduce the
/// stock simulation (1 second per step, profile failure injected, actor
/// "bnit").
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pipeline behavior configuration
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Joke client configuration
    #[serde(default)]
    pub joke: JokeConfig,
}

impl Config {
    /// Validate the configuration
    ///
    /// Returns a [`Error::Config`] naming the offending key when a setting
    /// is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.pipeline.event_capacity == 0 {
            return Err(Error::config(
                "event_capacity must be greater than zero",
                "pipeline.event_capacity",
            ));
        }
        if self.pipeline.default_actor.is_empty() {
            return Err(Error::config(
                "default_actor must not be empty",
                "pipeline.default_actor",
            ));
        }
        if self.joke.endpoint.is_empty() {
            return Err(Error::config(
                "endpoint must not be empty",
                "joke.endpoint",
            ));
        }
        Ok(())
    }
}

/// Pipeline behavior configuration (latencies, failure injection, actor)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Simulated latency applied to every step (default: 1 second)
    #[serde(default = "default_step_latency")]
    pub step_latency: Duration,

    /// Latency override for the authenticate step
    #[serde(default)]
    pub authenticate_latency: Option<Duration>,

    /// Latency override for the profile step
    #[serde(default)]
    pub profile_latency: Option<Duration>,

    /// Latency override for the posts step
    #[serde(default)]
    pub posts_latency: Option<Duration>,

    /// Latency override for the comments step
    #[serde(default)]
    pub comments_latency: Option<Duration>,

    /// Inject the fixed profile-step failure (default: true)
    ///
    /// When enabled, the simulated source fails the profile step after its
    /// delay with [`profile_failure_reason`](Self::profile_failure_reason),
    /// reproducing the stock non-recoverable failure. Disable to let a full
    /// run succeed.
    #[serde(default = "default_true")]
    pub inject_profile_failure: bool,

    /// Failure reason reported by the injected profile failure (default: "reh")
    #[serde(default = "default_failure_reason")]
    pub profile_failure_reason: String,

    /// Actor name used by [`crate::FeedFetcher::run_default`] (default: "bnit")
    #[serde(default = "default_actor")]
    pub default_actor: String,

    /// Broadcast channel capacity for pipeline events (default: 100)
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl PipelineConfig {
    /// Effective simulated latency for the given step
    ///
    /// Per-step overrides take precedence over the global `step_latency`.
    pub fn latency_for(&self, step: Step) -> Duration {
        let override_latency = match step {
            Step::Authenticate => self.authenticate_latency,
            Step::FetchProfile => self.profile_latency,
            Step::FetchPosts => self.posts_latency,
            Step::FetchComments => self.comments_latency,
        };
        override_latency.unwrap_or(self.step_latency)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            step_latency: default_step_latency(),
            authenticate_latency: None,
            profile_latency: None,
            posts_latency: None,
            comments_latency: None,
            inject_profile_failure: true,
            profile_failure_reason: default_failure_reason(),
            default_actor: default_actor(),
            event_capacity: default_event_capacity(),
        }
    }
}

/// Joke client configuration (endpoint, timeout)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JokeConfig {
    /// Joke API endpoint (default: "https://icanhazdadjoke.com/")
    #[serde(default = "default_joke_endpoint")]
    pub endpoint: String,

    /// HTTP request timeout (default: 30 seconds)
    #[serde(default = "default_joke_timeout")]
    pub timeout: Duration,
}

impl Default for JokeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_joke_endpoint(),
            timeout: default_joke_timeout(),
        }
    }
}

fn default_step_latency() -> Duration {
    Duration::from_secs(1)
}

fn default_true() -> bool {
    true
}

fn default_failure_reason() -> String {
    "reh".to_string()
}

fn default_actor() -> String {
    "bnit".to_string()
}

fn default_event_capacity() -> usize {
    100
}

fn default_joke_endpoint() -> String {
    "https://icanhazdadjoke.com/".to_string()
}

fn default_joke_timeout() -> Duration {
    Duration::from_secs(30)
}
