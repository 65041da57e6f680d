//! Simulated feed source with fixed latencies and results

use super::traits::FeedSource;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::types::{Comment, Identity, Post, Profile, Step};
use async_trait::async_trait;
use tracing::info;

/// Stock feed source that simulates each step
///
/// Every step sleeps for the configured per-step latency, logs its side
/// effect, then produces a fixed result:
///
/// - `authenticate` always succeeds, yielding an identity for the actor
/// - `fetch_profile` fails with the configured reason (default `"reh"`)
///   when failure injection is enabled, after its delay and after logging
///   its side effect; otherwise it succeeds
/// - `fetch_posts` yields the fixed two-element sequence `["Post 1", "Post 2"]`
/// - `fetch_comments` yields `["Nice post!", "Great read!"]`
///
/// The side-effect log of a step is never observable before the previous
/// step has completed, regardless of the configured latencies.
pub struct SimulatedFeedSource {
    config: PipelineConfig,
}

impl SimulatedFeedSource {
    /// Create a simulated source with the given pipeline configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    async fn simulate_latency(&self, step: Step) {
        let latency = self.config.latency_for(step);
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl FeedSource for SimulatedFeedSource {
    async fn authenticate(&self, actor: &str) -> Result<Identity> {
        self.simulate_latency(Step::Authenticate).await;
        info!(actor, "user logged in");
        Ok(Identity::new(actor))
    }

    async fn fetch_profile(&self, identity: &Identity) -> Result<Profile> {
        self.simulate_latency(Step::FetchProfile).await;
        // The original logs the side effect before rejecting; keep that order.
        info!(username = %identity.username, "fetched user profile");
        if self.config.inject_profile_failure {
            return Err(Error::step(
                Step::FetchProfile,
                self.config.profile_failure_reason.clone(),
            ));
        }
        Ok(Profile {
            username: identity.username.clone(),
            display_name: identity.username.clone(),
        })
    }

    async fn fetch_posts(&self, profile: &Profile) -> Result<Vec<Post>> {
        self.simulate_latency(Step::FetchPosts).await;
        info!(username = %profile.username, "fetched user posts");
        Ok(vec![Post::from("Post 1"), Post::from("Post 2")])
    }

    async fn fetch_comments(&self, posts: &[Post]) -> Result<Vec<Comment>> {
        self.simulate_latency(Step::FetchComments).await;
        info!(post_count = posts.len(), "fetched comments for posts");
        Ok(vec![Comment::from("Nice post!"), Comment::from("Great read!")])
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
