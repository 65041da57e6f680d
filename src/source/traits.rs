//! Trait for feed sources

use crate::error::Result;
use crate::types::{Comment, Identity, Post, Profile};
use async_trait::async_trait;

/// Trait for the four asynchronous step operations of the fetch pipeline
///
/// Each operation suspends until its result is ready; the pipeline threads
/// the output of each step into the next. Implementations can simulate
/// latency and failures ([`super::SimulatedFeedSource`]) or back the steps
/// with real services.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Authenticate an actor and produce an identity token
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Step`] if authentication fails.
    async fn authenticate(&self, actor: &str) -> Result<Identity>;

    /// Fetch the account profile for an authenticated identity
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Step`] if the profile cannot be retrieved.
    /// The stock simulated source fails here with reason `"reh"` unless
    /// failure injection is disabled.
    async fn fetch_profile(&self, identity: &Identity) -> Result<Profile>;

    /// Fetch the post collection for a profile
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Step`] if the posts cannot be retrieved.
    async fn fetch_posts(&self, profile: &Profile) -> Result<Vec<Post>>;

    /// Fetch the comment collection for a post collection
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Step`] if the comments cannot be retrieved.
    async fn fetch_comments(&self, posts: &[Post]) -> Result<Vec<Comment>>;

    /// Human-readable name of this source implementation
    fn name(&self) -> &'static str;
}
