//! Core types for feedflow

use serde::{Deserialize, Serialize};

/// One asynchronous unit of work in the fetch pipeline
///
/// The four steps always execute in declaration order; step N+1 begins only
/// after step N completes successfully.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Authenticate the actor and produce an identity token
    Authenticate,
    /// Fetch the account profile for an identity
    FetchProfile,
    /// Fetch the post collection for a profile
    FetchPosts,
    /// Fetch the comment collection for a post collection
    FetchComments,
}

impl Step {
    /// All steps in execution order
    pub const ALL: [Step; 4] = [
        Step::Authenticate,
        Step::FetchProfile,
        Step::FetchPosts,
        Step::FetchComments,
    ];

    /// Zero-based position of this step in the pipeline
    pub fn index(&self) -> usize {
        match self {
            Step::Authenticate => 0,
            Step::FetchProfile => 1,
            Step::FetchPosts => 2,
            Step::FetchComments => 3,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::Authenticate => "authenticate",
            Step::FetchProfile => "fetch_profile",
            Step::FetchPosts => "fetch_posts",
            Step::FetchComments => "fetch_comments",
        };
        write!(f, "{}", name)
    }
}

/// Identity token produced by a successful authentication
///
/// Opaque beyond carrying the actor's identifier string; created and
/// destroyed within a single pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The authenticated actor's name
    pub username: String,
}

impl Identity {
    /// Create an identity token for the given actor
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Account profile retrieved for an identity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Actor name the profile belongs to
    pub username: String,
    /// Human-readable display name
    pub display_name: String,
}

/// A single post identifier in a post collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post(pub String);

impl Post {
    /// Get the post text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Post {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single comment string in a comment collection
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(pub String);

impl Comment {
    /// Get the comment text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Comment {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Events emitted over the broadcast channel during a pipeline run
///
/// Consumers subscribe via [`crate::FeedFetcher::subscribe`]. Events for a
/// single run are totally ordered: a step's events never precede the
/// previous step's completion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A step began executing
    StepStarted {
        /// The step that started
        step: Step,
    },

    /// A step completed successfully
    StepCompleted {
        /// The step that completed
        step: Step,
    },

    /// The full pipeline completed; terminal output attached
    PipelineCompleted {
        /// The final comment collection
        comments: Vec<Comment>,
    },

    /// The pipeline stopped at a failed step
    PipelineFailed {
        /// The step that failed
        step: Step,
        /// Failure reason
        error: String,
    },
}

/// Dad-joke payload returned by the joke API
///
/// Matches the JSON shape of `https://icanhazdadjoke.com/` when requested
/// with `Accept: application/json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Opaque joke identifier
    pub id: String,
    /// The joke text
    pub joke: String,
    /// HTTP-like status field echoed by the API
    pub status: u16,
}
