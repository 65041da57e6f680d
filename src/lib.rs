//! # feedflow
//!
//! Library-first crate modeling a sequential asynchronous fetch pipeline:
//! four steps (authenticate, profile, posts, comments) executed in strict
//! order, each consuming the previous step's output, short-circuiting to a
//! single error path on the first failure.
//!
//! ## Design Philosophy
//!
//! feedflow is designed to be:
//! - **Configurable** - Per-step latencies, failure injection, and the
//!   default actor can all be customized
//! - **Sensible defaults** - Reproduces the stock simulation with zero
//!   configuration
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Event-driven** - Consumers subscribe to step and pipeline events,
//!   no polling required
//!
//! ## Quick Start
//!
//! ```no_run
//! use feedflow::{Config, FeedFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = FeedFetcher::new(Config::default())?;
//!
//!     // Subscribe to events
//!     let mut events = fetcher.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Event: {:?}", event);
//!         }
//!     });
//!
//!     // One run with the configured default actor; the stock simulation
//!     // fails at the profile step with reason "reh".
//!     let outcome = fetcher.run_default().await;
//!     println!("Outcome: {:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Top-level library handle
pub mod fetcher;
/// Dad-joke HTTP client
pub mod joke;
/// Sequential fetch pipeline executor
pub mod pipeline;
/// Report sinks for pipeline outcomes
pub mod sink;
/// Feed sources providing the pipeline steps
pub mod source;
/// Core types
pub mod types;

pub use config::{Config, JokeConfig, PipelineConfig};
pub use error::{Error, Result};
pub use fetcher::FeedFetcher;
pub use joke::JokeClient;
pub use pipeline::FetchPipeline;
pub use sink::{LogSink, MemorySink, Report, ReportSink};
pub use source::{FeedSource, SimulatedFeedSource};
pub use types::{Comment, Event, Identity, Joke, Post, Profile, Step};
