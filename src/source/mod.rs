//! Feed sources providing the four pipeline steps
//!
//! This module provides a trait-based architecture for the asynchronous units
//! of work the pipeline executes. The core abstraction is the [`FeedSource`]
//! trait, which defines the four step operations; the stock implementation is
//! [`SimulatedFeedSource`], which sleeps for a configured latency per step
//! and produces fixed results (including the injected profile-step failure).
//!
//! ## Usage
//!
//! ```
//! use feedflow::config::PipelineConfig;
//! use feedflow::source::{FeedSource, SimulatedFeedSource};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig {
//!         step_latency: Duration::from_millis(1),
//!         ..Default::default()
//!     };
//!     let source = SimulatedFeedSource::new(config);
//!
//!     let identity = source.authenticate("bnit").await?;
//!     assert_eq!(identity.username, "bnit");
//!     Ok(())
//! }
//! ```

mod simulated;
mod traits;

pub use simulated::SimulatedFeedSource;
pub use traits::FeedSource;
