//! Basic pipeline run example
//!
//! Demonstrates the core functionality of feedflow:
//! - Building a configuration
//! - Creating a fetcher instance
//! - Subscribing to events
//! - Running the pipeline and handling its outcome

use feedflow::{Config, FeedFetcher, PipelineConfig};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build configuration: faster steps than the stock 1 second, with the
    // profile failure disabled so the full pipeline completes.
    let config = Config {
        pipeline: PipelineConfig {
            step_latency: Duration::from_millis(200),
            inject_profile_failure: false,
            ..Default::default()
        },
        ..Default::default()
    };

    // Create fetcher instance
    let fetcher = FeedFetcher::new(config)?;

    // Subscribe to events
    let mut events = fetcher.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            println!("Event: {:?}", event);
        }
    });

    // Run with an explicit actor name
    match fetcher.run("bnit").await {
        Ok(comments) => {
            for comment in comments {
                println!("Comment: {comment}");
            }
        }
        Err(err) => eprintln!("Something went wrong: {err}"),
    }

    Ok(())
}
