//! HTTP client for the dad-joke API
//!
//! Fetches a random joke from a JSON API (default:
//! `https://icanhazdadjoke.com/`) for display by an embedding surface, such
//! as a popup wired to a button click.

use crate::config::JokeConfig;
use crate::error::{Error, Result};
use crate::types::Joke;
use tracing::debug;

/// Client for fetching jokes from the configured endpoint
///
/// The endpoint is requested with `Accept: application/json`; the payload is
/// deserialized into [`Joke`]. Requests share one [`reqwest::Client`] with
/// the configured timeout.
pub struct JokeClient {
    client: reqwest::Client,
    config: JokeConfig,
}

impl JokeClient {
    /// Create a client from the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: JokeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch one random joke
    ///
    /// # Errors
    ///
    /// Returns [`Error::JokeApi`] for non-success HTTP statuses and
    /// [`Error::Network`] for transport or deserialization failures.
    pub async fn fetch(&self) -> Result<Joke> {
        debug!(endpoint = %self.config.endpoint, "fetching joke");

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::JokeApi {
                status: status.as_u16(),
            });
        }

        let joke: Joke = response.json().await?;
        debug!(joke_id = %joke.id, "fetched joke");
        Ok(joke)
    }

    /// Fetch one random joke and return just its text
    ///
    /// Convenience for display sinks that only need the string.
    pub async fn fetch_text(&self) -> Result<String> {
        Ok(self.fetch().await?.joke)
    }
}
