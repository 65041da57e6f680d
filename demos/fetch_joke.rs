//! Joke fetching example
//!
//! Fetches a random dad joke from the default public API and prints it,
//! the way a popup surface would display it on button click.

use feedflow::{JokeClient, JokeConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = JokeClient::new(JokeConfig::default())?;

    println!("Loading...");
    match client.fetch().await {
        Ok(joke) => println!("{}", joke.joke),
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}
