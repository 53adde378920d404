//! Balance lookup example
//!
//! Reads configuration from the environment and fetches the account balance.
//! A 401 comes back as a JSON error document rather than an `Err`.
//!
//! ## Usage
//!
//! ```bash
//! export MESSAGEBIRD_ACCESS_KEY=test_...
//! RUST_LOG=messagebird=debug cargo run --example balance
//! ```

use messagebird::{ClientConfig, RequestDispatcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dispatcher = RequestDispatcher::from_config(ClientConfig::from_env())?;

    let body = dispatcher.get("balance").await?;
    let balance: serde_json::Value = serde_json::from_str(&body)?;

    if let Some(errors) = balance.get("errors") {
        eprintln!("API rejected the request: {}", errors);
    } else {
        println!("{:#}", balance);
    }

    Ok(())
}
