//! Simple SDK Example
//!
//! Sends a different question through the client. The body goes to stdout
//! unchanged; status and size go to stderr.
//!
//! # Usage
//!
//! 1. Start the retrieval service on 127.0.0.1:5001
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run -p ragprobe-sdk --example simple
//!    ```

use ragprobe_sdk::{RetrievalClient, RetrievalRequest, DEFAULT_HOST, DEFAULT_PORT};
use std::io::Write;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = RetrievalClient::new(Some(Duration::from_secs(10)))?;
    let request = RetrievalRequest::new(
        DEFAULT_HOST,
        DEFAULT_PORT,
        "国务院对于地方政府专项债券发行有何意见",
        3,
    )?;

    eprintln!("GET {}", request.endpoint()?);
    let response = client.retrieve(&request)?;
    eprintln!("status {}, {} bytes", response.status, response.body.len());

    std::io::stdout().write_all(&response.body)?;

    Ok(())
}
