//! Retrieval Client Implementation

use crate::error::Result;
use crate::types::{RetrievalRequest, RetrievalResponse};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Blocking client for the retrieval API
///
/// # Example
///
/// ```no_run
/// use ragprobe_sdk::{RetrievalClient, RetrievalRequest};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RetrievalClient::new(None)?;
/// let request = RetrievalRequest::new("127.0.0.1", 5001, "什么是专项债券", 3)?;
/// let response = client.retrieve(&request)?;
/// println!("{}", response.text());
/// # Ok(())
/// # }
/// ```
pub struct RetrievalClient {
    client: Client,
}

impl RetrievalClient {
    /// Create a client
    ///
    /// # Arguments
    ///
    /// * `timeout` - Request deadline; `None` waits for the service indefinitely
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        // The blocking builder applies a 30s deadline unless told otherwise
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    /// Issue one `GET` for the descriptor and read the whole body
    ///
    /// The status code is recorded but never checked.
    pub fn retrieve(&self, request: &RetrievalRequest) -> Result<RetrievalResponse> {
        let endpoint = request.endpoint()?;

        debug!(
            url = %endpoint,
            top_k = request.query().top_k,
            "Sending retrieval request"
        );

        let response = self
            .client
            .get(endpoint.clone())
            .query(request.query())
            .send()
            .map_err(|e| {
                warn!(url = %endpoint, error = %e, "Retrieval request failed");
                e
            })?;

        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        debug!(status, bytes = body.len(), "Retrieval response received");

        Ok(RetrievalResponse { status, body })
    }
}
