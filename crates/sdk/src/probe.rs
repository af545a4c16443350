//! Retrieval Probe
//!
//! Build the descriptor, perform one blocking GET, copy the body to the output.

use crate::client::RetrievalClient;
use crate::error::Result;
use crate::types::{ProbeConfig, RetrievalRequest};
use std::io::Write;
use tracing::info;

/// Run the probe with the default target, writing the body to stdout
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&ProbeConfig::default(), &mut out)
}

/// Run the probe against `config`, writing the body verbatim to `out`
///
/// Nothing is written unless the full body was received.
pub fn run_with<W: Write>(config: &ProbeConfig, out: &mut W) -> Result<()> {
    let request = RetrievalRequest::from_config(config)?;
    let client = RetrievalClient::new(config.timeout)?;

    let response = client.retrieve(&request)?;

    info!(
        status = response.status,
        bytes = response.body.len(),
        "Retrieval probe completed"
    );

    out.write_all(&response.body)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;

    #[test]
    fn test_invalid_config_writes_nothing() {
        let config = ProbeConfig {
            question: String::new(),
            ..Default::default()
        };
        let mut out = Vec::new();

        let err = run_with(&config, &mut out).unwrap_err();

        assert!(matches!(err, ProbeError::InvalidRequest(_)));
        assert!(out.is_empty());
    }
}
