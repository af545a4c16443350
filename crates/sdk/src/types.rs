//! Request/Response Types
//!
//! Mirrors the query contract of `GET /api/rag/retrieval`.

use crate::error::{ProbeError, Result};
use serde::Serialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;
pub const RETRIEVAL_PATH: &str = "/api/rag/retrieval";
pub const DEFAULT_QUESTION: &str = "国务院对于地方政府性债务管理的意见";
pub const DEFAULT_TOP_K: u32 = 3;

/// Probe configuration
///
/// `Default` reproduces the fixed smoke-test target and question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub question: String,
    pub top_k: u32,
    /// `None` means no deadline
    pub timeout: Option<Duration>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            question: DEFAULT_QUESTION.to_string(),
            top_k: DEFAULT_TOP_K,
            timeout: None,
        }
    }
}

/// Query parameters, serialized in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetrievalQuery {
    pub question: String,
    pub top_k: u32,
}

/// Immutable description of a single retrieval call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalRequest {
    base_url: Url,
    query: RetrievalQuery,
}

impl RetrievalRequest {
    /// Build a descriptor for `http://{host}:{port}/api/rag/retrieval`
    ///
    /// Rejects an empty question and a zero `top_k` before anything touches the network.
    /// `host` must be a bare host name or IP address; a bare IPv6 address is bracketed.
    pub fn new(host: &str, port: u16, question: impl Into<String>, top_k: u32) -> Result<Self> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(ProbeError::InvalidRequest(
                "question must not be empty".to_string(),
            ));
        }
        if top_k == 0 {
            return Err(ProbeError::InvalidRequest(
                "top_k must be at least 1".to_string(),
            ));
        }
        if host.trim().is_empty() {
            return Err(ProbeError::InvalidUrl("host must not be empty".to_string()));
        }

        let base_url = authority_url(host.trim(), port)?;

        Ok(Self {
            base_url,
            query: RetrievalQuery { question, top_k },
        })
    }

    pub fn from_config(config: &ProbeConfig) -> Result<Self> {
        Self::new(&config.host, config.port, config.question.as_str(), config.top_k)
    }

    pub fn query(&self) -> &RetrievalQuery {
        &self.query
    }

    /// Endpoint URL without the query string
    pub fn endpoint(&self) -> Result<Url> {
        Ok(self.base_url.join(RETRIEVAL_PATH)?)
    }
}

/// `http://{host}:{port}` with the host set on its own, so a host carrying
/// `/`, `?`, `#`, `@` or a port cannot move the port into the path
fn authority_url(host: &str, port: u16) -> Result<Url> {
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{}]", host)
    } else {
        host.to_string()
    };

    let mut url = Url::parse("http://localhost")?;
    url.set_host(Some(&host))
        .map_err(|e| ProbeError::InvalidUrl(format!("invalid host {:?}: {}", host, e)))?;
    url.set_port(Some(port))
        .map_err(|_| ProbeError::InvalidUrl(format!("cannot set port {}", port)))?;

    Ok(url)
}

/// Raw response as received; no status check, no parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RetrievalResponse {
    /// Body as text, replacing invalid UTF-8 sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
