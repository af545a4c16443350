//! ragprobe SDK - Retrieval API smoke-test client
//!
//! Issues a single blocking `GET /api/rag/retrieval` and hands back the raw body.
//!
//! # Example
//!
//! ```no_run
//! use ragprobe_sdk::{run_with, ProbeConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ProbeConfig {
//!         question: "国务院对于地方政府专项债券发行有何意见".to_string(),
//!         ..Default::default()
//!     };
//!
//!     run_with(&config, &mut std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod probe;
mod types;

pub use client::RetrievalClient;
pub use error::{ProbeError, Result};
pub use probe::{run, run_with};
pub use types::{
    ProbeConfig, RetrievalQuery, RetrievalRequest, RetrievalResponse, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_QUESTION, DEFAULT_TOP_K, RETRIEVAL_PATH,
};
