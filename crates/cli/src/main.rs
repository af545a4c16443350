//! ragprobe CLI - one-shot smoke test for the RAG retrieval API
//!
//! With no flags this sends the fixed question to 127.0.0.1:5001 and prints
//! the raw response body.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use ragprobe_sdk::{ProbeConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_QUESTION, DEFAULT_TOP_K};
use std::time::Duration;
use tracing::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "ragprobe")]
#[command(about = "Send one retrieval query and print the raw response", long_about = None)]
#[command(version)]
struct Cli {
    /// Retrieval service host
    #[arg(long, env = "RAGPROBE_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Retrieval service port
    #[arg(long, env = "RAGPROBE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Question text sent as the `question` parameter
    #[arg(short, long, env = "RAGPROBE_QUESTION", default_value = DEFAULT_QUESTION)]
    question: String,

    /// Number of passages to request
    #[arg(short = 'k', long, env = "RAGPROBE_TOP_K", default_value_t = DEFAULT_TOP_K)]
    top_k: u32,

    /// Request timeout in seconds (no deadline when omitted)
    #[arg(long, env = "RAGPROBE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl Cli {
    fn into_config(self) -> ProbeConfig {
        ProbeConfig {
            host: self.host,
            port: self.port,
            question: self.question,
            top_k: self.top_k,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging()?;

    let config = cli.into_config();

    info!(
        version = VERSION,
        host = %config.host,
        port = config.port,
        top_k = config.top_k,
        "Running retrieval probe"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ragprobe_sdk::run_with(&config, &mut out).context("Retrieval probe failed")?;

    Ok(())
}
