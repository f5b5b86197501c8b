//! remote-typer entry point.
//!
//! Listens for `POST /type {"text": "..."}` and, after a short delay, types
//! the text into whatever application has keyboard focus on this machine.
//!
//! # Usage
//!
//! ```text
//! remote-typer [OPTIONS]
//!
//! Options:
//!   --port        <PORT>   HTTP port [default: 5000]
//!   --bind        <IP>     Interface to listen on [default: 0.0.0.0]
//!   --delay-ms    <MS>     Pause before typing [default: 2000]
//!   --probe-addr  <ADDR>   Address used to discover the LAN IP [default: 8.8.8.8:80]
//! ```
//!
//! Every option can also be set through the environment variable shown in
//! `--help` (`TYPER_PORT`, `TYPER_BIND`, ...).  CLI args take precedence.
//!
//! # Example
//!
//! ```text
//! $ remote-typer
//! Server running on http://192.168.1.23:5000
//!
//! $ curl -X POST http://192.168.1.23:5000/type \
//!        -H 'content-type: application/json' -d '{"text":"hello"}'
//! {"message":"Text received and typing initiated"}
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use remote_typer::domain::config::{ServerConfig, DEFAULT_PORT};
use remote_typer::infrastructure::http_server::run_server;
use remote_typer::infrastructure::input_emulation::EnigoTyper;
use remote_typer::infrastructure::network::{banner_ip, banner_line};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Types text received over HTTP into the focused application.
#[derive(Debug, Parser)]
#[command(
    name = "remote-typer",
    about = "HTTP endpoint that types received text into the focused application",
    version
)]
struct Cli {
    /// TCP port for the HTTP server.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "TYPER_PORT")]
    port: u16,

    /// IP address to bind the HTTP server to.
    ///
    /// `0.0.0.0` accepts requests from the LAN; `127.0.0.1` only from this machine.
    #[arg(long, default_value = "0.0.0.0", env = "TYPER_BIND")]
    bind: String,

    /// Milliseconds to wait between accepting a request and typing its text.
    #[arg(long, default_value_t = 2_000, env = "TYPER_DELAY_MS")]
    delay_ms: u64,

    /// External address used to find the LAN-facing IP for the startup banner.
    ///
    /// No traffic is sent to it.
    #[arg(long, default_value = "8.8.8.8:80", env = "TYPER_PROBE_ADDR")]
    probe_addr: String,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not an IP address or `--probe-addr` is
    /// not a socket address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.bind, self.port))?;

        let probe_addr: SocketAddr = self
            .probe_addr
            .parse()
            .with_context(|| format!("invalid probe address: '{}'", self.probe_addr))?;

        Ok(ServerConfig {
            bind_addr,
            typing_delay: Duration::from_millis(self.delay_ms),
            probe_addr,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `RUST_LOG` controls verbosity; default to `info`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_server_config()?;

    info!(
        "remote-typer starting, bind={}, delay={:?}",
        config.bind_addr, config.typing_delay
    );

    // Informational only: the listener below binds `config.bind_addr` no
    // matter what this prints.
    let ip = banner_ip(config.probe_addr);
    println!("{}", banner_line(ip, config.port()));

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => tracing::error!("failed to listen for Ctrl+C signal: {e}"),
        }
    };

    run_server(&config, Arc::new(EnigoTyper::new()), shutdown).await?;

    info!("remote-typer stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
