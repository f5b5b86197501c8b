//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It is built once at startup from CLI arguments (see `main.rs`) or from
//! [`ServerConfig::default`] in tests.

use std::net::SocketAddr;
use std::time::Duration;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default pause between accepting a request and typing its text.
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_secs(2);

/// All runtime configuration for the typing server.
///
/// # Example
///
/// ```rust
/// use remote_typer::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.port(), 5000);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    ///
    /// `0.0.0.0` accepts connections from any network interface, which is what
    /// a phone on the same Wi-Fi needs.
    pub bind_addr: SocketAddr,

    /// How long a typing job waits before injecting keystrokes.
    pub typing_delay: Duration,

    /// External address used only to work out which local interface faces the
    /// network.  No datagram is ever sent to it.
    pub probe_addr: SocketAddr,
}

impl ServerConfig {
    /// Port component of [`ServerConfig::bind_addr`], shown in the startup banner.
    pub fn port(&self) -> u16 {
        self.bind_addr.port()
    }
}

impl Default for ServerConfig {
    /// | Field          | Default        |
    /// |----------------|----------------|
    /// | bind_addr      | `0.0.0.0:5000` |
    /// | typing_delay   | 2 seconds      |
    /// | probe_addr     | `8.8.8.8:80`   |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            typing_delay: DEFAULT_TYPING_DELAY,
            probe_addr: SocketAddr::from(([8, 8, 8, 8], 80)),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
