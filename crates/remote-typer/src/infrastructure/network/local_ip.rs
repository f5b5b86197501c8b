//! Local-IP discovery for the startup banner.
//!
//! # How the UDP "connect" trick works (for beginners)
//!
//! UDP is connectionless, so calling `connect()` on a UDP socket sends nothing
//! on the wire.  It only asks the kernel to pick a route to the destination
//! and pin the socket to it.  Picking a route means picking the outgoing
//! interface, and therefore the local source address.  Reading
//! `local_addr()` afterwards reveals the address other machines on the LAN
//! would use to reach us:
//!
//! ```text
//! bind 0.0.0.0:0  →  connect 8.8.8.8:80  →  local_addr() = 192.168.1.23:54012
//! ```
//!
//! The probe destination never needs to be reachable; it only has to be
//! routable.  On a machine with no default route `connect` fails and the
//! banner falls back to `0.0.0.0`.
//!
//! None of this affects which address the HTTP server binds to.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

use thiserror::Error;
use tracing::{debug, warn};

/// Error type for local-IP discovery.
#[derive(Debug, Error)]
pub enum LocalIpError {
    /// The throwaway UDP socket could not be bound.
    #[error("failed to bind probe socket: {0}")]
    Bind(#[source] std::io::Error),
    /// No route to the probe address.
    #[error("failed to route to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    /// The kernel did not report a local endpoint.
    #[error("failed to read probe socket address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

/// Returns the local address the OS would use to reach `probe`.
///
/// No datagram is sent.  The socket is closed before returning.
///
/// # Errors
///
/// Returns a [`LocalIpError`] describing which of the bind / connect /
/// local-address steps failed.
pub fn discover_local_ip(probe: SocketAddr) -> Result<IpAddr, LocalIpError> {
    let any: IpAddr = match probe {
        SocketAddr::V4(_) => Ipv4Addr::UNSPECIFIED.into(),
        SocketAddr::V6(_) => Ipv6Addr::UNSPECIFIED.into(),
    };
    let socket = UdpSocket::bind((any, 0)).map_err(LocalIpError::Bind)?;
    socket
        .connect(probe)
        .map_err(|source| LocalIpError::Connect {
            addr: probe,
            source,
        })?;
    let local = socket.local_addr().map_err(LocalIpError::LocalAddr)?;
    debug!("probe socket routed via {local}");
    Ok(local.ip())
}

/// Address shown in the startup banner.
///
/// Falls back to `0.0.0.0` on any discovery failure, after printing the
/// reason to stdout.
pub fn banner_ip(probe: SocketAddr) -> IpAddr {
    or_unspecified(discover_local_ip(probe))
}

fn or_unspecified(discovered: Result<IpAddr, LocalIpError>) -> IpAddr {
    match discovered {
        Ok(ip) => ip,
        Err(e) => {
            println!("{}", fallback_message(&e));
            warn!("local IP discovery failed: {e}");
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        }
    }
}

/// Line printed to stdout when discovery fails.
pub fn fallback_message(err: &LocalIpError) -> String {
    format!("Could not determine local IP: {err}")
}

/// `Server running on http://<ip>:<port>`.
pub fn banner_line(ip: IpAddr, port: u16) -> String {
    format!("Server running on http://{}", SocketAddr::new(ip, port))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
