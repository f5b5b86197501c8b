//! Network helpers.
//!
//! - **`local_ip`** – best-effort discovery of the LAN-facing address, used to
//!   print a clickable URL at startup.

pub mod local_ip;

pub use local_ip::{banner_ip, banner_line, discover_local_ip, fallback_message, LocalIpError};
