//! Domain layer for remote-typer.
//!
//! Pure types with no dependencies on I/O, networking, or the async runtime:
//!
//! - The JSON bodies exchanged on `POST /type`
//! - The runtime configuration structure
//!
//! Nothing in here reads environment variables or touches a socket; the
//! binary and the infrastructure layer are responsible for that.

pub mod config;
pub mod messages;

pub use config::ServerConfig;
pub use messages::{AcceptedResponse, ErrorResponse, RequestError, TypeRequest};
