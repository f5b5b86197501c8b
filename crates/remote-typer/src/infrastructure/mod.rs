//! Infrastructure layer.
//!
//! Contains the OS- and network-facing adapters.
//!
//! **Dependency rule**: this layer may depend on `application` and `domain`,
//! but MUST NOT be imported by them.
//!
//! # Sub-modules
//!
//! - **`http_server`** – axum router for `POST /type` and the listener loop.
//!
//! - **`input_emulation`** – `TextTyper` implementations: the `enigo`-backed
//!   production typer and a recording typer for tests.
//!
//! - **`network`** – local-IP discovery used only for the startup banner.

pub mod http_server;
pub mod input_emulation;
pub mod network;
