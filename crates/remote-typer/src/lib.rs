//! remote-typer library crate.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does remote-typer do? (for beginners)
//!
//! It turns the machine it runs on into a "remote keyboard".  Another device
//! on the LAN (a phone, a script, a second computer) sends
//! `POST /type {"text": "..."}` and, two seconds later, the text appears in
//! whatever window currently has keyboard focus, exactly as if someone had
//! typed it.  The delay gives the user time to click into the target field.
//!
//! The HTTP response comes back immediately; the typing happens afterwards in
//! a background task whose outcome is only ever written to the log.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! HTTP client (JSON)
//!         ↕
//! [remote-typer]
//!   ├── domain/             Pure types: request/response bodies, ServerConfig
//!   ├── application/        TypeTextUseCase: validate, delay, inject
//!   └── infrastructure/
//!         ├── http_server/      axum router + listener
//!         ├── input_emulation/  enigo-backed TextTyper (+ mock)
//!         └── network/          local-IP discovery for the startup banner
//! ```

/// Domain layer: pure business-logic types (no I/O).
pub mod domain;

/// Application layer: the deferred typing use case.
pub mod application;

/// Infrastructure layer: HTTP server, OS input injection, and network helpers.
pub mod infrastructure;
