//! Application layer use cases.
//!
//! - **`type_text`** – Validates a [`TypeRequest`](crate::domain::TypeRequest),
//!   then schedules a fire-and-forget job that waits the configured delay and
//!   hands the text to a [`TextTyper`](type_text::TextTyper).  The actual OS
//!   call is made by an implementation injected at construction time.

pub mod type_text;
