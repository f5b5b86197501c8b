//! Keystroke injection implementations of [`TextTyper`](crate::application::type_text::TextTyper).

pub mod enigo_typer;
pub mod mock;

pub use enigo_typer::EnigoTyper;
