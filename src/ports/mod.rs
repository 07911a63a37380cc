// src/ports/mod.rs
pub mod terminal;

pub use terminal::{TerminalNotifier, TerminalPresenter};
