//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, Focus, run_tui};
