//! Interactive terminal UI

mod app;
mod rendering;

pub use app::{App, InputField, run_tui};
