//! User Interface module
//!
//! Terminal harness using ratatui: one button per debugger event.

pub mod app;

pub use app::{Action, App};
