//! ada2py-tui - Terminal UI for ada2py
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! [`Engine`](ada2py_app::Engine) from ada2py-app and adds terminal
//! rendering, event polling, and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, run_with_engine};
