//! TUI (Text User Interface) module for the `ministories` binary
//!
//! Hosts the SDK in a terminal using ratatui/crossterm. The terminal stands
//! in for the host page and renders the `MemoryDocument` state.

pub mod browse_app;
pub mod theme;
pub mod ui;

pub use browse_app::BrowseApp;
pub use theme::current_theme;
