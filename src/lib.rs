//! jsonscope - Terminal JSON viewer, validator and formatter
//!
//! A single-page utility for pasting, validating, formatting and lightly
//! exploring JSON in the terminal, with a small persisted snapshot history.
//!
//! ## Architecture
//!
//! User actions are synchronous commands on [`app::App`]; the ratatui layer
//! in [`ui`] is a thin draw pass over that state. The text widget itself is
//! `tui-textarea`, wrapped by [`editor::EditorHost`].

// Core modules (pure state and operations)
pub mod history;
pub mod notify;
pub mod ops;
pub mod tree;

// Editor host (third-party widget wrapper)
pub mod editor;

// Theme system
pub mod theme;

// Platform helpers
pub mod clipboard;

// Application state machine and UI shell
pub mod app;
pub mod config;
pub mod ui;

// Re-export commonly used types
pub use app::{App, InputMode};
pub use config::Config;
pub use history::{HistoryEntry, HistoryStore};
pub use notify::AlertKind;
pub use theme::Theme;
