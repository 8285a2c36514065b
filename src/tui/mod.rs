//! Terminal User Interface module
//!
//! An interactive calculator built on ratatui: pick a rule, tune the custom
//! split, type a net salary and watch the budget chart follow.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
