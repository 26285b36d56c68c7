//! Terminal user interface for the market dashboard.
//!
//! A Ratatui-based TUI: tabbed panels over polled backend data, with all
//! state owned by the UI task and mutated only through [`Message`]s.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod tabs;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, FetchTarget, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
