//! TUI module for the paint grid
//!
//! Interactive terminal front-end: the terminal is the render surface, the
//! side panel is the settings form and the status bar is the prompt.

mod app;
mod colors;
mod event;
mod form;
mod status;
mod surface;
pub mod ui;

pub use app::{App, AppOptions, Focus};
pub use event::{Event, EventHandler};
pub use form::SettingsForm;
pub use status::{StatusLevel, StatusLine, StatusMessage};
pub use surface::{TerminalSurface, TerminalTile};
