use pretty_env_logger;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialise `pretty_env_logger` once; verbosity follows `RUST_LOG`
pub fn setup_logger() {
    INIT.call_once(|| {
        pretty_env_logger::init();
    });
}

pub use geometry::{split_padding, Padding, Point, Size};
pub use grid::{Grid, GridConfig, GridConfigBuilder, GridError, PaintMode, PointerEvent, Surface};
pub use settings::{Field, FormFields, Prompt, Settings, SettingsError};
pub mod geometry;
pub mod grid;
pub mod settings;
pub mod tui;
