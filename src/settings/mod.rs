// paintgrid/src/settings/mod.rs

mod buffer;
mod errors;
mod fields;
#[allow(clippy::module_inception)]
mod settings;

pub use buffer::SettingsBuffer;
pub use errors::SettingsError;
pub use fields::{Field, FormFields, Prompt, FIELDS};
pub use settings::{Settings, MAX_GRID_CELLS};
