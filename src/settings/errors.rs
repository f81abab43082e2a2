// paintgrid/src/settings/errors.rs

use super::fields::Field;
use crate::geometry::Size;
use crate::grid::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{field} must be at least 1, got {value}")]
    InvalidDimensions { field: Field, value: i32 },
    #[error("Grid of {requested} cells exceeds the maximum of {cap} cells")]
    SizeCapExceeded { requested: Size, cap: Size },
    #[error("Grid would be about {estimated} units but only {max} fit")]
    FootprintCapExceeded { estimated: Size, max: Size },
    #[error("Invalid value for {field}: {value:?}")]
    InvalidField { field: Field, value: String },
    #[error(transparent)]
    Grid(#[from] GridError),
}
