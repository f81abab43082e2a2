// paintgrid/src/grid/errors.rs

use super::config::GridConfigBuilderError;
use crate::geometry::{Point, Size};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Tile {point} is outside the {size} grid")]
    OutOfBounds { point: Point, size: Size },
    #[error("Grid has no tiles yet: build() must run before measuring")]
    NotBuilt,
    #[error("Stretching requires a bounding box (max size)")]
    MissingBoundingBox,
    #[error("Cannot stretch a {grid} grid into {available}: tiles would not hold their border")]
    StretchUnderflow { grid: Size, available: Size },
    #[error(transparent)]
    Config(#[from] GridConfigBuilderError),
}
