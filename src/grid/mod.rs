// paintgrid/src/grid/mod.rs

mod column;
mod config;
mod errors;
mod estimate;
#[allow(clippy::module_inception)]
mod grid;
mod paint;
mod stretch;
mod surface;
mod tile;

pub use column::Column;
pub use config::{
    GridConfig, GridConfigBuilder, GridConfigBuilderError, DEFAULT_GRID_SIZE, DEFAULT_TILE_SIZE,
};
pub use errors::GridError;
pub use estimate::{
    estimate_size, guess_footprint, guess_tile_footprint, DEFAULT_BORDER,
};
pub use grid::Grid;
pub use paint::{PaintMode, PointerEvent};
pub use stretch::StretchPolicy;
pub use surface::{Surface, TileHandle};
pub use tile::{Tile, TileLayout};

#[cfg(test)]
pub(crate) use surface::mock;
