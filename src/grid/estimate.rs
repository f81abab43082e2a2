//! Footprint estimation used before a grid exists
//!
//! Tiles only learn their border once attached to a surface, so a proposed
//! configuration is checked against a guessed border instead.

use crate::geometry::Size;

/// Border per side assumed when no tile exists yet
pub const DEFAULT_BORDER: Size = Size::square(1);

/// Lower bound of the grid footprint: ignores padding convention and borders
pub fn estimate_size(grid_size: Size, tile_size: Size) -> Size {
    grid_size * tile_size
}

/// Would-be footprint of one tile under the doubled padding convention
pub fn guess_tile_footprint(tile_size: Size, border: Size) -> Size {
    tile_size * 2 + border * 2
}

/// Would-be footprint of the whole grid
pub fn guess_footprint(grid_size: Size, tile_size: Size, border: Size) -> Size {
    grid_size * guess_tile_footprint(tile_size, border)
}
