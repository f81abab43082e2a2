//! Stretch sizing policy
//!
//! Derives the space each tile gets from the bounding box the grid has to
//! fill, instead of from a configured tile size.

use log::debug;

use super::errors::GridError;
use crate::geometry::Size;

pub struct StretchPolicy;

impl StretchPolicy {
    /// Space left for the grid inside its container:
    /// container minus the sibling element minus content padding on both sides
    pub fn available_space(container: Size, sibling: Size, content_padding: Size) -> Size {
        container - sibling - content_padding * 2
    }

    /// `floor(max_size / grid_size)` per axis
    pub fn derive_tile_size(max_size: Size, grid_size: Size) -> Result<Size, GridError> {
        if !grid_size.is_positive() {
            return Err(GridError::StretchUnderflow {
                grid: grid_size,
                available: max_size,
            });
        }
        let tile_size = max_size / grid_size;
        debug!(
            "Stretching {} grid into {}: {} per tile",
            grid_size, max_size, tile_size
        );
        if !tile_size.is_positive() {
            return Err(GridError::StretchUnderflow {
                grid: grid_size,
                available: max_size,
            });
        }
        Ok(tile_size)
    }
}
