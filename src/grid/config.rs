//! Grid configuration
//!
//! The dimensions a `Grid` is built from. A configuration is never edited in
//! place by callers: reconfiguring means building a new `GridConfig` and
//! handing it to `Grid::replace`.

use derive_builder::Builder;

use crate::geometry::Size;

/// Default grid dimensions, in cells
pub const DEFAULT_GRID_SIZE: Size = Size::square(16);

/// Default tile size, in surface units
pub const DEFAULT_TILE_SIZE: Size = Size::square(1);

#[derive(Builder, Clone, Copy, Debug, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct GridConfig {
    /// Number of columns (width) and rows (height)
    grid_size: Size,

    /// Configured tile size; derived from `max_size` when stretching
    #[builder(default = "DEFAULT_TILE_SIZE")]
    tile_size: Size,

    /// Bounding box the grid has to fit in
    #[builder(default, setter(strip_option))]
    max_size: Option<Size>,

    #[builder(default)]
    stretch: bool,
}

impl GridConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(grid_size) = self.grid_size {
            if !grid_size.is_positive() {
                return Err(format!("grid size must be at least 1x1, got {}", grid_size));
            }
        }
        let stretch = self.stretch.unwrap_or(false);
        let max_size = self.max_size.flatten();
        if stretch && max_size.is_none() {
            return Err("stretch requires a max size".to_string());
        }
        if let Some(tile_size) = self.tile_size {
            if !stretch && !tile_size.is_positive() {
                return Err(format!("tile size must be at least 1x1, got {}", tile_size));
            }
        }
        Ok(())
    }
}

impl GridConfig {
    pub fn grid_size(&self) -> Size {
        self.grid_size
    }

    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    pub fn max_size(&self) -> Option<Size> {
        self.max_size
    }

    pub fn stretch(&self) -> bool {
        self.stretch
    }

    pub(crate) fn set_tile_size(&mut self, tile_size: Size) {
        self.tile_size = tile_size;
    }

    pub(crate) fn set_max_size(&mut self, max_size: Option<Size>) {
        self.max_size = max_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfigBuilder::default()
            .grid_size(Size::new(10, 10))
            .build()
            .unwrap();
        assert_eq!(config.tile_size(), DEFAULT_TILE_SIZE);
        assert_eq!(config.max_size(), None);
        assert!(!config.stretch());
    }

    #[test]
    fn test_missing_grid_size() {
        assert!(GridConfigBuilder::default().build().is_err());
    }

    #[test]
    fn test_rejects_empty_grid() {
        let result = GridConfigBuilder::default()
            .grid_size(Size::new(0, 10))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_stretch_needs_max_size() {
        let result = GridConfigBuilder::default()
            .grid_size(Size::new(4, 4))
            .stretch(true)
            .build();
        assert!(result.is_err());

        let config = GridConfigBuilder::default()
            .grid_size(Size::new(4, 4))
            .tile_size(Size::ZERO)
            .max_size(Size::new(40, 40))
            .stretch(true)
            .build()
            .unwrap();
        assert!(config.stretch());
    }
}
