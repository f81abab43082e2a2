//! Terminal render surface
//!
//! Keeps one element per tile, the way a retained-mode UI keeps widgets.
//! Units are character cells. `ui::draw` walks the elements every frame.

use std::collections::BTreeMap;

use crate::geometry::{Padding, Point, Size};
use crate::grid::{Surface, TileHandle};

/// A tile element as the terminal sees it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TerminalTile {
    pub position: Point,
    pub padding: Padding,
    pub painted: bool,
}

#[derive(Debug, Default)]
pub struct TerminalSurface {
    /// Border drawn on each side of a tile
    border: Size,
    elements: BTreeMap<TileHandle, TerminalTile>,
    next_handle: u64,
}

impl TerminalSurface {
    /// `border` is clamped to 0 or 1 cell per side; a terminal cannot draw
    /// anything between those.
    pub fn new(border: u16) -> Self {
        let side = border.min(1) as i32;
        Self {
            border: Size::square(side),
            ..Self::default()
        }
    }

    pub fn has_border(&self) -> bool {
        self.border.is_positive()
    }

    pub fn elements(&self) -> impl Iterator<Item = (TileHandle, &TerminalTile)> {
        self.elements.iter().map(|(handle, tile)| (*handle, tile))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Surface for TerminalSurface {
    fn attach(&mut self, position: Point) -> TileHandle {
        let handle = TileHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        self.elements.insert(
            handle,
            TerminalTile {
                position,
                ..TerminalTile::default()
            },
        );
        handle
    }

    fn detach(&mut self, handle: TileHandle) {
        self.elements.remove(&handle);
    }

    fn set_padding(&mut self, handle: TileHandle, padding: Padding) {
        if let Some(tile) = self.elements.get_mut(&handle) {
            tile.padding = padding;
        }
    }

    fn set_painted(&mut self, handle: TileHandle, painted: bool) {
        if let Some(tile) = self.elements.get_mut(&handle) {
            tile.painted = painted;
        }
    }

    fn border(&self, _handle: TileHandle) -> Size {
        self.border * 2
    }

    fn measure(&self, handle: TileHandle) -> Size {
        match self.elements.get(&handle) {
            Some(tile) => tile.padding.total() + self.border * 2,
            None => Size::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, GridConfigBuilder};

    #[test]
    fn test_borderless_tiles() {
        let config = GridConfigBuilder::default()
            .grid_size(Size::new(3, 2))
            .tile_size(Size::new(1, 1))
            .build()
            .unwrap();
        let mut grid = Grid::new(config, TerminalSurface::new(0));
        grid.build().unwrap();

        assert_eq!(grid.surface().len(), 6);
        // 1 * 2 + 0 per tile
        assert_eq!(grid.actual_size().unwrap(), Size::new(6, 4));
    }

    #[test]
    fn test_border_is_clamped() {
        let surface = TerminalSurface::new(4);
        assert!(surface.has_border());
        assert_eq!(surface.border(TileHandle(0)), Size::new(2, 2));
    }

    #[test]
    fn test_detach_removes_element() {
        let mut surface = TerminalSurface::new(0);
        let handle = surface.attach(Point::new(0, 0));
        surface.set_painted(handle, true);
        assert!(surface.elements().any(|(_, tile)| tile.painted));
        surface.detach(handle);
        assert!(surface.is_empty());
        assert_eq!(surface.measure(handle), Size::ZERO);
    }
}
