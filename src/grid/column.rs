use super::surface::Surface;
use super::tile::{Tile, TileLayout};
use crate::geometry::Point;

/// One grid column; tiles are indexed by row
#[derive(Clone, Debug)]
pub struct Column {
    index: usize,
    tiles: Vec<Tile>,
}

impl Column {
    /// Attach `rows` tiles. On failure the tiles attached so far are detached.
    pub(crate) fn build<S: Surface>(
        surface: &mut S,
        index: usize,
        rows: usize,
        layout: TileLayout,
    ) -> Option<Self> {
        let mut column = Self {
            index,
            tiles: Vec::with_capacity(rows),
        };
        for row in 0..rows {
            match Tile::attach(surface, Point::new(index, row), layout) {
                Some(tile) => column.tiles.push(tile),
                None => {
                    column.detach(surface);
                    return None;
                }
            }
        }
        Some(column)
    }

    pub(crate) fn detach<S: Surface>(self, surface: &mut S) {
        for tile in self.tiles {
            tile.detach(surface);
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
