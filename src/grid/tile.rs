//! A single paintable cell

use super::surface::{Surface, TileHandle};
use crate::geometry::{Padding, Point, Size};

/// How a tile derives the space it occupies on each axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileLayout {
    /// Configured tile size; padding on every edge equals the tile size
    Explicit(Size),
    /// Fixed allotment per tile, border included
    Stretched(Size),
}

impl TileLayout {
    /// Units per axis a tile occupies given `border` units on each side
    pub fn allotment(&self, border: Size) -> Size {
        match *self {
            TileLayout::Explicit(tile_size) => tile_size * 2 + border * 2,
            TileLayout::Stretched(allotment) => allotment,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tile {
    position: Point,
    size: Size,
    /// Realized border, both edges summed
    border: Size,
    padding: Padding,
    painted: bool,
    handle: TileHandle,
}

impl Tile {
    /// Create the element on `surface` and lay it out once its border is known.
    ///
    /// Returns `None`, with the element detached again, when the allotment
    /// cannot hold the realized border.
    pub(crate) fn attach<S: Surface>(
        surface: &mut S,
        position: Point,
        layout: TileLayout,
    ) -> Option<Self> {
        let handle = surface.attach(position);
        let border = surface.border(handle);
        let per_side = border / Size::square(2);
        let allotment = layout.allotment(per_side);
        if !border.fits_within(allotment) {
            surface.detach(handle);
            return None;
        }
        let padding = Padding::from_allotment(allotment, per_side);
        surface.set_padding(handle, padding);

        let size = match layout {
            TileLayout::Explicit(tile_size) => tile_size,
            TileLayout::Stretched(allotment) => allotment,
        };

        Some(Self {
            position,
            size,
            border,
            padding,
            painted: false,
            handle,
        })
    }

    pub(crate) fn detach<S: Surface>(self, surface: &mut S) {
        surface.detach(self.handle);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn border(&self) -> Size {
        self.border
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn handle(&self) -> TileHandle {
        self.handle
    }

    pub fn is_painted(&self) -> bool {
        self.painted
    }

    /// Units this tile occupies on the surface, computed from its layout
    pub fn footprint(&self) -> Size {
        self.padding.total() + self.border
    }

    /// Returns true if the paint state changed
    pub(crate) fn set_painted<S: Surface>(&mut self, surface: &mut S, painted: bool) -> bool {
        if self.painted == painted {
            return false;
        }
        self.painted = painted;
        surface.set_painted(self.handle, painted);
        true
    }
}
