//! Render surface collaborator
//!
//! The grid never draws anything itself. It asks a `Surface` to create one
//! element per tile, to restyle it when it is painted, and to report the
//! realized border and box of an element once it exists.

use crate::geometry::{Padding, Point, Size};

/// Opaque identifier of an element created by a `Surface`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileHandle(pub u64);

pub trait Surface {
    /// Create the element for the tile at `position`
    fn attach(&mut self, position: Point) -> TileHandle;

    /// Destroy an element. Unknown handles are ignored.
    fn detach(&mut self, handle: TileHandle);

    /// Apply padding once the border of the element is known
    fn set_padding(&mut self, handle: TileHandle, padding: Padding);

    fn set_painted(&mut self, handle: TileHandle, painted: bool);

    /// Realized border, summed over both edges of each axis
    fn border(&self, handle: TileHandle) -> Size;

    /// Realized box of the element, border included
    fn measure(&self, handle: TileHandle) -> Size;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Clone, Debug, Default)]
    pub struct MockElement {
        pub position: Point,
        pub padding: Padding,
        pub painted: bool,
    }

    /// In-memory surface recording every element it was asked to create
    #[derive(Debug, Default)]
    pub struct MockSurface {
        /// Border per side applied to every element
        pub border: Size,
        pub elements: BTreeMap<TileHandle, MockElement>,
        next_handle: u64,
        pub detached: usize,
    }

    impl MockSurface {
        pub fn with_border(border: Size) -> Self {
            Self {
                border,
                ..Self::default()
            }
        }

        pub fn painted(&self) -> usize {
            self.elements.values().filter(|e| e.painted).count()
        }
    }

    impl Surface for MockSurface {
        fn attach(&mut self, position: Point) -> TileHandle {
            let handle = TileHandle(self.next_handle);
            self.next_handle += 1;
            self.elements.insert(
                handle,
                MockElement {
                    position,
                    ..MockElement::default()
                },
            );
            handle
        }

        fn detach(&mut self, handle: TileHandle) {
            if self.elements.remove(&handle).is_some() {
                self.detached += 1;
            }
        }

        fn set_padding(&mut self, handle: TileHandle, padding: Padding) {
            if let Some(element) = self.elements.get_mut(&handle) {
                element.padding = padding;
            }
        }

        fn set_painted(&mut self, handle: TileHandle, painted: bool) {
            if let Some(element) = self.elements.get_mut(&handle) {
                element.painted = painted;
            }
        }

        fn border(&self, _handle: TileHandle) -> Size {
            self.border * 2
        }

        fn measure(&self, handle: TileHandle) -> Size {
            self.elements
                .get(&handle)
                .map(|e| e.padding.total() + self.border * 2)
                .unwrap_or(Size::ZERO)
        }
    }
}
