use log::{debug, info, trace, warn};

use super::column::Column;
use super::config::GridConfig;
use super::errors::GridError;
use super::paint::{PaintMode, PointerEvent};
use super::stretch::StretchPolicy;
use super::surface::Surface;
use super::tile::{Tile, TileLayout};
use crate::geometry::{Point, Size};

/// The paintable surface: columns of tiles laid out on a `Surface`
pub struct Grid<S: Surface> {
    config: GridConfig,
    columns: Vec<Column>,
    paint_mode: PaintMode,
    surface: S,
}

impl<S: Surface> Grid<S> {
    /// Create an unbuilt grid. Nothing is attached to `surface` until `build()`.
    pub fn new(config: GridConfig, surface: S) -> Self {
        Self {
            config,
            columns: Vec::new(),
            paint_mode: PaintMode::Idle,
            surface,
        }
    }

    /// Tear down existing tiles and lay out a fresh set from the configuration.
    ///
    /// The new tiles are attached before the old ones are detached, so a
    /// failure leaves the current tiles as they were.
    pub fn build(&mut self) -> Result<(), GridError> {
        let layout = Self::layout_for(&self.config)?;
        let columns = Self::materialize(&mut self.surface, &self.config, layout)?;
        self.commit(columns, layout);
        Ok(())
    }

    /// Swap in a new configuration and rebuild.
    ///
    /// On failure the current tiles and configuration are left as they were.
    pub fn replace(&mut self, config: GridConfig) -> Result<(), GridError> {
        let layout = Self::layout_for(&config)?;
        let columns = Self::materialize(&mut self.surface, &config, layout)?;
        info!(
            "Replacing {} grid with {} grid (stretch: {})",
            self.config.grid_size(),
            config.grid_size(),
            config.stretch()
        );
        self.config = config;
        self.paint_mode = PaintMode::Idle;
        self.commit(columns, layout);
        Ok(())
    }

    fn layout_for(config: &GridConfig) -> Result<TileLayout, GridError> {
        if config.stretch() {
            let max_size = config.max_size().ok_or(GridError::MissingBoundingBox)?;
            let allotment = StretchPolicy::derive_tile_size(max_size, config.grid_size())?;
            Ok(TileLayout::Stretched(allotment))
        } else {
            Ok(TileLayout::Explicit(config.tile_size()))
        }
    }

    /// Attach one column of tiles per grid column, detaching everything
    /// attached so far if a tile cannot hold its realized border
    fn materialize(
        surface: &mut S,
        config: &GridConfig,
        layout: TileLayout,
    ) -> Result<Vec<Column>, GridError> {
        let grid_size = config.grid_size();
        let cols = grid_size.width.max(0) as usize;
        let rows = grid_size.height.max(0) as usize;

        let mut columns = Vec::with_capacity(cols);
        for index in 0..cols {
            match Column::build(surface, index, rows, layout) {
                Some(column) => columns.push(column),
                None => {
                    for column in columns {
                        column.detach(surface);
                    }
                    warn!("{:?} cannot hold the surface border", layout);
                    return Err(GridError::StretchUnderflow {
                        grid: grid_size,
                        available: config.max_size().unwrap_or_default(),
                    });
                }
            }
        }
        Ok(columns)
    }

    /// Drop the current tiles in favor of freshly built `columns`
    fn commit(&mut self, columns: Vec<Column>, layout: TileLayout) {
        self.clear_all();
        self.columns = columns;
        if let TileLayout::Stretched(allotment) = layout {
            self.config.set_tile_size(allotment);
        }
        info!(
            "Built {} grid with tile size {} ({:?})",
            self.config.grid_size(),
            self.config.tile_size(),
            layout
        );
    }

    /// Detach every tile and drop every column
    pub fn clear_all(&mut self) {
        if self.columns.is_empty() {
            return;
        }
        debug!("Clearing {} columns", self.columns.len());
        let surface = &mut self.surface;
        for column in self.columns.drain(..) {
            column.detach(surface);
        }
    }

    /// Reset every tile to unpainted, keeping geometry
    pub fn clear_drawing(&mut self) {
        let surface = &mut self.surface;
        let mut erased = 0;
        for column in self.columns.iter_mut() {
            for tile in column.tiles_mut() {
                if tile.set_painted(surface, false) {
                    erased += 1;
                }
            }
        }
        debug!("Cleared drawing ({} tiles erased)", erased);
    }

    /// Tile at `point`, or `None` outside the current grid extent
    pub fn tile(&self, point: Point) -> Option<&Tile> {
        if !self.contains(point) {
            return None;
        }
        self.columns
            .get(point.col)
            .and_then(|column| column.tiles().get(point.row))
    }

    pub fn try_tile(&self, point: Point) -> Result<&Tile, GridError> {
        self.tile(point).ok_or(GridError::OutOfBounds {
            point,
            size: self.config.grid_size(),
        })
    }

    fn contains(&self, point: Point) -> bool {
        let size = self.config.grid_size();
        (point.col as i64) < size.width as i64 && (point.row as i64) < size.height as i64
    }

    fn first_tile(&self) -> Result<&Tile, GridError> {
        self.columns
            .first()
            .and_then(|column| column.tiles().first())
            .ok_or(GridError::NotBuilt)
    }

    /// Realized footprint as measured by the surface
    pub fn actual_size(&self) -> Result<Size, GridError> {
        let tile = self.first_tile()?;
        Ok(self.surface.measure(tile.handle()) * self.config.grid_size())
    }

    /// Footprint computed from the laid out tiles and their realized border
    pub fn measured_footprint(&self) -> Result<Size, GridError> {
        Ok(self.first_tile()?.footprint() * self.config.grid_size())
    }

    /// Top-left offset of the tile at `point`, relative to the grid origin
    pub fn tile_origin(&self, point: Point) -> Option<Size> {
        let footprint = self.first_tile().ok()?.footprint();
        self.tile(point)?;
        Some(footprint * Size::new(point.col as i32, point.row as i32))
    }

    /// Tile under a surface offset relative to the grid origin
    pub fn locate(&self, x: i32, y: i32) -> Option<Point> {
        if x < 0 || y < 0 {
            return None;
        }
        let footprint = self.first_tile().ok()?.footprint();
        if !footprint.is_positive() {
            return None;
        }
        let point = Point::new((x / footprint.width) as usize, (y / footprint.height) as usize);
        self.contains(point).then_some(point)
    }

    /// Feed an input event through the paint state machine.
    ///
    /// Returns true if a tile changed paint state.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let next = self.paint_mode.next(event);
        if next != self.paint_mode {
            trace!("Paint mode {:?} -> {:?}", self.paint_mode, next);
            self.paint_mode = next;
        }

        match event {
            PointerEvent::Over(point) if self.paint_mode.is_painting() => {
                if !self.contains(point) {
                    return false;
                }
                let surface = &mut self.surface;
                self.columns
                    .get_mut(point.col)
                    .and_then(|column| column.tiles_mut().get_mut(point.row))
                    .map_or(false, |tile| tile.set_painted(surface, true))
            }
            _ => false,
        }
    }

    /// Replace the bounding box; a stretching grid is rebuilt to fill it
    pub fn set_max_size(&mut self, max_size: Size) -> Result<(), GridError> {
        if self.config.max_size() == Some(max_size) {
            return Ok(());
        }
        let previous = self.config.max_size();
        self.config.set_max_size(Some(max_size));
        if self.config.stretch() && !self.columns.is_empty() {
            if let Err(err) = self.build() {
                self.config.set_max_size(previous);
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn grid_size(&self) -> Size {
        self.config.grid_size()
    }

    pub fn tile_size(&self) -> Size {
        self.config.tile_size()
    }

    pub fn max_size(&self) -> Option<Size> {
        self.config.max_size()
    }

    pub fn stretch(&self) -> bool {
        self.config.stretch()
    }

    pub fn paint_mode(&self) -> PaintMode {
        self.paint_mode
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn is_built(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn painted_count(&self) -> usize {
        self.columns
            .iter()
            .flat_map(|column| column.tiles())
            .filter(|tile| tile.is_painted())
            .count()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
