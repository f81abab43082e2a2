use log::{debug, info, warn};

use super::buffer::SettingsBuffer;
use super::errors::SettingsError;
use super::fields::{Field, FormFields, Prompt};
use crate::geometry::Size;
use crate::grid::{
    guess_footprint, Grid, GridConfigBuilder, GridError, StretchPolicy, Surface, DEFAULT_BORDER,
};

/// Hard cap on grid dimensions, in cells
pub const MAX_GRID_CELLS: Size = Size::square(100);

/// Mediates reconfiguration of a live grid through an external form
pub struct Settings<S: Surface> {
    grid: Grid<S>,
    buffer: SettingsBuffer,
}

impl<S: Surface> Settings<S> {
    pub fn new(grid: Grid<S>) -> Self {
        let buffer = SettingsBuffer::from_grid(&grid);
        Self { grid, buffer }
    }

    pub fn grid(&self) -> &Grid<S> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<S> {
        &mut self.grid
    }

    pub fn buffer(&self) -> &SettingsBuffer {
        &self.buffer
    }

    /// Snapshot the grid into the buffer and push it out to the form
    pub fn load_buffer<F: FormFields + ?Sized>(&mut self, form: &mut F) {
        self.buffer = SettingsBuffer::from_grid(&self.grid);
        debug!("Loaded settings buffer {:?}", self.buffer);
        self.buffer.write_to(form);
    }

    /// First form field that differs from the committed snapshot
    pub fn has_changes<F: FormFields + ?Sized>(&self, form: &F) -> Option<Field> {
        self.buffer.diff(form)
    }

    /// Abandon unsaved edits
    pub fn discard_changes<F: FormFields + ?Sized>(&self, form: &mut F) {
        debug!("Discarding form edits");
        self.buffer.write_to(form);
    }

    /// Check a proposed configuration without touching the grid
    pub fn validate(
        grid_size: Size,
        tile_size: Size,
        stretch: bool,
        max_size: Size,
    ) -> Result<(), SettingsError> {
        let dimensions = [
            (Field::GridWidth, grid_size.width),
            (Field::GridHeight, grid_size.height),
            (Field::TileWidth, tile_size.width),
            (Field::TileHeight, tile_size.height),
        ];
        for (field, value) in dimensions {
            // Tile size is derived when stretching
            if stretch && matches!(field, Field::TileWidth | Field::TileHeight) {
                continue;
            }
            if value < 1 {
                return Err(SettingsError::InvalidDimensions { field, value });
            }
        }

        if !grid_size.fits_within(MAX_GRID_CELLS) {
            return Err(SettingsError::SizeCapExceeded {
                requested: grid_size,
                cap: MAX_GRID_CELLS,
            });
        }

        if stretch {
            StretchPolicy::derive_tile_size(max_size, grid_size)?;
        } else {
            let estimated = guess_footprint(grid_size, tile_size, DEFAULT_BORDER);
            if !estimated.fits_within(max_size) {
                return Err(SettingsError::FootprintCapExceeded {
                    estimated,
                    max: max_size,
                });
            }
        }
        Ok(())
    }

    /// Validate and commit a new configuration.
    ///
    /// On rejection the grid and the buffer are left as they were.
    pub fn apply_changes(
        &mut self,
        grid_size: Size,
        tile_size: Size,
        stretch: bool,
        max_size: Size,
    ) -> Result<(), SettingsError> {
        if let Err(err) = Self::validate(grid_size, tile_size, stretch, max_size) {
            warn!("Rejected settings: {}", err);
            return Err(err);
        }

        let config = GridConfigBuilder::default()
            .grid_size(grid_size)
            .tile_size(tile_size)
            .max_size(max_size)
            .stretch(stretch)
            .build()
            .map_err(GridError::from)?;
        self.grid.replace(config)?;
        self.buffer = SettingsBuffer::from_grid(&self.grid);

        info!(
            "Applied settings: grid {}, tile {}, stretch {}",
            self.grid.grid_size(),
            self.grid.tile_size(),
            self.grid.stretch()
        );
        Ok(())
    }

    /// Parse the form and apply it
    pub fn apply_form<F: FormFields + ?Sized>(
        &mut self,
        form: &F,
        max_size: Size,
    ) -> Result<(), SettingsError> {
        let proposed = SettingsBuffer::from_form(form)?;
        self.apply_changes(
            proposed.grid_size(),
            proposed.tile_size(),
            proposed.stretch,
            max_size,
        )
    }

    /// Apply the form, reporting any violated constraint through `prompt`.
    ///
    /// Returns true when the new configuration was committed.
    pub fn submit<F, P>(&mut self, form: &mut F, max_size: Size, prompt: &mut P) -> bool
    where
        F: FormFields + ?Sized,
        P: Prompt + ?Sized,
    {
        match self.apply_form(form, max_size) {
            Ok(()) => {
                self.buffer.write_to(form);
                true
            }
            Err(err) => {
                prompt.alert(&err.to_string());
                false
            }
        }
    }

    /// Close the form, confirming first if it holds unsaved edits.
    ///
    /// Returns true if the form was closed (and reset to the committed values).
    pub fn close<F, P>(&self, form: &mut F, prompt: &mut P) -> bool
    where
        F: FormFields + ?Sized,
        P: Prompt + ?Sized,
    {
        if let Some(field) = self.has_changes(form) {
            let message = format!("Unsaved change to {}. Discard it?", field.label());
            if !prompt.confirm(&message) {
                return false;
            }
        }
        self.discard_changes(form);
        true
    }

    /// Erase the drawing after confirmation. Returns true if it was erased.
    pub fn clear_drawing<P: Prompt + ?Sized>(&mut self, prompt: &mut P) -> bool {
        if self.grid.painted_count() == 0 {
            return false;
        }
        if !prompt.confirm("Clear the drawing?") {
            return false;
        }
        self.grid.clear_drawing();
        true
    }
}
