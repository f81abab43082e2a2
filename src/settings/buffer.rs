//! Last committed settings snapshot

use super::errors::SettingsError;
use super::fields::{Field, FormFields, FIELDS};
use crate::geometry::Size;
use crate::grid::{Grid, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsBuffer {
    pub grid_width: i32,
    pub grid_height: i32,
    pub tile_width: i32,
    pub tile_height: i32,
    pub stretch: bool,
}

impl SettingsBuffer {
    pub fn new(grid_size: Size, tile_size: Size, stretch: bool) -> Self {
        Self {
            grid_width: grid_size.width,
            grid_height: grid_size.height,
            tile_width: tile_size.width,
            tile_height: tile_size.height,
            stretch,
        }
    }

    pub fn from_grid<S: Surface>(grid: &Grid<S>) -> Self {
        Self::new(grid.grid_size(), grid.tile_size(), grid.stretch())
    }

    /// Parse the current form values; integers for sizes, checked state for stretch
    pub fn from_form<F: FormFields + ?Sized>(form: &F) -> Result<Self, SettingsError> {
        Ok(Self {
            grid_width: parse_integer(form, Field::GridWidth)?,
            grid_height: parse_integer(form, Field::GridHeight)?,
            tile_width: parse_integer(form, Field::TileWidth)?,
            tile_height: parse_integer(form, Field::TileHeight)?,
            stretch: form.checked(Field::Stretch),
        })
    }

    pub fn grid_size(&self) -> Size {
        Size::new(self.grid_width, self.grid_height)
    }

    pub fn tile_size(&self) -> Size {
        Size::new(self.tile_width, self.tile_height)
    }

    fn integer(&self, field: Field) -> Option<i32> {
        match field {
            Field::GridWidth => Some(self.grid_width),
            Field::GridHeight => Some(self.grid_height),
            Field::TileWidth => Some(self.tile_width),
            Field::TileHeight => Some(self.tile_height),
            Field::Stretch => None,
        }
    }

    /// Push every value out to the form
    pub fn write_to<F: FormFields + ?Sized>(&self, form: &mut F) {
        for field in FIELDS {
            match self.integer(field) {
                Some(value) => form.set_value(field, value.to_string()),
                None => form.set_checked(field, self.stretch),
            }
        }
    }

    /// First field whose form value differs from this snapshot.
    /// A value that does not parse counts as a difference.
    pub fn diff<F: FormFields + ?Sized>(&self, form: &F) -> Option<Field> {
        FIELDS.into_iter().find(|&field| match self.integer(field) {
            Some(value) => form.value(field).trim().parse::<i32>().ok() != Some(value),
            None => form.checked(field) != self.stretch,
        })
    }
}

fn parse_integer<F: FormFields + ?Sized>(form: &F, field: Field) -> Result<i32, SettingsError> {
    let raw = form.value(field);
    raw.trim()
        .parse::<i32>()
        .map_err(|_| SettingsError::InvalidField { field, value: raw })
}
