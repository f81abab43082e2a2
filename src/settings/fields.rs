//! Form fields and prompt collaborators
//!
//! The settings panel is owned by whatever front-end hosts the grid. It only
//! has to expose five named fields and a yes/no prompt.

use std::fmt;

/// A named settings field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    GridWidth,
    GridHeight,
    TileWidth,
    TileHeight,
    Stretch,
}

/// Comparison order; the first differing field is the one reported
pub const FIELDS: [Field; 5] = [
    Field::GridWidth,
    Field::GridHeight,
    Field::TileWidth,
    Field::TileHeight,
    Field::Stretch,
];

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::GridWidth => "gridWidth",
            Field::GridHeight => "gridHeight",
            Field::TileWidth => "tileWidth",
            Field::TileHeight => "tileHeight",
            Field::Stretch => "stretch",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::GridWidth => "Grid width",
            Field::GridHeight => "Grid height",
            Field::TileWidth => "Tile width",
            Field::TileHeight => "Tile height",
            Field::Stretch => "Stretch",
        }
    }

    /// Whether the field is a checkbox rather than an integer input
    pub fn is_toggle(&self) -> bool {
        matches!(self, Field::Stretch)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Form holding the editable settings values
pub trait FormFields {
    /// Raw text of an input field
    fn value(&self, field: Field) -> String;

    fn set_value(&mut self, field: Field, value: String);

    /// Checked state of a checkbox field
    fn checked(&self, field: Field) -> bool;

    fn set_checked(&mut self, field: Field, checked: bool);
}

/// Confirmation and notification channel
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;

    fn alert(&mut self, message: &str);
}
