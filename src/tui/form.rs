//! Settings form state
//!
//! Text inputs for the four dimensions and a checkbox for stretch mode.

use crate::settings::{Field, FormFields, FIELDS};

/// Longest accepted input; the grid is capped at 100 cells anyway
const MAX_INPUT_LEN: usize = 5;

#[derive(Clone, Debug, Default)]
pub struct SettingsForm {
    grid_width: String,
    grid_height: String,
    tile_width: String,
    tile_height: String,
    stretch: bool,
    /// Index into `FIELDS` of the highlighted field
    pub selected: usize,
}

impl SettingsForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_field(&self) -> Field {
        FIELDS[self.selected.min(FIELDS.len() - 1)]
    }

    pub fn select(&mut self, field: Field) {
        if let Some(idx) = FIELDS.iter().position(|&f| f == field) {
            self.selected = idx;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FIELDS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + FIELDS.len() - 1) % FIELDS.len();
    }

    /// Type a digit into the selected input
    pub fn push_digit(&mut self, c: char) {
        let field = self.selected_field();
        if !c.is_ascii_digit() {
            return;
        }
        if let Some(input) = self.input_mut(field) {
            if input.len() < MAX_INPUT_LEN {
                input.push(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        let field = self.selected_field();
        if let Some(input) = self.input_mut(field) {
            input.pop();
        }
    }

    pub fn toggle_stretch(&mut self) {
        self.stretch = !self.stretch;
    }

    fn input(&self, field: Field) -> Option<&String> {
        match field {
            Field::GridWidth => Some(&self.grid_width),
            Field::GridHeight => Some(&self.grid_height),
            Field::TileWidth => Some(&self.tile_width),
            Field::TileHeight => Some(&self.tile_height),
            Field::Stretch => None,
        }
    }

    fn input_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::GridWidth => Some(&mut self.grid_width),
            Field::GridHeight => Some(&mut self.grid_height),
            Field::TileWidth => Some(&mut self.tile_width),
            Field::TileHeight => Some(&mut self.tile_height),
            Field::Stretch => None,
        }
    }
}

impl FormFields for SettingsForm {
    fn value(&self, field: Field) -> String {
        match self.input(field) {
            Some(input) => input.clone(),
            None => self.stretch.to_string(),
        }
    }

    fn set_value(&mut self, field: Field, value: String) {
        if let Some(input) = self.input_mut(field) {
            *input = value;
        }
    }

    fn checked(&self, field: Field) -> bool {
        field.is_toggle() && self.stretch
    }

    fn set_checked(&mut self, field: Field, checked: bool) {
        if field.is_toggle() {
            self.stretch = checked;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_selected_field() {
        let mut form = SettingsForm::new();
        form.set_value(Field::GridWidth, "1".to_string());
        form.push_digit('6');
        form.push_digit('x');
        assert_eq!(form.value(Field::GridWidth), "16");

        form.select_next();
        assert_eq!(form.selected_field(), Field::GridHeight);
        form.push_digit('4');
        form.pop_char();
        form.pop_char();
        assert_eq!(form.value(Field::GridHeight), "");
    }

    #[test]
    fn test_selection_wraps() {
        let mut form = SettingsForm::new();
        form.select_prev();
        assert_eq!(form.selected_field(), Field::Stretch);
        form.select_next();
        assert_eq!(form.selected_field(), Field::GridWidth);
    }

    #[test]
    fn test_input_length_is_bounded() {
        let mut form = SettingsForm::new();
        for _ in 0..10 {
            form.push_digit('9');
        }
        assert_eq!(form.value(Field::GridWidth).len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_stretch_checkbox() {
        let mut form = SettingsForm::new();
        form.select(Field::Stretch);
        form.push_digit('1');
        assert!(!form.checked(Field::Stretch));
        form.toggle_stretch();
        assert!(form.checked(Field::Stretch));
        assert!(!form.checked(Field::TileWidth));
    }
}
