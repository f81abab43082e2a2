//! Main application state machine
//!
//! Routes terminal input to the grid (painting) and to the settings panel
//! (reconfiguration), and keeps the grid's bounding box in step with the
//! terminal size.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, warn};
use ratatui::prelude::Rect;
use std::time::{Duration, Instant};

use super::form::SettingsForm;
use super::status::{StatusLevel, StatusLine};
use super::surface::TerminalSurface;
use super::ui::AppLayout;

use crate::geometry::{Point, Size};
use crate::grid::{Grid, GridConfigBuilder, GridError, PointerEvent};
use crate::settings::{Field, Settings, SettingsError, FIELDS};

/// Startup configuration, usually from the command line
#[derive(Clone, Debug)]
pub struct AppOptions {
    pub grid_size: Size,
    pub tile_size: Size,
    pub stretch: bool,
    /// Tile border per side, in cells (0 or 1)
    pub border: u16,
    pub status_timeout: Duration,
}

/// Which panel has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    /// Paintable grid
    #[default]
    Grid,
    /// Settings form
    Settings,
}

/// Main application state
pub struct App {
    /// Live grid and its committed settings
    pub settings: Settings<TerminalSurface>,

    /// Editable settings values
    pub form: SettingsForm,

    /// Active UI focus
    pub focus: Focus,

    /// Status bar, doubling as the confirmation prompt
    pub status: StatusLine,

    /// Whether to show help overlay
    pub show_help: bool,

    /// Cached grid area (inside the border) for mouse hit detection
    pub grid_area: Rect,

    /// Cached settings panel area for mouse hit detection
    pub settings_area: Rect,

    /// Space the grid may occupy
    pub max_size: Size,

    /// Last key pressed, used to detect repeated confirmations
    last_key: Option<KeyCode>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Build the initial grid for a terminal of `area`
    pub fn new(options: &AppOptions, area: Rect) -> Result<Self, SettingsError> {
        let layout = AppLayout::new(area);
        let max_size = layout.grid_space();
        let mut status = StatusLine::new(options.status_timeout);

        match Settings::<TerminalSurface>::validate(
            options.grid_size,
            options.tile_size,
            options.stretch,
            max_size,
        ) {
            Ok(()) => {}
            // An oversized grid is still usable, it just gets clipped
            Err(err @ SettingsError::FootprintCapExceeded { .. }) => {
                warn!("Starting with an oversized grid: {}", err);
                status.set(err.to_string(), StatusLevel::Warning);
            }
            Err(err) => return Err(err),
        }

        let config = GridConfigBuilder::default()
            .grid_size(options.grid_size)
            .tile_size(options.tile_size)
            .max_size(max_size)
            .stretch(options.stretch)
            .build()
            .map_err(GridError::from)?;
        let mut grid = Grid::new(config, TerminalSurface::new(options.border));
        grid.build()?;

        let mut settings = Settings::new(grid);
        let mut form = SettingsForm::new();
        settings.load_buffer(&mut form);

        Ok(Self {
            settings,
            form,
            focus: Focus::Grid,
            status,
            show_help: false,
            grid_area: layout.grid_inner(),
            settings_area: layout.settings,
            max_size,
            last_key: None,
            should_quit: false,
        })
    }

    /// Handle tick events (message expiry)
    pub fn on_tick(&mut self) {
        self.status.expire(Instant::now());
    }

    /// Track a new terminal layout; a stretching grid is rebuilt to fill it
    pub fn on_layout(&mut self, layout: &AppLayout) {
        self.grid_area = layout.grid_inner();
        self.settings_area = layout.settings;

        let max_size = layout.grid_space();
        if max_size == self.max_size || !max_size.is_positive() {
            return;
        }
        debug!("Grid space changed from {} to {}", self.max_size, max_size);
        self.max_size = max_size;

        if let Err(err) = self.settings.grid_mut().set_max_size(max_size) {
            self.status
                .set(format!("Terminal too small: {}", err), StatusLevel::Warning);
        }
    }

    /// Handle key events
    pub fn on_key(&mut self, key: KeyEvent) {
        // A confirmation only holds while the same key is repeated
        if self.last_key != Some(key.code) {
            self.status.disarm();
        }
        self.last_key = Some(key.code);

        match key.code {
            KeyCode::Char('q') if self.focus == Focus::Grid => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = !self.show_help;
                return;
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Grid => self.handle_grid_key(key),
            Focus::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Char('s') => self.open_settings(),
            KeyCode::Char('c') => {
                if self.settings.grid().painted_count() == 0 {
                    self.status.set("Nothing to clear", StatusLevel::Info);
                } else if self.settings.clear_drawing(&mut self.status) {
                    self.status.set("Drawing cleared", StatusLevel::Success);
                }
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::BackTab => self.form.select_prev(),
            KeyCode::Down => self.form.select_next(),
            KeyCode::Char(c) if c.is_ascii_digit() => self.form.push_digit(c),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Char(' ') => {
                self.form.select(Field::Stretch);
                self.form.toggle_stretch();
            }
            KeyCode::Enter => self.submit_settings(),
            KeyCode::Esc | KeyCode::Tab => self.close_settings(),
            _ => {}
        }
    }

    fn open_settings(&mut self) {
        self.settings.load_buffer(&mut self.form);
        self.focus = Focus::Settings;
        self.status.set(
            "Edit settings: Enter apply, Esc close",
            StatusLevel::Info,
        );
    }

    fn submit_settings(&mut self) {
        if self
            .settings
            .submit(&mut self.form, self.max_size, &mut self.status)
        {
            let grid = self.settings.grid();
            self.status.set(
                format!(
                    "Grid is now {} with tile size {}",
                    grid.grid_size(),
                    grid.tile_size()
                ),
                StatusLevel::Success,
            );
            self.focus = Focus::Grid;
        }
    }

    fn close_settings(&mut self) {
        if self.settings.close(&mut self.form, &mut self.status) {
            self.focus = Focus::Grid;
            self.status.clear();
        }
    }

    /// Field with unsaved edits, if any
    pub fn pending_change(&self) -> Option<Field> {
        self.settings.has_changes(&self.form)
    }

    /// Handle mouse events
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let x = mouse.column;
        let y = mouse.row;
        let over = self.mouse_to_tile(x, y);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.is_in_rect(x, y, self.settings_area) {
                    self.handle_settings_click(y);
                }
                // Painting starts on any press, wherever it lands
                let grid = self.settings.grid_mut();
                grid.handle_pointer(PointerEvent::Down);
                if let Some(point) = over {
                    grid.handle_pointer(PointerEvent::Over(point));
                }
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if let Some(point) = over {
                    self.settings
                        .grid_mut()
                        .handle_pointer(PointerEvent::Over(point));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.settings.grid_mut().handle_pointer(PointerEvent::Up);
            }
            _ => {}
        }
    }

    /// Click inside the settings panel: focus it and select the clicked field
    fn handle_settings_click(&mut self, y: u16) {
        if self.focus != Focus::Settings {
            self.open_settings();
        }
        // Fields are listed one per line right below the top border
        let rel_y = y.saturating_sub(self.settings_area.y + 1) as usize;
        if let Some(&field) = FIELDS.get(rel_y) {
            self.form.select(field);
            if field.is_toggle() {
                self.form.toggle_stretch();
            }
        }
    }

    /// Check if coordinates are within a rect
    fn is_in_rect(&self, x: u16, y: u16, rect: Rect) -> bool {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    }

    /// Convert mouse coordinates to the tile under them
    fn mouse_to_tile(&self, x: u16, y: u16) -> Option<Point> {
        if !self.is_in_rect(x, y, self.grid_area) {
            return None;
        }
        let rel_x = (x - self.grid_area.x) as i32;
        let rel_y = (y - self.grid_area.y) as i32;
        self.settings.grid().locate(rel_x, rel_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PaintMode;
    use crate::settings::FormFields;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn options() -> AppOptions {
        AppOptions {
            grid_size: Size::new(8, 6),
            tile_size: Size::new(1, 1),
            stretch: false,
            border: 0,
            status_timeout: Duration::from_secs(5),
        }
    }

    fn app() -> App {
        App::new(&options(), Rect::new(0, 0, 120, 40)).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        let grid = app.settings.grid();
        assert_eq!(grid.columns().len(), 8);
        assert_eq!(app.max_size, Size::new(88, 32));
        assert_eq!(app.pending_change(), None);
        assert_eq!(app.form.value(Field::GridWidth), "8");
    }

    #[test]
    fn test_drag_paints() {
        let mut app = app();
        let origin_x = app.grid_area.x;
        let origin_y = app.grid_area.y;

        // Hovering without a press paints nothing
        app.on_mouse(mouse(MouseEventKind::Moved, origin_x, origin_y));
        assert_eq!(app.settings.grid().painted_count(), 0);

        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), origin_x, origin_y));
        assert_eq!(app.settings.grid().paint_mode(), PaintMode::Painting);
        // Tiles are 2x2 cells without a border
        app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), origin_x + 2, origin_y));
        app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), origin_x + 3, origin_y + 1));
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), origin_x + 3, origin_y));

        let grid = app.settings.grid();
        assert_eq!(grid.paint_mode(), PaintMode::Idle);
        assert_eq!(grid.painted_count(), 2);
        assert!(grid.tile(Point::new(1, 0)).unwrap().is_painted());
    }

    #[test]
    fn test_clear_needs_repeat() {
        let mut app = app();
        let (x, y) = (app.grid_area.x, app.grid_area.y);
        app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x, y));
        assert_eq!(app.settings.grid().painted_count(), 1);

        app.on_key(key(KeyCode::Char('c')));
        assert_eq!(app.settings.grid().painted_count(), 1);
        app.on_key(key(KeyCode::Char('c')));
        assert_eq!(app.settings.grid().painted_count(), 0);
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut app = app();
        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Settings);

        // Replace grid width with 12
        app.on_key(key(KeyCode::Backspace));
        app.on_key(key(KeyCode::Char('1')));
        app.on_key(key(KeyCode::Char('2')));
        assert_eq!(app.pending_change(), Some(Field::GridWidth));

        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.focus, Focus::Grid);
        assert_eq!(app.settings.grid().columns().len(), 12);
        assert_eq!(app.pending_change(), None);
    }

    #[test]
    fn test_rejected_settings_keep_focus() {
        let mut app = app();
        app.on_key(key(KeyCode::Tab));
        app.form.set_value(Field::GridWidth, "200".to_string());
        app.on_key(key(KeyCode::Enter));

        assert_eq!(app.focus, Focus::Settings);
        assert_eq!(app.settings.grid().columns().len(), 8);
        let msg = app.status.message.as_ref().unwrap();
        assert_eq!(msg.level, StatusLevel::Error);
        assert!(msg.text.contains("100x100"));
    }

    #[test]
    fn test_close_with_edits_needs_repeat() {
        let mut app = app();
        app.on_key(key(KeyCode::Tab));
        app.on_key(key(KeyCode::Char('3')));

        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Settings);
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.focus, Focus::Grid);
        assert_eq!(app.form.value(Field::GridWidth), "8");
    }

    #[test]
    fn test_stretch_follows_layout() {
        let mut options = options();
        options.stretch = true;
        let mut app = App::new(&options, Rect::new(0, 0, 120, 40)).unwrap();
        // 88x32 split into 8x6 tiles
        assert_eq!(app.settings.grid().tile_size(), Size::new(11, 5));

        app.on_layout(&AppLayout::new(Rect::new(0, 0, 80, 40)));
        assert_eq!(app.max_size, Size::new(48, 32));
        assert_eq!(app.settings.grid().tile_size(), Size::new(6, 5));
    }

    #[test]
    fn test_oversized_start_warns() {
        let mut options = options();
        options.tile_size = Size::new(20, 20);
        let app = App::new(&options, Rect::new(0, 0, 120, 40)).unwrap();
        assert_eq!(
            app.status.message.as_ref().map(|m| m.level),
            Some(StatusLevel::Warning)
        );
    }

    #[test]
    fn test_huge_tiles_at_start_warn_instead_of_overflowing() {
        let mut options = options();
        options.tile_size = Size::new(1_500_000_000, 1);
        let app = App::new(&options, Rect::new(0, 0, 120, 40)).unwrap();
        assert_eq!(
            app.status.message.as_ref().map(|m| m.level),
            Some(StatusLevel::Warning)
        );
        let footprint = app.settings.grid().measured_footprint().unwrap();
        assert_eq!(footprint.width, i32::MAX);
        assert_eq!(app.settings.grid().locate(0, 0), Some(Point::new(0, 0)));
    }

    #[test]
    fn test_shrinking_below_tile_border_keeps_grid() {
        let mut options = options();
        options.stretch = true;
        options.border = 1;
        let mut app = App::new(&options, Rect::new(0, 0, 120, 40)).unwrap();
        assert_eq!(app.settings.grid().tile_size(), Size::new(11, 5));

        // 8x12 leaves 1x2 per tile, too small for a border on each side
        app.on_layout(&AppLayout::new(Rect::new(0, 0, 40, 20)));
        assert_eq!(app.max_size, Size::new(8, 12));
        assert_eq!(app.settings.grid().tile_size(), Size::new(11, 5));
        assert_eq!(app.settings.grid().surface().len(), 48);
        assert_eq!(
            app.status.message.as_ref().map(|m| m.level),
            Some(StatusLevel::Warning)
        );
    }

    #[test]
    fn test_size_cap_at_start_is_an_error() {
        let mut options = options();
        options.grid_size = Size::new(101, 1);
        assert!(App::new(&options, Rect::new(0, 0, 120, 40)).is_err());
    }
}
