//! Main UI layout and rendering
//!
//! Composes all panels into the final TUI layout

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, Focus};
use super::colors::tile_colors;
use super::status::StatusLevel;
use crate::geometry::Size;
use crate::grid::{StretchPolicy, Surface};
use crate::settings::{FormFields, FIELDS};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
pub const SETTINGS_PANEL_WIDTH: u16 = 30;

/// Screen areas of the main panels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    /// Grid panel, border included
    pub grid: Rect,
    pub settings: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        // Main layout: header, body, footer
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        // Split body: grid (left) + settings (right)
        let body_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(SETTINGS_PANEL_WIDTH),
            ])
            .split(main_layout[1]);

        Self {
            header: main_layout[0],
            grid: body_layout[0],
            settings: body_layout[1],
            footer: main_layout[2],
        }
    }

    /// Drawable area of the grid panel
    pub fn grid_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.grid)
    }

    /// Space left for tiles: the body minus the settings panel minus the
    /// grid panel border
    pub fn grid_space(&self) -> Size {
        let body = Size::new(
            (self.grid.width + self.settings.width) as i32,
            self.grid.height as i32,
        );
        let sibling = Size::new(self.settings.width as i32, 0);
        StretchPolicy::available_space(body, sibling, Size::square(1))
    }
}

/// Draw the complete UI
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let layout = AppLayout::new(area);
    app.on_layout(&layout);

    render_header(frame, layout.header, app);
    render_grid(frame, layout.grid, app);
    render_settings(frame, layout.settings, app);
    render_footer(frame, layout.footer, app);

    // Help overlay if active
    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let painting = app.settings.grid().paint_mode().is_painting();
    let mode = if painting {
        Span::styled(" ● painting ", Style::default().fg(Color::Cyan).bold())
    } else {
        Span::styled(" ○ idle ", Style::default().fg(Color::DarkGray))
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled("Paint Grid", Style::default().fg(Color::Cyan).bold()),
        Span::raw("  "),
        mode,
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, area);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Grid;
    let grid = app.settings.grid();

    let block = Block::default()
        .title(format!(" Grid {} ", grid.grid_size()))
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let surface = grid.surface();
    let painting = grid.paint_mode().is_painting();

    for (handle, tile) in surface.elements() {
        let tile_box = surface.measure(handle);
        if !tile_box.is_positive() {
            continue;
        }
        let offset_x = tile.position.col as i64 * tile_box.width as i64;
        let offset_y = tile.position.row as i64 * tile_box.height as i64;
        if offset_x >= inner.width as i64 || offset_y >= inner.height as i64 {
            continue;
        }

        // Clip tiles hanging over the right/bottom edge
        let x = inner.x + offset_x as u16;
        let y = inner.y + offset_y as u16;
        let width = u16::try_from(tile_box.width)
            .unwrap_or(u16::MAX)
            .min(inner.right() - x);
        let height = u16::try_from(tile_box.height)
            .unwrap_or(u16::MAX)
            .min(inner.bottom() - y);
        let rect = Rect::new(x, y, width, height);

        let (border, bg) = tile_colors(tile.position, tile.painted, painting);
        let widget = if surface.has_border() {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(bg))
        } else {
            Block::default().style(Style::default().bg(bg))
        };
        frame.render_widget(widget, rect);
    }
}

fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Settings;
    let pending = app.pending_change();

    let title = match pending {
        Some(_) if is_focused => " Settings * ".to_string(),
        _ => " Settings ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).bold())
        .borders(Borders::ALL)
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![];

    // One line per field, in the order clicks are mapped
    for field in FIELDS {
        let is_selected = is_focused && app.form.selected_field() == field;
        let value = if field.is_toggle() {
            if app.form.checked(field) {
                "[x]".to_string()
            } else {
                "[ ]".to_string()
            }
        } else if is_selected {
            format!("{}_", app.form.value(field))
        } else {
            app.form.value(field)
        };

        let style = if is_selected {
            Style::default().fg(Color::Yellow).bold()
        } else if is_focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let prefix = if is_selected { ">" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{}{:<12} {}", prefix, field.label(), value),
            style,
        )));
    }

    lines.push(Line::from(""));

    let grid = app.settings.grid();
    let footprint = grid
        .actual_size()
        .map(|size| size.to_string())
        .unwrap_or_else(|_| "-".to_string());
    let stats = [
        ("Tile", grid.tile_size().to_string()),
        ("Footprint", footprint),
        ("Space", app.max_size.to_string()),
        ("Painted", grid.painted_count().to_string()),
    ];
    for (label, value) in stats {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<10}", label), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ]));
    }

    if is_focused {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " [Enter] apply  [Esc] close",
            Style::default().fg(Color::Cyan),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = if let Some(ref msg) = app.status.message {
        let style = match msg.level {
            StatusLevel::Info => Style::default().fg(Color::White),
            StatusLevel::Warning => Style::default().fg(Color::Yellow),
            StatusLevel::Error => Style::default().fg(Color::Red),
            StatusLevel::Success => Style::default().fg(Color::Green),
        };
        Paragraph::new(msg.text.as_str())
            .style(style)
            .wrap(Wrap { trim: true })
    } else {
        let help = match app.focus {
            Focus::Grid => "drag: paint | c: clear | Tab/s: settings | ?: help | q: quit",
            Focus::Settings => {
                "↑/↓: field | 0-9: edit | Space: stretch | Enter: apply | Esc: close"
            }
        };
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray))
    };

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(content.alignment(Alignment::Center), inner);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    // Center the help popup
    let popup_width = 56u16.min(area.width);
    let popup_height = 24u16.min(area.height);
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = r#"
 Paint Grid - Keyboard & Mouse

 PAINTING
   press + drag     Paint tiles under the pointer
   c                Clear the drawing (press twice)

 SETTINGS
   Tab / s          Open the settings panel
   Up / Down        Select a field
   0-9, Backspace   Edit the selected size
   Space            Toggle stretch to fit
   Enter            Apply (grid is rebuilt)
   Esc / Tab        Close (press twice to drop edits)

 LIMITS
   Grid size        at most 100 x 100 tiles
   Footprint        must fit the grid panel
                    unless stretching

 OTHER
   ? / F1           Toggle this help
   q                Quit application
"#;

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(Color::Cyan).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(help, popup_area);
}
