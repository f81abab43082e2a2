//! Paint Grid - Interactive TUI
//!
//! Paint tiles of a resizable grid with the mouse, reconfigure the grid from
//! the settings panel.
//!
//! ## Usage
//!
//! ```bash
//! # Default 16x16 grid
//! paintgrid
//!
//! # Wider tiles on a 32x12 grid
//! paintgrid --grid-width 32 --grid-height 12 --tile-width 2
//!
//! # Stretch tiles to fill the terminal, with borders
//! paintgrid --stretch --border 1
//! ```

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

use paintgrid::grid::{DEFAULT_GRID_SIZE, DEFAULT_TILE_SIZE};
use paintgrid::tui::{App, AppOptions, Event, EventHandler};
use paintgrid::Size;

const VERSION: &str = env!("PAINTGRID_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "paintgrid",
    author,
    version = VERSION,
    about = "Paint tiles of a resizable grid in the terminal"
)]
struct Cli {
    /// Number of tile columns
    #[clap(long, default_value_t = DEFAULT_GRID_SIZE.width)]
    grid_width: i32,

    /// Number of tile rows
    #[clap(long, default_value_t = DEFAULT_GRID_SIZE.height)]
    grid_height: i32,

    /// Tile width in cells (each tile is padded by this on both sides)
    #[clap(long, default_value_t = DEFAULT_TILE_SIZE.width)]
    tile_width: i32,

    /// Tile height in cells (each tile is padded by this on both sides)
    #[clap(long, default_value_t = DEFAULT_TILE_SIZE.height)]
    tile_height: i32,

    /// Derive the tile size from the terminal size
    #[clap(long)]
    stretch: bool,

    /// Tile border per side, in cells (0 or 1)
    #[clap(long, default_value_t = 0, value_parser = clap::value_parser!(u16).range(0..=1))]
    border: u16,

    /// Event poll interval in milliseconds
    #[clap(long, default_value_t = 100, value_name = "MS")]
    tick_rate: u64,

    /// How long status messages stay visible (e.g. "5s", "1500ms")
    #[clap(long, default_value = "5s", value_parser = humantime::parse_duration)]
    status_timeout: Duration,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    paintgrid::setup_logger();
    let cli = Cli::parse();

    let options = AppOptions {
        grid_size: Size::new(cli.grid_width, cli.grid_height),
        tile_size: Size::new(cli.tile_width, cli.tile_height),
        stretch: cli.stretch,
        border: cli.border,
        status_timeout: cli.status_timeout,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &options, cli.tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    options: &AppOptions,
    tick_rate: u64,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(options, Rect::new(0, 0, size.width, size.height))?;
    info!(
        "Started with a {} grid, tile size {}",
        app.settings.grid().grid_size(),
        app.settings.grid().tile_size()
    );

    let mut event_handler = EventHandler::new(tick_rate);

    // Main loop
    loop {
        // Draw the UI
        terminal.draw(|frame| {
            paintgrid::tui::ui::draw(frame, &mut app);
        })?;

        // Handle events
        match event_handler.next().await? {
            Event::Tick => {
                app.on_tick();
            }
            Event::Key(key) => {
                app.on_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                app.on_mouse(mouse);
            }
            Event::Resize(_, _) => {
                // The next draw picks up the new layout
            }
        }
    }

    Ok(())
}
