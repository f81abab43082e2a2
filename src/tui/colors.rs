//! Tile color coding
//!
//! - Painted tiles: solid white
//! - Unpainted tiles: checkerboard of two dark grays so tile edges stay
//!   visible without a border
//! - Borders light up while paint mode is active

use ratatui::style::Color;

use crate::geometry::Point;

const PAINTED: Color = Color::White;
const UNPAINTED_EVEN: Color = Color::Rgb(48, 48, 48);
const UNPAINTED_ODD: Color = Color::Rgb(36, 36, 36);

/// Returns (border, background) colors for a tile
pub fn tile_colors(position: Point, painted: bool, painting: bool) -> (Color, Color) {
    let bg = if painted {
        PAINTED
    } else if (position.col + position.row) % 2 == 0 {
        UNPAINTED_EVEN
    } else {
        UNPAINTED_ODD
    };

    let border = if painting {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    (border, bg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard() {
        let (_, a) = tile_colors(Point::new(0, 0), false, false);
        let (_, b) = tile_colors(Point::new(1, 0), false, false);
        let (_, c) = tile_colors(Point::new(1, 1), false, false);
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_painted_wins() {
        let (border, bg) = tile_colors(Point::new(3, 4), true, true);
        assert_eq!(bg, PAINTED);
        assert_eq!(border, Color::Cyan);
    }
}
