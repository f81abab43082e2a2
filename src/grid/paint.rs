//! Paint mode state machine
//!
//! Pressing anywhere starts painting, releasing stops it. While painting,
//! every tile the pointer passes over gets painted.

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Idle,
    Painting,
}

/// Abstract input delivered by a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Down,
    Up,
    TouchStart,
    TouchEnd,
    /// Pointer entered the tile at this position
    Over(Point),
}

impl PaintMode {
    /// Next state after `event`
    pub fn next(self, event: PointerEvent) -> PaintMode {
        match event {
            PointerEvent::Down | PointerEvent::TouchStart => PaintMode::Painting,
            PointerEvent::Up | PointerEvent::TouchEnd => PaintMode::Idle,
            PointerEvent::Over(_) => self,
        }
    }

    pub fn is_painting(self) -> bool {
        self == PaintMode::Painting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mode = PaintMode::default();
        assert_eq!(mode, PaintMode::Idle);
        assert_eq!(mode.next(PointerEvent::Down), PaintMode::Painting);
        assert_eq!(mode.next(PointerEvent::TouchStart), PaintMode::Painting);
        assert_eq!(
            PaintMode::Painting.next(PointerEvent::Over(Point::new(0, 0))),
            PaintMode::Painting
        );
        assert_eq!(PaintMode::Painting.next(PointerEvent::Up), PaintMode::Idle);
        assert_eq!(PaintMode::Painting.next(PointerEvent::TouchEnd), PaintMode::Idle);
    }
}
