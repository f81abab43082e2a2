//! Event handling for the TUI
//!
//! Polls crossterm on a blocking thread and forwards keyboard, mouse and
//! resize events over a channel, with periodic ticks in between.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent, MouseEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Periodic tick for message expiry
    Tick,
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Minimum interval between pointer motion events (16ms = ~60fps)
const MOTION_THROTTLE_MS: u64 = 16;

/// Drops pointer motion arriving faster than the throttle interval
struct MotionThrottle {
    last: Option<Instant>,
    interval: Duration,
}

impl MotionThrottle {
    fn new(interval: Duration) -> Self {
        Self {
            last: None,
            interval,
        }
    }

    /// Whether a motion event at `now` should be forwarded
    fn admit(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

fn is_motion(kind: MouseEventKind) -> bool {
    matches!(kind, MouseEventKind::Drag(_) | MouseEventKind::Moved)
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate in milliseconds
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let (tx, rx) = mpsc::unbounded_channel();

        // crossterm polling blocks, keep it off the runtime thread
        tokio::task::spawn_blocking(move || {
            let mut throttle = MotionThrottle::new(Duration::from_millis(MOTION_THROTTLE_MS));

            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                        Ok(CrosstermEvent::Mouse(mouse)) => {
                            // Presses and releases always go through, motion is throttled
                            if is_motion(mouse.kind) && !throttle.admit(Instant::now()) {
                                continue;
                            }
                            Event::Mouse(mouse)
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                        Ok(_) => continue,
                        Err(_) => break,
                    }
                } else {
                    Event::Tick
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Wait for the next event
    pub async fn next(&mut self) -> anyhow::Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("Event channel closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;

    #[test]
    fn test_throttle() {
        let mut throttle = MotionThrottle::new(Duration::from_millis(16));
        let start = Instant::now();
        assert!(throttle.admit(start));
        assert!(!throttle.admit(start + Duration::from_millis(5)));
        assert!(throttle.admit(start + Duration::from_millis(20)));
    }

    #[test]
    fn test_only_motion_is_throttled() {
        assert!(is_motion(MouseEventKind::Drag(MouseButton::Left)));
        assert!(is_motion(MouseEventKind::Moved));
        assert!(!is_motion(MouseEventKind::Down(MouseButton::Left)));
        assert!(!is_motion(MouseEventKind::Up(MouseButton::Left)));
    }
}
