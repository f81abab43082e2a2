//! Status bar and confirmation prompt
//!
//! A terminal has no modal dialog to block on, so confirmation works by
//! repetition: the first request arms the prompt and explains what will
//! happen, asking the same thing again while armed confirms it.

use std::time::{Duration, Instant};

use crate::settings::Prompt;

/// Status message displayed at the bottom
#[derive(Clone, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub expires: Instant,
}

/// Status message severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Debug)]
pub struct StatusLine {
    pub message: Option<StatusMessage>,
    timeout: Duration,
    /// Confirmation waiting for a repeat
    armed: Option<String>,
}

impl StatusLine {
    pub fn new(timeout: Duration) -> Self {
        Self {
            message: None,
            timeout,
            armed: None,
        }
    }

    pub fn set(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.message = Some(StatusMessage {
            text: text.into(),
            level,
            expires: Instant::now() + self.timeout,
        });
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    /// Forget any pending confirmation
    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Drop the message once it expired; a pending confirmation expires with it
    pub fn expire(&mut self, now: Instant) {
        if let Some(ref msg) = self.message {
            if now > msg.expires {
                self.message = None;
                self.armed = None;
            }
        }
    }
}

impl Prompt for StatusLine {
    fn confirm(&mut self, message: &str) -> bool {
        if self.armed.as_deref() == Some(message) {
            self.armed = None;
            return true;
        }
        self.armed = Some(message.to_string());
        self.set(format!("{} Repeat to confirm.", message), StatusLevel::Warning);
        false
    }

    fn alert(&mut self, message: &str) {
        self.set(message, StatusLevel::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_needs_repeat() {
        let mut status = StatusLine::new(Duration::from_secs(5));
        assert!(!status.confirm("Clear the drawing?"));
        assert!(status.is_armed());
        assert_eq!(
            status.message.as_ref().map(|m| m.level),
            Some(StatusLevel::Warning)
        );
        assert!(status.confirm("Clear the drawing?"));
        assert!(!status.is_armed());
    }

    #[test]
    fn test_different_question_rearms() {
        let mut status = StatusLine::new(Duration::from_secs(5));
        assert!(!status.confirm("first?"));
        assert!(!status.confirm("second?"));
        assert!(status.confirm("second?"));
    }

    #[test]
    fn test_disarm() {
        let mut status = StatusLine::new(Duration::from_secs(5));
        status.confirm("Clear the drawing?");
        status.disarm();
        assert!(!status.confirm("Clear the drawing?"));
    }

    #[test]
    fn test_expiry() {
        let mut status = StatusLine::new(Duration::from_millis(10));
        status.confirm("Clear the drawing?");
        status.expire(Instant::now() + Duration::from_secs(1));
        assert!(status.message.is_none());
        assert!(!status.is_armed());
    }

    #[test]
    fn test_alert_is_error() {
        let mut status = StatusLine::new(Duration::from_secs(5));
        status.alert("too big");
        let msg = status.message.unwrap();
        assert_eq!(msg.level, StatusLevel::Error);
        assert_eq!(msg.text, "too big");
    }
}
