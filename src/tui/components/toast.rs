//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a configurable duration.
//! Renders in the bottom-right corner on top of all other content.
//!
//! There is no queue: a new notification overwrites the current one and
//! restarts the dismissal clock (last-write-wins). Visibility is derived
//! from the current toast's own deadline, so a stale dismissal can never
//! hide a newer message. The most recent message stays inspectable after
//! it expires; only its visibility lapses.

use crate::messages::Severity;
use crate::tui::theme::Theme;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Minimum area below which the toast surface cannot be placed at all
const MIN_WIDTH: u16 = 12;
const MIN_HEIGHT: u16 = 5;

/// One notification request, alive until the next one replaces it
#[derive(Debug, Clone)]
pub struct Toast {
    /// Message to display, treated as plain text
    pub message: String,
    /// Controls border/text color via the theme
    pub severity: Severity,
    /// When the toast was raised
    raised_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: Severity, duration: Duration) -> Self {
        Self {
            message: message.into(),
            severity,
            raised_at: Instant::now(),
            duration,
        }
    }

    /// Check if the toast has outlived its duration
    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= self.duration
    }
}

/// The single notification slot owned by the app
#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<Toast>,
    /// One missing-surface warning per toast, not per frame
    surface_warned: bool,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current notification and restart the dismissal clock
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, duration: Duration) {
        self.current = Some(Toast::new(message, severity, duration));
        self.surface_warned = false;
    }

    /// The toast to display this frame, if any is still within its duration
    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref().filter(|t| !t.is_expired())
    }

    /// The most recently requested message, visible or not
    pub fn last_message(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.message.as_str())
    }

    /// Severity of the most recent request
    pub fn last_severity(&self) -> Option<Severity> {
        self.current.as_ref().map(|t| t.severity)
    }

    /// Render the current toast in the bottom-right corner.
    ///
    /// Uses `Clear` so the toast sits on top of other content. If the
    /// terminal is too small to hold the surface, this is a no-op that
    /// logs one diagnostic warning for the affected toast.
    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(toast) = self.current.as_ref().filter(|t| !t.is_expired()) else {
            return;
        };

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            if !self.surface_warned {
                tracing::warn!(
                    "notification surface unavailable ({}x{}), dropping: {}",
                    area.width,
                    area.height,
                    toast.message
                );
                self.surface_warned = true;
            }
            return;
        }

        // Width from rendered columns, not bytes; add 4 for padding + border
        let max_text = area.width.saturating_sub(8) as usize;
        let text = truncate_to_width(&toast.message, max_text);
        let width = (text.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3; // 1 line of text + 2 for borders

        // Position: bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);

        let toast_area = Rect::new(x, y, width, height);

        let accent = theme.severity_color(toast.severity);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.bg));

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(accent))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn notify_stores_message_verbatim() {
        let mut state = ToastState::new();
        state.notify("<b>not html</b>", Severity::Error, Duration::from_secs(3));
        assert_eq!(state.last_message(), Some("<b>not html</b>"));
        assert_eq!(state.last_severity(), Some(Severity::Error));
        assert!(state.visible().is_some());
    }

    #[test]
    fn toast_expires_after_duration() {
        let mut state = ToastState::new();
        state.notify("short-lived", Severity::Error, Duration::from_millis(10));
        assert!(state.visible().is_some());

        thread::sleep(Duration::from_millis(20));
        // Visibility lapses but the message stays inspectable
        assert!(state.visible().is_none());
        assert_eq!(state.last_message(), Some("short-lived"));
    }

    #[test]
    fn last_write_wins() {
        let mut state = ToastState::new();
        state.notify("first", Severity::Error, Duration::from_millis(10));
        state.notify("second", Severity::Success, Duration::from_millis(10));

        assert_eq!(state.visible().unwrap().message, "second");

        thread::sleep(Duration::from_millis(20));
        // After both durations elapsed, the slot still holds the second call
        assert!(state.visible().is_none());
        assert_eq!(state.last_message(), Some("second"));
        assert_eq!(state.last_severity(), Some(Severity::Success));
    }

    #[test]
    fn replacing_restarts_the_clock() {
        let mut state = ToastState::new();
        state.notify("first", Severity::Success, Duration::from_millis(30));
        thread::sleep(Duration::from_millis(20));

        // Replacement near the first deadline gets a fresh full duration
        state.notify("second", Severity::Success, Duration::from_millis(30));
        thread::sleep(Duration::from_millis(20));
        assert!(state.visible().is_some());
    }
}
