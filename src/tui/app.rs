// TUI application state
//
// Single owner of everything the UI shows: the profile, section focus,
// card selection, the notification slot, and the modal slot. All mutation
// happens on the event loop, so no locking is needed anywhere here.

use super::input::InputHandler;
use super::layout::Breakpoint;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use crate::clipboard::Capability;
use crate::config::Config;
use crate::events::{AppEvent, CopyKind};
use crate::logging::LogBuffer;
use crate::messages::{self, Severity};
use crate::profile::Profile;
use crate::tui::components::toast::ToastState;
use std::time::{Duration, Instant};

/// Which page section owns selection-style keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Cards,
    Contact,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Cards => Focus::Contact,
            Focus::Contact => Focus::Cards,
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// The card content being presented
    pub profile: Profile,

    /// Current color theme
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Paint the theme background or keep the terminal's own
    pub use_theme_background: bool,

    /// The single notification slot
    pub toast: ToastState,

    /// Active overlay, if any
    pub modal: Option<Modal>,

    /// Which section currently has focus
    pub focus: Focus,

    /// Index of the selected interest card
    pub selected_card: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Clipboard mechanisms found at startup
    pub capability: Capability,

    /// Log buffer backing the logs modal
    pub log_buffer: LogBuffer,

    /// Mail-client markers for the activation heuristic
    pub mail_markers: Vec<String>,

    /// Frame width from the last draw, for grid-aware Up/Down movement
    pub last_width: u16,

    /// Default toast duration from config
    toast_duration: Duration,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,
}

impl App {
    pub fn with_config(config: Config, log_buffer: LogBuffer, capability: Capability) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("unknown theme {:?}, using default", config.theme);
            ThemeKind::default()
        });

        Self {
            profile: config.profile,
            theme: theme_kind.theme(),
            theme_kind,
            use_theme_background: config.use_theme_background,
            toast: ToastState::new(),
            modal: None,
            focus: Focus::default(),
            selected_card: 0,
            should_quit: false,
            start_time: Instant::now(),
            capability,
            log_buffer,
            mail_markers: config.mail.client_markers,
            last_width: 80,
            toast_duration: Duration::from_millis(config.notifications.duration_ms),
            input_handler: InputHandler::default(),
        }
    }

    /// Show a notification with the configured default duration
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let duration = self.toast_duration;
        self.toast.notify(message, severity, duration);
    }

    /// Show a notification with an explicit duration (startup capability
    /// warning uses a longer one)
    pub fn notify_for(&mut self, message: impl Into<String>, severity: Severity, duration: Duration) {
        self.toast.notify(message, severity, duration);
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Move focus to the next page section
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Card grid columns at the last drawn width
    fn columns(&self) -> usize {
        Breakpoint::from_width(self.last_width).card_columns()
    }

    fn card_count(&self) -> usize {
        self.profile.interests.len()
    }

    /// Move the card selection left/right by one
    pub fn select_prev_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    pub fn select_next_card(&mut self) {
        if self.selected_card + 1 < self.card_count() {
            self.selected_card += 1;
        }
    }

    /// Move the card selection one grid row up/down
    pub fn select_card_up(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(self.columns());
    }

    pub fn select_card_down(&mut self) {
        let next = self.selected_card + self.columns();
        if next < self.card_count() {
            self.selected_card = next;
        }
    }

    /// Expand the selected card into a modal overlay
    pub fn open_selected_card(&mut self) {
        if self.selected_card < self.card_count() {
            self.modal = Some(Modal::card(self.selected_card));
        }
    }

    /// Plain-text rendition of a card for the clipboard
    pub fn card_text(&self, index: usize) -> Option<String> {
        let card = self.profile.interests.get(index)?;
        let mut text = format!("{}\n{}\n", card.title, card.summary);
        for detail in &card.details {
            text.push_str("- ");
            text.push_str(detail);
            text.push('\n');
        }
        Some(text)
    }

    /// Apply a message delivered on the app-event channel
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CopyFinished { kind, ok } => {
                let (text, severity) = match kind {
                    CopyKind::EmailAddress => messages::email_copy_feedback(ok),
                    CopyKind::CardText | CopyKind::ProfileJson => messages::text_copy_feedback(ok),
                };
                self.notify(text, severity);
            }
        }
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_config(Config::default(), LogBuffer::new(), Capability::System)
    }

    #[test]
    fn focus_cycles_between_sections() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Cards);
        app.focus_next();
        assert_eq!(app.focus, Focus::Contact);
        app.focus_next();
        assert_eq!(app.focus, Focus::Cards);
    }

    #[test]
    fn card_selection_stays_in_bounds() {
        let mut app = app();
        app.select_prev_card();
        assert_eq!(app.selected_card, 0);

        for _ in 0..10 {
            app.select_next_card();
        }
        assert_eq!(app.selected_card, app.profile.interests.len() - 1);
    }

    #[test]
    fn vertical_movement_follows_grid_columns() {
        let mut app = app();
        app.last_width = 120; // three columns
        app.select_card_down();
        // Sample profile has 3 cards in one row; down from 0 stays put
        assert_eq!(app.selected_card, 0);

        app.last_width = 40; // single column
        app.select_card_down();
        assert_eq!(app.selected_card, 1);
        app.select_card_up();
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn enter_expands_the_selected_card() {
        let mut app = app();
        app.selected_card = 2;
        app.open_selected_card();
        assert_eq!(app.modal, Some(Modal::Card(2)));
    }

    #[test]
    fn card_text_includes_details() {
        let app = app();
        let text = app.card_text(0).unwrap();
        let card = &app.profile.interests[0];
        assert!(text.starts_with(&card.title));
        assert!(text.contains(&card.summary));
        for detail in &card.details {
            assert!(text.contains(detail.as_str()));
        }
        assert!(app.card_text(99).is_none());
    }

    #[test]
    fn copy_resolution_supersedes_previous_toast() {
        let mut app = app();
        // Step 3 of the activation flow: immediate "no client" error toast
        app.notify(messages::error::NO_MAIL_CLIENT, Severity::Error);
        assert_eq!(
            app.toast.last_message(),
            Some(messages::error::NO_MAIL_CLIENT)
        );

        // Step 5: the async copy resolves true
        app.handle_app_event(AppEvent::CopyFinished {
            kind: CopyKind::EmailAddress,
            ok: true,
        });
        assert_eq!(
            app.toast.last_message(),
            Some(messages::success::EMAIL_COPIED)
        );
        assert_eq!(app.toast.last_severity(), Some(Severity::Success));
    }

    #[test]
    fn failed_copy_reports_the_error_table_text() {
        let mut app = app();
        app.handle_app_event(AppEvent::CopyFinished {
            kind: CopyKind::EmailAddress,
            ok: false,
        });
        assert_eq!(app.toast.last_message(), Some(messages::error::COPY_FAILED));
        assert_eq!(app.toast.last_severity(), Some(Severity::Error));
    }
}
