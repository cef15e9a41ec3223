// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return
// actions. App just holds Option<Modal>, input routing acts on the
// returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Copy the expanded card's text
    CopyCard,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// An interest card expanded into an overlay.
    /// Stores the index of the card being viewed.
    Card(usize),
    /// Recent log entries
    Logs,
}

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Expand the card at the given index
    pub fn card(index: usize) -> Self {
        Modal::Card(index)
    }

    /// Create a logs modal
    pub fn logs() -> Self {
        Modal::Logs
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs => match key {
                KeyCode::Esc | KeyCode::Char('L') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Card(_) => match key {
                KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Char('y') => ModalAction::CopyCard,
                // Enter on an already-expanded card is inert
                _ => ModalAction::None,
            },
        }
    }

    /// Get the card index if this is a Card modal
    pub fn card_index(&self) -> Option<usize> {
        match self {
            Modal::Card(idx) => Some(*idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_modal_closes_on_escape() {
        let mut modal = Modal::card(1);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('q')), ModalAction::Close);
    }

    #[test]
    fn expanded_card_ignores_enter() {
        let mut modal = Modal::card(0);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::None);
    }

    #[test]
    fn card_modal_offers_copy() {
        let mut modal = Modal::card(2);
        assert_eq!(modal.handle_input(KeyCode::Char('y')), ModalAction::CopyCard);
        assert_eq!(modal.card_index(), Some(2));
    }

    #[test]
    fn help_toggles_closed_on_question_mark() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.card_index(), None);
    }
}
