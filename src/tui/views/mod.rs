// Views module - screen-level rendering logic
//
// The page is a single view laid out top to bottom (title, hero, interest
// grid, contact, status), with modal overlays for expanded cards, help,
// and logs, and the toast notification on top of everything.

mod modal;

use crate::tui::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Remember the width for grid-aware selection movement
    app.last_width = f.area().width;

    // Apply theme background (respects use_theme_background toggle)
    let bg = if app.use_theme_background {
        app.theme.bg
    } else {
        Color::Reset
    };
    let bg_block = Block::default().style(Style::default().bg(bg));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title bar
            Constraint::Length(2), // hero
            Constraint::Min(6),    // interest cards
            Constraint::Length(3), // contact
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);
    components::hero::render(f, chunks[1], app);
    components::card_grid::render(f, chunks[2], app);
    components::contact_panel::render(f, chunks[3], app);
    components::status_bar::render(f, chunks[4], app);

    // Render modal overlay (on top of the page)
    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    // Toast notification renders on top of the modal too
    let theme = app.theme.clone();
    app.toast.render(f, f.area(), &theme);
}
