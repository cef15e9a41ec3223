// Interest card grid
//
// Lays the profile's interest cards out in a responsive grid (one to three
// columns by terminal width). The selected card gets the focused border and
// selection colors when the cards section has focus; Enter expands it into
// the overlay.

use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows each card gets in the grid: border + title is the block title, so
/// the inner area holds the summary.
const CARD_HEIGHT: u16 = 5;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    // Top border carries the section label so inner() reserves its row
    let outer = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.hint))
        .title(" Interests ")
        .title_style(Style::default().fg(app.theme.hint));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let cards = &app.profile.interests;
    if cards.is_empty() {
        let empty = Paragraph::new("No interests configured yet.")
            .style(Style::default().fg(app.theme.hint));
        f.render_widget(empty, inner);
        return;
    }

    let columns = Breakpoint::from_width(area.width).card_columns();
    let rows = cards.len().div_ceil(columns);

    let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_constraints: Vec<Constraint> = (0..columns)
            .map(|_| Constraint::Ratio(1, columns as u32))
            .collect();
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);

        for (col, col_area) in col_areas.iter().enumerate() {
            let index = row * columns + col;
            if index >= cards.len() {
                break;
            }
            render_card(f, *col_area, app, index);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, app: &App, index: usize) {
    let card = &app.profile.interests[index];
    let selected = app.focus == Focus::Cards && app.selected_card == index;

    let (border_color, title_style) = if selected {
        (
            app.theme.border_focused,
            Style::default()
                .fg(app.theme.selected_fg)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (app.theme.border, Style::default().fg(app.theme.title))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", card.title))
        .title_style(title_style);

    let text_width = area.width.saturating_sub(4) as usize;
    let summary = truncate_to_width(&card.summary, text_width.saturating_mul(2));

    let mut style = Style::default().fg(app.theme.fg);
    if selected {
        style = style.bg(app.theme.selected_bg);
    }

    let body = Paragraph::new(summary)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(body, area);
}
