// Modal overlay rendering
//
// Draws the active modal centered over the page: an expanded interest
// card, the help sheet, or recent log lines.

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Centered rect taking the given percentage of the frame
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Card(index) => render_card(f, *index, app),
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
    }
}

fn render_card(f: &mut Frame, index: usize, app: &App) {
    let Some(card) = app.profile.interests.get(index) else {
        return;
    };

    let area = centered_rect(70, 60, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focused))
        .title(format!(" {} ", card.title))
        .title_style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(Line::from(" Esc close · y copy ").right_aligned())
        .style(Style::default().bg(app.theme.bg));

    let mut lines = vec![
        Line::styled(card.summary.clone(), Style::default().fg(app.theme.tagline)),
        Line::raw(""),
    ];
    for detail in &card.details {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(app.theme.border_focused)),
            Span::styled(detail.clone(), Style::default().fg(app.theme.fg)),
        ]));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(body, area);
}

fn render_help(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let key_style = Style::default()
        .fg(app.theme.selected_fg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.fg);

    let entry = |key: &str, what: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::styled(what.to_string(), text_style),
        ])
    };

    let lines = vec![
        Line::raw(""),
        entry("Tab", "switch section (cards / contact)"),
        entry("←↓↑→ hjkl", "select interest card"),
        entry("Enter", "expand card, or mail when on contact"),
        entry("Esc", "close overlay"),
        entry("c", "copy email address"),
        entry("y", "copy expanded card"),
        entry("Y", "copy profile as JSON"),
        entry("t", "cycle theme"),
        entry("L", "show logs"),
        entry("?", "this help"),
        entry("q", "quit"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focused))
        .title(" Keys ")
        .title_style(Style::default().fg(app.theme.title))
        .style(Style::default().bg(app.theme.bg));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(block);
    f.render_widget(body, area);
}

fn render_logs(f: &mut Frame, app: &App) {
    let area = centered_rect(80, 70, f.area());
    f.render_widget(Clear, area);

    let entries = app.log_buffer.get_all();
    let visible = area.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(visible);

    let lines: Vec<Line> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(app.theme.hint),
                ),
                Span::styled(
                    entry.level.as_str(),
                    Style::default().fg(app.theme.log_level_color(entry.level)),
                ),
                Span::styled(format!(" {}", entry.message), Style::default().fg(app.theme.fg)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Logs ")
        .title_style(Style::default().fg(app.theme.title))
        .style(Style::default().bg(app.theme.bg));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
