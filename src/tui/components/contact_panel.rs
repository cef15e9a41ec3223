// Contact component
//
// The email affordance: its visible text IS the address the copy and
// mailto flows use. Highlighted when the contact section has focus.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Contact;

    let border_color = if focused {
        app.theme.border_focused
    } else {
        app.theme.border
    };

    let mut address_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::UNDERLINED);
    if focused {
        address_style = address_style
            .fg(app.theme.selected_fg)
            .bg(app.theme.selected_bg);
    }

    let line = Line::from(vec![
        Span::styled(" ✉ ", Style::default().fg(app.theme.fg)),
        Span::styled(app.profile.email.clone(), address_style),
        Span::styled(
            "   Enter mail · c copy",
            Style::default().fg(app.theme.hint),
        ),
    ]);

    let panel = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Contact ")
            .title_style(Style::default().fg(app.theme.hint)),
    );

    f.render_widget(panel, area);
}
