// Hero component
//
// The greeting strip under the title bar: who this is and what they're
// into, in one line each.

use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let width = area.width.saturating_sub(2) as usize;
    let greeting = truncate_to_width(&format!("Hello, I'm {}", app.profile.name), width);
    let tagline = truncate_to_width(&app.profile.tagline, width);

    let lines = vec![
        Line::styled(
            format!(" {greeting}"),
            Style::default()
                .fg(app.theme.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!(" {tagline}"), Style::default().fg(app.theme.tagline)),
    ];

    f.render_widget(Paragraph::new(lines), area);
}
