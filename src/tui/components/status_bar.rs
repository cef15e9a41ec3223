// Status bar component
//
// Renders session info at the bottom: uptime, clipboard capability, and
// key hints. The footer analog of the page.

use crate::config::VERSION;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: uptime, capability, theme, and full key hints
/// - Narrow: uptime and capability only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ clip:{} │ {} │ Tab section · Enter open · c copy · t theme · ? help · q quit │ v{}",
            app.uptime(),
            app.capability.label(),
            app.theme_kind.name(),
            VERSION,
        )
    } else {
        format!(" {} │ clip:{} │ ? help", app.uptime(), app.capability.label())
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
