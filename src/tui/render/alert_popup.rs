use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::wrap;

use super::centered_rect_fixed;

/// Render the blocking alert raised by a rejected form submit
pub fn render_alert_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(4) as usize;

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let message = app.alert.as_deref().unwrap_or("");

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Invalid Input", header_style)));
    lines.push(Line::from(""));
    for wrapped in wrap::wrap_width(message, inner_w) {
        lines.push(Line::from(Span::styled(format!(" {}", wrapped), text_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press any key to continue",
        dim_style,
    )));

    // Dynamic height from content + 2 for borders
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        overlay,
    );
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::render_app_to_string;
    use crate::model::BoardConfig;
    use crate::tui::app::App;

    #[test]
    fn alert_text_is_shown_over_the_board() {
        let mut app = App::new(BoardConfig::default());
        app.alert = Some("Description must be 5-30 characters".into());
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("Invalid Input"));
        assert!(screen.contains("Description must be 5-30"));
        assert!(screen.contains("Press any key to continue"));
    }
}
