use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Board", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " \u{2190}\u{2192}/hl", "Switch column", key_style, desc_style);
    add_binding(&mut lines, " a", "Add a project", key_style, desc_style);
    add_binding(&mut lines, " Space/m", "Pick up card", key_style, desc_style);
    add_binding(&mut lines, " /", "Search", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" While moving a card", header_style)));
    add_binding(&mut lines, " \u{2190}\u{2192}/hl", "Choose target list", key_style, desc_style);
    add_binding(&mut lines, " Enter", "Drop", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Cancel", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Form", header_style)));
    add_binding(&mut lines, " Tab", "Next field", key_style, desc_style);
    add_binding(&mut lines, " Enter", "Submit", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Close", key_style, desc_style);

    let popup_w: u16 = 42.min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        overlay,
    );
}

fn add_binding(
    lines: &mut Vec<Line>,
    keys: &str,
    description: &str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<12}", keys), key_style),
        Span::styled(description.to_string(), desc_style),
    ]));
}
