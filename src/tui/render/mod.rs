pub mod alert_popup;
pub mod board_view;
pub mod form_view;
pub mod help_overlay;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use regex::Regex;

use crate::model::ProjectStatus;

use super::app::{App, Mode};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | board | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title bar + separator
            Constraint::Min(1),    // board columns
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    board_view::render_board(frame, app, chunks[1]);

    // Overlays, innermost last
    if app.mode == Mode::Form {
        form_view::render_form(frame, app, frame.area());
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
    if app.alert.is_some() {
        alert_popup::render_alert_popup(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// Board title on the left, per-column counts on the right, separator below
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{25B6} ",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            app.board_name.clone(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let counts = format!(
        "{} active \u{00B7} {} finished ",
        app.count_of(ProjectStatus::Active),
        app.count_of(ProjectStatus::Finished)
    );
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let counts_width = counts.chars().count();
    if used + counts_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - counts_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(width);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(app.theme.dim).bg(bg),
        ))),
        chunks[1],
    );
}

/// Push spans for text with regex match highlighting. If no regex or no
/// matches, pushes a single span with `base_style`. Otherwise splits text at
/// match boundaries.
pub(super) fn push_highlighted_spans(
    spans: &mut Vec<Span<'static>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    re: Option<&Regex>,
) {
    let Some(re) = re else {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    };

    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() == m.end() {
            continue;
        }
        if m.start() > last {
            spans.push(Span::styled(text[last..m.start()].to_string(), base_style));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight_style));
        last = m.end();
    }
    if last == 0 {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last < text.len() {
        spans.push(Span::styled(text[last..].to_string(), base_style));
    }
}

/// A fixed-size rect centered in `area`
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(
        x,
        y,
        width.min(area.width),
        height.min(area.height),
    )
}
