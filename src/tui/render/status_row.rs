use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref pattern) = app.last_search {
                with_hint(
                    vec![Span::styled(format!("/{}", pattern), dim)],
                    "Esc clear",
                    app,
                    width,
                )
            } else if app.show_key_hints {
                Line::from(Span::styled(
                    " a add \u{00B7} space move \u{00B7} / search \u{00B7} ? help \u{00B7} q quit",
                    dim,
                ))
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
        Mode::Search => {
            // Search prompt: /pattern▌
            with_hint(
                vec![
                    Span::styled(
                        format!("/{}", app.search_input),
                        Style::default().fg(app.theme.text_bright).bg(bg),
                    ),
                    Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                ],
                "Enter search  Esc cancel",
                app,
                width,
            )
        }
        Mode::Drag => {
            let moving = app
                .dragged_id()
                .map(|id| format!(" moving {}", id))
                .unwrap_or_default();
            with_hint(
                vec![Span::styled(
                    moving,
                    Style::default().fg(app.theme.highlight).bg(bg),
                )],
                "\u{2190}\u{2192} choose list  Enter drop  Esc cancel",
                app,
                width,
            )
        }
        Mode::Form => Line::from(Span::styled(
            " Enter submit \u{00B7} Tab next field \u{00B7} Esc close",
            dim,
        )),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad `spans` and right-align a dim hint
fn with_hint(mut spans: Vec<Span<'static>>, hint: &str, app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{demo_app, render_app_to_string};
    use crate::tui::app::Mode;
    use crate::tui::input;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn drag_mode_shows_the_moving_id_and_hints() {
        let mut app = demo_app();
        input::handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
        );
        assert_eq!(app.mode, Mode::Drag);
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("moving P-001"));
        assert!(screen.contains("Enter drop"));
    }

    #[test]
    fn search_mode_shows_the_prompt() {
        let mut app = demo_app();
        app.mode = Mode::Search;
        app.search_input = "cli".into();
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("/cli"));
        assert!(screen.contains("Enter search"));
    }
}
