use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::form::FormField;

use super::centered_rect_fixed;

const FIELDS: [FormField; 3] = [FormField::Title, FormField::Description, FormField::People];

/// Render the new-project form as a centered overlay
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let popup_w: u16 = 52.min(area.width.saturating_sub(2));
    // Header + 3 fields of 2 rows + hint row + borders
    let popup_h: u16 = 11.min(area.height.saturating_sub(2));
    let overlay = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay);

    let header_style = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.dim).bg(bg);
    let value_style = Style::default().fg(theme.text).bg(bg);
    let focused_style = Style::default().fg(theme.text_bright).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" New Project", header_style)));

    for field in FIELDS {
        let focused = app.form.focus == field;
        let marker = if focused { "\u{25B8} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), header_style),
            Span::styled(field.label().to_string(), label_style),
        ]));

        let buf = app.form.buf(field);
        let mut value_spans: Vec<Span> = vec![Span::styled("   ".to_string(), value_style)];
        if focused {
            // Split at the cursor and draw a bar between the halves
            let cursor = app.form.cursor.min(buf.len());
            value_spans.push(Span::styled(buf[..cursor].to_string(), focused_style));
            value_spans.push(Span::styled(
                "\u{258C}".to_string(),
                Style::default().fg(theme.highlight).bg(bg),
            ));
            value_spans.push(Span::styled(buf[cursor..].to_string(), focused_style));
        } else {
            value_spans.push(Span::styled(buf.to_string(), value_style));
        }
        lines.push(Line::from(value_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter submit \u{00B7} Tab next field \u{00B7} Esc close",
        label_style,
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.selection_border).bg(bg))
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
    use crate::tui::app::{App, Mode};

    #[test]
    fn form_overlay_shows_fields_and_typed_values() {
        let mut app = App::new(BoardConfig::default());
        app.mode = Mode::Form;
        app.form.title = "Build CLI".into();
        app.form.cursor = app.form.title.len();

        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("New Project"));
        assert!(screen.contains("Title"));
        assert!(screen.contains("Description"));
        assert!(screen.contains("People"));
        assert!(screen.contains("Build CLI"));
        assert!(screen.contains("Enter submit"));
    }
}
