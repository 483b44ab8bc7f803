use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::tui::card_view::CardView;
use crate::tui::wrap;
use crate::util::unicode;

use super::push_highlighted_spans;

/// Render the two board columns side by side
pub fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (col, column_area) in columns.iter().enumerate() {
        render_column(frame, app, col, *column_area);
    }
}

fn render_column(frame: &mut Frame, app: &App, col: usize, area: Rect) {
    let list = &app.lists[col];
    let theme = &app.theme;
    let bg = theme.background;

    let mut state = list.state_mut();
    let is_focused = app.focus_col == col && app.mode == Mode::Navigate;

    // Droppable affordance wins over focus for the border
    let border_color = if state.droppable {
        theme.droppable
    } else if is_focused {
        theme.selection_border
    } else {
        theme.dim
    };

    let heading = format!(
        " {} \u{00B7} {} ",
        list.heading(),
        state.assigned.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(
            heading,
            Style::default()
                .fg(theme.status_color(list.status()))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));

    let inner = block.inner(area);
    let inner_width = inner.width as usize;
    let re = app.active_search_re();

    // Full replace on every draw: one fresh card per record in the subset
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_range = 0..0;

    if state.assigned.is_empty() {
        lines.push(Line::from(Span::styled(
            " No projects".to_string(),
            Style::default().fg(theme.dim).bg(bg),
        )));
    }

    for (idx, project) in state.assigned.iter().enumerate() {
        let card = CardView::new(project.clone());
        let is_cursor = is_focused && idx == state.cursor;
        let is_lifted = app.dragged_id() == Some(card.project().id.as_str());

        let card_bg = if is_cursor { theme.selection_bg } else { bg };
        let base = Style::default().fg(theme.text).bg(card_bg);
        let dim = Style::default().fg(theme.dim).bg(card_bg);
        let title_style = if is_lifted {
            Style::default()
                .fg(theme.dim)
                .bg(card_bg)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
                .fg(theme.text_bright)
                .bg(card_bg)
                .add_modifier(Modifier::BOLD)
        };
        let match_style = Style::default()
            .fg(theme.search_match_fg)
            .bg(theme.search_match_bg);

        let start = lines.len();

        // Title row: dim id, bright title, clipped to the column
        let id_cells = unicode::display_width(&card.project().id) + 2;
        let title = unicode::truncate_to_width(
            &card.project().title,
            inner_width.saturating_sub(id_cells),
        );
        let mut title_spans: Vec<Span> = vec![
            Span::styled(" ".to_string(), base),
            Span::styled(format!("{} ", card.project().id), dim),
        ];
        push_highlighted_spans(&mut title_spans, &title, title_style, match_style, re.as_ref());
        lines.push(Line::from(title_spans));

        lines.push(Line::from(Span::styled(
            format!("   {}", card.assigned_label()),
            dim,
        )));

        for wrapped in wrap::wrap_width(&card.project().description, inner_width.saturating_sub(4))
        {
            let mut spans: Vec<Span> = vec![Span::styled("   ".to_string(), base)];
            push_highlighted_spans(&mut spans, &wrapped, base, match_style, re.as_ref());
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(Span::styled(
            format!("   {}", card.added_label()),
            dim,
        )));

        if is_cursor {
            cursor_range = start..lines.len();
        }

        lines.push(Line::from(Span::styled(String::new(), base)));
    }

    // Keep the cursor card in view
    let visible = inner.height as usize;
    let mut scroll = state.scroll_offset.min(lines.len().saturating_sub(1));
    if visible > 0 && !cursor_range.is_empty() {
        if cursor_range.start < scroll {
            scroll = cursor_range.start;
        } else if cursor_range.end > scroll + visible {
            scroll = cursor_range.end - visible;
        }
    }
    state.scroll_offset = scroll;
    drop(state);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg))
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::{demo_app, render_app_to_string};
    use crate::model::BoardConfig;
    use crate::tui::app::App;

    #[test]
    fn renders_both_column_headings_and_counts() {
        let mut app = demo_app();
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("ACTIVE PROJECTS \u{00B7} 2"));
        assert!(screen.contains("FINISHED PROJECTS \u{00B7} 1"));
    }

    #[test]
    fn renders_card_content_in_the_right_column() {
        let mut app = demo_app();
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("Build CLI"));
        assert!(screen.contains("3 persons assigned"));
        assert!(screen.contains("Quarterly retro"));
        assert!(screen.contains("1 person assigned"));
    }

    #[test]
    fn empty_columns_show_a_placeholder() {
        let mut app = App::new(BoardConfig::default());
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("No projects"));
        assert!(screen.contains("0 active"));
    }

    #[test]
    fn moved_card_switches_columns_on_the_next_draw() {
        let mut app = demo_app();
        let id = app.lists[0].selected().unwrap().id;
        app.store
            .move_project(&id, crate::model::ProjectStatus::Finished);
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("ACTIVE PROJECTS \u{00B7} 1"));
        assert!(screen.contains("FINISHED PROJECTS \u{00B7} 2"));
    }
}
