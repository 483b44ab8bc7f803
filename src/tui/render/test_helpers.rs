use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::model::BoardConfig;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render the full app into an in-memory buffer and return plain text
/// (no styles).
pub fn render_app_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(TERM_W, TERM_H);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app seeded with the demo board
pub fn demo_app() -> App {
    let mut app = App::new(BoardConfig::default());
    app.seed_demo();
    app
}
