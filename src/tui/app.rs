use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::cli::Cli;
use crate::dnd::DragGesture;
use crate::model::{BoardConfig, ProjectStatus, config};
use crate::state::ProjectStore;

use super::card_view::CardView;
use super::form::InputForm;
use super::input;
use super::list_view::ListView;
use super::render;
use super::theme::Theme;

/// Column indices into `App::lists`
pub const ACTIVE_COL: usize = 0;
pub const FINISHED_COL: usize = 1;
pub const COLUMNS: usize = 2;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// The new-project form is open
    Form,
    /// A card is picked up
    Drag,
    Search,
}

/// One in-flight drag gesture: the picked-up card, where it came from, and
/// which column is currently hovered (if it accepted the payload)
pub struct DragState {
    pub source: CardView,
    pub from_col: usize,
    pub over_col: Option<usize>,
    pub gesture: DragGesture,
}

/// Main application state
pub struct App {
    /// The single store instance, injected into everything that mutates it
    pub store: ProjectStore,
    /// Board columns: `[active, finished]`
    pub lists: [ListView; COLUMNS],
    pub form: InputForm,
    pub mode: Mode,
    /// Column the cursor lives in
    pub focus_col: usize,
    pub drag: Option<DragState>,
    /// Blocking alert (validation failure); any key dismisses it
    pub alert: Option<String>,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
    pub board_name: String,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: BoardConfig) -> Self {
        let mut store = ProjectStore::new();
        let lists = [
            ListView::new(ProjectStatus::Active),
            ListView::new(ProjectStatus::Finished),
        ];
        // Each view registers its one subscription before any record exists,
        // so nothing is missed by not replaying current state on subscribe.
        for list in &lists {
            list.attach(&mut store);
        }

        let theme = Theme::from_config(&config.ui);

        App {
            store,
            lists,
            form: InputForm::new(config.limits),
            mode: Mode::Navigate,
            focus_col: ACTIVE_COL,
            drag: None,
            alert: None,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            search_input: String::new(),
            last_search: None,
            board_name: config.board.name,
            theme,
            should_quit: false,
        }
    }

    /// Fill the board with sample projects (`--demo`)
    pub fn seed_demo(&mut self) {
        self.store
            .create("Build CLI", "Ship the command line tool", 3);
        self.store
            .create("Website refresh", "New landing page and docs", 5);
        let id = self
            .store
            .create("Quarterly retro", "Collect notes from the team", 1);
        self.store.move_project(&id, ProjectStatus::Finished);
    }

    pub fn focused_list(&self) -> &ListView {
        &self.lists[self.focus_col]
    }

    /// The id of the card being dragged, if a drag is in flight
    pub fn dragged_id(&self) -> Option<&str> {
        self.drag.as_ref().map(|d| d.source.project().id.as_str())
    }

    /// Per-status project count for the header
    pub fn count_of(&self, status: ProjectStatus) -> usize {
        self.store
            .projects()
            .iter()
            .filter(|p| p.status == status)
            .count()
    }

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. Otherwise: from last_search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            Mode::Navigate | Mode::Drag => self.last_search.as_deref()?,
            _ => return None,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }
}

/// Load config, build the app, and run the TUI until quit
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => config::load_default()?,
    };

    let mut app = App::new(config);
    if cli.demo {
        app.seed_demo();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_empty_and_navigating() {
        let app = App::new(BoardConfig::default());
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.focus_col, ACTIVE_COL);
        assert!(app.store.projects().is_empty());
        assert!(app.lists[ACTIVE_COL].state().assigned.is_empty());
        assert!(app.lists[FINISHED_COL].state().assigned.is_empty());
        assert_eq!(app.board_name, "Projects");
    }

    #[test]
    fn seed_demo_populates_both_columns() {
        let mut app = App::new(BoardConfig::default());
        app.seed_demo();
        assert_eq!(app.count_of(ProjectStatus::Active), 2);
        assert_eq!(app.count_of(ProjectStatus::Finished), 1);
        // The views tracked the seeding through their subscriptions
        assert_eq!(app.lists[ACTIVE_COL].state().assigned.len(), 2);
        assert_eq!(app.lists[FINISHED_COL].state().assigned.len(), 1);
    }

    #[test]
    fn search_regex_falls_back_to_literal() {
        let mut app = App::new(BoardConfig::default());
        app.mode = Mode::Search;
        app.search_input = "build".into();
        assert!(app.active_search_re().is_some());

        // Broken regex syntax degrades to an escaped literal
        app.search_input = "build(".into();
        let re = app.active_search_re().unwrap();
        assert!(re.is_match("BUILD("));

        app.mode = Mode::Navigate;
        app.search_input.clear();
        assert!(app.active_search_re().is_none());
        app.last_search = Some("cli".into());
        assert!(app.active_search_re().is_some());
    }
}
