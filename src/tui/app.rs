use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{AppConfig, Dataset};
use crate::ops::{search, todo_ops};
use crate::vm::{ReminderViewModel, TodoViewModel, to_reminder_view_model, to_todo_view_model};

use super::input;
use super::render;
use super::sidebar::Sidebar;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// One row in the main list: an index into the resolved todos or reminders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Todo(usize),
    Reminder(usize),
}

/// Main application state
pub struct App {
    pub data: Dataset,
    pub config: AppConfig,
    pub theme: Theme,
    pub sidebar: Sidebar,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the flat entries list
    pub cursor: usize,
    /// Scroll offset for the main list (first visible row)
    pub scroll_offset: usize,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Help overlay visible
    pub show_help: bool,
}

impl App {
    pub fn new(data: Dataset, config: AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            data,
            config,
            theme,
            sidebar: Sidebar::new(),
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            search_input: String::new(),
            show_help: false,
        }
    }

    /// Resolve every todo to its view-model. Rebuilt on each call; the
    /// entity store is the single source of truth.
    pub fn todos(&self) -> Vec<TodoViewModel> {
        self.data
            .todos
            .iter()
            .map(|t| to_todo_view_model(t, &self.data.tasks, &self.data.tags, &self.data.projects))
            .collect()
    }

    /// Resolve every reminder to its view-model.
    pub fn reminders(&self) -> Vec<ReminderViewModel> {
        self.data
            .reminders
            .iter()
            .map(|r| to_reminder_view_model(r, &self.data.tasks, &self.data.tags))
            .collect()
    }

    /// The flat list the cursor walks: todos first, then reminders.
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = (0..self.data.todos.len()).map(Entry::Todo).collect();
        entries.extend((0..self.data.reminders.len()).map(Entry::Reminder));
        entries
    }

    pub fn selected_entry(&self) -> Option<Entry> {
        self.entries().get(self.cursor).copied()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.entries().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let max = len - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    /// Open the detail view for the entry under the cursor.
    pub fn open_selected(&mut self) {
        match self.selected_entry() {
            Some(Entry::Todo(i)) => {
                if let Some(todo) = self.todos().into_iter().nth(i) {
                    self.sidebar.show_todo_details(todo);
                }
            }
            Some(Entry::Reminder(i)) => {
                if let Some(reminder) = self.reminders().into_iter().nth(i) {
                    self.sidebar.show_reminder_details(reminder);
                }
            }
            None => {}
        }
    }

    /// Open the tag view for the first tag of the selected entry.
    pub fn open_selected_tag(&mut self) {
        let todos = self.todos();
        let reminders = self.reminders();
        let tag = match self.selected_entry() {
            Some(Entry::Todo(i)) => todos.get(i).and_then(|t| t.tags.first().cloned()),
            Some(Entry::Reminder(i)) => reminders.get(i).and_then(|r| r.tags.first().cloned()),
            None => None,
        };
        if let Some(tag) = tag {
            let tag_todos = todo_ops::todos_with_tag(&tag.id, &todos);
            let tag_reminders = todo_ops::reminders_with_tag(&tag.id, &reminders);
            self.sidebar.show_tag_details(tag, tag_todos, tag_reminders);
        }
    }

    /// Open the project view for the selected todo's project.
    pub fn open_selected_project(&mut self) {
        let todos = self.todos();
        let project = match self.selected_entry() {
            Some(Entry::Todo(i)) => todos.get(i).and_then(|t| t.project.clone()),
            _ => None,
        };
        if let Some(project) = project {
            let project_todos = todo_ops::todos_in_project(&project.id, &todos);
            self.sidebar.show_project_details(project, project_todos);
        }
    }

    /// Execute the typed search query and show its results in the sidebar.
    pub fn run_search(&mut self) {
        let Some(re) = search::compile_query(&self.search_input) else {
            return;
        };
        let todos = search::search_todos(&re, &self.todos());
        let reminders = search::search_reminders(&re, &self.reminders());
        self.sidebar
            .show_search_results(self.search_input.clone(), todos, reminders);
    }
}

/// Launch the TUI against the given dataset and config.
pub fn run(data: Dataset, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(data, config);

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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
