//! The detail sidebar: what the right-hand panel currently shows, plus a
//! back-navigation history stack.
//!
//! The store is a plain owned value — the [`App`](super::app::App) holds one,
//! tests construct their own. Every transition is a synchronous, total
//! replacement of the three fields; nothing here can fail.

use crate::model::{ProjectEntity, TagEntity};
use crate::vm::{ReminderViewModel, TodoViewModel};

/// What the sidebar currently displays.
///
/// Each variant carries fully-resolved view-models, so rendering needs no
/// further lookups. Callers resolve before dispatching.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SidebarContent {
    #[default]
    Closed,
    Tag {
        tag: TagEntity,
        todos: Vec<TodoViewModel>,
        reminders: Vec<ReminderViewModel>,
    },
    Project {
        project: ProjectEntity,
        todos: Vec<TodoViewModel>,
    },
    TodoDetail {
        todo: TodoViewModel,
    },
    ReminderDetail {
        reminder: ReminderViewModel,
    },
    SearchResults {
        query: String,
        todos: Vec<TodoViewModel>,
        reminders: Vec<ReminderViewModel>,
    },
}

impl SidebarContent {
    pub fn is_closed(&self) -> bool {
        matches!(self, SidebarContent::Closed)
    }

    /// Panel title for the current content
    pub fn title(&self) -> String {
        match self {
            SidebarContent::Closed => String::new(),
            SidebarContent::Tag { tag, .. } => format!("#{}", tag.text),
            SidebarContent::Project { project, .. } => project.project_name.clone(),
            SidebarContent::TodoDetail { todo } => todo.title.clone(),
            SidebarContent::ReminderDetail { reminder } => reminder.title.clone(),
            SidebarContent::SearchResults { query, .. } => format!("Search: {query}"),
        }
    }
}

/// Sidebar navigation store.
///
/// `history` is LIFO: showing new content from a non-closed state pushes the
/// previous content, `go_back` pops. `is_open` tracks panel visibility
/// alongside `content` (kept as its own field to match the observed store;
/// the transition methods keep the two in sync).
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    pub is_open: bool,
    pub content: SidebarContent,
    pub history: Vec<SidebarContent>,
}

impl Sidebar {
    pub fn new() -> Self {
        Sidebar::default()
    }

    /// Replace the displayed content and open the panel.
    ///
    /// The outgoing content is pushed onto history unless it was `Closed`,
    /// so opening from a closed panel starts with an empty back stack.
    pub fn open(&mut self, content: SidebarContent) {
        if !self.content.is_closed() {
            let previous = std::mem::replace(&mut self.content, content);
            self.history.push(previous);
        } else {
            self.content = content;
        }
        self.is_open = true;
    }

    /// Pop back to the previous content, or close when there is none.
    pub fn go_back(&mut self) {
        match self.history.pop() {
            Some(previous) => self.content = previous,
            None => {
                self.is_open = false;
                self.content = SidebarContent::Closed;
            }
        }
    }

    /// Close the panel and drop all history. Reopening starts fresh.
    pub fn close(&mut self) {
        self.is_open = false;
        self.content = SidebarContent::Closed;
        self.history.clear();
    }

    pub fn show_tag_details(
        &mut self,
        tag: TagEntity,
        todos: Vec<TodoViewModel>,
        reminders: Vec<ReminderViewModel>,
    ) {
        self.open(SidebarContent::Tag {
            tag,
            todos,
            reminders,
        });
    }

    pub fn show_project_details(&mut self, project: ProjectEntity, todos: Vec<TodoViewModel>) {
        self.open(SidebarContent::Project { project, todos });
    }

    pub fn show_todo_details(&mut self, todo: TodoViewModel) {
        self.open(SidebarContent::TodoDetail { todo });
    }

    pub fn show_reminder_details(&mut self, reminder: ReminderViewModel) {
        self.open(SidebarContent::ReminderDetail { reminder });
    }

    pub fn show_search_results(
        &mut self,
        query: String,
        todos: Vec<TodoViewModel>,
        reminders: Vec<ReminderViewModel>,
    ) {
        self.open(SidebarContent::SearchResults {
            query,
            todos,
            reminders,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
