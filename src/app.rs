// App state and main event loop.
// Manages tabs, the todo collection, the create form, and picker completions.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::picker::{BrowseSession, ImagePicker, PickOutcome, PickerRequest};
use crate::state::{FormFocus, FormState, TodoListState};
use crate::todo::{TodoCollection, TodoId};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    List,
    Create,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::List, Tab::Create];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::List => "List",
            Tab::Create => "Create/Update",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::List => 0,
            Tab::Create => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::List => Tab::Create,
            Tab::Create => Tab::List,
        }
    }

    pub fn prev(&self) -> Self {
        // Two tabs: previous and next coincide.
        self.next()
    }
}

/// Events delivered to the event loop from background tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// The picker task finished.
    PickerResolved(PickOutcome),
    /// The picker task failed before producing an outcome.
    PickerFailed(String),
    /// The browse picker wants the UI to show its modal.
    BrowseRequested(BrowseSession),
}

/// Open browse modal with its highlighted entry.
#[derive(Debug)]
pub struct BrowseModal {
    pub session: BrowseSession,
    pub selection: usize,
}

/// Main application state.
pub struct App {
    /// Currently active tab.
    pub active_tab: Tab,
    /// All todos, in display order.
    pub todos: TodoCollection,
    /// List tab selection.
    pub list: TodoListState,
    /// Create tab form.
    pub form: FormState,
    /// Browse picker modal, when a session is waiting on the user.
    pub browse: Option<BrowseModal>,
    /// One-line message for the status bar.
    pub status: Option<String>,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    picker: Arc<dyn ImagePicker>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(
        picker: Arc<dyn ImagePicker>,
        events_tx: UnboundedSender<AppEvent>,
        events_rx: UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            active_tab: Tab::default(),
            todos: TodoCollection::new(),
            list: TodoListState::new(),
            form: FormState::new(),
            browse: None,
            status: None,
            show_help: false,
            should_quit: false,
            picker,
            events_tx,
            events_rx,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_terminal_events()?;
            while let Ok(event) = self.events_rx.try_recv() {
                self.handle_app_event(event);
            }
        }
        Ok(())
    }

    /// Switch to the tab at `index`. Unknown indices are ignored.
    pub fn set_active_index(&mut self, index: usize) {
        if let Some(tab) = Tab::from_index(index) {
            self.active_tab = tab;
        }
    }

    /// Handle keyboard and other terminal events.
    #[allow(clippy::collapsible_if)]
    fn handle_terminal_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        self.status = None;

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        if self.browse.is_some() {
            self.handle_browse_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => self.active_tab = self.active_tab.next(),
            KeyCode::BackTab => self.active_tab = self.active_tab.prev(),
            _ => match self.active_tab {
                Tab::List => self.handle_list_key(key),
                Tab::Create => self.handle_form_key(key),
            },
        }
    }

    /// Keys shared by every non-editing context.
    fn handle_command_char(&mut self, c: char) {
        match c {
            'q' => self.should_quit = true,
            '?' => self.show_help = true,
            '1' => self.set_active_index(0),
            '2' => self.set_active_index(1),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.todos.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(len),
            KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char(c) => self.handle_command_char(c),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if self.form.picker_pending {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.submit();
            }
            return;
        }

        match key.code {
            KeyCode::Up => self.form.focus = self.form.focus.prev(),
            KeyCode::Down => self.form.focus = self.form.focus.next(),
            KeyCode::Esc => self.form.focus = FormFocus::Create,
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => match self.form.focus {
                FormFocus::Title | FormFocus::Description => {
                    self.form.focus = self.form.focus.next()
                }
                FormFocus::ImportImage => self.request_image(),
                FormFocus::Create => self.submit(),
            },
            KeyCode::Char(c) if self.form.focus.is_text() => self.form.insert_char(c),
            KeyCode::Char(c) => self.handle_command_char(c),
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.browse.as_mut() else {
            return;
        };
        let len = modal.session.entries.len();

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                modal.selection = modal.selection.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if modal.selection + 1 < len {
                    modal.selection += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(modal) = self.browse.take() {
                    modal.session.select(modal.selection);
                }
            }
            KeyCode::Esc => {
                if let Some(modal) = self.browse.take() {
                    modal.session.cancel();
                }
            }
            _ => {}
        }
    }

    /// Submit the create form. An invalid draft is silently ignored.
    pub fn submit(&mut self) {
        if let Some(todo) = self.form.submit() {
            self.todos.add(todo);
            self.list.clamp(self.todos.len());
        }
    }

    /// Delete the record under the list cursor.
    fn delete_selected(&mut self) {
        let id = self
            .list
            .selected()
            .and_then(|index| self.todos.get(index))
            .map(|record| record.id);
        if let Some(id) = id {
            self.delete(id);
        }
    }

    pub fn delete(&mut self, id: TodoId) {
        if self.todos.remove(id).is_some() {
            self.list.clamp(self.todos.len());
        }
    }

    /// Launch the picker in the background. Ignored while one is running.
    pub fn request_image(&mut self) {
        if !self.form.begin_pick() {
            return;
        }
        info!("image picker launched");

        let picker = Arc::clone(&self.picker);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let event = match picker.pick(PickerRequest::default()).await {
                Ok(outcome) => AppEvent::PickerResolved(outcome),
                Err(e) => AppEvent::PickerFailed(e.to_string()),
            };
            // The loop is gone when the app is shutting down.
            let _ = events.send(event);
        });
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PickerResolved(PickOutcome::Selected(image)) => {
                info!(%image, "image picked");
                self.form.finish_pick(Some(image));
            }
            AppEvent::PickerResolved(PickOutcome::Cancelled) => {
                debug!("image picker cancelled");
                self.form.finish_pick(None);
            }
            AppEvent::PickerFailed(message) => {
                warn!(%message, "image picker failed");
                self.form.finish_pick(None);
                self.status = Some(message);
            }
            AppEvent::BrowseRequested(session) => {
                self.browse = Some(BrowseModal {
                    session,
                    selection: 0,
                });
            }
        }
    }

    /// Wait for the next background event.
    #[cfg(test)]
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }
}
