// Create tab state management.
// Tracks the draft, the focused control, and whether a picker is running.

use crate::todo::{Draft, ImageRef, NewTodo};

/// Focusable controls of the create form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Title,
    Description,
    ImportImage,
    Create,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Description,
            FormFocus::Description => FormFocus::ImportImage,
            FormFocus::ImportImage => FormFocus::Create,
            FormFocus::Create => FormFocus::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Create,
            FormFocus::Description => FormFocus::Title,
            FormFocus::ImportImage => FormFocus::Description,
            FormFocus::Create => FormFocus::ImportImage,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FormFocus::Title | FormFocus::Description)
    }
}

/// State for the create form.
#[derive(Debug, Default)]
pub struct FormState {
    pub draft: Draft,
    pub focus: FormFocus,
    /// A picker session is in flight; only one may run at a time.
    pub picker_pending: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the focused field, if it is a text field.
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            FormFocus::Title => Some(&mut self.draft.title),
            FormFocus::Description => Some(&mut self.draft.description),
            FormFocus::ImportImage | FormFocus::Create => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Mark a picker launch. Returns false if one is already running.
    pub fn begin_pick(&mut self) -> bool {
        if self.picker_pending {
            return false;
        }
        self.picker_pending = true;
        true
    }

    /// Finish the picker session; a selection replaces the draft image.
    pub fn finish_pick(&mut self, image: Option<ImageRef>) {
        self.picker_pending = false;
        if let Some(image) = image {
            self.draft.image = Some(image);
        }
    }

    /// Submit the draft. On success the form returns to the title field.
    pub fn submit(&mut self) -> Option<NewTodo> {
        let todo = self.draft.submit()?;
        self.focus = FormFocus::Title;
        Some(todo)
    }
}
